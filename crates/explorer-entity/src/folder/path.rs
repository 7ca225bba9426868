//! Materialized path construction.

/// Separator between path components.
pub const PATH_SEPARATOR: char = '/';

/// Longest materialized path the `folders.path` column holds, in characters.
pub const MAX_PATH_LENGTH: usize = 1000;

/// Whether `path` fits in the `folders.path` column.
pub fn path_fits(path: &str) -> bool {
    path.chars().count() <= MAX_PATH_LENGTH
}

/// Path of a folder created at the root: `/name`.
pub fn root_path(name: &str) -> String {
    format!("{PATH_SEPARATOR}{name}")
}

/// Path of a folder created under a parent whose path is `parent_path`.
pub fn child_path(parent_path: &str, name: &str) -> String {
    format!("{parent_path}{PATH_SEPARATOR}{name}")
}
