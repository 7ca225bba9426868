//! Folder domain entities.

pub mod model;
pub mod path;

pub use model::{CreateFolder, Folder};
pub use path::{MAX_PATH_LENGTH, PATH_SEPARATOR, child_path, path_fits, root_path};
