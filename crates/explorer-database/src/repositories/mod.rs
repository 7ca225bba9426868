//! Repository implementations.

pub mod folder;

pub use folder::FolderRepository;
