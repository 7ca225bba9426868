//! # explorer-entity
//!
//! Domain entity models for Folder Explorer. Every struct in this crate
//! represents a database table row or the input used to create one.
//! Row entities derive `sqlx::FromRow`.

pub mod folder;

pub use folder::{CreateFolder, Folder};
