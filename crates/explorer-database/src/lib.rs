//! # explorer-database
//!
//! PostgreSQL connection management, schema provisioning and seeding, and
//! the [`FolderStore`] implementation backed by the `folders` table.

pub mod connection;
pub mod repositories;
pub mod schema;
pub mod store;

pub use connection::DatabasePool;
pub use repositories::FolderRepository;
pub use store::FolderStore;
