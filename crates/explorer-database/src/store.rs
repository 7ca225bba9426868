//! The folder store abstraction consumed by the HTTP layer.

use async_trait::async_trait;

use explorer_core::result::AppResult;
use explorer_entity::folder::{CreateFolder, Folder};

/// Durable persistence and retrieval of [`Folder`] rows.
///
/// [`FolderStore::initialize`] must complete before any other method is
/// called; implementations fail with
/// [`ErrorKind::NotInitialized`](explorer_core::ErrorKind::NotInitialized)
/// otherwise.
#[async_trait]
pub trait FolderStore: Send + Sync + 'static {
    /// Prepare the backing storage. Calling it again is a no-op.
    async fn initialize(&self) -> AppResult<()>;

    /// All folders ordered by name.
    async fn list_all(&self) -> AppResult<Vec<Folder>>;

    /// The folder with `id`, or `None` if there is no such row.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>>;

    /// Direct children of `parent_id` ordered by name. The parent itself is
    /// not required to exist.
    async fn find_children(&self, parent_id: i64) -> AppResult<Vec<Folder>>;

    /// Insert a folder, deriving its materialized path from the parent.
    ///
    /// Fails with a not-found error when `data.parent_id` names no folder.
    async fn create(&self, data: &CreateFolder) -> AppResult<Folder>;

    /// Delete a folder and, through the cascade, its descendants.
    /// Returns `false` when no row had that id.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Round-trip to the backing storage.
    async fn health_check(&self) -> AppResult<()>;

    /// Release held resources.
    async fn close(&self);
}
