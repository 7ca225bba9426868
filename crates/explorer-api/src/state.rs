//! Application state shared across all handlers.

use std::sync::Arc;

use explorer_database::store::FolderStore;

/// Application state passed to every Axum handler via `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Folder persistence, initialized before the router is built.
    pub folder_store: Arc<dyn FolderStore>,
}

impl AppState {
    /// Wrap an initialized store.
    pub fn new(folder_store: Arc<dyn FolderStore>) -> Self {
        Self { folder_store }
    }
}
