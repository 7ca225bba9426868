//! Shared test helpers for integration tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::Utc;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use explorer_api::AppState;
use explorer_core::config::CorsConfig;
use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_database::FolderStore;
use explorer_entity::folder::{
    CreateFolder, Folder, MAX_PATH_LENGTH, child_path, path_fits, root_path,
};

/// In-memory [`FolderStore`] with the same ordering, path, and cascade
/// semantics as the PostgreSQL repository.
#[derive(Debug, Default)]
pub struct MemoryFolderStore {
    inner: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    initialized: bool,
    next_id: i64,
    rows: Vec<Folder>,
}

impl MemoryFolderStore {
    fn state(&self) -> AppResult<std::sync::MutexGuard<'_, MemoryState>> {
        let state = self.inner.lock().expect("memory store poisoned");
        if !state.initialized {
            return Err(AppError::not_initialized("Database not initialized"));
        }
        Ok(state)
    }
}

fn sorted_by_name(mut folders: Vec<Folder>) -> Vec<Folder> {
    folders.sort_by(|a, b| a.name.cmp(&b.name));
    folders
}

#[async_trait]
impl FolderStore for MemoryFolderStore {
    async fn initialize(&self) -> AppResult<()> {
        self.inner.lock().expect("memory store poisoned").initialized = true;
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Folder>> {
        Ok(sorted_by_name(self.state()?.rows.clone()))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>> {
        Ok(self.state()?.rows.iter().find(|f| f.id == id).cloned())
    }

    async fn find_children(&self, parent_id: i64) -> AppResult<Vec<Folder>> {
        let state = self.state()?;
        let children = state
            .rows
            .iter()
            .filter(|f| f.parent_id == Some(parent_id))
            .cloned()
            .collect();
        Ok(sorted_by_name(children))
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut state = self.state()?;
        let path = match data.parent_id {
            Some(parent_id) => {
                let parent = state
                    .rows
                    .iter()
                    .find(|f| f.id == parent_id)
                    .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
                child_path(&parent.path, &data.name)
            }
            None => root_path(&data.name),
        };
        if !path_fits(&path) {
            return Err(AppError::validation(format!(
                "Folder path must be at most {MAX_PATH_LENGTH} characters"
            )));
        }

        state.next_id += 1;
        let folder = Folder {
            id: state.next_id,
            name: data.name.clone(),
            parent_id: data.parent_id,
            path,
            created_at: Utc::now(),
        };
        state.rows.push(folder.clone());
        Ok(folder)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut state = self.state()?;
        if !state.rows.iter().any(|f| f.id == id) {
            return Ok(false);
        }

        let mut doomed = vec![id];
        let mut i = 0;
        while i < doomed.len() {
            let current = doomed[i];
            doomed.extend(
                state
                    .rows
                    .iter()
                    .filter(|f| f.parent_id == Some(current))
                    .map(|f| f.id),
            );
            i += 1;
        }
        state.rows.retain(|f| !doomed.contains(&f.id));
        Ok(true)
    }

    async fn health_check(&self) -> AppResult<()> {
        self.state().map(|_| ())
    }

    async fn close(&self) {}
}

/// A store whose every operation fails like an unreachable database.
#[derive(Debug, Default)]
pub struct FailingFolderStore;

#[async_trait]
impl FolderStore for FailingFolderStore {
    async fn initialize(&self) -> AppResult<()> {
        Err(AppError::database("connection refused"))
    }

    async fn list_all(&self) -> AppResult<Vec<Folder>> {
        Err(AppError::database("connection refused"))
    }

    async fn find_by_id(&self, _id: i64) -> AppResult<Option<Folder>> {
        Err(AppError::database("connection refused"))
    }

    async fn find_children(&self, _parent_id: i64) -> AppResult<Vec<Folder>> {
        Err(AppError::database("connection refused"))
    }

    async fn create(&self, _data: &CreateFolder) -> AppResult<Folder> {
        Err(AppError::database("connection refused"))
    }

    async fn delete(&self, _id: i64) -> AppResult<bool> {
        Err(AppError::database("connection refused"))
    }

    async fn health_check(&self) -> AppResult<()> {
        Err(AppError::database("connection refused"))
    }

    async fn close(&self) {}
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a test application over an initialized in-memory store
    pub async fn new() -> Self {
        let store = MemoryFolderStore::default();
        store.initialize().await.expect("memory store init");
        Self::with_store(Arc::new(store))
    }

    /// Create a test application over the given store
    pub fn with_store(store: Arc<dyn FolderStore>) -> Self {
        let router = explorer_api::build_app(AppState::new(store), &CorsConfig::default());
        Self { router }
    }

    /// POST a folder and return the created body, asserting success
    pub async fn create_folder(&self, name: &str, parent_id: Option<i64>) -> Value {
        let body = serde_json::json!({ "name": name, "parent_id": parent_id });
        let response = self.request("POST", "/api/folders", Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "create failed: {:?}",
            response.body
        );
        response.body
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.raw_request(method, path, Some("application/json"), body_str)
            .await
    }

    /// Make an HTTP request with an arbitrary body and content type
    pub async fn raw_request(
        &self,
        method: &str,
        path: &str,
        content_type: Option<&str>,
        body: String,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);
        if let Some(content_type) = content_type {
            req = req.header("Content-Type", content_type);
        }

        let req = req.body(Body::from(body)).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// Names of a JSON array of folders, in response order
pub fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|f| f["name"].as_str().expect("name").to_string())
        .collect()
}
