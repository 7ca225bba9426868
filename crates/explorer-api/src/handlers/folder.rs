//! Folder CRUD handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use explorer_core::error::AppError;
use explorer_entity::folder::{CreateFolder, Folder};

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::{FolderIdPath, ValidatedJson};
use crate::state::AppState;

/// GET /api/folders
pub async fn list_folders(State(state): State<AppState>) -> Result<Json<Vec<Folder>>, ApiError> {
    let folders = state
        .folder_store
        .list_all()
        .await
        .map_err(|e| e.with_context("Failed to fetch folders"))?;
    Ok(Json(folders))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    FolderIdPath(id): FolderIdPath,
) -> Result<Json<Folder>, ApiError> {
    let folder = state
        .folder_store
        .find_by_id(id)
        .await
        .map_err(|e| e.with_context("Failed to fetch folder"))?
        .ok_or_else(|| AppError::not_found("Folder not found"))?;
    Ok(Json(folder))
}

/// GET /api/folders/{id}/subfolders
pub async fn list_subfolders(
    State(state): State<AppState>,
    FolderIdPath(id): FolderIdPath,
) -> Result<Json<Vec<Folder>>, ApiError> {
    let subfolders = state
        .folder_store
        .find_children(id)
        .await
        .map_err(|e| e.with_context("Failed to fetch subfolders"))?;
    Ok(Json(subfolders))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateFolderRequest>,
) -> Result<(StatusCode, Json<Folder>), ApiError> {
    let data = CreateFolder::from(req);
    let folder = state
        .folder_store
        .create(&data)
        .await
        .map_err(|e| e.with_context("Failed to create folder"))?;
    Ok((StatusCode::CREATED, Json(folder)))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    FolderIdPath(id): FolderIdPath,
) -> Result<Json<MessageResponse>, ApiError> {
    let deleted = state
        .folder_store
        .delete(id)
        .await
        .map_err(|e| e.with_context("Failed to delete folder"))?;

    if !deleted {
        return Err(AppError::not_found("Failed to delete folder").into());
    }

    tracing::info!(folder_id = id, "Folder deleted");
    Ok(Json(MessageResponse::new("Folder deleted successfully")))
}
