//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use explorer_core::error::AppError;

use crate::error::ApiError;

/// A folder id taken from the `{id}` path segment.
///
/// Rejects anything that is not a positive integer with a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderIdPath(pub i64);

impl<S> FromRequestParts<S> for FolderIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation("Invalid folder ID"))?;
        Ok(Self(parse_folder_id(&raw)?))
    }
}

/// Parses a folder id from a path segment.
pub fn parse_folder_id(s: &str) -> Result<i64, AppError> {
    match s.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::validation("Invalid folder ID")),
    }
}
