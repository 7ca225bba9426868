//! Convenience result type alias for Folder Explorer.

use crate::error::AppError;

/// A specialized `Result` type for Folder Explorer operations.
pub type AppResult<T> = Result<T, AppError>;
