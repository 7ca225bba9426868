//! # explorer-api
//!
//! HTTP API layer for Folder Explorer built on Axum.
//!
//! Provides the folder REST endpoints, a health probe, request logging and
//! CORS middleware, extractors, DTOs, and [`ApiError`], which maps
//! [`AppError`] to HTTP responses.
//!
//! [`AppError`]: explorer_core::AppError

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::ApiError;
pub use state::AppState;
