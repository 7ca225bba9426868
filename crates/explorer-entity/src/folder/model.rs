//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A folder in the hierarchy, as stored in the `folders` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier, assigned by the database.
    pub id: i64,
    /// Folder name. Not unique among siblings.
    pub name: String,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<i64>,
    /// Materialized path computed at creation (e.g., `/Documents/Reports`).
    pub path: String,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (None for a root folder).
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl CreateFolder {
    /// Input for a root-level folder.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_id: None,
        }
    }

    /// Input for a folder nested under `parent_id`.
    pub fn child(name: impl Into<String>, parent_id: i64) -> Self {
        Self {
            name: name.into(),
            parent_id: Some(parent_id),
        }
    }
}
