//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use explorer_entity::folder::{CreateFolder, PATH_SEPARATOR};

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(
        length(max = 255, message = "Folder name must be at most 255 characters"),
        custom(function = "validate_folder_name")
    )]
    pub name: String,
    /// Parent folder ID, absent or null for a root folder.
    #[serde(default)]
    pub parent_id: Option<i64>,
}

impl From<CreateFolderRequest> for CreateFolder {
    fn from(req: CreateFolderRequest) -> Self {
        Self {
            name: req.name.trim().to_string(),
            parent_id: req.parent_id,
        }
    }
}

fn validate_folder_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Folder name is required".into());
        return Err(err);
    }
    if name.contains(PATH_SEPARATOR) {
        let mut err = ValidationError::new("separator");
        err.message = Some(format!("Folder name must not contain '{PATH_SEPARATOR}'").into());
        return Err(err);
    }
    Ok(())
}
