//! Folder repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use explorer_core::config::DatabaseConfig;
use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_entity::folder::{
    CreateFolder, Folder, MAX_PATH_LENGTH, child_path, path_fits, root_path,
};

use crate::connection::DatabasePool;
use crate::schema;
use crate::store::FolderStore;

const SELECT_FOLDER: &str = "SELECT id, name, parent_id, path, created_at FROM folders";

/// PostgreSQL-backed [`FolderStore`].
///
/// The pool is opened by [`FolderStore::initialize`], which also creates the
/// database and table and seeds sample rows.
#[derive(Debug)]
pub struct FolderRepository {
    config: DatabaseConfig,
    db: OnceCell<DatabasePool>,
}

impl FolderRepository {
    /// Create an uninitialized repository.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            db: OnceCell::new(),
        }
    }

    /// Whether [`FolderStore::initialize`] has completed.
    pub fn is_initialized(&self) -> bool {
        self.db.initialized()
    }

    fn pool(&self) -> AppResult<&PgPool> {
        self.db
            .get()
            .map(DatabasePool::pool)
            .ok_or_else(|| AppError::not_initialized("Database not initialized"))
    }

    async fn open(&self) -> AppResult<DatabasePool> {
        DatabasePool::ensure_database(&self.config).await?;
        let db = DatabasePool::connect(&self.config).await?;
        schema::provision(db.pool()).await?;
        schema::seed_if_empty(db.pool(), &self.config.seed_file).await?;
        Ok(db)
    }
}

#[async_trait]
impl FolderStore for FolderRepository {
    async fn initialize(&self) -> AppResult<()> {
        self.db.get_or_try_init(|| self.open()).await?;
        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!("{SELECT_FOLDER} ORDER BY name ASC, id ASC"))
            .fetch_all(self.pool()?)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>(&format!("{SELECT_FOLDER} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool()?)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    async fn find_children(&self, parent_id: i64) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(&format!(
            "{SELECT_FOLDER} WHERE parent_id = $1 ORDER BY name ASC, id ASC"
        ))
        .bind(parent_id)
        .fetch_all(self.pool()?)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let mut tx = self.pool()?.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        // FOR KEY SHARE holds off a concurrent delete of the parent until commit.
        // A foreign-key violation on insert is also reported as a missing parent.
        let path = match data.parent_id {
            Some(parent_id) => {
                let parent_path: String =
                    sqlx::query_scalar("SELECT path FROM folders WHERE id = $1 FOR KEY SHARE")
                        .bind(parent_id)
                        .fetch_optional(&mut *tx)
                        .await
                        .map_err(|e| {
                            AppError::with_source(ErrorKind::Database, "Failed to find parent", e)
                        })?
                        .ok_or_else(|| AppError::not_found("Parent folder not found"))?;
                child_path(&parent_path, &data.name)
            }
            None => root_path(&data.name),
        };
        if !path_fits(&path) {
            return Err(AppError::validation(format!(
                "Folder path must be at most {MAX_PATH_LENGTH} characters"
            )));
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO folders (name, parent_id, path) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&data.name)
        .bind(data.parent_id)
        .bind(&path)
        .fetch_one(&mut *tx)
        .await
        .map_err(insert_error)?;

        let folder = sqlx::query_as::<_, Folder>(&format!("{SELECT_FOLDER} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch folder", e))?
            .ok_or_else(|| AppError::internal("Failed to create folder"))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit folder", e)
        })?;

        info!(folder_id = folder.id, path = %folder.path, "Folder created");
        Ok(folder)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM folders WHERE id = $1")
            .bind(id)
            .execute(self.pool()?)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
            })?;

        let deleted = result.rows_affected() > 0;
        debug!(folder_id = id, deleted, "Folder delete executed");
        Ok(deleted)
    }

    async fn health_check(&self) -> AppResult<()> {
        let db = self
            .db
            .get()
            .ok_or_else(|| AppError::not_initialized("Database not initialized"))?;
        db.health_check().await?;
        Ok(())
    }

    async fn close(&self) {
        if let Some(db) = self.db.get() {
            db.close().await;
        }
    }
}

/// Maps an insert failure, treating a parent foreign-key violation as a
/// missing parent.
fn insert_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::not_found("Parent folder not found")
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to insert folder", e),
    }
}
