//! Schema provisioning and sample-data seeding.
//!
//! There is no migration history: the `folders` table is created with
//! `IF NOT EXISTS` on every startup and seeded once while it is empty.

use std::io::ErrorKind as IoErrorKind;

use sqlx::PgPool;
use tracing::{info, warn};

use explorer_core::error::{AppError, ErrorKind};

/// DDL for the self-referencing `folders` table.
pub const CREATE_FOLDERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS folders (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    parent_id BIGINT NULL REFERENCES folders(id) ON DELETE CASCADE,
    path VARCHAR(1000) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Index backing the subfolder lookup.
pub const CREATE_PARENT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_folders_parent_id ON folders(parent_id)";

/// Create the `folders` table and its index if they do not exist.
pub async fn provision(pool: &PgPool) -> Result<(), AppError> {
    info!("Provisioning folders schema...");

    for statement in [CREATE_FOLDERS_TABLE, CREATE_PARENT_INDEX] {
        sqlx::query(statement)
            .persistent(false)
            .execute(pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to provision schema: {e}"),
                    e,
                )
            })?;
    }

    info!("Folders schema ready");
    Ok(())
}

/// Seed the `folders` table from `seed_file` when it holds no rows.
///
/// Returns the number of statements executed. A missing seed file is
/// logged and treated as an empty script.
pub async fn seed_if_empty(pool: &PgPool, seed_file: &str) -> Result<usize, AppError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM folders")
        .fetch_one(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count folders", e))?;

    if count > 0 {
        info!(rows = count, "Folders table already populated, skipping seed");
        return Ok(0);
    }

    let script = match tokio::fs::read_to_string(seed_file).await {
        Ok(script) => script,
        Err(e) if e.kind() == IoErrorKind::NotFound => {
            warn!(seed_file, "Seed file not found, starting with an empty table");
            return Ok(0);
        }
        Err(e) => {
            return Err(AppError::with_source(
                ErrorKind::Io,
                format!("Failed to read seed file '{seed_file}'"),
                e,
            ));
        }
    };

    let statements = split_statements(&script);
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin seed", e))?;

    for statement in &statements {
        sqlx::query(statement)
            .persistent(false)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to execute seed statement: {e}"),
                    e,
                )
            })?;
    }

    tx.commit()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit seed", e))?;

    info!(seed_file, statements = statements.len(), "Seeded folders table");
    Ok(statements.len())
}

/// Split a SQL script on `;` into individual statements.
///
/// Chunks that are blank or consist only of `--` comment lines are dropped.
/// Semicolons inside string literals are not supported.
pub fn split_statements(script: &str) -> Vec<&str> {
    script
        .split(';')
        .map(str::trim)
        .filter(|chunk| {
            chunk.lines().any(|line| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with("--")
            })
        })
        .collect()
}
