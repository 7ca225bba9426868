//! PostgreSQL connection pool management.

use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::{Connection, PgConnection};
use tracing::{info, warn};

use explorer_core::config::DatabaseConfig;
use explorer_core::error::{AppError, ErrorKind};

/// SQLSTATE raised when `CREATE DATABASE` races with another creator.
const DUPLICATE_DATABASE: &str = "42P04";

/// Wrapper around the sqlx PostgreSQL connection pool.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    /// The underlying sqlx connection pool.
    pool: PgPool,
}

impl DatabasePool {
    /// Create a new pool connected to the application database.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let database = config.database_name();
        info!(
            host = %config.host,
            port = config.port,
            user = %config.user,
            database,
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(connect_options(config, database))
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })?;

        info!("Successfully connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Create the application database if it does not exist yet.
    ///
    /// Uses a single short-lived connection to the maintenance database.
    pub async fn ensure_database(config: &DatabaseConfig) -> Result<(), AppError> {
        let database = config.database_name();
        let mut conn =
            PgConnection::connect_with(&connect_options(config, &config.maintenance_database))
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        format!("Failed to connect to maintenance database: {e}"),
                        e,
                    )
                })?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM pg_database WHERE datname = $1)")
                .bind(database)
                .fetch_one(&mut conn)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to look up database", e)
                })?;

        if !exists {
            // Identifiers cannot be bound as parameters.
            let statement = format!("CREATE DATABASE \"{database}\"");
            match sqlx::query(&statement).execute(&mut conn).await {
                Ok(_) => info!(database, "Created database"),
                Err(sqlx::Error::Database(ref db_err))
                    if db_err.code().as_deref() == Some(DUPLICATE_DATABASE) =>
                {
                    warn!(database, "Database was created concurrently");
                }
                Err(e) => {
                    return Err(AppError::with_source(
                        ErrorKind::Database,
                        format!("Failed to create database '{database}'"),
                        e,
                    ));
                }
            }
        }

        if let Err(e) = conn.close().await {
            warn!(error = %e, "Failed to close maintenance connection cleanly");
        }
        Ok(())
    }

    /// Return a reference to the underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database connectivity.
    pub async fn health_check(&self) -> Result<bool, AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }

    /// Close all connections in the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

/// Build connection options for `database` from the configured server settings.
pub fn connect_options(config: &DatabaseConfig, database: &str) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(database);

    if config.password.is_empty() {
        options
    } else {
        options.password(&config.password)
    }
}
