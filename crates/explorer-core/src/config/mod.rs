//! Application configuration schemas.
//!
//! Configuration is merged by the `config` crate from built-in defaults,
//! optional TOML files, and environment variables. Each sub-module
//! represents a logical configuration section.

pub mod app;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DATABASE_NAME, DatabaseConfig};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix of the nested environment overrides, e.g. `FOLDER_EXPLORER__SERVER__PORT`.
pub const ENV_PREFIX: &str = "FOLDER_EXPLORER";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The short `DB_*` variables that override the database section.
#[derive(Debug, Clone, Default)]
pub struct DatabaseEnv {
    /// `DB_HOST`
    pub host: Option<String>,
    /// `DB_USER`
    pub user: Option<String>,
    /// `DB_PASSWORD`
    pub password: Option<String>,
    /// `DB_PORT`
    pub port: Option<String>,
}

impl DatabaseEnv {
    /// Read the overrides from the process environment.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("DB_HOST").ok(),
            user: std::env::var("DB_USER").ok(),
            password: std::env::var("DB_PASSWORD").ok(),
            port: std::env::var("DB_PORT").ok(),
        }
    }
}

impl AppConfig {
    /// Load configuration for the given environment.
    ///
    /// Merges `{config_dir}/default.toml`, `{config_dir}/{env}.toml`,
    /// variables prefixed with `FOLDER_EXPLORER__`, and the `DB_*` variables,
    /// in that order. Every file is optional.
    pub fn load(config_dir: &str, env: &str) -> Result<Self, AppError> {
        Self::load_with(config_dir, env, &DatabaseEnv::from_env())
    }

    /// Same as [`AppConfig::load`] with explicit database overrides.
    pub fn load_with(config_dir: &str, env: &str, db_env: &DatabaseEnv) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{config_dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{config_dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("database.host", db_env.host.clone())?
            .set_override_option("database.user", db_env.user.clone())?
            .set_override_option("database.password", db_env.password.clone())?
            .set_override_option("database.port", db_env.port.clone())?
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
