//! Database configuration.

use serde::{Deserialize, Serialize};

/// Name of the database that holds the `folders` table.
pub const DATABASE_NAME: &str = "folder_explorer";

/// Database connection and provisioning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL server host.
    #[serde(default = "default_host")]
    pub host: String,
    /// PostgreSQL server port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Login role.
    #[serde(default = "default_user")]
    pub user: String,
    /// Login password (empty for trust authentication).
    #[serde(default)]
    pub password: String,
    /// Database connected to while creating [`DATABASE_NAME`].
    #[serde(default = "default_maintenance_database")]
    pub maintenance_database: String,
    /// SQL script used to seed an empty `folders` table.
    #[serde(default = "default_seed_file")]
    pub seed_file: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default)]
    pub min_connections: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// Idle connection timeout in seconds.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// The database served by this application.
    pub fn database_name(&self) -> &'static str {
        DATABASE_NAME
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: String::new(),
            maintenance_database: default_maintenance_database(),
            seed_file: default_seed_file(),
            max_connections: default_max_connections(),
            min_connections: 0,
            connect_timeout_seconds: default_connect_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5432
}

fn default_user() -> String {
    "postgres".to_string()
}

fn default_maintenance_database() -> String {
    "postgres".to_string()
}

fn default_seed_file() -> String {
    "db/sample-data.sql".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}
