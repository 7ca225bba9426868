//! Folder Explorer server.
//!
//! Main entry point: loads configuration, initializes the folder store,
//! and serves the HTTP API until a shutdown signal arrives.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_database::{FolderRepository, FolderStore};

/// Command-line overrides for the server.
#[derive(Debug, Parser)]
#[command(name = "folder-explorer-server", version, about = "Folder hierarchy REST API")]
struct Cli {
    /// Directory holding `default.toml` and per-environment overlays
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Environment overlay to load (defaults to `FOLDER_EXPLORER_ENV` or `development`)
    #[arg(long)]
    env: Option<String>,

    /// Override the server host
    #[arg(long)]
    host: Option<String>,

    /// Override the server port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment, then apply CLI overrides
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let env = cli
        .env
        .clone()
        .or_else(|| std::env::var("FOLDER_EXPLORER_ENV").ok())
        .unwrap_or_else(|| "development".to_string());

    let mut config = AppConfig::load(&cli.config_dir, &env)?;

    if let Some(ref host) = cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Folder Explorer v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(FolderRepository::new(config.database.clone()));
    store.initialize().await?;

    let state = explorer_api::AppState::new(store.clone());
    let app = explorer_api::build_app(state, &config.server.cors);

    let served = explorer_api::app::run_server(&config.server, app, async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    })
    .await;

    store.close().await;
    tracing::info!("Folder Explorer shut down");
    served
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
