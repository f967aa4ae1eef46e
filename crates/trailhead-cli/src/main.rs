//! trailhead - a terminal rendition of the mobile starter.
//!
//! Hosts the session container behind a line-driven shell: restore on
//! startup, sign-in/sign-up/sign-out flows, and guard-driven navigation
//! across the starter's screens.

mod app;
mod config;
mod screens;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trailhead_core::{
    Authenticator, FileStore, KeyValueStore, KeyringStore, MockAuthenticator, SessionManager,
};

use app::App;
use config::{Config, StorageBackend};

/// Directory under the local data dir where log files are written
const LOG_DIR: &str = "logs";

/// Log file name prefix for the daily-rolling appender
const LOG_FILE: &str = "trailhead.log";

/// Initialize tracing with a daily-rolling file appender.
///
/// The shell owns stdout, so logs go to a file. Use the RUST_LOG env var
/// to control the level (e.g. RUST_LOG=debug).
fn init_tracing(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let appender = tracing_appender::rolling::daily(log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Ok(guard)
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("trailhead")
        .join(LOG_DIR)
}

/// Build the session store the config selects.
fn open_store(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.storage {
        StorageBackend::File => {
            let dir = config
                .storage_dir()
                .context("Failed to resolve data directory")?;
            Arc::new(FileStore::new(dir).context("Failed to open session store")?)
        }
        StorageBackend::Keyring => Arc::new(KeyringStore::new()),
    };
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let _log_guard = init_tracing(&default_log_dir())?;
    info!("trailhead starting");

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    };
    debug!(backend = ?config.storage, "Config loaded");

    let store = open_store(&config)?;
    let session = SessionManager::new(store);
    let authenticator: Arc<dyn Authenticator> = Arc::new(MockAuthenticator::new());

    let mut app = App::new(config, session, authenticator);
    app.run().await?;

    info!("trailhead shutting down");
    Ok(())
}
