//! Debug logging to a file in the app directory
//!
//! The TUI owns the terminal, so log lines cannot go to stderr. Logging is
//! off unless `DAILY_PLANNER_DEBUG` is set.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::config::get_app_dir;

pub const DEBUG_ENV: &str = "DAILY_PLANNER_DEBUG";
const LOG_FILE_NAME: &str = "planner.log";
const DEFAULT_FILTER: &str = "daily_planner=debug";

/// Installs the file subscriber when `DAILY_PLANNER_DEBUG` is set.
///
/// Returns the log file path when logging was enabled.
pub fn init_from_env() -> Result<Option<PathBuf>> {
    if std::env::var_os(DEBUG_ENV).is_none() {
        return Ok(None);
    }
    let path = get_app_dir()?.join(LOG_FILE_NAME);
    init_file_logging(&path)?;
    Ok(Some(path))
}

pub fn init_file_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    // RUST_LOG wins over the default filter when present.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::debug!("Logging to {}", path.display());
    Ok(())
}
