use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use banjara_core::Config;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "banjara.log";

/// Send tracing output to a log file; stderr is owned by the terminal UI.
///
/// `RUST_LOG` wins over the configured level.
pub fn init(default_level: &str) -> Result<PathBuf> {
    let log_dir = Config::get_log_dir()?;
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join(LOG_FILE);

    let file = OpenOptions::new().create(true).append(true).open(&log_path)?;
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

    Ok(log_path)
}
