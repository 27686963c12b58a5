//! Logging setup
//!
//! The TUI owns the terminal, so logs only go to a file and only when one is
//! requested. `RUST_LOG` overrides the default `info` filter.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install a file subscriber when `log_file` is given
///
/// # Errors
///
/// Returns an error if the file cannot be created or a global subscriber is
/// already installed.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}
