//! Tracing subscriber setup.
//!
//! CLI commands log to stderr. The terminal UI owns stdout and the alternate
//! screen, so it logs to a file in the config directory instead.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::LOG_FILE_NAME;

/// Default filter directive for the requested verbosity.
///
/// `RUST_LOG` always wins over this.
#[must_use]
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose).into())
}

/// Initializes logging to stderr for headless commands.
pub fn init_stderr(verbose: bool) {
    // try_init: a subscriber may already be installed (e.g. in tests)
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Initializes logging to the log file used by the terminal UI.
///
/// Returns the path of the log file.
pub fn init_file(verbose: bool) -> Result<PathBuf> {
    let log_dir = Config::config_dir()?;
    fs::create_dir_all(&log_dir).context(format!(
        "Failed to create log directory: {}",
        log_dir.display()
    ))?;

    let log_path = log_dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context(format!("Failed to open log file: {}", log_path.display()))?;

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    Ok(log_path)
}
