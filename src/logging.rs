//! Tracing subscriber setup.
//!
//! CLI commands and the web server log to stderr. The terminal UI owns the
//! screen, so it logs to a file in the config directory instead.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_filter(verbose: bool) -> EnvFilter {
    let filter = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into())
}

/// Logs to stderr. `RUST_LOG` overrides the level chosen by `verbose`.
pub fn init_stderr(verbose: bool) {
    // A subscriber may already be installed (tests, repeated init).
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Appends logs to `path`, creating parent directories as needed.
pub fn init_file(path: &Path, verbose: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init();

    Ok(())
}
