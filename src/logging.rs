//! Tracing subscriber setup.

use crate::config::Config;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Where log lines are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The configured log file; used while the terminal UI owns the screen.
    File,
    /// Standard error; used by the one-shot commands.
    Stderr,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over the configured filter. Calling this twice is harmless.
pub fn init(config: &Config, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    match target {
        LogTarget::File => {
            let log_file = std::fs::File::create(config.log_file()).with_context(|| {
                format!("Failed to create log file {}", config.log_file().display())
            })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .try_init();
        }
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
    Ok(())
}
