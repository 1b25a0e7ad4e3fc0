//! Logging configuration with rolling file appender.
//!
//! The game owns the terminal while it runs, so logs go to daily rolling
//! files under the data directory and never to stdout or stderr.

use crate::utils::persistence;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info,dino_runner=debug,dino=debug";

/// Get the logs directory path
pub fn logs_dir() -> PathBuf {
    persistence::data_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|_| PathBuf::from("logs"))
}

/// Initialize file logging. Keep the returned guard alive for the life of
/// the process so buffered lines are flushed on exit.
///
/// Override the level with the `RUST_LOG` environment variable.
pub fn init_logging() -> tracing_appender::non_blocking::WorkerGuard {
    let logs_dir = logs_dir();

    // Before raw mode, so stderr is still readable
    if let Err(e) = std::fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Failed to create logs directory: {}", e);
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &logs_dir, "dino.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
