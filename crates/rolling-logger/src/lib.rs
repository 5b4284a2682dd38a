//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to stderr and to daily log files
//! `<app>.<date>.log` in a directory, keeping a bounded number of them.
//! File output goes through a non-blocking writer; keep the returned guard
//! alive so buffered lines are flushed on exit.
//!
//! `log` records are bridged into the same subscriber.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Number of daily files kept; older ones are deleted on rotation
pub const DEFAULT_MAX_FILES: usize = 7;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log directory {path}: {source}")]
    Appender {
        path: PathBuf,
        #[source]
        source: InitError,
    },
    #[error("log directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Daily-rotating appender for `<log_dir>/<app_name>.<date>.log`
pub fn file_appender(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    max_files: usize,
) -> Result<RollingFileAppender, LoggerError> {
    let log_dir = log_dir.as_ref();
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(app_name)
        .filename_suffix("log")
        .max_log_files(max_files.max(1))
        .build(log_dir)
        .map_err(|source| LoggerError::Appender {
            path: log_dir.to_path_buf(),
            source,
        })
}

/// Initialize global logging to stderr and the daily files in `log_dir`
///
/// The level filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<WorkerGuard, LoggerError> {
    let log_dir = log_dir.as_ref();
    let mut appender = file_appender(log_dir, app_name, DEFAULT_MAX_FILES)?;

    // Session marker so restarts are easy to find in the file
    writeln!(
        appender,
        "==== {} session started {} ====",
        app_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
    )
    .map_err(|source| LoggerError::Io {
        path: log_dir.to_path_buf(),
        source,
    })?;

    let (file_writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    tracing::info!(dir = %log_dir.display(), app = app_name, "file logging enabled");
    Ok(guard)
}

/// Log an info line through the `log` facade
pub fn info(message: &str) {
    log::info!("{}", message);
}

/// Log an error line through the `log` facade
pub fn error(message: &str) {
    log::error!("{}", message);
}
