//! Tracing subscriber initialization.
//!
//! Logs are written to a file so they never draw over the terminal UI.
//! Follow them with `tail -f` in a separate terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log file's parent directory could not be created.
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The path has no usable file name component.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// A global subscriber was installed earlier in this process.
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Keeps the background log writer alive. Dropping it flushes pending lines.
#[must_use = "dropping the guard stops the log writer"]
pub struct LogGuard {
    _worker: WorkerGuard,
}

/// Split a log path into (directory, file name), creating the directory.
///
/// A bare file name resolves to the current directory.
pub fn prepare_log_path(log_path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?
        .to_string();

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    Ok((directory, file_name))
}

/// Install the global file-backed subscriber.
///
/// Respects `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
///
/// # Errors
///
/// Fails if the log directory cannot be created, the path has no file name,
/// or a global subscriber is already installed.
pub fn init(log_path: &Path) -> Result<LogGuard, LoggingError> {
    use tracing_subscriber::EnvFilter;

    let (directory, file_name) = prepare_log_path(log_path)?;
    let (writer, worker) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)?;

    Ok(LogGuard { _worker: worker })
}
