//! Error types for adamui.
//!
//! The widgets themselves never fail: every interaction handler is a total
//! function over current state and event. Failures only arise at the edges:
//!
//! - [`InstallError`] - the `add` command (unknown component, source read,
//!   destination write, confirmation prompt)
//! - [`DataError`] - loading demo data files (read, JSON parse)
//! - [`AppError`] - top-level error for the demo application, wrapping
//!   terminal I/O and data loading failures
//!
//! All of them are fatal for the command that raised them: `main` prints the
//! message to stderr and exits with a non-zero status. No partial-write
//! rollback is attempted by the installer.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for the interactive demo.
#[derive(Debug, Error)]
pub enum AppError {
    /// Demo data could not be loaded.
    #[error("Failed to load demo data: {0}")]
    Data(#[from] DataError),

    /// Terminal or TUI rendering error.
    ///
    /// Covers raw-mode switching, event polling and drawing through the
    /// crossterm backend.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors loading a demo data file.
#[derive(Debug, Error)]
pub enum DataError {
    /// The data file could not be read.
    #[error("Failed to read {path:?}: {source}")]
    Read {
        /// File involved.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid JSON for the expected shape.
    #[error("Invalid data in {path:?}: {source}")]
    Parse {
        /// File involved.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by `adamui add`.
#[derive(Debug, Error)]
pub enum InstallError {
    /// The requested component is not in the registry.
    #[error("Unknown component: {0}")]
    UnknownComponent(String),

    /// The source directory for a component does not exist.
    #[error("Component source not found at {0:?}")]
    MissingSource(PathBuf),

    /// A component source file could not be read.
    #[error("Failed to read {path:?}: {source}")]
    SourceRead {
        /// File involved.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Writing into the destination project failed.
    #[error("Failed to write {path:?}: {source}")]
    Write {
        /// File involved.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading the confirmation answer failed.
    #[error("Failed to read confirmation: {0}")]
    Prompt(#[source] std::io::Error),
}
