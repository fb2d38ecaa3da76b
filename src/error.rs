//! Error types for the plugin packager.
//!
//! This module defines semantic error variants for the packaging run. The
//! single deliberate domain error is the missing build-output directory;
//! everything else wraps the underlying I/O, JSON, or archive failure and
//! propagates it unmodified to the process boundary.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur during a packaging run.
#[derive(Debug, Error)]
pub enum PackagerError {
    /// The mandatory frontend build output directory is absent.
    #[error("build output directory {path} not found; run the frontend build first")]
    MissingBuildOutput {
        /// Path where the build output was expected.
        path: Utf8PathBuf,
    },

    /// The plugin manifest could not be read from disk.
    #[error("failed to read manifest {path}")]
    ManifestRead {
        /// Path to the manifest file.
        path: Utf8PathBuf,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// The plugin manifest is not valid JSON.
    #[error("invalid manifest {path}: {source}")]
    ManifestParse {
        /// Path to the manifest file.
        path: Utf8PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to copy plugin files into the staging directory.
    #[error("staging failed: {reason}")]
    StagingFailed {
        /// Description of the staging failure.
        reason: String,
    },

    /// An archive entry path fell outside the output directory.
    #[error("archive entry {path} is outside the output directory")]
    EntryEscapesOutput {
        /// The offending entry path.
        path: Utf8PathBuf,
    },

    /// Writing the zip archive failed.
    #[error("archive write error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A filesystem path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path {
        /// The non-UTF-8 path.
        path: std::path::PathBuf,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`PackagerError`].
pub type Result<T> = std::result::Result<T, PackagerError>;
