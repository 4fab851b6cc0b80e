//! Error taxonomy for the export run.
//!
//! Every variant is fatal: the driver stops at the first error and the
//! binary exits non-zero.
//!
//! CHANGELOG:
//! - 10/16/2026 - Initial implementation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort an export run.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Filesystem error at {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// True for the pre-flight configuration failures.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::ConfigRead { .. } | Self::ConfigParse { .. })
    }

    pub(crate) fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }
}

pub type ExportResult<T> = Result<T, ExportError>;
