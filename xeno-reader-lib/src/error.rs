use std::path::PathBuf;

use thiserror::Error;
use xeno_reader_core::XenoError;

/// Errors from extraction and settings handling.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Reading from the disc image failed
    #[error("{0}")]
    Image(#[from] XenoError),

    /// Writing to the host filesystem failed
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings file could not be read or parsed
    #[error("Settings error: {0}")]
    Settings(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
