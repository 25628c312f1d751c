use thiserror::Error;

use xeno_reader_lib::{ExtractError, XenoError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Opening or reading the disc image failed
    #[error("{0}")]
    Image(#[from] XenoError),

    /// Extraction or settings error
    #[error("{0}")]
    Extract(#[from] ExtractError),

    /// A directory path or file index that is not in the tree
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CliError {
    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
