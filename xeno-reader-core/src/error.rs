use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while opening or reading a disc image.
#[derive(Debug, Error)]
pub enum XenoError {
    /// The image path could not be opened or inspected
    #[error("Image not found: {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image length is not one of the known disc sizes
    #[error("Unexpected image size: {bytes} bytes ({sectors} sectors)")]
    BadSize { bytes: u64, sectors: u64 },

    /// Boot or disc identification bytes did not match
    #[error("Bad signature: {0}")]
    BadSignature(String),

    /// Sector index beyond the end of the image
    #[error("Sector {index} out of range (image has {count} sectors)")]
    OutOfRange { index: u64, count: u64 },

    /// Fewer bytes were available than a full sector
    #[error("Short read at sector {index}: expected {expected} bytes, got {actual}")]
    ShortRead {
        index: u64,
        expected: usize,
        actual: usize,
    },

    /// Subtree span arithmetic does not account for the table entries
    #[error("Malformed table of contents: {0}")]
    MalformedTable(String),

    /// Attempt to read the 0xFFFFFF padding slot as file content
    #[error("File entry is a padding slot, not a real file")]
    PaddingFile,

    /// File entry with a zero or negative byte size
    #[error("File entry at sector {sector} has no content (size {size})")]
    EmptyFile { sector: u32, size: i32 },

    /// Any other I/O failure on the backing image
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl XenoError {
    pub fn bad_signature(msg: impl Into<String>) -> Self {
        Self::BadSignature(msg.into())
    }

    pub fn malformed_table(msg: impl Into<String>) -> Self {
        Self::MalformedTable(msg.into())
    }
}
