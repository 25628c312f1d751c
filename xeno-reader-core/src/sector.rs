//! Raw CD sector layout and user-data extraction.
//!
//! Every sector on the disc is a 2352-byte Mode 2 block:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0      | 12   | Sync pattern |
//! | 12     | 4    | Header (MSF + mode) |
//! | 16     | 8    | Sub-header, stored twice |
//! | 24     | 2048 / 2324 | User data |
//! | ...    | 280 / 4 | EDC/ECC tail |
//!
//! Only the user-data region is ever interpreted. Which of the two data sizes
//! applies is a build-time choice (the `form2` feature).

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Raw CD sector size (sync + header + subheader + data + EDC/ECC).
pub const RAW_SECTOR_SIZE: usize = 2352;

/// Sync pattern length at the start of every raw sector.
pub const SYNC_SIZE: usize = 12;

/// MSF address + mode byte.
pub const HEADER_SIZE: usize = 4;

/// Two copies of the 4-byte Mode 2 sub-header.
pub const SUBHEADER_SIZE: usize = 8;

/// Offset to user data within a Mode 2 raw sector.
/// 12 (sync) + 4 (header) + 8 (subheader) = 24.
pub const DATA_OFFSET: usize = SYNC_SIZE + HEADER_SIZE + SUBHEADER_SIZE;

/// User data bytes per sector for Mode 2 Form 1.
#[cfg(not(feature = "form2"))]
pub const DATA_SIZE: usize = 2048;

/// User data bytes per sector for Mode 2 Form 2.
#[cfg(feature = "form2")]
pub const DATA_SIZE: usize = 2324;

/// Trailing error detection/correction bytes, never interpreted.
pub const EDC_SIZE: usize = RAW_SECTOR_SIZE - DATA_OFFSET - DATA_SIZE;

/// Human-readable name of the configured sector mode.
pub const fn mode_name() -> &'static str {
    if cfg!(feature = "form2") {
        "Mode 2 Form 2"
    } else {
        "Mode 2 Form 1"
    }
}

// ---------------------------------------------------------------------------
// Raw sector
// ---------------------------------------------------------------------------

/// One full sector as read from the image.
#[derive(Clone)]
pub struct RawSector {
    index: u64,
    bytes: Box<[u8; RAW_SECTOR_SIZE]>,
}

impl RawSector {
    pub fn new(index: u64, bytes: Box<[u8; RAW_SECTOR_SIZE]>) -> Self {
        Self { index, bytes }
    }

    /// Absolute sector index this block was read from.
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn as_bytes(&self) -> &[u8; RAW_SECTOR_SIZE] {
        &self.bytes
    }

    /// The user-data region of this sector.
    pub fn data(&self) -> &[u8; DATA_SIZE] {
        data_region(&self.bytes)
    }
}

impl std::fmt::Debug for RawSector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawSector")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/// Slice the user-data region out of a raw sector.
pub fn data_region(raw: &[u8; RAW_SECTOR_SIZE]) -> &[u8; DATA_SIZE] {
    raw[DATA_OFFSET..DATA_OFFSET + DATA_SIZE]
        .try_into()
        .expect("data region lies within the raw sector")
}

#[cfg(test)]
#[path = "tests/sector_tests.rs"]
mod tests;
