//! Decoding of the packed table of contents.
//!
//! The table occupies sectors 24 through 39. Their data regions are joined
//! into one buffer which holds back-to-back 7-byte records:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0      | 3    | Starting sector (LE u24) |
//! | 3      | 4    | Size (LE i32): bytes for a file, `-span` for a directory |
//!
//! Records whose sector field is zero are empty slots and never surface.

use crate::error::XenoError;
use crate::sector::DATA_SIZE;
use crate::store::SectorSource;

/// First sector of the table of contents.
pub const TOC_START_SECTOR: u64 = 24;

/// Number of sectors the table spans (24..=39).
pub const TOC_SECTOR_SPAN: u64 = 16;

/// Packed record size in bytes.
pub const TOC_RECORD_SIZE: usize = 7;

/// One decoded table record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TocEntry {
    /// Starting sector, 24 significant bits.
    pub sector: u32,
    /// File size in bytes when non-negative, negated subtree span otherwise.
    pub size: i32,
}

impl TocEntry {
    pub fn new(sector: u32, size: i32) -> Self {
        Self { sector, size }
    }

    /// Decode a 7-byte record.
    pub fn from_bytes(record: &[u8; TOC_RECORD_SIZE]) -> Self {
        let sector = u32::from_le_bytes([record[0], record[1], record[2], 0]);
        let size = i32::from_le_bytes([record[3], record[4], record[5], record[6]]);
        Self { sector, size }
    }

    /// Encode back into the packed 7-byte form. Bits above 24 in the sector
    /// field are dropped.
    pub fn to_bytes(&self) -> [u8; TOC_RECORD_SIZE] {
        let s = self.sector.to_le_bytes();
        let z = self.size.to_le_bytes();
        [s[0], s[1], s[2], z[0], z[1], z[2], z[3]]
    }

    /// Whether this record marks a directory.
    pub fn is_directory(&self) -> bool {
        self.size < 0
    }

    /// Number of following slots owned by this directory marker, or `None`
    /// for a file record.
    pub fn span(&self) -> Option<usize> {
        if self.is_directory() {
            Some(self.size.unsigned_abs() as usize)
        } else {
            None
        }
    }
}

/// Split a table buffer into records, dropping empty slots.
///
/// A trailing partial record is ignored.
pub fn decode_buffer(buf: &[u8]) -> Vec<TocEntry> {
    buf.chunks_exact(TOC_RECORD_SIZE)
        .filter_map(|chunk| {
            let record: &[u8; TOC_RECORD_SIZE] = chunk.try_into().ok()?;
            let entry = TocEntry::from_bytes(record);
            (entry.sector != 0).then_some(entry)
        })
        .collect()
}

/// Read `sector_span` sectors from `start_sector` and decode the records
/// held in their data regions.
pub fn decode(
    source: &mut (impl SectorSource + ?Sized),
    start_sector: u64,
    sector_span: u64,
) -> Result<Vec<TocEntry>, XenoError> {
    let buf = read_data_run(source, start_sector, sector_span)?;
    let entries = decode_buffer(&buf);
    log::debug!(
        "Decoded {} table entries from {} records in sectors {}..{}",
        entries.len(),
        buf.len() / TOC_RECORD_SIZE,
        start_sector,
        start_sector + sector_span
    );
    Ok(entries)
}

/// Decode the table at its fixed location.
pub fn decode_table(source: &mut (impl SectorSource + ?Sized)) -> Result<Vec<TocEntry>, XenoError> {
    decode(source, TOC_START_SECTOR, TOC_SECTOR_SPAN)
}

/// Concatenate the data regions of `count` consecutive sectors.
pub(crate) fn read_data_run(
    source: &mut (impl SectorSource + ?Sized),
    start: u64,
    count: u64,
) -> Result<Vec<u8>, XenoError> {
    let mut buf = Vec::with_capacity(count as usize * DATA_SIZE);
    for i in 0..count {
        let sector = source.read_sector_at(start + i)?;
        buf.extend_from_slice(sector.data());
    }
    Ok(buf)
}

#[cfg(test)]
#[path = "tests/toc_tests.rs"]
mod tests;
