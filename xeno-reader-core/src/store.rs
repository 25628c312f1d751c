//! Validated random access to the sectors of a disc image.

use std::fs::File;
use std::io::{ErrorKind, Read, SeekFrom};
use std::path::Path;

use crate::ReadSeek;
use crate::disc::{self, DiscVariant};
use crate::error::XenoError;
use crate::sector::{RAW_SECTOR_SIZE, RawSector};

/// Anything that can hand out raw sectors by absolute index.
///
/// [`SectorStore`] is the real implementation; the table decoder and file
/// reader only depend on this trait.
pub trait SectorSource {
    /// Total number of sectors available.
    fn sector_count(&self) -> u64;

    /// Read the sector at `index`, repositioning as needed.
    fn read_sector_at(&mut self, index: u64) -> Result<RawSector, XenoError>;
}

/// Exclusive read handle on a disc image whose size and identity were
/// verified at open time.
pub struct SectorStore<R = File> {
    reader: R,
    sector_count: u64,
    variant: DiscVariant,
}

impl SectorStore<File> {
    /// Open and validate the image at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, XenoError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| XenoError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Opened image {}", path.display());
        Self::from_reader(file)
    }
}

impl<R: ReadSeek> SectorStore<R> {
    /// Validate an already-open image.
    ///
    /// Checks the sector count, the product signature in sector 16 and the
    /// disc identifier in sector 23, then rewinds to sector 0.
    pub fn from_reader(mut reader: R) -> Result<Self, XenoError> {
        let bytes = reader.seek(SeekFrom::End(0))?;
        let sector_count = bytes / RAW_SECTOR_SIZE as u64;
        if !disc::is_known_sector_count(sector_count) {
            return Err(XenoError::BadSize {
                bytes,
                sectors: sector_count,
            });
        }
        if bytes % RAW_SECTOR_SIZE as u64 != 0 {
            log::debug!(
                "Image has {} trailing bytes after the last full sector",
                bytes % RAW_SECTOR_SIZE as u64
            );
        }

        let signature = read_raw(&mut reader, disc::SIGNATURE_SECTOR, sector_count)?;
        disc::check_signature(signature.data())?;

        let id_sector = read_raw(&mut reader, disc::DISC_ID_SECTOR, sector_count)?;
        let variant = DiscVariant::from_id_sector(id_sector.data())?;

        if variant.expected_sector_count() != sector_count {
            log::warn!(
                "{} identifier found in an image with {} sectors (expected {})",
                variant,
                sector_count,
                variant.expected_sector_count()
            );
        }

        reader.seek(SeekFrom::Start(0))?;
        log::debug!("Validated {} image, {} sectors", variant, sector_count);

        Ok(Self {
            reader,
            sector_count,
            variant,
        })
    }

    pub fn disc_variant(&self) -> DiscVariant {
        self.variant
    }

    /// Give back the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> SectorStore<R> {
    pub fn sector_count(&self) -> u64 {
        self.sector_count
    }
}

impl<R: ReadSeek> SectorSource for SectorStore<R> {
    fn sector_count(&self) -> u64 {
        self.sector_count
    }

    fn read_sector_at(&mut self, index: u64) -> Result<RawSector, XenoError> {
        read_raw(&mut self.reader, index, self.sector_count)
    }
}

/// Seek to `index` and read one full raw sector.
fn read_raw(
    reader: &mut (impl ReadSeek + ?Sized),
    index: u64,
    sector_count: u64,
) -> Result<RawSector, XenoError> {
    if index >= sector_count {
        return Err(XenoError::OutOfRange {
            index,
            count: sector_count,
        });
    }

    reader.seek(SeekFrom::Start(index * RAW_SECTOR_SIZE as u64))?;
    let mut bytes = Box::new([0u8; RAW_SECTOR_SIZE]);
    let actual = read_full(reader, &mut bytes[..])?;
    if actual < RAW_SECTOR_SIZE {
        return Err(XenoError::ShortRead {
            index,
            expected: RAW_SECTOR_SIZE,
            actual,
        });
    }
    Ok(RawSector::new(index, bytes))
}

/// Fill `buf` as far as the reader allows, returning the byte count.
fn read_full(reader: &mut (impl Read + ?Sized), buf: &mut [u8]) -> Result<usize, XenoError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
