//! Reading a file's bytes by walking consecutive sectors.

use crate::error::XenoError;
use crate::store::SectorSource;
use crate::toc::read_data_run;
use crate::tree::FileEntry;

/// Read the full content of `file`.
///
/// The file occupies `ceil(size / DATA_SIZE)` sectors starting at its
/// starting sector; the joined data regions are cut down to exactly `size`
/// bytes. Padding slots and empty entries are rejected before any read.
pub fn read_file(
    source: &mut (impl SectorSource + ?Sized),
    file: &FileEntry,
) -> Result<Vec<u8>, XenoError> {
    if file.is_padding() {
        return Err(XenoError::PaddingFile);
    }
    if file.size() <= 0 {
        return Err(XenoError::EmptyFile {
            sector: file.sector(),
            size: file.size(),
        });
    }

    let span = file.sector_span();
    let start = u64::from(file.sector());
    let last = start + span - 1;
    if last >= source.sector_count() {
        return Err(XenoError::OutOfRange {
            index: last,
            count: source.sector_count(),
        });
    }
    log::debug!(
        "Reading {} bytes from sectors {}..{}",
        file.size(),
        start,
        start + span
    );

    let mut data = read_data_run(source, start, span)?;
    data.truncate(file.size() as usize);
    Ok(data)
}

#[cfg(test)]
#[path = "tests/file_tests.rs"]
mod tests;
