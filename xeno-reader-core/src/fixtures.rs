//! Synthetic sectors and images shared by the unit tests.

use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};

use tempfile::NamedTempFile;

use crate::disc::{self, DiscVariant};
use crate::error::XenoError;
use crate::sector::{DATA_OFFSET, DATA_SIZE, RAW_SECTOR_SIZE, RawSector};
use crate::store::SectorSource;
use crate::toc::{TOC_SECTOR_SPAN, TOC_START_SECTOR, TocEntry};

pub const SYNC_PATTERN: [u8; 12] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00,
];

/// Wrap up to one data region of bytes into a raw Mode 2 sector.
pub fn make_raw_sector(user_data: &[u8]) -> [u8; RAW_SECTOR_SIZE] {
    assert!(user_data.len() <= DATA_SIZE);
    let mut sector = [0u8; RAW_SECTOR_SIZE];
    sector[..12].copy_from_slice(&SYNC_PATTERN);
    sector[15] = 0x02;
    sector[DATA_OFFSET..DATA_OFFSET + user_data.len()].copy_from_slice(user_data);
    // Fill the EDC tail so a codec that leaks it is caught
    for b in &mut sector[DATA_OFFSET + DATA_SIZE..] {
        *b = 0xEE;
    }
    sector
}

/// Pack records the way the table stores them.
pub fn encode_entries(entries: &[TocEntry]) -> Vec<u8> {
    entries.iter().flat_map(|e| e.to_bytes()).collect()
}

/// Deterministic filler so truncation errors show up as byte mismatches.
pub fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect()
}

/// In-memory sector source that counts reads.
pub struct MemSource {
    sectors: Vec<[u8; RAW_SECTOR_SIZE]>,
    pub reads: usize,
}

impl MemSource {
    pub fn new(count: usize) -> Self {
        Self {
            sectors: vec![make_raw_sector(&[]); count],
            reads: 0,
        }
    }

    /// Spread `data` over consecutive data regions starting at `start`.
    pub fn write_data(&mut self, start: usize, data: &[u8]) {
        for (i, chunk) in data.chunks(DATA_SIZE).enumerate() {
            self.sectors[start + i] = make_raw_sector(chunk);
        }
    }

    /// Place an encoded table at sectors 24..40.
    pub fn write_table(&mut self, entries: &[TocEntry]) {
        let buf = encode_entries(entries);
        assert!(buf.len() <= TOC_SECTOR_SPAN as usize * DATA_SIZE);
        self.write_data(TOC_START_SECTOR as usize, &buf);
    }
}

impl SectorSource for MemSource {
    fn sector_count(&self) -> u64 {
        self.sectors.len() as u64
    }

    fn read_sector_at(&mut self, index: u64) -> Result<RawSector, XenoError> {
        let raw = self
            .sectors
            .get(index as usize)
            .ok_or(XenoError::OutOfRange {
                index,
                count: self.sectors.len() as u64,
            })?;
        self.reads += 1;
        Ok(RawSector::new(index, Box::new(*raw)))
    }
}

/// Builder for a sparse, full-size image on disk.
pub struct ImageBuilder {
    sector_count: u64,
    sectors: Vec<(u64, Vec<u8>)>,
}

impl ImageBuilder {
    /// A valid image of `variant` with an empty table.
    pub fn new(variant: DiscVariant) -> Self {
        let mut signature = vec![0u8; DATA_SIZE];
        signature[0] = 0x01;
        signature[1..6].copy_from_slice(b"CD001");
        signature[8..19].copy_from_slice(b"PLAYSTATION");
        signature[disc::SIGNATURE_OFFSET..disc::SIGNATURE_OFFSET + 9]
            .copy_from_slice(disc::SIGNATURE);

        let mut id = vec![0u8; 32];
        id[..14].copy_from_slice(variant.identifier());

        Self {
            sector_count: variant.expected_sector_count(),
            sectors: vec![
                (disc::SIGNATURE_SECTOR, signature),
                (disc::DISC_ID_SECTOR, id),
            ],
        }
    }

    pub fn sector_count(mut self, count: u64) -> Self {
        self.sector_count = count;
        self
    }

    /// Overwrite the data bytes starting at `sector`.
    pub fn data(mut self, sector: u64, data: &[u8]) -> Self {
        for (i, chunk) in data.chunks(DATA_SIZE).enumerate() {
            self.sectors.retain(|(s, _)| *s != sector + i as u64);
            self.sectors.push((sector + i as u64, chunk.to_vec()));
        }
        self
    }

    pub fn table(self, entries: &[TocEntry]) -> Self {
        self.data(TOC_START_SECTOR, &encode_entries(entries))
    }

    /// Corrupt one byte of a sector's data region.
    pub fn flip_byte(mut self, sector: u64, offset: usize) -> Self {
        let slot = self.sectors.iter_mut().find(|(s, _)| *s == sector);
        let (_, data) = slot.expect("sector was written");
        data[offset] ^= 0xFF;
        self
    }

    /// In-memory image that only stores the written sectors.
    pub fn build_reader(self) -> SparseReader {
        SparseReader {
            len: self.sector_count * RAW_SECTOR_SIZE as u64,
            pos: 0,
            sectors: self
                .sectors
                .iter()
                .map(|(s, d)| (*s, make_raw_sector(d)))
                .collect(),
            readable_len: None,
        }
    }

    /// Sparse temporary file of the full image size.
    pub fn build(self) -> NamedTempFile {
        let tmp = NamedTempFile::new().unwrap();
        let mut file: &File = tmp.as_file();
        file.set_len(self.sector_count * RAW_SECTOR_SIZE as u64)
            .unwrap();
        for (sector, data) in &self.sectors {
            file.seek(SeekFrom::Start(sector * RAW_SECTOR_SIZE as u64))
                .unwrap();
            file.write_all(&make_raw_sector(data)).unwrap();
        }
        file.flush().unwrap();
        tmp
    }
}

/// Read + Seek over a mostly-zero image without allocating it.
pub struct SparseReader {
    len: u64,
    pos: u64,
    sectors: HashMap<u64, [u8; RAW_SECTOR_SIZE]>,
    readable_len: Option<u64>,
}

impl SparseReader {
    /// Report the full length on seek but return no bytes past `len`.
    pub fn truncate_reads_at(mut self, len: u64) -> Self {
        self.readable_len = Some(len);
        self
    }
}

impl Read for SparseReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let end = self.readable_len.unwrap_or(self.len).min(self.len);
        if self.pos >= end || buf.is_empty() {
            return Ok(0);
        }
        let sector = self.pos / RAW_SECTOR_SIZE as u64;
        let offset = (self.pos % RAW_SECTOR_SIZE as u64) as usize;
        let n = (RAW_SECTOR_SIZE - offset)
            .min(buf.len())
            .min((end - self.pos) as usize);
        match self.sectors.get(&sector) {
            Some(raw) => buf[..n].copy_from_slice(&raw[offset..offset + n]),
            None => buf[..n].fill(0),
        }
        self.pos += n as u64;
        Ok(n)
    }
}

impl Seek for SparseReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let next = match pos {
            SeekFrom::Start(p) => Some(p),
            SeekFrom::End(d) => self.len.checked_add_signed(d),
            SeekFrom::Current(d) => self.pos.checked_add_signed(d),
        };
        self.pos = next.ok_or_else(|| io::Error::other("seek before start"))?;
        Ok(self.pos)
    }
}
