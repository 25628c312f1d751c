//! The open-image handle: a validated sector store plus its decoded tree.

use std::fs::File;
use std::path::Path;

use crate::ReadSeek;
use crate::disc::DiscVariant;
use crate::error::XenoError;
use crate::file::read_file;
use crate::sector::RawSector;
use crate::store::{SectorSource, SectorStore};
use crate::toc::decode_table;
use crate::tree::{DirectoryNode, FileEntry, build_tree};

/// An opened disc image with its hidden directory tree.
///
/// The tree is immutable once built. Reads go through the single store
/// cursor, so file reads take `&mut self`.
pub struct XenoImage<R = File> {
    store: SectorStore<R>,
    root: DirectoryNode,
    entry_count: usize,
}

impl XenoImage<File> {
    /// Open, validate and index the image at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, XenoError> {
        Self::from_store(SectorStore::open(path)?)
    }
}

impl<R: ReadSeek> XenoImage<R> {
    /// Validate and index an already-open image.
    pub fn from_reader(reader: R) -> Result<Self, XenoError> {
        Self::from_store(SectorStore::from_reader(reader)?)
    }

    fn from_store(mut store: SectorStore<R>) -> Result<Self, XenoError> {
        let entries = decode_table(&mut store)?;
        let root = build_tree(&entries)?;
        Ok(Self {
            store,
            root,
            entry_count: entries.len(),
        })
    }

    pub fn disc_variant(&self) -> DiscVariant {
        self.store.disc_variant()
    }

    pub fn sector_count(&self) -> u64 {
        self.store.sector_count()
    }

    /// Number of non-empty records in the table of contents.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// The root of the hidden directory tree.
    pub fn root(&self) -> &DirectoryNode {
        &self.root
    }

    /// Read a file's full content.
    pub fn read_file(&mut self, file: &FileEntry) -> Result<Vec<u8>, XenoError> {
        read_file(&mut self.store, file)
    }

    /// Read one raw sector by absolute index.
    pub fn read_raw_sector(&mut self, index: u64) -> Result<RawSector, XenoError> {
        self.store.read_sector_at(index)
    }

    /// Borrow the tree and the store together, to walk the tree while
    /// reading file contents.
    pub fn split_mut(&mut self) -> (&DirectoryNode, &mut SectorStore<R>) {
        (&self.root, &mut self.store)
    }
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;
