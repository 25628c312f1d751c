//! Reader for the hidden directory table on Xenogears disc images.
//!
//! Besides its visible ISO 9660 filesystem, each disc carries a packed
//! table of contents in sectors 24-39 that describes the files the game
//! actually loads. This crate opens raw 2352-byte/sector images, validates
//! them, rebuilds that hidden tree and reads file contents out of it.
//!
//! ```no_run
//! use xeno_reader_core::XenoImage;
//!
//! let mut image = XenoImage::open("Xenogears (Disc 1).bin")?;
//! let first = *image.root().dir_at(0).unwrap().file_at(0).unwrap();
//! let bytes = image.read_file(&first)?;
//! # Ok::<(), xeno_reader_core::XenoError>(())
//! ```

use std::io::{Read, Seek};

pub mod disc;
pub mod error;
pub mod file;
pub mod image;
pub mod sector;
pub mod store;
pub mod toc;
pub mod tree;

pub use disc::DiscVariant;
pub use error::XenoError;
pub use file::read_file;
pub use image::XenoImage;
pub use sector::{DATA_SIZE, RAW_SECTOR_SIZE, RawSector};
pub use store::{SectorSource, SectorStore};
pub use toc::TocEntry;
pub use tree::{DirectoryNode, FileEntry, PADDING_SECTOR, TreeBuilder, Walk, build_tree};

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

#[cfg(any(test, feature = "test-util"))]
pub mod fixtures;
