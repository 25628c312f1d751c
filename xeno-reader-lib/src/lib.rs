//! Frontend-facing helpers around `xeno-reader-core`: tree display,
//! extraction to disk, checksum manifests and the settings file.

pub mod display;
pub mod error;
pub mod extract;
pub mod manifest;
pub mod settings;
pub mod util;

pub use error::ExtractError;
pub use extract::{
    ExtractOptions, ExtractPlan, ExtractProgress, ExtractReport, PlannedFile, extract, find_dir,
    find_file,
};
pub use settings::Settings;

// Re-export core types so frontends can depend on this crate alone.
pub use xeno_reader_core::{
    DirectoryNode, DiscVariant, FileEntry, SectorSource, XenoError, XenoImage,
};
