//! Writing the hidden tree out to the host filesystem.
//!
//! Directories get sequential `DIR_NNNN` names in pre-order; the counter is
//! threaded through the walk rather than kept in global state. Files are
//! named `FILE_NNNN.BIN` by their index within the directory. A directory's
//! file list ends at its first padding slot.

use std::fs;
use std::path::{Path, PathBuf};

use xeno_reader_core::{DirectoryNode, FileEntry, SectorSource, read_file};

use crate::error::ExtractError;
use crate::manifest::{self, ManifestEntry};
use crate::util::{dir_name, file_name};

/// File name of the manifest written next to the extracted tree.
pub const MANIFEST_FILE_NAME: &str = "manifest.txt";

/// Options that control extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Plan only: read nothing, write nothing.
    pub dry_run: bool,

    /// Write a manifest with per-file checksums.
    pub manifest: bool,

    /// Include SHA-1 in the manifest (CRC32 is always present).
    pub sha1: bool,
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn manifest(mut self, manifest: bool) -> Self {
        self.manifest = manifest;
        self
    }

    pub fn sha1(mut self, sha1: bool) -> Self {
        self.sha1 = sha1;
        self
    }
}

/// One file scheduled for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the output directory.
    pub path: PathBuf,
    pub entry: FileEntry,
}

/// Everything an extraction will create, in creation order.
#[derive(Debug, Clone, Default)]
pub struct ExtractPlan {
    /// Directories relative to the output directory, parents first.
    pub dirs: Vec<PathBuf>,
    pub files: Vec<PlannedFile>,
    /// File slots left out: padding sentinels and anything after them.
    pub skipped_slots: usize,
}

impl ExtractPlan {
    /// Walk `root` and name every directory and file.
    pub fn from_tree(root: &DirectoryNode) -> Self {
        let mut plan = Self::default();
        // Path of the most recent directory at each depth
        let mut parents: Vec<PathBuf> = Vec::new();

        for (number, (depth, dir)) in root.walk().enumerate() {
            parents.truncate(depth);
            let rel = match parents.last() {
                Some(parent) if number > 0 => parent.join(dir_name(number - 1)),
                _ => PathBuf::new(),
            };
            if number > 0 {
                plan.dirs.push(rel.clone());
            }

            let usable = dir.usable_files();
            plan.skipped_slots += dir.files().len() - usable.len();
            for (index, entry) in usable.iter().enumerate() {
                plan.files.push(PlannedFile {
                    path: rel.join(file_name(index)),
                    entry: *entry,
                });
            }
            parents.push(rel);
        }
        plan
    }

    /// Sum of all planned file sizes.
    pub fn total_bytes(&self) -> u64 {
        self.files
            .iter()
            .map(|f| f.entry.size().max(0) as u64)
            .sum()
    }
}

/// Look up a directory by its extracted path, e.g. `DIR_0003/DIR_0004`.
///
/// Names carry the pre-order number assigned by [`ExtractPlan::from_tree`],
/// so each segment must name a direct child of the previous one. An empty
/// path or `/` is the root.
pub fn find_dir<'a>(root: &'a DirectoryNode, path: &str) -> Option<&'a DirectoryNode> {
    let mut dir = root;
    // Pre-order number the first child of `dir` would get
    let mut first_child = 0;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let mut number = first_child;
        let mut found = None;
        for sub in dir.subdirs() {
            if dir_name(number) == segment {
                found = Some(sub);
                break;
            }
            number += 1 + sub.total_dir_count();
        }
        dir = found?;
        first_child = number + 1;
    }
    Some(dir)
}

/// Look up the file that extraction writes as `<dir>/FILE_NNNN.BIN` with
/// `NNNN = index`. Slots at or after a padding sentinel are not reachable.
pub fn find_file<'a>(root: &'a DirectoryNode, dir: &str, index: usize) -> Option<&'a FileEntry> {
    find_dir(root, dir)?.usable_files().get(index)
}

/// Progress updates sent during extraction.
#[derive(Debug, Clone)]
pub enum ExtractProgress {
    /// About to start writing
    Starting { total_files: usize, total_bytes: u64 },
    /// Extracting one file
    File {
        path: PathBuf,
        file_index: usize,
        total: usize,
        size: u64,
    },
    /// All files written
    Finished,
}

/// Outcome of an extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub dirs_created: usize,
    pub files_written: usize,
    pub bytes_written: u64,
    pub skipped_slots: usize,
    pub manifest_path: Option<PathBuf>,
}

/// Carry out `plan` under `output_dir`, reading file contents from `source`.
pub fn extract(
    source: &mut (impl SectorSource + ?Sized),
    plan: &ExtractPlan,
    output_dir: &Path,
    options: &ExtractOptions,
    progress: &dyn Fn(ExtractProgress),
) -> Result<ExtractReport, ExtractError> {
    let mut report = ExtractReport {
        skipped_slots: plan.skipped_slots,
        ..ExtractReport::default()
    };

    progress(ExtractProgress::Starting {
        total_files: plan.files.len(),
        total_bytes: plan.total_bytes(),
    });

    if options.dry_run {
        report.dirs_created = plan.dirs.len();
        report.files_written = plan.files.len();
        report.bytes_written = plan.total_bytes();
        progress(ExtractProgress::Finished);
        return Ok(report);
    }

    create_dir(output_dir)?;
    for dir in &plan.dirs {
        create_dir(&output_dir.join(dir))?;
        report.dirs_created += 1;
    }

    let mut manifest_entries = Vec::new();
    for (i, planned) in plan.files.iter().enumerate() {
        let size = planned.entry.size().max(0) as u64;
        progress(ExtractProgress::File {
            path: planned.path.clone(),
            file_index: i,
            total: plan.files.len(),
            size,
        });

        let data = if size == 0 {
            Vec::new()
        } else {
            read_file(&mut *source, &planned.entry)?
        };

        let target = output_dir.join(&planned.path);
        fs::write(&target, &data).map_err(|e| ExtractError::write(&target, e))?;
        log::debug!(
            "Wrote {} ({} bytes from sector {})",
            planned.path.display(),
            data.len(),
            planned.entry.sector()
        );

        if options.manifest {
            manifest_entries.push(ManifestEntry {
                path: planned.path.clone(),
                sector: planned.entry.sector(),
                size: planned.entry.size(),
                hashes: manifest::hash_content(&data, options.sha1),
            });
        }

        report.files_written += 1;
        report.bytes_written += data.len() as u64;
    }

    if options.manifest {
        let path = output_dir.join(MANIFEST_FILE_NAME);
        manifest::write_manifest(&path, &manifest_entries)
            .map_err(|e| ExtractError::write(&path, e))?;
        report.manifest_path = Some(path);
    }

    progress(ExtractProgress::Finished);
    Ok(report)
}

fn create_dir(path: &Path) -> Result<(), ExtractError> {
    fs::create_dir_all(path).map_err(|e| ExtractError::write(path, e))
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
