//! Display helpers for the hidden directory tree.
//!
//! Pure formatting, shared by every frontend. Directory and file names match
//! the ones extraction uses.

use xeno_reader_core::{DirectoryNode, FileEntry};

use crate::util::{dir_name, file_name, format_bytes};

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

/// Aggregate counts over a tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeSummary {
    /// Directories below the root.
    pub dirs: usize,
    /// Usable files.
    pub files: usize,
    /// File slots at or after a padding sentinel.
    pub padding_slots: usize,
    /// Sum of usable file sizes.
    pub total_bytes: u64,
    /// Deepest directory nesting (root = 0).
    pub max_depth: usize,
}

/// Count directories, files and bytes in `root`.
pub fn summarize(root: &DirectoryNode) -> TreeSummary {
    let mut summary = TreeSummary::default();
    for (depth, dir) in root.walk() {
        let usable = dir.usable_files();
        summary.files += usable.len();
        summary.padding_slots += dir.files().len() - usable.len();
        summary.total_bytes += usable.iter().map(|f| f.size().max(0) as u64).sum::<u64>();
        summary.max_depth = summary.max_depth.max(depth);
        summary.dirs += dir.subdirs().len();
    }
    summary
}

// ---------------------------------------------------------------------------
// Tree dump
// ---------------------------------------------------------------------------

/// Render the tree as indented lines, one per directory or file slot.
///
/// Padding slots are listed (marked) so the dump mirrors the table; slots
/// after a padding sentinel are shown too.
pub fn tree_lines(root: &DirectoryNode) -> Vec<String> {
    let summary = summarize(root);
    let mut lines = vec![format!(
        "/ ({} directories, {} files, {})",
        summary.dirs,
        summary.files,
        format_bytes(summary.total_bytes)
    )];

    // The walk visits directories in the order they are numbered
    for (number, (depth, dir)) in root.walk().enumerate() {
        if number > 0 {
            lines.push(format!(
                "{}{}/  [sector {}, {} slots]",
                "  ".repeat(depth),
                dir_name(number - 1),
                dir.marker_sector().unwrap_or_default(),
                dir.slot_count()
            ));
        }
        let indent = "  ".repeat(depth + 1);
        for (index, file) in dir.files().iter().enumerate() {
            lines.push(format!("{}{}", indent, describe_file(index, file)));
        }
    }
    lines
}

/// One-line description of a file slot.
pub fn describe_file(index: usize, file: &FileEntry) -> String {
    if file.is_padding() {
        return format!("(padding)  sector 0x{:06X}", file.sector());
    }
    format!(
        "{}  sector {}  {} bytes  ({} sectors)",
        file_name(index),
        file.sector(),
        file.size(),
        file.sector_span()
    )
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
