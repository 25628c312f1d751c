//! Reconstruction of the hidden directory tree from the flat record list.
//!
//! The table has no pointers and no end-of-directory markers. A directory
//! record carries a negated *span*: the number of slots that follow it and
//! belong to its subtree, counting every file record and every nested
//! directory record (plus everything those nested directories own). The
//! builder walks the list with one cursor shared by every nesting level,
//! so slots consumed by a nested directory are also consumed from each
//! ancestor's span.

use crate::error::XenoError;
use crate::sector::DATA_SIZE;
use crate::toc::TocEntry;

/// Starting-sector value of the slot that ends a directory's file list.
pub const PADDING_SECTOR: u32 = 0xFF_FFFF;

// ---------------------------------------------------------------------------
// Tree nodes
// ---------------------------------------------------------------------------

/// A file slot: where its data starts and how many bytes it holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileEntry {
    sector: u32,
    size: i32,
}

impl FileEntry {
    pub fn new(sector: u32, size: i32) -> Self {
        Self { sector, size }
    }

    pub fn sector(&self) -> u32 {
        self.sector
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether this is the padding slot rather than a real file.
    pub fn is_padding(&self) -> bool {
        self.sector == PADDING_SECTOR
    }

    /// Number of sectors the file's data occupies.
    pub fn sector_span(&self) -> u64 {
        if self.size <= 0 {
            0
        } else {
            (self.size as u64).div_ceil(DATA_SIZE as u64)
        }
    }
}

impl From<TocEntry> for FileEntry {
    fn from(entry: TocEntry) -> Self {
        Self::new(entry.sector, entry.size)
    }
}

/// A directory in the hidden filesystem.
///
/// Children keep table order. Nodes own their children outright; there are
/// no parent links. A full table can nest thousands of levels deep, so
/// traversal, comparison and drop all run on an explicit stack.
#[derive(Debug, Default)]
pub struct DirectoryNode {
    marker_sector: Option<u32>,
    subdirs: Vec<DirectoryNode>,
    files: Vec<FileEntry>,
}

impl DirectoryNode {
    /// An empty root directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file slot.
    pub fn push_file(&mut self, file: FileEntry) {
        self.files.push(file);
    }

    /// Append a subdirectory introduced by a record at `marker_sector`.
    pub fn push_dir(&mut self, marker_sector: u32, mut dir: DirectoryNode) {
        dir.marker_sector = Some(marker_sector);
        self.subdirs.push(dir);
    }

    /// Sector field of the record that introduced this directory. `None` for
    /// the root.
    pub fn marker_sector(&self) -> Option<u32> {
        self.marker_sector
    }

    pub fn subdirs(&self) -> &[DirectoryNode] {
        &self.subdirs
    }

    /// Every file slot, padding included.
    pub fn files(&self) -> &[FileEntry] {
        &self.files
    }

    /// File slots before the first padding slot.
    pub fn usable_files(&self) -> &[FileEntry] {
        let end = self
            .files
            .iter()
            .position(FileEntry::is_padding)
            .unwrap_or(self.files.len());
        &self.files[..end]
    }

    pub fn dir_at(&self, index: usize) -> Option<&DirectoryNode> {
        self.subdirs.get(index)
    }

    pub fn file_at(&self, index: usize) -> Option<&FileEntry> {
        self.files.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.subdirs.is_empty() && self.files.is_empty()
    }

    /// Pre-order walk of this directory and every directory below it,
    /// yielding each with its depth (this directory is depth 0).
    ///
    /// Subdirectories are visited in table order, which is also the order
    /// of their `DIR_NNNN` numbering.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            root: Some(self),
            stack: Vec::new(),
        }
    }

    /// Number of table slots held by this subtree, not counting the record
    /// that introduced this directory. For the root this is the length of
    /// the record list it was built from.
    pub fn slot_count(&self) -> usize {
        self.walk()
            .map(|(_, d)| d.files.len() + d.subdirs.len())
            .sum()
    }

    /// Number of directories below this one, at any depth.
    pub fn total_dir_count(&self) -> usize {
        self.walk().map(|(_, d)| d.subdirs.len()).sum()
    }

    /// Number of usable files in this subtree.
    pub fn total_file_count(&self) -> usize {
        self.walk().map(|(_, d)| d.usable_files().len()).sum()
    }

    /// Encode the subtree back into a pre-order record list.
    ///
    /// Within a directory, file records come before subdirectory records.
    /// Feeding the result to [`build_tree`] yields an equal tree.
    pub fn flatten(&self) -> Vec<TocEntry> {
        let mut out: Vec<TocEntry> = self
            .files
            .iter()
            .map(|f| TocEntry::new(f.sector, f.size))
            .collect();
        // Each open directory: remaining subdirs and the index of its marker
        let mut open = vec![(self.subdirs.iter(), None::<usize>)];

        while let Some((subdirs, marker)) = open.last_mut() {
            if let Some(dir) = subdirs.next() {
                let index = out.len();
                // Span is patched in once the subtree is written
                out.push(TocEntry::new(dir.marker_sector.unwrap_or_default(), 0));
                out.extend(dir.files.iter().map(|f| TocEntry::new(f.sector, f.size)));
                open.push((dir.subdirs.iter(), Some(index)));
                continue;
            }
            if let Some(index) = *marker {
                let span = i32::try_from(out.len() - index - 1).unwrap_or(i32::MAX);
                out[index].size = -span;
            }
            open.pop();
        }
        out
    }
}

impl PartialEq for DirectoryNode {
    /// Two trees are equal when their pre-order walks match node for node.
    fn eq(&self, other: &Self) -> bool {
        self.walk().zip(other.walk()).all(|((_, a), (_, b))| {
            a.marker_sector == b.marker_sector
                && a.files == b.files
                && a.subdirs.len() == b.subdirs.len()
        })
    }
}

impl Eq for DirectoryNode {}

impl Drop for DirectoryNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.subdirs);
        while let Some(mut dir) = pending.pop() {
            pending.append(&mut dir.subdirs);
        }
    }
}

/// Iterator returned by [`DirectoryNode::walk`].
pub struct Walk<'a> {
    root: Option<&'a DirectoryNode>,
    stack: Vec<(usize, std::slice::Iter<'a, DirectoryNode>)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a DirectoryNode);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            self.stack.push((1, root.subdirs.iter()));
            return Some((0, root));
        }
        loop {
            let (depth, subdirs) = self.stack.last_mut()?;
            let depth = *depth;
            match subdirs.next() {
                Some(dir) => {
                    self.stack.push((depth + 1, dir.subdirs.iter()));
                    return Some((depth, dir));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Descent parser over the record list.
///
/// Open directories live on an explicit stack, so nesting depth is bounded
/// by the table size rather than by the thread's stack.
pub struct TreeBuilder<'a> {
    entries: &'a [TocEntry],
    cursor: usize,
}

/// A directory still being filled, with the cursor position that ends it.
struct OpenDir {
    node: DirectoryNode,
    marker_sector: u32,
    end: usize,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(entries: &'a [TocEntry]) -> Self {
        Self { entries, cursor: 0 }
    }

    /// Build the root directory, consuming every entry.
    pub fn build(mut self) -> Result<DirectoryNode, XenoError> {
        let total = self.entries.len();
        let mut root = DirectoryNode::new();
        let mut open: Vec<OpenDir> = Vec::new();

        while self.cursor < total || !open.is_empty() {
            let end = open.last().map_or(total, |d| d.end);

            if self.cursor == end {
                if let Some(done) = open.pop() {
                    let parent = open.last_mut().map_or(&mut root, |d| &mut d.node);
                    parent.push_dir(done.marker_sector, done.node);
                }
                continue;
            }

            let index = self.cursor;
            let entry = self.entries[index];
            self.cursor += 1;

            let Some(span) = entry.span() else {
                let parent = open.last_mut().map_or(&mut root, |d| &mut d.node);
                parent.push_file(FileEntry::from(entry));
                continue;
            };

            let child_end = self.cursor.checked_add(span).filter(|&e| e <= end);
            let Some(child_end) = child_end else {
                let available = end - self.cursor;
                return Err(XenoError::malformed_table(format!(
                    "directory record {} spans {} slots but only {} remain in its parent",
                    index, span, available
                )));
            };

            open.push(OpenDir {
                node: DirectoryNode::new(),
                marker_sector: entry.sector,
                end: child_end,
            });
        }

        let counted = root.slot_count();
        if counted != total {
            return Err(XenoError::malformed_table(format!(
                "tree accounts for {} slots but the table holds {}",
                counted, total
            )));
        }

        log::debug!(
            "Built tree: {} directories, {} files from {} entries",
            root.total_dir_count(),
            root.total_file_count(),
            total
        );
        Ok(root)
    }
}

/// Build the directory tree for a decoded record list.
pub fn build_tree(entries: &[TocEntry]) -> Result<DirectoryNode, XenoError> {
    TreeBuilder::new(entries).build()
}

#[cfg(test)]
#[path = "tests/tree_tests.rs"]
mod tests;
