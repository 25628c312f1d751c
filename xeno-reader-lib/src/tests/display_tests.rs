use super::*;
use xeno_reader_core::PADDING_SECTOR;

fn sample_tree() -> DirectoryNode {
    let mut inner = DirectoryNode::new();
    inner.push_file(FileEntry::new(300, 5));

    let mut first = DirectoryNode::new();
    first.push_file(FileEntry::new(200, 4096));
    first.push_file(FileEntry::new(PADDING_SECTOR, 0));
    first.push_dir(199, inner);

    let mut root = DirectoryNode::new();
    root.push_file(FileEntry::new(100, 3000));
    root.push_dir(150, first);
    root.push_dir(400, DirectoryNode::new());
    root
}

#[test]
fn test_summarize() {
    let summary = summarize(&sample_tree());
    assert_eq!(
        summary,
        TreeSummary {
            dirs: 3,
            files: 3,
            padding_slots: 1,
            total_bytes: 7101,
            max_depth: 2,
        }
    );
}

#[test]
fn test_summarize_empty_root() {
    assert_eq!(summarize(&DirectoryNode::new()), TreeSummary::default());
}

#[test]
fn test_describe_file() {
    assert_eq!(
        describe_file(3, &FileEntry::new(100, 3000)),
        "FILE_0003.BIN  sector 100  3000 bytes  (2 sectors)"
    );
    assert_eq!(
        describe_file(0, &FileEntry::new(PADDING_SECTOR, 0)),
        "(padding)  sector 0xFFFFFF"
    );
}

#[test]
fn test_tree_lines_layout() {
    let lines = tree_lines(&sample_tree());
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "/ (3 directories, 3 files, 7101 bytes)");
    assert!(lines[1].starts_with("  FILE_0000.BIN  sector 100"));
    assert_eq!(lines[2], "  DIR_0000/  [sector 150, 4 slots]");
    assert!(lines[3].starts_with("    FILE_0000.BIN  sector 200"));
    assert_eq!(lines[4], "    (padding)  sector 0xFFFFFF");
    assert_eq!(lines[5], "    DIR_0001/  [sector 199, 1 slots]");
    assert!(lines[6].starts_with("      FILE_0000.BIN  sector 300  5 bytes"));
    assert_eq!(lines[7], "  DIR_0002/  [sector 400, 0 slots]");
}

#[test]
fn test_tree_lines_empty_root() {
    assert_eq!(
        tree_lines(&DirectoryNode::new()),
        vec!["/ (0 directories, 0 files, 0 bytes)".to_string()]
    );
}
