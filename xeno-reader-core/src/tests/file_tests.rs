use super::*;
use crate::fixtures::{MemSource, pattern};
use crate::sector::DATA_SIZE;
use crate::tree::PADDING_SECTOR;

#[test]
fn test_read_spans_sectors_and_trims() {
    let content = pattern(3 * DATA_SIZE, 11);
    let mut source = MemSource::new(1100);
    source.write_data(1000, &content);

    let size = 2 * DATA_SIZE + 904;
    let file = FileEntry::new(1000, size as i32);
    let data = read_file(&mut source, &file).unwrap();

    assert_eq!(data.len(), size);
    assert_eq!(data, content[..size]);
    assert_eq!(source.reads, 3);
}

#[cfg(not(feature = "form2"))]
#[test]
fn test_read_5000_bytes_uses_three_sectors() {
    let content = pattern(3 * 2048, 1);
    let mut source = MemSource::new(1100);
    source.write_data(1000, &content);

    let data = read_file(&mut source, &FileEntry::new(1000, 5000)).unwrap();
    assert_eq!(data.len(), 5000);
    assert_eq!(data, content[..5000]);
    assert_eq!(source.reads, 3);
}

#[test]
fn test_read_exact_sector_multiple() {
    let content = pattern(2 * DATA_SIZE, 5);
    let mut source = MemSource::new(64);
    source.write_data(50, &content);

    let data = read_file(&mut source, &FileEntry::new(50, 2 * DATA_SIZE as i32)).unwrap();
    assert_eq!(data, content);
    assert_eq!(source.reads, 2);
}

#[test]
fn test_read_single_byte() {
    let mut source = MemSource::new(64);
    source.write_data(40, b"Z");
    let data = read_file(&mut source, &FileEntry::new(40, 1)).unwrap();
    assert_eq!(data, b"Z");
}

#[test]
fn test_padding_file_rejected_without_read() {
    let mut source = MemSource::new(64);
    let err = read_file(&mut source, &FileEntry::new(PADDING_SECTOR, 1024)).unwrap_err();
    assert!(matches!(err, XenoError::PaddingFile));
    assert_eq!(source.reads, 0);
}

#[test]
fn test_empty_and_negative_sizes_rejected() {
    let mut source = MemSource::new(64);
    for size in [0, -1, -300] {
        let err = read_file(&mut source, &FileEntry::new(40, size)).unwrap_err();
        assert!(matches!(err, XenoError::EmptyFile { sector: 40, .. }));
    }
    assert_eq!(source.reads, 0);
}

#[test]
fn test_file_running_past_image_end() {
    let mut source = MemSource::new(64);
    let err = read_file(&mut source, &FileEntry::new(63, DATA_SIZE as i32 + 1)).unwrap_err();
    assert!(matches!(err, XenoError::OutOfRange { index: 64, count: 64 }));
    assert_eq!(source.reads, 0);
}
