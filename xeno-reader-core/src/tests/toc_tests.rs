use super::*;
use crate::fixtures::{MemSource, encode_entries};

#[test]
fn test_record_decoding() {
    let record = [0x34, 0x12, 0x00, 0x88, 0x13, 0x00, 0x00];
    let entry = TocEntry::from_bytes(&record);
    assert_eq!(entry.sector, 0x1234);
    assert_eq!(entry.size, 5000);
    assert!(!entry.is_directory());
    assert_eq!(entry.span(), None);
}

#[test]
fn test_record_full_24bit_sector() {
    let record = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
    let entry = TocEntry::from_bytes(&record);
    assert_eq!(entry.sector, 0xFF_FFFF);
    assert_eq!(entry.size, -1);
    assert_eq!(entry.span(), Some(1));
}

#[test]
fn test_directory_marker_span() {
    let entry = TocEntry::new(900, -12);
    assert!(entry.is_directory());
    assert_eq!(entry.span(), Some(12));
    assert_eq!(TocEntry::new(1, i32::MIN).span(), Some(1 << 31));
}

#[test]
fn test_to_bytes_drops_high_sector_bits() {
    let entry = TocEntry::new(0x0112_3456, -3);
    let decoded = TocEntry::from_bytes(&entry.to_bytes());
    assert_eq!(decoded, TocEntry::new(0x12_3456, -3));
}

#[test]
fn test_decode_buffer_drops_zero_sector_slots() {
    let entries = [
        TocEntry::new(100, 10),
        TocEntry::new(0, 99),
        TocEntry::new(0, -4),
        TocEntry::new(200, -1),
        TocEntry::new(201, 0),
    ];
    let decoded = decode_buffer(&encode_entries(&entries));
    assert_eq!(
        decoded,
        vec![
            TocEntry::new(100, 10),
            TocEntry::new(200, -1),
            TocEntry::new(201, 0),
        ]
    );
    assert!(decoded.iter().all(|e| e.sector != 0));
}

#[test]
fn test_decode_buffer_ignores_trailing_partial_record() {
    let mut buf = encode_entries(&[TocEntry::new(7, 1)]);
    buf.extend_from_slice(&[0x01, 0x00, 0x00, 0x05, 0x00, 0x00]);
    assert_eq!(decode_buffer(&buf), vec![TocEntry::new(7, 1)]);
}

#[test]
fn test_decode_buffer_deterministic() {
    let buf: Vec<u8> = (0..700u32).map(|i| (i * 37 % 251) as u8).collect();
    assert_eq!(decode_buffer(&buf), decode_buffer(&buf));
}

#[test]
fn test_decode_reads_table_sectors() {
    let entries = [
        TocEntry::new(1000, -2),
        TocEntry::new(1000, 5000),
        TocEntry::new(1003, 100),
    ];
    let mut source = MemSource::new(64);
    source.write_table(&entries);

    let decoded = decode_table(&mut source).unwrap();
    assert_eq!(decoded, entries.to_vec());
    assert_eq!(source.reads, TOC_SECTOR_SPAN as usize);
}

#[test]
fn test_decode_records_straddle_sector_boundary() {
    // 293 records = 2051 bytes; with 2048-byte regions the last one crosses
    // into sector 25
    let entries: Vec<TocEntry> = (1..=293).map(|i| TocEntry::new(i, i as i32 * 10)).collect();
    let mut source = MemSource::new(64);
    source.write_table(&entries);

    let decoded = decode(&mut source, TOC_START_SECTOR, 2).unwrap();
    assert_eq!(decoded.len(), 293);
    assert_eq!(decoded[292], TocEntry::new(293, 2930));
}

#[test]
fn test_decode_record_count_matches_buffer() {
    let mut source = MemSource::new(64);
    // Fill every slot of one sector with a real record
    let per_sector = DATA_SIZE / TOC_RECORD_SIZE;
    let entries: Vec<TocEntry> = (1..=per_sector as u32)
        .map(|i| TocEntry::new(i, 1))
        .collect();
    source.write_data(30, &encode_entries(&entries));

    let decoded = decode(&mut source, 30, 1).unwrap();
    assert_eq!(decoded.len(), per_sector);
}

#[test]
fn test_decode_propagates_read_failure() {
    let mut source = MemSource::new(30);
    let err = decode_table(&mut source).unwrap_err();
    assert!(matches!(err, XenoError::OutOfRange { index: 30, .. }));
}
