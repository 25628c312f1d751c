use super::*;
use crate::fixtures::{SYNC_PATTERN, make_raw_sector, pattern};

#[test]
fn test_layout_adds_up() {
    assert_eq!(DATA_OFFSET, 24);
    assert_eq!(SYNC_SIZE + HEADER_SIZE + SUBHEADER_SIZE + DATA_SIZE + EDC_SIZE, RAW_SECTOR_SIZE);
}

#[cfg(not(feature = "form2"))]
#[test]
fn test_form1_sizes() {
    assert_eq!(DATA_SIZE, 2048);
    assert_eq!(EDC_SIZE, 280);
    assert_eq!(mode_name(), "Mode 2 Form 1");
}

#[cfg(feature = "form2")]
#[test]
fn test_form2_sizes() {
    assert_eq!(DATA_SIZE, 2324);
    assert_eq!(EDC_SIZE, 4);
    assert_eq!(mode_name(), "Mode 2 Form 2");
}

#[test]
fn test_data_region_excludes_header_and_tail() {
    let payload = pattern(DATA_SIZE, 7);
    let raw = make_raw_sector(&payload);
    let data = data_region(&raw);
    assert_eq!(&data[..], &payload[..]);
    // Sync and EDC bytes never show up in the region
    assert_ne!(data[..12], SYNC_PATTERN);
    assert!(!data.iter().rev().take(4).all(|&b| b == 0xEE));
}

#[test]
fn test_raw_sector_accessors() {
    let raw = make_raw_sector(b"HELLO");
    let sector = RawSector::new(42, Box::new(raw));
    assert_eq!(sector.index(), 42);
    assert_eq!(&sector.data()[..5], b"HELLO");
    assert_eq!(sector.as_bytes()[..12], SYNC_PATTERN);
    assert!(format!("{:?}", sector).contains("42"));
}
