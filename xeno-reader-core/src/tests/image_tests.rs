use super::*;
use crate::fixtures::{ImageBuilder, pattern};
use crate::sector::DATA_SIZE;
use crate::toc::{TOC_START_SECTOR, TocEntry};
use crate::tree::PADDING_SECTOR;

fn sample_table() -> Vec<TocEntry> {
    vec![
        TocEntry::new(1000, 5000),
        TocEntry::new(2000, -3),
        TocEntry::new(2000, 10),
        TocEntry::new(2001, 20),
        TocEntry::new(PADDING_SECTOR, 0),
        TocEntry::new(0, 0),
        TocEntry::new(0, 0),
    ]
}

#[test]
fn test_open_builds_tree() {
    let reader = ImageBuilder::new(DiscVariant::Disc1)
        .table(&sample_table())
        .build_reader();
    let image = XenoImage::from_reader(reader).unwrap();

    assert_eq!(image.disc_variant(), DiscVariant::Disc1);
    assert_eq!(image.entry_count(), 5);
    let root = image.root();
    assert_eq!(root.files(), &[FileEntry::new(1000, 5000)]);
    let sub = root.dir_at(0).unwrap();
    assert_eq!(sub.files().len(), 3);
    assert_eq!(sub.usable_files().len(), 2);
}

#[test]
fn test_read_file_through_image() {
    let content = pattern(5000, 9);
    let reader = ImageBuilder::new(DiscVariant::Disc2)
        .table(&sample_table())
        .data(1000, &content)
        .build_reader();
    let mut image = XenoImage::from_reader(reader).unwrap();

    let file = image.root().files()[0];
    assert_eq!(image.read_file(&file).unwrap(), content);

    let padding = image.root().dir_at(0).unwrap().files()[2];
    assert!(matches!(
        image.read_file(&padding),
        Err(XenoError::PaddingFile)
    ));
}

#[test]
fn test_split_mut_walks_and_reads() {
    let reader = ImageBuilder::new(DiscVariant::Disc1)
        .table(&sample_table())
        .data(2000, &pattern(DATA_SIZE + 30, 2))
        .build_reader();
    let mut image = XenoImage::from_reader(reader).unwrap();

    let (root, store) = image.split_mut();
    let sub = root.dir_at(0).unwrap();
    let sizes: Vec<usize> = sub
        .usable_files()
        .iter()
        .map(|f| read_file(&mut *store, f).unwrap().len())
        .collect();
    assert_eq!(sizes, vec![10, 20]);
}

#[test]
fn test_malformed_table_fails_open() {
    let table = [TocEntry::new(5, -10), TocEntry::new(6, 1)];
    let reader = ImageBuilder::new(DiscVariant::Disc1)
        .table(&table)
        .build_reader();
    let err = XenoImage::from_reader(reader).err().unwrap();
    assert!(matches!(err, XenoError::MalformedTable(_)));
}

#[test]
fn test_bad_signature_fails_open() {
    let reader = ImageBuilder::new(DiscVariant::Disc1)
        .table(&sample_table())
        .flip_byte(16, crate::disc::SIGNATURE_OFFSET)
        .build_reader();
    assert!(matches!(
        XenoImage::from_reader(reader),
        Err(XenoError::BadSignature(_))
    ));
}

#[test]
fn test_read_raw_sector() {
    let reader = ImageBuilder::new(DiscVariant::Disc1)
        .table(&sample_table())
        .build_reader();
    let mut image = XenoImage::from_reader(reader).unwrap();
    let raw = image.read_raw_sector(TOC_START_SECTOR).unwrap();
    assert_eq!(raw.index(), TOC_START_SECTOR);
    assert_eq!(&raw.data()[..7], &TocEntry::new(1000, 5000).to_bytes());
}

#[test]
fn test_open_from_path() {
    let content = pattern(300, 4);
    let tmp = ImageBuilder::new(DiscVariant::Disc2)
        .table(&[TocEntry::new(4000, 300)])
        .data(4000, &content)
        .build();
    let mut image = XenoImage::open(tmp.path()).unwrap();
    assert_eq!(image.disc_variant(), DiscVariant::Disc2);
    let file = image.root().files()[0];
    assert_eq!(image.read_file(&file).unwrap(), content);
}
