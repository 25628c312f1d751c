use super::*;

#[test]
fn test_format_bytes() {
    assert_eq!(format_bytes(0), "0 bytes");
    assert_eq!(format_bytes(512), "512 bytes");
    assert_eq!(format_bytes(2048), "2 KB");
    assert_eq!(format_bytes(1048576), "1 MB");
    assert_eq!(format_bytes(5000), "5000 bytes");
    // Whole KB but not whole MB
    assert_eq!(format_bytes(1536 * 1024), "1536 KB");
}

#[test]
fn test_format_bytes_approx() {
    assert_eq!(format_bytes_approx(100), "100 B");
    assert_eq!(format_bytes_approx(1023), "1023 B");
    assert_eq!(format_bytes_approx(1536), "1.5 KB");
    assert_eq!(format_bytes_approx(719_418_272), "686.1 MB");
}

#[test]
fn test_names_are_zero_padded() {
    assert_eq!(dir_name(0), "DIR_0000");
    assert_eq!(dir_name(42), "DIR_0042");
    assert_eq!(file_name(7), "FILE_0007.BIN");
    assert_eq!(file_name(12345), "FILE_12345.BIN");
}
