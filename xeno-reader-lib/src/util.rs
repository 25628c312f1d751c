/// Display units, largest first.
const UNITS: [(u64, &str); 2] = [(1024 * 1024, "MB"), (1024, "KB")];

/// Byte count in the largest unit that divides it exactly ("2 KB",
/// "1536 KB"), falling back to plain bytes. Used for sizes that are
/// multiples of a sector or table.
pub fn format_bytes(bytes: u64) -> String {
    UNITS
        .iter()
        .find(|&&(unit, _)| bytes >= unit && bytes.is_multiple_of(unit))
        .map(|&(unit, name)| format!("{} {}", bytes / unit, name))
        .unwrap_or_else(|| format!("{} bytes", bytes))
}

/// Byte count with one decimal in the largest unit it reaches ("1.5 KB").
pub fn format_bytes_approx(bytes: u64) -> String {
    UNITS
        .iter()
        .find(|&&(unit, _)| bytes >= unit)
        .map(|&(unit, name)| format!("{:.1} {}", bytes as f64 / unit as f64, name))
        .unwrap_or_else(|| format!("{} B", bytes))
}

/// Name of the `n`th directory in pre-order.
pub fn dir_name(n: usize) -> String {
    format!("DIR_{:04}", n)
}

/// Name of the file at `index` within its directory.
pub fn file_name(index: usize) -> String {
    format!("FILE_{:04}.BIN", index)
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
