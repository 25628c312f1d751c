//! Checksum manifest for extracted files.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use sha1::Digest;

/// Checksums of one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentHashes {
    pub crc32: String,
    pub sha1: Option<String>,
}

/// One manifest line.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub path: PathBuf,
    pub sector: u32,
    pub size: i32,
    pub hashes: ContentHashes,
}

/// Compute CRC32 and, if asked, SHA-1 of `data`.
pub fn hash_content(data: &[u8], with_sha1: bool) -> ContentHashes {
    let crc32 = format!("{:08x}", crc32fast::hash(data));
    let sha1 = with_sha1.then(|| {
        let mut sha = sha1::Sha1::new();
        sha.update(data);
        format!("{:x}", sha.finalize())
    });
    ContentHashes { crc32, sha1 }
}

/// Render the manifest as tab-separated text.
///
/// Paths always use `/` separators regardless of host platform.
pub fn format_manifest(entries: &[ManifestEntry]) -> String {
    let mut out = String::from("# path\tsector\tsize\tcrc32\tsha1\n");
    for entry in entries {
        let path: Vec<String> = entry
            .path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\n",
            path.join("/"),
            entry.sector,
            entry.size,
            entry.hashes.crc32,
            entry.hashes.sha1.as_deref().unwrap_or("-")
        ));
    }
    out
}

/// Write the manifest to `path`.
pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(format_manifest(entries).as_bytes())?;
    file.flush()
}

#[cfg(test)]
#[path = "tests/manifest_tests.rs"]
mod tests;
