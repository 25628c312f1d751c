//! Shared settings file (`~/.config/xeno-reader/settings.toml`).
//!
//! ```toml
//! [extract]
//! output_dir = "/data/xenogears"
//! manifest = true
//! sha1 = false
//! ```
//!
//! A missing file or missing keys fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Canonical path to the settings file.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("xeno-reader").join("settings.toml")
}

/// All persisted settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub extract: ExtractSettings,
}

/// The `[extract]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractSettings {
    /// Default output root when none is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Write `manifest.txt` alongside extracted files.
    pub manifest: bool,
    /// Include SHA-1 in the manifest.
    pub sha1: bool,
}

impl Default for ExtractSettings {
    fn default() -> Self {
        Self {
            output_dir: None,
            manifest: true,
            sha1: false,
        }
    }
}

impl Settings {
    /// Load from [`settings_path`].
    pub fn load() -> Result<Self, ExtractError> {
        Self::load_from(&settings_path())
    }

    /// Load from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ExtractError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&contents)
            .map_err(|e| ExtractError::settings(format!("{}: {}", path.display(), e)))
    }

    /// Parse settings from TOML text.
    pub fn parse(contents: &str) -> Result<Self, ExtractError> {
        toml::from_str(contents).map_err(|e| ExtractError::settings(e.to_string()))
    }

    /// Pretty-printed TOML for display.
    pub fn to_toml(&self) -> Result<String, ExtractError> {
        toml::to_string_pretty(self).map_err(|e| ExtractError::settings(e.to_string()))
    }
}

/// Resolve where to extract an image using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `extract.output_dir` from the settings, joined with the image stem
/// 3. `<image-stem>-extracted` next to the current directory
pub fn resolve_output_dir(
    cli_override: Option<PathBuf>,
    settings: &Settings,
    image_path: &Path,
) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    match &settings.extract.output_dir {
        Some(root) => root.join(stem),
        None => PathBuf::from(format!("{}-extracted", stem)),
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
