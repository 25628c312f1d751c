//! Disc identification: known image sizes and the two signature gates.

use crate::error::XenoError;

/// Sector count of a complete disc 1 image.
pub const DISC_1_SECTOR_COUNT: u64 = 305_586;

/// Sector count of a complete disc 2 image.
pub const DISC_2_SECTOR_COUNT: u64 = 292_815;

/// Sector holding the volume descriptor with the product identifier.
pub const SIGNATURE_SECTOR: u64 = 16;

/// Offset of the product identifier within the signature sector's data.
pub const SIGNATURE_OFFSET: usize = 0x28;

/// Product identifier expected at [`SIGNATURE_OFFSET`].
pub const SIGNATURE: &[u8; 9] = b"XENOGEARS";

/// Sector whose data region starts with the disc identifier.
pub const DISC_ID_SECTOR: u64 = 23;

const DISC_1_ID: &[u8; 14] = b"DS01_XENOGEARS";
const DISC_2_ID: &[u8; 14] = b"DS02_XENOGEARS";

/// Which of the two discs an image contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscVariant {
    Disc1,
    Disc2,
}

impl DiscVariant {
    /// Disc number, 1 or 2.
    pub fn number(&self) -> u8 {
        match self {
            Self::Disc1 => 1,
            Self::Disc2 => 2,
        }
    }

    /// The 14-byte identifier stored at the start of sector 23.
    pub fn identifier(&self) -> &'static [u8; 14] {
        match self {
            Self::Disc1 => DISC_1_ID,
            Self::Disc2 => DISC_2_ID,
        }
    }

    /// Sector count of a complete image of this disc.
    pub fn expected_sector_count(&self) -> u64 {
        match self {
            Self::Disc1 => DISC_1_SECTOR_COUNT,
            Self::Disc2 => DISC_2_SECTOR_COUNT,
        }
    }

    /// Classify a disc from the data region of [`DISC_ID_SECTOR`].
    pub fn from_id_sector(data: &[u8]) -> Result<Self, XenoError> {
        let prefix = data.get(..DISC_1_ID.len()).unwrap_or(data);
        if prefix == DISC_1_ID {
            Ok(Self::Disc1)
        } else if prefix == DISC_2_ID {
            Ok(Self::Disc2)
        } else {
            Err(XenoError::bad_signature(format!(
                "sector {} does not carry a disc identifier (found {:?})",
                DISC_ID_SECTOR,
                String::from_utf8_lossy(prefix)
            )))
        }
    }
}

impl std::fmt::Display for DiscVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Disc {}", self.number())
    }
}

/// Whether `sectors` is the length of a known disc image.
pub fn is_known_sector_count(sectors: u64) -> bool {
    sectors == DISC_1_SECTOR_COUNT || sectors == DISC_2_SECTOR_COUNT
}

/// Check the product identifier in the data region of [`SIGNATURE_SECTOR`].
pub fn check_signature(data: &[u8]) -> Result<(), XenoError> {
    let found = data.get(SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE.len());
    match found {
        Some(bytes) if bytes == SIGNATURE => Ok(()),
        Some(bytes) => Err(XenoError::bad_signature(format!(
            "expected {:?} at sector {} offset 0x{:02X}, found {:?}",
            String::from_utf8_lossy(SIGNATURE),
            SIGNATURE_SECTOR,
            SIGNATURE_OFFSET,
            String::from_utf8_lossy(bytes)
        ))),
        None => Err(XenoError::bad_signature("signature sector too short")),
    }
}

#[cfg(test)]
#[path = "tests/disc_tests.rs"]
mod tests;
