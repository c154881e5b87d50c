//! Core types for metadata extraction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for JPEG/TIFF metadata parsing.
///
/// None of these escape [`crate::exif::extract_metadata`]: every variant is
/// caught at the per-image boundary and degrades to empty or partial
/// metadata, so a malformed camera file never aborts a batch.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MetadataError {
    /// The buffer does not start with the JPEG SOI marker.
    #[error("Not a JPEG file (missing 0xFFD8 SOI marker)")]
    NotAJpeg,

    /// The TIFF block starts with neither "II" nor "MM".
    #[error("Unsupported TIFF byte order marker")]
    UnsupportedByteOrder,

    /// The 16-bit TIFF magic number is not 42.
    #[error("Bad TIFF magic number (expected 42)")]
    BadTiffMagic,
}

/// GPS position in signed decimal degrees.
///
/// Derived from EXIF DMS triplets; south and west hemispheres are negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsCoordinate {
    /// Latitude in decimal degrees (negative = southern hemisphere).
    pub latitude: f64,
    /// Longitude in decimal degrees (negative = western hemisphere).
    pub longitude: f64,
}

impl GpsCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether this is the exact (0, 0) pair.
    ///
    /// Degenerate DMS input converts to 0.0, so an exact null-island pair
    /// means "no GPS data" and is excluded from GPS-dependent output.
    pub fn is_null(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

/// Metadata extracted from a JPEG's EXIF block.
///
/// Every field is optional: absence means the tag was not present in the
/// file, not that extraction failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExifMetadata {
    /// Camera manufacturer (EXIF Make, tag 0x010F).
    pub manufacturer: Option<String>,
    /// Camera model (EXIF Model, tag 0x0110).
    pub model: Option<String>,
    /// Capture date/time string as stored in the file (tag 0x0132).
    pub date_time: Option<String>,
    /// Producing software (tag 0x0131).
    pub software: Option<String>,
    /// GPS position, when the GPS sub-IFD holds a usable fix.
    pub gps: Option<GpsCoordinate>,
}

impl ExifMetadata {
    /// Check if no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.manufacturer.is_none()
            && self.model.is_none()
            && self.date_time.is_none()
            && self.software.is_none()
            && self.gps.is_none()
    }
}
