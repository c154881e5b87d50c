//! EXIF metadata extraction pipeline.
//!
//! This module provides functionality for:
//! - Scanning JPEG marker segments to locate the APP1 Exif payload
//! - Decoding the TIFF/IFD structure inside that payload
//! - Converting GPS DMS triplets to signed decimal degrees
//! - Formatting the caption lines the UI burns into each image
//!
//! # Architecture
//!
//! Extraction is a pure, synchronous computation over one immutable byte
//! buffer per image; there is no shared mutable state, so distinct images
//! can be processed fully in parallel (in the browser, from separate Web
//! Workers). The pipeline never throws at its outer surface: any parse
//! problem degrades to empty or partial metadata so a single bad camera
//! file cannot abort a batch.

mod gps;
mod overlay;
mod segment;
mod tiff;
mod types;

pub use gps::dms_to_decimal;
pub use overlay::overlay_lines;
pub use segment::{scan, ScanResult, Segment, MARKER_APP1, MARKER_SOI, MARKER_SOS};
pub use tiff::{decode_tiff, Endian, TIFF_MAGIC};
pub use types::{ExifMetadata, GpsCoordinate, MetadataError};

/// Extract EXIF metadata from raw JPEG bytes.
///
/// This is the query surface the UI calls: it never fails. Non-JPEG input,
/// a missing APP1 segment, truncation, or an unreadable TIFF block all
/// yield a record with the affected fields absent.
pub fn extract_metadata(bytes: &[u8]) -> ExifMetadata {
    let scanned = match segment::scan(bytes) {
        Ok(result) => result,
        Err(_) => return ExifMetadata::default(),
    };
    match scanned.exif {
        Some(range) => tiff::decode_tiff(&bytes[range]),
        None => ExifMetadata::default(),
    }
}
