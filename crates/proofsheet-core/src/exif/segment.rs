//! JPEG marker segment scanning.
//!
//! Walks the marker stream of a JPEG file from the SOI marker up to the
//! start of the entropy-coded scan data, collecting segment boundaries and
//! locating the APP1 Exif payload. Scanning is strictly forward over an
//! immutable byte slice and never reads out of bounds: a length field that
//! points past the buffer stops the walk with a partial result instead of
//! failing, matching the "extract whatever you can" policy needed for
//! slightly malformed camera output.

use std::ops::Range;

use super::types::MetadataError;

/// Start of image.
pub const MARKER_SOI: u16 = 0xFFD8;
/// APP1, the segment that carries EXIF (and XMP) payloads.
pub const MARKER_APP1: u16 = 0xFFE1;
/// Start of scan; compressed image data follows, no further metadata.
pub const MARKER_SOS: u16 = 0xFFDA;

/// The 6-byte signature at the start of an APP1 Exif payload.
const EXIF_SIGNATURE: &[u8; 6] = b"Exif\0\0";

/// One marker segment: the marker value plus its payload's byte range in
/// the scanned buffer (marker and length field excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub marker: u16,
    pub payload: Range<usize>,
}

/// Everything gathered by one walk over the marker stream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Segments in stream order, up to (not including) SOS.
    pub segments: Vec<Segment>,
    /// Byte range of the TIFF block inside the first APP1 Exif payload,
    /// with the 6-byte signature already skipped.
    pub exif: Option<Range<usize>>,
    /// Set when a length field pointed past the end of the buffer and the
    /// walk stopped early with whatever it had.
    pub truncated: bool,
}

/// Markers with no length field following them.
///
/// TEM (0x01), RST0-RST7 (0xD0-0xD7), SOI and EOI stand alone in the
/// stream; everything else carries a 2-byte big-endian length that
/// includes itself.
fn is_standalone(marker: u16) -> bool {
    matches!(marker, 0xFF01 | 0xFFD0..=0xFFD9)
}

/// Scan a JPEG byte buffer for marker segments.
///
/// # Errors
///
/// Returns [`MetadataError::NotAJpeg`] if the buffer does not start with
/// the SOI marker. Truncation mid-stream is not an error: the walk stops
/// and the partial result carries the `truncated` flag.
pub fn scan(bytes: &[u8]) -> Result<ScanResult, MetadataError> {
    if bytes.len() < 2 || bytes[0] != 0xFF || bytes[1] != 0xD8 {
        return Err(MetadataError::NotAJpeg);
    }

    let mut result = ScanResult::default();
    let mut pos = 2;

    loop {
        if pos + 2 > bytes.len() {
            // clean end of the marker stream
            break;
        }
        if bytes[pos] != 0xFF {
            // not a marker; nothing further worth scanning
            break;
        }
        let marker = u16::from_be_bytes([bytes[pos], bytes[pos + 1]]);
        pos += 2;

        if marker == MARKER_SOS {
            break;
        }
        if is_standalone(marker) {
            result.segments.push(Segment {
                marker,
                payload: pos..pos,
            });
            continue;
        }

        if pos + 2 > bytes.len() {
            result.truncated = true;
            break;
        }
        // length includes the 2 length bytes themselves
        let length = u16::from_be_bytes([bytes[pos], bytes[pos + 1]]) as usize;
        if length < 2 {
            result.truncated = true;
            break;
        }
        let start = pos + 2;
        let end = pos + length;

        if end > bytes.len() {
            // The declared payload runs past the buffer. Keep whatever was
            // already collected, and still forward a clamped Exif payload so
            // the TIFF reader can salvage partial metadata.
            result.truncated = true;
            if marker == MARKER_APP1 && result.exif.is_none() {
                if let Some(tiff) = exif_payload(bytes, start, bytes.len()) {
                    result.exif = Some(tiff);
                }
            }
            break;
        }

        result.segments.push(Segment {
            marker,
            payload: start..end,
        });
        if marker == MARKER_APP1 && result.exif.is_none() {
            if let Some(tiff) = exif_payload(bytes, start, end) {
                result.exif = Some(tiff);
            }
        }
        pos = end;
    }

    Ok(result)
}

/// Check an APP1 payload for the Exif signature and return the TIFF block
/// range that follows it.
fn exif_payload(bytes: &[u8], start: usize, end: usize) -> Option<Range<usize>> {
    let header_end = start + EXIF_SIGNATURE.len();
    if header_end > end || &bytes[start..header_end] != EXIF_SIGNATURE {
        return None;
    }
    Some(header_end..end)
}
