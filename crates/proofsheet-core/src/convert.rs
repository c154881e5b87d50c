//! Batch conversion: the external decode boundary plus one synthesis pass.
//!
//! The UI hands over an ordered list of JPEG byte buffers. Each image's
//! decoded pixel dimensions are probed independently (and could be probed
//! in parallel); the document build then runs once, sequentially, over the
//! images that survived, because byte offsets accumulate over the final
//! serialization order. All state lives in per-request values; nothing is
//! written anywhere until the finished stream is returned.

use std::io::Cursor;

use image::ImageReader;

use crate::pdf::{build_document, BuildError, PageImage};

/// The outcome of one conversion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    /// The finished PDF byte stream.
    pub pdf: Vec<u8>,
    /// Per-image failures: each excluded image's index and reason. The
    /// document contains the remaining images in their original order.
    pub skipped: Vec<BuildError>,
}

/// Convert an ordered batch of JPEG buffers into a single PDF.
///
/// Images whose dimensions cannot be read are excluded and reported in
/// [`ConversionOutput::skipped`] rather than corrupting the document.
///
/// # Errors
///
/// Returns [`BuildError::EmptyInput`] when the input list is empty, or when
/// every image in it failed the dimension probe.
pub fn convert_to_pdf(inputs: &[Vec<u8>]) -> Result<ConversionOutput, BuildError> {
    let mut pages = Vec::with_capacity(inputs.len());
    let mut skipped = Vec::new();

    for (index, bytes) in inputs.iter().enumerate() {
        match decode_dimensions(bytes) {
            Ok((width, height)) => pages.push(PageImage::new(bytes.clone(), width, height)),
            Err(reason) => skipped.push(BuildError::ImageMetadata { index, reason }),
        }
    }

    let pdf = build_document(&pages)?;
    Ok(ConversionOutput { pdf, skipped })
}

/// Probe a JPEG header for its decoded pixel dimensions.
///
/// Reads only the image header, not the pixel data. The error is carried
/// as a string because it only ever feeds a skip report.
pub fn decode_dimensions(bytes: &[u8]) -> Result<(u32, u32), String> {
    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| e.to_string())?
        .into_dimensions()
        .map_err(|e| e.to_string())
}
