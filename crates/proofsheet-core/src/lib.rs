//! Proofsheet Core - EXIF extraction and PDF assembly
//!
//! This crate provides the core functionality for Proofsheet, a browser
//! tool that reads the EXIF metadata of JPEG photos and bundles the photos,
//! one per page, into a PDF.
//!
//! Two pipelines share one metadata record shape:
//!
//! - **Extraction** ([`exif`]): segment scan → TIFF/IFD decode → GPS
//!   conversion → caption formatting. Pure and synchronous per image, safe
//!   to fan out across Web Workers.
//! - **Synthesis** ([`pdf`], driven by [`convert`]): object graph → offset
//!   tracking → xref table → trailer. One sequential pass, because byte
//!   offsets accumulate over the final object order.
//!
//! Parse problems degrade per image (absent fields, skipped pages); only a
//! batch with nothing to write at all fails.

pub mod convert;
pub mod exif;
pub mod pdf;

#[cfg(test)]
pub(crate) mod testutil;

pub use convert::{convert_to_pdf, decode_dimensions, ConversionOutput};
pub use exif::{
    dms_to_decimal, extract_metadata, overlay_lines, ExifMetadata, GpsCoordinate, MetadataError,
};
pub use pdf::{build_document, BuildError, PageImage};
