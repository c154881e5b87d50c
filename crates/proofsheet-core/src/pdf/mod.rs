//! PDF document synthesis pipeline.
//!
//! This module provides functionality for:
//! - Building the fixed object graph (catalog, per-image XObject/content/page
//!   triples, pages tree)
//! - Page geometry: per-image orientation and aspect-preserving placement
//! - Serializing the object stream with exact byte-offset bookkeeping,
//!   the cross-reference table, and the trailer
//!
//! Image payloads are embedded verbatim: JPEG entropy coding is already
//! DCT-domain, so `/DCTDecode` streams need no re-encoding.

mod layout;
mod object;
mod types;
mod writer;

pub use layout::{
    content_program, layout_for, PageLayout, LETTER_HEIGHT_PT, LETTER_WIDTH_PT, MARGIN_PT,
};
pub use object::PdfObject;
pub use types::{BuildError, PageImage};
pub use writer::build_document;
