//! Sequential document serialization with byte-offset tracking.
//!
//! Synthesis is inherently a single pass: the cross-reference table records
//! the byte offset of every object in the final file, so objects must be
//! appended in their final order and each offset taken from the buffer
//! length immediately before the append. Nothing is written externally
//! until the whole stream is finished, so cancelling a batch simply drops
//! the buffer.
//!
//! Object id order is fixed by construction: 1 is the catalog, each image
//! contributes an XObject, a content stream, and a page (in that order),
//! and the pages tree comes last.

use super::layout;
use super::object::PdfObject;
use super::types::{BuildError, PageImage};

const PDF_HEADER: &[u8] = b"%PDF-1.4\n";

/// Append-only output buffer. Each object's offset is the buffer length
/// right before its first byte is appended, which by definition matches
/// the final file position.
struct DocumentWriter {
    buf: Vec<u8>,
    offsets: Vec<u64>,
}

impl DocumentWriter {
    fn new() -> Self {
        Self {
            buf: PDF_HEADER.to_vec(),
            offsets: Vec::new(),
        }
    }

    fn append(&mut self, object: &PdfObject) {
        // ids are assigned monotonically from 1 in append order
        debug_assert_eq!(object.id as usize, self.offsets.len() + 1);
        self.offsets.push(self.buf.len() as u64);
        self.buf.extend_from_slice(&object.to_bytes());
    }

    /// Emit the xref table and trailer, then hand back the finished stream.
    ///
    /// Xref lines are positional: exactly ten decimal digits of offset, a
    /// space, five digits of generation, a space, the in-use flag, a space
    /// and a newline. Entry 0 is the fixed free-list head.
    fn finish(mut self, catalog_id: u32) -> Vec<u8> {
        let xref_offset = self.buf.len();
        let size = self.offsets.len() + 1;

        self.buf.extend_from_slice(b"xref\n");
        self.buf.extend_from_slice(format!("0 {}\n", size).as_bytes());
        self.buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &self.offsets {
            self.buf
                .extend_from_slice(format!("{:010} {:05} n \n", offset, 0).as_bytes());
        }

        self.buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF\n",
                size, catalog_id, xref_offset
            )
            .as_bytes(),
        );
        self.buf
    }
}

/// Build a complete PDF document: one page per input image, JPEG bytes
/// embedded verbatim under `/DCTDecode`.
///
/// Deterministic: identical input produces byte-identical output.
///
/// # Errors
///
/// Returns [`BuildError::EmptyInput`] for an empty input list; no bytes
/// are produced in that case.
pub fn build_document(images: &[PageImage]) -> Result<Vec<u8>, BuildError> {
    if images.is_empty() {
        return Err(BuildError::EmptyInput);
    }

    let catalog_id = 1u32;
    // ids 2..=3N+1 belong to the per-image triples; the pages tree follows
    let pages_id = 3 * images.len() as u32 + 2;

    let mut writer = DocumentWriter::new();
    writer.append(
        &PdfObject::new(catalog_id)
            .entry("Type", "/Catalog")
            .entry("Pages", PdfObject::reference(pages_id)),
    );

    let mut page_ids = Vec::with_capacity(images.len());
    for (i, image) in images.iter().enumerate() {
        let xobject_id = 2 + 3 * i as u32;
        let content_id = xobject_id + 1;
        let page_id = xobject_id + 2;
        page_ids.push(page_id);

        writer.append(
            &PdfObject::new(xobject_id)
                .entry("Type", "/XObject")
                .entry("Subtype", "/Image")
                .entry("Width", image.width.to_string())
                .entry("Height", image.height.to_string())
                .entry("ColorSpace", "/DeviceRGB")
                .entry("BitsPerComponent", "8")
                .entry("Filter", "/DCTDecode")
                .entry("Length", image.jpeg.len().to_string())
                .stream(image.jpeg.clone()),
        );

        let page_layout = layout::layout_for(image.width, image.height);
        let program = layout::content_program(&page_layout, i);
        writer.append(
            &PdfObject::new(content_id)
                .entry("Length", program.len().to_string())
                .stream(program.into_bytes()),
        );

        writer.append(
            &PdfObject::new(page_id)
                .entry("Type", "/Page")
                .entry("Parent", PdfObject::reference(pages_id))
                .entry(
                    "MediaBox",
                    format!(
                        "[0 0 {} {}]",
                        page_layout.page_width, page_layout.page_height
                    ),
                )
                .entry(
                    "Resources",
                    format!(
                        "<< /XObject << /Im{} {} >> >>",
                        i,
                        PdfObject::reference(xobject_id)
                    ),
                )
                .entry("Contents", PdfObject::reference(content_id)),
        );
    }

    let kids = page_ids
        .iter()
        .map(|id| PdfObject::reference(*id))
        .collect::<Vec<_>>()
        .join(" ");
    writer.append(
        &PdfObject::new(pages_id)
            .entry("Type", "/Pages")
            .entry("Kids", format!("[{}]", kids))
            .entry("Count", images.len().to_string()),
    );

    Ok(writer.finish(catalog_id))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
