//! WASM-compatible wrapper types.

use wasm_bindgen::prelude::*;

/// Result of a PDF conversion, exposed to JavaScript.
///
/// Wraps the finished byte stream together with the indices of any input
/// images that were excluded from the document.
#[wasm_bindgen]
pub struct JsConversionResult {
    pdf: Vec<u8>,
    skipped: Vec<u32>,
}

#[wasm_bindgen]
impl JsConversionResult {
    /// The finished PDF byte stream as a `Uint8Array`.
    #[wasm_bindgen(getter)]
    pub fn pdf(&self) -> Vec<u8> {
        self.pdf.clone()
    }

    /// Indices (into the input array) of images excluded because their
    /// dimensions could not be decoded.
    #[wasm_bindgen(getter)]
    pub fn skipped(&self) -> Vec<u32> {
        self.skipped.clone()
    }
}

impl JsConversionResult {
    pub(crate) fn new(pdf: Vec<u8>, skipped: Vec<u32>) -> Self {
        Self { pdf, skipped }
    }
}
