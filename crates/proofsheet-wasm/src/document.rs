//! Document synthesis WASM bindings.

use js_sys::{Array, Uint8Array};
use proofsheet_core::convert::convert_to_pdf;
use proofsheet_core::BuildError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::types::JsConversionResult;

/// Build a PDF from an ordered array of JPEG files.
///
/// Each input image becomes one page; the JPEG data is embedded without
/// re-encoding. Images whose dimensions cannot be read are skipped (with a
/// console warning) and reported in the result, in their input order.
///
/// # Arguments
///
/// * `images` - An `Array` of `Uint8Array`, one per JPEG file, in page order
///
/// # Returns
///
/// A `JsConversionResult` with the PDF bytes and the skipped indices.
///
/// # Errors
///
/// Returns an error if:
/// - Any array element is not a `Uint8Array`
/// - The array is empty, or no image in it could be decoded
///
/// # Example
///
/// ```typescript
/// const buffers = await Promise.all(files.map(f => f.arrayBuffer()));
/// const result = build_pdf(buffers.map(b => new Uint8Array(b)));
/// const blob = new Blob([result.pdf], { type: 'application/pdf' });
/// ```
#[wasm_bindgen]
pub fn build_pdf(images: &Array) -> Result<JsConversionResult, JsValue> {
    let mut inputs = Vec::with_capacity(images.length() as usize);
    for value in images.iter() {
        let bytes: Uint8Array = value
            .dyn_into()
            .map_err(|_| JsValue::from_str("expected an array of Uint8Array"))?;
        inputs.push(bytes.to_vec());
    }

    let output = convert_to_pdf(&inputs).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let skipped = output
        .skipped
        .iter()
        .filter_map(|error| match error {
            BuildError::ImageMetadata { index, .. } => {
                web_sys::console::warn_1(&JsValue::from_str(&error.to_string()));
                Some(*index as u32)
            }
            _ => None,
        })
        .collect();
    Ok(JsConversionResult::new(output.pdf, skipped))
}
