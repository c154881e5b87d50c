//! Metadata extraction WASM bindings.
//!
//! These functions never throw: unreadable input simply produces a record
//! with every field absent, so the UI can call them on anything the user
//! drops in.

use proofsheet_core::exif;
use wasm_bindgen::prelude::*;

/// Extract EXIF metadata from raw JPEG bytes.
///
/// # Arguments
///
/// * `bytes` - The raw JPEG file bytes as a `Uint8Array`
///
/// # Returns
///
/// A plain object `{ manufacturer?, model?, date_time?, software?, gps? }`
/// where `gps` is `{ latitude, longitude }` in signed decimal degrees.
/// Fields the file does not carry are `null`.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const meta = extract_metadata(bytes);
/// if (meta.gps) {
///   console.log(`${meta.gps.latitude}, ${meta.gps.longitude}`);
/// }
/// ```
#[wasm_bindgen]
pub fn extract_metadata(bytes: &[u8]) -> JsValue {
    let meta = exif::extract_metadata(bytes);
    serde_wasm_bindgen::to_value(&meta).unwrap_or(JsValue::NULL)
}

/// Format the caption lines to burn into an image before conversion.
///
/// Returns the GPS line (six decimal places per axis) followed by the
/// capture date, omitting whichever the file does not carry. The UI draws
/// these onto its canvas; an empty array means no caption.
#[wasm_bindgen]
pub fn overlay_lines(bytes: &[u8]) -> Vec<String> {
    let meta = exif::extract_metadata(bytes);
    exif::overlay_lines(&meta)
}
