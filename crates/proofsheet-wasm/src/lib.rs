//! Proofsheet WASM - WebAssembly bindings for Proofsheet
//!
//! This crate exposes the proofsheet-core functionality to the browser UI:
//! EXIF metadata extraction (per image, callable from Web Workers) and PDF
//! assembly (one call over the final image order).
//!
//! # Module Structure
//!
//! - `metadata` - EXIF extraction and overlay caption bindings
//! - `document` - PDF assembly binding
//! - `types` - WASM-compatible wrapper types for the conversion result
//!
//! # Usage
//!
//! ```typescript
//! import init, { extract_metadata, build_pdf } from '@proofsheet/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const meta = extract_metadata(bytes);
//! const result = build_pdf([bytes]);
//! ```

use wasm_bindgen::prelude::*;

mod document;
mod metadata;
mod types;

// Re-export public surface
pub use document::build_pdf;
pub use metadata::{extract_metadata, overlay_lines};
pub use types::JsConversionResult;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
