//! WebAssembly exports.
//!
//! Exposes the filter pipeline to JavaScript via wasm-bindgen. The JS
//! host supplies the raw bytes of a user-selected file and a filter
//! name from the selection UI, and receives PNG bytes for preview or
//! download. Errors are stringified for JS consumption.

use wasm_bindgen::prelude::*;

/// Apply a named filter to encoded image bytes, returning PNG bytes.
///
/// # Arguments
/// * `image_bytes` - Raw bytes of the uploaded file (PNG, JPEG, ...)
/// * `filter_name` - One of the nine filter names, e.g. `"grayscale"`
///
/// # Returns
/// PNG bytes, or a string error when decoding fails or the filter name
/// is unknown
#[wasm_bindgen]
pub fn apply_filter(image_bytes: &[u8], filter_name: &str) -> Result<Vec<u8>, JsValue> {
    crate::engine::apply_filter(image_bytes, filter_name)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
