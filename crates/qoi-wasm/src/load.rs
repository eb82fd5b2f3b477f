//! Source image decoding WASM bindings.

use crate::types::JsDecodedImage;
use qoi_core::load;
use wasm_bindgen::prelude::*;

/// Decode image file bytes (PNG, JPEG, BMP, GIF, TIFF, WebP) to RGB pixels.
///
/// Alpha is discarded, matching the encoder's 3-channel output.
///
/// # Example
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const image = decode_image(bytes);
/// console.log(`Decoded ${image.width}x${image.height} image`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    load::decode_image(bytes)
        .map(JsDecodedImage::from_source)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
