//! QOI encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_qoi`] - Encode RGB pixel data to QOI bytes
//! - [`encode_qoi_from_image`] - Encode a JsDecodedImage to QOI bytes
//! - [`encode_qoi_stats`] - Opcode statistics for an encode, as a JS object
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, encode_qoi_from_image } from '@qoienc/wasm';
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const qoi = encode_qoi_from_image(image);
//! await writable.write(new Blob([qoi], { type: 'image/qoi' }));
//! ```

use crate::types::JsDecodedImage;
use qoi_core::encode;
use wasm_bindgen::prelude::*;

/// Encode RGB pixel data to QOI bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data as a `Uint8Array` (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Errors
///
/// Returns an error if:
/// - The pixel data length doesn't match width * height * 3
/// - Width or height is zero
#[wasm_bindgen]
pub fn encode_qoi(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_qoi_rgb(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsDecodedImage to QOI bytes.
#[wasm_bindgen]
pub fn encode_qoi_from_image(image: &JsDecodedImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_qoi_rgb(image.pixel_data(), image.width(), image.height())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode RGB pixel data and return the opcode statistics as a plain object:
/// `{ pixel_count, runs, run_pixels, indexed, diffs, literals, bytes_written }`.
#[wasm_bindgen]
pub fn encode_qoi_stats(pixels: &[u8], width: u32, height: u32) -> Result<JsValue, JsValue> {
    let stats = stats_for(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn stats_for(
    pixels: &[u8],
    width: u32,
    height: u32,
) -> Result<encode::EncodeStats, encode::EncodeError> {
    encode::encode_qoi_rgb_to(&mut std::io::sink(), pixels, width, height)
}
