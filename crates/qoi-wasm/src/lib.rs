//! QOI WASM - WebAssembly bindings for qoi-core
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `load` - Source image decoding (PNG, JPEG, ...)
//! - `encode` - QOI encoding and statistics
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, encode_qoi_from_image } from '@qoienc/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const qoi = encode_qoi_from_image(image);
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod load;
mod types;

// Re-export public types
pub use encode::{encode_qoi, encode_qoi_from_image, encode_qoi_stats};
pub use load::decode_image;
pub use types::JsDecodedImage;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
