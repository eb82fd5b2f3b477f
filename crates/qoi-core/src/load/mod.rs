//! Pixel source for the encoder.
//!
//! This module provides functionality for:
//! - Reading image files from disk
//! - Decoding any format the `image` crate is built with (PNG, JPEG, BMP,
//!   GIF, TIFF, WebP) into RGB8 buffers
//!
//! # Examples
//!
//! ```ignore
//! use qoi_core::load::load_image;
//!
//! let image = load_image("photo.png".as_ref()).unwrap();
//! println!("Loaded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_image, load_image};
pub use types::{LoadError, SourceImage};
