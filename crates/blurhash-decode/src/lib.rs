//! # blurhash-decode
//!
//! BlurHash decoding in pure Rust, for painting progressive-loading image
//! placeholders.
//!
//! [BlurHash](https://blurha.sh/) is a short ASCII string describing a
//! blurred approximation of an image as a handful of DCT coefficients. This
//! crate turns such a string back into a small pixel buffer. Decoding is a
//! pure function: no shared state, no I/O, and a fresh buffer owned by the
//! caller on every call.
//!
//! ## Quick Start
//!
//! ```
//! use blurhash_decode::{decode, decode_rgba, components};
//!
//! let hash = "LKO2?U%2Tw=w]~RBVZRi};RPxuwH";
//! assert_eq!(components(hash).unwrap(), (4, 3));
//!
//! let rgb = decode(hash, 32, 32, 1.0).unwrap();
//! assert_eq!(rgb.len(), 32 * 32 * 3);
//!
//! // RGBA, ready for a canvas `ImageData`.
//! let rgba = decode_rgba(hash, 32, 32, 1.0).unwrap();
//! assert_eq!(rgba.len(), 32 * 32 * 4);
//! ```
//!
//! ## Features
//!
//! - `parallel`: [`decode_many`] fans out over the rayon thread pool.
//! - `image`: `decode_image` returns an `image::RgbaImage`.

pub mod base83;
pub mod color;
pub mod error;
pub mod header;

mod batch;
mod decode_impl;
mod grid;
#[cfg(feature = "image")]
mod image_impl;

// Re-export primary functions at crate root.
pub use batch::decode_many;
pub use color::{linear_to_srgb, sign_pow, srgb_to_linear};
pub use decode_impl::{
    decode, decode_into, decode_rgba, decode_with, DecodeOptions, PixelBuffer, PixelFormat,
};
pub use error::DecodeError;
pub use grid::{ComponentGrid, Rgb};
pub use header::components;
#[cfg(feature = "image")]
pub use image_impl::decode_image;
