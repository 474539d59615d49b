//! Decoding straight into an [`image::RgbaImage`].

use image::RgbaImage;

use crate::decode_impl::decode_rgba;
use crate::error::DecodeError;

/// Decode a BlurHash into an [`RgbaImage`] of the given size.
///
/// # Errors
///
/// Same as [`decode`](crate::decode).
pub fn decode_image(
    blurhash: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> Result<RgbaImage, DecodeError> {
    let bytes = decode_rgba(blurhash, width, height, punch)?;
    // `decode_rgba` always returns exactly width * height * 4 bytes.
    RgbaImage::from_raw(width, height, bytes).ok_or(DecodeError::InvalidDimensions { width, height })
}
