//! BlurHash decoding: reconstruct a pixel buffer from a BlurHash string.
//!
//! The decoder validates the whole hash, de-quantises the component grid,
//! and then evaluates the inverse DCT for every output pixel. All
//! validation happens before the output buffer is allocated or written.

use std::f64::consts::PI;

use crate::color::linear_to_srgb;
use crate::error::DecodeError;
use crate::grid::ComponentGrid;

/// Byte layout of each output pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
    /// Three bytes per pixel: R, G, B.
    Rgb,
    /// Four bytes per pixel: R, G, B, and an opaque alpha of 255. This is the
    /// layout canvas `ImageData` expects.
    #[default]
    Rgba,
}

impl PixelFormat {
    /// Bytes per pixel.
    pub const fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// Decode settings.
///
/// ```
/// use blurhash_decode::{DecodeOptions, PixelFormat};
/// let opts = DecodeOptions::default().with_punch(1.5).with_format(PixelFormat::Rgb);
/// assert_eq!(opts.punch, 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeOptions {
    /// Contrast multiplier for the AC components (1.0 = as encoded).
    pub punch: f64,
    /// Output pixel layout.
    pub format: PixelFormat,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            punch: 1.0,
            format: PixelFormat::default(),
        }
    }
}

impl DecodeOptions {
    /// Set the punch factor.
    pub fn with_punch(mut self, punch: f64) -> Self {
        self.punch = punch;
        self
    }

    /// Set the output pixel layout.
    pub fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }
}

/// A decoded image: row-major pixels, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel layout of [`as_bytes`](Self::as_bytes).
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// The raw bytes, `width * height * format.channels()` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Take ownership of the raw bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// The channels of the pixel at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.format.channels();
        let idx = (y as usize * self.width as usize + x as usize) * channels;
        self.data.get(idx..idx + channels)
    }
}

impl AsRef<[u8]> for PixelBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<PixelBuffer> for Vec<u8> {
    fn from(buffer: PixelBuffer) -> Self {
        buffer.data
    }
}

/// Decode a BlurHash string into a flat RGB byte array.
///
/// # Arguments
///
/// * `blurhash` - The BlurHash string to decode.
/// * `width` - The desired output image width.
/// * `height` - The desired output image height.
/// * `punch` - Factor to boost/reduce contrast of the decoded image (1.0 = normal).
///
/// # Returns
///
/// A `Vec<u8>` of length `width * height * 3` containing RGB pixel data in
/// row-major order.
///
/// # Errors
///
/// Returns an error if the BlurHash string is malformed, either dimension
/// is zero, or `punch` is not a positive finite number.
///
/// # Examples
///
/// ```
/// use blurhash_decode::decode;
/// let pixels = decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 32, 32, 1.0).unwrap();
/// assert_eq!(pixels.len(), 32 * 32 * 3);
/// ```
pub fn decode(blurhash: &str, width: u32, height: u32, punch: f64) -> Result<Vec<u8>, DecodeError> {
    let opts = DecodeOptions {
        punch,
        format: PixelFormat::Rgb,
    };
    decode_with(blurhash, width, height, &opts).map(PixelBuffer::into_vec)
}

/// Decode a BlurHash string into a flat RGBA byte array (alpha is 255).
///
/// # Errors
///
/// Same as [`decode`].
///
/// # Examples
///
/// ```
/// use blurhash_decode::decode_rgba;
/// let pixels = decode_rgba("LKO2?U%2Tw=w]~RBVZRi};RPxuwH", 40, 30, 1.0).unwrap();
/// assert_eq!(pixels.len(), 40 * 30 * 4);
/// assert_eq!(pixels[3], 255);
/// ```
pub fn decode_rgba(
    blurhash: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> Result<Vec<u8>, DecodeError> {
    let opts = DecodeOptions {
        punch,
        format: PixelFormat::Rgba,
    };
    decode_with(blurhash, width, height, &opts).map(PixelBuffer::into_vec)
}

/// Decode a BlurHash string into a [`PixelBuffer`] using `opts`.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_with(
    blurhash: &str,
    width: u32,
    height: u32,
    opts: &DecodeOptions,
) -> Result<PixelBuffer, DecodeError> {
    let (grid, len) = prepare(blurhash, width, height, opts)?;
    let mut data = vec![0u8; len];
    render(&grid, width, height, opts.format, &mut data);
    Ok(PixelBuffer {
        width,
        height,
        format: opts.format,
        data,
    })
}

/// Decode a BlurHash string into an existing buffer.
///
/// `pixels` must be exactly `width * height * opts.format.channels()` bytes.
/// On error the buffer is left untouched.
///
/// # Errors
///
/// Same as [`decode`], plus [`DecodeError::BufferSize`] if `pixels` has the
/// wrong length.
///
/// # Examples
///
/// ```
/// use blurhash_decode::{decode_into, DecodeOptions};
/// let mut pixels = vec![0u8; 8 * 8 * 4];
/// decode_into(&mut pixels, "LEHV6nWB2yk8pyo0adR*.7kCMdnj", 8, 8, &DecodeOptions::default()).unwrap();
/// assert!(pixels.chunks(4).all(|px| px[3] == 255));
/// ```
pub fn decode_into(
    pixels: &mut [u8],
    blurhash: &str,
    width: u32,
    height: u32,
    opts: &DecodeOptions,
) -> Result<(), DecodeError> {
    let (grid, len) = prepare(blurhash, width, height, opts)?;
    if pixels.len() != len {
        log::debug!(
            "decode_into buffer of {} bytes, {width}x{height} {:?} needs {len}",
            pixels.len(),
            opts.format
        );
        return Err(DecodeError::BufferSize {
            expected: len,
            actual: pixels.len(),
        });
    }
    render(&grid, width, height, opts.format, pixels);
    Ok(())
}

/// Validate every input and return the parsed grid with the output length.
fn prepare(
    blurhash: &str,
    width: u32,
    height: u32,
    opts: &DecodeOptions,
) -> Result<(ComponentGrid, usize), DecodeError> {
    let result = ComponentGrid::parse(blurhash, opts.punch).and_then(|grid| {
        let len = output_len(width, height, opts.format)?;
        Ok((grid, len))
    });
    match &result {
        Ok((grid, _)) => log::trace!(
            "decoding {}x{} blurhash into {width}x{height} {:?}",
            grid.components_x(),
            grid.components_y(),
            opts.format
        ),
        Err(err) => log::debug!("rejected blurhash {blurhash:?}: {err}"),
    }
    result
}

fn output_len(width: u32, height: u32, format: PixelFormat) -> Result<usize, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(format.channels()))
        .ok_or(DecodeError::InvalidDimensions { width, height })
}

/// Evaluate the inverse DCT into `out`, which must already have the exact
/// output length.
fn render(grid: &ComponentGrid, width: u32, height: u32, format: PixelFormat, out: &mut [u8]) {
    let size_x = grid.components_x() as usize;
    let size_y = grid.components_y() as usize;
    let w = width as usize;
    let h = height as usize;
    let wf = f64::from(width);
    let hf = f64::from(height);
    let channels = format.channels();
    let colours = grid.colors();

    // cos_x[x * size_x + i] = cos(PI * x * i / width)
    let cos_x: Vec<f64> = (0..w)
        .flat_map(|x| (0..size_x).map(move |i| (PI * x as f64 * i as f64 / wf).cos()))
        .collect();
    // cos_y[y * size_y + j] = cos(PI * y * j / height)
    let cos_y: Vec<f64> = (0..h)
        .flat_map(|y| (0..size_y).map(move |j| (PI * y as f64 * j as f64 / hf).cos()))
        .collect();

    for (y, row) in out.chunks_exact_mut(w * channels).enumerate() {
        let cy_row = &cos_y[y * size_y..(y + 1) * size_y];
        for (x, px) in row.chunks_exact_mut(channels).enumerate() {
            let cx_row = &cos_x[x * size_x..(x + 1) * size_x];
            let mut pixel = [0.0f64; 3];

            for (j, &cy) in cy_row.iter().enumerate() {
                let colour_row = &colours[j * size_x..(j + 1) * size_x];
                for (colour, &cx) in colour_row.iter().zip(cx_row) {
                    let basis = cx * cy;
                    pixel[0] += colour[0] * basis;
                    pixel[1] += colour[1] * basis;
                    pixel[2] += colour[2] * basis;
                }
            }

            px[0] = linear_to_srgb(pixel[0]);
            px[1] = linear_to_srgb(pixel[1]);
            px[2] = linear_to_srgb(pixel[2]);
            if channels == 4 {
                px[3] = 255;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_HASH: &str = "LEHV6nWB2yk8pyo0adR*.7kCMdnj";

    #[test]
    fn test_decode_output_size() {
        let pixels = decode(KNOWN_HASH, 32, 32, 1.0).unwrap();
        assert_eq!(pixels.len(), 32 * 32 * 3);
        let pixels = decode_rgba(KNOWN_HASH, 7, 5, 1.0).unwrap();
        assert_eq!(pixels.len(), 7 * 5 * 4);
    }

    #[test]
    fn test_decode_too_short() {
        assert_eq!(
            decode("ABC", 32, 32, 1.0),
            Err(DecodeError::InvalidLength { actual: 3 })
        );
    }

    #[test]
    fn test_decode_wrong_length() {
        assert!(matches!(
            decode("L00000", 32, 32, 1.0),
            Err(DecodeError::LengthMismatch { expected: 28, actual: 6 })
        ));
    }

    #[test]
    fn test_decode_zero_dimensions() {
        assert_eq!(
            decode(KNOWN_HASH, 0, 32, 1.0),
            Err(DecodeError::InvalidDimensions {
                width: 0,
                height: 32
            })
        );
        assert_eq!(
            decode(KNOWN_HASH, 32, 0, 1.0),
            Err(DecodeError::InvalidDimensions {
                width: 32,
                height: 0
            })
        );
    }

    #[test]
    fn test_decode_known_pixels() {
        // Corners of a 4x3 decode, checked against the reference algorithm.
        let pixels = decode(KNOWN_HASH, 4, 3, 1.0).unwrap();
        assert_eq!(&pixels[0..3], &[135, 164, 177]);
        assert_eq!(&pixels[33..36], &[148, 140, 134]);
    }

    #[test]
    fn test_rgba_matches_rgb() {
        let rgb = decode(KNOWN_HASH, 9, 6, 1.0).unwrap();
        let rgba = decode_rgba(KNOWN_HASH, 9, 6, 1.0).unwrap();
        for (a, b) in rgb.chunks(3).zip(rgba.chunks(4)) {
            assert_eq!(a, &b[..3]);
            assert_eq!(b[3], 255);
        }
    }

    #[test]
    fn test_decode_punch() {
        let normal = decode(KNOWN_HASH, 4, 4, 1.0).unwrap();
        let punched = decode(KNOWN_HASH, 4, 4, 2.0).unwrap();
        assert_ne!(normal, punched);
    }

    #[test]
    fn test_decode_1x1_uniform() {
        // "00TI:j" is a single red DC term.
        let decoded = decode("00TI:j", 4, 4, 1.0).unwrap();
        for px in decoded.chunks(3) {
            assert_eq!(px, &[255, 0, 0]);
        }
    }

    #[test]
    fn test_decode_into_leaves_buffer_on_error() {
        let mut pixels = vec![7u8; 4 * 4 * 4];
        let err = decode_into(&mut pixels, "L00000", 4, 4, &DecodeOptions::default());
        assert!(err.is_err());
        assert!(pixels.iter().all(|&b| b == 7));
    }

    #[test]
    fn test_decode_into_wrong_buffer_size() {
        let mut pixels = vec![0u8; 10];
        assert_eq!(
            decode_into(&mut pixels, KNOWN_HASH, 4, 4, &DecodeOptions::default()),
            Err(DecodeError::BufferSize {
                expected: 64,
                actual: 10
            })
        );
    }

    #[test]
    fn test_pixel_buffer_accessors() {
        let opts = DecodeOptions::default().with_format(PixelFormat::Rgb);
        let buffer = decode_with(KNOWN_HASH, 4, 3, &opts).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (4, 3));
        assert_eq!(buffer.format(), PixelFormat::Rgb);
        assert_eq!(buffer.pixel(0, 0), Some(&[135u8, 164, 177][..]));
        assert_eq!(buffer.pixel(3, 2), Some(&[148u8, 140, 134][..]));
        assert_eq!(buffer.pixel(4, 0), None);
        assert_eq!(buffer.as_bytes().len(), 36);
    }

    #[test]
    fn test_default_options() {
        let opts = DecodeOptions::default();
        assert_eq!(opts.punch, 1.0);
        assert_eq!(opts.format, PixelFormat::Rgba);
        assert_eq!(PixelFormat::Rgb.channels(), 3);
        assert_eq!(PixelFormat::Rgba.channels(), 4);
    }
}
