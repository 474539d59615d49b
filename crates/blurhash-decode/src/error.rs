//! Error types for BlurHash decoding.

use thiserror::Error;

/// Errors that can occur while decoding a BlurHash.
///
/// Every variant is produced by validation that runs before any output
/// buffer is allocated or written, so a failed decode never leaves a
/// partially filled image behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    /// The hash is too short to contain the 6-character header.
    #[error("invalid BlurHash length: need at least 6 characters, got {actual}")]
    InvalidLength {
        /// The actual length.
        actual: usize,
    },

    /// The size-flag character is not part of the base83 alphabet.
    #[error("invalid BlurHash header: size flag {0:?} is not a base83 character")]
    InvalidHeader(char),

    /// The length implied by the size flag differs from the actual length.
    #[error("BlurHash length mismatch: header implies {expected} characters, got {actual}")]
    LengthMismatch {
        /// The length implied by the component counts.
        expected: usize,
        /// The actual length.
        actual: usize,
    },

    /// A character outside the base83 alphabet was found in the body.
    #[error("invalid base83 character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character within the input.
        position: usize,
    },

    /// The requested output dimensions are zero.
    #[error("invalid dimensions: {width}x{height} (width and height must be > 0)")]
    InvalidDimensions {
        /// The width value.
        width: u32,
        /// The height value.
        height: u32,
    },

    /// The punch factor is not a positive finite number.
    #[error("invalid punch: {0} (must be finite and > 0)")]
    InvalidPunch(f64),

    /// A component count is out of the valid range (1..=9).
    #[error("component count out of range: {axis} = {value} (must be 1..=9)")]
    InvalidComponentCount {
        /// Which component axis ("x" or "y").
        axis: &'static str,
        /// The invalid value.
        value: u32,
    },

    /// The destination buffer passed to `decode_into` has the wrong size.
    #[error("destination buffer holds {actual} bytes, expected {expected}")]
    BufferSize {
        /// Bytes required for the requested dimensions and format.
        expected: usize,
        /// Bytes provided.
        actual: usize,
    },

    /// A value does not fit in the requested number of base83 digits.
    #[error("value {value} does not fit in {digits} base83 digits")]
    ValueOutOfRange {
        /// The value being encoded.
        value: u64,
        /// The number of digits available.
        digits: usize,
    },

    /// A base83 string has too many digits to fit in a `u64`.
    #[error("base83 string of {digits} digits overflows u64")]
    Overflow {
        /// The number of digits in the input.
        digits: usize,
    },
}
