//! Base83 encoding and decoding used by the BlurHash format.
//!
//! Every field of a BlurHash (size flag, maximum AC value, DC colour and
//! AC components) is a big-endian base83 integer drawn from a fixed
//! 83-character alphabet.

use crate::error::DecodeError;

/// The 83-character alphabet used by BlurHash base83 encoding.
pub const ALPHABET: &[u8; 83] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

/// Lookup table mapping ASCII byte values to their base83 digit value.
/// Invalid characters map to `255`.
const fn build_decode_lut() -> [u8; 128] {
    let mut lut = [255u8; 128];
    let mut i = 0;
    while i < 83 {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

static DECODE_LUT: [u8; 128] = build_decode_lut();

/// Return the digit value of `ch`, or `None` if it is not in the alphabet.
///
/// # Examples
///
/// ```
/// use blurhash_decode::base83::digit;
/// assert_eq!(digit('L'), Some(21));
/// assert_eq!(digit('/'), None);
/// ```
#[inline]
pub fn digit(ch: char) -> Option<u8> {
    if !ch.is_ascii() {
        return None;
    }
    match DECODE_LUT[ch as usize] {
        255 => None,
        d => Some(d),
    }
}

/// Find the first character of `s` outside the base83 alphabet.
///
/// Returns the offending character and its byte offset.
pub fn find_invalid(s: &str) -> Option<(usize, char)> {
    s.char_indices().find(|&(_, ch)| digit(ch).is_none())
}

/// Decode a base83 string into an integer.
///
/// Up to 10 digits always fit in a `u64`.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`] if the string contains a
/// character not in the base83 alphabet (the position is relative to
/// `base83_str`), or [`DecodeError::Overflow`] if the value exceeds `u64`.
///
/// # Examples
///
/// ```
/// use blurhash_decode::base83::decode;
/// assert_eq!(decode("0").unwrap(), 0);
/// assert_eq!(decode("~").unwrap(), 82);
/// assert_eq!(decode("10").unwrap(), 83);
/// ```
pub fn decode(base83_str: &str) -> Result<u64, DecodeError> {
    let mut value: u64 = 0;
    for (position, ch) in base83_str.char_indices() {
        let d = digit(ch).ok_or(DecodeError::InvalidCharacter {
            character: ch,
            position,
        })?;
        value = value
            .checked_mul(83)
            .and_then(|v| v.checked_add(u64::from(d)))
            .ok_or(DecodeError::Overflow {
                digits: base83_str.chars().count(),
            })?;
    }
    Ok(value)
}

/// Append `value` to `out` as exactly `length` base83 digits.
///
/// # Errors
///
/// Returns [`DecodeError::ValueOutOfRange`] if the value does not fit.
pub fn encode_into(value: u64, length: usize, out: &mut String) -> Result<(), DecodeError> {
    let fits = match 83u64.checked_pow(length as u32) {
        Some(limit) => value < limit,
        None => true,
    };
    if !fits {
        return Err(DecodeError::ValueOutOfRange {
            value,
            digits: length,
        });
    }

    let mut digits = vec![ALPHABET[0]; length];
    let mut remaining = value;
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(remaining % 83) as usize];
        remaining /= 83;
    }
    out.extend(digits.iter().map(|&b| b as char));
    Ok(())
}

/// Encode an integer into a base83 string of the specified length.
///
/// # Errors
///
/// Returns [`DecodeError::ValueOutOfRange`] if the value is too large to
/// be represented in the given number of digits.
///
/// # Examples
///
/// ```
/// use blurhash_decode::base83::encode;
/// assert_eq!(encode(0, 1).unwrap(), "0");
/// assert_eq!(encode(82, 1).unwrap(), "~");
/// assert_eq!(encode(1, 4).unwrap(), "0001");
/// ```
pub fn encode(value: u64, length: usize) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(length);
    encode_into(value, length, &mut out)?;
    Ok(out)
}
