//! The BlurHash header: size flag, component counts and expected length.

use crate::base83;
use crate::error::DecodeError;

/// Shortest possible BlurHash: size flag, max AC, 4-digit DC.
pub const MIN_LEN: usize = 6;

/// Largest component count along either axis.
pub const MAX_COMPONENTS: u32 = 9;

/// Pack component counts into the single-digit size flag.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidComponentCount`] if either count is
/// outside `1..=9`.
///
/// # Examples
///
/// ```
/// use blurhash_decode::header::size_flag;
/// assert_eq!(size_flag(4, 3).unwrap(), 21);
/// ```
pub fn size_flag(components_x: u32, components_y: u32) -> Result<u32, DecodeError> {
    check_count("x", components_x)?;
    check_count("y", components_y)?;
    Ok((components_x - 1) + (components_y - 1) * 9)
}

/// Unpack a size flag into `(components_x, components_y)`.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidComponentCount`] if the flag is larger than
/// the 9x9 maximum (only possible for flags 81 and 82).
pub fn from_size_flag(flag: u32) -> Result<(u32, u32), DecodeError> {
    let components_x = flag % 9 + 1;
    let components_y = flag / 9 + 1;
    check_count("y", components_y)?;
    Ok((components_x, components_y))
}

/// Number of characters a hash with the given component counts must have.
#[inline]
pub fn expected_len(components_x: u32, components_y: u32) -> usize {
    4 + 2 * (components_x * components_y) as usize
}

fn check_count(axis: &'static str, value: u32) -> Result<(), DecodeError> {
    if (1..=MAX_COMPONENTS).contains(&value) {
        Ok(())
    } else {
        Err(DecodeError::InvalidComponentCount { axis, value })
    }
}

/// Extract the number of X and Y components from a BlurHash string.
///
/// Validates the minimum length, the size-flag character and that the total
/// length matches the declared component counts. The body characters are
/// not inspected.
///
/// # Errors
///
/// [`DecodeError::InvalidLength`], [`DecodeError::InvalidHeader`] or
/// [`DecodeError::LengthMismatch`].
///
/// # Examples
///
/// ```
/// use blurhash_decode::components;
/// assert_eq!(components("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap(), (4, 3));
/// ```
pub fn components(blurhash: &str) -> Result<(u32, u32), DecodeError> {
    if blurhash.len() < MIN_LEN {
        return Err(DecodeError::InvalidLength {
            actual: blurhash.len(),
        });
    }

    // `len() >= 6` guarantees a first character.
    let first = blurhash.chars().next().unwrap_or_default();
    let flag = base83::digit(first).ok_or(DecodeError::InvalidHeader(first))?;
    let (components_x, components_y) =
        from_size_flag(u32::from(flag)).map_err(|_| DecodeError::InvalidHeader(first))?;

    let expected = expected_len(components_x, components_y);
    if blurhash.len() != expected {
        return Err(DecodeError::LengthMismatch {
            expected,
            actual: blurhash.len(),
        });
    }
    Ok((components_x, components_y))
}
