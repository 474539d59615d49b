//! Colour space conversion between sRGB bytes and linear RGB.
//!
//! These are the exact reference transfer functions. A BlurHash produced
//! by any conforming encoder must decode to the same bytes here, so the
//! breakpoints and exponents are not approximated.

/// Convert an sRGB byte value (0..=255) to linear RGB (0.0..=1.0).
///
/// # Examples
///
/// ```
/// use blurhash_decode::color::srgb_to_linear;
/// assert_eq!(srgb_to_linear(0), 0.0);
/// assert!((srgb_to_linear(255) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn srgb_to_linear(value: u8) -> f64 {
    srgb_field_to_linear(u32::from(value))
}

/// [`srgb_to_linear`] for a packed colour field that may exceed 255.
///
/// Out-of-range fields linearise above 1.0 and are clamped on output.
#[inline]
pub(crate) fn srgb_field_to_linear(value: u32) -> f64 {
    let v = f64::from(value) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear RGB value to an sRGB byte value (0..=255).
///
/// Values outside \[0.0, 1.0\] are clamped; the result is rounded half up.
///
/// # Examples
///
/// ```
/// use blurhash_decode::color::linear_to_srgb;
/// assert_eq!(linear_to_srgb(0.0), 0);
/// assert_eq!(linear_to_srgb(1.0), 255);
/// assert_eq!(linear_to_srgb(1.5), 255);
/// ```
#[inline]
pub fn linear_to_srgb(value: f64) -> u8 {
    let v = value.clamp(0.0, 1.0);
    let scaled = if v <= 0.003_130_8 {
        v * 12.92 * 255.0 + 0.5
    } else {
        (1.055 * v.powf(1.0 / 2.4) - 0.055) * 255.0 + 0.5
    };
    // Truncation after +0.5 is round-half-up; `as` saturates and maps NaN to 0.
    scaled as u8
}

/// Compute `sign(value) * |value|^exp`.
///
/// # Examples
///
/// ```
/// use blurhash_decode::color::sign_pow;
/// assert!((sign_pow(4.0, 0.5) - 2.0).abs() < 1e-10);
/// assert!((sign_pow(-4.0, 0.5) + 2.0).abs() < 1e-10);
/// ```
#[inline]
pub fn sign_pow(value: f64, exp: f64) -> f64 {
    value.abs().powf(exp).copysign(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srgb_to_linear_boundary() {
        assert_eq!(srgb_to_linear(0), 0.0);
        assert!((srgb_to_linear(255) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_srgb_to_linear_known_values() {
        let val = srgb_to_linear(128);
        assert!((val - 0.215_860_5).abs() < 1e-6, "got {val}");
        // 10/255 is below the 0.04045 breakpoint and uses the linear segment.
        assert!((srgb_to_linear(10) - 10.0 / 255.0 / 12.92).abs() < 1e-15);
    }

    #[test]
    fn test_srgb_field_above_255() {
        assert_eq!(srgb_field_to_linear(255), srgb_to_linear(255));
        let over = srgb_field_to_linear(724);
        assert!(over > 1.0, "got {over}");
        assert_eq!(linear_to_srgb(over), 255);
    }

    #[test]
    fn test_linear_to_srgb_clamp() {
        assert_eq!(linear_to_srgb(-0.5), 0);
        assert_eq!(linear_to_srgb(1.5), 255);
        assert_eq!(linear_to_srgb(f64::NAN), 0);
    }

    #[test]
    fn test_linear_to_srgb_threshold() {
        // 0.003 * 12.92 * 255 = 9.88 -> 10
        assert_eq!(linear_to_srgb(0.003), 10);
        assert!(linear_to_srgb(0.003) < linear_to_srgb(0.004));
    }

    #[test]
    fn test_roundtrip_srgb_exact() {
        for i in 0..=255u8 {
            assert_eq!(linear_to_srgb(srgb_to_linear(i)), i, "roundtrip failed for {i}");
        }
    }

    #[test]
    fn test_srgb_to_linear_monotonic() {
        let mut prev = srgb_to_linear(0);
        for i in 1..=255u8 {
            let curr = srgb_to_linear(i);
            assert!(curr > prev, "not monotonic at {i}: {prev} >= {curr}");
            prev = curr;
        }
    }

    #[test]
    fn test_sign_pow() {
        assert!((sign_pow(9.0, 0.5) - 3.0).abs() < 1e-10);
        assert!((sign_pow(-3.0, 2.0) + 9.0).abs() < 1e-10);
        assert_eq!(sign_pow(0.0, 2.0), 0.0);
    }
}
