//! The decoded DCT component grid.
//!
//! A BlurHash is a quantised `components_y x components_x` grid of linear
//! RGB coefficients. [`ComponentGrid::parse`] validates a hash and
//! de-quantises it; [`ComponentGrid::to_hash`] quantises a grid back into
//! the textual form.

use crate::base83;
use crate::color::{linear_to_srgb, sign_pow, srgb_field_to_linear};
use crate::error::DecodeError;
use crate::header;

/// One linear-RGB coefficient.
pub type Rgb = [f64; 3];

/// Linear-RGB DCT coefficients decoded from a BlurHash, row-major with the
/// DC term first.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentGrid {
    components_x: u32,
    components_y: u32,
    /// De-quantised maximum AC magnitude, already scaled by punch.
    maximum_value: f64,
    colors: Vec<Rgb>,
}

impl ComponentGrid {
    /// Validate `blurhash` and de-quantise every component.
    ///
    /// `punch` scales the AC components and must be finite and positive.
    ///
    /// # Errors
    ///
    /// Any header or length error from [`header::components`],
    /// [`DecodeError::InvalidCharacter`] for a body character outside the
    /// alphabet, or [`DecodeError::InvalidPunch`].
    ///
    /// # Examples
    ///
    /// ```
    /// use blurhash_decode::ComponentGrid;
    /// let grid = ComponentGrid::parse("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 1.0).unwrap();
    /// assert_eq!((grid.components_x(), grid.components_y()), (4, 3));
    /// assert_eq!(grid.ac().len(), 11);
    /// ```
    pub fn parse(blurhash: &str, punch: f64) -> Result<Self, DecodeError> {
        let (components_x, components_y) = header::components(blurhash)?;
        if let Some((position, character)) = base83::find_invalid(blurhash) {
            return Err(DecodeError::InvalidCharacter {
                character,
                position,
            });
        }
        check_punch(punch)?;

        // Every character is now a single-byte base83 digit, so byte slicing
        // below cannot split a character.
        let quantised_maximum_value = base83::decode(&blurhash[1..2])?;
        let maximum_value = (quantised_maximum_value as f64 + 1.0) / 166.0 * punch;

        let num_components = (components_x * components_y) as usize;
        let mut colors = Vec::with_capacity(num_components);
        colors.push(decode_dc(base83::decode(&blurhash[2..6])?));
        for component_idx in 1..num_components {
            let start = 4 + component_idx * 2;
            let value = base83::decode(&blurhash[start..start + 2])?;
            colors.push(decode_ac(value, maximum_value));
        }

        Ok(Self {
            components_x,
            components_y,
            maximum_value,
            colors,
        })
    }

    /// Number of horizontal components (1..=9).
    pub fn components_x(&self) -> u32 {
        self.components_x
    }

    /// Number of vertical components (1..=9).
    pub fn components_y(&self) -> u32 {
        self.components_y
    }

    /// The de-quantised maximum AC magnitude, including punch.
    pub fn maximum_value(&self) -> f64 {
        self.maximum_value
    }

    /// The average colour, in linear RGB.
    pub fn dc(&self) -> Rgb {
        self.colors[0]
    }

    /// The AC components in row-major order, excluding the DC term.
    pub fn ac(&self) -> &[Rgb] {
        &self.colors[1..]
    }

    /// All components in row-major order, DC first.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// The coefficient for horizontal frequency `i` and vertical frequency `j`.
    pub fn get(&self, i: u32, j: u32) -> Option<Rgb> {
        if i >= self.components_x || j >= self.components_y {
            return None;
        }
        self.colors.get((i + j * self.components_x) as usize).copied()
    }

    /// Quantise the grid back into a BlurHash string.
    ///
    /// A grid parsed with `punch == 1.0` from a hash with in-range fields
    /// (24-bit DC, AC digits below 19) reproduces that hash, including the
    /// maximum AC digit of a DC-only hash. Other punch values are baked into
    /// the maximum AC digit (saturating at the largest representable value).
    ///
    /// # Examples
    ///
    /// ```
    /// use blurhash_decode::ComponentGrid;
    /// let hash = "LKO2?U%2Tw=w]~RBVZRi};RPxuwH";
    /// assert_eq!(ComponentGrid::parse(hash, 1.0).unwrap().to_hash().unwrap(), hash);
    /// ```
    pub fn to_hash(&self) -> Result<String, DecodeError> {
        let flag = header::size_flag(self.components_x, self.components_y)?;
        let mut out = String::with_capacity(header::expected_len(
            self.components_x,
            self.components_y,
        ));
        base83::encode_into(u64::from(flag), 1, &mut out)?;

        let quantised_maximum_value =
            (self.maximum_value * 166.0 - 0.5).floor().clamp(0.0, 82.0) as u64;
        let normalisation = (quantised_maximum_value as f64 + 1.0) / 166.0;
        base83::encode_into(quantised_maximum_value, 1, &mut out)?;
        base83::encode_into(encode_dc(self.dc()), 4, &mut out)?;
        for &component in self.ac() {
            base83::encode_into(encode_ac(component, normalisation), 2, &mut out)?;
        }
        Ok(out)
    }
}

fn check_punch(punch: f64) -> Result<(), DecodeError> {
    if punch.is_finite() && punch > 0.0 {
        Ok(())
    } else {
        Err(DecodeError::InvalidPunch(punch))
    }
}

/// Unpack a packed sRGB DC value into linear RGB.
///
/// Four base83 digits reach past 24 bits; the red field is then above 255
/// and is not masked.
fn decode_dc(value: u64) -> Rgb {
    let red = u32::try_from(value >> 16).unwrap_or(u32::MAX);
    [
        srgb_field_to_linear(red),
        srgb_field_to_linear(((value >> 8) & 255) as u32),
        srgb_field_to_linear((value & 255) as u32),
    ]
}

fn encode_dc(color: Rgb) -> u64 {
    (u64::from(linear_to_srgb(color[0])) << 16)
        | (u64::from(linear_to_srgb(color[1])) << 8)
        | u64::from(linear_to_srgb(color[2]))
}

/// Unpack a base-19 AC triple into signed linear values in
/// `[-maximum_value, maximum_value]`.
fn decode_ac(value: u64, maximum_value: f64) -> Rgb {
    let quant_r = (value / (19 * 19)) as f64;
    let quant_g = ((value / 19) % 19) as f64;
    let quant_b = (value % 19) as f64;
    [
        sign_pow((quant_r - 9.0) / 9.0, 2.0) * maximum_value,
        sign_pow((quant_g - 9.0) / 9.0, 2.0) * maximum_value,
        sign_pow((quant_b - 9.0) / 9.0, 2.0) * maximum_value,
    ]
}

fn encode_ac(color: Rgb, maximum_value: f64) -> u64 {
    let quant = |c: f64| {
        (sign_pow(c / maximum_value, 0.5) * 9.0 + 9.5)
            .floor()
            .clamp(0.0, 18.0) as u64
    };
    quant(color[0]) * 19 * 19 + quant(color[1]) * 19 + quant(color[2])
}
