//! Decoding many independent hashes at once.
//!
//! With the `parallel` feature the hashes are spread over the rayon global
//! pool; otherwise they are decoded one after another. Each decode is
//! independent, so the results are identical either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::decode_impl::{decode_with, DecodeOptions, PixelBuffer};
use crate::error::DecodeError;

/// Decode every hash in `hashes` to `width x height` pixels.
///
/// Returns one result per input, in input order. A malformed hash only
/// fails its own slot.
///
/// # Examples
///
/// ```
/// use blurhash_decode::{decode_many, DecodeOptions};
/// let results = decode_many(
///     &["LEHV6nWB2yk8pyo0adR*.7kCMdnj", "bogus"],
///     16,
///     16,
///     &DecodeOptions::default(),
/// );
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn decode_many<S>(
    hashes: &[S],
    width: u32,
    height: u32,
    opts: &DecodeOptions,
) -> Vec<Result<PixelBuffer, DecodeError>>
where
    S: AsRef<str> + Sync,
{
    #[cfg(feature = "parallel")]
    let iter = hashes.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = hashes.iter();

    iter.map(|hash| decode_with(hash.as_ref(), width, height, opts))
        .collect()
}
