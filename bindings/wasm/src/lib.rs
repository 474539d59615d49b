use wasm_bindgen::prelude::*;

/// Decode a BlurHash string into RGBA pixel data for a canvas `ImageData`.
///
/// @param blurhash - The BlurHash string to decode.
/// @param width - Desired output width in pixels.
/// @param height - Desired output height in pixels.
/// @param punch - Contrast adjustment factor (default 1.0).
/// @returns A Uint8Array of length width * height * 4.
#[wasm_bindgen]
pub fn decode(
    blurhash: &str,
    width: u32,
    height: u32,
    punch: Option<f64>,
) -> Result<Vec<u8>, JsError> {
    let p = punch.unwrap_or(1.0);
    blurhash_decode::decode_rgba(blurhash, width, height, p).map_err(JsError::from)
}

/// Decode a BlurHash string into raw RGB pixel data.
///
/// @param blurhash - The BlurHash string to decode.
/// @param width - Desired output width in pixels.
/// @param height - Desired output height in pixels.
/// @param punch - Contrast adjustment factor (default 1.0).
/// @returns A Uint8Array of length width * height * 3.
#[wasm_bindgen(js_name = decodeRgb)]
pub fn decode_rgb(
    blurhash: &str,
    width: u32,
    height: u32,
    punch: Option<f64>,
) -> Result<Vec<u8>, JsError> {
    let p = punch.unwrap_or(1.0);
    blurhash_decode::decode(blurhash, width, height, p).map_err(JsError::from)
}

/// The number of X and Y components of a BlurHash.
#[wasm_bindgen]
pub struct Components {
    pub x: u32,
    pub y: u32,
}

/// Extract the number of X and Y components from a BlurHash string.
///
/// @param blurhash - The BlurHash string.
/// @returns An object with `x` and `y` fields.
#[wasm_bindgen]
pub fn components(blurhash: &str) -> Result<Components, JsError> {
    let (x, y) = blurhash_decode::components(blurhash).map_err(JsError::from)?;
    Ok(Components { x, y })
}
