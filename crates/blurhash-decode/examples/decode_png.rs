//! Decode a BlurHash and write the placeholder to a PNG for inspection.
//!
//! Run with:
//! cargo run -p blurhash-decode --features image --example decode_png -- [HASH] [WIDTH] [HEIGHT] [PUNCH]

use std::env;
use std::process::ExitCode;

use blurhash_decode::{components, decode_image};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let hash = args
        .next()
        .unwrap_or_else(|| "LKO2?U%2Tw=w]~RBVZRi};RPxuwH".to_string());
    let width: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(32);
    let height: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(32);
    let punch: f64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1.0);

    match components(&hash) {
        Ok((cx, cy)) => println!("{hash}: {cx}x{cy} components"),
        Err(err) => {
            eprintln!("{hash}: {err}");
            return ExitCode::FAILURE;
        }
    }

    let img = match decode_image(&hash, width, height, punch) {
        Ok(img) => img,
        Err(err) => {
            eprintln!("decode failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let path = "blurhash.png";
    if let Err(err) = img.save(path) {
        eprintln!("could not write {path}: {err}");
        return ExitCode::FAILURE;
    }
    println!("wrote {width}x{height} placeholder (punch {punch}) to {path}");
    ExitCode::SUCCESS
}
