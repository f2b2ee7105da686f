// QR encoding and rasterization.
// Visual expectation: `rasterize` gives you the familiar black-on-white
// code, each module a crisp square block with a white quiet zone around
// the whole thing.

use crate::error::Error;
use image::{Rgba, RgbaImage};
use qrcode::{EcLevel, QrCode};

pub(crate) const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub(crate) const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Encode a string into a QR matrix at error-correction level H.
/// Level H survives ~30% obstruction, which is what lets us park a logo
/// on top of the code later and still have it scan.
pub fn encode(data: &str) -> Result<QrCode, Error> {
    QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)
        .map_err(|e| Error::QrEncode(format!("Encode data: {e}")))
}

/// Render the module grid to an RGBA bitmap.
/// Each module becomes a `box_size`-pixel square; `border` adds a quiet
/// zone of that many *modules* on every side. Output is always square:
/// `(modules + 2 * border) * box_size` pixels per edge.
pub fn rasterize(code: &QrCode, box_size: u32, border: u32) -> RgbaImage {
    let modules = code.to_colors();
    let count = code.width() as u32;
    let side = (count + 2 * border) * box_size;

    // 1) Start from an all-white canvas (quiet zone included for free).
    let mut img = RgbaImage::from_pixel(side, side, LIGHT);

    // 2) Stamp each dark module as a filled square block.
    for (i, color) in modules.iter().enumerate() {
        if *color != qrcode::Color::Dark {
            continue;
        }
        let mx = (i as u32) % count;
        let my = (i as u32) / count;
        let x0 = (mx + border) * box_size;
        let y0 = (my + border) * box_size;
        for dy in 0..box_size {
            for dx in 0..box_size {
                img.put_pixel(x0 + dx, y0 + dy, DARK);
            }
        }
    }

    img
}
