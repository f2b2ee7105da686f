// What you GET from this binary:
// • One PNG with a QR code for the URL below, logo centered on a white
//   box (rounded corners by default).
// • Flip RECOLOR_QR to tint the dark modules with a vertical gradient.
// Everything is tuned through the constants block; there are no flags.

use logo_qr::compose;
use logo_qr::error::Error;
use logo_qr::gradient;
use logo_qr::qr;
use logo_qr::Rgb;
use std::path::Path;

/* ================== CONFIG ================== */
const QR_DATA: &str = "https://womo-solucions.github.io/vcard_alejandro/"; // encoded URL
const LOGO_PATH: &str = "logo.png"; // center logo (transparent PNG works best)
const OUT_PATH: &str = "QR.png"; // output file
const BOX_SIZE: u32 = 12; // QR module size (px)
const BORDER: u32 = 4; // QR quiet zone (modules)
const LOGO_SCALE: f32 = 0.22; // logo side vs. QR side (0.15..0.30 scans well)
const WHITE_PAD: u32 = 18; // white padding around the logo (px)
const ROUNDED_WHITE_BOX: bool = true; // rounded corners on the white box
const WHITE_BOX_RADIUS: u32 = 18; // corner radius of the white box
const RECOLOR_QR: bool = false; // if true, tint dark modules with a gradient
const COLOR_TOP: Rgb = [20, 50, 95]; // gradient top (if RECOLOR_QR)
const COLOR_BOTTOM: Rgb = [70, 150, 160]; // gradient bottom
/* ============================================ */

fn main() -> Result<(), Error> {
    /* --- QR base ---
       Visual: plain black-on-white code. Level H error correction is
       what lets the logo cover the middle and still scan. */
    let code = qr::encode(QR_DATA)?;
    let mut img = qr::rasterize(&code, BOX_SIZE, BORDER);

    /* --- Optional tint ---
       Visual: dark modules fade COLOR_TOP -> COLOR_BOTTOM down the image. */
    if RECOLOR_QR {
        gradient::recolor_vertical(&mut img, COLOR_TOP, COLOR_BOTTOM);
    }

    /* --- Logo on its white box, centered ---
       The logo scales to LOGO_SCALE of the shorter side, keeping its
       aspect ratio. */
    let logo = compose::load_logo(Path::new(LOGO_PATH))?;
    let target_side = (img.width().min(img.height()) as f32 * LOGO_SCALE) as u32;
    let logo = compose::scale_to_fit(&logo, target_side);
    let radius = if ROUNDED_WHITE_BOX { WHITE_BOX_RADIUS } else { 0 };
    compose::paste_logo_center(&mut img, &logo, WHITE_PAD, radius);

    /* --- Write + confirm --- */
    img.save(OUT_PATH)
        .map_err(|e| Error::ImageWrite(format!("{OUT_PATH}: {e}")))?;
    println!("QR generated: {OUT_PATH}");

    Ok(())
}
