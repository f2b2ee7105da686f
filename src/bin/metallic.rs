// What you GET from this binary:
// • One PNG where the dark QR modules under the logo's silhouette are
//   tinted with a vertical gradient plus a sheen highlight, so the
//   artwork reads as a metallic emboss across the code.
// • A plain white square in the middle carries the actual logo.
// Everything is tuned through the constants block; there are no flags.

use image::imageops::{self, FilterType};
use logo_qr::compose::{self, WHITE};
use logo_qr::error::Error;
use logo_qr::mask;
use logo_qr::qr;
use logo_qr::Rgb;
use std::path::Path;

/* ================== CONFIG ================== */
const QR_DATA: &str = "https://womo-solucions.github.io/Vcard/"; // encoded URL
const STENCIL_PATH: &str = "logo.png"; // artwork used as the recolor stencil
const LOGO_PATH: &str = "logo.png"; // logo pasted in the middle (may be the same file)
const OUT_PATH: &str = "QR_metallic.png"; // output file
const BOX_SIZE: u32 = 10; // QR module size (px)
const BORDER: u32 = 4; // QR quiet zone (modules)
const COLOR_TOP: Rgb = [20, 50, 95]; // dark blue, top of the gradient
const COLOR_BOTTOM: Rgb = [70, 150, 160]; // teal, bottom of the gradient
const LOGO_SIZE: u32 = 80; // center logo side (px)
const BLANK_MARGIN: u32 = 6; // extra white around the center logo (px)
const SHEEN_STRENGTH: u8 = 40; // brightness added mid-silhouette (0..60)
/* ============================================ */

fn main() -> Result<(), Error> {
    /* --- QR base ---
       Visual: plain black-on-white code, level H so the overlay is safe. */
    let code = qr::encode(QR_DATA)?;
    let mut img = qr::rasterize(&code, BOX_SIZE, BORDER);
    let (w, h) = img.dimensions();

    /* --- Silhouette mask from the stencil artwork ---
       Kept three modules clear of the QR edge so the finder patterns
       stay untouched. */
    let stencil = compose::load_logo(Path::new(STENCIL_PATH))?;
    let margin = BOX_SIZE * 3;
    let mut sil = mask::silhouette_mask(&stencil, w, h, margin);

    /* --- Reserve the center square for the logo before recoloring --- */
    let blank = LOGO_SIZE + BLANK_MARGIN * 2;
    let bx = (w as i32 - blank as i32) / 2;
    let by = (h as i32 - blank as i32) / 2;
    mask::clear_rect(&mut sil, bx, by, blank, blank);

    /* --- Tint the dark modules under the silhouette ---
       Visual: gradient top-to-bottom with a bright band mid-artwork. */
    mask::recolor_masked(&mut img, &sil, COLOR_TOP, COLOR_BOTTOM, SHEEN_STRENGTH);

    /* --- White landing square + centered logo ---
       The logo is forced to a LOGO_SIZE square here; pick artwork that
       is already roughly square. */
    compose::fill_rect(&mut img, bx, by, blank, blank, WHITE);
    let logo = compose::load_logo(Path::new(LOGO_PATH))?;
    let logo = imageops::resize(&logo, LOGO_SIZE, LOGO_SIZE, FilterType::Lanczos3);
    compose::paste_centered(&mut img, &logo);

    /* --- Write + confirm --- */
    img.save(OUT_PATH)
        .map_err(|e| Error::ImageWrite(format!("{OUT_PATH}: {e}")))?;
    println!("QR generated: {OUT_PATH}");

    Ok(())
}
