// Logo loading, scaling, the white landing box, and centered compositing.
// Visual expectation: a white box (square or rounded) sits dead center on
// the QR code with the logo resting on it; everything under the box is
// hidden, everything outside it untouched.

use crate::error::Error;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use std::path::Path;

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Load the logo as RGBA, failing up-front when the file is absent.
/// The error message carries the exact path so a typo is obvious.
pub fn load_logo(path: &Path) -> Result<RgbaImage, Error> {
    if !path.exists() {
        return Err(Error::LogoMissing(path.display().to_string()));
    }
    let img = image::open(path)
        .map_err(|e| Error::ImageRead(format!("{}: {e}", path.display())))?;
    Ok(img.to_rgba8())
}

/// Proportional contain-scale: the longer edge lands on `side`, the
/// other shrinks (or grows) to keep the aspect ratio, never below 1 px.
pub fn scale_to_fit(img: &RgbaImage, side: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let ratio = (side as f32 / w as f32).min(side as f32 / h as f32);
    let nw = ((w as f32 * ratio) as u32).max(1);
    let nh = ((h as f32 * ratio) as u32).max(1);
    imageops::resize(img, nw, nh, FilterType::Lanczos3)
}

/// Build the opaque white box; `corner_radius > 0` rounds the corners by
/// turning the pixels outside each quarter-disc fully transparent, so
/// the QR shows through at the corners once composited.
pub fn white_box(w: u32, h: u32, corner_radius: u32) -> RgbaImage {
    let mut boxed = RgbaImage::from_pixel(w, h, WHITE);
    let r = corner_radius.min(w / 2).min(h / 2);
    if r > 0 {
        round_corners(&mut boxed, r);
    }
    boxed
}

/// Knock out the four corners of `img` with radius `r`.
/// A pixel inside a corner square stays opaque only if its center lies
/// within `r` of that corner's arc center.
fn round_corners(img: &mut RgbaImage, r: u32) {
    let (w, h) = img.dimensions();
    let rf = r as f32;

    for y in 0..h {
        for x in 0..w {
            let in_left = x < r;
            let in_right = x >= w - r;
            let in_top = y < r;
            let in_bottom = y >= h - r;
            if !(in_left || in_right) || !(in_top || in_bottom) {
                continue; // not in a corner square
            }

            let cx = if in_left { rf } else { (w - r) as f32 };
            let cy = if in_top { rf } else { (h - r) as f32 };
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy > rf * rf {
                img.get_pixel_mut(x, y)[3] = 0;
            }
        }
    }
}

/// Alpha-composite the logo, on its padded white box, centered on the
/// base. Centering is integer floor division, so for odd differences the
/// box sits one pixel up/left of the exact center.
pub fn paste_logo_center(
    base: &mut RgbaImage,
    logo: &RgbaImage,
    pad: u32,
    corner_radius: u32,
) {
    let (bw, bh) = base.dimensions();
    let (lw, lh) = logo.dimensions();

    // 1) White box sized to the logo plus padding.
    let box_w = lw + pad * 2;
    let box_h = lh + pad * 2;
    let boxed = white_box(box_w, box_h, corner_radius);

    // 2) Box centered on the base.
    let cx = bw.saturating_sub(box_w) / 2;
    let cy = bh.saturating_sub(box_h) / 2;
    imageops::overlay(base, &boxed, cx as i64, cy as i64);

    // 3) Logo centered inside the box.
    let lx = cx + (box_w - lw) / 2;
    let ly = cy + (box_h - lh) / 2;
    imageops::overlay(base, logo, lx as i64, ly as i64);
}

/// Bare centered alpha-over paste, no box.
pub fn paste_centered(base: &mut RgbaImage, img: &RgbaImage) {
    let (bw, bh) = base.dimensions();
    let (w, h) = img.dimensions();
    let x = bw.saturating_sub(w) / 2;
    let y = bh.saturating_sub(h) / 2;
    imageops::overlay(base, img, x as i64, y as i64);
}

/// Paint an opaque rectangle straight into the bitmap, clamped to its
/// bounds. Used for the plain white landing square.
pub fn fill_rect(img: &mut RgbaImage, x: i32, y: i32, w: u32, h: u32, color: Rgba<u8>) {
    let (iw, ih) = img.dimensions();
    let x0 = x.max(0) as u32;
    let y0 = y.max(0) as u32;
    let x1 = ((x + w as i32).max(0) as u32).min(iw);
    let y1 = ((y + h as i32).max(0) as u32).min(ih);

    for yy in y0..y1 {
        for xx in x0..x1 {
            img.put_pixel(xx, yy, color);
        }
    }
}
