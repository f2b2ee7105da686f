// Silhouette mask construction + mask-guided recoloring.
// Visual expectation: the logo artwork becomes an invisible stencil laid
// over the QR code; dark modules under the stencil pick up a vertical
// gradient with a bright sheen band across the middle, so the silhouette
// reads as a metallic emboss inside the code.

use crate::Rgb;
use crate::gradient::{is_black, lerp_rgb};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, RgbaImage};

/// Pixels at or below this mask value are treated as "outside".
const MASK_ON: u8 = 128;

/// Grayscale stencil stretched over the QR bitmap.
/// `origin` and `silhouette_height` remember where the scaled artwork
/// landed, so the gradient can run over the silhouette's own rows
/// instead of the full image height.
pub struct SilhouetteMask {
    pub mask: GrayImage,
    pub origin: (u32, u32),
    pub silhouette_height: u32,
}

/// Build the full-size mask from a stencil image.
///
/// The stencil's alpha channel is the mask when it carries any real
/// transparency; a fully opaque stencil falls back to a luminance
/// threshold (dark artwork on a light background becomes the mask).
/// The silhouette is shrunk, never enlarged, to fit inside the QR
/// bitmap minus `margin_px` on every side, then centered.
pub fn silhouette_mask(
    stencil: &RgbaImage,
    qr_w: u32,
    qr_h: u32,
    margin_px: u32,
) -> SilhouetteMask {
    let source = mask_source(stencil);

    // 1) Fit inside the margin box, preserving aspect. Shrink only:
    //    small artwork stays small rather than blowing up into mush.
    let target_w = qr_w.saturating_sub(2 * margin_px).max(1);
    let target_h = qr_h.saturating_sub(2 * margin_px).max(1);
    let (sw, sh) = source.dimensions();
    let mut scaled = if sw > target_w || sh > target_h {
        let ratio = (target_w as f32 / sw as f32).min(target_h as f32 / sh as f32);
        let nw = ((sw as f32 * ratio) as u32).max(1);
        let nh = ((sh as f32 * ratio) as u32).max(1);
        imageops::resize(&source, nw, nh, FilterType::Lanczos3)
    } else {
        source
    };

    // 2) Re-binarize after scaling so resampling halftones don't leave
    //    half-recolored modules at the silhouette edge.
    for p in scaled.pixels_mut() {
        p[0] = if p[0] > MASK_ON { 255 } else { 0 };
    }

    // 3) Paste centered into a zeroed full-size mask (zero = untouched).
    let (mw, mh) = scaled.dimensions();
    let ox = (qr_w - mw) / 2;
    let oy = (qr_h - mh) / 2;
    let mut mask = GrayImage::new(qr_w, qr_h);
    imageops::replace(&mut mask, &scaled, ox as i64, oy as i64);

    SilhouetteMask {
        mask,
        origin: (ox, oy),
        silhouette_height: mh,
    }
}

/// Zero out a rectangle of mask pixels, clamped to the image.
/// Visual: that region of the QR keeps its plain black modules; used to
/// reserve the center square where the logo will sit.
pub fn clear_rect(sil: &mut SilhouetteMask, x: i32, y: i32, w: u32, h: u32) {
    let (mw, mh) = sil.mask.dimensions();
    let x0 = x.max(0) as u32;
    let y0 = y.max(0) as u32;
    let x1 = ((x + w as i32).max(0) as u32).min(mw);
    let y1 = ((y + h as i32).max(0) as u32).min(mh);

    for yy in y0..y1 {
        for xx in x0..x1 {
            sil.mask.put_pixel(xx, yy, Luma([0]));
        }
    }
}

/// Recolor every pixel that is both pure black and under the mask.
///
/// The base color interpolates `top` to `bottom` over the silhouette's
/// vertical extent (rows outside it clamp to the nearest edge). On top
/// of that, a sheen term peaks at the silhouette's vertical midpoint and
/// falls off cubically, added to all three channels with saturation at
/// 255. Recolored pixels come out fully opaque.
pub fn recolor_masked(
    img: &mut RgbaImage,
    sil: &SilhouetteMask,
    top: Rgb,
    bottom: Rgb,
    sheen_strength: u8,
) {
    let (w, h) = img.dimensions();
    let last_row = sil.silhouette_height.saturating_sub(1).max(1);
    let denom = last_row as f32;

    for y in 0..h {
        // Vertical position inside the silhouette, clamped at its edges.
        let local = (y as i64 - sil.origin.1 as i64).clamp(0, last_row as i64);
        let t = local as f32 / denom;
        let base = lerp_rgb(top, bottom, t);

        // Sheen: 1.0 at the midpoint, 0.0 at the edges, cubic falloff.
        let sheen = (1.0 - (2.0 * t - 1.0).abs()).powi(3);
        let add = (sheen_strength as f32 * sheen) as u16;
        let r = (base[0] as u16 + add).min(255) as u8;
        let g = (base[1] as u16 + add).min(255) as u8;
        let b = (base[2] as u16 + add).min(255) as u8;

        for x in 0..w {
            if sil.mask.get_pixel(x, y)[0] <= MASK_ON {
                continue;
            }
            let px = img.get_pixel_mut(x, y);
            if is_black(px[0], px[1], px[2]) {
                *px = image::Rgba([r, g, b, 255]);
            }
        }
    }
}

/// Reduce the stencil to a grayscale mask source at its own size.
fn mask_source(stencil: &RgbaImage) -> GrayImage {
    let (w, h) = stencil.dimensions();
    // "Has transparency" means the alpha channel actually varies; every
    // decoded RGBA image technically has one.
    let has_transparency = stencil.pixels().any(|p| p[3] < 255);

    let mut out = GrayImage::new(w, h);
    for (x, y, p) in stencil.enumerate_pixels() {
        let v = if has_transparency {
            p[3]
        } else if luma(p[0], p[1], p[2]) < 240 {
            255 // dark artwork pixel, keep it
        } else {
            0 // light background, drop it
        };
        out.put_pixel(x, y, Luma([v]));
    }
    out
}

/// Integer ITU-R 601 luma, same weighting as the usual L-mode convert.
#[inline]
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// 4x4 stencil: opaque black 2x2 center, transparent elsewhere.
    fn stencil_with_alpha() -> RgbaImage {
        let mut s = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        for y in 1..3 {
            for x in 1..3 {
                s.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        s
    }

    #[test]
    fn alpha_channel_wins_when_transparency_exists() {
        let sil = silhouette_mask(&stencil_with_alpha(), 20, 20, 2);
        // 4x4 source fits inside the 16x16 margin box, so no scaling:
        // centered at (8, 8) with the opaque 2x2 block at (9..11, 9..11).
        assert_eq!(sil.origin, (8, 8));
        assert_eq!(sil.silhouette_height, 4);
        assert_eq!(sil.mask.get_pixel(9, 9)[0], 255);
        assert_eq!(sil.mask.get_pixel(8, 8)[0], 0);
        assert_eq!(sil.mask.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn opaque_stencil_falls_back_to_dark_luminance() {
        let mut s = RgbaImage::from_pixel(4, 4, Rgba([250, 250, 250, 255]));
        s.put_pixel(1, 1, Rgba([10, 10, 10, 255]));
        let sil = silhouette_mask(&s, 20, 20, 2);
        // Dark pixel masked, light background not.
        assert_eq!(sil.mask.get_pixel(9, 9)[0], 255);
        assert_eq!(sil.mask.get_pixel(10, 10)[0], 0);
    }

    #[test]
    fn oversized_stencil_is_shrunk_inside_the_margin_box() {
        let s = RgbaImage::from_pixel(100, 50, Rgba([0, 0, 0, 255]));
        let sil = silhouette_mask(&s, 60, 60, 10);
        // Target box is 40x40; 100x50 shrinks by 0.4 to 40x20.
        assert_eq!(sil.silhouette_height, 20);
        assert_eq!(sil.origin, (10, 20));
        // Nothing outside the margin box is masked.
        let (w, h) = sil.mask.dimensions();
        for y in 0..h {
            for x in 0..w {
                if x < 10 || y < 10 || x >= 50 || y >= 50 {
                    assert_eq!(sil.mask.get_pixel(x, y)[0], 0);
                }
            }
        }
    }

    #[test]
    fn clear_rect_zeroes_exactly_the_clamped_rectangle() {
        let mut sil = SilhouetteMask {
            mask: GrayImage::from_pixel(10, 10, Luma([255])),
            origin: (0, 0),
            silhouette_height: 10,
        };
        clear_rect(&mut sil, 3, 3, 4, 4);
        assert_eq!(sil.mask.get_pixel(3, 3)[0], 0);
        assert_eq!(sil.mask.get_pixel(6, 6)[0], 0);
        assert_eq!(sil.mask.get_pixel(2, 3)[0], 255);
        assert_eq!(sil.mask.get_pixel(7, 7)[0], 255);

        // Off-image coordinates clamp instead of panicking.
        clear_rect(&mut sil, -5, -5, 7, 7);
        assert_eq!(sil.mask.get_pixel(1, 1)[0], 0);
        assert_eq!(sil.mask.get_pixel(2, 8)[0], 255);
    }

    fn full_mask(w: u32, h: u32) -> SilhouetteMask {
        SilhouetteMask {
            mask: GrayImage::from_pixel(w, h, Luma([255])),
            origin: (0, 0),
            silhouette_height: h,
        }
    }

    #[test]
    fn only_black_and_masked_pixels_change() {
        let mut img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255])); // white, masked
        let mut sil = full_mask(4, 4);
        clear_rect(&mut sil, 3, 0, 1, 4); // last column unmasked

        recolor_masked(&mut img, &sil, [100, 100, 100], [100, 100, 100], 0);
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(img.get_pixel(3, 1), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(1, 1), &Rgba([100, 100, 100, 255]));
    }

    #[test]
    fn sheen_peaks_at_the_silhouette_midpoint() {
        // 11 rows: midpoint lands exactly on row 5 (t = 0.5, sheen = 1).
        let mut img = RgbaImage::from_pixel(1, 11, Rgba([0, 0, 0, 255]));
        let sil = full_mask(1, 11);
        recolor_masked(&mut img, &sil, [100, 100, 100], [100, 100, 100], 40);

        assert_eq!(img.get_pixel(0, 5), &Rgba([140, 140, 140, 255]));
        // Endpoints get no sheen at all.
        assert_eq!(img.get_pixel(0, 0), &Rgba([100, 100, 100, 255]));
        assert_eq!(img.get_pixel(0, 10), &Rgba([100, 100, 100, 255]));
    }

    #[test]
    fn sheen_saturates_at_255() {
        let mut img = RgbaImage::from_pixel(1, 11, Rgba([0, 0, 0, 255]));
        let sil = full_mask(1, 11);
        recolor_masked(&mut img, &sil, [240, 240, 240], [240, 240, 240], 40);
        assert_eq!(img.get_pixel(0, 5), &Rgba([255, 255, 255, 255]));
    }
}
