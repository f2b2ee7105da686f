// Vertical gradient recoloring of the dark QR modules.
// Visual expectation: the black squares fade smoothly from the top color
// at row 0 to the bottom color at the last row; white stays white.

use crate::Rgb;
use image::RgbaImage;

/// True only for the exact black the rasterizer emits. Anything the
/// least bit off-black (anti-aliased edges, already-tinted pixels) is
/// left alone.
#[inline]
pub(crate) fn is_black(r: u8, g: u8, b: u8) -> bool {
    r == 0 && g == 0 && b == 0
}

/// Interpolate one channel between `top` and `bottom` at position
/// t in [0, 1]. Truncates toward zero after the float math.
#[inline]
fn lerp_channel(top: u8, bottom: u8, t: f32) -> u8 {
    (top as f32 * (1.0 - t) + bottom as f32 * t) as u8
}

/// Full RGB interpolation at position t.
#[inline]
pub(crate) fn lerp_rgb(top: Rgb, bottom: Rgb, t: f32) -> Rgb {
    [
        lerp_channel(top[0], bottom[0], t),
        lerp_channel(top[1], bottom[1], t),
        lerp_channel(top[2], bottom[2], t),
    ]
}

/// Recolor every pure-black pixel with the vertical gradient.
/// The row color is computed once per row (it only depends on y), then
/// stamped into each qualifying pixel. Alpha is carried over untouched.
pub fn recolor_vertical(img: &mut RgbaImage, top: Rgb, bottom: Rgb) {
    let (w, h) = img.dimensions();
    let denom = h.saturating_sub(1).max(1) as f32;

    for y in 0..h {
        let t = y as f32 / denom;
        let [r, g, b] = lerp_rgb(top, bottom, t);

        for x in 0..w {
            let px = img.get_pixel_mut(x, y);
            if is_black(px[0], px[1], px[2]) {
                px[0] = r;
                px[1] = g;
                px[2] = b;
                // px[3] stays as-is
            }
        }
    }
}
