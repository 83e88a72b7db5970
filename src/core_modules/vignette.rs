// THEORY:
// The vignette darkens the banner's border by stacking thin rectangle outlines
// on a transparent overlay. Ring `i` is inset `i` pixels on every side and its
// black outline gets `alpha = floor(i / steps * max_alpha)`, so the outermost
// ring is invisible and the innermost is the darkest. The overlay is then
// alpha-composited over the canvas.
//
// Rings never overlap: ring `i` touches only pixels whose distance to the
// nearest edge is exactly `i` (or `i - 1` on the right/bottom sides, since the
// outline's far corner is inclusive at `W - i`, `H - i`).

use image::{RgbaImage, Rgba};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;

pub const VIGNETTE_STEPS: u32 = 50;
pub const VIGNETTE_MAX_ALPHA: u32 = 30;

/// Outline alpha for ring `ring` of `steps`.
pub fn ring_alpha(ring: u32, steps: u32, max_alpha: u32) -> u8 {
    if steps == 0 {
        return 0;
    }
    (ring * max_alpha / steps).min(255) as u8
}

/// Builds the transparent overlay with `steps` concentric outlines.
pub fn vignette_overlay(width: u32, height: u32, steps: u32, max_alpha: u32) -> RgbaImage {
    let mut overlay = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 0]));
    for ring in 0..steps {
        if 2 * ring > width || 2 * ring > height {
            break;
        }
        let rect = Rect::at(ring as i32, ring as i32).of_size(width - 2 * ring + 1, height - 2 * ring + 1);
        let alpha = ring_alpha(ring, steps, max_alpha);
        draw_hollow_rect_mut(&mut overlay, rect, Rgba([0, 0, 0, alpha]));
    }
    overlay
}

/// Alpha-composites `overlay` over `canvas`.
pub fn apply_overlay(canvas: &mut RgbaImage, overlay: &RgbaImage) {
    image::imageops::overlay(canvas, overlay, 0, 0);
}
