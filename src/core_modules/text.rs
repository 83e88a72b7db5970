// THEORY:
// Text on a banner is always one line, horizontally centered, and (for title
// and subtitle) lifted off the gradient by a flat drop shadow. The shadow is
// just the same string drawn first, offset down-right, in translucent black.
// No blur, no outline.

use crate::core_modules::font::HeroFont;
use crate::core_modules::pixel::pixel::Pixel;
use image::RgbImage;

pub const DEFAULT_SHADOW_OFFSET: i32 = 3;
pub const SHADOW_COLOR: Pixel = Pixel::new(0, 0, 0, 100);

pub fn draw_text(canvas: &mut RgbImage, position: (i32, i32), text: &str, font: &HeroFont, fill: Pixel) {
    let (x, y) = position;
    font.draw(canvas, x, y, text, fill);
}

/// Draws the shadow at `position + shadow_offset`, then the text itself at
/// `position`.
pub fn draw_text_with_shadow(
    canvas: &mut RgbImage,
    position: (i32, i32),
    text: &str,
    font: &HeroFont,
    fill: Pixel,
    shadow_offset: i32,
) {
    let (x, y) = position;
    draw_text(canvas, (x + shadow_offset, y + shadow_offset), text, font, SHADOW_COLOR);
    draw_text(canvas, (x, y), text, font, fill);
}

/// Left edge that centers a run `text_width` pixels wide: `(canvas - text) / 2`,
/// rounded toward negative infinity.
pub fn centered_x(canvas_width: u32, text_width: u32) -> i32 {
    (canvas_width as i64 - text_width as i64).div_euclid(2) as i32
}
