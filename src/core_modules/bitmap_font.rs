// THEORY:
// The built-in font is the last link of every font fallback chain, so it must
// never fail: no file access, no parsing, just a table of 8x8 glyph bitmaps for
// printable ASCII compiled into the binary. Anything outside ASCII 32..=127
// (accents, emoji) still advances the pen by one cell but draws nothing.
//
// Each glyph is eight row bytes; bit 7 of a row is the leftmost pixel.

use crate::core_modules::font::TextBounds;
use crate::core_modules::pixel::pixel::Pixel;
use image::RgbImage;

pub const CELL_WIDTH: i32 = 8;
pub const CELL_HEIGHT: i32 = 8;

const FIRST_GLYPH: u32 = 32;
const LAST_GLYPH: u32 = 127;

/// Minimal fixed-cell font used when no outline font can be loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    pub fn new() -> Self {
        BitmapFont
    }

    /// The eight row bytes for `c`, if the font covers it.
    pub fn glyph_rows(&self, c: char) -> Option<&'static [u8]> {
        let code = c as u32;
        if !(FIRST_GLYPH..=LAST_GLYPH).contains(&code) {
            return None;
        }
        let start = ((code - FIRST_GLYPH) * CELL_HEIGHT as u32) as usize;
        Some(&GLYPHS[start..start + CELL_HEIGHT as usize])
    }

    /// Tight ink bounds of `text` relative to the top-left of the first cell.
    pub fn measure(&self, text: &str) -> TextBounds {
        let mut bounds = TextBounds::EMPTY;
        self.for_each_ink_pixel(text, |x, y| {
            bounds = bounds.union(&TextBounds::new(x, y, x + 1, y + 1));
        });
        bounds
    }

    /// Draws `text` with its first cell's top-left corner at (`x`, `y`).
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Pixel) {
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);
        self.for_each_ink_pixel(text, |gx, gy| {
            let (px, py) = (x + gx, y + gy);
            if (0..width).contains(&px) && (0..height).contains(&py) {
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                *pixel = color.blend_over(*pixel, 1.0);
            }
        });
    }

    fn for_each_ink_pixel(&self, text: &str, mut f: impl FnMut(i32, i32)) {
        for (index, c) in text.chars().enumerate() {
            let Some(rows) = self.glyph_rows(c) else {
                continue;
            };
            let cell_x = index as i32 * CELL_WIDTH;
            for (row, bits) in rows.iter().enumerate() {
                for column in 0..CELL_WIDTH {
                    if (bits >> (7 - column)) & 1 == 1 {
                        f(cell_x + column, row as i32);
                    }
                }
            }
        }
    }
}

#[rustfmt::skip]
static GLYPHS: [u8; 768] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // ' '
    0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00, // '!'
    0x6C, 0x6C, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00, // '"'
    0x24, 0x24, 0x7E, 0x24, 0x7E, 0x24, 0x24, 0x00, // '#'
    0x18, 0x3E, 0x60, 0x3C, 0x06, 0x7C, 0x18, 0x00, // '$'
    0x00, 0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00, // '%'
    0x30, 0x48, 0x30, 0x56, 0x88, 0x88, 0x76, 0x00, // '&'
    0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, // '''
    0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00, // '('
    0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00, // ')'
    0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00, // '*'
    0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00, // '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30, // ','
    0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00, // '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00, // '.'
    0x02, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x40, 0x00, // '/'
    0x3C, 0x66, 0x6E, 0x7E, 0x76, 0x66, 0x3C, 0x00, // '0'
    0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00, // '1'
    0x3C, 0x66, 0x06, 0x0C, 0x18, 0x30, 0x7E, 0x00, // '2'
    0x3C, 0x66, 0x06, 0x1C, 0x06, 0x66, 0x3C, 0x00, // '3'
    0x0C, 0x1C, 0x3C, 0x6C, 0x7E, 0x0C, 0x0C, 0x00, // '4'
    0x7E, 0x60, 0x7C, 0x06, 0x06, 0x66, 0x3C, 0x00, // '5'
    0x1C, 0x30, 0x60, 0x7C, 0x66, 0x66, 0x3C, 0x00, // '6'
    0x7E, 0x06, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00, // '7'
    0x3C, 0x66, 0x66, 0x3C, 0x66, 0x66, 0x3C, 0x00, // '8'
    0x3C, 0x66, 0x66, 0x3E, 0x06, 0x0C, 0x38, 0x00, // '9'
    0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x00, // ':'
    0x00, 0x18, 0x18, 0x00, 0x18, 0x18, 0x30, 0x00, // ';'
    0x06, 0x0C, 0x18, 0x30, 0x18, 0x0C, 0x06, 0x00, // '<'
    0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00, // '='
    0x60, 0x30, 0x18, 0x0C, 0x18, 0x30, 0x60, 0x00, // '>'
    0x3C, 0x66, 0x06, 0x0C, 0x18, 0x00, 0x18, 0x00, // '?'
    0x3C, 0x66, 0x6E, 0x6A, 0x6E, 0x60, 0x3C, 0x00, // '@'
    0x18, 0x3C, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x00, // 'A'
    0x7C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x7C, 0x00, // 'B'
    0x3C, 0x66, 0x60, 0x60, 0x60, 0x66, 0x3C, 0x00, // 'C'
    0x78, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0x78, 0x00, // 'D'
    0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x7E, 0x00, // 'E'
    0x7E, 0x60, 0x60, 0x7C, 0x60, 0x60, 0x60, 0x00, // 'F'
    0x3C, 0x66, 0x60, 0x6E, 0x66, 0x66, 0x3E, 0x00, // 'G'
    0x66, 0x66, 0x66, 0x7E, 0x66, 0x66, 0x66, 0x00, // 'H'
    0x3C, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00, // 'I'
    0x06, 0x06, 0x06, 0x06, 0x66, 0x66, 0x3C, 0x00, // 'J'
    0x66, 0x6C, 0x78, 0x70, 0x78, 0x6C, 0x66, 0x00, // 'K'
    0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00, // 'L'
    0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x00, // 'M'
    0x66, 0x76, 0x7E, 0x7E, 0x6E, 0x66, 0x66, 0x00, // 'N'
    0x3C, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00, // 'O'
    0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, 0x60, 0x00, // 'P'
    0x3C, 0x66, 0x66, 0x66, 0x6A, 0x6C, 0x36, 0x00, // 'Q'
    0x7C, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0x66, 0x00, // 'R'
    0x3C, 0x66, 0x60, 0x3C, 0x06, 0x66, 0x3C, 0x00, // 'S'
    0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, // 'T'
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x00, // 'U'
    0x66, 0x66, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00, // 'V'
    0x63, 0x63, 0x63, 0x6B, 0x7F, 0x77, 0x63, 0x00, // 'W'
    0x66, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x66, 0x00, // 'X'
    0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00, // 'Y'
    0x7E, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7E, 0x00, // 'Z'
    0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00, // '['
    0x40, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x02, 0x00, // '\'
    0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00, // ']'
    0x18, 0x3C, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, // '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x7E, 0x00, // '_'
    0x30, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, // '`'
    0x00, 0x00, 0x3C, 0x06, 0x3E, 0x66, 0x3E, 0x00, // 'a'
    0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x7C, 0x00, // 'b'
    0x00, 0x00, 0x3C, 0x66, 0x60, 0x66, 0x3C, 0x00, // 'c'
    0x06, 0x06, 0x3E, 0x66, 0x66, 0x66, 0x3E, 0x00, // 'd'
    0x00, 0x00, 0x3C, 0x66, 0x7E, 0x60, 0x3C, 0x00, // 'e'
    0x1C, 0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x00, // 'f'
    0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x3C, // 'g'
    0x60, 0x60, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00, // 'h'
    0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00, // 'i'
    0x0C, 0x00, 0x1C, 0x0C, 0x0C, 0x0C, 0x6C, 0x38, // 'j'
    0x60, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0x00, // 'k'
    0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00, // 'l'
    0x00, 0x00, 0x76, 0x7F, 0x6B, 0x6B, 0x63, 0x00, // 'm'
    0x00, 0x00, 0x7C, 0x66, 0x66, 0x66, 0x66, 0x00, // 'n'
    0x00, 0x00, 0x3C, 0x66, 0x66, 0x66, 0x3C, 0x00, // 'o'
    0x00, 0x00, 0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, // 'p'
    0x00, 0x00, 0x3E, 0x66, 0x66, 0x3E, 0x06, 0x06, // 'q'
    0x00, 0x00, 0x7C, 0x66, 0x60, 0x60, 0x60, 0x00, // 'r'
    0x00, 0x00, 0x3E, 0x60, 0x3C, 0x06, 0x7C, 0x00, // 's'
    0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x1C, 0x00, // 't'
    0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x3E, 0x00, // 'u'
    0x00, 0x00, 0x66, 0x66, 0x66, 0x3C, 0x18, 0x00, // 'v'
    0x00, 0x00, 0x63, 0x6B, 0x6B, 0x7F, 0x36, 0x00, // 'w'
    0x00, 0x00, 0x66, 0x3C, 0x18, 0x3C, 0x66, 0x00, // 'x'
    0x00, 0x00, 0x66, 0x66, 0x66, 0x3E, 0x06, 0x3C, // 'y'
    0x00, 0x00, 0x7E, 0x0C, 0x18, 0x30, 0x7E, 0x00, // 'z'
    0x0E, 0x18, 0x18, 0x70, 0x18, 0x18, 0x0E, 0x00, // '{'
    0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00, // '|'
    0x70, 0x18, 0x18, 0x0E, 0x18, 0x18, 0x70, 0x00, // '}'
    0x32, 0x4C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // '~'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // DEL
];
