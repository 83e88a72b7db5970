// THEORY:
// Fonts are the one place in the renderer where the environment is allowed to
// differ between machines. A banner asks for three font *roles* (title,
// subtitle, emoji); each role owns an ordered chain of candidate sources and
// resolves independently to the first one that loads:
//
//   system font by name  ->  known font path  ->  built-in bitmap font
//
// A failed candidate is not an error, it is simply skipped (and traced at
// debug level). Because the built-in font cannot fail, a default chain always
// resolves and a render never aborts for lack of fonts.
//
// Once resolved, a `HeroFont` answers two questions for the layout code: how
// wide is this string (tight ink bounds), and where does its ink go.

use crate::core_modules::bitmap_font::BitmapFont;
use crate::core_modules::pixel::pixel::Pixel;
use ab_glyph::{point, Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use image::RgbImage;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directories searched, in order, for fonts requested by file name.
pub const SYSTEM_FONT_DIRS: &[&str] = &[
    "C:\\Windows\\Fonts",
    "/usr/share/fonts/truetype/msttcorefonts",
    "/usr/share/fonts/truetype",
    "/usr/share/fonts/TTF",
    "/Library/Fonts",
    "/System/Library/Fonts/Supplemental",
];

pub const TITLE_FONT_SIZE: f32 = 72.0;
pub const SUBTITLE_FONT_SIZE: f32 = 36.0;
pub const EMOJI_FONT_SIZE: f32 = 120.0;

/// Why a single font candidate was rejected.
#[derive(Error, Debug)]
pub enum FontLoadError {
    #[error("font `{0}` not found in any system font directory")]
    NotFound(String),
    #[error("failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} is not a usable font file")]
    Invalid(PathBuf),
    #[error("no candidate fonts to try")]
    NoCandidates,
}

/// Pixel-space ink bounds relative to a text anchor. `right` and `bottom` are
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub const EMPTY: TextBounds = TextBounds::new(0, 0, 0, 0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        TextBounds {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    pub fn width(&self) -> u32 {
        if self.is_empty() { 0 } else { (self.right - self.left) as u32 }
    }

    pub fn union(&self, other: &TextBounds) -> TextBounds {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        TextBounds::new(
            self.left.min(other.left),
            self.top.min(other.top),
            self.right.max(other.right),
            self.bottom.max(other.bottom),
        )
    }
}

/// The three font roles a banner needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Title,
    Subtitle,
    Emoji,
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontRole::Title => write!(f, "title"),
            FontRole::Subtitle => write!(f, "subtitle"),
            FontRole::Emoji => write!(f, "emoji"),
        }
    }
}

/// One place a font may come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// A font file name looked up in `SYSTEM_FONT_DIRS`.
    System(String),
    /// An explicit font file.
    Path(PathBuf),
    /// The compiled-in 8x8 bitmap font. Always loads.
    Builtin,
}

impl FontSource {
    pub fn system(name: impl Into<String>) -> Self {
        FontSource::System(name.into())
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        FontSource::Path(path.into())
    }

    /// Loads this source at `size` pixels per em.
    pub fn load(&self, size: f32) -> Result<HeroFont, FontLoadError> {
        match self {
            FontSource::System(name) => {
                let path = find_system_font(name).ok_or_else(|| FontLoadError::NotFound(name.clone()))?;
                load_outline_font(&path, size)
            }
            FontSource::Path(path) => load_outline_font(path, size),
            FontSource::Builtin => Ok(HeroFont::builtin()),
        }
    }
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::System(name) => write!(f, "system font {name}"),
            FontSource::Path(path) => write!(f, "{}", path.display()),
            FontSource::Builtin => write!(f, "built-in bitmap font"),
        }
    }
}

/// An ordered list of candidates for one role, at one size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontChain {
    pub role: FontRole,
    pub size: f32,
    pub candidates: Vec<FontSource>,
}

impl FontChain {
    pub fn new(role: FontRole, size: f32, candidates: Vec<FontSource>) -> Self {
        Self {
            role,
            size,
            candidates,
        }
    }

    /// The default chain for `role`: a common system font, a well-known Linux
    /// font path, then the built-in font.
    pub fn for_role(role: FontRole) -> Self {
        match role {
            FontRole::Title => FontChain::new(
                role,
                TITLE_FONT_SIZE,
                vec![
                    FontSource::system("arial.ttf"),
                    FontSource::path("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
                    FontSource::Builtin,
                ],
            ),
            FontRole::Subtitle => FontChain::new(
                role,
                SUBTITLE_FONT_SIZE,
                vec![
                    FontSource::system("arial.ttf"),
                    FontSource::path("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
                    FontSource::Builtin,
                ],
            ),
            FontRole::Emoji => FontChain::new(
                role,
                EMOJI_FONT_SIZE,
                vec![
                    FontSource::system("seguiemj.ttf"),
                    FontSource::path("/usr/share/fonts/truetype/noto/NotoColorEmoji.ttf"),
                    FontSource::Builtin,
                ],
            ),
        }
    }
}

/// Returns the first candidate in `chain` that loads. If none does, the error
/// from the last candidate is returned.
pub fn resolve_font(chain: &FontChain) -> Result<HeroFont, FontLoadError> {
    let mut last_error = FontLoadError::NoCandidates;
    for candidate in &chain.candidates {
        match candidate.load(chain.size) {
            Ok(font) => {
                debug!("{} font resolved to {}", chain.role, candidate);
                return Ok(font);
            }
            Err(err) => {
                debug!("{} font candidate {} rejected: {}", chain.role, candidate, err);
                last_error = err;
            }
        }
    }
    Err(last_error)
}

fn find_system_font(name: &str) -> Option<PathBuf> {
    SYSTEM_FONT_DIRS
        .iter()
        .map(|dir| Path::new(dir).join(name))
        .find(|path| path.is_file())
}

fn load_outline_font(path: &Path, size: f32) -> Result<HeroFont, FontLoadError> {
    let data = std::fs::read(path).map_err(|source| FontLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let font = FontVec::try_from_vec(data).map_err(|_| FontLoadError::Invalid(path.to_path_buf()))?;
    let scale = em_scale(&font, size);
    Ok(HeroFont::Outline { font, scale })
}

/// `ab_glyph` scales by ascent-to-descent height; convert a pixels-per-em size
/// into that.
fn em_scale(font: &FontVec, size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => PxScale::from(size * font.height_unscaled() / units_per_em),
        _ => PxScale::from(size),
    }
}

/// A resolved font, ready for measuring and drawing.
pub enum HeroFont {
    Outline { font: FontVec, scale: PxScale },
    Bitmap(BitmapFont),
}

impl HeroFont {
    pub fn builtin() -> Self {
        HeroFont::Bitmap(BitmapFont::new())
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, HeroFont::Bitmap(_))
    }

    /// Tight ink bounds of `text` drawn with its anchor at the origin.
    pub fn measure(&self, text: &str) -> TextBounds {
        match self {
            HeroFont::Outline { font, scale } => {
                let mut bounds = TextBounds::EMPTY;
                layout_glyphs(font, *scale, text, |glyph| {
                    let bb = glyph.px_bounds();
                    let glyph_bounds = TextBounds::new(
                        bb.min.x.floor() as i32,
                        bb.min.y.floor() as i32,
                        bb.max.x.ceil() as i32,
                        bb.max.y.ceil() as i32,
                    );
                    bounds = bounds.union(&glyph_bounds);
                });
                bounds
            }
            HeroFont::Bitmap(bitmap) => bitmap.measure(text),
        }
    }

    /// Draws `text` with its anchor (left edge, top of ascent) at (`x`, `y`),
    /// blending `color` by glyph coverage.
    pub fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Pixel) {
        match self {
            HeroFont::Outline { font, scale } => {
                let (width, height) = (canvas.width() as i32, canvas.height() as i32);
                layout_glyphs(font, *scale, text, |glyph| {
                    let bb = glyph.px_bounds();
                    let (origin_x, origin_y) = (x + bb.min.x as i32, y + bb.min.y as i32);
                    glyph.draw(|gx, gy, coverage| {
                        let (px, py) = (origin_x + gx as i32, origin_y + gy as i32);
                        if (0..width).contains(&px) && (0..height).contains(&py) {
                            let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                            *pixel = color.blend_over(*pixel, coverage);
                        }
                    });
                });
            }
            HeroFont::Bitmap(bitmap) => bitmap.draw(canvas, x, y, text, color),
        }
    }
}

/// Lays out `text` on a single line starting at the origin, baseline at the
/// font's ascent, calling `f` for every glyph that has an outline.
fn layout_glyphs(font: &FontVec, scale: PxScale, text: &str, mut f: impl FnMut(OutlinedGlyph)) {
    let font = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut previous: Option<GlyphId> = None;

    for c in text.chars() {
        let glyph_id = font.glyph_id(c);
        if let Some(previous) = previous {
            caret += font.kern(previous, glyph_id);
        }
        let glyph = glyph_id.with_scale_and_position(scale, point(caret, font.ascent()));
        caret += font.h_advance(glyph_id);
        previous = Some(glyph_id);

        if let Some(outlined) = font.outline_glyph(glyph) {
            f(outlined);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_union_ignores_empty() {
        let a = TextBounds::new(2, 3, 10, 12);
        assert_eq!(TextBounds::EMPTY.union(&a), a);
        assert_eq!(a.union(&TextBounds::EMPTY), a);
        assert_eq!(a.union(&TextBounds::new(-1, 5, 4, 20)), TextBounds::new(-1, 3, 10, 20));
        assert_eq!(TextBounds::EMPTY.width(), 0);
        assert_eq!(a.width(), 8);
    }

    #[test]
    fn default_chains_end_in_builtin() {
        for role in [FontRole::Title, FontRole::Subtitle, FontRole::Emoji] {
            let chain = FontChain::for_role(role);
            assert_eq!(chain.role, role);
            assert_eq!(chain.candidates.len(), 3);
            assert_eq!(chain.candidates.last(), Some(&FontSource::Builtin));
            assert!(resolve_font(&chain).is_ok());
        }
        assert_eq!(FontChain::for_role(FontRole::Title).size, 72.0);
        assert_eq!(FontChain::for_role(FontRole::Subtitle).size, 36.0);
        assert_eq!(FontChain::for_role(FontRole::Emoji).size, 120.0);
    }

    #[test]
    fn missing_fonts_fall_through_to_builtin() {
        let chain = FontChain::new(
            FontRole::Title,
            TITLE_FONT_SIZE,
            vec![
                FontSource::system("definitely-not-installed.ttf"),
                FontSource::path("/nonexistent/fonts/Missing.ttf"),
                FontSource::Builtin,
            ],
        );
        let font = resolve_font(&chain).expect("built-in font always loads");
        assert!(font.is_builtin());
    }

    #[test]
    fn invalid_font_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("bogus.ttf");
        std::fs::write(&bogus, b"not a font").unwrap();

        let err = FontSource::path(&bogus).load(36.0).err().expect("garbage must not parse");
        assert!(matches!(err, FontLoadError::Invalid(_)));

        let chain = FontChain::new(FontRole::Subtitle, 36.0, vec![FontSource::path(&bogus), FontSource::Builtin]);
        assert!(resolve_font(&chain).unwrap().is_builtin());
    }

    #[test]
    fn chain_without_builtin_reports_last_failure() {
        let chain = FontChain::new(FontRole::Emoji, 120.0, vec![FontSource::path("/nonexistent/emoji.ttf")]);
        assert!(matches!(resolve_font(&chain), Err(FontLoadError::Io { .. })));

        let empty = FontChain::new(FontRole::Emoji, 120.0, Vec::new());
        assert!(matches!(resolve_font(&empty), Err(FontLoadError::NoCandidates)));
    }

    #[test]
    fn builtin_font_measures_like_bitmap() {
        let font = HeroFont::builtin();
        assert_eq!(font.measure("AB"), BitmapFont::new().measure("AB"));
    }

    #[test]
    fn outline_font_measures_when_available() {
        // Only runs its assertions on machines that have DejaVu installed.
        let path = Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf");
        let Ok(font) = FontSource::path(path).load(36.0) else {
            return;
        };
        let narrow = font.measure("i");
        let wide = font.measure("Wide text");
        assert!(narrow.width() > 0);
        assert!(wide.width() > narrow.width());
        assert!(wide.top >= 0);
    }

    #[test]
    fn outline_title_is_centered_by_its_ink() {
        // Only runs its assertions on machines that have DejaVu installed.
        let path = Path::new("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf");
        let Ok(font) = FontSource::path(path).load(TITLE_FONT_SIZE) else {
            return;
        };
        let text = "Authentic Traditional Foods";
        let bounds = font.measure(text);
        let x = crate::core_modules::text::centered_x(1920, bounds.width());
        assert!(x >= 0);
        assert!(x as u32 + bounds.width() <= 1920);

        let mut canvas = RgbImage::new(1920, 120);
        font.draw(&mut canvas, x, 0, text, Pixel::WHITE);
        let inked: Vec<u32> = (0..1920)
            .filter(|&col| (0..120).any(|row| canvas.get_pixel(col, row)[0] > 0))
            .collect();
        let (first, last) = (inked[0], inked[inked.len() - 1]);
        let left_margin = first as i32;
        let right_margin = 1919 - last as i32;
        assert!((left_margin - right_margin).abs() <= 2, "{left_margin} vs {right_margin}");
    }
}
