// THEORY:
// The `pipeline` module is the top-level API of the renderer. It wraps the
// whole layer stack (gradient, fonts, text, vignette, encoder) behind a single
// `HeroRenderer` that turns a `HeroConfig` into a finished banner.
//
// Every banner goes through the same fixed stages:
//   1. gradient background
//   2. font resolution (title, subtitle, emoji; each through its own chain)
//   3. emoji, centered, no shadow
//   4. title, centered, with shadow
//   5. subtitle, centered, with a smaller shadow
//   6. vignette overlay, alpha-composited
//   7. flatten to RGB
//   8. JPEG encode to `<output_dir>/<filename>`
//
// The list of banners is always passed in by the caller. Nothing in here knows
// about the built-in slideshow set.

use crate::core_modules::font::{resolve_font, FontChain, FontRole, HeroFont};
use crate::core_modules::gradient::create_gradient;
use crate::core_modules::pixel::pixel::Pixel;
use crate::core_modules::text::{centered_x, draw_text, draw_text_with_shadow, DEFAULT_SHADOW_OFFSET};
use crate::core_modules::utils::image_helper::image_helper::{flatten_to_rgb, save_jpeg};
use crate::core_modules::vignette::{apply_overlay, vignette_overlay, VIGNETTE_MAX_ALPHA, VIGNETTE_STEPS};
use crate::error::{HeroError, Result};
use image::{DynamicImage, RgbImage};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const HERO_WIDTH: u32 = 1920;
pub const HERO_HEIGHT: u32 = 600;
pub const JPEG_QUALITY: u8 = 90;

/// One banner to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroConfig {
    /// Output file name, unique within a run.
    pub filename: String,
    pub gradient_start: Pixel,
    pub gradient_end: Pixel,
    pub title: String,
    pub subtitle: String,
    /// A single display glyph; may be several code points.
    pub emoji: String,
}

impl HeroConfig {
    pub fn new(
        filename: impl Into<String>,
        gradient: (Pixel, Pixel),
        title: impl Into<String>,
        subtitle: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            gradient_start: gradient.0,
            gradient_end: gradient.1,
            title: title.into(),
            subtitle: subtitle.into(),
            emoji: emoji.into(),
        }
    }
}

/// Layout and output tunables shared by every banner of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub emoji_y: i32,
    pub title_y: i32,
    pub subtitle_y: i32,
    pub emoji_fill: Pixel,
    pub title_fill: Pixel,
    pub subtitle_fill: Pixel,
    pub title_shadow_offset: i32,
    pub subtitle_shadow_offset: i32,
    pub title_font: FontChain,
    pub subtitle_font: FontChain,
    pub emoji_font: FontChain,
    pub vignette_steps: u32,
    pub vignette_max_alpha: u32,
    pub jpeg_quality: u8,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: HERO_WIDTH,
            height: HERO_HEIGHT,
            emoji_y: 150,
            title_y: 320,
            subtitle_y: 410,
            emoji_fill: Pixel::WHITE.with_alpha(230),
            title_fill: Pixel::WHITE,
            subtitle_fill: Pixel::WHITE.with_alpha(220),
            title_shadow_offset: DEFAULT_SHADOW_OFFSET,
            subtitle_shadow_offset: 2,
            title_font: FontChain::for_role(FontRole::Title),
            subtitle_font: FontChain::for_role(FontRole::Subtitle),
            emoji_font: FontChain::for_role(FontRole::Emoji),
            vignette_steps: VIGNETTE_STEPS,
            vignette_max_alpha: VIGNETTE_MAX_ALPHA,
            jpeg_quality: JPEG_QUALITY,
        }
    }
}

/// The three fonts a banner is drawn with.
pub struct ResolvedFonts {
    pub title: HeroFont,
    pub subtitle: HeroFont,
    pub emoji: HeroFont,
}

/// A banner that has been written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub path: PathBuf,
    pub bytes: u64,
    pub width: u32,
    pub height: u32,
}

/// The main, top-level struct for the banner renderer.
pub struct HeroRenderer {
    config: RenderConfig,
}

impl HeroRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Resolves each font role through its own chain.
    pub fn resolve_fonts(&self) -> Result<ResolvedFonts> {
        let resolve = |chain: &FontChain| {
            resolve_font(chain).map_err(|source| HeroError::FontUnavailable {
                role: chain.role,
                source,
            })
        };
        Ok(ResolvedFonts {
            title: resolve(&self.config.title_font)?,
            subtitle: resolve(&self.config.subtitle_font)?,
            emoji: resolve(&self.config.emoji_font)?,
        })
    }

    /// Renders a banner to an RGB canvas, resolving fonts first.
    pub fn render(&self, hero: &HeroConfig) -> Result<RgbImage> {
        let fonts = self.resolve_fonts()?;
        Ok(self.render_with_fonts(hero, &fonts))
    }

    /// Renders a banner with already-resolved fonts.
    pub fn render_with_fonts(&self, hero: &HeroConfig, fonts: &ResolvedFonts) -> RgbImage {
        let config = &self.config;

        // Stage 1: Background
        let mut canvas = create_gradient(config.width, config.height, hero.gradient_start, hero.gradient_end);

        // Stage 3: Emoji
        let emoji_x = self.centered_x(&fonts.emoji, &hero.emoji);
        draw_text(&mut canvas, (emoji_x, config.emoji_y), &hero.emoji, &fonts.emoji, config.emoji_fill);

        // Stage 4: Title
        let title_x = self.centered_x(&fonts.title, &hero.title);
        draw_text_with_shadow(
            &mut canvas,
            (title_x, config.title_y),
            &hero.title,
            &fonts.title,
            config.title_fill,
            config.title_shadow_offset,
        );

        // Stage 5: Subtitle
        let subtitle_x = self.centered_x(&fonts.subtitle, &hero.subtitle);
        draw_text_with_shadow(
            &mut canvas,
            (subtitle_x, config.subtitle_y),
            &hero.subtitle,
            &fonts.subtitle,
            config.subtitle_fill,
            config.subtitle_shadow_offset,
        );

        // Stage 6: Vignette
        let overlay = vignette_overlay(config.width, config.height, config.vignette_steps, config.vignette_max_alpha);
        let mut composited = DynamicImage::ImageRgb8(canvas).to_rgba8();
        apply_overlay(&mut composited, &overlay);

        // Stage 7: Flatten
        flatten_to_rgb(composited)
    }

    /// Renders `hero` and writes it to `output_dir`. The directory must exist.
    pub fn render_to_file(&self, hero: &HeroConfig, output_dir: &Path) -> Result<GeneratedImage> {
        let image = self.render(hero)?;
        let path = output_dir.join(&hero.filename);
        let bytes = save_jpeg(&path, &image, self.config.jpeg_quality)?;
        Ok(GeneratedImage {
            path,
            bytes,
            width: image.width(),
            height: image.height(),
        })
    }

    /// Renders every banner in order into `output_dir`, creating it first.
    /// The first failure aborts the run; banners already written are kept.
    pub fn generate_all(&self, heroes: &[HeroConfig], output_dir: &Path) -> Result<Vec<GeneratedImage>> {
        validate_filenames(heroes)?;
        std::fs::create_dir_all(output_dir).map_err(|source| HeroError::io(output_dir, source))?;

        println!("Generating hero slideshow images...");

        let mut generated = Vec::with_capacity(heroes.len());
        for hero in heroes {
            println!("{}", creating_line(&hero.filename));
            let image = self.render_to_file(hero, output_dir)?;
            println!("{}", saved_line(&hero.filename, image.bytes));
            generated.push(image);
        }

        println!("\n{}", summary_lines(output_dir));
        Ok(generated)
    }

    fn centered_x(&self, font: &HeroFont, text: &str) -> i32 {
        centered_x(self.config.width, font.measure(text).width())
    }
}

fn creating_line(filename: &str) -> String {
    format!("Creating {filename}...")
}

/// Sizes are reported in whole kilobytes, rounded down.
fn saved_line(filename: &str, bytes: u64) -> String {
    format!("✓ Saved {filename} ({}KB)", bytes / 1024)
}

fn summary_lines(output_dir: &Path) -> String {
    format!(
        "✅ All hero images generated successfully!\n📁 Location: {}",
        output_dir.display()
    )
}

/// Rejects a set of banners in which two would write the same file.
pub fn validate_filenames(heroes: &[HeroConfig]) -> Result<()> {
    let mut seen = HashSet::with_capacity(heroes.len());
    for hero in heroes {
        if !seen.insert(hero.filename.as_str()) {
            return Err(HeroError::DuplicateFilename(hero.filename.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::font::FontSource;
    use image::Rgb;

    fn builtin_only() -> RenderConfig {
        RenderConfig {
            title_font: FontChain::new(FontRole::Title, 72.0, vec![FontSource::Builtin]),
            subtitle_font: FontChain::new(FontRole::Subtitle, 36.0, vec![FontSource::Builtin]),
            emoji_font: FontChain::new(FontRole::Emoji, 120.0, vec![FontSource::Builtin]),
            ..RenderConfig::default()
        }
    }

    fn sample() -> HeroConfig {
        HeroConfig::new(
            "sample.jpg",
            (Pixel::rgb(255, 107, 107), Pixel::rgb(255, 175, 123)),
            "Sample Title",
            "A subtitle line",
            "🍲",
        )
    }

    #[test]
    fn default_layout_matches_banner_constants() {
        let config = RenderConfig::default();
        assert_eq!((config.width, config.height), (1920, 600));
        assert_eq!((config.emoji_y, config.title_y, config.subtitle_y), (150, 320, 410));
        assert_eq!(config.emoji_fill, Pixel::new(255, 255, 255, 230));
        assert_eq!(config.subtitle_fill, Pixel::new(255, 255, 255, 220));
        assert_eq!((config.title_shadow_offset, config.subtitle_shadow_offset), (3, 2));
        assert_eq!(config.jpeg_quality, 90);
    }

    #[test]
    fn render_produces_full_size_canvas() {
        let renderer = HeroRenderer::new(builtin_only());
        let image = renderer.render(&sample()).unwrap();
        assert_eq!(image.dimensions(), (1920, 600));
    }

    #[test]
    fn render_is_deterministic() {
        let renderer = HeroRenderer::new(RenderConfig::default());
        let first = renderer.render(&sample()).unwrap();
        let second = renderer.render(&sample()).unwrap();
        assert!(first.as_raw() == second.as_raw());
    }

    #[test]
    fn text_is_drawn_on_the_title_row() {
        let renderer = HeroRenderer::new(builtin_only());
        let image = renderer.render(&sample()).unwrap();
        let plain = create_gradient(1920, 600, sample().gradient_start, sample().gradient_end);

        let title_row_changed = (0..1920).any(|x| image.get_pixel(x, 320) != plain.get_pixel(x, 320));
        assert!(title_row_changed);
        // Far from any text or vignette ring the gradient shows through unchanged.
        assert_eq!(image.get_pixel(960, 250), plain.get_pixel(960, 250));
    }

    #[test]
    fn vignette_darkens_inner_ring() {
        let renderer = HeroRenderer::new(builtin_only());
        let image = renderer.render(&sample()).unwrap();
        let plain = create_gradient(1920, 600, sample().gradient_start, sample().gradient_end);

        let ring: &Rgb<u8> = image.get_pixel(49, 250);
        let base = plain.get_pixel(49, 250);
        assert!(ring[1] < base[1]);
        assert_eq!(image.get_pixel(0, 250), plain.get_pixel(0, 250));
    }

    #[test]
    fn missing_primary_font_still_renders() {
        let config = RenderConfig {
            title_font: FontChain::new(
                FontRole::Title,
                72.0,
                vec![FontSource::path("/nonexistent/Primary.ttf"), FontSource::Builtin],
            ),
            ..RenderConfig::default()
        };
        let renderer = HeroRenderer::new(config);
        let fonts = renderer.resolve_fonts().unwrap();
        assert!(fonts.title.is_builtin());
        assert_eq!(renderer.render(&sample()).unwrap().dimensions(), (1920, 600));
    }

    #[test]
    fn chain_without_fallback_surfaces_error() {
        let config = RenderConfig {
            emoji_font: FontChain::new(FontRole::Emoji, 120.0, vec![FontSource::path("/nonexistent/Emoji.ttf")]),
            ..RenderConfig::default()
        };
        let err = HeroRenderer::new(config).render(&sample()).err().unwrap();
        assert!(matches!(err, HeroError::FontUnavailable { role: FontRole::Emoji, .. }));
    }

    #[test]
    fn duplicate_filenames_are_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("images");
        let heroes = vec![sample(), sample()];

        let err = HeroRenderer::new(builtin_only()).generate_all(&heroes, &out).err().unwrap();
        assert!(matches!(err, HeroError::DuplicateFilename(ref name) if name == "sample.jpg"));
        assert!(!out.exists());
    }

    #[test]
    fn progress_lines_report_whole_kilobytes() {
        assert_eq!(creating_line("hero-1.jpg"), "Creating hero-1.jpg...");
        assert_eq!(saved_line("hero-1.jpg", 0), "✓ Saved hero-1.jpg (0KB)");
        assert_eq!(saved_line("hero-1.jpg", 1023), "✓ Saved hero-1.jpg (0KB)");
        assert_eq!(saved_line("hero-2.jpg", 1024), "✓ Saved hero-2.jpg (1KB)");
        assert_eq!(saved_line("hero-3.jpg", 87_551), "✓ Saved hero-3.jpg (85KB)");
    }

    #[test]
    fn summary_names_the_output_directory() {
        let summary = summary_lines(Path::new("/srv/site/images"));
        assert_eq!(
            summary,
            "✅ All hero images generated successfully!\n📁 Location: /srv/site/images"
        );
    }

    #[test]
    fn render_to_file_writes_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = HeroRenderer::new(builtin_only());
        let generated = renderer.render_to_file(&sample(), dir.path()).unwrap();

        assert_eq!(generated.path, dir.path().join("sample.jpg"));
        assert_eq!((generated.width, generated.height), (1920, 600));
        assert!(generated.bytes > 0);
        let decoded = image::open(&generated.path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1920, 600));
    }
}
