// Renders the built-in hero slideshow banners into the frontend's public
// images directory.

use anyhow::Context;
use hero_banner::heroes::{builtin_heroes, default_output_dir};
use hero_banner::{HeroRenderer, RenderConfig};

fn main() -> anyhow::Result<()> {
    let output_dir = default_output_dir();
    let renderer = HeroRenderer::new(RenderConfig::default());

    renderer
        .generate_all(&builtin_heroes(), &output_dir)
        .with_context(|| format!("failed to generate hero images into {}", output_dir.display()))?;

    Ok(())
}
