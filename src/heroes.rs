// The slideshow set shipped with the storefront, plus where it is written.

use crate::core_modules::pixel::pixel::Pixel;
use crate::pipeline::HeroConfig;
use std::path::{Path, PathBuf};

/// The three built-in hero banners.
pub fn builtin_heroes() -> Vec<HeroConfig> {
    vec![
        // Coral to peach
        HeroConfig::new(
            "hero-1.jpg",
            (Pixel::rgb(255, 107, 107), Pixel::rgb(255, 175, 123)),
            "Authentic Traditional Foods",
            "Fresh, Local & Delicious - Delivered to Your Door",
            "🍲",
        ),
        // Green to teal
        HeroConfig::new(
            "hero-2.jpg",
            (Pixel::rgb(72, 187, 120), Pixel::rgb(56, 178, 172)),
            "Special Offers This Week",
            "Save Big on Your Favorite Traditional Meals",
            "🎉",
        ),
        // Indigo to purple
        HeroConfig::new(
            "hero-3.jpg",
            (Pixel::rgb(99, 102, 241), Pixel::rgb(139, 92, 246)),
            "Fast & Reliable Delivery",
            "Order Now, Enjoy Today - Same Day Delivery Available",
            "🚚",
        ),
    ]
}

/// `<repo root>/frontend/public/images`, where the repo root is the parent of
/// this crate's directory.
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("frontend")
        .join("public")
        .join("images")
}
