// THEORY:
// This file is the main entry point for the `hero_banner` library crate.
// It exports the `HeroRenderer` and its associated data structures
// (`HeroConfig`, `RenderConfig`, `GeneratedImage`) as the high-level interface
// for rendering hero-slideshow banners. The drawing building blocks live under
// `core_modules` and can be used on their own (gradient, fonts, text, vignette).
//
// The binary in `main.rs` is a thin runner that feeds the built-in banner set
// from `heroes` into the pipeline.

pub mod core_modules;
pub mod error;
pub mod heroes;
pub mod pipeline;

pub use error::{HeroError, Result};
pub use pipeline::{GeneratedImage, HeroConfig, HeroRenderer, RenderConfig};
