pub mod bitmap_font;
pub mod font;
pub mod gradient;
pub mod pixel;
pub mod text;
pub mod utils;
pub mod vignette;
