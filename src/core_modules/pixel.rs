// THEORY:
// The `Pixel` module is the smallest unit of the renderer: a "dumb" RGBA colour
// value. Every colour the banner pipeline touches (gradient stops, text fills,
// the drop shadow, vignette rings) is described as a `Pixel` and only converted
// into the `image` crate's channel types at the moment it is written to a buffer.
//
// Key architectural principles:
// 1.  **Data Container**: `Pixel` carries four 8-bit channels and nothing else.
// 2.  **Integer Blending**: All mixing is done in integer space with a rounding
//     divide-by-255, so a render is bit-for-bit reproducible across runs.
// 3.  **Source-Over Onto Opaque**: The canvas beneath text is always opaque, so
//     blending a translucent `Pixel` only needs the source alpha.

pub mod pixel {
    use image::{Rgb, Rgba};

    pub type Channel = u8;
    pub type Coverage = f32;

    pub const OPAQUE: Channel = 255;

    /// A single RGBA colour value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Pixel {
        pub red: Channel,
        pub green: Channel,
        pub blue: Channel,
        pub alpha: Channel,
    }

    impl Pixel {
        pub const WHITE: Pixel = Pixel::rgb(255, 255, 255);
        pub const BLACK: Pixel = Pixel::rgb(0, 0, 0);

        pub const fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// An opaque colour.
        pub const fn rgb(red: Channel, green: Channel, blue: Channel) -> Self {
            Pixel::new(red, green, blue, OPAQUE)
        }

        pub const fn with_alpha(self, alpha: Channel) -> Self {
            Pixel { alpha, ..self }
        }

        /// Mixes `start` towards `end` by an 8-bit weight, where 0 yields `start`
        /// and 255 yields `end`. Alpha is taken from `start`.
        pub fn mix(start: Pixel, end: Pixel, weight: Channel) -> Pixel {
            let w = weight as u32;
            let lerp = |a: Channel, b: Channel| div255(a as u32 * (255 - w) + b as u32 * w);
            Pixel::new(
                lerp(start.red, end.red),
                lerp(start.green, end.green),
                lerp(start.blue, end.blue),
                start.alpha,
            )
        }

        /// Composites this colour over an opaque destination. `coverage` is the
        /// fraction of the destination pixel covered by the source shape.
        pub fn blend_over(&self, destination: Rgb<Channel>, coverage: Coverage) -> Rgb<Channel> {
            let coverage = (coverage.clamp(0.0, 1.0) * 255.0).round() as u32;
            let weight = div255(coverage * self.alpha as u32);
            if weight == 0 {
                return destination;
            }
            let source = Pixel::rgb(destination[0], destination[1], destination[2]);
            let mixed = Pixel::mix(source, *self, weight);
            Rgb([mixed.red, mixed.green, mixed.blue])
        }
    }

    /// Rounding division by 255 for values up to `255 * 255`.
    pub fn div255(value: u32) -> Channel {
        let biased = value + 128;
        (((biased >> 8) + biased) >> 8) as Channel
    }

    impl From<(Channel, Channel, Channel)> for Pixel {
        fn from((red, green, blue): (Channel, Channel, Channel)) -> Self {
            Pixel::rgb(red, green, blue)
        }
    }

    impl From<Pixel> for Rgb<Channel> {
        fn from(pixel: Pixel) -> Self {
            Rgb([pixel.red, pixel.green, pixel.blue])
        }
    }

    impl From<Pixel> for Rgba<Channel> {
        fn from(pixel: Pixel) -> Self {
            Rgba([pixel.red, pixel.green, pixel.blue, pixel.alpha])
        }
    }
}
