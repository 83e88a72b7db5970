pub mod image_helper {
    use crate::error::{HeroError, Result};
    use image::{DynamicImage, RgbImage, RgbaImage};
    use jpeg_encoder::{ColorType, Encoder};
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::path::Path;

    /// Drops the alpha channel.
    pub fn flatten_to_rgb(image: RgbaImage) -> RgbImage {
        DynamicImage::ImageRgba8(image).to_rgb8()
    }

    /// Encodes `image` as a JPEG at `quality` with optimised Huffman tables and
    /// writes it to `path`, replacing any existing file. Returns the size of the
    /// written file.
    pub fn save_jpeg(path: &Path, image: &RgbImage, quality: u8) -> Result<u64> {
        let (width, height) = match (u16::try_from(image.width()), u16::try_from(image.height())) {
            (Ok(width), Ok(height)) => (width, height),
            _ => {
                return Err(HeroError::TooLarge {
                    path: path.to_path_buf(),
                    width: image.width(),
                    height: image.height(),
                });
            }
        };

        let output = File::create(path).map_err(|source| HeroError::io(path, source))?;
        let mut writer = BufWriter::new(output);

        let mut encoder = Encoder::new(&mut writer, quality);
        encoder.set_optimized_huffman_tables(true);
        encoder
            .encode(image.as_raw(), width, height, ColorType::Rgb)
            .map_err(|source| HeroError::Encode {
                path: path.to_path_buf(),
                source,
            })?;
        writer.flush().map_err(|source| HeroError::io(path, source))?;

        let metadata = std::fs::metadata(path).map_err(|source| HeroError::io(path, source))?;
        Ok(metadata.len())
    }
}
