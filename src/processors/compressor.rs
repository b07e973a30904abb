// ibconv/src/processors/compressor.rs
use crate::core::{ConvertError, Result, TargetFormat, JPEG_QUALITY};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ColorType, DynamicImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct Compressor {
    format: TargetFormat,
    quality: u8,
}

impl Compressor {
    pub fn new(format: TargetFormat) -> Self {
        Self {
            format,
            quality: JPEG_QUALITY,
        }
    }

    /// Creates (or truncates) `path` and encodes `image` into it. A file left
    /// behind by a failed encode is not removed.
    pub fn save(&self, image: &DynamicImage, path: &Path) -> Result<()> {
        log::debug!(
            "Saving image to {} as {}, quality: {}",
            path.display(),
            self.format,
            self.quality
        );

        let file = File::create(path).map_err(ConvertError::Create)?;
        let mut writer = BufWriter::new(file);

        self.encode(image, &mut writer)?;
        writer
            .flush()
            .map_err(|e| ConvertError::Encode(image::ImageError::IoError(e)))?;

        Ok(())
    }

    pub fn encode<W: Write>(&self, image: &DynamicImage, writer: &mut W) -> Result<()> {
        match self.format {
            TargetFormat::Jpg => {
                let encoder = JpegEncoder::new_with_quality(writer, self.quality);
                jpeg_compatible(image).write_with_encoder(encoder)?;
            }
            TargetFormat::Png => {
                image.write_with_encoder(PngEncoder::new(writer))?;
            }
        }
        Ok(())
    }
}

// JPEG carries no alpha and only 8-bit samples.
fn jpeg_compatible(image: &DynamicImage) -> std::borrow::Cow<'_, DynamicImage> {
    use std::borrow::Cow;

    match image.color() {
        ColorType::L8 | ColorType::Rgb8 => Cow::Borrowed(image),
        ColorType::L16 | ColorType::La8 | ColorType::La16 => {
            Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8()))
        }
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat, RgbaImage};

    fn sample() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(6, 4, |x, y| {
            image::Rgba([(x * 40) as u8, (y * 60) as u8, 128, 200])
        }))
    }

    #[test]
    fn writes_jpeg_from_rgba_source() {
        let mut buf = Vec::new();
        Compressor::new(TargetFormat::Jpg)
            .encode(&sample(), &mut buf)
            .unwrap();

        assert_eq!(image::guess_format(&buf).unwrap(), ImageFormat::Jpeg);
        let decoded = image::load_from_memory(&buf).unwrap();
        assert_eq!(decoded.dimensions(), (6, 4));
    }

    #[test]
    fn png_is_lossless() {
        let src = sample();
        let mut buf = Vec::new();
        Compressor::new(TargetFormat::Png)
            .encode(&src, &mut buf)
            .unwrap();

        assert_eq!(image::guess_format(&buf).unwrap(), ImageFormat::Png);
        let decoded = image::load_from_memory(&buf).unwrap();
        assert_eq!(decoded.to_rgba8(), src.to_rgba8());
    }

    #[test]
    fn jpeg_output_is_deterministic() {
        let compressor = Compressor::new(TargetFormat::Jpg);
        let mut first = Vec::new();
        let mut second = Vec::new();
        compressor.encode(&sample(), &mut first).unwrap();
        compressor.encode(&sample(), &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn save_fails_when_parent_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = Compressor::new(TargetFormat::Png)
            .save(&sample(), &path)
            .unwrap_err();
        assert!(matches!(err, ConvertError::Create(_)));
    }
}
