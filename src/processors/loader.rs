// ibconv/src/processors/loader.rs
use crate::core::{ConvertError, Result};
use crate::utils::image_format_to_string;
use image::{DynamicImage, GenericImageView, ImageReader};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Opens and decodes `path`, sniffing the format from the file contents.
    /// Only the codecs compiled into `image` (JPEG, PNG, GIF) can succeed.
    pub fn load(&self, path: &Path) -> Result<DynamicImage> {
        log::debug!("Loading image from: {}", path.display());

        let file = File::open(path).map_err(ConvertError::Open)?;
        let reader = ImageReader::new(BufReader::new(file))
            .with_guessed_format()
            .map_err(ConvertError::Open)?;

        let format = reader.format();
        let format_name = image_format_to_string(format);

        let image = reader.decode().map_err(|source| ConvertError::Decode {
            format: format_name.clone(),
            source,
        })?;

        let (width, height) = image.dimensions();
        log::debug!(
            "Loaded {} image: {}x{} pixels, color: {:?}",
            format_name,
            width,
            height,
            image.color()
        );

        Ok(image)
    }
}
