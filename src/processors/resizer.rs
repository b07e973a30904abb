// ibconv/src/processors/resizer.rs
use image::{imageops::FilterType, DynamicImage};

/// Stretches images to an exact target box. Source aspect ratio is ignored.
pub struct Resizer {
    width: u32,
    height: u32,
    filter: FilterType,
}

impl Resizer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            filter: FilterType::Lanczos3,
        }
    }

    pub fn resize(&self, image: &DynamicImage) -> DynamicImage {
        if self.width == image.width() && self.height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resize");
            return image.clone();
        }

        log::debug!(
            "Resizing image from {}x{} to {}x{}",
            image.width(),
            image.height(),
            self.width,
            self.height
        );

        image.resize_exact(self.width, self.height, self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, RgbaImage};

    #[test]
    fn stretches_to_exact_box() {
        let tall = DynamicImage::ImageRgba8(RgbaImage::new(30, 90));
        let out = Resizer::new(200, 100).resize(&tall);
        assert_eq!(out.dimensions(), (200, 100));
    }

    #[test]
    fn keeps_color_type() {
        let src = DynamicImage::ImageRgba8(RgbaImage::new(8, 8));
        let out = Resizer::new(3, 5).resize(&src);
        assert_eq!(out.color(), src.color());
        assert_eq!(out.dimensions(), (3, 5));
    }

    #[test]
    fn same_size_is_a_copy() {
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            4,
            4,
            image::Rgba([9, 8, 7, 255]),
        ));
        let out = Resizer::new(4, 4).resize(&src);
        assert_eq!(out.as_bytes(), src.as_bytes());
    }
}
