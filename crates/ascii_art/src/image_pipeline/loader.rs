use std::path::Path;

use image::{DynamicImage, GenericImageView, Pixel, RgbImage};
use log::debug;

use crate::AsciiError;

/// Read-only RGB view over a decoded image.
pub trait PixelSource {
    fn dimensions(&self) -> (u32, u32);

    /// RGB at an in-bounds coordinate.
    fn pixel_at(&self, x: u32, y: u32) -> [u8; 3];
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn pixel_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).to_rgb().0
    }
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn pixel_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn pixel_at(&self, x: u32, y: u32) -> [u8; 3] {
        (**self).pixel_at(x, y)
    }
}

pub fn load_image(path: &Path) -> Result<DynamicImage, AsciiError> {
    let image = image::open(path)?;
    let (w, h) = GenericImageView::dimensions(&image);
    debug!("loaded image {}x{} from {}", w, h, path.display());
    Ok(image)
}
