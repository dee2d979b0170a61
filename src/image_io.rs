//! Loading and saving containers as raster images.
//!
//! Any format the `image` crate decodes is accepted as a cover and is
//! converted to 8-bit RGB. Stego output is always PNG, since lossy
//! formats would destroy the embedded bits.

use crate::container::PixelContainer;
use crate::error::{Error, Result};
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Decode an image file into an RGB container.
pub fn load_container(path: &Path) -> Result<PixelContainer> {
    let image = image::open(path)?.to_rgb8();
    log::debug!(
        "Loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    from_rgb_image(image)
}

/// Encode a container as a PNG file.
pub fn save_container(container: &PixelContainer, path: &Path) -> Result<()> {
    to_rgb_image(container)?.save_with_format(path, ImageFormat::Png)?;
    log::debug!("Saved {}", path.display());
    Ok(())
}

/// Wrap an `image` RGB buffer without copying.
pub fn from_rgb_image(image: RgbImage) -> Result<PixelContainer> {
    let (width, height) = image.dimensions();
    PixelContainer::from_raw(height as usize, width as usize, image.into_raw())
}

/// Copy a container into an `image` RGB buffer.
pub fn to_rgb_image(container: &PixelContainer) -> Result<RgbImage> {
    let width = u32::try_from(container.width())
        .map_err(|_| Error::InvalidContainer("width exceeds u32".to_string()))?;
    let height = u32::try_from(container.height())
        .map_err(|_| Error::InvalidContainer("height exceeds u32".to_string()))?;

    RgbImage::from_raw(width, height, container.as_raw().to_vec())
        .ok_or_else(|| Error::InvalidContainer("buffer does not match dimensions".to_string()))
}
