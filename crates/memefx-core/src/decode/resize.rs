//! Working-resolution guards.
//!
//! Every effect is at least `O(width * height)` per pass, so inputs are
//! bounded to a maximum side length before any expensive work starts.

use super::ResizeError;
use crate::raster::Raster;
use image::imageops::FilterType;

/// Resize an image to exact dimensions with a Lanczos3 filter.
///
/// # Errors
///
/// Returns `ResizeError::InvalidDimensions` if either target side is zero.
pub fn resize(image: Raster, width: u32, height: u32) -> Result<Raster, ResizeError> {
    if width == 0 || height == 0 {
        return Err(ResizeError::InvalidDimensions { width, height });
    }

    if image.width == width && image.height == height {
        return Ok(image);
    }

    let rgb_image = image
        .into_rgb_image()
        .ok_or(ResizeError::InconsistentSource)?;

    let resized = image::imageops::resize(&rgb_image, width, height, FilterType::Lanczos3);

    Ok(Raster::from_rgb_image(resized))
}

/// Shrink an image so its longest side is at most `max_edge`.
///
/// Aspect ratio is preserved. Images that already fit are handed back
/// untouched; this never upscales.
///
/// # Errors
///
/// Returns `ResizeError::ZeroBound` if `max_edge` is zero.
pub fn resize_to_fit(image: Raster, max_edge: u32) -> Result<Raster, ResizeError> {
    if max_edge == 0 {
        return Err(ResizeError::ZeroBound);
    }

    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image);
    }

    let (new_width, new_height) = calculate_fit_dimensions(image.width, image.height, max_edge);
    log::debug!(
        "downscaling {}x{} -> {}x{}",
        image.width,
        image.height,
        new_width,
        new_height
    );

    resize(image, new_width, new_height)
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn calculate_fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}
