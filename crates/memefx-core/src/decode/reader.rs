//! Image decoding with EXIF orientation handling.

use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::types::{DecodeError, Orientation};
use crate::raster::Raster;

/// Decode an image (JPEG or PNG) from bytes, applying EXIF orientation.
///
/// The format is guessed from the content, not from any file name.
///
/// # Errors
///
/// Returns `DecodeError::CorruptedFile` if the bytes are not a decodable image
/// and `DecodeError::EmptyImage` if it decodes to zero pixels.
pub fn decode_image(bytes: &[u8]) -> Result<Raster, DecodeError> {
    let orientation = extract_orientation(bytes);

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let raster = Raster::from_rgb_image(apply_orientation(img, orientation).into_rgb8());
    if raster.is_empty() {
        return Err(DecodeError::EmptyImage);
    }

    log::debug!(
        "decoded {}x{} image ({:?})",
        raster.width,
        raster.height,
        orientation
    );
    Ok(raster)
}

/// Read a file and decode it with [`decode_image`].
pub fn decode_file(path: &Path) -> Result<Raster, DecodeError> {
    let bytes = std::fs::read(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))?;
    decode_image(&bytes)
}

/// EXIF orientation of the image, or `Orientation::Normal` without EXIF data.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
