use super::{CarveError, Seam};
use crate::raster::Raster;

/// Delete one vertical seam from `raster`, shrinking its width by one.
///
/// Rows are compacted inside the existing buffer: for each row the pixel
/// at `seam[row]` is dropped and everything to its right moves one step
/// left. Pixels off the seam are copied byte for byte.
///
/// # Errors
///
/// Rejects seams whose length differs from the raster height, columns
/// outside `[0, width)`, and rasters with no columns left to remove. The
/// raster is left untouched on error.
pub fn remove_vertical_seam(raster: &mut Raster, seam: &Seam) -> Result<(), CarveError> {
    let (width, height) = (raster.width as usize, raster.height as usize);

    if width == 0 || height == 0 {
        return Err(CarveError::EmptyRaster);
    }
    if seam.len() != height {
        return Err(CarveError::SeamLengthMismatch {
            expected: height,
            actual: seam.len(),
        });
    }
    if let Some(row) = seam.columns().iter().position(|&col| col >= width) {
        return Err(CarveError::SeamOutOfBounds {
            row,
            col: seam.columns()[row],
            width,
        });
    }
    if !raster.is_consistent() {
        return Err(CarveError::InconsistentRaster);
    }

    let old_stride = width * 3;
    let new_stride = old_stride - 3;
    for (row, &col) in seam.columns().iter().enumerate() {
        let src = row * old_stride;
        let dst = row * new_stride;
        let cut = col * 3;

        // Left part of the row, then the right part skipping the seam pixel.
        // Destinations never pass their sources, so in-place copies are safe.
        raster.pixels.copy_within(src..src + cut, dst);
        raster
            .pixels
            .copy_within(src + cut + 3..src + old_stride, dst + cut);
    }

    raster.pixels.truncate(height * new_stride);
    raster.width -= 1;
    Ok(())
}
