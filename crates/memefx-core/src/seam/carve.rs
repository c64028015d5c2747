//! Liquid resize - the seam-carving driver.

use super::{compute_energy, find_vertical_seam, remove_vertical_seam, CarveError};
use crate::config::LiquidConfig;
use crate::decode::resize_to_fit;
use crate::raster::Raster;

/// Number of seams to remove from a side of `length` pixels at `scale`.
///
/// The target side is `round(length * scale)`, never below one pixel, and
/// the count is capped at `limit`. Going over the cap silently removes
/// fewer seams.
pub fn seam_steps(length: u32, scale: f64, limit: u32) -> u32 {
    let target = ((length as f64 * scale).round() as u32).clamp(1, length.max(1));
    length.saturating_sub(target).min(limit)
}

/// Remove `steps` vertical seams, recomputing the energy field every time.
///
/// An inconsistent raster is rejected before any seam is removed.
pub fn carve_width(raster: &mut Raster, steps: u32) -> Result<(), CarveError> {
    if !raster.is_consistent() {
        return Err(CarveError::InconsistentRaster);
    }
    for _ in 0..steps {
        let energy = compute_energy(raster);
        let seam = find_vertical_seam(&energy);
        remove_vertical_seam(raster, &seam)?;
    }
    Ok(())
}

/// Shrink an image by `scale` on both axes with seam carving.
///
/// The image is first bounded to `config.max_size`. Width is carved
/// directly; height is carved on the transposed raster so the same
/// vertical-seam primitive serves both axes. Both step counts are taken
/// from the working (downscaled) dimensions and capped at
/// `config.seam_limit`.
///
/// # Errors
///
/// Returns `CarveError::InvalidScale` unless `0 < scale <= 1`, and
/// `CarveError::InconsistentRaster` if the buffer does not match the
/// dimensions.
pub fn liquid_resize(
    raster: Raster,
    scale: f64,
    config: &LiquidConfig,
) -> Result<Raster, CarveError> {
    if !(scale > 0.0 && scale <= 1.0) {
        return Err(CarveError::InvalidScale(scale));
    }
    if raster.is_empty() {
        return Err(CarveError::EmptyRaster);
    }
    if !raster.is_consistent() {
        return Err(CarveError::InconsistentRaster);
    }

    let mut working = resize_to_fit(raster, config.max_size)?;

    let steps_w = seam_steps(working.width, scale, config.seam_limit);
    log::debug!(
        "liquid resize {}x{}: removing {} vertical seams",
        working.width,
        working.height,
        steps_w
    );
    carve_width(&mut working, steps_w)?;

    let steps_h = seam_steps(working.height, scale, config.seam_limit);
    if steps_h > 0 {
        log::debug!(
            "liquid resize {}x{}: removing {} horizontal seams",
            working.width,
            working.height,
            steps_h
        );
        let mut transposed = working.transpose();
        carve_width(&mut transposed, steps_h)?;
        working = transposed.transpose();
    }

    Ok(working)
}
