use crate::raster::Raster;
use rand::Rng;

/// Add an independent uniform integer from `min..=max` to every channel.
///
/// Results saturate at `0` and `255` for any `i16` range. An inverted
/// range is treated as the single value `min`.
pub fn add_noise<R: Rng>(raster: &mut Raster, min: i16, max: i16, rng: &mut R) {
    let max = max.max(min);
    for channel in raster.pixels.iter_mut() {
        let offset = rng.random_range(min..=max);
        *channel = (*channel as i32 + offset as i32).clamp(0, 255) as u8;
    }
}
