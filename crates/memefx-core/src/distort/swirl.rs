use super::{nearest, remap, RadialFrame};
use crate::config::SwirlConfig;
use crate::raster::Raster;

/// Twist the image around its center.
///
/// Inside `radius = radius_fraction * min(W, H) / 2` the source angle is
/// `theta + strength * (1 - d / radius)`, so rotation is strongest at the
/// center and fades to zero at the rim. Pixels at or beyond the radius are
/// copied unchanged. A source that rounds outside the frame falls back to
/// the destination's own pixel.
pub fn swirl(raster: &Raster, config: &SwirlConfig) -> Raster {
    let frame = RadialFrame::of(raster);
    let radius = config.radius_fraction * frame.half_min;
    let strength = config.strength;

    remap(raster, |row, col| {
        let dx = col as f64 - frame.cx;
        let dy = row as f64 - frame.cy;
        let d = dx.hypot(dy);
        if d >= radius {
            return raster.pixel(row, col);
        }

        let angle = dy.atan2(dx) + strength * (1.0 - d / radius);
        let sx = frame.cx + d * angle.cos();
        let sy = frame.cy + d * angle.sin();
        match nearest(raster, sx, sy) {
            Some((r, c)) => raster.pixel(r, c),
            None => raster.pixel(row, col),
        }
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: dimensions are preserved and a flat image stays flat.
        #[test]
        fn prop_swirl_flat_image_stays_flat(
            width in 1u32..=24,
            height in 1u32..=24,
            color in any::<[u8; 3]>(),
            strength in -10.0f64..10.0,
        ) {
            let img = Raster::filled(width, height, color);
            let config = SwirlConfig { strength, ..SwirlConfig::default() };
            let out = swirl(&img, &config);

            prop_assert_eq!(out, img);
        }
    }
}
