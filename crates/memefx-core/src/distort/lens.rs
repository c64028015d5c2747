use super::{nearest, remap, RadialFrame};
use crate::config::LensConfig;
use crate::raster::Raster;

/// Radial scale factor `1 + k * r^2` at normalized distance `r`.
#[inline]
pub fn lens_factor(r: f64, k: f64) -> f64 {
    1.0 + k * r * r
}

/// Barrel or pincushion distortion with curvature `k`.
///
/// The distance from the center is normalized by half the shorter side,
/// and the offset to each destination pixel is scaled by
/// [`lens_factor`]. Negative `k` magnifies the center, positive `k`
/// shrinks it. The formula covers the whole frame; sources outside it
/// are black.
pub fn lens(raster: &Raster, k: f64) -> Raster {
    let frame = RadialFrame::of(raster);

    remap(raster, |row, col| {
        let dx = col as f64 - frame.cx;
        let dy = row as f64 - frame.cy;
        let r = dx.hypot(dy) / frame.half_min;
        let factor = lens_factor(r, k);

        nearest(raster, frame.cx + dx * factor, frame.cy + dy * factor)
            .map_or([0, 0, 0], |(sr, sc)| raster.pixel(sr, sc))
    })
}

/// Fisheye expansion of the center, using `config.bulge_k`.
pub fn bulge(raster: &Raster, config: &LensConfig) -> Raster {
    lens(raster, config.bulge_k)
}

/// Tunnel contraction of the center, using `config.pinch_k`.
pub fn pinch(raster: &Raster, config: &LensConfig) -> Raster {
    lens(raster, config.pinch_k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Raster {
        let mut img = Raster::filled(width, height, [0, 0, 0]);
        for row in 0..height as usize {
            for col in 0..width as usize {
                img.set_pixel(row, col, [(col * 20 + 1) as u8, (row * 20 + 1) as u8, 50]);
            }
        }
        img
    }

    #[test]
    fn test_factor_at_unit_radius() {
        assert_eq!(lens_factor(1.0, -0.5), 0.5);
        assert_eq!(lens_factor(1.0, 0.5), 1.5);
        assert_eq!(lens_factor(0.0, 0.5), 1.0);
        assert_eq!(lens_factor(2.0, 0.25), 2.0);
    }

    #[test]
    fn test_zero_curvature_is_identity() {
        let img = gradient(10, 7);
        assert_eq!(lens(&img, 0.0), img);
    }

    #[test]
    fn test_center_pixel_is_fixed() {
        let img = gradient(10, 10);
        assert_eq!(
            bulge(&img, &LensConfig::default()).pixel(5, 5),
            img.pixel(5, 5)
        );
        assert_eq!(
            pinch(&img, &LensConfig::default()).pixel(5, 5),
            img.pixel(5, 5)
        );
    }

    #[test]
    fn test_bulge_corner_samples_center() {
        // Corner (0, 0): r^2 = 2, factor = 1 - 0.5 * 2 = 0, so the source is the center.
        let img = gradient(10, 10);
        let out = bulge(&img, &LensConfig::default());

        assert_eq!(out.pixel(0, 0), img.pixel(5, 5));
    }

    #[test]
    fn test_pinch_corner_is_black() {
        // Corner (0, 0): factor = 1 + 0.5 * 2 = 2, source lands at (-5, -5).
        let img = gradient(10, 10);
        let out = pinch(&img, &LensConfig::default());

        assert_eq!(out.pixel(0, 0), [0, 0, 0]);
        assert_eq!(out.pixel(9, 9), [0, 0, 0]);
    }

    #[test]
    fn test_dimensions_preserved() {
        let img = gradient(13, 6);
        let out = bulge(&img, &LensConfig::default());
        assert_eq!((out.width, out.height), (13, 6));
        assert!(out.is_consistent());
    }
}
