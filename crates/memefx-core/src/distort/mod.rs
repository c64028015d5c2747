//! Radial distortions: swirl, bulge and pinch.
//!
//! Every kernel here uses inverse mapping. For each destination pixel a
//! source coordinate is computed relative to the image center and the
//! nearest source pixel is copied. Output dimensions always equal input
//! dimensions.
//!
//! Rows are independent, so with the `parallel` feature they are filled
//! on the rayon pool. The result is bit-identical to the sequential path.

mod lens;
mod swirl;

pub use lens::{bulge, lens, lens_factor, pinch};
pub use swirl::swirl;

use crate::raster::Raster;

/// Geometry shared by the radial kernels.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RadialFrame {
    cx: f64,
    cy: f64,
    /// Half of the shorter side
    half_min: f64,
}

impl RadialFrame {
    fn of(raster: &Raster) -> Self {
        RadialFrame {
            cx: raster.width as f64 / 2.0,
            cy: raster.height as f64 / 2.0,
            half_min: raster.width.min(raster.height) as f64 / 2.0,
        }
    }
}

/// Round a source coordinate to the nearest pixel, or `None` when it falls
/// outside the raster.
#[inline]
fn nearest(raster: &Raster, x: f64, y: f64) -> Option<(usize, usize)> {
    let (col, row) = (x.round(), y.round());
    if col < 0.0 || row < 0.0 || col >= raster.width as f64 || row >= raster.height as f64 {
        return None;
    }
    Some((row as usize, col as usize))
}

/// Build a new raster by evaluating `map(row, col)` for every destination pixel.
fn remap<F>(src: &Raster, map: F) -> Raster
where
    F: Fn(usize, usize) -> [u8; 3] + Sync,
{
    let mut out = vec![0u8; src.pixels.len()];
    let stride = src.width as usize * 3;
    if stride == 0 || src.height == 0 {
        return Raster::new(src.width, src.height, out);
    }

    let fill = |(row, line): (usize, &mut [u8])| {
        for (col, px) in line.chunks_exact_mut(3).enumerate() {
            px.copy_from_slice(&map(row, col));
        }
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        out.par_chunks_mut(stride).enumerate().for_each(fill);
    }
    #[cfg(not(feature = "parallel"))]
    out.chunks_mut(stride).enumerate().for_each(fill);

    Raster::new(src.width, src.height, out)
}
