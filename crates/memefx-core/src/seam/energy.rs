//! Gradient-magnitude energy of a raster.
//!
//! The raster is reduced to an unweighted channel average, then convolved
//! with a horizontal and a vertical Sobel kernel. The energy of a pixel is
//! `|Gx| + |Gy|`. Out-of-range taps read the nearest edge pixel, so every
//! border cell is well defined.

use super::Grid;
use crate::raster::Raster;

/// Energy of every pixel, one non-negative scalar per cell.
pub type EnergyField = Grid<f64>;

const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Mean of the three channels for every pixel.
///
/// A buffer that does not match the dimensions yields an all-zero grid;
/// callers reject such rasters before carving.
fn luma(raster: &Raster) -> Grid<f64> {
    let (rows, cols) = (raster.height as usize, raster.width as usize);
    let cells = raster
        .pixels
        .chunks_exact(3)
        .map(|p| (p[0] as f64 + p[1] as f64 + p[2] as f64) / 3.0)
        .collect();
    Grid::from_vec(rows, cols, cells).unwrap_or_else(|| Grid::new(rows, cols))
}

/// Compute the energy field of `raster`.
///
/// Uniform images produce an all-zero field.
pub fn compute_energy(raster: &Raster) -> EnergyField {
    let gray = luma(raster);
    let (rows, cols) = (gray.rows(), gray.cols());
    let mut energy = EnergyField::new(rows, cols);
    if gray.is_empty() {
        return energy;
    }

    let (max_row, max_col) = (rows - 1, cols - 1);
    for row in 0..rows {
        for col in 0..cols {
            let mut gx = 0.0;
            let mut gy = 0.0;
            for (ki, dr) in [-1isize, 0, 1].into_iter().enumerate() {
                let r = clamp_index(row, dr, max_row);
                for (kj, dc) in [-1isize, 0, 1].into_iter().enumerate() {
                    let c = clamp_index(col, dc, max_col);
                    let v = gray[(r, c)];
                    gx += SOBEL_X[ki][kj] * v;
                    gy += SOBEL_Y[ki][kj] * v;
                }
            }
            energy[(row, col)] = gx.abs() + gy.abs();
        }
    }
    energy
}

#[inline]
fn clamp_index(index: usize, delta: isize, max: usize) -> usize {
    index.saturating_add_signed(delta).min(max)
}
