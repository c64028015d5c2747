//! Content-aware resizing by seam carving.
//!
//! The pieces, leaves first:
//! - [`Grid`] - flat 2-D arena used for every per-pixel table
//! - [`compute_energy`] - gradient-magnitude energy field
//! - [`find_vertical_seam`] - dynamic-programming minimum seam
//! - [`remove_vertical_seam`] - in-place deletion of one seam
//! - [`liquid_resize`] - repeated find/remove, width first, then height
//!
//! Only vertical seams exist here. Height is carved by transposing the
//! raster, carving vertical seams, and transposing back.

mod carve;
mod energy;
mod finder;
mod grid;
mod remove;

pub use carve::{carve_width, liquid_resize, seam_steps};
pub use energy::{compute_energy, EnergyField};
pub use finder::find_vertical_seam;
pub use grid::Grid;
pub use remove::remove_vertical_seam;

use crate::decode::ResizeError;
use thiserror::Error;

/// Errors raised by the seam-carving pipeline.
///
/// Everything except `InvalidScale` indicates a broken internal contract.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CarveError {
    /// The scale factor is not in `(0, 1]`.
    #[error("Scale must be in (0, 1], got {0}")]
    InvalidScale(f64),

    /// The raster has no pixels to carve.
    #[error("Cannot carve an empty raster")]
    EmptyRaster,

    /// The raster's pixel buffer does not match its dimensions.
    #[error("Raster pixel buffer does not match its dimensions")]
    InconsistentRaster,

    /// Bounding the input to the working resolution failed.
    #[error("Working-size downscale failed: {0}")]
    Resize(#[from] ResizeError),

    /// The seam does not have one entry per row.
    #[error("Seam has {actual} entries but the raster has {expected} rows")]
    SeamLengthMismatch { expected: usize, actual: usize },

    /// A seam entry points outside the raster.
    #[error("Seam column {col} at row {row} is outside width {width}")]
    SeamOutOfBounds { row: usize, col: usize, width: usize },
}

/// A top-to-bottom path holding one column index per row.
///
/// Seams produced by [`find_vertical_seam`] are always connected:
/// consecutive entries differ by at most one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seam(Vec<usize>);

impl Seam {
    pub fn new(columns: Vec<usize>) -> Self {
        Seam(columns)
    }

    pub fn columns(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check the 8-connected adjacency rule between consecutive rows.
    pub fn is_connected(&self) -> bool {
        self.0.windows(2).all(|pair| pair[0].abs_diff(pair[1]) <= 1)
    }
}
