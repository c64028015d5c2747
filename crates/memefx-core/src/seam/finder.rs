//! Minimum-cost vertical seam search.
//!
//! Dynamic programming, top down. Row 0 of the cost table is the energy
//! itself; every later cell adds its energy to the cheapest of the (up to)
//! three neighbours directly above. Each cell remembers which neighbour
//! won, and the seam is read back from the cheapest cell of the last row.
//!
//! Ties always go to the smallest column index. Output is deterministic.

use super::{EnergyField, Grid, Seam};

/// Find the vertical seam with the lowest accumulated energy.
///
/// An empty field yields an empty seam.
pub fn find_vertical_seam(energy: &EnergyField) -> Seam {
    let (rows, cols) = (energy.rows(), energy.cols());
    if rows == 0 || cols == 0 {
        return Seam::default();
    }

    let mut cost: Grid<f64> = Grid::new(rows, cols);
    let mut parent: Grid<usize> = Grid::new(rows, cols);

    for col in 0..cols {
        cost[(0, col)] = energy[(0, col)];
    }

    let max_col = cols - 1;
    for row in 1..rows {
        for col in 0..cols {
            let first = col.saturating_sub(1);
            let last = (col + 1).min(max_col);

            // Strict `<` keeps the leftmost candidate on ties.
            let mut best = first;
            for candidate in first + 1..=last {
                if cost[(row - 1, candidate)] < cost[(row - 1, best)] {
                    best = candidate;
                }
            }

            cost[(row, col)] = energy[(row, col)] + cost[(row - 1, best)];
            parent[(row, col)] = best;
        }
    }

    let mut col = leftmost_min(cost.row(rows - 1));
    let mut columns = vec![0usize; rows];
    for row in (0..rows).rev() {
        columns[row] = col;
        col = parent[(row, col)];
    }

    Seam::new(columns)
}

fn leftmost_min(values: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &value) in values.iter().enumerate().skip(1) {
        if value < values[best] {
            best = idx;
        }
    }
    best
}
