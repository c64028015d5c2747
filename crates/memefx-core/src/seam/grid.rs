use std::ops::{Index, IndexMut};

/// A fixed-size two-dimensional arena addressed by `(row, col)`.
///
/// Holds the energy field, the accumulated-cost table, and the
/// back-pointer table for the seam search. One flat allocation per grid,
/// so the hot loops never allocate.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T: Default + Copy> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T: Default + Copy> Grid<T> {
    /// Allocate a grid with every cell set to `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![T::default(); rows * cols],
        }
    }

    /// Build a grid from row-major cells.
    ///
    /// Returns `None` when `cells.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, cells: Vec<T>) -> Option<Self> {
        (cells.len() == rows * cols).then_some(Grid { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Borrow one row of cells.
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// All cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    // Keep the index math in exactly one place.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }
}

impl<T: Default + Copy> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[self.offset(row, col)]
    }
}

impl<T: Default + Copy> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let offset = self.offset(row, col);
        &mut self.cells[offset]
    }
}
