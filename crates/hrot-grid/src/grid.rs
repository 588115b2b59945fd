//! The cell buffer.

use crate::error::GridError;
use crate::ALIVE;

/// A two-dimensional grid of `u8` cell states.
///
/// Cells are stored row-major: cell `(x, y)` lives at index
/// `y * width + x`. Dimensions are fixed at construction; only cell
/// values change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Grid {
    /// Largest permitted dimension. The snapshot header stores `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a zero-filled (all dead) grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0,
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM), or `Err(GridError::CellCountOverflow)`
    /// if the cell count does not fit in memory addressing.
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![0; len],
        })
    }

    /// Wrap an existing cell buffer.
    ///
    /// Fails like [`new`](Self::new), and with
    /// `Err(GridError::CellCountMismatch)` if `cells.len()` is not
    /// `width * height`.
    pub fn from_cells(width: u32, height: u32, cells: Vec<u8>) -> Result<Self, GridError> {
        let expected = Self::checked_len(width, height)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    fn checked_len(width: u32, height: u32) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::CellCountOverflow { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Flat index of `(x, y)`, or `None` when out of bounds.
    pub fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// State of cell `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set cell `(x, y)`. Returns `false` (and changes nothing) when out
    /// of bounds.
    pub fn set(&mut self, x: u32, y: u32, state: u8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = state;
                true
            }
            None => false,
        }
    }

    /// The flat row-major cell buffer.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Mutable access to the flat row-major cell buffer.
    pub fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Row `y` as a slice, or `None` when out of bounds.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }

    /// Set every cell to dead.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Number of cells in exactly the alive state.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }

    /// Number of cells in any non-dead state (alive or decaying).
    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Active cells as a percentage of all cells.
    pub fn active_percent(&self) -> f64 {
        100.0 * self.active_count() as f64 / self.cell_count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_dead() {
        let g = Grid::new(4, 3).unwrap();
        assert_eq!(g.dims(), (4, 3));
        assert_eq!(g.cell_count(), 12);
        assert!(g.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn new_zero_dimension_returns_error() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(GridError::EmptyGrid {
                width: 0,
                height: 5
            })
        ));
        assert!(matches!(Grid::new(5, 0), Err(GridError::EmptyGrid { .. })));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Grid::new(big, 1),
            Err(GridError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Grid::new(1, big),
            Err(GridError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(Grid::from_cells(2, 2, vec![0, 1, 0, 1]).is_ok());
        assert!(matches!(
            Grid::from_cells(2, 2, vec![0; 3]),
            Err(GridError::CellCountMismatch {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn index_is_row_major() {
        let mut g = Grid::new(3, 2).unwrap();
        assert_eq!(g.index(2, 1), Some(5));
        assert_eq!(g.index(3, 0), None);
        assert!(g.set(1, 1, 7));
        assert!(!g.set(0, 2, 7));
        assert_eq!(g.cells()[4], 7);
        assert_eq!(g.get(1, 1), Some(7));
        assert_eq!(g.row(1), Some(&[0, 7, 0][..]));
        assert_eq!(g.row(2), None);
    }

    #[test]
    fn counts_distinguish_alive_from_active() {
        let g = Grid::from_cells(2, 2, vec![0, 1, 2, 1]).unwrap();
        assert_eq!(g.alive_count(), 2);
        assert_eq!(g.active_count(), 3);
        assert!((g.active_percent() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn clear_kills_everything() {
        let mut g = Grid::from_cells(2, 1, vec![1, 3]).unwrap();
        g.clear();
        assert_eq!(g.active_count(), 0);
    }
}
