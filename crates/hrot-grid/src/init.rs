//! Grid initialisation strategies.

use rand::Rng;

use crate::error::GridError;
use crate::grid::Grid;
use crate::{ALIVE, DEAD};

/// Half-width of the square window scanned by [`Grid::fill_center`].
const CENTER_WINDOW: i64 = 2;

/// Manhattan-distance bound applied inside the centre window.
const CENTER_MANHATTAN: i64 = 3;

/// Outcome of an initialisation pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitStats {
    /// Cells set alive.
    pub alive: usize,
    /// Total cells in the grid.
    pub total: usize,
}

impl InitStats {
    /// Alive cells as a percentage of all cells.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.alive as f64 / self.total as f64
    }
}

impl Grid {
    /// Set each cell alive with probability `density`, dead otherwise.
    ///
    /// Every cell is overwritten. Draws exactly one `f32` per cell from
    /// `rng` in row-major order, so a seeded generator yields the same
    /// grid every time.
    ///
    /// # Errors
    ///
    /// Returns `Err(GridError::InvalidDensity)` if `density` is NaN or
    /// outside `[0, 1]`; the grid is left untouched.
    pub fn fill_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        density: f32,
    ) -> Result<InitStats, GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity { value: density });
        }
        let mut alive = 0;
        for cell in self.cells_mut() {
            if rng.random::<f32>() < density {
                *cell = ALIVE;
                alive += 1;
            } else {
                *cell = DEAD;
            }
        }
        let stats = InitStats {
            alive,
            total: self.cell_count(),
        };
        tracing::info!(
            alive = stats.alive,
            percent = format_args!("{:.2}", stats.percent()),
            density,
            "initialized grid randomly"
        );
        Ok(stats)
    }

    /// Clear the grid, then seed a small fixed cluster at the centre.
    ///
    /// The cluster is every offset in the 5x5 window around
    /// `(width / 2, height / 2)` whose Manhattan distance is at most 3
    /// (21 cells), clipped to the grid.
    pub fn fill_center(&mut self) -> InitStats {
        self.clear();
        let cx = i64::from(self.width() / 2);
        let cy = i64::from(self.height() / 2);
        let mut alive = 0;
        for dy in -CENTER_WINDOW..=CENTER_WINDOW {
            for dx in -CENTER_WINDOW..=CENTER_WINDOW {
                if dx.abs() + dy.abs() > CENTER_MANHATTAN {
                    continue;
                }
                let (x, y) = (cx + dx, cy + dy);
                let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
                    continue;
                };
                if self.set(x, y, ALIVE) {
                    alive += 1;
                }
            }
        }
        let stats = InitStats {
            alive,
            total: self.cell_count(),
        };
        tracing::info!(alive = stats.alive, "initialized grid with center cluster");
        stats
    }
}
