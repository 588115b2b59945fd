//! Compiled neighbourhood kernels and neighbour counting.

use hrot_core::{Neighborhood, Rule};
use hrot_grid::{EdgeBehavior, ALIVE};

/// The neighbour offsets of a `(range, neighbourhood)` pair, compiled
/// once and reused for every cell of every generation.
///
/// Offsets are `(dx, dy)` in row-major order and never include `(0, 0)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kernel {
    range: u32,
    neighborhood: Neighborhood,
    offsets: Vec<(i32, i32)>,
}

impl Kernel {
    /// Compile the kernel for `range` and `neighborhood`.
    pub fn new(range: u32, neighborhood: Neighborhood) -> Self {
        Self {
            range,
            neighborhood,
            offsets: neighborhood.offsets(range),
        }
    }

    /// Compile the kernel a rule counts with.
    pub fn for_rule(rule: &Rule) -> Self {
        Self::new(rule.range(), rule.neighborhood())
    }

    /// Radius of the kernel.
    pub fn range(&self) -> u32 {
        self.range
    }

    /// Topology of the kernel.
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// The `(dx, dy)` offsets.
    pub fn offsets(&self) -> &[(i32, i32)] {
        &self.offsets
    }

    /// Number of offsets; the largest count this kernel can produce.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Always `false`: a kernel of range >= 1 has at least four offsets.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Offsets flattened against a row length, for cells whose whole
    /// window lies inside the grid.
    pub fn flat_deltas(&self, width: usize) -> Vec<isize> {
        self.offsets
            .iter()
            .map(|&(dx, dy)| dy as isize * width as isize + dx as isize)
            .collect()
    }

    /// Count alive neighbours of `(x, y)` in a row-major buffer of
    /// `width x height` cells, resolving out-of-bounds offsets with
    /// `edge`.
    pub fn count(
        &self,
        cells: &[u8],
        width: usize,
        height: usize,
        x: usize,
        y: usize,
        edge: EdgeBehavior,
    ) -> usize {
        let (w, h) = (width as i32, height as i32);
        let (x, y) = (x as i32, y as i32);
        let mut count = 0;
        for &(dx, dy) in &self.offsets {
            let Some(ny) = edge.resolve_axis(y + dy, h) else {
                continue;
            };
            let Some(nx) = edge.resolve_axis(x + dx, w) else {
                continue;
            };
            if cells[ny as usize * width + nx as usize] == ALIVE {
                count += 1;
            }
        }
        count
    }

    /// Count alive neighbours of the cell at flat index `idx`, whose
    /// whole window is known to be in bounds.
    #[inline]
    pub(crate) fn count_interior(cells: &[u8], idx: usize, deltas: &[isize]) -> usize {
        deltas
            .iter()
            .filter(|&&d| cells[idx.wrapping_add_signed(d)] == ALIVE)
            .count()
    }
}
