//! Per-generation and per-run metrics.

use std::time::Duration;

/// What one generation of the run loop did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Index of the generation that was saved and stepped from.
    pub generation: u64,
    /// Cells that changed state during the step.
    pub changed: u64,
    /// Active (non-dead) cells in the generation before stepping.
    pub active: usize,
}

/// Aggregate of a completed run.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    /// Generations stepped.
    pub generations: u64,
    /// Sum of changed cells over all generations.
    pub changed_cells: u64,
    /// Cells per grid.
    pub cell_count: usize,
    /// Wall-clock time of the run loop.
    pub elapsed: Duration,
    /// Active cells after initialisation.
    pub initial_active: usize,
    /// Active cells in the final grid.
    pub final_active: usize,
}

impl RunSummary {
    /// Percentage of cell-generations that changed state:
    /// `changed_cells / (generations * cell_count) * 100`.
    ///
    /// Zero when no generation ran.
    pub fn activity_score(&self) -> f64 {
        if self.generations == 0 || self.cell_count == 0 {
            return 0.0;
        }
        self.changed_cells as f64 / (self.generations as f64 * self.cell_count as f64) * 100.0
    }

    /// Mean wall-clock milliseconds per generation.
    pub fn ms_per_generation(&self) -> f64 {
        if self.generations == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1000.0 / self.generations as f64
    }
}
