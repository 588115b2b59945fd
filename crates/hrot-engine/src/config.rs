//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] is the input for constructing a [`Simulation`](crate::Simulation).
//! [`validate()`](SimConfig::validate) checks structural invariants before
//! any grid is allocated.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use hrot_grid::EdgeBehavior;

use crate::step::Parallelism;

/// Default grid width and height.
pub const DEFAULT_SIZE: u32 = 100;
/// Default generation budget.
pub const DEFAULT_GENERATIONS: u64 = 500;
/// Default random-fill density.
pub const DEFAULT_DENSITY: f32 = 0.35;
/// Default output folder.
pub const DEFAULT_OUTPUT_FOLDER: &str = "output";

// ── InitMode ───────────────────────────────────────────────────────

/// How the first generation is populated.
#[derive(Clone, Debug, PartialEq)]
pub enum InitMode {
    /// Each cell alive with probability `density`.
    Random {
        /// Probability in `[0, 1]`.
        density: f32,
    },
    /// A small fixed cluster at the centre.
    Center,
    /// A previously saved snapshot. Its dimensions must match the
    /// configured grid size.
    File(PathBuf),
}

impl InitMode {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random { .. } => "random",
            Self::Center => "center",
            Self::File(_) => "file",
        }
    }
}

impl Default for InitMode {
    fn default() -> Self {
        Self::Random {
            density: DEFAULT_DENSITY,
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero.
    EmptyGrid {
        /// Configured width.
        width: u32,
        /// Configured height.
        height: u32,
    },
    /// Random-fill density is NaN or outside `[0, 1]`.
    InvalidDensity {
        /// The invalid value.
        value: f32,
    },
    /// A dedicated pool of zero threads was requested.
    ZeroThreads,
    /// Output is enabled but the output folder is empty.
    MissingOutputFolder,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid size {width}x{height} has no cells")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be within [0, 1], got {value}")
            }
            Self::ZeroThreads => write!(f, "thread count must be at least 1"),
            Self::MissingOutputFolder => write!(f, "output folder must not be empty"),
        }
    }
}

impl Error for ConfigError {}

// ── SimConfig ──────────────────────────────────────────────────────

/// Everything a [`Simulation`](crate::Simulation) needs besides the rule.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
    /// Generation budget. `0` runs until the process is stopped.
    pub max_generations: u64,
    /// Folder receiving snapshots and the run-info record.
    pub output_folder: PathBuf,
    /// Toroidal wrap or fixed dead border.
    pub edge: EdgeBehavior,
    /// First-generation strategy.
    pub init: InitMode,
    /// Seed for random initialisation. `None` draws one from OS entropy
    /// (and logs it).
    pub seed: Option<u64>,
    /// Row distribution across threads.
    pub parallelism: Parallelism,
    /// Write per-generation snapshots and append the activity score to
    /// the run-info record. Disable for in-memory runs.
    pub write_output: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            max_generations: DEFAULT_GENERATIONS,
            output_folder: PathBuf::from(DEFAULT_OUTPUT_FOLDER),
            edge: EdgeBehavior::Wrap,
            init: InitMode::default(),
            seed: None,
            parallelism: Parallelism::default(),
            write_output: true,
        }
    }
}

impl SimConfig {
    /// The Game of Life smoke-test setup: 100x100 torus, 35% random
    /// fill, 200 generations.
    pub fn life_test() -> Self {
        Self {
            max_generations: 200,
            ..Self::default()
        }
    }

    /// Number of cells per grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if let InitMode::Random { density } = self.init {
            if !(0.0..=1.0).contains(&density) {
                return Err(ConfigError::InvalidDensity { value: density });
            }
        }
        if self.parallelism == Parallelism::Threads(0) {
            return Err(ConfigError::ZeroThreads);
        }
        if self.write_output && self.output_folder.as_os_str().is_empty() {
            return Err(ConfigError::MissingOutputFolder);
        }
        Ok(())
    }
}
