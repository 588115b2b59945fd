//! Error types for simulation setup and the run loop.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use hrot_grid::GridError;

use crate::config::ConfigError;
use crate::step::StepError;

/// Errors from constructing or advancing a [`Simulation`](crate::Simulation).
#[derive(Debug)]
pub enum SimError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// Grid allocation or random initialisation failed.
    Grid(GridError),
    /// The stepper could not be built or a step failed.
    Step(StepError),
    /// The initial-state snapshot could not be loaded.
    InitFile {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying failure.
        source: GridError,
    },
    /// The initial-state snapshot has different dimensions than
    /// configured.
    InitDimensionMismatch {
        /// Configured `(width, height)`.
        expected: (u32, u32),
        /// `(width, height)` found in the file.
        found: (u32, u32),
    },
    /// A generation snapshot could not be written. The run aborts.
    Snapshot {
        /// Generation whose snapshot failed.
        generation: u64,
        /// Underlying failure.
        source: GridError,
    },
    /// The run-info record could not be written.
    RunInfo(io::Error),
    /// The generation budget is exhausted.
    Finished,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Grid(e) => write!(f, "grid setup failed: {e}"),
            Self::Step(e) => write!(f, "step failed: {e}"),
            Self::InitFile { path, source } => {
                write!(f, "cannot load initial state {}: {source}", path.display())
            }
            Self::InitDimensionMismatch { expected, found } => write!(
                f,
                "initial state is {}x{}, configured grid is {}x{}",
                found.0, found.1, expected.0, expected.1
            ),
            Self::Snapshot { generation, source } => {
                write!(f, "failed to save snapshot for generation {generation}: {source}")
            }
            Self::RunInfo(e) => write!(f, "failed to write run info: {e}"),
            Self::Finished => write!(f, "generation budget exhausted"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Step(e) => Some(e),
            Self::InitFile { source, .. } | Self::Snapshot { source, .. } => Some(source),
            Self::RunInfo(e) => Some(e),
            Self::InitDimensionMismatch { .. } | Self::Finished => None,
        }
    }
}

impl From<ConfigError> for SimError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for SimError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<StepError> for SimError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}
