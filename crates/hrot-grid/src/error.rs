//! Error types for grid construction, initialisation, and snapshot I/O.

use std::fmt;
use std::io;

/// Errors arising from grid construction, initialisation, or snapshot
/// reading and writing.
#[derive(Debug)]
pub enum GridError {
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A dimension does not fit the snapshot header's `i32`.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest permitted value.
        max: u32,
    },
    /// `width * height` does not fit in `usize`.
    CellCountOverflow {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// A cell buffer's length does not match the grid dimensions.
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
    /// Random-fill density is NaN or outside `[0, 1]`.
    InvalidDensity {
        /// The rejected density.
        value: f32,
    },
    /// Snapshot data could not be decoded (truncated or corrupt).
    MalformedSnapshot {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// An I/O error occurred while reading or writing a snapshot.
    Io(io::Error),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell (got {width}x{height})")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow { width, height } => {
                write!(f, "grid cell count {width}x{height} overflows usize")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "cell buffer has {found} cells, expected {expected}")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be within [0, 1], got {value}")
            }
            Self::MalformedSnapshot { detail } => write!(f, "malformed snapshot: {detail}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GridError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
