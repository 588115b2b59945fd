//! Grid storage for HROT automata.
//!
//! A [`Grid`] is a flat row-major buffer of `u8` cell states with fixed
//! dimensions. This crate also owns the pieces of grid handling that sit
//! at the boundary of the simulation:
//!
//! - [`EdgeBehavior`]: toroidal wrap or fixed (dead) border
//! - initialisation strategies ([`Grid::fill_random`], [`Grid::fill_center`])
//! - the raw binary snapshot format ([`Grid::save`], [`Grid::load`])
//!
//! # Snapshot format
//!
//! ```text
//! [i32 width] [i32 height] [width * height bytes of cell state]
//! ```
//!
//! Integers are in native byte order. No magic, no version, no
//! compression: the files are consumed directly by external tooling.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid;
pub mod init;
pub mod snapshot;

pub use edge::EdgeBehavior;
pub use error::GridError;
pub use grid::Grid;
pub use init::InitStats;
pub use snapshot::{read_snapshot, snapshot_path};

/// Cell state: dead.
pub const DEAD: u8 = 0;

/// Cell state: alive. Only cells in exactly this state count as
/// neighbours.
pub const ALIVE: u8 = 1;
