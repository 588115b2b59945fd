//! Core rule model for HROT cellular automata.
//!
//! An HROT ("Higher-Range Outer-Totalistic") rule is described by a
//! neighbourhood radius, a neighbourhood topology, a number of discrete
//! cell states, and two neighbour-count predicates (survive and birth).
//! This crate owns the in-memory [`Rule`] representation and the textual
//! rule notation:
//!
//! ```
//! use hrot_core::{Neighborhood, Rule};
//!
//! let rule: Rule = "R2,C3,S1-3,B2,NN".parse().unwrap();
//! assert_eq!(rule.range(), 2);
//! assert_eq!(rule.states(), 3);
//! assert_eq!(rule.neighborhood(), Neighborhood::VonNeumann);
//! assert!(rule.survives(2));
//! assert!(!rule.births(3));
//! assert_eq!(rule.to_string(), "R2,C3,S1-3,B2,NN");
//! ```
//!
//! Everything here is pure: no I/O, no randomness.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod neighborhood;
pub mod rule;
pub mod rulestring;

pub use error::RuleError;
pub use neighborhood::Neighborhood;
pub use rule::{CountTable, Rule};
pub use rulestring::{parse, serialize};

/// Size of each predicate table.
///
/// Exceeds the largest neighbour count reachable at [`MAX_RANGE`]
/// (Moore, radius 10: `21 * 21 - 1 = 440`).
pub const MAX_COUNT: usize = 500;

/// Largest neighbourhood radius accepted by [`Rule::new`].
pub const MAX_RANGE: u32 = 10;

/// Largest state count accepted by [`Rule::new`]. Cell states are stored
/// as single bytes, so states `0..=255` are representable.
pub const MAX_STATES: u16 = 256;
