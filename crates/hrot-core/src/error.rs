//! Error types for rule construction and parsing.

use std::error::Error;
use std::fmt;

/// Errors from building or parsing a [`Rule`](crate::Rule).
///
/// Every variant is fatal to rule construction: no partially-parsed rule
/// is ever returned alongside an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The range is zero, either explicitly (`R0`) or because no `R`
    /// token was present.
    ZeroRange,
    /// The state count is zero, either explicitly (`C0`) or because no
    /// `C` token was present.
    ZeroStates,
    /// The state count is 1, which leaves no room for the alive state.
    TooFewStates {
        /// The rejected state count.
        states: u32,
    },
    /// The range exceeds [`MAX_RANGE`](crate::MAX_RANGE).
    RangeTooLarge {
        /// The rejected range.
        range: u32,
        /// The largest supported range.
        max: u32,
    },
    /// The state count exceeds [`MAX_STATES`](crate::MAX_STATES).
    TooManyStates {
        /// The rejected state count.
        states: u32,
        /// The largest supported state count.
        max: u16,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroRange => write!(f, "rule range must be at least 1 (missing or zero R)"),
            Self::ZeroStates => {
                write!(f, "rule state count must be at least 2 (missing or zero C)")
            }
            Self::TooFewStates { states } => {
                write!(f, "rule state count {states} is below the minimum of 2")
            }
            Self::RangeTooLarge { range, max } => {
                write!(f, "rule range {range} exceeds the supported maximum of {max}")
            }
            Self::TooManyStates { states, max } => {
                write!(f, "rule state count {states} exceeds the supported maximum of {max}")
            }
        }
    }
}

impl Error for RuleError {}
