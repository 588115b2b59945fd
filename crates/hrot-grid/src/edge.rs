//! Edge (boundary) topology for the grid.

/// How neighbour lookups behave past the grid's edges.
///
/// # Examples
///
/// ```
/// use hrot_grid::EdgeBehavior;
///
/// assert_eq!(EdgeBehavior::Wrap.resolve_axis(-1, 5), Some(4));
/// assert_eq!(EdgeBehavior::Absorb.resolve_axis(-1, 5), None);
/// assert_eq!(EdgeBehavior::from_wrap(true), EdgeBehavior::Wrap);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbours wrap to the opposite side (torus).
    #[default]
    Wrap,
    /// Out-of-bounds neighbours are omitted, as if the border were
    /// permanently dead.
    Absorb,
}

impl EdgeBehavior {
    /// `Wrap` when `wrap` is true, `Absorb` otherwise.
    pub fn from_wrap(wrap: bool) -> Self {
        if wrap {
            Self::Wrap
        } else {
            Self::Absorb
        }
    }

    /// Whether this is the toroidal topology.
    pub fn wraps(self) -> bool {
        self == Self::Wrap
    }

    /// Resolve a single axis value against an axis of length `len`.
    /// Returns `None` for an out-of-bounds value under `Absorb`.
    #[inline]
    pub fn resolve_axis(self, val: i32, len: i32) -> Option<i32> {
        if val >= 0 && val < len {
            return Some(val);
        }
        match self {
            Self::Absorb => None,
            Self::Wrap => Some(val.rem_euclid(len)),
        }
    }
}
