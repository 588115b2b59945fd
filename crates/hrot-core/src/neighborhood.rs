//! Neighbour-counting topologies.

/// Which offsets around a cell count as its neighbours.
///
/// Both kinds are bounded by the rule's range `r`: Moore takes the full
/// `(2r+1) x (2r+1)` square, von Neumann keeps only the diamond of offsets
/// whose Manhattan distance is at most `r`. The centre cell never counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    /// Square window (Chebyshev ball).
    #[default]
    Moore,
    /// Diamond window (Manhattan ball).
    VonNeumann,
}

impl Neighborhood {
    /// Numeric code used by the `N<int>` rule token.
    pub fn code(self) -> u32 {
        match self {
            Self::Moore => 0,
            Self::VonNeumann => 1,
        }
    }

    /// Inverse of [`code`](Self::code). Returns `None` for codes this
    /// engine does not implement.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Moore),
            1 => Some(Self::VonNeumann),
            _ => None,
        }
    }

    /// Human-readable name, as written to run-info records.
    pub fn name(self) -> &'static str {
        match self {
            Self::Moore => "Moore",
            Self::VonNeumann => "Von Neumann",
        }
    }

    /// Largest possible neighbour count for the given range.
    ///
    /// Moore: `(2r+1)^2 - 1`. Von Neumann: `2r(r+1)`.
    pub fn max_count(self, range: u32) -> usize {
        let r = range as usize;
        match self {
            Self::Moore => (2 * r + 1) * (2 * r + 1) - 1,
            Self::VonNeumann => 2 * r * (r + 1),
        }
    }

    /// Whether offset `(dx, dy)` is a neighbour at the given range.
    pub fn contains(self, dx: i32, dy: i32, range: u32) -> bool {
        let r = range as i32;
        if (dx == 0 && dy == 0) || dx.abs() > r || dy.abs() > r {
            return false;
        }
        match self {
            Self::Moore => true,
            Self::VonNeumann => dx.abs() + dy.abs() <= r,
        }
    }

    /// All neighbour offsets at the given range, in row-major order
    /// (`dy` outer, `dx` inner).
    pub fn offsets(self, range: u32) -> Vec<(i32, i32)> {
        let r = range as i32;
        let mut out = Vec::with_capacity(self.max_count(range));
        for dy in -r..=r {
            for dx in -r..=r {
                if self.contains(dx, dy, range) {
                    out.push((dx, dy));
                }
            }
        }
        out
    }
}
