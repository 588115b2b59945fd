//! The compiled rule: range, state count, topology, and lookup tables.

use std::fmt;

use smallvec::SmallVec;

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::{MAX_COUNT, MAX_RANGE, MAX_STATES};

/// A run of consecutive set entries, as `(first, last)` inclusive.
pub type CountSpan = (usize, usize);

/// Fixed-size boolean lookup table indexed by neighbour count.
///
/// Reads past the end return `false` and writes past the end are
/// dropped, so hand-written rules with generous count ranges
/// (`S0-1000`) never touch memory outside the table.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CountTable {
    entries: [bool; MAX_COUNT],
}

impl CountTable {
    /// An all-false table.
    pub fn new() -> Self {
        Self {
            entries: [false; MAX_COUNT],
        }
    }

    /// Entry for count `n`; `false` when `n` is outside the table.
    #[inline]
    pub fn get(&self, n: usize) -> bool {
        self.entries.get(n).copied().unwrap_or(false)
    }

    /// Set entry `n`. Returns `false` (and changes nothing) when `n` is
    /// outside the table.
    pub fn set(&mut self, n: usize) -> bool {
        match self.entries.get_mut(n) {
            Some(slot) => {
                *slot = true;
                true
            }
            None => false,
        }
    }

    /// Set every entry in `first..=last`, clipped to the table.
    pub fn set_span(&mut self, first: usize, last: usize) {
        if first >= MAX_COUNT || first > last {
            return;
        }
        let last = last.min(MAX_COUNT - 1);
        self.entries[first..=last].fill(true);
    }

    /// Whether no entry is set.
    pub fn is_empty(&self) -> bool {
        !self.entries.iter().any(|&e| e)
    }

    /// Number of set entries.
    pub fn count(&self) -> usize {
        self.entries.iter().filter(|&&e| e).count()
    }

    /// Indices of set entries, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, &e)| e.then_some(i))
    }

    /// Maximal runs of set entries within `0..=limit`, ascending.
    pub fn spans(&self, limit: usize) -> SmallVec<[CountSpan; 8]> {
        let limit = limit.min(MAX_COUNT - 1);
        let mut spans = SmallVec::new();
        let mut i = 0;
        while i <= limit {
            if !self.entries[i] {
                i += 1;
                continue;
            }
            let first = i;
            while i < limit && self.entries[i + 1] {
                i += 1;
            }
            spans.push((first, i));
            i += 1;
        }
        spans
    }

    /// Whether both tables agree on every entry in `0..=limit`.
    pub fn agrees_with(&self, other: &CountTable, limit: usize) -> bool {
        let end = limit.min(MAX_COUNT - 1);
        self.entries[..=end] == other.entries[..=end]
    }
}

impl Default for CountTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CountTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.spans(MAX_COUNT - 1)).finish()
    }
}

impl FromIterator<usize> for CountTable {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut table = Self::new();
        for n in iter {
            table.set(n);
        }
        table
    }
}

/// A compiled HROT rule.
///
/// Constructed by [`Rule::new`] (then populated through
/// [`survive_mut`](Rule::survive_mut) / [`birth_mut`](Rule::birth_mut)
/// or the `with_*` builders) or by parsing rule text with
/// [`parse`](crate::parse) / [`str::parse`]. The invariants
/// `1 <= range <= MAX_RANGE` and `2 <= states <= MAX_STATES` hold for
/// every `Rule` value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rule {
    range: u32,
    states: u16,
    neighborhood: Neighborhood,
    survive: CountTable,
    birth: CountTable,
}

impl Rule {
    /// Create a rule with empty survive and birth tables.
    ///
    /// # Errors
    ///
    /// - [`RuleError::ZeroRange`] / [`RuleError::RangeTooLarge`] when
    ///   `range` is outside `1..=MAX_RANGE`
    /// - [`RuleError::ZeroStates`] / [`RuleError::TooFewStates`] /
    ///   [`RuleError::TooManyStates`] when `states` is outside
    ///   `2..=MAX_STATES`
    pub fn new(range: u32, states: u32, neighborhood: Neighborhood) -> Result<Self, RuleError> {
        if range == 0 {
            return Err(RuleError::ZeroRange);
        }
        if range > MAX_RANGE {
            return Err(RuleError::RangeTooLarge {
                range,
                max: MAX_RANGE,
            });
        }
        match states {
            0 => return Err(RuleError::ZeroStates),
            1 => return Err(RuleError::TooFewStates { states }),
            s if s > u32::from(MAX_STATES) => {
                return Err(RuleError::TooManyStates {
                    states,
                    max: MAX_STATES,
                })
            }
            _ => {}
        }
        Ok(Self {
            range,
            states: states as u16,
            neighborhood,
            survive: CountTable::new(),
            birth: CountTable::new(),
        })
    }

    /// Conway's Game of Life: `R1,C2,S2,3,B3`.
    pub fn conway() -> Self {
        Self {
            range: 1,
            states: 2,
            neighborhood: Neighborhood::Moore,
            survive: [2, 3].into_iter().collect(),
            birth: [3].into_iter().collect(),
        }
    }

    /// Replace the survive table with the given counts.
    pub fn with_survive(mut self, counts: impl IntoIterator<Item = usize>) -> Self {
        self.survive = counts.into_iter().collect();
        self
    }

    /// Replace the birth table with the given counts.
    pub fn with_birth(mut self, counts: impl IntoIterator<Item = usize>) -> Self {
        self.birth = counts.into_iter().collect();
        self
    }

    /// Neighbourhood radius.
    pub fn range(&self) -> u32 {
        self.range
    }

    /// Number of discrete cell states.
    pub fn states(&self) -> u16 {
        self.states
    }

    /// Neighbour-counting topology.
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Largest neighbour count this rule can observe.
    pub fn max_neighbours(&self) -> usize {
        self.neighborhood.max_count(self.range)
    }

    /// Survive table.
    pub fn survive(&self) -> &CountTable {
        &self.survive
    }

    /// Birth table.
    pub fn birth(&self) -> &CountTable {
        &self.birth
    }

    /// Mutable survive table.
    pub fn survive_mut(&mut self) -> &mut CountTable {
        &mut self.survive
    }

    /// Mutable birth table.
    pub fn birth_mut(&mut self) -> &mut CountTable {
        &mut self.birth
    }

    /// Whether an alive cell with `n` alive neighbours stays alive.
    #[inline]
    pub fn survives(&self, n: usize) -> bool {
        self.survive.get(n)
    }

    /// Whether a dead cell with `n` alive neighbours becomes alive.
    #[inline]
    pub fn births(&self, n: usize) -> bool {
        self.birth.get(n)
    }

    /// Whether `self` and `other` produce identical transitions on every
    /// grid: same range, states and topology, and identical predicate
    /// entries over every reachable neighbour count.
    pub fn behaves_like(&self, other: &Rule) -> bool {
        if self.range != other.range
            || self.states != other.states
            || self.neighborhood != other.neighborhood
        {
            return false;
        }
        let limit = self.max_neighbours();
        self.survive.agrees_with(&other.survive, limit)
            && self.birth.agrees_with(&other.birth, limit)
    }
}
