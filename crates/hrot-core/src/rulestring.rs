//! HROT rule notation: `R<int>,C<int>,S<list>,B<list>[,N<code>]`.
//!
//! A list is a comma-separated sequence of counts (`3`) and inclusive
//! ranges (`5-8`). Because lists share the comma separator with the
//! top-level tokens, a token that starts with a digit continues the most
//! recent `S` or `B` list, so `S2,3,B3` sets survive `{2, 3}`.
//!
//! Parsing is lenient in the same places the notation is usually written
//! loosely by hand: tokens with unrecognised leading characters are
//! skipped, malformed list items are skipped, and counts beyond the
//! predicate table are dropped. Only a missing or zero `R`/`C` (or a
//! value outside the supported bounds) is an error.

use std::fmt;
use std::str::FromStr;

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::rule::{CountTable, Rule};

#[derive(Clone, Copy)]
enum ListTarget {
    Survive,
    Birth,
}

/// Parse rule text into a [`Rule`].
///
/// # Errors
///
/// Returns [`RuleError::ZeroRange`] / [`RuleError::ZeroStates`] when `R`
/// or `C` is missing or zero after all tokens are read, the bound errors
/// from [`Rule::new`]. An `N` token never fails: `N1` and `NN` select von
/// Neumann, anything else selects Moore.
pub fn parse(text: &str) -> Result<Rule, RuleError> {
    let mut range = 0u32;
    let mut states = 0u32;
    let mut neighborhood = Neighborhood::Moore;
    let mut survive = CountTable::new();
    let mut birth = CountTable::new();
    let mut list: Option<ListTarget> = None;

    for token in text.split(',') {
        let token = token.trim();
        let Some(lead) = token.chars().next() else {
            continue;
        };
        let rest = &token[lead.len_utf8()..];
        match lead {
            'R' => {
                range = leading_u32(rest).unwrap_or(0);
                list = None;
            }
            'C' => {
                states = leading_u32(rest).unwrap_or(0);
                list = None;
            }
            'S' => {
                push_item(&mut survive, rest);
                list = Some(ListTarget::Survive);
            }
            'B' => {
                push_item(&mut birth, rest);
                list = Some(ListTarget::Birth);
            }
            'N' => {
                neighborhood = parse_neighborhood(rest);
                list = None;
            }
            c if c.is_ascii_digit() => match list {
                Some(ListTarget::Survive) => push_item(&mut survive, token),
                Some(ListTarget::Birth) => push_item(&mut birth, token),
                None => {}
            },
            _ => list = None,
        }
    }

    if range == 0 {
        return Err(RuleError::ZeroRange);
    }
    if states == 0 {
        return Err(RuleError::ZeroStates);
    }
    let mut rule = Rule::new(range, states, neighborhood)?;
    *rule.survive_mut() = survive;
    *rule.birth_mut() = birth;
    Ok(rule)
}

/// Serialize a rule into canonical rule text.
///
/// Runs of consecutive counts are written as `a-b`, only counts the rule
/// can actually observe are emitted, and `,NN` is appended for von
/// Neumann rules (Moore is implicit).
pub fn serialize(rule: &Rule) -> String {
    rule.to_string()
}

fn parse_neighborhood(rest: &str) -> Neighborhood {
    match rest.chars().next() {
        Some('N') => Neighborhood::VonNeumann,
        Some(c) if c.is_ascii_digit() => leading_u32(rest)
            .and_then(Neighborhood::from_code)
            .unwrap_or(Neighborhood::Moore),
        _ => Neighborhood::Moore,
    }
}

/// Apply one list item (`n` or `a-b`) to `table`. Items without a
/// leading count are skipped.
fn push_item(table: &mut CountTable, item: &str) {
    match item.split_once('-') {
        Some((first, last)) => {
            if let (Some(first), Some(last)) = (leading_usize(first), leading_usize(last)) {
                table.set_span(first, last);
            }
        }
        None => {
            if let Some(n) = leading_usize(item) {
                table.set(n);
            }
        }
    }
}

/// Value of the leading ASCII digits of `s`, saturating on overflow.
fn leading_usize(s: &str) -> Option<usize> {
    let digits = s.trim_start();
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    Some(digits[..end].bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    }))
}

fn leading_u32(s: &str) -> Option<u32> {
    leading_usize(s).map(|v| u32::try_from(v).unwrap_or(u32::MAX))
}

fn write_spans(f: &mut fmt::Formatter<'_>, table: &CountTable, limit: usize) -> fmt::Result {
    for (i, (first, last)) in table.spans(limit).into_iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        if first == last {
            write!(f, "{first}")?;
        } else {
            write!(f, "{first}-{last}")?;
        }
    }
    Ok(())
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let limit = self.max_neighbours();
        write!(f, "R{},C{},S", self.range(), self.states())?;
        write_spans(f, self.survive(), limit)?;
        f.write_str(",B")?;
        write_spans(f, self.birth(), limit)?;
        if self.neighborhood() == Neighborhood::VonNeumann {
            f.write_str(",NN")?;
        }
        Ok(())
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
