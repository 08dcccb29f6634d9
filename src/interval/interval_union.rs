//! Canonical form of a set: a sorted, disjoint list of intervals.
//!
//! [`IntervalUnion`] wraps a `Vec<Interval>` that the normalizer has brought
//! into **canonical form**: intervals sorted by left endpoint, pairwise
//! disjoint, and no two of them touching (touching intervals are merged).
//! Two set expressions denote the same subset of `[0, 1]` exactly when their
//! canonical forms are equal.
//!
//! Read access is transparent via `Deref<Target = [Interval]>`.

use std::cmp::Ordering;
use std::fmt::Display;
use std::ops::Deref;

use super::interval::Interval;
use crate::sets::operations::normalize_union;
use crate::sets::BorelSet;

/// A sorted, pairwise-disjoint, maximal list of intervals.
///
/// Ordered shorter-first, then lexicographically by interval, which gives
/// the deterministic total order used to store canonical forms in a
/// `BTreeSet`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<Interval>")
)]
pub struct IntervalUnion(Vec<Interval>);

impl IntervalUnion {
    /// The canonical form of the empty set.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The canonical form of `[0, 1]`.
    pub fn universe() -> Self {
        Self(vec![Interval::unit()])
    }

    /// Wraps a `Vec` that is **already in canonical form** without re-sorting.
    ///
    /// In debug builds this asserts the invariant.
    pub fn from_sorted_unchecked(vec: Vec<Interval>) -> Self {
        debug_assert!(
            crate::sets::operations::assertions::is_canonical(&vec),
            "IntervalUnion::from_sorted_unchecked called with non-canonical input"
        );
        Self(vec)
    }

    /// Returns true if some interval of the union contains `x`.
    pub fn contains(&self, x: f64) -> bool {
        self.0.iter().any(|interval| interval.contains(x))
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Interval> {
        self.0
    }

    /// Rebuilds a set expression: a `Union` holding each interval.
    pub fn into_borel_set(self) -> BorelSet {
        BorelSet::Union(self.0.into_iter().map(BorelSet::Interval).collect())
    }
}

impl Deref for IntervalUnion {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

impl AsRef<[Interval]> for IntervalUnion {
    fn as_ref(&self) -> &[Interval] {
        &self.0
    }
}

impl From<Interval> for IntervalUnion {
    /// Creates a single-element union; an empty interval yields the empty union.
    fn from(interval: Interval) -> Self {
        if interval.is_empty() {
            Self::empty()
        } else {
            Self(vec![interval])
        }
    }
}

/// Brings an arbitrary list of intervals into canonical form.
impl From<Vec<Interval>> for IntervalUnion {
    fn from(intervals: Vec<Interval>) -> Self {
        normalize_union(intervals)
    }
}

impl From<IntervalUnion> for BorelSet {
    fn from(union: IntervalUnion) -> Self {
        union.into_borel_set()
    }
}

impl<'a> IntoIterator for &'a IntervalUnion {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for IntervalUnion {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl PartialOrd for IntervalUnion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IntervalUnion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl Display for IntervalUnion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "}}")
    }
}

/// Enables `assert_eq!(union, vec![...])` in tests.
impl PartialEq<Vec<Interval>> for IntervalUnion {
    fn eq(&self, other: &Vec<Interval>) -> bool {
        self.0 == *other
    }
}
