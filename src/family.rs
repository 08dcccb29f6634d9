//! Ordered collections of set expressions.

use std::fmt::Display;
use std::ops::Deref;

use crate::interval::IntervalUnion;
use crate::sets::{BorelError, BorelSet};

/// An ordered sequence of set expressions.
///
/// Serves both as the generating family handed to the closure engine and as
/// its result, where members appear in canonical-form order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Family(Vec<BorelSet>);

impl Family {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, set: BorelSet) {
        self.0.push(set);
    }

    /// Normalizes every member, keeping the family's order.
    pub fn canonical_forms(&self) -> Result<Vec<IntervalUnion>, BorelError> {
        self.0.iter().map(BorelSet::to_intervals).collect()
    }

    pub fn into_inner(self) -> Vec<BorelSet> {
        self.0
    }
}

impl Deref for Family {
    type Target = [BorelSet];

    fn deref(&self) -> &[BorelSet] {
        &self.0
    }
}

impl From<Vec<BorelSet>> for Family {
    fn from(sets: Vec<BorelSet>) -> Self {
        Self(sets)
    }
}

impl FromIterator<BorelSet> for Family {
    fn from_iter<I: IntoIterator<Item = BorelSet>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<BorelSet> for Family {
    fn extend<I: IntoIterator<Item = BorelSet>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Family {
    type Item = BorelSet;
    type IntoIter = std::vec::IntoIter<BorelSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Family {
    type Item = &'a BorelSet;
    type IntoIter = std::slice::Iter<'a, BorelSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One member per line.
impl Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for set in &self.0 {
            writeln!(f, "{}", set)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    #[test]
    fn display_prints_one_member_per_line() {
        let family: Family = vec![
            BorelSet::universe(),
            !BorelSet::interval(Interval::closed(0.0, 0.5)),
        ]
        .into();
        assert_eq!(family.to_string(), "Omega\nNot{[0,0.5]}\n");
        assert_eq!(Family::new().to_string(), "");
    }

    #[test]
    fn canonical_forms_keep_order() {
        let family: Family = [BorelSet::universe(), BorelSet::empty()].into_iter().collect();
        let forms = family.canonical_forms().unwrap();
        assert_eq!(forms, vec![IntervalUnion::universe(), IntervalUnion::empty()]);
    }

    #[test]
    fn canonical_forms_propagate_errors() {
        let mut family = Family::new();
        family.push(BorelSet::universe());
        family.push(BorelSet::intersection(vec![]));
        assert_eq!(family.canonical_forms(), Err(BorelError::EmptyIntersection));
        assert_eq!(family.len(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_keeps_tree_shape() {
        let family: Family = vec![
            BorelSet::union(vec![
                BorelSet::interval(Interval::closed_open(0.0, 0.25)),
                !BorelSet::intersection(vec![BorelSet::universe(), BorelSet::empty()]),
            ]),
            BorelSet::interval(Interval::open(0.5, 1.0)),
        ]
        .into();

        let json = serde_json::to_string(&family).unwrap();
        let back: Family = serde_json::from_str(&json).unwrap();
        assert_eq!(back, family);
        assert_eq!(back.to_string(), family.to_string());
    }
}
