//! Set expressions over `[0, 1]` and their normalization.
use super::error::BorelError;
use super::operations::{compute_complement, compute_intersection, normalize_union};
use crate::interval::{Interval, IntervalUnion};
use std::fmt::Display;
use std::ops::Not;

/// Set expression tree over the unit interval.
///
/// - **Universe**: the whole space `[0, 1]`
/// - **Empty**: the empty set
/// - **Complement**: everything in `[0, 1]` outside the child
/// - **Union** / **Intersection**: finite combinations of children
/// - **Interval**: a primitive interval
///
/// Each node owns its children; trees are assembled once and then only read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorelSet {
    Universe,
    Empty,
    Complement(Box<BorelSet>),
    Union(Vec<BorelSet>),
    Intersection(Vec<BorelSet>),
    Interval(Interval),
}

impl BorelSet {
    pub fn universe() -> Self {
        BorelSet::Universe
    }

    pub fn empty() -> Self {
        BorelSet::Empty
    }

    pub fn complement(child: BorelSet) -> Self {
        BorelSet::Complement(Box::new(child))
    }

    pub fn union(children: Vec<BorelSet>) -> Self {
        BorelSet::Union(children)
    }

    /// Creates an intersection node.
    ///
    /// An intersection needs at least one child to be normalized; an empty
    /// `children` list is accepted here and reported by [`BorelSet::to_intervals`].
    pub fn intersection(children: Vec<BorelSet>) -> Self {
        BorelSet::Intersection(children)
    }

    pub fn interval(interval: Interval) -> Self {
        BorelSet::Interval(interval)
    }

    /// Reduces the expression to its canonical interval union.
    ///
    /// - Universe: `[0, 1]`
    /// - Empty / empty interval: no intervals
    /// - Complement: intersection of the complements of the child's intervals
    /// - Union: all children's intervals merged
    /// - Intersection: pairwise intersection of the children's unions
    ///
    /// # Errors
    ///
    /// Returns [`BorelError::EmptyIntersection`] if an intersection anywhere in
    /// the tree has no children.
    pub fn to_intervals(&self) -> Result<IntervalUnion, BorelError> {
        match self {
            BorelSet::Universe => Ok(IntervalUnion::universe()),
            BorelSet::Empty => Ok(IntervalUnion::empty()),
            BorelSet::Interval(interval) => Ok(IntervalUnion::from(*interval)),
            BorelSet::Complement(child) => Ok(compute_complement(&child.to_intervals()?)),
            BorelSet::Union(children) => {
                let mut pieces = Vec::new();
                for child in children {
                    pieces.extend(child.to_intervals()?);
                }
                Ok(normalize_union(pieces))
            }
            BorelSet::Intersection(children) => {
                let (first, rest) = children
                    .split_first()
                    .ok_or(BorelError::EmptyIntersection)?;
                let mut acc = first.to_intervals()?;
                for child in rest {
                    acc = compute_intersection(&acc, &child.to_intervals()?);
                }
                Ok(acc)
            }
        }
    }

    /// Returns true if both expressions denote the same subset of `[0, 1]`.
    pub fn equivalent(&self, other: &BorelSet) -> Result<bool, BorelError> {
        Ok(self.to_intervals()? == other.to_intervals()?)
    }

    fn write_children(
        f: &mut std::fmt::Formatter<'_>,
        name: &str,
        children: &[BorelSet],
    ) -> std::fmt::Result {
        write!(f, "{}{{", name)?;
        for (idx, child) in children.iter().enumerate() {
            if idx != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", child)?;
        }
        write!(f, "}}")
    }
}

impl Display for BorelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BorelSet::Universe => write!(f, "Omega"),
            BorelSet::Empty => write!(f, "Nul"),
            BorelSet::Complement(child) => write!(f, "Not{{{}}}", child),
            BorelSet::Union(children) => Self::write_children(f, "Union", children),
            BorelSet::Intersection(children) => {
                Self::write_children(f, "Intersection", children)
            }
            BorelSet::Interval(interval) => write!(f, "{}", interval),
        }
    }
}

impl From<Interval> for BorelSet {
    fn from(interval: Interval) -> Self {
        BorelSet::Interval(interval)
    }
}

impl Not for BorelSet {
    type Output = Self;

    fn not(self) -> Self {
        BorelSet::complement(self)
    }
}
