//! Contiguous subsets of the unit interval.

use std::fmt::Display;

use super::endpoint::Endpoint;
use crate::sets::BorelError;

/// Contiguous subset of `[0, 1]` bounded by two [`Endpoint`]s.
///
/// An interval whose left point exceeds its right point (or a single point
/// with an open side) denotes the empty set. Intervals order by left
/// endpoint, then right endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "IntervalBounds")
)]
pub struct Interval {
    left: Endpoint,
    right: Endpoint,
}

/// Unvalidated wire form of an [`Interval`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct IntervalBounds {
    left: Endpoint,
    right: Endpoint,
}

#[cfg(feature = "serde")]
impl TryFrom<IntervalBounds> for Interval {
    type Error = BorelError;

    fn try_from(bounds: IntervalBounds) -> Result<Self, Self::Error> {
        Interval::try_new(bounds.left, bounds.right)
    }
}

impl Interval {
    /// Creates an interval, checking that both points are finite and lie in `[0, 1]`.
    ///
    /// Outside this crate every interval is built through this check:
    ///
    /// ```compile_fail
    /// use borel::interval::{Endpoint, Interval};
    ///
    /// let _ = Interval::from_endpoints(Endpoint::closed(0.0), Endpoint::closed(2.0));
    /// ```
    pub fn try_new(left: Endpoint, right: Endpoint) -> Result<Self, BorelError> {
        // Rebuilt so deserialized endpoints get the same zero handling as `Endpoint::new`.
        let left = Endpoint::new(left.point(), left.is_open());
        let right = Endpoint::new(right.point(), right.is_open());
        for endpoint in [left, right] {
            let point = endpoint.point();
            if !point.is_finite() {
                return Err(BorelError::NonFiniteEndpoint);
            }
            if !(0.0..=1.0).contains(&point) {
                return Err(BorelError::EndpointOutOfRange(point));
            }
        }
        Ok(Self { left, right })
    }

    /// Creates an interval without range checks.
    ///
    /// Meant for boundaries derived from already validated intervals or from
    /// the constants `0` and `1`.
    pub(crate) fn from_endpoints(left: Endpoint, right: Endpoint) -> Self {
        Self { left, right }
    }

    /// Creates `[a, b]`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is not a finite value in `[0, 1]`.
    pub fn closed(a: f64, b: f64) -> Self {
        Self::literal(Endpoint::closed(a), Endpoint::closed(b))
    }

    /// Creates `(a, b)`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is not a finite value in `[0, 1]`.
    pub fn open(a: f64, b: f64) -> Self {
        Self::literal(Endpoint::open(a), Endpoint::open(b))
    }

    /// Creates `[a, b)`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is not a finite value in `[0, 1]`.
    pub fn closed_open(a: f64, b: f64) -> Self {
        Self::literal(Endpoint::closed(a), Endpoint::open(b))
    }

    /// Creates `(a, b]`.
    ///
    /// # Panics
    ///
    /// Panics if either bound is not a finite value in `[0, 1]`.
    pub fn open_closed(a: f64, b: f64) -> Self {
        Self::literal(Endpoint::open(a), Endpoint::closed(b))
    }

    /// The whole space `[0, 1]`.
    pub fn unit() -> Self {
        Self::from_endpoints(Endpoint::closed(0.0), Endpoint::closed(1.0))
    }

    /// The degenerate interval `[p, p]`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not a finite value in `[0, 1]`.
    pub fn point(p: f64) -> Self {
        Self::closed(p, p)
    }

    fn literal(left: Endpoint, right: Endpoint) -> Self {
        match Self::try_new(left, right) {
            Ok(interval) => interval,
            Err(e) => panic!("invalid interval literal: {e}"),
        }
    }

    pub const fn left(&self) -> Endpoint {
        self.left
    }

    pub const fn right(&self) -> Endpoint {
        self.right
    }

    /// Returns true if no point satisfies both bounds.
    pub fn is_empty(&self) -> bool {
        let (l, r) = (self.left.point(), self.right.point());
        l > r || (l == r && (self.left.is_open() || self.right.is_open()))
    }

    /// Returns true if `x` lies within the interval, honouring openness.
    pub fn contains(&self, x: f64) -> bool {
        let above = if self.left.is_open() {
            x > self.left.point()
        } else {
            x >= self.left.point()
        };
        let below = if self.right.is_open() {
            x < self.right.point()
        } else {
            x <= self.right.point()
        };
        above && below
    }

    /// Returns true if every point of `self` also lies in `that`.
    pub fn is_subset_of(&self, that: &Interval) -> bool {
        if self.is_empty() {
            return true;
        }
        let left_ok = that.left.point() < self.left.point()
            || (that.left.point() == self.left.point()
                && (that.left.is_closed() || self.left.is_open()));
        let right_ok = self.right.point() < that.right.point()
            || (self.right.point() == that.right.point()
                && (that.right.is_closed() || self.right.is_open()));
        left_ok && right_ok
    }

    /// Returns the pieces of `[0, 1]` not covered by this interval, left piece first.
    ///
    /// At most two pieces are produced. A boundary point `0` (or `1`) that the
    /// interval excludes comes back as the degenerate piece `[0,0]` (or `[1,1]`).
    pub fn complement_within_unit(&self) -> Vec<Interval> {
        if self.is_empty() {
            return vec![Interval::unit()];
        }

        let mut pieces = Vec::with_capacity(2);

        if self.left.point() > 0.0 {
            pieces.push(Interval::from_endpoints(
                Endpoint::closed(0.0),
                self.left.switch(),
            ));
        } else if self.left.is_open() {
            pieces.push(Interval::from_endpoints(
                Endpoint::closed(0.0),
                Endpoint::closed(0.0),
            ));
        }

        if self.right.point() < 1.0 {
            pieces.push(Interval::from_endpoints(
                self.right.switch(),
                Endpoint::closed(1.0),
            ));
        } else if self.right.is_open() {
            pieces.push(Interval::from_endpoints(
                Endpoint::closed(1.0),
                Endpoint::closed(1.0),
            ));
        }

        pieces
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{},{}{}",
            if self.left.is_open() { '(' } else { '[' },
            self.left.point(),
            self.right.point(),
            if self.right.is_open() { ')' } else { ']' },
        )
    }
}
