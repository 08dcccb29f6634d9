//! Interval boundaries tagged open or closed.

use std::cmp::Ordering;

/// A boundary value on the real line, either included (closed) or excluded (open).
///
/// Endpoints are totally ordered: by point first, and at equal points a
/// closed endpoint sorts before an open one.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    point: f64,
    open: bool,
}

impl Endpoint {
    /// Creates an endpoint. `-0.0` is stored as `0.0`, so both zeros compare equal.
    pub fn new(point: f64, open: bool) -> Self {
        Self {
            point: point + 0.0,
            open,
        }
    }

    /// Endpoint that includes `point`.
    pub fn closed(point: f64) -> Self {
        Self::new(point, false)
    }

    /// Endpoint that excludes `point`.
    pub fn open(point: f64) -> Self {
        Self::new(point, true)
    }

    pub const fn point(&self) -> f64 {
        self.point
    }

    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub const fn is_closed(&self) -> bool {
        !self.open
    }

    /// Returns the same point with the openness inverted.
    ///
    /// Used to build the boundary of a complementary piece: the complement
    /// of `[a, …` ends at `…, a)`.
    pub fn switch(self) -> Self {
        Self::new(self.point, !self.open)
    }

    /// Returns true if an interval ending at `self` and one starting at
    /// `left` share at least one point or leave no gap between them.
    ///
    /// `self` is read as a right boundary, `left` as a left boundary.
    pub fn adjoins(&self, left: &Endpoint) -> bool {
        left.point < self.point || (left.point == self.point && !(self.open && left.open))
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Endpoint {}

impl PartialOrd for Endpoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Endpoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.point
            .total_cmp(&other.point)
            .then(self.open.cmp(&other.open))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_sorts_before_open_at_same_point() {
        assert!(Endpoint::closed(0.5) < Endpoint::open(0.5));
        assert!(Endpoint::open(0.25) < Endpoint::closed(0.5));
    }

    #[test]
    fn switch_flips_openness_only() {
        let e = Endpoint::closed(0.3).switch();
        assert!(e.is_open());
        assert_eq!(e.point(), 0.3);
        assert_eq!(e.switch(), Endpoint::closed(0.3));
    }

    #[test]
    fn adjoins_rejects_gap_at_doubly_open_point() {
        // [.., 0.5) and (0.5, ..] leave 0.5 uncovered
        assert!(!Endpoint::open(0.5).adjoins(&Endpoint::open(0.5)));
        assert!(Endpoint::open(0.5).adjoins(&Endpoint::closed(0.5)));
        assert!(Endpoint::closed(0.5).adjoins(&Endpoint::open(0.5)));
        assert!(Endpoint::closed(0.5).adjoins(&Endpoint::closed(0.2)));
        assert!(!Endpoint::closed(0.5).adjoins(&Endpoint::closed(0.6)));
    }

    #[test]
    fn negative_zero_is_stored_as_zero() {
        let e = Endpoint::closed(-0.0);
        assert!(e.point().is_sign_positive());
        assert_eq!(e, Endpoint::closed(0.0));
        assert_eq!(Endpoint::open(-0.0).switch(), Endpoint::closed(0.0));
    }
}
