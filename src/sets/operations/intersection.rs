use std::cmp::Ordering;

use crate::interval::{Endpoint, Interval, IntervalUnion};

/// Orders right boundaries by how far they reach: an open end stops short of
/// a closed end at the same point.
fn cmp_right(a: &Endpoint, b: &Endpoint) -> Ordering {
    a.point()
        .total_cmp(&b.point())
        .then(b.is_open().cmp(&a.is_open()))
}

/// Computes the intersection of two canonical unions.
///
/// # Arguments
///
/// * `a` - First canonical union
/// * `b` - Second canonical union
///
/// # Returns
///
/// The canonical union of every non-empty pairwise overlap.
pub fn compute_intersection(a: &IntervalUnion, b: &IntervalUnion) -> IntervalUnion {
    debug_assert!(super::assertions::is_canonical(a));
    debug_assert!(super::assertions::is_canonical(b));

    let mut result = Vec::with_capacity(a.len().min(b.len()));
    let mut i = 0usize;
    let mut j = 0usize;

    while i < a.len() && j < b.len() {
        let ia = &a[i];
        let ib = &b[j];

        // Endpoint order puts an open left after a closed one at the same point.
        let left = ia.left().max(ib.left());
        let right = match cmp_right(&ia.right(), &ib.right()) {
            Ordering::Greater => ib.right(),
            _ => ia.right(),
        };
        let overlap = Interval::from_endpoints(left, right);
        if !overlap.is_empty() {
            result.push(overlap);
        }

        match cmp_right(&ia.right(), &ib.right()) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }

    IntervalUnion::from_sorted_unchecked(result)
}
