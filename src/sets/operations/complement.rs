use super::{compute_intersection, normalize_union};
use crate::interval::IntervalUnion;

/// Returns the complement of a canonical union within `[0, 1]`.
///
/// Each interval is complemented on its own and the per-interval complements
/// are intersected, so `Not(A ∪ B) = Not(A) ∩ Not(B)`. The complement of the
/// empty union is `[0, 1]`.
pub fn compute_complement(canonical: &IntervalUnion) -> IntervalUnion {
    canonical
        .iter()
        .map(|interval| normalize_union(interval.complement_within_unit()))
        .fold(IntervalUnion::universe(), |acc, piece| {
            compute_intersection(&acc, &piece)
        })
}
