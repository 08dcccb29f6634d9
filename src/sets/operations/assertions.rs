//! Interval union invariants.

use crate::interval::Interval;

/// Returns true if `intervals` is canonical: no interval is empty, intervals
/// are sorted by left endpoint, and consecutive intervals neither overlap nor
/// touch.
pub fn is_canonical(intervals: &[Interval]) -> bool {
    intervals.iter().all(|iv| !iv.is_empty())
        && intervals.windows(2).all(|w| {
            let prev = &w[0];
            let curr = &w[1];
            prev.left() < curr.left() && !prev.right().adjoins(&curr.left())
        })
}
