//! Normalization steps for the set expression shapes that combine intervals.

mod complement;
mod intersection;
mod union;

pub use complement::compute_complement;
pub use intersection::compute_intersection;
pub use union::normalize_union;

#[cfg(debug_assertions)]
pub mod assertions;

#[cfg(not(debug_assertions))]
pub mod assertions {
    use crate::interval::Interval;

    pub fn is_canonical(_intervals: &[Interval]) -> bool {
        true
    }
}
