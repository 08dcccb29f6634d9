//! Counters collected while running the closure engine.

use std::fmt;

/// Work done by one closure computation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosureStats {
    /// Number of full passes, including the final one that found nothing new.
    pub passes: usize,
    /// Complements and pairwise unions built and normalized.
    pub candidates_tested: usize,
    /// Canonical forms found beyond those of the generators.
    pub discovered: usize,
    /// Size of the working list when the engine stopped.
    pub head_size: usize,
}

impl fmt::Display for ClosureStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passes, {} candidates tested, {} new sets, {} expressions in head",
            self.passes, self.candidates_tested, self.discovered, self.head_size
        )
    }
}
