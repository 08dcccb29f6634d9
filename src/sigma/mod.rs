//! Closure of a family of sets under complement and finite union.
//!
//! Starting from a generating [`Family`], the engine repeatedly builds the
//! complement of every expression it knows and the union of every pair, and
//! keeps those whose canonical form has not been seen before. It stops after
//! the first pass that finds nothing new; the canonical forms collected by
//! then are the members of the generated sigma-algebra.
//!
//! # Algorithm
//!
//! 1. Normalize every generator; the forms seed the ordered set of known sets
//!    and the generators seed the working list.
//! 2. In each pass, complement every expression in the working list, then
//!    join every pair of expressions that were in the list when the pass
//!    started. A result whose canonical form is unknown is recorded and queued.
//! 3. Queued expressions join the working list after the pass. A pass with no
//!    new form ends the computation.
//!
//! Equivalence is decided on canonical forms ([`IntervalUnion`]), never on the
//! shape of the expressions, so `[0,0.5) ∪ [0.5,1]` and `Omega` count as the
//! same set.
//!
//! # Module Structure
//!
//! - [`config`] - Pass limits
//! - [`metrics`] - Work counters
//! - `engine` - The pass loop over the working list

pub mod config;
mod engine;
pub mod error;
pub mod metrics;


use std::collections::BTreeSet;

use crate::family::Family;
use crate::interval::IntervalUnion;
use crate::sets::{BorelError, BorelSet};

pub use config::ClosureConfig;
pub use error::ClosureError;
pub use metrics::ClosureStats;

use engine::ClosureState;

/// Closes generating families under complement and pairwise union.
#[derive(Debug, Clone, Default)]
pub struct SigmaAlgebraGenerator {
    config: ClosureConfig,
}

impl SigmaAlgebraGenerator {
    pub fn new(config: ClosureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClosureConfig {
        &self.config
    }

    /// Runs passes until one finds no new canonical form.
    ///
    /// # Errors
    ///
    /// - [`ClosureError::Normalize`] if a generator cannot be normalized
    /// - [`ClosureError::PassLimitExceeded`] if the configured pass limit is
    ///   reached before convergence
    pub fn generate(&self, generators: &Family) -> Result<Closure, ClosureError> {
        let mut state = ClosureState::seed(generators)?;
        log::debug!(
            "closing {} generators ({} distinct sets)",
            generators.len(),
            state.known.len()
        );

        loop {
            if let Some(limit) = self.config.max_passes {
                if state.stats.passes >= limit {
                    return Err(ClosureError::PassLimitExceeded { limit });
                }
            }
            if state.run_pass() == 0 {
                break;
            }
        }

        log::debug!(
            "closure converged with {} sets: {}",
            state.known.len(),
            state.stats
        );

        Ok(Closure {
            forms: state.known,
            stats: state.stats,
        })
    }
}

/// Result of a closure computation: the distinct canonical forms reached.
#[derive(Debug, Clone)]
pub struct Closure {
    forms: BTreeSet<IntervalUnion>,
    stats: ClosureStats,
}

impl Closure {
    /// Canonical forms in their total order: fewer intervals first.
    pub fn forms(&self) -> &BTreeSet<IntervalUnion> {
        &self.forms
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub fn contains_form(&self, form: &IntervalUnion) -> bool {
        self.forms.contains(form)
    }

    /// Returns true if the set denoted by `set` is a member.
    pub fn contains(&self, set: &BorelSet) -> Result<bool, BorelError> {
        Ok(self.forms.contains(&set.to_intervals()?))
    }

    pub fn stats(&self) -> &ClosureStats {
        &self.stats
    }

    /// Converts every canonical form back into a `Union` expression, in order.
    pub fn into_family(self) -> Family {
        self.forms
            .into_iter()
            .map(IntervalUnion::into_borel_set)
            .collect()
    }
}

/// Closes `generators` under complement and pairwise union with no pass limit.
///
/// The returned family lists the canonical form of every member as a
/// `Union` of intervals, ordered by [`IntervalUnion`]'s total order.
pub fn generate_sigma_algebra(generators: &Family) -> Result<Family, ClosureError> {
    SigmaAlgebraGenerator::default()
        .generate(generators)
        .map(Closure::into_family)
}
