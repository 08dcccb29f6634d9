//! Fixed-point passes over the working list of the closure engine.

use std::collections::BTreeSet;

use crate::family::Family;
use crate::interval::IntervalUnion;
use crate::sets::operations::{compute_complement, normalize_union};
use crate::sets::{BorelError, BorelSet};

use super::metrics::ClosureStats;

/// An expression in the working list together with its canonical form.
///
/// Carrying the form lets `Complement(e)` and `Union(a, b)` be normalized
/// from their children's forms instead of re-walking the whole tree.
#[derive(Debug, Clone)]
pub(crate) struct Member {
    pub tree: BorelSet,
    pub form: IntervalUnion,
}

/// Mutable state of one closure computation.
#[derive(Debug)]
pub(crate) struct ClosureState {
    pub known: BTreeSet<IntervalUnion>,
    pub head: Vec<Member>,
    pub stats: ClosureStats,
}

/// Records `form` if it is new; returns whether it was.
fn offer(
    known: &mut BTreeSet<IntervalUnion>,
    pending: &mut Vec<Member>,
    tree: BorelSet,
    form: IntervalUnion,
) -> bool {
    if known.contains(&form) {
        return false;
    }
    log::trace!("new set {} from {}", form, tree);
    known.insert(form.clone());
    pending.push(Member { tree, form });
    true
}

impl ClosureState {
    /// Normalizes every generator and seeds the known forms and the working list.
    pub fn seed(generators: &Family) -> Result<Self, BorelError> {
        let mut known = BTreeSet::new();
        let mut head = Vec::with_capacity(generators.len());
        for tree in generators.iter() {
            let form = tree.to_intervals()?;
            known.insert(form.clone());
            head.push(Member {
                tree: tree.clone(),
                form,
            });
        }
        Ok(Self {
            known,
            head,
            stats: ClosureStats::default(),
        })
    }

    /// Runs one pass and returns the number of new canonical forms found.
    ///
    /// Every member of the working list is complemented, then every pair of
    /// members present at the start of the pass is joined. New expressions
    /// are appended to the working list only after the pass, so they are
    /// first paired in the next one.
    pub fn run_pass(&mut self) -> usize {
        let snapshot = self.head.len();
        let mut pending: Vec<Member> = Vec::new();
        let mut changes = 0usize;

        for member in &self.head[..snapshot] {
            let form = compute_complement(&member.form);
            let tree = BorelSet::complement(member.tree.clone());
            self.stats.candidates_tested += 1;
            if offer(&mut self.known, &mut pending, tree, form) {
                changes += 1;
            }
        }

        for i in 0..snapshot {
            for j in (i + 1)..snapshot {
                let (a, b) = (&self.head[i], &self.head[j]);
                let form = normalize_union(a.form.iter().chain(b.form.iter()).copied().collect());
                let tree = BorelSet::union(vec![a.tree.clone(), b.tree.clone()]);
                self.stats.candidates_tested += 1;
                if offer(&mut self.known, &mut pending, tree, form) {
                    changes += 1;
                }
            }
        }

        self.stats.passes += 1;
        self.stats.discovered += changes;
        log::debug!(
            "closure pass {}: {} expressions, {} new sets",
            self.stats.passes,
            snapshot,
            changes
        );

        self.head.append(&mut pending);
        self.stats.head_size = self.head.len();
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;

    #[test]
    fn seed_deduplicates_equivalent_generators() {
        let generators: Family = vec![
            BorelSet::universe(),
            BorelSet::union(vec![
                BorelSet::interval(Interval::closed_open(0.0, 0.5)),
                BorelSet::interval(Interval::closed(0.5, 1.0)),
            ]),
        ]
        .into();
        let state = ClosureState::seed(&generators).unwrap();
        assert_eq!(state.known.len(), 1);
        assert_eq!(state.head.len(), 2);
    }

    #[test]
    fn first_pass_pairs_only_the_snapshot() {
        let generators: Family = vec![BorelSet::interval(Interval::closed(0.0, 0.5))].into();
        let mut state = ClosureState::seed(&generators).unwrap();

        // One member: its complement is new, there are no pairs yet.
        assert_eq!(state.run_pass(), 1);
        assert_eq!(state.stats.candidates_tested, 1);
        assert_eq!(state.head.len(), 2);
        assert_eq!(state.head[1].tree.to_string(), "Not{[0,0.5]}");

        // Two members: both complements are known, their union is new.
        assert_eq!(state.run_pass(), 1);
        assert_eq!(state.stats.candidates_tested, 4);
        assert_eq!(state.head[2].form, IntervalUnion::universe());
    }

    #[test]
    fn pass_without_news_leaves_head_untouched() {
        let generators: Family = vec![BorelSet::universe(), BorelSet::empty()].into();
        let mut state = ClosureState::seed(&generators).unwrap();
        assert_eq!(state.run_pass(), 0);
        assert_eq!(state.head.len(), 2);
        assert_eq!(state.stats.passes, 1);
        assert_eq!(state.stats.candidates_tested, 3);
    }
}
