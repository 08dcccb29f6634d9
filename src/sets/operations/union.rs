use crate::interval::{Endpoint, Interval, IntervalUnion};

/// Returns true if a run ending at `right` grows by absorbing a piece ending at `candidate`.
fn extends(right: &Endpoint, candidate: &Endpoint) -> bool {
    right.point() < candidate.point()
        || (right.point() == candidate.point() && right.is_open() && candidate.is_closed())
}

/// Merges an unordered list of intervals into canonical form.
///
/// Pieces are sorted by left endpoint, then consumed front to back: the
/// first unconsumed piece seeds a run, and any later piece that touches the
/// run's right end and reaches past it is absorbed. After every absorption
/// the scan restarts just after the run's origin, so pieces that only became
/// adjacent through the latest extension are picked up. Once the run stops
/// growing it is emitted, and every remaining piece contained in it is
/// dropped.
pub fn normalize_union(mut pieces: Vec<Interval>) -> IntervalUnion {
    pieces.retain(|iv| !iv.is_empty());
    pieces.sort_by(|a, b| a.left().cmp(&b.left()));

    let mut consumed = vec![false; pieces.len()];
    let mut merged: Vec<Interval> = Vec::with_capacity(pieces.len());

    for origin in 0..pieces.len() {
        if consumed[origin] {
            continue;
        }
        consumed[origin] = true;

        let left = pieces[origin].left();
        let mut right = pieces[origin].right();

        let mut cursor = origin + 1;
        while cursor < pieces.len() {
            let head = pieces[cursor];
            if !consumed[cursor] && right.adjoins(&head.left()) && extends(&right, &head.right()) {
                right = head.right();
                consumed[cursor] = true;
                cursor = origin + 1;
                continue;
            }
            cursor += 1;
        }

        let emitted = Interval::from_endpoints(left, right);
        for (idx, piece) in pieces.iter().enumerate().skip(origin + 1) {
            if !consumed[idx] && piece.is_subset_of(&emitted) {
                consumed[idx] = true;
            }
        }
        merged.push(emitted);
    }

    IntervalUnion::from_sorted_unchecked(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_interval(rng: &mut StdRng) -> Interval {
        // A coarse grid makes shared endpoints common.
        let a = rng.gen_range(0..=8) as f64 / 8.0;
        let b = rng.gen_range(0..=8) as f64 / 8.0;
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        Interval::from_endpoints(
            Endpoint::new(a, rng.gen_bool(0.5)),
            Endpoint::new(b, rng.gen_bool(0.5)),
        )
    }

    #[test]
    fn test_union_disjoint_pieces_stay_apart() {
        let u = normalize_union(vec![Interval::closed(0.5, 0.75), Interval::closed(0.0, 0.25)]);
        assert_eq!(u, vec![Interval::closed(0.0, 0.25), Interval::closed(0.5, 0.75)]);
    }

    #[test]
    fn test_union_overlapping() {
        let u = normalize_union(vec![Interval::closed(0.0, 0.5), Interval::closed(0.25, 0.75)]);
        assert_eq!(u, vec![Interval::closed(0.0, 0.75)]);
    }

    #[test]
    fn test_union_half_open_neighbours_merge() {
        let u = normalize_union(vec![
            Interval::closed_open(0.0, 0.25),
            Interval::closed_open(0.25, 0.5),
        ]);
        assert_eq!(u, vec![Interval::closed_open(0.0, 0.5)]);
    }

    #[test]
    fn test_union_doubly_open_gap_is_kept() {
        let u = normalize_union(vec![Interval::closed_open(0.0, 0.5), Interval::open_closed(0.5, 1.0)]);
        assert_eq!(u.len(), 2);
    }

    #[test]
    fn test_union_point_fills_gap() {
        let u = normalize_union(vec![
            Interval::closed_open(0.0, 0.5),
            Interval::open_closed(0.5, 1.0),
            Interval::point(0.5),
        ]);
        assert_eq!(u, vec![Interval::unit()]);
    }

    #[test]
    fn test_union_chains_through_successive_extensions() {
        // each piece only touches the run after the previous one was absorbed
        let u = normalize_union(vec![
            Interval::closed(0.15, 0.6),
            Interval::closed(0.1, 0.2),
            Interval::point(0.0),
            Interval::open(0.0, 0.1),
        ]);
        assert_eq!(u, vec![Interval::closed(0.0, 0.6)]);
    }

    #[test]
    fn test_union_closed_end_wins_at_shared_point() {
        let u = normalize_union(vec![Interval::closed_open(0.0, 0.5), Interval::closed(0.25, 0.5)]);
        assert_eq!(u, vec![Interval::closed(0.0, 0.5)]);
    }

    #[test]
    fn test_union_drops_contained_and_empty_pieces() {
        let u = normalize_union(vec![
            Interval::closed(0.0, 1.0),
            Interval::open(0.2, 0.3),
            Interval::closed(0.9, 0.1),
        ]);
        assert_eq!(u, IntervalUnion::universe());
    }

    #[test]
    fn test_union_of_nothing_is_empty() {
        assert!(normalize_union(Vec::new()).is_empty());
    }

    #[test]
    fn test_union_is_idempotent() {
        let once = normalize_union(vec![
            Interval::open_closed(0.5, 0.75),
            Interval::closed_open(0.0, 0.25),
            Interval::closed(0.2, 0.3),
        ]);
        let twice = normalize_union(once.to_vec());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_union_random_inputs_are_canonical_and_preserve_points() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let probes: Vec<f64> = (0..=32).map(|k| k as f64 / 32.0).collect();

        for _ in 0..500 {
            let count = rng.gen_range(0..6);
            let pieces: Vec<Interval> = (0..count).map(|_| random_interval(&mut rng)).collect();
            let union = normalize_union(pieces.clone());

            for w in union.windows(2) {
                assert!(w[0].left() < w[1].left(), "unsorted: {}", union);
                assert!(!w[0].right().adjoins(&w[1].left()), "not merged: {}", union);
            }
            assert!(union.iter().all(|iv| !iv.is_empty()));

            for &x in &probes {
                let expected = pieces.iter().any(|iv| iv.contains(x));
                assert_eq!(union.contains(x), expected, "point {} of {:?}", x, pieces);
            }

            assert_eq!(normalize_union(union.to_vec()), union);
        }
    }
}
