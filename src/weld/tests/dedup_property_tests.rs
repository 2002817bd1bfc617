use proptest::prelude::*;
use std::collections::HashSet;

use crate::debug_invariants::DebugInvariants;
use crate::geometry::point::Point2;
use crate::weld::dedup::{Deduplicator, dedup_points};

// Small coordinate range so that generated inputs repeat often.
fn point() -> impl Strategy<Value = Point2> {
    (-3i64..=3, -3i64..=3).prop_map(Point2::from)
}

#[test]
fn sample_points() {
    let input: Vec<Point2> = [(0, 0), (1, 0), (0, 0), (2, 2), (0, 0)]
        .into_iter()
        .map(Point2::from)
        .collect();
    let out = dedup_points(&input);
    assert_eq!(
        out.unique(),
        &[Point2::new(0, 0), Point2::new(1, 0), Point2::new(2, 2)]
    );
    assert_eq!(out.indices(), &[0, 1, 0, 2, 0]);
    for (i, p) in input.iter().enumerate() {
        assert_eq!(out.unique()[out.indices()[i]], *p);
    }
}

proptest! {
    #[test]
    fn index_len_matches_input(input in prop::collection::vec(point(), 0..64)) {
        let out = dedup_points(&input);
        prop_assert_eq!(out.indices().len(), input.len());
    }

    #[test]
    fn indices_resolve_to_input(input in prop::collection::vec(point(), 0..64)) {
        let out = dedup_points(&input);
        for (i, p) in input.iter().enumerate() {
            prop_assert_eq!(&out.unique()[out.indices()[i]], p);
        }
        prop_assert_eq!(out.expand(), input);
    }

    #[test]
    fn unique_has_no_duplicates(input in prop::collection::vec(point(), 0..64)) {
        let out = dedup_points(&input);
        let set: HashSet<_> = out.unique().iter().collect();
        prop_assert_eq!(set.len(), out.unique().len());
        let distinct: HashSet<_> = input.iter().collect();
        prop_assert_eq!(distinct.len(), out.unique_len());
    }

    #[test]
    fn indices_are_assigned_in_first_appearance_order(
        input in prop::collection::vec(point(), 0..64)
    ) {
        let out = dedup_points(&input);
        let mut next = 0usize;
        let mut seen = HashSet::new();
        for (p, &idx) in input.iter().zip(out.indices()) {
            if seen.insert(*p) {
                prop_assert_eq!(idx, next);
                next += 1;
            } else {
                prop_assert!(idx < next);
            }
        }
        prop_assert!(out.validate_invariants().is_ok());
    }

    #[test]
    fn streaming_equals_batch(input in prop::collection::vec(point(), 0..64)) {
        let mut d = Deduplicator::new();
        for p in &input {
            d.push(p);
        }
        prop_assert_eq!(d.finish(), dedup_points(&input));
    }
}
