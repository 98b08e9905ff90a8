// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for EventStream Laws
//!
//! Verifies the Functor laws, filter idempotence, and merge symmetry
//! over arbitrary finite occurrence sequences with strictly increasing
//! timestamps.

use frp_semantics::{EventStream, Occurrence, Time};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Arbitrary finite occurrence list with strictly increasing times
///
/// Times are built from positive deltas (≥ 0.1) so any two consecutive
/// occurrences are separated by a representable gap.
fn occurrence_list() -> impl Strategy<Value = Vec<(f64, i64)>> {
    prop::collection::vec((0.1f64..10.0, any::<i64>()), 0..12).prop_map(|pairs| {
        let mut time = 0.0;
        pairs
            .into_iter()
            .map(|(delta, value)| {
                time += delta;
                (time, value)
            })
            .collect()
    })
}

fn stream_of(pairs: &[(f64, i64)]) -> EventStream<i64> {
    EventStream::from_vec(
        pairs
            .iter()
            .map(|&(t, v)| Occurrence::new(Time(t), v))
            .collect(),
    )
}

fn collect(stream: EventStream<i64>) -> Vec<Occurrence<i64>> {
    stream.occurrences().collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: mapping the identity function changes nothing
    #[test]
    fn prop_map_identity(pairs in occurrence_list()) {
        let original = collect(stream_of(&pairs));
        let mapped = collect(stream_of(&pairs).map(|n| n));

        prop_assert_eq!(mapped, original);
    }

    /// Property: map fusion — map(f).map(g) == map(g ∘ f)
    #[test]
    fn prop_map_fusion(pairs in occurrence_list()) {
        let f = |n: i64| n.wrapping_mul(3).wrapping_add(1);
        let g = |n: i64| n / 2;

        let chained = collect(stream_of(&pairs).map(f).map(g));
        let fused = collect(stream_of(&pairs).map(move |n| g(f(n))));

        prop_assert_eq!(chained, fused);
    }

    /// Property: filtering twice with the same predicate is filtering once
    #[test]
    fn prop_filter_idempotent(pairs in occurrence_list()) {
        let p = |n: &i64| n % 3 == 0;

        let once = collect(stream_of(&pairs).filter(p));
        let twice = collect(stream_of(&pairs).filter(p).filter(p));

        prop_assert_eq!(twice, once);
    }

    /// Property: merge combine-symmetry — merging (A, B) with
    /// combine(a, b) equals merging (B, A) with combine flipped
    #[test]
    fn prop_merge_combine_symmetry(
        pairs_a in occurrence_list(),
        pairs_b in occurrence_list(),
    ) {
        let merged_ab = collect(
            stream_of(&pairs_a)
                .merge_with(stream_of(&pairs_b), |a, b| a.wrapping_sub(b)),
        );
        let merged_ba = collect(
            stream_of(&pairs_b)
                .merge_with(stream_of(&pairs_a), |b, a| a.wrapping_sub(b)),
        );

        prop_assert_eq!(merged_ab, merged_ba);
    }

    /// Property: merge output is strictly monotonic and loses no
    /// occurrence times
    #[test]
    fn prop_merge_preserves_and_orders_times(
        pairs_a in occurrence_list(),
        pairs_b in occurrence_list(),
    ) {
        let merged = collect(
            stream_of(&pairs_a).merge_with(stream_of(&pairs_b), |a, _| a),
        );

        let times: Vec<Time> = merged.iter().map(|o| o.time).collect();
        for window in times.windows(2) {
            prop_assert!(window[0] < window[1]);
        }

        let mut expected: Vec<Time> = pairs_a
            .iter()
            .chain(pairs_b.iter())
            .map(|&(t, _)| Time(t))
            .collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(times, expected);
    }
}
