// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Cell Laws
//!
//! Verifies the left-exclusive value boundary and the change-stream
//! threading invariant over arbitrary update sequences.

use frp_semantics::{Cell, EventStream, Occurrence, Time};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Update sequences with strictly increasing times, gaps ≥ 0.1
fn update_list() -> impl Strategy<Value = Vec<(f64, i64)>> {
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

fn cell_of(baseline: i64, updates: &[(f64, i64)]) -> Cell<i64> {
    Cell::new(
        baseline,
        EventStream::from_vec(
            updates
                .iter()
                .map(|&(t, v)| Occurrence::new(Time(t), v))
                .collect(),
        ),
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: the boundary law — value.at(t_k) is still the previous
    /// value, and value.at(t_k + ε) is the k-th update's value
    #[test]
    fn prop_value_boundary_law(baseline in any::<i64>(), updates in update_list()) {
        let cell = cell_of(baseline, &updates);
        let value = cell.value();

        // Before (and at) the first update time the baseline holds.
        prop_assert_eq!(value.at(Time(0.0)), baseline);
        if let Some(&(first_time, _)) = updates.first() {
            prop_assert_eq!(value.at(Time(first_time)), baseline);
        }

        let mut previous = baseline;
        for &(time, update_value) in &updates {
            // Exactly at the update instant: not yet visible.
            prop_assert_eq!(value.at(Time(time)), previous);
            // Just after (gaps are ≥ 0.1, so 0.05 stays inside): visible.
            prop_assert_eq!(value.at(Time(time + 0.05)), update_value);
            previous = update_value;
        }

        // Beyond the final update the last value holds forever.
        if let Some(&(last_time, last_value)) = updates.last() {
            prop_assert_eq!(value.at(Time(last_time + 1000.0)), last_value);
        }
    }

    /// Property: changes emits exactly one transition per update, with
    /// old values threaded from the baseline through every update
    #[test]
    fn prop_changes_thread_old_values(baseline in any::<i64>(), updates in update_list()) {
        let cell = cell_of(baseline, &updates);

        let changes: Vec<_> = cell.changes().occurrences().collect();
        prop_assert_eq!(changes.len(), updates.len());

        let mut previous = baseline;
        for (change, &(time, update_value)) in changes.iter().zip(&updates) {
            prop_assert_eq!(change.time, Time(time));
            prop_assert_eq!(change.value.old_value, previous);
            prop_assert_eq!(change.value.new_value, update_value);
            previous = update_value;
        }
    }

    /// Property: mapping a cell commutes with deriving its value signal
    #[test]
    fn prop_map_commutes_with_value(baseline in any::<i64>(), updates in update_list()) {
        let cell = cell_of(baseline, &updates);
        let f = |n: i64| n.wrapping_mul(7).wrapping_sub(5);

        let mapped_value = cell.clone().map(f).value();
        let value_mapped = cell.value().map(f);

        for &(time, _) in &updates {
            prop_assert_eq!(
                mapped_value.at(Time(time + 0.05)),
                value_mapped.at(Time(time + 0.05))
            );
        }
        prop_assert_eq!(mapped_value.at(Time(0.0)), value_mapped.at(Time(0.0)));
    }
}
