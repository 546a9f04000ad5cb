//! Property tests for the UCB1 selector.

use adsel::{run_ucb1, DenseTable};
use proptest::prelude::*;

/// A rectangular reward table with values in [0, 1], plus a round budget and
/// arm count that fit inside it.
fn table_and_budget() -> impl Strategy<Value = (DenseTable, usize, usize)> {
    (1usize..12, 1usize..40).prop_flat_map(|(arms, rounds)| {
        prop::collection::vec(
            prop::collection::vec(0.0f64..=1.0, arms),
            rounds..=rounds,
        )
        .prop_map(move |rows| {
            let t = DenseTable::from_rows(rows).expect("rectangular by construction");
            (t, rounds, arms)
        })
    })
}

proptest! {
    /// Two independent runs over the same inputs are byte-identical.
    #[test]
    fn runs_are_deterministic((table, rounds, arms) in table_and_budget()) {
        let a = run_ucb1(&table, rounds, arms).unwrap();
        let b = run_ucb1(&table, rounds, arms).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Total reward equals the sum of per-arm reward sums, and pulls sum to
    /// the round budget.
    #[test]
    fn reward_and_pulls_are_conserved((table, rounds, arms) in table_and_budget()) {
        let r = run_ucb1(&table, rounds, arms).unwrap();
        let sum: f64 = r.stats.iter().map(|s| s.reward_sum).sum();
        prop_assert!((r.total_reward - sum).abs() < 1e-9,
            "total {} vs per-arm sum {}", r.total_reward, sum);
        let pulls: u64 = r.stats.iter().map(|s| s.pulls).sum();
        prop_assert_eq!(pulls, rounds as u64);
    }

    /// Every trace entry is a valid arm index and the trace covers all rounds.
    #[test]
    fn trace_entries_are_in_range((table, rounds, arms) in table_and_budget()) {
        let r = run_ucb1(&table, rounds, arms).unwrap();
        prop_assert_eq!(r.trace.len(), rounds);
        prop_assert!(r.trace.iter().all(|&a| a < arms));
    }

    /// With R >= A, every arm appears in the first A trace entries: unsampled
    /// arms always outscore sampled ones.
    #[test]
    fn cold_start_covers_every_arm((table, rounds, arms) in table_and_budget()) {
        prop_assume!(rounds >= arms);
        let r = run_ucb1(&table, rounds, arms).unwrap();
        let head = &r.trace[..arms];
        for arm in 0..arms {
            prop_assert!(head.contains(&arm), "arm {arm} missing from {head:?}");
        }
    }

    /// The trace and the final statistics agree on pull counts.
    #[test]
    fn trace_matches_pull_counts((table, rounds, arms) in table_and_budget()) {
        let r = run_ucb1(&table, rounds, arms).unwrap();
        for arm in 0..arms {
            let in_trace = r.trace.iter().filter(|&&a| a == arm).count() as u64;
            prop_assert_eq!(in_trace, r.stats[arm].pulls);
        }
    }
}
