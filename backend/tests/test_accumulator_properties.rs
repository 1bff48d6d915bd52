//! Property tests for accumulator invariants
//!
//! Arbitrary seeds and batch-size sequences must never break the counting
//! or alignment rules.

use monte_carlo_pi_core_rs::{Accumulator, AccumulatorConfig};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Batch(usize),
    Reset,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => (0usize..200).prop_map(Op::Batch),
        1 => Just(Op::Reset),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn batch_grows_total_by_exactly_n(seed in any::<u64>(), sizes in prop::collection::vec(0usize..300, 1..20)) {
        let mut acc = Accumulator::new(AccumulatorConfig { rng_seed: seed });

        for n in sizes {
            let total_before = acc.total_count();
            let inside_before = acc.inside_count();

            let result = acc.accumulate_batch(n);
            let new_inside = result
                .samples
                .iter()
                .filter(|s| s.x() * s.x() + s.y() * s.y() <= 1.0)
                .count() as u64;

            prop_assert_eq!(acc.total_count(), total_before + n as u64);
            prop_assert_eq!(acc.inside_count(), inside_before + new_inside);
        }
    }

    #[test]
    fn invariants_hold_across_operation_sequences(seed in any::<u64>(), ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut acc = Accumulator::new(AccumulatorConfig { rng_seed: seed });
        let mut batches_since_reset = 0usize;

        for op in ops {
            match op {
                Op::Batch(n) => {
                    acc.accumulate_batch(n);
                    batches_since_reset += 1;
                }
                Op::Reset => {
                    acc.reset();
                    batches_since_reset = 0;
                    prop_assert_eq!(acc.current_estimate(), 0.0);
                }
            }

            prop_assert!(acc.inside_count() <= acc.total_count());
            prop_assert_eq!(acc.total_count(), acc.samples().len() as u64);

            let history = acc.convergence_history();
            prop_assert_eq!(history.batch_indices.len(), batches_since_reset);
            prop_assert_eq!(history.estimates.len(), batches_since_reset);
            prop_assert_eq!(history.errors.len(), batches_since_reset);
            prop_assert_eq!(acc.state().computation_times().len(), batches_since_reset);
        }
    }

    #[test]
    fn estimate_is_ratio_and_bounded(seed in any::<u64>(), n in 1usize..2000) {
        let mut acc = Accumulator::new(AccumulatorConfig { rng_seed: seed });
        acc.accumulate_batch(n);

        let expected = 4.0 * acc.inside_count() as f64 / acc.total_count() as f64;
        prop_assert_eq!(acc.current_estimate(), expected);
        prop_assert!((0.0..=4.0).contains(&acc.current_estimate()));
    }

    #[test]
    fn seeded_runs_are_reproducible(seed in any::<u64>(), sizes in prop::collection::vec(0usize..100, 1..10)) {
        let mut a = Accumulator::new(AccumulatorConfig { rng_seed: seed });
        let mut b = Accumulator::new(AccumulatorConfig { rng_seed: seed });

        for n in sizes {
            let ra = a.accumulate_batch(n);
            let rb = b.accumulate_batch(n);

            prop_assert_eq!(ra.samples, rb.samples);
            prop_assert_eq!(ra.pi_estimate, rb.pi_estimate);
            prop_assert_eq!(ra.error, rb.error);
        }
    }

    #[test]
    fn negative_counts_always_rejected(seed in any::<u64>(), count in i64::MIN..0) {
        let mut acc = Accumulator::new(AccumulatorConfig { rng_seed: seed });
        prop_assert!(acc.try_accumulate_batch(count).is_err());
        prop_assert_eq!(acc.batch_count(), 0);
    }
}
