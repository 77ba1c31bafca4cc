pub mod analyzer;
pub mod target;
pub mod xor;

pub use analyzer::{run, DifferenceAnalyzer, Trace, DEFAULT_COUNT};
pub use target::Target;

#[cfg(test)]
mod generic_tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::analysis::*;
    use crate::analysis::xor::xor_sequences;
    use crate::stats::{distribution, is_all_ones_mask, most_common};

    #[test]
    fn test_increment_by_one() {
        let trace = run(5, 1i32, target::increment(1i32)).unwrap();
        assert_eq!(trace.inputs(),    &[0, 1, 2, 3, 4]);
        assert_eq!(trace.results(),   &[1, 2, 3, 4, 5]);
        assert_eq!(trace.perturbed(), &[2, 1, 4, 3, 6]);
        assert_eq!(trace.diffs(),     &[3, 3, 7, 7, 3]);
    }

    #[test]
    fn test_no_inputs() {
        let (diffs, results) = run(0, 1i32, target::increment(1i32)).unwrap().into_streams();
        assert!(diffs.is_empty());
        assert!(results.is_empty());
    }

    #[test]
    fn test_zero_delta() {
        // Every input collapses to 0 when the step is zero, but the
        // difference is what matters
        let trace = run(50, 0i32, target::square::<i32>()).unwrap();
        assert_eq!(trace.len(), 50);
        assert!(trace.diffs().iter().all(|&d| d == 0 ));
    }

    #[test]
    fn test_identity_leaks_delta() {
        let trace = run(1000, 1i32, target::identity::<i32>()).unwrap();
        assert!(trace.diffs().iter().all(|&d| d == 1 ));
    }

    #[test]
    fn test_repeated_runs_agree() {
        let analyzer = DifferenceAnalyzer::<i32>::default();
        let first = analyzer.run(target::increment(1i32)).unwrap();
        let second = analyzer.run(target::increment(1i32)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lengths_and_self_consistency() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let n: usize = rng.gen_range(0..300);
            let delta: i64 = rng.gen_range(-64..64);
            let a: i64 = rng.gen_range(-5..5);
            let b: i64 = rng.gen_range(-100..100);
            let trace = run(n, delta, move |x: i64| a * x * x + b).unwrap();

            assert_eq!(trace.len(), n);
            assert_eq!(trace.results().len(), n);
            assert_eq!(trace.perturbed().len(), n);
            assert_eq!(trace.diffs().len(), n);

            for (_, result, perturbed, diff) in trace.steps() {
                assert_eq!(diff, result ^ perturbed);
                assert_eq!(result, diff ^ perturbed);
            }
            assert_eq!(xor_sequences(trace.diffs(), trace.perturbed()), trace.results());
        }
    }

    #[test]
    fn test_increment_carry_signature() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let c: u64 = rng.gen_range(0..1000);
            let trace = run(512, 1u64, target::increment(c)).unwrap();
            assert!(trace.diffs().iter().all(|&d| is_all_ones_mask(d) ), "c = {c}");
        }
    }

    #[test]
    fn test_increment_by_one_distribution() {
        let trace = DifferenceAnalyzer::<i32>::default()
            .run(target::increment(1i32))
            .unwrap();
        let dist = distribution(trace.diffs());
        assert_eq!(dist.values().sum::<usize>(), DEFAULT_COUNT);
        assert_eq!(most_common(&dist), Some((3, DEFAULT_COUNT / 2)));
        assert_eq!(dist.get(&7), Some(&(DEFAULT_COUNT / 4)));
        // Each longer carry chain is rarer than the one before
        let counts: Vec<usize> = dist.values().copied().collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1] ));
    }

    #[test]
    fn test_square_is_less_predictable() {
        let linear = run(256, 1u32, target::increment(1u32)).unwrap();
        let quadratic = run(256, 1u32, target::square::<u32>()).unwrap();
        assert!(distribution(quadratic.diffs()).len() > distribution(linear.diffs()).len());
    }
}
