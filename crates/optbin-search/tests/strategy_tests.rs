//! Cross-strategy behaviour of the bin-edge searches

use approx::assert_relative_eq;
use optbin_core::{BinEdges, Error, Sample};
use optbin_histogram::BinnedSums;
use optbin_search::{
    GrowPruneSearch, LogLikelihood, MergeSearch, Score, Scorer, SearchStrategy, StepwiseSearch,
    Strategy,
};
use proptest::prelude::*;
use rand::prelude::*;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

fn uniform_ten() -> (Vec<f64>, Vec<f64>) {
    ((0..10).map(f64::from).collect(), vec![1.0; 10])
}

/// Dense cluster on the left, sparse tail on the right
fn skewed_sample(seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let dense = Normal::new(-2.0, 0.3).unwrap();
    let mut x: Vec<f64> = (0..800).map(|_| dense.sample(&mut rng)).collect();
    x.extend((0..200).map(|_| rng.gen_range(0.0..10.0)));
    let y = vec![1.0; x.len()];
    (x, y)
}

#[test]
fn test_uniform_data_all_strategies_stay_coarse() {
    let (x, y) = uniform_ten();
    let sample = Sample::new(&x, &y).unwrap();
    let scorer = LogLikelihood::new(10.0).unwrap();

    for strategy in Strategy::ALL {
        let outcome = strategy.search(4, &sample, &scorer).unwrap();
        let n_bins = outcome.edges.n_bins();
        assert!(n_bins <= 3, "{strategy} produced {n_bins} bins");
        assert_eq!(outcome.edges.first(), 0.0);
        assert_eq!(outcome.edges.last(), 9.0);
        assert_eq!(Score::Value(outcome.score), scorer.score(&outcome.edges, &sample));
    }
}

#[test]
fn test_uniform_data_expected_edges() {
    let (x, y) = uniform_ten();
    let sample = Sample::new(&x, &y).unwrap();
    let scorer = LogLikelihood::new(10.0).unwrap();

    let stepwise = StepwiseSearch::new(4).search(&sample, &scorer).unwrap();
    assert_eq!(stepwise.edges.as_slice(), &[0.0, 4.5, 9.0]);
    assert_relative_eq!(stepwise.score, -22.323158971474896, max_relative = 1e-10);

    let merge = MergeSearch::new(4).search(&sample, &scorer).unwrap();
    assert_eq!(merge.edges.as_slice(), &[0.0, 2.25, 6.75, 9.0]);
    assert_relative_eq!(merge.score, -22.34827001712538, max_relative = 1e-10);

    let grow_prune = GrowPruneSearch::new(4).search(&sample, &scorer).unwrap();
    assert_eq!(grow_prune.edges.as_slice(), &[0.0, 9.0]);
    assert_relative_eq!(grow_prune.score, -21.972245773362197, max_relative = 1e-10);
}

#[test]
fn test_monotonic_degeneracy_for_growing_bin_count() {
    // Two isolated points: any equal-width grid finer than 2 bins leaves an
    // empty interior bin, and with a < 1 an empty bin is degenerate
    let sample = Sample::new(&[0.0, 100.0], &[1.0, 1.0]).unwrap();
    let scorer = LogLikelihood::new(0.5).unwrap();

    let degenerate: Vec<bool> = (2..=40)
        .map(|k| {
            let edges = BinEdges::equal_width(0.0, 100.0, k).unwrap();
            scorer.score(&edges, &sample).is_degenerate()
        })
        .collect();

    let first = degenerate.iter().position(|&d| d).unwrap();
    assert_eq!(first, 1); // k = 3
    assert!(degenerate[first..].iter().all(|&d| d));
}

#[test]
fn test_degenerate_everywhere_fails_for_every_strategy() {
    let sample = Sample::new(&[0.0, 0.5, 1.0], &[0.0, 0.0, 0.0]).unwrap();
    let scorer = LogLikelihood::new(0.25).unwrap();

    for strategy in Strategy::ALL {
        match strategy.search(6, &sample, &scorer) {
            Err(Error::DegenerateSearch { strategy: name, candidates }) => {
                assert_eq!(name, strategy.name());
                assert!(candidates >= 1);
            }
            other => panic!("{strategy} should fail, got {other:?}"),
        }
    }
}

#[test]
fn test_searches_are_deterministic() {
    let (x, y) = skewed_sample(11);
    let sample = Sample::new(&x, &y).unwrap();
    let scorer = LogLikelihood::new(10.0).unwrap();

    for strategy in Strategy::ALL {
        let first = strategy.search(30, &sample, &scorer).unwrap();
        let second = strategy.search(30, &sample, &scorer).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_adaptive_strategies_refine_dense_region() {
    let (x, y) = skewed_sample(3);
    let sample = Sample::new(&x, &y).unwrap();
    let scorer = LogLikelihood::new(10.0).unwrap();

    for strategy in [Strategy::Merge, Strategy::GrowPrune] {
        let outcome = strategy.search(40, &sample, &scorer).unwrap();
        let widths: Vec<f64> = outcome.edges.widths().collect();
        let narrowest = widths.iter().copied().fold(f64::INFINITY, f64::min);
        let widest = widths.iter().copied().fold(0.0, f64::max);

        assert!(outcome.edges.n_bins() >= 2, "{strategy} found no structure");
        assert!(widest > narrowest, "{strategy} kept equal-width bins");
    }
}

#[test]
fn test_merge_never_lowers_the_starting_score() {
    let (x, y) = skewed_sample(5);
    let sample = Sample::new(&x, &y).unwrap();
    let scorer = LogLikelihood::new(5.0).unwrap();

    let start = BinEdges::equal_width(sample.min_x(), sample.max_x(), 25).unwrap();
    let start_score = scorer.score(&start, &sample);
    let outcome = MergeSearch::new(25).search(&sample, &scorer).unwrap();

    assert!(Score::Value(outcome.score) >= start_score);
}

#[test]
fn test_binned_scoring_matches_direct_scoring() {
    let (x, y) = skewed_sample(9);
    let sample = Sample::new(&x, &y).unwrap();
    let scorer = LogLikelihood::new(3.0).unwrap();

    let edges = BinEdges::equal_width(sample.min_x(), sample.max_x(), 12).unwrap();
    let sums = BinnedSums::from_sample(&edges, &sample);
    for index in edges.interior_indices() {
        let merged = edges.without(index).unwrap();
        let fast = scorer.score_binned(&merged, &sums.merged(index).unwrap());
        let direct = scorer.score(&merged, &sample);
        match (fast, direct) {
            (Score::Value(a), Score::Value(b)) => assert_relative_eq!(a, b, max_relative = 1e-12),
            (a, b) => assert_eq!(a, b),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_outcome_edges_span_data(
        x in prop::collection::vec(-50.0..50.0f64, 2..60),
        max_bins in 3usize..15,
        prior in 1.0..20.0f64,
    ) {
        prop_assume!(x.iter().any(|&v| v != x[0]));
        let y = vec![1.0; x.len()];
        let sample = Sample::new(&x, &y).unwrap();
        let scorer = LogLikelihood::new(prior).unwrap();

        for strategy in Strategy::ALL {
            let outcome = strategy.search(max_bins, &sample, &scorer).unwrap();
            let edges = outcome.edges.as_slice();
            prop_assert!(edges.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(outcome.edges.first(), sample.min_x());
            prop_assert_eq!(outcome.edges.last(), sample.max_x());
            prop_assert!(outcome.edges.n_bins() <= max_bins);
        }
    }
}
