//! Statistical properties of sampled distributions.
//!
//! Every test draws 10,000 samples from a seeded source and scores the
//! empirical histogram against the theoretical one with `error_level`.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Distribution as _;
use variate_core::rng::SeededSource;
use variate_core::stats::{error_level, normal_bucket_masses, EqualWidthHistogram, Histogram};
use variate_models::{Distribution, MixtureDistribution};

const TOLERANCE_LEVEL: f64 = 0.05;
const TEST_COUNT: usize = 10_000;

fn frequencies_of(distribution: &Distribution, seed: u64, checkpoints: Vec<f64>) -> Vec<f64> {
    let mut source = SeededSource::from_seed(seed);
    let mut histogram = Histogram::with_checkpoints(checkpoints).unwrap();
    for _ in 0..TEST_COUNT {
        histogram.record(distribution.sample(&mut source).unwrap());
    }
    histogram.frequencies()
}

fn assert_close(expected: &[f64], observed: &[f64], tolerance: f64) {
    let error = error_level(expected, observed).unwrap();
    assert!(
        error < tolerance,
        "error level {} exceeds {}: expected {:?}, observed {:?}",
        error,
        tolerance,
        expected,
        observed
    );
}

#[test]
fn test_uniform_by_ten_checkpoints() {
    let (start, finish) = (3.0, 8.0);
    let uniform = Distribution::uniform(start, finish).unwrap();
    let buckets = 10;

    let mut source = SeededSource::from_seed(11);
    let mut histogram = EqualWidthHistogram::new(start, finish, buckets).unwrap();
    for _ in 0..TEST_COUNT {
        histogram.record(uniform.sample(&mut source).unwrap());
    }

    assert_eq!(histogram.outside(), 0);
    assert_close(&vec![1.0 / buckets as f64; buckets], &histogram.frequencies(), TOLERANCE_LEVEL);
}

#[test]
fn test_discrete_equal_frequencies() {
    let values = vec![0.0, 1.0, 2.0, 3.0, 4.0];
    let k = values.len();
    let discrete = Distribution::discrete(values.clone()).unwrap();

    let observed = frequencies_of(&discrete, 12, values);
    assert_close(&vec![1.0 / k as f64; k], &observed, TOLERANCE_LEVEL);
}

#[test]
fn test_discrete_duplicates_keep_their_mass() {
    let discrete = Distribution::discrete(vec![0.0, 0.0, 1.0]).unwrap();
    let observed = frequencies_of(&discrete, 13, vec![0.0, 1.0]);
    assert_close(&[2.0 / 3.0, 1.0 / 3.0], &observed, TOLERANCE_LEVEL);
}

#[test]
fn test_standard_normal_checkpoints() {
    let normal = Distribution::normal(0.0, 1.0).unwrap();
    let checkpoints = vec![-5.0, -2.5, -1.0, -0.5, 0.0, 0.5, 1.0, 2.5, 5.0, f64::INFINITY];

    let expected = normal_bucket_masses(&checkpoints);
    let observed = frequencies_of(&normal, 14, checkpoints);
    assert_close(&expected, &observed, TOLERANCE_LEVEL);
}

#[test]
fn test_exponential_cdf() {
    let lambda = 0.5;
    let exponential = Distribution::exponential(lambda).unwrap();
    let checkpoints: Vec<f64> = (0..=8).map(|i| i as f64 * 0.5).collect();

    let mut source = SeededSource::from_seed(15);
    let samples = exponential.sample_n(&mut source, TEST_COUNT).unwrap();

    let expected: Vec<f64> = checkpoints
        .iter()
        .map(|x| 1.0 - (-lambda * x).exp())
        .collect();
    let observed: Vec<f64> = checkpoints
        .iter()
        .map(|&x| samples.iter().filter(|&&s| s <= x).count() as f64 / TEST_COUNT as f64)
        .collect();
    assert_close(&expected, &observed, TOLERANCE_LEVEL);
}

#[test]
fn test_payout_mixture() {
    let bounded_normal = Distribution::normal(1.0, 0.3_f64.sqrt())
        .unwrap()
        .with_min(0.5)
        .unwrap()
        .with_max(1.5)
        .unwrap();
    let payout = Distribution::from(
        MixtureDistribution::from_pairs([
            (0.7, Distribution::discrete(vec![0.0]).unwrap()),
            (0.25, bounded_normal),
            (0.05, Distribution::uniform(2.0, 5.0).unwrap()),
        ])
        .unwrap(),
    );

    let mut source = SeededSource::from_seed(16);
    let samples = payout.sample_n(&mut source, TEST_COUNT).unwrap();
    let fraction = |f: &dyn Fn(f64) -> bool| {
        samples.iter().filter(|&&s| f(s)).count() as f64 / TEST_COUNT as f64
    };

    let zero = fraction(&|s| s == 0.0);
    let middle = fraction(&|s| (0.5..=1.5).contains(&s));
    let high = fraction(&|s| (2.0..=5.0).contains(&s));

    assert!((zero - 0.70).abs() < TOLERANCE_LEVEL, "zero fraction {}", zero);
    assert!((middle - 0.25).abs() < TOLERANCE_LEVEL, "middle fraction {}", middle);
    assert!((high - 0.05).abs() < TOLERANCE_LEVEL, "high fraction {}", high);
    assert!((zero + middle + high - 1.0).abs() < 1e-12);
}

#[test]
fn test_bounded_discrete_always_middle() {
    let mut discrete = Distribution::discrete(vec![0.0, 1.0, 2.0]).unwrap();
    discrete.set_min(0.5).unwrap();
    discrete.set_max(1.5).unwrap();

    let mut source = SeededSource::from_seed(17);
    for _ in 0..TEST_COUNT {
        assert_eq!(discrete.sample(&mut source).unwrap(), 1.0);
    }
}

#[test]
fn test_nested_mixture_multiplies_branch_probabilities() {
    let inner = MixtureDistribution::from_pairs([
        (0.4, Distribution::discrete(vec![1.0]).unwrap()),
        (0.6, Distribution::discrete(vec![2.0]).unwrap()),
    ])
    .unwrap();
    let outer = Distribution::from(
        MixtureDistribution::from_pairs([
            (0.5, Distribution::from(inner)),
            (0.5, Distribution::discrete(vec![3.0]).unwrap()),
        ])
        .unwrap(),
    );

    let observed = frequencies_of(&outer, 18, vec![1.0, 2.0, 3.0]);
    assert_close(&[0.5 * 0.4, 0.5 * 0.6, 0.5], &observed, TOLERANCE_LEVEL);
}

#[test]
fn test_flat_and_nested_mixtures_agree() {
    let leaf = |v: f64| Distribution::discrete(vec![v]).unwrap();
    let flat = Distribution::from(
        MixtureDistribution::from_pairs([(0.2, leaf(1.0)), (0.3, leaf(2.0)), (0.5, leaf(3.0))])
            .unwrap(),
    );
    let nested = Distribution::from(
        MixtureDistribution::from_pairs([
            (
                0.5,
                Distribution::from(
                    MixtureDistribution::from_pairs([(0.4, leaf(1.0)), (0.6, leaf(2.0))]).unwrap(),
                ),
            ),
            (0.5, leaf(3.0)),
        ])
        .unwrap(),
    );

    let checkpoints = vec![1.0, 2.0, 3.0];
    let flat_freq = frequencies_of(&flat, 19, checkpoints.clone());
    let nested_freq = frequencies_of(&nested, 20, checkpoints);
    assert_close(&flat_freq, &nested_freq, 2.0 * TOLERANCE_LEVEL);
}

#[test]
fn test_exponential_matches_reference_sampler() {
    let lambda = 0.5;
    let ours = Distribution::exponential(lambda).unwrap();
    let checkpoints = vec![0.5, 1.0, 2.0, 4.0, f64::INFINITY];

    let reference = rand_distr::Exp::new(lambda).unwrap();
    let mut rng = StdRng::seed_from_u64(21);
    let mut histogram = Histogram::with_checkpoints(checkpoints.clone()).unwrap();
    histogram.record_all((0..TEST_COUNT).map(|_| reference.sample(&mut rng)));

    let observed = frequencies_of(&ours, 22, checkpoints);
    assert_close(&histogram.frequencies(), &observed, 2.0 * TOLERANCE_LEVEL);
}

#[test]
fn test_normal_matches_reference_sampler() {
    let ours = Distribution::normal(2.0, 3.0).unwrap();
    let checkpoints = vec![-4.0, -1.0, 0.5, 2.0, 3.5, 5.0, 8.0, f64::INFINITY];

    let reference = rand_distr::Normal::new(2.0, 3.0).unwrap();
    let mut rng = StdRng::seed_from_u64(23);
    let mut histogram = Histogram::with_checkpoints(checkpoints.clone()).unwrap();
    histogram.record_all((0..TEST_COUNT).map(|_| reference.sample(&mut rng)));

    let observed = frequencies_of(&ours, 24, checkpoints);
    assert_close(&histogram.frequencies(), &observed, 2.0 * TOLERANCE_LEVEL);
}
