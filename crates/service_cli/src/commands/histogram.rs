//! Histogram command implementation
//!
//! Samples a tree description and prints an equal-width histogram spanning
//! the observed range, plus the share of exact zeros (the usual "no payout"
//! branch).

use tracing::info;
use variate_core::stats::EqualWidthHistogram;

use crate::config::CliConfig;
use crate::{CliError, Result};

const BAR_WIDTH: usize = 40;

/// Run the histogram command
pub fn run(
    tree: &str,
    count: Option<usize>,
    buckets: usize,
    seed: Option<u64>,
    config: &CliConfig,
) -> Result<()> {
    if buckets == 0 {
        return Err(CliError::InvalidArgument(
            "bucket count must be greater than 0".to_string(),
        ));
    }
    let count = count.unwrap_or(config.default_samples);
    info!("Starting histogram...");
    info!("  Tree: {}", tree);
    info!("  Samples: {}", count);
    info!("  Buckets: {}", buckets);

    let distribution = super::load(tree)?;
    let sampling = config.sampling()?;
    let mut source = super::source(seed, config);

    let samples = distribution.sample_n_with(&mut source, count, &sampling)?;
    let finite: Vec<f64> = samples.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return Err(CliError::InvalidArgument(
            "no finite samples to bucket".to_string(),
        ));
    }

    let low = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let high = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // widen a degenerate or closed range so the maximum lands in the last bucket
    let high = if high > low {
        high + (high - low) * 1e-9
    } else {
        low + 1.0
    };

    let mut histogram = EqualWidthHistogram::new(low, high, buckets)?;
    histogram.record_all(finite.iter().copied());

    let zeros = samples.iter().filter(|&&v| v == 0.0).count();
    let mean = finite.iter().sum::<f64>() / finite.len() as f64;

    println!();
    println!("samples: {}  mean: {:.6}  zeros: {:.4}", count, mean, zeros as f64 / count as f64);
    if finite.len() < samples.len() {
        println!("non-finite samples skipped: {}", samples.len() - finite.len());
    }

    let peak = histogram.counts().iter().copied().max().unwrap_or(0).max(1);
    for (index, (&bucket, frequency)) in histogram
        .counts()
        .iter()
        .zip(histogram.frequencies())
        .enumerate()
    {
        let bar = "#".repeat(bucket * BAR_WIDTH / peak);
        println!(
            "{:>12.4} | {:<width$} {:.4}",
            histogram.bucket_start(index),
            bar,
            frequency,
            width = BAR_WIDTH
        );
    }

    info!("Histogram complete");
    Ok(())
}
