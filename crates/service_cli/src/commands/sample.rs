//! Sample command implementation
//!
//! Prints samples drawn from a tree description, one per line.

use std::io::Write;

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Run the sample command
pub fn run(tree: &str, count: Option<usize>, seed: Option<u64>, config: &CliConfig) -> Result<()> {
    let count = count.unwrap_or(config.default_samples);
    info!("Starting sampling...");
    info!("  Tree: {}", tree);
    info!("  Samples: {}", count);

    let distribution = super::load(tree)?;
    let sampling = config.sampling()?;
    let mut source = super::source(seed, config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for _ in 0..count {
        let value = distribution.sample_with(&mut source, &sampling)?;
        writeln!(out, "{}", value)?;
    }

    info!("Sampling complete");
    Ok(())
}
