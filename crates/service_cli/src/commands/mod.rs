//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod histogram;
pub mod sample;

use std::path::Path;

use tracing::info;
use variate_core::rng::SeededSource;
use variate_models::tree::load_tree;
use variate_models::Distribution;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Load and build the tree description at `path`
pub(crate) fn load(path: &str) -> Result<Distribution> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    let tree = load_tree(path)?;
    info!(
        "Loaded {} tree from {} ({} nodes)",
        tree.variate().kind_name(),
        path,
        tree.node_count()
    );
    Ok(tree)
}

/// Seeded source from the flag, the config file, or fresh entropy, in that order
pub(crate) fn source(seed: Option<u64>, config: &CliConfig) -> SeededSource {
    let source = match seed.or(config.seed) {
        Some(seed) => SeededSource::from_seed(seed),
        None => SeededSource::from_entropy(),
    };
    info!("  Seed: {}", source.seed());
    source
}
