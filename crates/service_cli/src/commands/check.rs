//! Check command implementation
//!
//! Validates a tree description and prints its shape.

use tracing::info;
use variate_models::{Distribution, Variate};

use crate::config::CliConfig;
use crate::Result;

/// Run the check command
pub fn run(tree: &str, config: &CliConfig) -> Result<()> {
    info!("Checking tree description...");
    info!("  Tree: {}", tree);

    let distribution = super::load(tree)?;
    config.sampling()?;

    println!("OK: {} nodes, depth {}", distribution.node_count(), distribution.depth());
    print_node(&distribution, 0, None);

    info!("Check complete");
    Ok(())
}

fn print_node(distribution: &Distribution, indent: usize, weight: Option<f64>) {
    let pad = "  ".repeat(indent);
    let weight = weight.map(|w| format!("{:.4} ", w)).unwrap_or_default();
    let bounds = match (distribution.min(), distribution.max()) {
        (None, None) => String::new(),
        (min, max) => format!(
            " in [{}, {}]",
            min.map_or("-".to_string(), |v| v.to_string()),
            max.map_or("-".to_string(), |v| v.to_string())
        ),
    };

    let detail = match distribution.variate() {
        Variate::Uniform(v) => format!("uniform({}, {})", v.start(), v.finish()),
        Variate::Discrete(v) => format!("discrete({:?})", v.values()),
        Variate::Normal(v) => format!("normal({}, {})", v.mean(), v.standard_deviation()),
        Variate::Exponential(v) => format!("exponential({})", v.lambda()),
        Variate::Mixture(m) => format!("mixture({} parts)", m.len()),
    };
    println!("{}{}{}{}", pad, weight, detail, bounds);

    if let Variate::Mixture(m) = distribution.variate() {
        for part in m.parts() {
            print_node(part.distribution(), indent + 1, Some(part.weight()));
        }
    }
}
