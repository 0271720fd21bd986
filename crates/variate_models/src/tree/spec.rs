//! Serde description of a distribution tree.

use serde::{Deserialize, Serialize};
use tracing::debug;
use variate_core::types::VariateError;

use super::error::TreeError;
use crate::distribution::{Distribution, Variate};
use crate::mixture::{MixtureDistribution, MixturePart};

/// Description of one node: its kind, parameters and optional bounds.
///
/// # Examples
///
/// ```
/// use variate_models::tree::DistributionSpec;
///
/// let spec = DistributionSpec::from_toml_str(r#"
///     kind = "mixture"
///
///     [[parts]]
///     weight = 0.7
///     distribution = { kind = "discrete", values = [0.0] }
///
///     [[parts]]
///     weight = 0.3
///     distribution = { kind = "uniform", start = 2.0, finish = 5.0, min = 3.0 }
/// "#).unwrap();
///
/// let payout = spec.build().unwrap();
/// assert_eq!(payout.node_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionSpec {
    /// Kind and parameters.
    #[serde(flatten)]
    pub variate: VariateSpec,
    /// Optional lower rejection bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Optional upper rejection bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// Kind-specific parameters, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VariateSpec {
    /// Uniform over `[start, finish)`
    Uniform {
        /// Start of the range
        start: f64,
        /// End of the range
        finish: f64,
    },
    /// Equal-probability pick from `values`
    Discrete {
        /// Outcomes in bucket order
        values: Vec<f64>,
    },
    /// Normal with the given mean and standard deviation
    Normal {
        /// Mean
        mean: f64,
        /// Standard deviation
        standard_deviation: f64,
    },
    /// Exponential with rate `lambda`
    Exponential {
        /// Rate
        lambda: f64,
    },
    /// Weighted choice over child nodes
    Mixture {
        /// Parts in selection order
        parts: Vec<PartSpec>,
    },
}

/// Description of one mixture part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartSpec {
    /// Selection probability
    pub weight: f64,
    /// Child node
    pub distribution: DistributionSpec,
}

impl DistributionSpec {
    /// Parses a description from TOML.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Parse` on malformed TOML or unknown kinds.
    pub fn from_toml_str(input: &str) -> Result<Self, TreeError> {
        Ok(toml::from_str(input)?)
    }

    /// Builds the distribution tree.
    ///
    /// Every node goes through the same constructors and bound setters as
    /// hand-built trees.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Node` naming the path of the first invalid node,
    /// e.g. `root.parts[1].distribution`.
    pub fn build(&self) -> Result<Distribution, TreeError> {
        let distribution = self.build_at("root")?;
        debug!(
            nodes = distribution.node_count(),
            depth = distribution.depth(),
            "built distribution tree"
        );
        Ok(distribution)
    }

    fn build_at(&self, path: &str) -> Result<Distribution, TreeError> {
        let at = |source: VariateError| TreeError::Node {
            path: path.to_string(),
            source,
        };

        let mut distribution = match &self.variate {
            VariateSpec::Uniform { start, finish } => {
                Distribution::uniform(*start, *finish).map_err(at)?
            }
            VariateSpec::Discrete { values } => {
                Distribution::discrete(values.clone()).map_err(at)?
            }
            VariateSpec::Normal {
                mean,
                standard_deviation,
            } => Distribution::normal(*mean, *standard_deviation).map_err(at)?,
            VariateSpec::Exponential { lambda } => Distribution::exponential(*lambda).map_err(at)?,
            VariateSpec::Mixture { parts } => {
                let parts = parts
                    .iter()
                    .enumerate()
                    .map(|(index, part)| {
                        let child_path = format!("{}.parts[{}]", path, index);
                        let child = part
                            .distribution
                            .build_at(&format!("{}.distribution", child_path))?;
                        MixturePart::new(part.weight, child).map_err(|source| TreeError::Node {
                            path: child_path,
                            source,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Distribution::new(Variate::Mixture(
                    MixtureDistribution::new(parts).map_err(at)?,
                ))
            }
        };

        if let Some(min) = self.min {
            distribution.set_min(min).map_err(at)?;
        }
        if let Some(max) = self.max {
            distribution.set_max(max).map_err(at)?;
        }
        Ok(distribution)
    }
}

impl From<&Distribution> for DistributionSpec {
    fn from(distribution: &Distribution) -> Self {
        let variate = match distribution.variate() {
            Variate::Uniform(v) => VariateSpec::Uniform {
                start: v.start(),
                finish: v.finish(),
            },
            Variate::Discrete(v) => VariateSpec::Discrete {
                values: v.values().to_vec(),
            },
            Variate::Normal(v) => VariateSpec::Normal {
                mean: v.mean(),
                standard_deviation: v.standard_deviation(),
            },
            Variate::Exponential(v) => VariateSpec::Exponential { lambda: v.lambda() },
            Variate::Mixture(m) => VariateSpec::Mixture {
                parts: m
                    .parts()
                    .iter()
                    .map(|part| PartSpec {
                        weight: part.weight(),
                        distribution: DistributionSpec::from(part.distribution()),
                    })
                    .collect(),
            },
        };
        Self {
            variate,
            min: distribution.min(),
            max: distribution.max(),
        }
    }
}
