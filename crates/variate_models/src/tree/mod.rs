//! Data-driven distribution trees.
//!
//! Trees can be described in TOML and built into a [`crate::Distribution`]
//! through the same validating constructors used in code. Available with
//! the `serde` feature.
//!
//! ```toml
//! kind = "mixture"
//!
//! [[parts]]
//! weight = 0.95
//! distribution = { kind = "discrete", values = [0.0] }
//!
//! [[parts]]
//! weight = 0.05
//! distribution = { kind = "exponential", lambda = 0.5, max = 20.0 }
//! ```

mod error;
mod spec;

use std::path::Path;

pub use error::TreeError;
pub use spec::{DistributionSpec, PartSpec, VariateSpec};

use crate::distribution::Distribution;

/// Reads, parses and builds a tree description file.
///
/// # Errors
///
/// Returns `TreeError::Io` if the file cannot be read, otherwise see
/// [`DistributionSpec::from_toml_str`] and [`DistributionSpec::build`].
pub fn load_tree(path: impl AsRef<Path>) -> Result<Distribution, TreeError> {
    let content = std::fs::read_to_string(path)?;
    DistributionSpec::from_toml_str(&content)?.build()
}
