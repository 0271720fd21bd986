//! Errors from loading and building tree descriptions.

use thiserror::Error;
use variate_core::types::VariateError;

/// Tree description error.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Description file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Description is not valid TOML or does not match the schema.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A node failed validation.
    #[error("Invalid node at {path}: {source}")]
    Node {
        /// Dotted path of the offending node, starting at `root`
        path: String,
        /// Underlying validation error
        source: VariateError,
    },
}
