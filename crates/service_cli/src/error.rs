//! CLI error type.

use thiserror::Error;
use variate_core::VariateError;
use variate_models::tree::TreeError;

use crate::config::ConfigError;

/// Errors surfaced by the `variate` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tree description could not be loaded or built
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    /// Sampling failed
    #[error("Sampling error: {0}")]
    Variate(#[from] VariateError),

    /// IO error writing output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
