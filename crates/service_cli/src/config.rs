//! CLI configuration management.
//!
//! Loads [`CliConfig`] from a TOML file, applies `VARIATE_*` environment
//! overrides and validates the result.

use std::path::Path;

use serde::Deserialize;
use variate_models::{SamplingConfig, DEFAULT_MAX_RETRIES};

/// Sampler configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Rejection retry cap per node
    pub max_retries: usize,

    /// Seed for reproducible runs; a fresh seed is drawn when absent
    pub seed: Option<u64>,

    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,

    /// Sample count used when `--count` is not given
    pub default_samples: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            seed: None,
            log_level: "info".to_string(),
            default_samples: 10,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise start from defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(max_retries) = lookup("VARIATE_MAX_RETRIES").and_then(|v| v.parse().ok()) {
            self.max_retries = max_retries;
        }

        if let Some(seed) = lookup("VARIATE_SEED").and_then(|v| v.parse().ok()) {
            self.seed = Some(seed);
        }

        if let Some(log_level) = lookup("VARIATE_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.max_retries == 0 {
            errors.push("max_retries must be greater than 0".to_string());
        }

        if self.default_samples == 0 {
            errors.push("default_samples must be greater than 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }

    /// Sampling configuration derived from this file
    pub fn sampling(&self) -> Result<SamplingConfig, ConfigError> {
        SamplingConfig::builder()
            .max_retries(self.max_retries)
            .build()
            .map_err(|e| ConfigError::Validation(vec![e.to_string()]))
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    Io(String),
    /// Parse error in config file
    Parse(String),
    /// Validation error
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {}", msg),
            Self::Parse(msg) => write!(f, "Parse error: {}", msg),
            Self::Validation(errors) => write!(f, "Validation errors: {}", errors.join("; ")),
        }
    }
}

impl std::error::Error for ConfigError {}
