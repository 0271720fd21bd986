//! Sampling configuration.
//!
//! This module provides [`SamplingConfig`], which caps the rejection loop of
//! bounded sampling, and its builder.

use variate_core::types::{VariateError, VariateResult};

/// Default number of raw samples drawn per bounded sample before giving up.
pub const DEFAULT_MAX_RETRIES: usize = 10_000;

/// Configuration for bounded sampling.
///
/// Immutable once built. Use [`SamplingConfig::builder`] for custom values.
///
/// # Examples
///
/// ```rust
/// use variate_models::config::SamplingConfig;
///
/// let config = SamplingConfig::default();
/// assert_eq!(config.max_retries(), 10_000);
///
/// let custom = SamplingConfig::builder()
///     .max_retries(50)
///     .build()
///     .expect("valid configuration");
/// assert_eq!(custom.max_retries(), 50);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Raw samples drawn per node before `BoundsUnsatisfiable` is returned.
    max_retries: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl SamplingConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplingConfigBuilder {
        SamplingConfigBuilder::default()
    }

    /// Returns the rejection retry cap.
    #[inline]
    pub fn max_retries(&self) -> usize {
        self.max_retries
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `max_retries` is 0.
    pub fn validate(&self) -> VariateResult<()> {
        if self.max_retries == 0 {
            return Err(VariateError::invalid_argument("max_retries must be > 0"));
        }
        Ok(())
    }
}

/// Builder for [`SamplingConfig`].
#[derive(Clone, Debug, Default)]
pub struct SamplingConfigBuilder {
    max_retries: Option<usize>,
}

impl SamplingConfigBuilder {
    /// Sets the rejection retry cap.
    #[inline]
    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = Some(max_retries);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if validation fails.
    pub fn build(self) -> VariateResult<SamplingConfig> {
        let config = SamplingConfig {
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SamplingConfig::default();
        assert_eq!(config.max_retries(), DEFAULT_MAX_RETRIES);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_defaults() {
        let config = SamplingConfig::builder().build().unwrap();
        assert_eq!(config, SamplingConfig::default());
    }

    #[test]
    fn test_builder_rejects_zero_retries() {
        let result = SamplingConfig::builder().max_retries(0).build();
        assert!(matches!(result, Err(VariateError::InvalidArgument(_))));
    }
}
