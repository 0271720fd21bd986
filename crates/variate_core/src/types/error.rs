//! Error types for structured error handling.
//!
//! This module provides:
//! - `VariateError`: Errors from variate construction, bound configuration,
//!   bounded sampling and the validation helpers

use thiserror::Error;

/// Categorised variate errors.
///
/// Every fallible operation in the workspace reports one of these variants.
/// Construction and setter failures are raised synchronously and leave no
/// partial state behind; sampling failures are returned from the sampling
/// call that exhausted its retry budget.
///
/// # Variants
/// - `InvalidArgument`: Rejected parameters (NaN, empty lists, bad bound ordering,
///   mixture weights not summing to one)
/// - `BoundsUnsatisfiable`: Rejection sampling gave up after the configured
///   number of attempts
///
/// # Examples
/// ```
/// use variate_core::types::VariateError;
///
/// let err = VariateError::InvalidArgument("values must not be empty".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: values must not be empty");
///
/// let err = VariateError::BoundsUnsatisfiable { min: Some(5.0), max: None, attempts: 100 };
/// assert!(format!("{}", err).contains("100 attempts"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariateError {
    /// Invalid argument supplied to a constructor, setter or helper.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No raw sample fell inside the configured bounds.
    #[error("Bounds unsatisfiable: no sample within [{}, {}] after {attempts} attempts", fmt_bound(.min), fmt_bound(.max))]
    BoundsUnsatisfiable {
        /// Lower bound in force, if any
        min: Option<f64>,
        /// Upper bound in force, if any
        max: Option<f64>,
        /// Number of raw samples drawn before giving up
        attempts: usize,
    },
}

impl VariateError {
    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns true for errors raised while sampling rather than at construction.
    #[inline]
    pub fn is_sampling_failure(&self) -> bool {
        matches!(self, Self::BoundsUnsatisfiable { .. })
    }
}

fn fmt_bound(bound: &Option<f64>) -> String {
    match bound {
        Some(value) => value.to_string(),
        None => "-".to_string(),
    }
}

/// Convenience alias for results carrying a [`VariateError`].
pub type VariateResult<T> = Result<T, VariateError>;
