//! Normalised absolute error between an expected and an observed histogram.

use crate::types::{VariateError, VariateResult};

/// Scores how far `observed` is from `expected`.
///
/// Returns `Σ|expected_i - observed_i| / Σ expected_i`. When the expected
/// values sum to zero the ratio is undefined, so the result is `0.0` for a
/// perfect match and `1.0` otherwise.
///
/// # Errors
///
/// Returns `VariateError::InvalidArgument` if either slice is empty, the
/// lengths differ, or any entry is NaN.
///
/// # Examples
///
/// ```
/// use variate_core::stats::error_level;
///
/// assert_eq!(error_level(&[0.0, 0.0], &[0.0, 0.0]).unwrap(), 0.0);
/// assert_eq!(error_level(&[0.0], &[1.0]).unwrap(), 1.0);
/// assert_eq!(error_level(&[1.0, 1.0], &[2.0, 0.0]).unwrap(), 1.0);
/// assert!(error_level(&[0.5, 0.5], &[1.0]).is_err());
/// ```
pub fn error_level(expected: &[f64], observed: &[f64]) -> VariateResult<f64> {
    if expected.is_empty() || observed.is_empty() {
        return Err(VariateError::invalid_argument(
            "expected and observed must not be empty",
        ));
    }
    if expected.len() != observed.len() {
        return Err(VariateError::InvalidArgument(format!(
            "length mismatch: expected has {} entries, observed has {}",
            expected.len(),
            observed.len()
        )));
    }
    if expected.iter().chain(observed).any(|v| v.is_nan()) {
        return Err(VariateError::invalid_argument(
            "expected and observed must not contain NaN",
        ));
    }

    let difference: f64 = expected
        .iter()
        .zip(observed)
        .map(|(e, o)| (e - o).abs())
        .sum();
    let expected_sum: f64 = expected.iter().sum();

    if expected_sum == 0.0 {
        Ok(if difference == 0.0 { 0.0 } else { 1.0 })
    } else {
        Ok(difference / expected_sum)
    }
}
