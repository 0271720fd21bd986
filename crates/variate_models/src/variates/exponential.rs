//! Exponential variate via inverse-CDF sampling.

use variate_core::rng::RandomSource;
use variate_core::types::{VariateError, VariateResult};

/// Exponential variate with rate `lambda`.
///
/// Raw samples are `-(1/lambda)·ln(u)`. A draw of exactly `u = 0` yields
/// `+∞`. Only NaN rates are rejected; a non-positive rate is accepted and
/// produces the corresponding non-physical transform.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::SequenceSource;
/// use variate_models::ExponentialVariate;
///
/// let exponential = ExponentialVariate::new(0.5).unwrap();
/// let mut source = SequenceSource::new(vec![(-1.0_f64).exp()]).unwrap();
/// assert!((exponential.sample_raw(&mut source) - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialVariate {
    lambda: f64,
}

impl ExponentialVariate {
    /// Creates an exponential variate.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `lambda` is NaN.
    pub fn new(lambda: f64) -> VariateResult<Self> {
        if lambda.is_nan() {
            return Err(VariateError::invalid_argument(
                "exponential rate must be a number",
            ));
        }
        Ok(Self { lambda })
    }

    /// Rate parameter.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    /// Draws one unbounded sample.
    #[inline]
    pub fn sample_raw<R: RandomSource + ?Sized>(&self, source: &mut R) -> f64 {
        -(1.0 / self.lambda) * source.next_uniform().ln()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use variate_core::rng::SequenceSource;

    #[test]
    fn test_inverse_cdf() {
        let exponential = ExponentialVariate::new(2.0).unwrap();
        let mut source = SequenceSource::new(vec![0.5]).unwrap();
        assert_relative_eq!(
            exponential.sample_raw(&mut source),
            std::f64::consts::LN_2 / 2.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_zero_draw_is_infinite() {
        let exponential = ExponentialVariate::new(1.0).unwrap();
        let mut source = SequenceSource::new(vec![0.0]).unwrap();
        assert_eq!(exponential.sample_raw(&mut source), f64::INFINITY);
    }

    #[test]
    fn test_rejects_nan() {
        assert!(ExponentialVariate::new(f64::NAN).is_err());
        assert!(ExponentialVariate::new(-1.0).is_ok());
    }
}
