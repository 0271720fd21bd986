//! Discrete variate over an explicit list of outcomes.

use variate_core::rng::RandomSource;
use variate_core::types::{VariateError, VariateResult};

/// Picks one of `values` with equal probability per position.
///
/// Duplicates keep their own bucket, so a value listed twice is twice as
/// likely as one listed once.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::SequenceSource;
/// use variate_models::DiscreteVariate;
///
/// let discrete = DiscreteVariate::new(vec![10.0, 20.0, 30.0, 40.0]).unwrap();
/// let mut source = SequenceSource::new(vec![0.6]).unwrap();
/// assert_eq!(discrete.sample_raw(&mut source), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteVariate {
    values: Vec<f64>,
}

impl DiscreteVariate {
    /// Creates a discrete variate.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `values` is empty or holds NaN.
    pub fn new(values: impl Into<Vec<f64>>) -> VariateResult<Self> {
        let values = values.into();
        if values.is_empty() {
            return Err(VariateError::invalid_argument(
                "discrete values must not be empty",
            ));
        }
        if let Some(index) = values.iter().position(|v| v.is_nan()) {
            return Err(VariateError::InvalidArgument(format!(
                "discrete value at index {} is not a number",
                index
            )));
        }
        Ok(Self { values })
    }

    /// Outcomes in bucket order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty lists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Draws one unbounded sample: `values[floor(u·n)]`.
    #[inline]
    pub fn sample_raw<R: RandomSource + ?Sized>(&self, source: &mut R) -> f64 {
        let n = self.values.len();
        let index = ((source.next_uniform() * n as f64) as usize).min(n - 1);
        self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use variate_core::rng::SequenceSource;

    #[test]
    fn test_bucket_edges() {
        let discrete = DiscreteVariate::new(vec![0.0, 1.0]).unwrap();
        let mut source = SequenceSource::new(vec![0.0, 0.4999, 0.5, 0.999_999]).unwrap();
        assert_eq!(discrete.sample_raw(&mut source), 0.0);
        assert_eq!(discrete.sample_raw(&mut source), 0.0);
        assert_eq!(discrete.sample_raw(&mut source), 1.0);
        assert_eq!(discrete.sample_raw(&mut source), 1.0);
    }

    #[test]
    fn test_single_value() {
        let discrete = DiscreteVariate::new([1.0]).unwrap();
        let mut source = SequenceSource::new(vec![0.3, 0.9]).unwrap();
        for _ in 0..10 {
            assert_eq!(discrete.sample_raw(&mut source), 1.0);
        }
    }

    #[test]
    fn test_validation() {
        assert!(DiscreteVariate::new(Vec::<f64>::new()).is_err());
        assert!(DiscreteVariate::new(vec![1.0, f64::NAN]).is_err());
        assert!(DiscreteVariate::new(vec![f64::INFINITY]).is_ok());
    }
}
