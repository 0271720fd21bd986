//! Continuous uniform variate.

use variate_core::rng::RandomSource;
use variate_core::types::{VariateError, VariateResult};

/// Uniform variate over `[start, finish)`.
///
/// No ordering is enforced between the ends; with `finish < start` the
/// transform yields the mirrored range `(finish, start]`.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::SequenceSource;
/// use variate_models::UniformVariate;
///
/// let uniform = UniformVariate::new(3.0, 8.0).unwrap();
/// let mut source = SequenceSource::new(vec![0.5]).unwrap();
/// assert_eq!(uniform.sample_raw(&mut source), 5.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformVariate {
    start: f64,
    finish: f64,
}

impl UniformVariate {
    /// Creates a uniform variate.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if either end is not finite.
    pub fn new(start: f64, finish: f64) -> VariateResult<Self> {
        if !start.is_finite() || !finish.is_finite() {
            return Err(VariateError::InvalidArgument(format!(
                "uniform ends must be finite numbers, got [{}, {})",
                start, finish
            )));
        }
        Ok(Self { start, finish })
    }

    /// Start of the range.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// End of the range.
    #[inline]
    pub fn finish(&self) -> f64 {
        self.finish
    }

    /// Draws one unbounded sample: `u·(finish - start) + start`.
    #[inline]
    pub fn sample_raw<R: RandomSource + ?Sized>(&self, source: &mut R) -> f64 {
        source.next_uniform() * (self.finish - self.start) + self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use variate_core::rng::{SeededSource, SequenceSource};

    #[test]
    fn test_transform() {
        let uniform = UniformVariate::new(-2.0, 2.0).unwrap();
        let mut source = SequenceSource::new(vec![0.0, 0.25, 0.75]).unwrap();
        assert_eq!(uniform.sample_raw(&mut source), -2.0);
        assert_eq!(uniform.sample_raw(&mut source), -1.0);
        assert_eq!(uniform.sample_raw(&mut source), 1.0);
        assert_eq!(source.draws(), 3);
    }

    #[test]
    fn test_reversed_range_mirrors() {
        let uniform = UniformVariate::new(5.0, 1.0).unwrap();
        let mut source = SeededSource::from_seed(3);
        for _ in 0..1000 {
            let value = uniform.sample_raw(&mut source);
            assert!(value > 1.0 && value <= 5.0);
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(UniformVariate::new(f64::NAN, 1.0).is_err());
        assert!(UniformVariate::new(0.0, f64::INFINITY).is_err());
    }
}
