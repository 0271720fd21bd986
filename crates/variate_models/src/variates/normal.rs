//! Normal variate via the Box-Muller transform.

use std::f64::consts::PI;

use variate_core::rng::RandomSource;
use variate_core::types::{VariateError, VariateResult};

/// Normal variate with the given mean and standard deviation.
///
/// Each raw sample consumes two uniform draws `u1, u2` and keeps only the
/// cosine branch of the Box-Muller pair:
///
/// `mean + cos(2π(1 - u1))·sqrt(-2·ln(1 - u2))·standard_deviation`
///
/// Since `u2 < 1`, `ln(1 - u2)` is always finite.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::SequenceSource;
/// use variate_models::NormalVariate;
///
/// let normal = NormalVariate::new(10.0, 2.0).unwrap();
/// // u1 = 0 puts the angle at 2π, u2 = 1 - e^-0.5 makes the radius 1
/// let mut source = SequenceSource::new(vec![0.0, 1.0 - (-0.5_f64).exp()]).unwrap();
/// assert!((normal.sample_raw(&mut source) - 12.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalVariate {
    mean: f64,
    standard_deviation: f64,
}

impl NormalVariate {
    /// Creates a normal variate.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if either parameter is not finite.
    pub fn new(mean: f64, standard_deviation: f64) -> VariateResult<Self> {
        if !mean.is_finite() || !standard_deviation.is_finite() {
            return Err(VariateError::InvalidArgument(format!(
                "normal parameters must be finite numbers, got mean {} and standard deviation {}",
                mean, standard_deviation
            )));
        }
        Ok(Self {
            mean,
            standard_deviation,
        })
    }

    /// Mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Standard deviation.
    #[inline]
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation
    }

    /// Draws one unbounded sample, consuming two uniform draws.
    #[inline]
    pub fn sample_raw<R: RandomSource + ?Sized>(&self, source: &mut R) -> f64 {
        let a = 1.0 - source.next_uniform();
        let b = 1.0 - source.next_uniform();

        let standard = (2.0 * PI * a).cos() * (-2.0 * b.ln()).sqrt();

        self.mean + standard * self.standard_deviation
    }
}
