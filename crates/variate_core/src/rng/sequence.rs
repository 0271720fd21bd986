//! Replaying source for tests that pin a transform to a closed-form value.

use super::RandomSource;
use crate::types::{VariateError, VariateResult};

/// Source that replays a fixed sequence of draws, wrapping around at the end.
///
/// Every value is validated to lie in [0, 1) at construction, so the
/// [`RandomSource`] contract holds for any successfully built instance.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::{RandomSource, SequenceSource};
///
/// let mut source = SequenceSource::new(vec![0.1, 0.9]).unwrap();
/// assert_eq!(source.next_uniform(), 0.1);
/// assert_eq!(source.next_uniform(), 0.9);
/// assert_eq!(source.next_uniform(), 0.1);
/// assert_eq!(source.draws(), 3);
///
/// assert!(SequenceSource::new(vec![1.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
    draws: usize,
}

impl SequenceSource {
    /// Creates a source replaying `values` in order.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `values` is empty or any value
    /// lies outside [0, 1) (NaN included).
    pub fn new(values: Vec<f64>) -> VariateResult<Self> {
        if values.is_empty() {
            return Err(VariateError::invalid_argument(
                "sequence source needs at least one value",
            ));
        }
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..1.0).contains(*v))
        {
            return Err(VariateError::InvalidArgument(format!(
                "sequence value {} at index {} is outside [0, 1)",
                value, index
            )));
        }
        Ok(Self {
            values,
            position: 0,
            draws: 0,
        })
    }

    /// Number of values drawn so far.
    #[inline]
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Rewinds to the first value and clears the draw counter.
    pub fn reset(&mut self) {
        self.position = 0;
        self.draws = 0;
    }
}

impl RandomSource for SequenceSource {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position];
        self.position = (self.position + 1) % self.values.len();
        self.draws += 1;
        value
    }
}
