//! The entropy trait consumed by every variate.

/// Producer of uniform values in the half-open interval [0, 1).
///
/// Implementations must never return 1.0 or a negative value. Transforms
/// rely on this range: the discrete bucket index is `floor(u * n)` and the
/// Box-Muller transform takes `ln(1 - u)`.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::{RandomSource, SequenceSource};
///
/// fn twice<R: RandomSource>(source: &mut R) -> (f64, f64) {
///     (source.next_uniform(), source.next_uniform())
/// }
///
/// let mut source = SequenceSource::new(vec![0.25, 0.75]).unwrap();
/// assert_eq!(twice(&mut source), (0.25, 0.75));
/// ```
pub trait RandomSource {
    /// Draws the next uniform value in [0, 1).
    fn next_uniform(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
