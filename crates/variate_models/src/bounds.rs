//! Optional rejection bounds carried by every distribution node.

use variate_core::types::{VariateError, VariateResult};

/// Optional `[min, max]` pair used as a resampling filter.
///
/// A raw sample is accepted unless it is strictly below `min` or strictly
/// above `max`; both ends are therefore inclusive. When both bounds are set,
/// `min < max` always holds.
///
/// # Examples
///
/// ```rust
/// use variate_models::Bounds;
///
/// let mut bounds = Bounds::default();
/// bounds.set_min(0.5).unwrap();
/// bounds.set_max(1.5).unwrap();
/// assert!(bounds.contains(1.0));
/// assert!(bounds.contains(1.5));
/// assert!(!bounds.contains(2.0));
///
/// assert!(bounds.set_min(2.0).is_err());
/// assert_eq!(bounds.min(), Some(0.5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min: Option<f64>,
    max: Option<f64>,
}

impl Bounds {
    /// Bounds that accept every value.
    pub const UNBOUNDED: Bounds = Bounds {
        min: None,
        max: None,
    };

    /// Creates bounds from optional ends.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if either end is NaN or
    /// `min >= max`.
    pub fn new(min: Option<f64>, max: Option<f64>) -> VariateResult<Self> {
        let mut bounds = Self::UNBOUNDED;
        if let Some(min) = min {
            bounds.set_min(min)?;
        }
        if let Some(max) = max {
            bounds.set_max(max)?;
        }
        Ok(bounds)
    }

    /// Lower bound, if set.
    #[inline]
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// Upper bound, if set.
    #[inline]
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Sets the lower bound, leaving `self` untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `min` is NaN or not strictly
    /// below the current upper bound.
    pub fn set_min(&mut self, min: f64) -> VariateResult<()> {
        if min.is_nan() {
            return Err(VariateError::invalid_argument("min must be a number"));
        }
        if let Some(max) = self.max {
            if min >= max {
                return Err(VariateError::InvalidArgument(format!(
                    "min {} must be below max {}",
                    min, max
                )));
            }
        }
        self.min = Some(min);
        Ok(())
    }

    /// Sets the upper bound, leaving `self` untouched on failure.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `max` is NaN or not strictly
    /// above the current lower bound.
    pub fn set_max(&mut self, max: f64) -> VariateResult<()> {
        if max.is_nan() {
            return Err(VariateError::invalid_argument("max must be a number"));
        }
        if let Some(min) = self.min {
            if max <= min {
                return Err(VariateError::InvalidArgument(format!(
                    "max {} must be above min {}",
                    max, min
                )));
            }
        }
        self.max = Some(max);
        Ok(())
    }

    /// Removes both bounds.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::UNBOUNDED;
    }

    /// True when neither bound is set.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// True if `value` survives the rejection filter.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        if matches!(self.min, Some(min) if value < min) {
            return false;
        }
        !matches!(self.max, Some(max) if value > max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unbounded_accepts_everything() {
        let bounds = Bounds::UNBOUNDED;
        assert!(bounds.is_unbounded());
        assert!(bounds.contains(f64::NEG_INFINITY));
        assert!(bounds.contains(f64::INFINITY));
    }

    #[test]
    fn test_min_then_max_conflict() {
        let mut bounds = Bounds::default();
        bounds.set_min(2.0).unwrap();
        assert!(matches!(
            bounds.set_max(1.0),
            Err(VariateError::InvalidArgument(_))
        ));
        assert_eq!(bounds.max(), None);
    }

    #[test]
    fn test_max_then_min_conflict() {
        let mut bounds = Bounds::default();
        bounds.set_max(1.0).unwrap();
        assert!(bounds.set_min(2.0).is_err());
        assert!(bounds.set_min(1.0).is_err());
        assert_eq!(bounds.min(), None);
    }

    #[test]
    fn test_nan_rejected() {
        let mut bounds = Bounds::default();
        assert!(bounds.set_min(f64::NAN).is_err());
        assert!(bounds.set_max(f64::NAN).is_err());
        assert!(bounds.is_unbounded());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let bounds = Bounds::new(Some(0.5), Some(1.5)).unwrap();
        assert!(bounds.contains(0.5));
        assert!(bounds.contains(1.5));
        assert!(!bounds.contains(0.4999));
        assert!(!bounds.contains(1.5001));
    }

    #[test]
    fn test_new_validates_ordering() {
        assert!(Bounds::new(Some(1.0), Some(1.0)).is_err());
        assert!(Bounds::new(Some(1.0), None).is_ok());
        assert!(Bounds::new(None, None).unwrap().is_unbounded());
    }

    #[test]
    fn test_clear() {
        let mut bounds = Bounds::new(Some(0.0), Some(1.0)).unwrap();
        bounds.clear();
        assert_eq!(bounds, Bounds::UNBOUNDED);
    }

    proptest! {
        /// Whatever sequence of setters succeeds, min stays below max.
        #[test]
        fn prop_ordering_invariant(ops in prop::collection::vec((any::<bool>(), -100.0..100.0f64), 0..20)) {
            let mut bounds = Bounds::default();
            for (is_min, value) in ops {
                let _ = if is_min { bounds.set_min(value) } else { bounds.set_max(value) };
                if let (Some(min), Some(max)) = (bounds.min(), bounds.max()) {
                    prop_assert!(min < max);
                }
            }
        }
    }
}
