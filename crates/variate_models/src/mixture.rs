//! Weighted mixtures of distributions.
//!
//! A [`MixtureDistribution`] is an ordered list of [`MixturePart`]s. One
//! uniform draw selects a part by walking the list with a residual; the
//! selected child is then sampled in full, bounds included. Because a
//! mixture is itself wrapped in a [`Distribution`], mixtures nest to any
//! depth.

use tracing::debug;
use variate_core::rng::RandomSource;
use variate_core::types::{VariateError, VariateResult};

use crate::config::SamplingConfig;
use crate::distribution::Distribution;

/// Absolute tolerance on the sum of mixture weights.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

/// One weighted branch of a mixture.
#[derive(Debug, Clone, PartialEq)]
pub struct MixturePart {
    weight: f64,
    distribution: Distribution,
}

impl MixturePart {
    /// Creates a part selecting `distribution` with probability `weight`.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `weight` is NaN, infinite or
    /// negative.
    pub fn new(weight: f64, distribution: Distribution) -> VariateResult<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(VariateError::InvalidArgument(format!(
                "mixture weight must be a non-negative number, got {}",
                weight
            )));
        }
        Ok(Self {
            weight,
            distribution,
        })
    }

    /// Selection probability.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Child distribution.
    #[inline]
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Child distribution, for adjusting its bounds after assembly.
    #[inline]
    pub fn distribution_mut(&mut self) -> &mut Distribution {
        &mut self.distribution
    }
}

/// Weighted choice over child distributions.
///
/// # Examples
///
/// ```rust
/// use variate_core::rng::SeededSource;
/// use variate_models::{Distribution, MixtureDistribution};
///
/// let mixture = MixtureDistribution::from_pairs([
///     (0.7, Distribution::discrete(vec![0.0]).unwrap()),
///     (0.3, Distribution::uniform(2.0, 5.0).unwrap()),
/// ])
/// .unwrap();
/// assert_eq!(mixture.len(), 2);
///
/// let payout = Distribution::from(mixture);
/// let mut source = SeededSource::from_seed(1);
/// let value = payout.sample(&mut source).unwrap();
/// assert!(value == 0.0 || (2.0..5.0).contains(&value));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MixtureDistribution {
    parts: Vec<MixturePart>,
}

impl MixtureDistribution {
    /// Creates a mixture; list order is selection order.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `parts` is empty or the
    /// weights do not sum to 1 within [`WEIGHT_TOLERANCE`].
    pub fn new(parts: Vec<MixturePart>) -> VariateResult<Self> {
        if parts.is_empty() {
            return Err(VariateError::invalid_argument(
                "mixture needs at least one part",
            ));
        }
        let total: f64 = parts.iter().map(MixturePart::weight).sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(VariateError::InvalidArgument(format!(
                "mixture weights must sum to 1, got {}",
                total
            )));
        }
        debug!(parts = parts.len(), "built mixture distribution");
        Ok(Self { parts })
    }

    /// Creates a mixture from `(weight, distribution)` pairs.
    ///
    /// # Errors
    ///
    /// Same as [`MixturePart::new`] and [`MixtureDistribution::new`].
    pub fn from_pairs<I>(pairs: I) -> VariateResult<Self>
    where
        I: IntoIterator<Item = (f64, Distribution)>,
    {
        let parts = pairs
            .into_iter()
            .map(|(weight, distribution)| MixturePart::new(weight, distribution))
            .collect::<VariateResult<Vec<_>>>()?;
        Self::new(parts)
    }

    /// Parts in selection order.
    #[inline]
    pub fn parts(&self) -> &[MixturePart] {
        &self.parts
    }

    /// Mutable access to the parts; the weights themselves stay fixed.
    #[inline]
    pub fn parts_mut(&mut self) -> &mut [MixturePart] {
        &mut self.parts
    }

    /// Number of parts.
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Always false; construction rejects empty lists.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Weights in selection order.
    pub fn weights(&self) -> impl Iterator<Item = f64> + '_ {
        self.parts.iter().map(MixturePart::weight)
    }

    /// Index of the part selected by the uniform draw `u`.
    ///
    /// Walks the parts keeping `u` minus the weights passed so far and picks
    /// the first part whose weight exceeds that residual. Rounding can leave
    /// the residual above every remaining weight; the last part is picked
    /// then.
    ///
    /// ```rust
    /// use variate_models::{Distribution, MixtureDistribution};
    ///
    /// let zero = || Distribution::discrete(vec![0.0]).unwrap();
    /// let mixture = MixtureDistribution::from_pairs([(0.25, zero()), (0.75, zero())]).unwrap();
    /// assert_eq!(mixture.select(0.1), 0);
    /// assert_eq!(mixture.select(0.25), 1);
    /// assert_eq!(mixture.select(0.999), 1);
    /// ```
    pub fn select(&self, u: f64) -> usize {
        let mut residual = u;
        for (index, part) in self.parts.iter().enumerate() {
            if residual < part.weight {
                return index;
            }
            residual -= part.weight;
        }
        let last = self.parts.len() - 1;
        debug!(u, residual, last, "mixture selection fell through; using last part");
        last
    }

    /// Draws one unbounded sample: selects a part, then samples it with bounds.
    ///
    /// # Errors
    ///
    /// Propagates `BoundsUnsatisfiable` from the selected child.
    pub fn sample_raw<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
        config: &SamplingConfig,
    ) -> VariateResult<f64> {
        let index = self.select(source.next_uniform());
        self.parts[index].distribution.sample_with(source, config)
    }
}
