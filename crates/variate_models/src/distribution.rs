//! Distribution nodes and the bounded sampling contract.
//!
//! This module provides:
//! - [`Variate`]: Static dispatch enum over every variate kind
//! - [`Distribution`]: A variate plus optional rejection [`Bounds`]
//!
//! # Bounded sampling
//!
//! [`Distribution::sample_with`] draws raw values and discards those outside
//! the node's bounds, retrying up to [`SamplingConfig::max_retries`] times.
//! Bounds filter, they never clamp. A mixture node applies its own bounds on
//! top of whatever bounds its selected child already enforced.

use tracing::{trace, warn};
use variate_core::rng::RandomSource;
use variate_core::types::{VariateError, VariateResult};

use crate::bounds::Bounds;
use crate::config::SamplingConfig;
use crate::mixture::{MixtureDistribution, MixturePart};
use crate::variates::{DiscreteVariate, ExponentialVariate, NormalVariate, UniformVariate};

/// Static dispatch enum wrapping every variate kind.
///
/// # Variants
///
/// - `Uniform`: Continuous uniform over `[start, finish)`
/// - `Discrete`: Equal-probability pick from a list
/// - `Normal`: Box-Muller normal
/// - `Exponential`: Inverse-CDF exponential
/// - `Mixture`: Weighted choice over child distributions
#[derive(Debug, Clone, PartialEq)]
pub enum Variate {
    /// Continuous uniform variate
    Uniform(UniformVariate),
    /// Discrete variate
    Discrete(DiscreteVariate),
    /// Normal variate
    Normal(NormalVariate),
    /// Exponential variate
    Exponential(ExponentialVariate),
    /// Mixture of child distributions
    Mixture(MixtureDistribution),
}

impl Variate {
    /// Lower-case name of the variant.
    ///
    /// ```
    /// use variate_models::{UniformVariate, Variate};
    ///
    /// let variate = Variate::Uniform(UniformVariate::new(0.0, 1.0).unwrap());
    /// assert_eq!(variate.kind_name(), "uniform");
    /// ```
    #[inline]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Variate::Uniform(_) => "uniform",
            Variate::Discrete(_) => "discrete",
            Variate::Normal(_) => "normal",
            Variate::Exponential(_) => "exponential",
            Variate::Mixture(_) => "mixture",
        }
    }

    fn sample_raw<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
        config: &SamplingConfig,
    ) -> VariateResult<f64> {
        match self {
            Variate::Uniform(v) => Ok(v.sample_raw(source)),
            Variate::Discrete(v) => Ok(v.sample_raw(source)),
            Variate::Normal(v) => Ok(v.sample_raw(source)),
            Variate::Exponential(v) => Ok(v.sample_raw(source)),
            Variate::Mixture(m) => m.sample_raw(source, config),
        }
    }
}

/// A variate together with optional rejection bounds.
///
/// # Examples
///
/// ```
/// use variate_core::rng::SeededSource;
/// use variate_models::Distribution;
///
/// let mut discrete = Distribution::discrete(vec![0.0, 1.0, 2.0]).unwrap();
/// discrete.set_min(0.5).unwrap();
/// discrete.set_max(1.5).unwrap();
///
/// let mut source = SeededSource::from_seed(9);
/// for _ in 0..100 {
///     assert_eq!(discrete.sample(&mut source).unwrap(), 1.0);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    variate: Variate,
    bounds: Bounds,
}

impl Distribution {
    /// Wraps a variate with no bounds.
    #[inline]
    pub fn new(variate: Variate) -> Self {
        Self {
            variate,
            bounds: Bounds::UNBOUNDED,
        }
    }

    /// Uniform distribution over `[start, finish)`.
    ///
    /// # Errors
    ///
    /// See [`UniformVariate::new`].
    pub fn uniform(start: f64, finish: f64) -> VariateResult<Self> {
        UniformVariate::new(start, finish).map(Self::from)
    }

    /// Discrete distribution over `values`.
    ///
    /// # Errors
    ///
    /// See [`DiscreteVariate::new`].
    pub fn discrete(values: impl Into<Vec<f64>>) -> VariateResult<Self> {
        DiscreteVariate::new(values).map(Self::from)
    }

    /// Normal distribution.
    ///
    /// # Errors
    ///
    /// See [`NormalVariate::new`].
    pub fn normal(mean: f64, standard_deviation: f64) -> VariateResult<Self> {
        NormalVariate::new(mean, standard_deviation).map(Self::from)
    }

    /// Exponential distribution with rate `lambda`.
    ///
    /// # Errors
    ///
    /// See [`ExponentialVariate::new`].
    pub fn exponential(lambda: f64) -> VariateResult<Self> {
        ExponentialVariate::new(lambda).map(Self::from)
    }

    /// Mixture over `parts`.
    ///
    /// # Errors
    ///
    /// See [`MixtureDistribution::new`].
    pub fn mixture(parts: Vec<MixturePart>) -> VariateResult<Self> {
        MixtureDistribution::new(parts).map(Self::from)
    }

    /// The wrapped variate.
    #[inline]
    pub fn variate(&self) -> &Variate {
        &self.variate
    }

    /// Mutable access to the wrapped variate (e.g. to reach mixture children).
    #[inline]
    pub fn variate_mut(&mut self) -> &mut Variate {
        &mut self.variate
    }

    /// Current bounds.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Lower bound, if set.
    #[inline]
    pub fn min(&self) -> Option<f64> {
        self.bounds.min()
    }

    /// Upper bound, if set.
    #[inline]
    pub fn max(&self) -> Option<f64> {
        self.bounds.max()
    }

    /// Sets the lower bound.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `min` is NaN or not below the
    /// current upper bound. The distribution is left unchanged.
    pub fn set_min(&mut self, min: f64) -> VariateResult<()> {
        self.bounds.set_min(min)
    }

    /// Sets the upper bound.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::InvalidArgument` if `max` is NaN or not above the
    /// current lower bound. The distribution is left unchanged.
    pub fn set_max(&mut self, max: f64) -> VariateResult<()> {
        self.bounds.set_max(max)
    }

    /// Removes both bounds.
    #[inline]
    pub fn clear_bounds(&mut self) {
        self.bounds.clear();
    }

    /// Builder form of [`Distribution::set_min`].
    pub fn with_min(mut self, min: f64) -> VariateResult<Self> {
        self.set_min(min)?;
        Ok(self)
    }

    /// Builder form of [`Distribution::set_max`].
    pub fn with_max(mut self, max: f64) -> VariateResult<Self> {
        self.set_max(max)?;
        Ok(self)
    }

    /// Replaces both bounds at once.
    ///
    /// # Errors
    ///
    /// See [`Bounds::new`].
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> VariateResult<Self> {
        self.bounds = Bounds::new(min, max)?;
        Ok(self)
    }

    /// True if `value` would be accepted by this node's bounds.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.bounds.contains(value)
    }

    /// Draws one raw value, ignoring this node's bounds.
    ///
    /// A mixture still samples its selected child with the child's bounds.
    ///
    /// # Errors
    ///
    /// Propagates `BoundsUnsatisfiable` from mixture children.
    pub fn sample_raw<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
        config: &SamplingConfig,
    ) -> VariateResult<f64> {
        self.variate.sample_raw(source, config)
    }

    /// Draws one bounded value with the default [`SamplingConfig`].
    ///
    /// # Errors
    ///
    /// Returns `VariateError::BoundsUnsatisfiable` if no raw value fell within
    /// the bounds of this node or of a selected mixture child.
    pub fn sample<R: RandomSource + ?Sized>(&self, source: &mut R) -> VariateResult<f64> {
        self.sample_with(source, &SamplingConfig::default())
    }

    /// Draws one bounded value.
    ///
    /// # Errors
    ///
    /// Returns `VariateError::BoundsUnsatisfiable` once `config.max_retries()`
    /// raw values in a row were rejected at this node, or propagates the same
    /// error from a selected mixture child.
    pub fn sample_with<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
        config: &SamplingConfig,
    ) -> VariateResult<f64> {
        let max_retries = config.max_retries();
        for attempt in 1..=max_retries {
            let raw = self.variate.sample_raw(source, config)?;
            if self.bounds.contains(raw) {
                return Ok(raw);
            }
            trace!(kind = self.variate.kind_name(), raw, attempt, "rejected sample");
        }

        warn!(
            kind = self.variate.kind_name(),
            min = ?self.bounds.min(),
            max = ?self.bounds.max(),
            attempts = max_retries,
            "bounds rejected every sample"
        );
        Err(VariateError::BoundsUnsatisfiable {
            min: self.bounds.min(),
            max: self.bounds.max(),
            attempts: max_retries,
        })
    }

    /// Draws `n` bounded values with the default [`SamplingConfig`].
    ///
    /// # Errors
    ///
    /// Stops at the first failed sample and returns its error.
    pub fn sample_n<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
        n: usize,
    ) -> VariateResult<Vec<f64>> {
        self.sample_n_with(source, n, &SamplingConfig::default())
    }

    /// Draws `n` bounded values.
    ///
    /// # Errors
    ///
    /// Stops at the first failed sample and returns its error.
    pub fn sample_n_with<R: RandomSource + ?Sized>(
        &self,
        source: &mut R,
        n: usize,
        config: &SamplingConfig,
    ) -> VariateResult<Vec<f64>> {
        (0..n).map(|_| self.sample_with(source, config)).collect()
    }

    /// Number of nodes in the tree rooted here, this node included.
    pub fn node_count(&self) -> usize {
        match &self.variate {
            Variate::Mixture(m) => {
                1 + m
                    .parts()
                    .iter()
                    .map(|p| p.distribution().node_count())
                    .sum::<usize>()
            }
            _ => 1,
        }
    }

    /// Depth of the tree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match &self.variate {
            Variate::Mixture(m) => {
                1 + m
                    .parts()
                    .iter()
                    .map(|p| p.distribution().depth())
                    .max()
                    .unwrap_or(0)
            }
            _ => 1,
        }
    }
}

impl From<Variate> for Distribution {
    fn from(variate: Variate) -> Self {
        Self::new(variate)
    }
}

impl From<UniformVariate> for Distribution {
    fn from(variate: UniformVariate) -> Self {
        Self::new(Variate::Uniform(variate))
    }
}

impl From<DiscreteVariate> for Distribution {
    fn from(variate: DiscreteVariate) -> Self {
        Self::new(Variate::Discrete(variate))
    }
}

impl From<NormalVariate> for Distribution {
    fn from(variate: NormalVariate) -> Self {
        Self::new(Variate::Normal(variate))
    }
}

impl From<ExponentialVariate> for Distribution {
    fn from(variate: ExponentialVariate) -> Self {
        Self::new(Variate::Exponential(variate))
    }
}

impl From<MixtureDistribution> for Distribution {
    fn from(mixture: MixtureDistribution) -> Self {
        Self::new(Variate::Mixture(mixture))
    }
}
