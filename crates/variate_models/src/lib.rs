//! # variate_models: Composable Random Variates
//!
//! ## Layer 2 (Models) Role
//!
//! variate_models builds on `variate_core` to provide:
//! - Leaf variates: uniform, discrete, normal and exponential (`variates`)
//! - Weighted, arbitrarily nested mixtures (`mixture`)
//! - The [`Distribution`] node with bounded-rejection sampling (`distribution`)
//! - Rejection bounds (`bounds`) and the retry cap (`config`)
//! - TOML tree descriptions (`tree`, feature `serde`)
//!
//! ## Usage Example
//!
//! A payout that is nothing 70% of the time, a bounded normal 25% of the
//! time and a large uniform prize otherwise:
//!
//! ```rust
//! use variate_core::rng::SeededSource;
//! use variate_models::{Distribution, MixtureDistribution};
//!
//! # fn main() -> Result<(), variate_core::VariateError> {
//! let bounded_normal = Distribution::normal(1.0, 0.3_f64.sqrt())?
//!     .with_min(0.5)?
//!     .with_max(1.5)?;
//!
//! let payout = Distribution::from(MixtureDistribution::from_pairs([
//!     (0.7, Distribution::discrete(vec![0.0])?),
//!     (0.25, bounded_normal),
//!     (0.05, Distribution::uniform(2.0, 5.0)?),
//! ])?);
//!
//! let mut source = SeededSource::from_seed(2024);
//! let value = payout.sample(&mut source)?;
//! assert!(value == 0.0 || (0.5..=1.5).contains(&value) || (2.0..5.0).contains(&value));
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: TOML tree descriptions via [`tree::DistributionSpec`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod bounds;
pub mod config;
pub mod distribution;
pub mod mixture;
#[cfg(feature = "serde")]
pub mod tree;
pub mod variates;

pub use bounds::Bounds;
pub use config::{SamplingConfig, SamplingConfigBuilder, DEFAULT_MAX_RETRIES};
pub use distribution::{Distribution, Variate};
pub use mixture::{MixtureDistribution, MixturePart, WEIGHT_TOLERANCE};
pub use variates::{DiscreteVariate, ExponentialVariate, NormalVariate, UniformVariate};
