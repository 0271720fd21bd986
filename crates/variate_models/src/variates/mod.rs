//! Leaf variates.
//!
//! Each leaf only defines its raw transform from uniform draws to a value.
//! Bounds and rejection live on [`crate::Distribution`].
//!
//! - [`UniformVariate`]: `[start, finish)` by linear scaling
//! - [`DiscreteVariate`]: equal-probability pick from a list
//! - [`NormalVariate`]: Box-Muller, cosine branch
//! - [`ExponentialVariate`]: inverse CDF

mod discrete;
mod exponential;
mod normal;
mod uniform;

pub use discrete::DiscreteVariate;
pub use exponential::ExponentialVariate;
pub use normal::NormalVariate;
pub use uniform::UniformVariate;
