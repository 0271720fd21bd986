//! Statistics helpers for validating sampled output.
//!
//! Nothing here is called on the sampling path. These functions score
//! empirical histograms against theoretical masses in tests and in the
//! `variate` CLI.
//!
//! - [`error_level`]: Normalised absolute error between two histograms
//! - [`norm_cdf`], [`normal_bucket_masses`]: Standard normal reference
//! - [`Histogram`], [`EqualWidthHistogram`]: Sample bucketing

mod error_level;
mod histogram;
mod normal;

pub use error_level::error_level;
pub use histogram::{EqualWidthHistogram, Histogram};
pub use normal::{norm_cdf, normal_bucket_masses};
