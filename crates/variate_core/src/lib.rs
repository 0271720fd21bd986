//! # variate_core: Foundation for Composable Random Variates
//!
//! ## Layer 1 (Foundation) Role
//!
//! variate_core serves as the bottom layer of the workspace, providing:
//! - The entropy boundary: [`rng::RandomSource`] and its implementations (`rng`)
//! - Error types: [`types::VariateError`] (`types::error`)
//! - Validation helpers: `error_level`, the standard normal CDF and histograms (`stats`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other variate_* crates, with minimal external dependencies:
//! - rand: Platform and seeded PRNGs
//! - num-traits: Generic floating-point reference functions
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_core::rng::{RandomSource, SeededSource};
//! use variate_core::stats::error_level;
//!
//! let mut source = SeededSource::from_seed(7);
//! let mut counts = [0.0; 2];
//! for _ in 0..10_000 {
//!     counts[(source.next_uniform() * 2.0) as usize] += 1.0;
//! }
//! let observed: Vec<f64> = counts.iter().map(|c| c / 10_000.0).collect();
//! assert!(error_level(&[0.5, 0.5], &observed).unwrap() < 0.05);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`types::VariateError`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod rng;
pub mod stats;
pub mod types;

pub use types::{VariateError, VariateResult};
