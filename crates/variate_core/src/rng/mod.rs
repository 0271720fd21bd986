//! # Entropy Sources
//!
//! Every variate draws its randomness through the [`RandomSource`] trait,
//! which yields one uniform value in [0, 1) per call. The trait is the sole
//! entropy boundary of the workspace: sampling operations take the source as
//! an explicit `&mut` argument, so swapping a seeded or scripted source in
//! tests requires no global state.
//!
//! ## Module Structure
//!
//! - [`source`]: The [`RandomSource`] trait
//! - [`prng`]: [`ThreadSource`] (platform PRNG) and [`SeededSource`] (`StdRng`)
//! - [`sequence`]: [`SequenceSource`], a replaying source for pinned tests
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::rng::{RandomSource, SeededSource};
//!
//! let mut source = SeededSource::from_seed(12345);
//! let u = source.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//! ```
//!
//! ## Concurrency
//!
//! Sources are mutated on every draw. Concurrent callers each need their own
//! source; [`ThreadSource`] handles are cheap and per-thread.

mod prng;
mod sequence;
mod source;

pub use prng::{SeededSource, ThreadSource};
pub use sequence::SequenceSource;
pub use source::RandomSource;
