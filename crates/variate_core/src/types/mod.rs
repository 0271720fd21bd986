//! Core types shared by every variate crate.
//!
//! This module provides:
//! - `error`: Structured error types for construction, bound and sampling failures
//!
//! # Re-exports
//!
//! [`VariateError`] and [`VariateResult`] are re-exported at this module level.

pub mod error;

pub use error::{VariateError, VariateResult};
