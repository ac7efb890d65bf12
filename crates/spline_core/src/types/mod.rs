//! Core input/output and error types.
//!
//! This module provides:
//! - `points`: input shapes ([`Points`]), output wrapper ([`Values`]),
//!   integration intervals ([`Interval`]) and boundary descriptors
//!   ([`BoundaryPoint`])
//! - `error`: the [`FunctionError`] enum covering every evaluation failure
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod error;
pub mod points;

// Re-export commonly used types at module level
pub use error::FunctionError;
pub use points::{BoundaryPoint, Interval, Points, Values};
