//! Error types for structured error handling.
//!
//! This module provides `FunctionError`, the single error enum covering
//! every failure mode of function evaluation: malformed input shapes,
//! inverted integration intervals, evaluation of an unbound function, and
//! coefficient problems on a basis expansion.

use thiserror::Error;

/// Evaluation errors.
///
/// Every error is raised synchronously at the point of detection and is
/// non-retryable: it indicates a caller or configuration mistake, not a
/// transient failure. There is no partial-result or best-effort mode.
///
/// # Variants
/// - `InvalidShape`: points argument is not a scalar, a sequence, or a
///   well-formed interval pair
/// - `InvalidInterval`: an integration interval has `start > end`
/// - `NotImplemented`: evaluation attempted on an unbound function
/// - `MissingCoefficients`: basis expansion evaluated before coefficients
///   are set
/// - `CoefficientCountMismatch`: coefficient vector length differs from
///   the basis size
///
/// # Examples
/// ```
/// use spline_core::types::FunctionError;
///
/// let err = FunctionError::CoefficientCountMismatch { got: 3, need: 2 };
/// assert!(format!("{}", err).contains("3"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// Points argument is not a scalar, a sequence, or an interval pair
    /// with two equal-length rows.
    #[error("Invalid points shape: {0}")]
    InvalidShape(String),

    /// An integration interval has its start above its end.
    #[error("Invalid interval at index {index}: start {start} > end {end}")]
    InvalidInterval {
        /// Position of the offending interval in the input
        index: usize,
        /// Interval start
        start: f64,
        /// Interval end
        end: f64,
    },

    /// Evaluation attempted on a function with no bound computation.
    #[error("No computation bound to this function")]
    NotImplemented,

    /// Basis expansion evaluated before coefficients were set.
    #[error("Coefficients must be set before evaluating a basis expansion")]
    MissingCoefficients,

    /// Coefficient vector length does not match the number of basis
    /// functions.
    #[error("Coefficient count mismatch: got {got}, need {need}")]
    CoefficientCountMismatch {
        /// Number of coefficients provided
        got: usize,
        /// Number of basis functions
        need: usize,
    },
}
