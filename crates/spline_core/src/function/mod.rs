//! Evaluable functions: values, derivatives, and definite integrals.
//!
//! This module provides the function-evaluation abstraction itself:
//!
//! - [`SplineFunction`]: the closed set of evaluation strategies with the
//!   `evaluate` / `append` entry points
//! - [`BundledFunction`]: a parameter pack bound to raw value /
//!   derivative / antiderivative callables
//! - [`BasisExpansion`]: a weighted sum of shared basis functions with a
//!   design-matrix entry point for fitting collaborators
//! - [`BoundaryJoin`]: two functions composed piecewise at a boundary
//!   point, with the straddling-integral correction
//!
//! ## Order convention
//!
//! A single signed integer selects the operation everywhere: `0` for the
//! function value, `n > 0` for the `n`-th derivative, `n < 0` for the
//! `|n|`-fold definite integral.

mod basis;
mod bundled;
mod function_enum;
mod join;

// Re-export public types at module level
pub use basis::BasisExpansion;
pub use bundled::BundledFunction;
pub use function_enum::SplineFunction;
pub use join::BoundaryJoin;
