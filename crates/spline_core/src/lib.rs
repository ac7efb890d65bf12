//! # spline_core: piecewise function evaluation
//!
//! Evaluation of piecewise polynomial functions — values, derivatives of
//! any order, and definite integrals of any order — over scalar, sequence,
//! or interval inputs, plus composition of such functions by basis
//! expansion and by concatenation at boundary points.
//!
//! The crate deliberately does not construct spline bases: raw value /
//! derivative / antiderivative callables are supplied by an external
//! collaborator (a B-spline builder, a monomial family, ...) and bound
//! into a [`function::BundledFunction`]. Everything here is about
//! evaluating and composing such functions correctly, in particular
//! definite integrals that straddle the point where two pieces meet.
//!
//! ## Modules
//!
//! - [`function`]: the evaluation abstraction ([`function::SplineFunction`])
//!   and its strategies
//! - [`types`]: input/output shapes and error types
//! - [`math`]: the Taylor weight series used by the integral rules
//!
//! ## Usage
//!
//! ```rust
//! use spline_core::function::{BundledFunction, SplineFunction};
//! use spline_core::types::{BoundaryPoint, Points};
//!
//! // the constant function c, with exact antiderivatives
//! fn constant(c: f64) -> SplineFunction<f64> {
//!     BundledFunction::new(
//!         c,
//!         |c: &f64, xs: &[f64]| vec![*c; xs.len()],
//!         |_: &f64, xs: &[f64], _| vec![0.0; xs.len()],
//!         |c: &f64, x: f64, order: i32| {
//!             let m = -order;
//!             let scale: f64 = (1..=m).map(|j| j as f64).product();
//!             c * x.powi(m) / scale
//!         },
//!     )
//!     .into()
//! }
//!
//! // piecewise: 1 on the left of 0.5, 1 on the right
//! let f = constant(1.0).append(&constant(1.0), BoundaryPoint::new(0.5, true));
//!
//! // definite integral over [0, 1] straddles the boundary
//! let area = f.evaluate(Points::intervals(vec![0.0], vec![1.0]), -1).unwrap();
//! assert!((area.as_slice()[0] - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Concurrency
//!
//! Evaluation is synchronous, stateless per call, and free of shared
//! mutable state; every function type is `Send + Sync` for `Send + Sync`
//! scalar types, so concurrent evaluation from multiple threads is safe.
//! Reassigning coefficients on a [`function::BasisExpansion`] takes
//! `&mut self` and is therefore serialized by the borrow checker.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod function;
pub mod math;
pub mod types;
