//! Static-dispatch function enumeration and the evaluation entry points.

use std::sync::Arc;

use crate::function::basis::BasisExpansion;
use crate::function::bundled::BundledFunction;
use crate::function::join::BoundaryJoin;
use crate::types::error::FunctionError;
use crate::types::points::{BoundaryPoint, Canonical, Points, Values};
use num_traits::Float;

/// A function with well-defined values, derivatives of any order, and
/// definite integrals of any order.
///
/// This enum is the closed set of evaluation strategies, dispatched
/// statically: a function either carries no computation (`Unbound`), binds
/// parameters to raw callables (`Bundled`), contracts a basis against
/// coefficients (`Basis`), or composes two functions at a boundary point
/// (`Joined`). Cloning is cheap; the underlying callables and operands are
/// shared.
///
/// # Evaluation contract
///
/// `evaluate(points, order)` interprets its input by the sign of `order`:
///
/// - `order == 0`: function values
/// - `order > 0`: derivatives of that order
/// - `order < 0`: definite integrals, `-order` folds deep
///
/// Shape rules: a scalar yields a scalar; a sequence yields one output per
/// point; an interval pair in value/derivative mode collapses to the row
/// difference `end - start`, while a plain sequence in integral mode
/// expands to intervals from the sequence minimum to each point.
///
/// # Example
///
/// ```
/// use spline_core::function::{BundledFunction, SplineFunction};
/// use spline_core::types::Points;
///
/// let one: SplineFunction<f64> = BundledFunction::new(
///     (),
///     |_: &(), xs: &[f64]| vec![1.0; xs.len()],
///     |_: &(), xs: &[f64], _| vec![0.0; xs.len()],
///     |_: &(), x: f64, order: i32| {
///         let m = -order;
///         let scale: f64 = (1..=m).map(|j| j as f64).product();
///         x.powi(m) / scale
///     },
/// )
/// .into();
///
/// assert_eq!(one.evaluate_at(0.3, 0).unwrap(), 1.0);
///
/// // definite integral over [0, 2]
/// let area = one
///     .evaluate(Points::intervals(vec![0.0], vec![2.0]), -1)
///     .unwrap();
/// assert_eq!(area.into_vec(), vec![2.0]);
/// ```
#[derive(Debug, Clone)]
pub enum SplineFunction<T: 'static> {
    /// No computation bound; every evaluation fails with
    /// [`FunctionError::NotImplemented`].
    Unbound,
    /// Parameterized function family bound to raw callables.
    Bundled(BundledFunction<T>),
    /// Linear combination of basis functions.
    Basis(BasisExpansion<T>),
    /// Piecewise composition of two functions at a boundary point.
    Joined(BoundaryJoin<T>),
}

impl<T: Float + 'static> SplineFunction<T> {
    /// Evaluate the function at the given points.
    ///
    /// # Arguments
    ///
    /// * `points` - A scalar, a sequence, or an interval pair; see
    ///   [`Points`]
    /// * `order` - Signed differentiation/integration depth
    ///
    /// # Returns
    ///
    /// * `Ok(values)` - One output per input point or interval; scalar in,
    ///   scalar out
    /// * `Err(FunctionError::NotImplemented)` - No computation bound
    /// * `Err(FunctionError::InvalidShape)` - Malformed interval rows
    /// * `Err(FunctionError::InvalidInterval)` - `start > end` in integral
    ///   mode
    ///
    /// Empty input short-circuits to an empty result without invoking the
    /// underlying computation.
    pub fn evaluate(
        &self,
        points: impl Into<Points<T>>,
        order: i32,
    ) -> Result<Values<T>, FunctionError> {
        // a missing computation is a configuration error and outranks
        // input errors
        if matches!(self, SplineFunction::Unbound) {
            return Err(FunctionError::NotImplemented);
        }
        let (canonical, is_scalar) = points.into().canonicalize(order)?;
        if canonical.is_empty() {
            return Ok(Values::Vector(Vec::new()));
        }
        let mut values = self.eval_canonical(&canonical, order)?;
        if is_scalar {
            Ok(Values::Scalar(values.swap_remove(0)))
        } else {
            Ok(Values::Vector(values))
        }
    }

    /// Scalar convenience wrapper around [`evaluate`](Self::evaluate).
    pub fn evaluate_at(&self, x: T, order: i32) -> Result<T, FunctionError> {
        let values = self.evaluate(Points::scalar(x), order)?;
        Ok(values.as_scalar().unwrap_or_else(T::nan))
    }

    /// Whether a computation is bound to this function.
    #[inline]
    pub fn is_bound(&self) -> bool {
        !matches!(self, SplineFunction::Unbound)
    }

    /// Join this function (left) with `other` (right) at a boundary point.
    ///
    /// Returns a new piecewise function; both operands are left untouched
    /// and remain independently evaluable. The result is itself a
    /// [`SplineFunction`] and can be appended again to build functions
    /// defined over arbitrarily many segments.
    ///
    /// # Example
    ///
    /// ```
    /// use spline_core::function::{BundledFunction, SplineFunction};
    /// use spline_core::types::BoundaryPoint;
    ///
    /// fn constant(c: f64) -> SplineFunction<f64> {
    ///     BundledFunction::new(
    ///         c,
    ///         |c: &f64, xs: &[f64]| vec![*c; xs.len()],
    ///         |_: &f64, xs: &[f64], _| vec![0.0; xs.len()],
    ///         |c: &f64, x: f64, order: i32| {
    ///             let m = -order;
    ///             let scale: f64 = (1..=m).map(|j| j as f64).product();
    ///             c * x.powi(m) / scale
    ///         },
    ///     )
    ///     .into()
    /// }
    ///
    /// let step = constant(0.0).append(&constant(1.0), BoundaryPoint::new(0.0, true));
    /// assert_eq!(step.evaluate_at(0.0, 0).unwrap(), 0.0);
    /// assert_eq!(step.evaluate_at(0.5, 0).unwrap(), 1.0);
    /// ```
    pub fn append(
        &self,
        other: &SplineFunction<T>,
        boundary: BoundaryPoint<T>,
    ) -> SplineFunction<T> {
        SplineFunction::Joined(BoundaryJoin::new(
            Arc::new(self.clone()),
            Arc::new(other.clone()),
            boundary,
        ))
    }

    /// Dispatch canonical input to the variant's evaluation rule.
    ///
    /// Input is already validated and non-empty; callers are the public
    /// entry points and the composition rules, which hand sub-inputs back
    /// down without re-validation.
    pub(crate) fn eval_canonical(
        &self,
        x: &Canonical<T>,
        order: i32,
    ) -> Result<Vec<T>, FunctionError> {
        match self {
            SplineFunction::Unbound => Err(FunctionError::NotImplemented),
            SplineFunction::Bundled(f) => Ok(match x {
                Canonical::Points(xs) => f.eval_points(xs, order),
                Canonical::Intervals(ivs) => f.eval_intervals(ivs, order),
            }),
            SplineFunction::Basis(f) => f.eval_rule(x, order),
            SplineFunction::Joined(f) => match x {
                Canonical::Points(xs) => f.eval_points(xs, order),
                Canonical::Intervals(ivs) => f.eval_intervals(ivs, order),
            },
        }
    }
}

impl<T: 'static> Default for SplineFunction<T> {
    fn default() -> Self {
        SplineFunction::Unbound
    }
}

impl<T: 'static> From<BundledFunction<T>> for SplineFunction<T> {
    fn from(f: BundledFunction<T>) -> Self {
        SplineFunction::Bundled(f)
    }
}

impl<T: 'static> From<BasisExpansion<T>> for SplineFunction<T> {
    fn from(f: BasisExpansion<T>) -> Self {
        SplineFunction::Basis(f)
    }
}

impl<T: 'static> From<BoundaryJoin<T>> for SplineFunction<T> {
    fn from(f: BoundaryJoin<T>) -> Self {
        SplineFunction::Joined(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Identity function f(x) = x with exact calculus, counting how often
    /// the raw value callable runs.
    fn identity_counting(calls: Arc<AtomicUsize>) -> SplineFunction<f64> {
        BundledFunction::new(
            calls,
            |calls: &Arc<AtomicUsize>, xs: &[f64]| {
                calls.fetch_add(1, Ordering::SeqCst);
                xs.to_vec()
            },
            |_: &Arc<AtomicUsize>, xs: &[f64], order: u32| {
                let v = if order == 1 { 1.0 } else { 0.0 };
                vec![v; xs.len()]
            },
            |_: &Arc<AtomicUsize>, x: f64, order: i32| {
                // m-fold antiderivative of x is x^(m+1) / (m+1)!
                let m = -order;
                let scale: f64 = (1..=(m + 1)).map(|j| j as f64).product();
                x.powi(m + 1) / scale
            },
        )
        .into()
    }

    fn identity() -> SplineFunction<f64> {
        identity_counting(Arc::new(AtomicUsize::new(0)))
    }

    #[test]
    fn test_unbound_fails_before_input_checks() {
        let f: SplineFunction<f64> = SplineFunction::Unbound;
        assert!(!f.is_bound());
        // even a malformed input reports the configuration error first
        let err = f
            .evaluate(Points::intervals(vec![0.0], vec![1.0, 2.0]), 0)
            .unwrap_err();
        assert_eq!(err, FunctionError::NotImplemented);
    }

    #[test]
    fn test_default_is_unbound() {
        let f: SplineFunction<f64> = SplineFunction::default();
        assert_eq!(f.evaluate_at(0.0, 0).unwrap_err(), FunctionError::NotImplemented);
    }

    #[test]
    fn test_scalar_in_scalar_out() {
        let f = identity();
        let result = f.evaluate(Points::scalar(2.5), 0).unwrap();
        assert_eq!(result, Values::Scalar(2.5));
    }

    #[test]
    fn test_scalar_matches_sequence_head() {
        let f = identity();
        let scalar = f.evaluate_at(1.25, 0).unwrap();
        let vector = f.evaluate(vec![1.25], 0).unwrap();
        assert_eq!(vector.as_slice(), &[scalar]);
    }

    #[test]
    fn test_empty_input_skips_computation() {
        let calls = Arc::new(AtomicUsize::new(0));
        let f = identity_counting(calls.clone());
        let result = f.evaluate(Vec::<f64>::new(), 0).unwrap();
        assert!(result.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        let result = f.evaluate(Vec::<f64>::new(), -2).unwrap();
        assert!(result.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_interval_pair_collapses_for_values() {
        let f = identity();
        // value mode uses end - start as the evaluation point
        let result = f
            .evaluate(Points::intervals(vec![1.0, 0.0], vec![4.0, 2.0]), 0)
            .unwrap();
        assert_eq!(result.into_vec(), vec![3.0, 2.0]);
    }

    #[test]
    fn test_sequence_integral_from_minimum() {
        let f = identity();
        // ∫ from min(xs) = 1 to each point of x dx
        let result = f.evaluate(vec![1.0, 3.0], -1).unwrap();
        let values = result.into_vec();
        assert_relative_eq!(values[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(values[1], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_interval_reported() {
        let f = identity();
        let err = f
            .evaluate(Points::intervals(vec![2.0], vec![1.0]), -1)
            .unwrap_err();
        assert_eq!(
            err,
            FunctionError::InvalidInterval {
                index: 0,
                start: 2.0,
                end: 1.0
            }
        );
    }

    #[test]
    fn test_scalar_integral_is_zero_width() {
        let f = identity();
        let result = f.evaluate_at(2.0, -1).unwrap();
        assert_relative_eq!(result, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_from_impls_wrap_variants() {
        let bundled = match identity() {
            SplineFunction::Bundled(b) => b,
            other => panic!("expected Bundled, got {:?}", other),
        };
        let f: SplineFunction<f64> = bundled.into();
        assert!(f.is_bound());
    }
}
