//! Parameterized function families bound to raw callables.

use std::fmt;
use std::sync::Arc;

use crate::math::taylor_weights;
use crate::types::points::Interval;
use num_traits::Float;

type ValueFn<T> = Arc<dyn Fn(&[T]) -> Vec<T> + Send + Sync>;
type DerivFn<T> = Arc<dyn Fn(&[T], u32) -> Vec<T> + Send + Sync>;
type IntegralFn<T> = Arc<dyn Fn(T, i32) -> T + Send + Sync>;

/// A function defined by a parameter pack and three raw callables.
///
/// The constructor partially applies an opaque parameter value to the
/// callables, so one implementation can serve a whole family of functions
/// (one basis spline per knot span, one monomial per exponent, ...). The
/// callables must return one output per input point; that contract is not
/// checked.
///
/// Dispatch on the evaluation order:
/// - `0`: the value callable
/// - `> 0`: the derivative callable
/// - `< 0`: the definite integral, assembled from point evaluations of the
///   antiderivative callable as `int(end, order) - Σ int(start, order + i)
///   · width^i / i!` for `i` in `0..n` with `n = -order`. This expresses an
///   `n`-fold integral without any numeric quadrature.
///
/// # Example
///
/// A family of monomials `x^k` parameterized by the exponent:
///
/// ```
/// use spline_core::function::{BundledFunction, SplineFunction};
///
/// let square: SplineFunction<f64> = BundledFunction::new(
///     2i32,
///     |k: &i32, xs: &[f64]| xs.iter().map(|x| x.powi(*k)).collect(),
///     |k: &i32, xs: &[f64], order: u32| {
///         let m = order as i32;
///         xs.iter()
///             .map(|x| {
///                 if m > *k {
///                     0.0
///                 } else {
///                     let scale: f64 = ((*k - m + 1)..=*k).map(|j| j as f64).product();
///                     scale * x.powi(*k - m)
///                 }
///             })
///             .collect()
///     },
///     |k: &i32, x: f64, order: i32| {
///         let m = -order;
///         let scale: f64 = ((*k + 1)..=(*k + m)).map(|j| j as f64).product();
///         x.powi(*k + m) / scale
///     },
/// )
/// .into();
///
/// assert_eq!(square.evaluate_at(3.0, 0).unwrap(), 9.0);
/// assert_eq!(square.evaluate_at(3.0, 1).unwrap(), 6.0);
/// ```
#[derive(Clone)]
pub struct BundledFunction<T: 'static> {
    val_fun: ValueFn<T>,
    der_fun: DerivFn<T>,
    int_fun: IntegralFn<T>,
}

impl<T: Float + 'static> BundledFunction<T> {
    /// Bind a parameter pack to the three raw callables.
    ///
    /// # Arguments
    ///
    /// * `params` - Opaque parameters, passed unchanged as the first
    ///   argument of every callable
    /// * `val_fun` - `(params, points) -> values`
    /// * `der_fun` - `(params, points, order > 0) -> values`
    /// * `int_fun` - `(params, point, order < 0) -> value`, the point
    ///   evaluation of the `|order|`-fold antiderivative
    pub fn new<P, V, D, I>(params: P, val_fun: V, der_fun: D, int_fun: I) -> Self
    where
        P: Clone + Send + Sync + 'static,
        V: Fn(&P, &[T]) -> Vec<T> + Send + Sync + 'static,
        D: Fn(&P, &[T], u32) -> Vec<T> + Send + Sync + 'static,
        I: Fn(&P, T, i32) -> T + Send + Sync + 'static,
    {
        let val_params = params.clone();
        let der_params = params.clone();
        let int_params = params;
        Self {
            val_fun: Arc::new(move |xs| val_fun(&val_params, xs)),
            der_fun: Arc::new(move |xs, order| der_fun(&der_params, xs, order)),
            int_fun: Arc::new(move |x, order| int_fun(&int_params, x, order)),
        }
    }

    /// Value (`order == 0`) or derivative (`order > 0`) at plain points.
    pub(crate) fn eval_points(&self, xs: &[T], order: i32) -> Vec<T> {
        if order == 0 {
            (self.val_fun)(xs)
        } else {
            (self.der_fun)(xs, order as u32)
        }
    }

    /// Definite `(-order)`-fold integral over each interval.
    pub(crate) fn eval_intervals(&self, intervals: &[Interval<T>], order: i32) -> Vec<T> {
        let folds = (-order) as usize;
        intervals
            .iter()
            .map(|iv| {
                let mut value = (self.int_fun)(iv.end, order);
                for (i, weight) in taylor_weights(iv.width()).take(folds).enumerate() {
                    value = value - (self.int_fun)(iv.start, order + i as i32) * weight;
                }
                value
            })
            .collect()
    }
}

impl<T: 'static> fmt::Debug for BundledFunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BundledFunction").finish_non_exhaustive()
    }
}
