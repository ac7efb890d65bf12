//! Input and output containers for function evaluation.
//!
//! This module provides:
//! - [`Points`]: the three accepted input shapes (scalar, sequence,
//!   interval pair)
//! - [`Values`]: the output wrapper preserving scalar-in / scalar-out
//! - [`Interval`]: a single integration interval
//! - [`BoundaryPoint`]: the location/inclusivity pair at which two
//!   functions are joined
//!
//! Canonicalization — the reconciliation of input shape with the
//! evaluation order — lives here as well, so every evaluation entry point
//! applies identical rules.

use crate::types::error::FunctionError;
use num_traits::Float;

/// A single integration interval `[start, end]`.
///
/// # Example
///
/// ```
/// use spline_core::types::Interval;
///
/// let iv = Interval::new(0.0, 1.5);
/// assert_eq!(iv.width(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    /// Interval start
    pub start: T,
    /// Interval end
    pub end: T,
}

impl<T: Float> Interval<T> {
    /// Create an interval from its endpoints.
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// Width of the interval, `end - start`.
    #[inline]
    pub fn width(&self) -> T {
        self.end - self.start
    }
}

/// The point at which two functions are joined into one piecewise
/// function.
///
/// `inclusive` controls whether the left function's domain contains the
/// boundary location itself.
///
/// # Example
///
/// ```
/// use spline_core::types::BoundaryPoint;
///
/// let sep = BoundaryPoint::new(0.5, true);
/// assert!(sep.on_left(0.5));
/// assert!(!sep.on_left(0.6));
///
/// let open = BoundaryPoint::new(0.5, false);
/// assert!(!open.on_left(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPoint<T> {
    /// Boundary location
    pub location: T,
    /// Whether the left side includes the boundary location
    pub inclusive: bool,
}

impl<T: Float> BoundaryPoint<T> {
    /// Create a boundary point.
    #[inline]
    pub fn new(location: T, inclusive: bool) -> Self {
        Self {
            location,
            inclusive,
        }
    }

    /// Membership test: does `x` fall on the left function's side?
    #[inline]
    pub fn on_left(&self, x: T) -> bool {
        if self.inclusive {
            x <= self.location
        } else {
            x < self.location
        }
    }
}

/// Accepted input shapes for function evaluation.
///
/// - `Scalar`: one point; the result is unwrapped back to a scalar
/// - `Sequence`: an ordered set of points, one output per point
/// - `Intervals`: two equal-length rows, row 0 holding interval starts and
///   row 1 holding interval ends
///
/// How a shape is interpreted depends on the evaluation order; see
/// [`SplineFunction::evaluate`](crate::function::SplineFunction::evaluate).
///
/// # Example
///
/// ```
/// use spline_core::types::Points;
///
/// let p: Points<f64> = vec![0.0, 0.5, 1.0].into();
/// let q = Points::scalar(0.5);
/// let r = Points::intervals(vec![0.0, 0.0], vec![0.5, 1.0]);
/// # let _ = (p, q, r);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Points<T> {
    /// A single evaluation point.
    Scalar(T),
    /// An ordered sequence of evaluation points.
    Sequence(Vec<T>),
    /// Interval rows: starts, then ends (equal length required).
    Intervals(Vec<T>, Vec<T>),
}

impl<T: Float> Points<T> {
    /// A single evaluation point.
    #[inline]
    pub fn scalar(x: T) -> Self {
        Points::Scalar(x)
    }

    /// An ordered sequence of evaluation points.
    #[inline]
    pub fn sequence(xs: Vec<T>) -> Self {
        Points::Sequence(xs)
    }

    /// An interval pair: starts in the first row, ends in the second.
    #[inline]
    pub fn intervals(starts: Vec<T>, ends: Vec<T>) -> Self {
        Points::Intervals(starts, ends)
    }

    /// Reconcile the input shape with the evaluation order.
    ///
    /// Rules (applied in this order):
    /// - a scalar becomes a length-1 sequence; scalar-ness is returned so
    ///   the caller can unwrap the result
    /// - `order >= 0` with interval rows collapses to the single points
    ///   `end - start`
    /// - `order < 0` with a sequence expands to intervals running from the
    ///   sequence minimum to each point
    /// - `order < 0` requires `start <= end` for every interval
    ///
    /// Returns the canonical input and whether the original was a scalar.
    pub(crate) fn canonicalize(
        self,
        order: i32,
    ) -> Result<(Canonical<T>, bool), FunctionError> {
        match self {
            Points::Scalar(x) => {
                if order >= 0 {
                    Ok((Canonical::Points(vec![x]), true))
                } else {
                    // one-point sequence: the minimum is the point itself
                    Ok((Canonical::Intervals(vec![Interval::new(x, x)]), true))
                }
            }
            Points::Sequence(xs) => {
                if order >= 0 {
                    Ok((Canonical::Points(xs), false))
                } else if xs.is_empty() {
                    Ok((Canonical::Intervals(Vec::new()), false))
                } else {
                    // integrate from the sequence minimum to each point
                    let lower = xs.iter().copied().fold(T::infinity(), T::min);
                    let intervals = xs
                        .into_iter()
                        .map(|x| Interval::new(lower, x))
                        .collect();
                    Ok((Canonical::Intervals(intervals), false))
                }
            }
            Points::Intervals(starts, ends) => {
                if starts.len() != ends.len() {
                    return Err(FunctionError::InvalidShape(format!(
                        "interval rows differ in length: {} and {}",
                        starts.len(),
                        ends.len()
                    )));
                }
                if order >= 0 {
                    // value/derivative on an interval pair evaluates at the
                    // row difference
                    let diffs = starts
                        .iter()
                        .zip(ends.iter())
                        .map(|(s, e)| *e - *s)
                        .collect();
                    Ok((Canonical::Points(diffs), false))
                } else {
                    let intervals: Vec<Interval<T>> = starts
                        .into_iter()
                        .zip(ends)
                        .map(|(s, e)| Interval::new(s, e))
                        .collect();
                    for (index, iv) in intervals.iter().enumerate() {
                        if iv.start > iv.end {
                            return Err(FunctionError::InvalidInterval {
                                index,
                                start: iv.start.to_f64().unwrap_or(f64::NAN),
                                end: iv.end.to_f64().unwrap_or(f64::NAN),
                            });
                        }
                    }
                    Ok((Canonical::Intervals(intervals), false))
                }
            }
        }
    }
}

impl<T: Float> From<T> for Points<T> {
    #[inline]
    fn from(x: T) -> Self {
        Points::Scalar(x)
    }
}

impl<T: Float> From<Vec<T>> for Points<T> {
    #[inline]
    fn from(xs: Vec<T>) -> Self {
        Points::Sequence(xs)
    }
}

impl<T: Float> From<&[T]> for Points<T> {
    #[inline]
    fn from(xs: &[T]) -> Self {
        Points::Sequence(xs.to_vec())
    }
}

impl<T: Float> From<(Vec<T>, Vec<T>)> for Points<T> {
    #[inline]
    fn from((starts, ends): (Vec<T>, Vec<T>)) -> Self {
        Points::Intervals(starts, ends)
    }
}

/// Canonical evaluation input after shape/order reconciliation.
///
/// Internal rules never see raw [`Points`]: value/derivative rules receive
/// plain points, integral rules receive interval pairs.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Canonical<T> {
    /// Evaluation points for `order >= 0`.
    Points(Vec<T>),
    /// Integration intervals for `order < 0`.
    Intervals(Vec<Interval<T>>),
}

impl<T> Canonical<T> {
    pub(crate) fn len(&self) -> usize {
        match self {
            Canonical::Points(xs) => xs.len(),
            Canonical::Intervals(ivs) => ivs.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Evaluation output: a scalar for scalar input, a vector otherwise.
///
/// # Example
///
/// ```
/// use spline_core::types::Values;
///
/// let v = Values::Vector(vec![1.0, 2.0]);
/// assert_eq!(v.as_slice(), &[1.0, 2.0]);
/// assert_eq!(v.as_scalar(), None);
///
/// let s = Values::Scalar(3.0);
/// assert_eq!(s.as_scalar(), Some(3.0));
/// assert_eq!(s.as_slice(), &[3.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Values<T> {
    /// Result of a scalar evaluation.
    Scalar(T),
    /// Result of a sequence or interval evaluation, one entry per input.
    Vector(Vec<T>),
}

impl<T: Float> Values<T> {
    /// The scalar result, if the input was a scalar.
    #[inline]
    pub fn as_scalar(&self) -> Option<T> {
        match self {
            Values::Scalar(v) => Some(*v),
            Values::Vector(_) => None,
        }
    }

    /// View the result as a slice (length 1 for a scalar).
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        match self {
            Values::Scalar(v) => std::slice::from_ref(v),
            Values::Vector(vs) => vs,
        }
    }

    /// Consume the result into a vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Values::Scalar(v) => vec![v],
            Values::Vector(vs) => vs,
        }
    }

    /// Number of result entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the result holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}
