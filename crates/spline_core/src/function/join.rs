//! Piecewise composition of two functions at a boundary point.

use std::sync::Arc;

use crate::function::function_enum::SplineFunction;
use crate::math::taylor_weights;
use crate::types::error::FunctionError;
use crate::types::points::{BoundaryPoint, Canonical, Interval};
use num_traits::Float;

/// Two functions joined at a boundary point into one piecewise function.
///
/// A point belongs to the left operand's side when `on_left` holds for it
/// (see [`BoundaryPoint`]); values and derivatives are purely local, so
/// order ≥ 0 evaluation is plain per-point selection. Definite integrals
/// are not: an interval straddling the boundary must be split at the
/// boundary and recombined with a Taylor correction, because the `n`-fold
/// antiderivative of a piecewise function is not additive across the split
/// when `n > 1`.
///
/// Constructed via [`SplineFunction::append`]; both operands are shared,
/// unmodified, and remain independently evaluable.
#[derive(Debug, Clone)]
pub struct BoundaryJoin<T: 'static> {
    left: Arc<SplineFunction<T>>,
    right: Arc<SplineFunction<T>>,
    boundary: BoundaryPoint<T>,
}

impl<T: Float + 'static> BoundaryJoin<T> {
    /// Join `left` and `right` at `boundary`.
    pub fn new(
        left: Arc<SplineFunction<T>>,
        right: Arc<SplineFunction<T>>,
        boundary: BoundaryPoint<T>,
    ) -> Self {
        Self {
            left,
            right,
            boundary,
        }
    }

    /// The boundary at which the operands are joined.
    #[inline]
    pub fn boundary(&self) -> BoundaryPoint<T> {
        self.boundary
    }

    /// The left operand.
    #[inline]
    pub fn left(&self) -> &SplineFunction<T> {
        &self.left
    }

    /// The right operand.
    #[inline]
    pub fn right(&self) -> &SplineFunction<T> {
        &self.right
    }

    /// Per-point side selection for values and derivatives.
    pub(crate) fn eval_points(&self, xs: &[T], order: i32) -> Result<Vec<T>, FunctionError> {
        let sides: Vec<bool> = xs.iter().map(|x| self.boundary.on_left(*x)).collect();
        let mut left_xs = Vec::new();
        let mut right_xs = Vec::new();
        for (x, on_left) in xs.iter().zip(&sides) {
            if *on_left {
                left_xs.push(*x);
            } else {
                right_xs.push(*x);
            }
        }

        let left_vals = if left_xs.is_empty() {
            Vec::new()
        } else {
            self.left.eval_canonical(&Canonical::Points(left_xs), order)?
        };
        let right_vals = if right_xs.is_empty() {
            Vec::new()
        } else {
            self.right.eval_canonical(&Canonical::Points(right_xs), order)?
        };

        // merge back in input order
        let mut left_iter = left_vals.into_iter();
        let mut right_iter = right_vals.into_iter();
        let mut result = Vec::with_capacity(xs.len());
        for on_left in sides {
            let value = if on_left {
                left_iter.next()
            } else {
                right_iter.next()
            };
            result.push(value.unwrap_or_else(T::nan));
        }
        Ok(result)
    }

    /// Integral rule: three-way interval partition with a Taylor-shift
    /// correction for intervals straddling the boundary.
    pub(crate) fn eval_intervals(
        &self,
        intervals: &[Interval<T>],
        order: i32,
    ) -> Result<Vec<T>, FunctionError> {
        let split = self.boundary.location;
        let mut left_slots = Vec::new();
        let mut left_ivs = Vec::new();
        let mut right_slots = Vec::new();
        let mut right_ivs = Vec::new();
        let mut straddle_slots = Vec::new();
        let mut straddle_ivs = Vec::new();

        for (i, iv) in intervals.iter().enumerate() {
            let start_left = self.boundary.on_left(iv.start);
            let end_left = self.boundary.on_left(iv.end);
            if start_left && end_left {
                left_slots.push(i);
                left_ivs.push(*iv);
            } else if !start_left {
                // start <= end, so a right-side start puts the whole
                // interval on the right
                right_slots.push(i);
                right_ivs.push(*iv);
            } else {
                straddle_slots.push(i);
                straddle_ivs.push(*iv);
            }
        }

        let mut result = vec![T::zero(); intervals.len()];

        if !left_ivs.is_empty() {
            let values = self
                .left
                .eval_canonical(&Canonical::Intervals(left_ivs), order)?;
            for (slot, value) in left_slots.into_iter().zip(values) {
                result[slot] = value;
            }
        }
        if !right_ivs.is_empty() {
            let values = self
                .right
                .eval_canonical(&Canonical::Intervals(right_ivs), order)?;
            for (slot, value) in right_slots.into_iter().zip(values) {
                result[slot] = value;
            }
        }
        if !straddle_ivs.is_empty() {
            let folds = (-order) as usize;
            let left_parts = Canonical::Intervals(
                straddle_ivs
                    .iter()
                    .map(|iv| Interval::new(iv.start, split))
                    .collect(),
            );
            let right_parts = Canonical::Intervals(
                straddle_ivs
                    .iter()
                    .map(|iv| Interval::new(split, iv.end))
                    .collect(),
            );
            // weights[j][i] = (end_j - split)^i / i!
            let weights: Vec<Vec<T>> = straddle_ivs
                .iter()
                .map(|iv| taylor_weights(iv.end - split).take(folds).collect())
                .collect();

            // lower-order integrals of the left piece, Taylor-shifted
            // across the split into the right segment
            for i in 1..folds {
                let corrections = self.left.eval_canonical(&left_parts, order + i as i32)?;
                for ((slot, correction), w) in
                    straddle_slots.iter().zip(corrections).zip(&weights)
                {
                    result[*slot] = result[*slot] + correction * w[i];
                }
            }

            let left_tail = self.left.eval_canonical(&left_parts, order)?;
            let right_tail = self.right.eval_canonical(&right_parts, order)?;
            for ((slot, l), r) in straddle_slots.iter().zip(left_tail).zip(right_tail) {
                result[*slot] = result[*slot] + l + r;
            }
        }

        Ok(result)
    }
}
