//! Basis expansions: weighted sums of basis functions.

use std::sync::Arc;

use crate::function::function_enum::SplineFunction;
use crate::types::error::FunctionError;
use crate::types::points::{Canonical, Points};
use num_traits::Float;

/// An ordered collection of basis functions with optional coefficients.
///
/// The basis functions are shared (`Arc`), not copied, and read-only from
/// the expansion's perspective. With coefficients set, the expansion
/// evaluates as the dot product of each design-matrix row with the
/// coefficient vector; without them, evaluation fails with
/// [`FunctionError::MissingCoefficients`] while
/// [`design_matrix`](Self::design_matrix) remains available for fitting
/// collaborators.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use spline_core::function::{BasisExpansion, BundledFunction, SplineFunction};
///
/// fn power(k: i32) -> Arc<SplineFunction<f64>> {
///     Arc::new(
///         BundledFunction::new(
///             k,
///             |k: &i32, xs: &[f64]| xs.iter().map(|x| x.powi(*k)).collect(),
///             |k: &i32, xs: &[f64], order: u32| {
///                 let m = order as i32;
///                 xs.iter()
///                     .map(|x| {
///                         if m > *k {
///                             0.0
///                         } else {
///                             let scale: f64 =
///                                 ((*k - m + 1)..=*k).map(|j| j as f64).product();
///                             scale * x.powi(*k - m)
///                         }
///                     })
///                     .collect()
///             },
///             |k: &i32, x: f64, order: i32| {
///                 let m = -order;
///                 let scale: f64 = ((*k + 1)..=(*k + m)).map(|j| j as f64).product();
///                 x.powi(*k + m) / scale
///             },
///         )
///         .into(),
///     )
/// }
///
/// // 2 + 3x as an expansion over the monomial basis {1, x}
/// let expansion = BasisExpansion::new(vec![power(0), power(1)], Some(vec![2.0, 3.0])).unwrap();
/// let f: SplineFunction<f64> = expansion.into();
/// assert_eq!(f.evaluate_at(5.0, 0).unwrap(), 17.0);
/// ```
#[derive(Debug, Clone)]
pub struct BasisExpansion<T: 'static> {
    basis: Vec<Arc<SplineFunction<T>>>,
    coefficients: Option<Vec<T>>,
}

impl<T: Float + 'static> BasisExpansion<T> {
    /// Create an expansion over `basis`, optionally with coefficients.
    ///
    /// # Returns
    ///
    /// * `Ok(expansion)` - Basis stored; coefficients validated if present
    /// * `Err(FunctionError::CoefficientCountMismatch)` - Coefficient
    ///   vector length differs from the basis size
    pub fn new(
        basis: Vec<Arc<SplineFunction<T>>>,
        coefficients: Option<Vec<T>>,
    ) -> Result<Self, FunctionError> {
        let mut expansion = Self {
            basis,
            coefficients: None,
        };
        expansion.set_coefficients(coefficients)?;
        Ok(expansion)
    }

    /// Number of basis functions, fixed at construction.
    #[inline]
    pub fn len(&self) -> usize {
        self.basis.len()
    }

    /// Whether the basis is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.basis.is_empty()
    }

    /// The current coefficients, if set.
    #[inline]
    pub fn coefficients(&self) -> Option<&[T]> {
        self.coefficients.as_deref()
    }

    /// Set or clear the coefficients.
    ///
    /// `None` clears them, making subsequent evaluation fail with
    /// [`FunctionError::MissingCoefficients`]. A vector is validated
    /// against the basis size on every call.
    pub fn set_coefficients(
        &mut self,
        coefficients: Option<Vec<T>>,
    ) -> Result<(), FunctionError> {
        if let Some(ref coefs) = coefficients {
            if coefs.len() != self.basis.len() {
                return Err(FunctionError::CoefficientCountMismatch {
                    got: coefs.len(),
                    need: self.basis.len(),
                });
            }
        }
        self.coefficients = coefficients;
        Ok(())
    }

    /// Build the design matrix: one row per input point, one column per
    /// basis function, in basis order.
    ///
    /// Input shape and interval rules are the same as for
    /// [`SplineFunction::evaluate`]; a scalar input yields a single row.
    /// Used by external regression/fitting collaborators.
    pub fn design_matrix(
        &self,
        points: impl Into<Points<T>>,
        order: i32,
    ) -> Result<Vec<Vec<T>>, FunctionError> {
        let (canonical, _) = points.into().canonicalize(order)?;
        self.design_matrix_raw(&canonical, order)
    }

    /// Design matrix over already-canonicalized input; the evaluation rule
    /// calls this directly to avoid validating twice.
    pub(crate) fn design_matrix_raw(
        &self,
        x: &Canonical<T>,
        order: i32,
    ) -> Result<Vec<Vec<T>>, FunctionError> {
        let mut columns = Vec::with_capacity(self.basis.len());
        for fun in &self.basis {
            columns.push(fun.eval_canonical(x, order)?);
        }
        let mut matrix: Vec<Vec<T>> = (0..x.len())
            .map(|_| Vec::with_capacity(self.basis.len()))
            .collect();
        for column in &columns {
            for (row, value) in matrix.iter_mut().zip(column) {
                row.push(*value);
            }
        }
        Ok(matrix)
    }

    /// Evaluation rule: design matrix contracted against the coefficients.
    pub(crate) fn eval_rule(
        &self,
        x: &Canonical<T>,
        order: i32,
    ) -> Result<Vec<T>, FunctionError> {
        let coefficients = self
            .coefficients
            .as_ref()
            .ok_or(FunctionError::MissingCoefficients)?;
        let matrix = self.design_matrix_raw(x, order)?;
        Ok(matrix
            .iter()
            .map(|row| {
                row.iter()
                    .zip(coefficients)
                    .fold(T::zero(), |acc, (v, c)| acc + *v * *c)
            })
            .collect())
    }
}
