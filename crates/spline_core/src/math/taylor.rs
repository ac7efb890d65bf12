//! Taylor weight series shared by the integral evaluation rules.

use num_traits::Float;

/// Iterator over the Taylor weights `width^i / i!` for `i = 0, 1, 2, ...`.
///
/// Both integral rules consume this series: the antiderivative-difference
/// formula of a bundled function subtracts `int(start, order + i)`
/// weighted by `width^i / i!`, and the straddling correction of a boundary
/// join shifts the left piece's lower-order integrals across the split
/// with the same weights.
///
/// The iterator is infinite; callers bound it with `take`.
///
/// # Example
///
/// ```
/// use spline_core::math::taylor_weights;
///
/// let w: Vec<f64> = taylor_weights(2.0).take(4).collect();
/// assert_eq!(w, vec![1.0, 2.0, 2.0, 4.0 / 3.0]);
/// ```
pub fn taylor_weights<T: Float>(width: T) -> impl Iterator<Item = T> {
    let mut weight = T::one();
    let mut index = 0u32;
    std::iter::from_fn(move || {
        let current = weight;
        index += 1;
        weight = weight * width / T::from(index).unwrap_or_else(T::nan);
        Some(current)
    })
}
