//! Integration tests for the public evaluation API: bundled monomial
//! families, basis expansions, and piecewise functions built by appending
//! at boundary points.

use std::sync::Arc;

use approx::assert_relative_eq;
use spline_core::function::{BasisExpansion, BundledFunction, SplineFunction};
use spline_core::types::{BoundaryPoint, FunctionError, Points};

/// Monomial x^k with exact derivatives and antiderivatives.
fn monomial(k: i32) -> SplineFunction<f64> {
    BundledFunction::new(
        k,
        |k: &i32, xs: &[f64]| xs.iter().map(|x| x.powi(*k)).collect(),
        |k: &i32, xs: &[f64], order: u32| {
            let m = order as i32;
            xs.iter()
                .map(|x| {
                    if m > *k {
                        0.0
                    } else {
                        let scale: f64 = ((*k - m + 1)..=*k).map(|j| j as f64).product();
                        scale * x.powi(*k - m)
                    }
                })
                .collect()
        },
        |k: &i32, x: f64, order: i32| {
            let m = -order;
            let scale: f64 = ((*k + 1)..=(*k + m)).map(|j| j as f64).product();
            x.powi(*k + m) / scale
        },
    )
    .into()
}

/// Affine function c0 + c1·x.
fn affine(c0: f64, c1: f64) -> SplineFunction<f64> {
    BundledFunction::new(
        (c0, c1),
        |c: &(f64, f64), xs: &[f64]| xs.iter().map(|x| c.0 + c.1 * x).collect(),
        |c: &(f64, f64), xs: &[f64], order: u32| {
            let v = if order == 1 { c.1 } else { 0.0 };
            vec![v; xs.len()]
        },
        |c: &(f64, f64), x: f64, order: i32| {
            let m = -order;
            let m_fact: f64 = (1..=m).map(|j| j as f64).product();
            let m1_fact = m_fact * (m + 1) as f64;
            c.0 * x.powi(m) / m_fact + c.1 * x.powi(m + 1) / m1_fact
        },
    )
    .into()
}

#[test]
fn scalar_and_sequence_evaluation_agree() {
    let f = monomial(3);
    for &x in &[-2.0, -0.5, 0.0, 1.0, 2.5] {
        let scalar = f.evaluate_at(x, 0).unwrap();
        let vector = f.evaluate(vec![x], 0).unwrap();
        assert_eq!(vector.as_slice(), &[scalar]);
    }
}

#[test]
fn empty_input_returns_empty_for_any_order() {
    let f = monomial(2);
    for order in [-3, -1, 0, 1, 4] {
        let result = f.evaluate(Vec::<f64>::new(), order).unwrap();
        assert!(result.is_empty());
    }
}

#[test]
fn integral_of_derivative_recovers_value_difference() {
    // ∫_a^b f'(x) dx = f(b) - f(a), with f' supplied as its own bundled
    // function: f = x^4, f' = 4x^3
    let f = monomial(4);
    let fprime: SplineFunction<f64> = BundledFunction::new(
        (),
        |_: &(), xs: &[f64]| xs.iter().map(|x| 4.0 * x.powi(3)).collect(),
        |_: &(), xs: &[f64], order: u32| {
            let m = order as i32;
            xs.iter()
                .map(|x| {
                    if m > 3 {
                        0.0
                    } else {
                        let scale: f64 = ((4 - m)..=3).map(|j| j as f64).product();
                        4.0 * scale * x.powi(3 - m)
                    }
                })
                .collect()
        },
        |_: &(), x: f64, order: i32| {
            let m = -order;
            let scale: f64 = (4..=(3 + m)).map(|j| j as f64).product();
            4.0 * x.powi(3 + m) / scale
        },
    )
    .into();

    let (a, b) = (0.25_f64, 1.75);
    let integral = fprime
        .evaluate(Points::intervals(vec![a], vec![b]), -1)
        .unwrap();
    let difference = f.evaluate_at(b, 0).unwrap() - f.evaluate_at(a, 0).unwrap();
    assert_relative_eq!(integral.as_slice()[0], difference, epsilon = 1e-10);
}

#[test]
fn basis_expansion_integral_matches_closed_form() {
    let expansion = BasisExpansion::new(
        vec![
            Arc::new(monomial(0)),
            Arc::new(monomial(1)),
            Arc::new(monomial(2)),
            Arc::new(monomial(3)),
        ],
        Some(vec![1.0, -2.0, 0.5, 3.0]),
    )
    .unwrap();
    let f: SplineFunction<f64> = expansion.into();
    let (a, b) = (0.25_f64, 1.75);

    let integral = f
        .evaluate(Points::intervals(vec![a], vec![b]), -1)
        .unwrap();
    let expected: f64 = [1.0, -2.0, 0.5, 3.0]
        .iter()
        .zip(0..4)
        .map(|(c, k)| c * (b.powi(k + 1) - a.powi(k + 1)) / (k + 1) as f64)
        .sum();
    assert_relative_eq!(integral.as_slice()[0], expected, epsilon = 1e-10);
}

#[test]
fn design_matrix_times_coefficients_equals_evaluation() {
    let basis = vec![
        Arc::new(monomial(0)),
        Arc::new(monomial(1)),
        Arc::new(monomial(2)),
    ];
    let coefs = vec![0.5, -1.0, 2.0];
    let expansion = BasisExpansion::new(basis, Some(coefs.clone())).unwrap();

    let xs = vec![-1.0, 0.0, 0.5, 2.0];
    let matrix = expansion.design_matrix(xs.clone(), 0).unwrap();
    assert_eq!(matrix.len(), xs.len());
    assert_eq!(matrix[0].len(), 3);

    let f: SplineFunction<f64> = expansion.into();
    let values = f.evaluate(xs, 0).unwrap();
    for (row, value) in matrix.iter().zip(values.as_slice()) {
        let contracted: f64 = row.iter().zip(&coefs).map(|(v, c)| v * c).sum();
        assert_relative_eq!(contracted, *value, epsilon = 1e-12);
    }
}

#[test]
fn continuous_ramp_double_integral_across_boundary() {
    // f(x) = 1 for x <= 0, 1 + x for x > 0; joined at 0
    let f = affine(1.0, 0.0).append(&affine(1.0, 1.0), BoundaryPoint::new(0.0, true));
    let b = 1.0_f64;
    // analytic: ∫_{-1}^{b} ∫_{-1}^{t} f = 1/2 + b + b^2/2 + b^3/6
    let expected = 0.5 + b + b.powi(2) / 2.0 + b.powi(3) / 6.0;
    let result = f
        .evaluate(Points::intervals(vec![-1.0], vec![b]), -2)
        .unwrap();
    assert_relative_eq!(result.as_slice()[0], expected, epsilon = 1e-10);
}

#[test]
fn smooth_function_split_artificially_keeps_its_integrals() {
    // splitting x^2 at an interior point must not change any integral
    let whole = monomial(2);
    let split = monomial(2).append(&monomial(2), BoundaryPoint::new(0.7, true));
    for order in [-1, -2, -3] {
        let direct = whole
            .evaluate(Points::intervals(vec![0.0], vec![1.5]), order)
            .unwrap();
        let pieced = split
            .evaluate(Points::intervals(vec![0.0], vec![1.5]), order)
            .unwrap();
        assert_relative_eq!(
            pieced.as_slice()[0],
            direct.as_slice()[0],
            epsilon = 1e-10
        );
    }
}

#[test]
fn triple_integral_of_constant_across_boundary() {
    // 3-fold integral of 1 over [0, 1] is 1/6; exercises two correction
    // terms in the straddling rule
    let f = affine(1.0, 0.0).append(&affine(1.0, 0.0), BoundaryPoint::new(0.5, true));
    let result = f
        .evaluate(Points::intervals(vec![0.0], vec![1.0]), -3)
        .unwrap();
    assert_relative_eq!(result.as_slice()[0], 1.0 / 6.0, epsilon = 1e-12);
}

#[test]
fn three_segment_chain_evaluates_and_integrates() {
    // 0 for x < 0, x for 0 <= x <= 1 (exclusive left boundary), 1 for x > 1
    let f = affine(0.0, 0.0)
        .append(&affine(0.0, 1.0), BoundaryPoint::new(0.0, false))
        .append(&affine(1.0, 0.0), BoundaryPoint::new(1.0, true));

    assert_eq!(f.evaluate_at(-2.0, 0).unwrap(), 0.0);
    assert_relative_eq!(f.evaluate_at(0.5, 0).unwrap(), 0.5, epsilon = 1e-12);
    assert_eq!(f.evaluate_at(2.0, 0).unwrap(), 1.0);

    // ∫_{-1}^{2}: 0 + 1/2 + 1 = 3/2
    let result = f
        .evaluate(Points::intervals(vec![-1.0], vec![2.0]), -1)
        .unwrap();
    assert_relative_eq!(result.as_slice()[0], 1.5, epsilon = 1e-10);
}

#[test]
fn interval_batch_mixes_all_three_groups() {
    let f = affine(2.0, 0.0).append(&affine(4.0, 0.0), BoundaryPoint::new(1.0, true));
    let result = f
        .evaluate(
            Points::intervals(vec![0.0, 1.5, 0.5], vec![0.5, 2.0, 1.5]),
            -1,
        )
        .unwrap();
    let values = result.into_vec();
    assert_relative_eq!(values[0], 1.0, epsilon = 1e-12); // 2 · 0.5
    assert_relative_eq!(values[1], 2.0, epsilon = 1e-12); // 4 · 0.5
    assert_relative_eq!(values[2], 3.0, epsilon = 1e-12); // 2 · 0.5 + 4 · 0.5
}

#[test]
fn error_paths_through_public_api() {
    let unbound: SplineFunction<f64> = SplineFunction::Unbound;
    assert_eq!(
        unbound.evaluate_at(0.0, 0).unwrap_err(),
        FunctionError::NotImplemented
    );

    let f = monomial(1);
    assert!(matches!(
        f.evaluate(Points::intervals(vec![1.0], vec![0.5]), -1)
            .unwrap_err(),
        FunctionError::InvalidInterval { index: 0, .. }
    ));
    assert!(matches!(
        f.evaluate(Points::intervals(vec![1.0, 2.0], vec![0.5]), 0)
            .unwrap_err(),
        FunctionError::InvalidShape(_)
    ));
}

#[test]
fn function_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SplineFunction<f64>>();
    assert_send_sync::<BasisExpansion<f64>>();
}

#[test]
fn concurrent_evaluation_of_a_shared_function() {
    let f = Arc::new(
        monomial(2).append(&monomial(1), BoundaryPoint::new(1.0, true)),
    );
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let f = f.clone();
            std::thread::spawn(move || {
                let x = 0.5 * i as f64;
                f.evaluate_at(x, 0).unwrap()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let x = 0.5 * i as f64;
        let expected = if x <= 1.0 { x * x } else { x };
        assert_relative_eq!(handle.join().unwrap(), expected, epsilon = 1e-12);
    }
}
