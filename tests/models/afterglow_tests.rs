//! Tests for the afterglow lightcurve shapes

use approx::assert_relative_eq;
use grblc::models::{sharp_bpl, smooth_bpl, w07, w07_model};
use grblc::EvalOptions;
use ndarray::{array, Array1};
use std::f64::consts::LN_10;

#[test]
fn test_w07_concrete_break_point() {
    let y = w07_model(true).eval(&array![5.0], &[5.0, -12.0, 1.5, 1.0]).unwrap();
    assert_relative_eq!(y[0], -12.0000043429448, epsilon = 1e-12);
}

#[test]
fn test_w07_break_point_matches_power_law_branch() {
    let cases = [(5.0, -12.0, 1.5, 1.0), (3.2, -9.5, 0.7, 0.0), (1e-3, -18.0, 4.9, 20.0)];
    for &(t, f, alpha, t_rise) in &cases {
        let y = w07(&array![t], t, f, alpha, t_rise);
        let after = f + t * alpha - t * alpha - t_rise * 10f64.powf(-t) / LN_10;
        assert_eq!(y[0], after);
    }
}

#[test]
fn test_w07_plateau_then_decay() {
    let x = Array1::linspace(2.0, 8.0, 61);
    let y = w07(&x, 5.0, -12.0, 1.5, 0.0);

    // Without a rise term the curve falls monotonically
    for pair in y.windows(2) {
        assert!(pair[1] <= pair[0]);
    }

    // After the break the slope is exactly -alpha
    assert_relative_eq!(y[60] - y[50], -1.5, epsilon = 1e-9);
}

#[test]
fn test_sharp_bpl_slopes() {
    let x = array![3.0, 4.0, 5.0, 6.0, 7.0];
    let y = sharp_bpl(&x, 5.0, -12.0, 1.0, 2.0);
    assert_relative_eq!(y[1] - y[0], -1.0, epsilon = 1e-12);
    assert_relative_eq!(y[4] - y[3], -2.0, epsilon = 1e-12);
    assert_relative_eq!(y[2], -12.0, epsilon = 1e-12);
}

#[test]
fn test_sharp_bpl_break_point_matches_second_branch() {
    for &(t, f) in &[(5.0, -12.0), (0.3, -4.0), (9.9, -19.0)] {
        let y = sharp_bpl(&array![t], t, f, -3.0, 7.0);
        assert_relative_eq!(y[0], f, epsilon = 1e-12);
    }
}

#[test]
fn test_smooth_bpl_converges_to_sharp() {
    let x = array![3.5, 6.5];
    let sharp = sharp_bpl(&x, 5.0, -12.0, 1.0, 2.0);

    let mut previous = [f64::INFINITY; 2];
    for s in [0.5, 1.0, 2.0, 4.0, 6.0] {
        let smooth = smooth_bpl(&x, 5.0, -12.0, 1.0, 2.0, s, &EvalOptions::default()).unwrap();
        for i in 0..2 {
            let diff = (smooth[i] - sharp[i]).abs();
            assert!(diff < previous[i], "S = {} did not get closer at x = {}", s, x[i]);
            previous[i] = diff;
        }
    }
    assert!(previous.iter().all(|d| *d < 1e-9));

    // Far past the point where (t/T)^(S alpha) leaves the f64 range
    for s in [50.0, 200.0, 1000.0] {
        let smooth = smooth_bpl(&x, 5.0, -12.0, 1.0, 2.0, s, &EvalOptions::default()).unwrap();
        for i in 0..2 {
            assert!(smooth[i].is_finite(), "S = {} at x = {}", s, x[i]);
            assert_relative_eq!(smooth[i], sharp[i], epsilon = 1e-9);
        }
    }
}

#[test]
fn test_smooth_bpl_break_point() {
    // At the break both terms are one: F * 2^(-1/S)
    for s in [0.5, 1.0, 3.0] {
        let y = smooth_bpl(&array![5.0], 5.0, -12.0, 1.0, 2.0, s, &EvalOptions::default()).unwrap();
        assert_relative_eq!(y[0], -12.0 - 2f64.log10() / s, epsilon = 1e-12);
    }
}

#[test]
fn test_smooth_bpl_zero_smoothing_policy() {
    let x = array![4.0, 6.0];
    assert!(smooth_bpl(&x, 5.0, -12.0, 1.0, 2.0, 0.0, &EvalOptions::default()).is_err());

    let y = smooth_bpl(&x, 5.0, -12.0, 1.0, 2.0, 0.0, &EvalOptions::permissive()).unwrap();
    assert!(y.iter().all(|v| !v.is_finite()));
}
