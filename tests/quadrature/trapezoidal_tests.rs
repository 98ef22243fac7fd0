use approx::assert_abs_diff_eq;
use rootquad::quadrature::errors::QuadratureError;
use rootquad::quadrature::trapezoidal::trapezoidal;

type QuadResult = Result<(), QuadratureError>;

const THIRD: f64 = 1.0 / 3.0;

fn square(x: f64) -> f64 {
    x * x
}


#[test]
fn square_fine_grid() -> QuadResult {
    let t = trapezoidal(square, 0.0, 1.0, 1024)?;
    assert_abs_diff_eq!(t, THIRD, epsilon = 1e-6);
    Ok(())
}

#[test]
fn square_coarse_grids() -> QuadResult {
    assert_abs_diff_eq!(trapezoidal(square, 0.0, 1.0, 1)?, 0.5,   epsilon = 1e-15);
    assert_abs_diff_eq!(trapezoidal(square, 0.0, 1.0, 2)?, 0.375, epsilon = 1e-15);
    assert_abs_diff_eq!(trapezoidal(square, 0.0, 1.0, 4)?, 0.34375, epsilon = 1e-15);
    Ok(())
}

#[test]
fn linear_is_exact() -> QuadResult {
    let f = |x: f64| 3.0 * x - 1.0;
    for n in [1, 2, 7, 64] {
        assert_abs_diff_eq!(trapezoidal(f, -2.0, 5.0, n)?, 24.5, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn error_is_second_order() -> QuadResult {
    let f = |x: f64| f64::exp(x);
    let exact = std::f64::consts::E - 1.0;

    let mut prev = (trapezoidal(f, 0.0, 1.0, 8)? - exact).abs();
    for n in [16, 32, 64, 128] {
        let err   = (trapezoidal(f, 0.0, 1.0, n)? - exact).abs();
        let ratio = prev / err;
        assert!((ratio - 4.0).abs() < 0.05, "n={n}, ratio={ratio}");
        prev = err;
    }
    Ok(())
}

#[test]
fn reversed_limits_flip_sign() -> QuadResult {
    let forward  = trapezoidal(square, 0.0, 1.0, 64)?;
    let backward = trapezoidal(square, 1.0, 0.0, 64)?;

    assert_abs_diff_eq!(forward, -backward, epsilon = 1e-15);
    Ok(())
}

#[test]
fn empty_interval_is_zero() -> QuadResult {
    assert_eq!(trapezoidal(square, 2.0, 2.0, 10)?, 0.0);
    Ok(())
}

#[test]
fn zero_subintervals_rejected() {
    let err = trapezoidal(square, 0.0, 1.0, 0).unwrap_err();

    assert!(matches!(
        err,
        QuadratureError::InvalidParameter { name: "n", got: 0, min: 1, .. }
    ));
}

#[test]
fn non_finite_bounds_rejected() {
    let err = trapezoidal(square, 0.0, f64::INFINITY, 4).unwrap_err();
    assert!(matches!(err, QuadratureError::InvalidBounds { .. }));
}

#[test]
fn singular_integrand_rejected() {
    let f = |x: f64| 1.0 / x;
    let err = trapezoidal(f, 0.0, 1.0, 4).unwrap_err();

    assert!(matches!(
        err,
        QuadratureError::NonFiniteEvaluation { x, fx }
        if x == 0.0 && fx.is_infinite()
    ));
}

#[test]
fn samples_n_plus_one_nodes() -> QuadResult {
    let mut xs = Vec::new();
    trapezoidal(|x: f64| { xs.push(x); x }, 1.0, 3.0, 4)?;

    assert_eq!(xs, vec![1.0, 1.5, 2.0, 2.5, 3.0]);
    Ok(())
}
