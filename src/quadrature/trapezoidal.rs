//! Composite Trapezoidal Rule
//!
//! Approximates `∫_a^b f(x) dx` with `n` equal subintervals of width
//! `h = (b - a) / n`:
//!
//! ```text
//! T(n) = h / 2 * (y_0 + 2 * (y_1 + ... + y_{n-1}) + y_n)
//! ```
//!
//! Error is `O(h^2)` for smooth `f`.


use crate::quadrature::config::{check_bounds, check_subintervals};
use crate::quadrature::errors::QuadratureError;
use crate::sampling::nodes;


/// Composite trapezoidal estimate of `∫_a^b func(x) dx`.
///
/// # Arguments
///
/// ┌ `func` - integrand
/// ├ `a`    - lower limit, finite
/// ├ `b`    - upper limit, finite. `b < a` gives the signed integral.
/// └ `n`    - number of subintervals, `n >= 1`
///
/// # Errors
///
/// ┌ [`QuadratureError::InvalidParameter`]    - `n == 0`.
/// ├ [`QuadratureError::InvalidBounds`]       - `a` or `b` is NaN/inf.
/// └ [`QuadratureError::NonFiniteEvaluation`] - `func(x)` produced NaN/inf.
pub fn trapezoidal<F>(mut func: F, a: f64, b: f64, n: usize) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    check_bounds(a, b)?;
    check_subintervals(n)?;

    let mut evals = 0;
    composite(&mut func, a, b, n, &mut evals)
}


/// Unchecked rule shared with Romberg; `evals` accumulates across calls.
pub(crate) fn composite<F>(
    func: &mut F,
    a: f64,
    b: f64,
    n: usize,
    evals: &mut usize,
) -> Result<f64, QuadratureError>
where F: FnMut(f64) -> f64 {
    let h = (b - a) / n as f64;

    let mut y_first  = 0.0;
    let mut y_last   = 0.0;
    let mut interior = 0.0;
    for (i, x) in nodes(a, b, n + 1).enumerate() {
        *evals += 1;
        let y = func(x);
        if !y.is_finite() {
            return Err(QuadratureError::NonFiniteEvaluation { x, fx: y });
        }

        if i == 0      { y_first   = y; }
        else if i == n { y_last    = y; }
        else           { interior += y; }
    }

    Ok(h / 2.0 * (y_first + 2.0 * interior + y_last))
}
