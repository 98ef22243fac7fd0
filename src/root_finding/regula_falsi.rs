//! Regula Falsi
//!
//! Finds a root of a continuous scalar function with the classic
//! [regula falsi method](https://en.wikipedia.org/wiki/Regula_falsi):
//! each iteration replaces one end of the bracket `[a, b]` with the
//! x-intercept of the chord through `(a, f(a))` and `(b, f(b))`.
//!
//! ```text
//! c = (a * f(b) - b * f(a)) / (f(b) - f(a))
//! ```
//!
//! Every iteration is recorded as an [`IterationRecord`] and returned in
//! the [`RegulaFalsiReport`] trace. Rendering the trace is left to callers.


use crate::root_finding::config::RegulaFalsiCfg;
use crate::root_finding::errors::RegulaFalsiError;
use crate::root_finding::report::{IterationRecord, RegulaFalsiReport, RootEstimate};
use crate::root_finding::signs::strictly_opposite;


pub const ALGORITHM_NAME: &str = "regula_falsi";


/// Wraps the user function, counting evaluations and rejecting NaN/inf.
struct Counted<F> {
    func  : F,
    evals : usize,
}

impl<F> Counted<F>
where F: FnMut(f64) -> f64 {
    fn eval(&mut self, x: f64) -> Result<f64, RegulaFalsiError> {
        self.evals += 1;
        let fx = (self.func)(x);
        if !fx.is_finite() {
            return Err(RegulaFalsiError::NonFiniteEvaluation { x, fx });
        }
        Ok(fx)
    }
}


/// Calculates the x-intercept of the chord connecting `(a, fa)` and `(b, fb)`.
///
/// # Returns
/// ├ `Some(c)` if the denominator `fb - fa` is nonzero and finite
/// └ `None`    otherwise, or if `c` itself is not finite
///
/// Rounding can land `c` an ulp outside the bracket, so it is clamped back
/// into `[min(a, b), max(a, b)]`. This keeps the bracket from widening.
#[inline]
fn false_position(
    (a, fa): (f64, f64),
    (b, fb): (f64, f64),
) -> Option<f64> {
    let denom = fb - fa;
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }

    let c = (a * fb - b * fa) / denom;
    c.is_finite().then(|| c.clamp(a.min(b), a.max(b)))
}


/// Finds a root of `func` inside the bracket `[a, b]` by regula falsi.
///
/// `func(a)` and `func(b)` must have strictly opposite signs. The bounds may
/// be given in either order.
///
/// # Arguments
///
/// ┌ `func` - The function whose root is to be found.
/// ├ `a`    - One end of the bracket. Must be finite.
/// ├ `b`    - Other end of the bracket. Must be finite.
/// └ `cfg`  - [`RegulaFalsiCfg`], tolerance on |f(c)| and iteration cap.
///
/// # Behavior
///
/// Per iteration:
/// 1. `c` from the false-position formula.
/// 2. `f(c)` evaluated and an [`IterationRecord`] appended.
/// 3. Stop with [`RootEstimate::Converged`] if `|f(c)| < tolerance`.
/// 4. If `f(a)` and `f(c)` have strictly opposite signs, `b := c`;
///    otherwise `a := c`.
///
/// If the cap is reached the last `c` is returned as
/// [`RootEstimate::IterationLimitReached`]. This is a degraded result, not an
/// error.
///
/// # Errors
///
/// ┌ [`RegulaFalsiError::InvalidBounds`]       - `a` or `b` is NaN/inf.
/// ├ [`RegulaFalsiError::InvalidBracket`]      - `f(a) * f(b) >= 0`.
/// ├ [`RegulaFalsiError::DivisionByZero`]      - `f(b) - f(a)` is zero or overflows.
/// ├ [`RegulaFalsiError::NonFiniteEvaluation`] - `func(x)` produced NaN/inf.
/// ├ [`RegulaFalsiError::InvalidTolerance`]    - `cfg.tolerance()` not finite or <= 0.
/// └ [`RegulaFalsiError::InvalidMaxIter`]      - `cfg.max_iter()` == 0.
///
/// # Notes
/// └ f(a) and f(b) are cached across iterations, so each iteration costs one
///   evaluation. The records still carry all three values.
pub fn regula_falsi<F>(
    func: F,
    mut a: f64,
    mut b: f64,
    cfg: RegulaFalsiCfg,
) -> Result<RegulaFalsiReport, RegulaFalsiError>
where F: FnMut(f64) -> f64 {

    if !(a.is_finite() && b.is_finite()) {
        return Err(RegulaFalsiError::InvalidBounds { a, b });
    }
    cfg.validate()?;

    let tolerance = cfg.tolerance();
    let max_iter  = cfg.max_iter();

    let mut f  = Counted { func, evals: 0 };
    let mut fa = f.eval(a)?;
    let mut fb = f.eval(b)?;

    if !strictly_opposite(fa, fb) {
        log::debug!("regula_falsi: no sign change on [{a}, {b}], f(a)={fa}, f(b)={fb}");
        return Err(RegulaFalsiError::InvalidBracket { a, b, fa, fb });
    }

    let mut trace = Vec::with_capacity(max_iter.min(128));
    let mut c     = a; // overwritten on the first iteration

    for iteration in 1..=max_iter {
        c = false_position((a, fa), (b, fb)).ok_or(
            RegulaFalsiError::DivisionByZero { iteration, a, b, fa, fb }
        )?;
        let fc    = f.eval(c)?;
        let error = fc.abs();

        let record = IterationRecord { iteration, a, b, c, fa, fb, fc, error };
        log::trace!("regula_falsi: {record:?}");
        trace.push(record);

        if error < tolerance {
            log::debug!("regula_falsi: converged after {iteration} iterations, root={c}");
            return Ok(RegulaFalsiReport {
                estimate       : RootEstimate::Converged(c),
                tolerance,
                trace,
                evals          : f.evals,
                algorithm_name : ALGORITHM_NAME,
            });
        }

        // f(c) == 0 never reaches here since tolerance > 0
        if strictly_opposite(fa, fc) {
            b  = c;
            fb = fc;
        } else {
            a  = c;
            fa = fc;
        }
    }

    log::debug!("regula_falsi: iteration limit ({max_iter}) reached, last estimate={c}");
    Ok(RegulaFalsiReport {
        estimate       : RootEstimate::IterationLimitReached(c),
        tolerance,
        trace,
        evals          : f.evals,
        algorithm_name : ALGORITHM_NAME,
    })
}


/// Positional form of [`regula_falsi`].
///
/// Builds a [`RegulaFalsiCfg`] from `tolerance` and `max_iterations`, so
/// invalid values are reported through the same error type.
pub fn find_root<F>(
    func: F,
    a: f64,
    b: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<RegulaFalsiReport, RegulaFalsiError>
where F: FnMut(f64) -> f64 {
    let cfg = RegulaFalsiCfg::new()
        .set_tolerance(tolerance)?
        .set_max_iter(max_iterations)?;
    regula_falsi(func, a, b, cfg)
}
