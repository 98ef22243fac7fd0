//! Romberg Integration
//!
//! Builds a triangular table from trapezoidal estimates at `n = 2^k`
//! subintervals and applies repeated
//! [Richardson extrapolation](https://en.wikipedia.org/wiki/Richardson_extrapolation):
//!
//! ```text
//! R[k][0] = T(2^k)
//! R[k][j] = (4^j * R[k][j-1] - R[k-1][j-1]) / (4^j - 1),   1 <= j <= k
//! ```
//!
//! Doubling `n` per row is what makes the factor `4^j` valid, since the
//! trapezoidal error expands in powers of `h^2`.


use crate::quadrature::config::{check_bounds, RombergCfg};
use crate::quadrature::errors::QuadratureError;
use crate::quadrature::report::{RombergReport, RombergTable};
use crate::quadrature::trapezoidal::composite;


pub const ALGORITHM_NAME: &str = "romberg";


/// Romberg estimate of `∫_a^b func(x) dx` using the levels in `cfg`.
///
/// # Returns
/// [`RombergReport`] containing
/// - `estimate`       : `R[max_level-1][max_level-1]`
/// - `table`          : every `R[k][j]`, `0 <= j <= k < max_level`
/// - `evals`          : function evaluations over all levels
/// - `algorithm_name` : `"romberg"`
///
/// `max_level == 1` is a single one-interval trapezoid, no extrapolation.
///
/// # Errors
///
/// ┌ [`QuadratureError::InvalidParameter`]    - `max_level` outside `[1, MAX_ROMBERG_LEVEL]`.
/// ├ [`QuadratureError::InvalidBounds`]       - `a` or `b` is NaN/inf.
/// └ [`QuadratureError::NonFiniteEvaluation`] - `func(x)` produced NaN/inf.
///
/// # Notes
/// ├ `max_level` is capped at [`crate::quadrature::config::MAX_ROMBERG_LEVEL`]
///   on top of the `>= 1` requirement. Past it `2^k` no longer fits a usable
///   subinterval count, so larger values are rejected rather than truncated.
/// └ Every row resamples from scratch, so `R[k][0]` is bit-identical to
///   [`crate::quadrature::trapezoidal::trapezoidal`] with `n = 2^k`.
///   Cost is dominated by the last row, `2^(max_level-1) + 1` evaluations.
pub fn romberg_with<F>(
    mut func: F,
    a: f64,
    b: f64,
    cfg: &RombergCfg,
) -> Result<RombergReport, QuadratureError>
where F: FnMut(f64) -> f64 {
    check_bounds(a, b)?;
    cfg.validate()?;

    let levels    = cfg.max_level();
    let mut table = RombergTable::with_levels(levels);
    let mut evals = 0;

    for k in 0..levels {
        let n = 1usize << k;
        let t = composite(&mut func, a, b, n, &mut evals)?;
        log::trace!("romberg: trapezoidal n={n}: {t:.10}");
        table.set(k, 0, t);
    }

    for j in 1..levels {
        let factor = 4.0_f64.powi(j as i32);
        for k in j..levels {
            let r = (factor * table.at(k, j - 1) - table.at(k - 1, j - 1)) / (factor - 1.0);
            log::trace!("romberg: R({k}, {j}) = {r:.10}");
            table.set(k, j, r);
        }
    }

    let estimate = table.at(levels - 1, levels - 1);
    log::debug!("romberg: {levels} levels, {evals} evaluations, estimate={estimate}");

    Ok(RombergReport {
        estimate,
        table,
        evals,
        algorithm_name: ALGORITHM_NAME,
    })
}


/// Positional form of [`romberg_with`].
pub fn romberg<F>(
    func: F,
    a: f64,
    b: f64,
    max_level: usize,
) -> Result<RombergReport, QuadratureError>
where F: FnMut(f64) -> f64 {
    let cfg = RombergCfg::new().set_max_level(max_level)?;
    romberg_with(func, a, b, &cfg)
}
