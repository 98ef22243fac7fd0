//! Configuration for the regula falsi solver.
//!
//! [`RegulaFalsiCfg`]
//! ├ `tolerance` : stop once |f(c)| < tolerance
//! └ `max_iter`  : iteration cap, best-effort estimate returned when reached
//!
//! [`RegulaFalsiCfg::new`] initializes configuration with default values.


use crate::root_finding::errors::RegulaFalsiError;


pub const DEFAULT_TOLERANCE : f64   = 1e-6;
pub const DEFAULT_MAX_ITER  : usize = 100;


/// Regula falsi configuration
///
/// # Construction
/// - Use [`RegulaFalsiCfg::new`] then optional setters.
///
/// # Defaults
/// ┌ `tolerance` = [`DEFAULT_TOLERANCE`]
/// └ `max_iter`  = [`DEFAULT_MAX_ITER`]
///
/// # Validation
/// Setters validate eagerly. [`RegulaFalsiCfg::validate`] is re-run by
/// [`crate::root_finding::regula_falsi::regula_falsi`] before iterating.
/// ├ `tolerance` >  0 and finite
/// └ `max_iter`  >= 1
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RegulaFalsiCfg {
    tolerance : f64,
    max_iter  : usize,
}

impl RegulaFalsiCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    // getters
    #[inline] #[must_use] pub fn tolerance(&self) -> f64   { self.tolerance }
    #[inline] #[must_use] pub fn max_iter(&self)  -> usize { self.max_iter }

    pub fn set_tolerance(mut self, v: f64) -> Result<Self, RegulaFalsiError> {
        check_tolerance(v)?;
        self.tolerance = v;
        Ok(self)
    }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, RegulaFalsiError> {
        check_max_iter(v)?;
        self.max_iter = v;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), RegulaFalsiError> {
        check_tolerance(self.tolerance)?;
        check_max_iter(self.max_iter)
    }
}

impl Default for RegulaFalsiCfg {
    fn default() -> Self {
        Self {
            tolerance : DEFAULT_TOLERANCE,
            max_iter  : DEFAULT_MAX_ITER,
        }
    }
}


fn check_tolerance(v: f64) -> Result<(), RegulaFalsiError> {
    if !(v.is_finite() && v > 0.0) {
        return Err(RegulaFalsiError::InvalidTolerance { got: v });
    }
    Ok(())
}

fn check_max_iter(v: usize) -> Result<(), RegulaFalsiError> {
    if v == 0 {
        return Err(RegulaFalsiError::InvalidMaxIter { got: v });
    }
    Ok(())
}
