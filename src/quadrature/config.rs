//! Shared configuration and parameter checks for quadrature.
//!
//! [`RombergCfg`]
//! └ `max_level` : number of table rows, finest row uses 2^(max_level-1) subintervals
//!
//! [`MAX_ROMBERG_LEVEL`] caps `max_level` so `2^k` stays an exact subinterval
//! count with a sample grid that fits in memory.


use crate::quadrature::errors::QuadratureError;


pub const DEFAULT_MAX_LEVEL : usize = 5;
pub const MAX_ROMBERG_LEVEL : usize = 30;


/// Romberg configuration
///
/// # Construction
/// - Use [`RombergCfg::new`] then optional setters.
///
/// # Defaults
/// └ `max_level` = [`DEFAULT_MAX_LEVEL`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RombergCfg {
    max_level: usize,
}

impl RombergCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[inline] #[must_use] pub fn max_level(&self) -> usize { self.max_level }

    pub fn set_max_level(mut self, v: usize) -> Result<Self, QuadratureError> {
        check_max_level(v)?;
        self.max_level = v;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), QuadratureError> {
        check_max_level(self.max_level)
    }
}

impl Default for RombergCfg {
    fn default() -> Self {
        Self { max_level: DEFAULT_MAX_LEVEL }
    }
}


pub(crate) fn check_max_level(v: usize) -> Result<(), QuadratureError> {
    if !(1..=MAX_ROMBERG_LEVEL).contains(&v) {
        return Err(QuadratureError::InvalidParameter {
            name : "max_level",
            got  : v,
            min  : 1,
            max  : MAX_ROMBERG_LEVEL,
        });
    }
    Ok(())
}

pub(crate) fn check_subintervals(n: usize) -> Result<(), QuadratureError> {
    if n == 0 {
        return Err(QuadratureError::InvalidParameter {
            name : "n",
            got  : n,
            min  : 1,
            max  : usize::MAX,
        });
    }
    Ok(())
}

pub(crate) fn check_bounds(a: f64, b: f64) -> Result<(), QuadratureError> {
    if !(a.is_finite() && b.is_finite()) {
        return Err(QuadratureError::InvalidBounds { a, b });
    }
    Ok(())
}
