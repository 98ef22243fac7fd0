//! Classic numerical methods with structured traces.
//!
//! ┌ [`root_finding`] : regula falsi on a sign-changing bracket
//! ├ [`quadrature`]   : composite trapezoidal rule and Romberg extrapolation
//! └ [`sampling`]     : equally spaced nodes, vectorized evaluation, plot ranges
//!
//! Each solver returns its iteration trace or estimate table alongside the
//! result. Progress is reported through the `log` facade.

pub mod root_finding;
pub mod quadrature;
pub mod sampling;
