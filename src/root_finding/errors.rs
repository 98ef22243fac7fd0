//! Root-finding error types.
//!
//! ┌ precondition failures : bounds and bracket checks before iterating
//! ├ runtime failures      : degenerate false-position step, non-finite f(x)
//! └ configuration         : invalid tolerance or iteration cap
//!
//! Hitting the iteration cap is not an error. See
//! [`crate::root_finding::report::RootEstimate::IterationLimitReached`].


use thiserror::Error;


/// Regula falsi errors.
#[derive(Debug, Error)]
pub enum RegulaFalsiError {
    #[error("invalid bracket [{a}, {b}]: f(a) and f(b) must have opposite signs. got f(a)={fa}, f(b)={fb}")]
    InvalidBracket { a: f64, b: f64, fa: f64, fb: f64 },

    /// Covers an exactly zero denominator `f(b) - f(a)` as well as one that
    /// overflowed, since both leave the false-position point undefined.
    #[error("division by zero at iteration {iteration}: f(b) - f(a) is degenerate on [{a}, {b}] (f(a)={fa}, f(b)={fb})")]
    DivisionByZero { iteration: usize, a: f64, b: f64, fa: f64, fb: f64 },

    #[error("invalid bounds: a and b must be finite. got [{a}, {b}]")]
    InvalidBounds { a: f64, b: f64 },

    #[error("function non-finite at x={x}, f(x)={fx}")]
    NonFiniteEvaluation { x: f64, fx: f64 },

    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
