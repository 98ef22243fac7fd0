//! Defines the [`RegulaFalsiReport`] returned by the regula falsi solver,
//! together with the per-iteration [`IterationRecord`] trace.


/// Snapshot of a single regula falsi iteration.
///
/// [`IterationRecord`]
/// ├ `iteration` : 1-based iteration index
/// ├ `a`, `b`    : bracket at the start of the iteration
/// ├ `c`         : false-position point computed from `(a, b)`
/// ├ `fa`, `fb`  : f(a), f(b)
/// ├ `fc`        : f(c)
/// └ `error`     : |f(c)|
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationRecord {
    pub iteration : usize,
    pub a         : f64,
    pub b         : f64,
    pub c         : f64,
    pub fa        : f64,
    pub fb        : f64,
    pub fc        : f64,
    pub error     : f64,
}

impl IterationRecord {
    /// Bracket width |b - a| at the start of this iteration.
    #[inline]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }
}


/// How the solver terminated.
/// - [`RootEstimate::Converged`]             : |f(c)| < tolerance, `c` is the root
/// - [`RootEstimate::IterationLimitReached`] : cap hit, last `c` is a best effort
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RootEstimate {
    Converged(f64),
    IterationLimitReached(f64),
}

impl RootEstimate {
    /// The estimate regardless of how the solver stopped.
    #[inline]
    pub fn value(&self) -> f64 {
        match *self {
            RootEstimate::Converged(x) | RootEstimate::IterationLimitReached(x) => x,
        }
    }
}


#[cfg(feature = "serde")]
fn algorithm_name() -> &'static str {
    crate::root_finding::regula_falsi::ALGORITHM_NAME
}


/// Final report of a regula falsi run.
///
/// [`RegulaFalsiReport`]
/// - `estimate`       : [`RootEstimate`], converged or iteration-limited
/// - `tolerance`      : tolerance the run was judged against
/// - `trace`          : one [`IterationRecord`] per iteration, in order
/// - `evals`          : total function evaluations
/// - `algorithm_name` : `"regula_falsi"`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegulaFalsiReport {
    pub estimate       : RootEstimate,
    pub tolerance      : f64,
    pub trace          : Vec<IterationRecord>,
    pub evals          : usize,
    #[cfg_attr(feature = "serde", serde(skip_deserializing, default = "algorithm_name"))]
    pub algorithm_name : &'static str,
}

impl RegulaFalsiReport {
    pub fn root(&self) -> f64 {
        self.estimate.value()
    }

    pub fn converged(&self) -> bool {
        matches!(self.estimate, RootEstimate::Converged(_))
    }

    /// Number of iterations performed; equals `trace.len()`.
    pub fn iterations(&self) -> usize {
        self.trace.len()
    }

    /// |f(c)| of the last iteration.
    pub fn final_error(&self) -> Option<f64> {
        self.trace.last().map(|r| r.error)
    }

    pub fn trace(&self) -> &[IterationRecord] {
        &self.trace
    }
}
