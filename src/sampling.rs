//! Sampling helpers for vectorized evaluation.
//!
//! ┌ [`nodes`]        : lazy equally spaced points on `[a, b]`
//! ├ [`linspace`]     : the same points collected into a `Vec`
//! ├ [`eval_many`]    : evaluate a function at many points
//! ├ [`plot_window`]  : x-range around a bracket and its root
//! └ [`plot_samples`] : `(xs, ys)` over [`plot_window`]
//!
//! The quadrature rules sample through [`nodes`]. The plot helpers only
//! produce data; drawing it is up to the caller.


/// Default number of samples for [`plot_samples`].
pub const DEFAULT_PLOT_SAMPLES: usize = 400;

/// Margin added on both sides of the plot window.
pub const PLOT_MARGIN: f64 = 1.0;


/// `n` equally spaced points from `a` to `b`, both included.
///
/// The last point is exactly `b`. `n == 1` yields only `a`, `n == 0` nothing.
pub fn nodes(a: f64, b: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 { (b - a) / (n - 1) as f64 } else { 0.0 };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 { b } else { a + i as f64 * step }
    })
}

/// Collected form of [`nodes`].
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    nodes(a, b, n).collect()
}

/// Evaluates `func` at every point of `xs`, preserving order.
pub fn eval_many<F>(mut func: F, xs: &[f64]) -> Vec<f64>
where F: FnMut(f64) -> f64 {
    xs.iter().map(|&x| func(x)).collect()
}

/// Plot range covering the bracket `[a, b]` and `root`, padded by
/// [`PLOT_MARGIN`] on each side.
///
/// Bounds may be given in either order.
pub fn plot_window(a: f64, b: f64, root: Option<f64>) -> (f64, f64) {
    let (mut lo, mut hi) = (a.min(b), a.max(b));
    if let Some(r) = root {
        lo = lo.min(r);
        hi = hi.max(r);
    }
    (lo - PLOT_MARGIN, hi + PLOT_MARGIN)
}

/// Samples `func` at `n` points over [`plot_window`]`(a, b, root)`.
pub fn plot_samples<F>(
    func: F,
    a: f64,
    b: f64,
    root: Option<f64>,
    n: usize,
) -> (Vec<f64>, Vec<f64>)
where F: FnMut(f64) -> f64 {
    let (lo, hi) = plot_window(a, b, root);
    let xs = linspace(lo, hi, n);
    let ys = eval_many(func, &xs);
    (xs, ys)
}
