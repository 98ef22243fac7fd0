//! Defines the [`RombergTable`] and the [`RombergReport`] returned by
//! [`crate::quadrature::romberg::romberg`].


/// Triangular Romberg table `R[k][j]`, `0 <= j <= k < levels`.
///
/// - `R[k][0]` : trapezoidal estimate with `2^k` subintervals
/// - `R[k][j]` : `j`-th Richardson extrapolation, `j > 0`
///
/// Row `k` stores exactly `k + 1` entries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RombergTable {
    rows: Vec<Vec<f64>>,
}

impl RombergTable {
    pub(crate) fn with_levels(levels: usize) -> Self {
        Self { rows: (0..levels).map(|k| vec![0.0; k + 1]).collect() }
    }

    /// Raw `R[k][j]`; caller guarantees `j <= k < levels`.
    #[inline]
    pub(crate) fn at(&self, k: usize, j: usize) -> f64 {
        self.rows[k][j]
    }

    #[inline]
    pub(crate) fn set(&mut self, k: usize, j: usize, v: f64) {
        self.rows[k][j] = v;
    }

    /// Number of rows (the `max_level` the table was built with).
    pub fn levels(&self) -> usize {
        self.rows.len()
    }

    /// `R[k][j]`, or `None` outside the lower triangle.
    pub fn get(&self, k: usize, j: usize) -> Option<f64> {
        self.rows.get(k)?.get(j).copied()
    }

    /// Trapezoidal estimate `R[k][0]` with `2^k` subintervals.
    pub fn trapezoid(&self, k: usize) -> Option<f64> {
        self.get(k, 0)
    }

    pub fn row(&self, k: usize) -> Option<&[f64]> {
        self.rows.get(k).map(Vec::as_slice)
    }

    /// `R[k][k]` for every `k`, the best estimate available at each level.
    pub fn diagonal(&self) -> Vec<f64> {
        self.rows.iter().enumerate().map(|(k, row)| row[k]).collect()
    }

    /// `R[levels-1][levels-1]`.
    pub fn best(&self) -> Option<f64> {
        self.rows.last().and_then(|row| row.last()).copied()
    }
}


#[cfg(feature = "serde")]
fn algorithm_name() -> &'static str {
    crate::quadrature::romberg::ALGORITHM_NAME
}


/// Summary of a Romberg run.
///
/// [`RombergReport`]
/// - `estimate`       : `R[max_level-1][max_level-1]`
/// - `table`          : fully populated [`RombergTable`]
/// - `evals`          : total function evaluations over all levels
/// - `algorithm_name` : `"romberg"`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RombergReport {
    pub estimate       : f64,
    pub table          : RombergTable,
    pub evals          : usize,
    #[cfg_attr(feature = "serde", serde(skip_deserializing, default = "algorithm_name"))]
    pub algorithm_name : &'static str,
}
