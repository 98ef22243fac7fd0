//! Sign utilities for bracketing.
//! - `strictly_opposite` : `true` if one value is < 0 and the other is > 0

/// Returns `true` if `x` and `y` are nonzero with opposite signs.
///
/// Agrees with `x * y < 0.0` except when that product underflows to zero:
/// there `x * y < 0.0` is false, while this still reports the sign change.
/// A zero on either side is never "opposite".
#[inline]
pub(crate) fn strictly_opposite(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}
