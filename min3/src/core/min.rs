//! Minimum of three values.

/// Return the smallest of `a`, `b` and `c`.
///
/// Takes `min(a, b)` first, then the minimum of that and `c`. Ties do not
/// matter because tied values are equal. Only comparisons are performed, so
/// the call cannot overflow for any integer width.
#[must_use]
pub fn min3<T: Ord>(a: T, b: T, c: T) -> T {
    a.min(b).min(c)
}
