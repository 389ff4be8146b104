/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `u64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use tally::util::num::{MAX_SAFE_U64_INT, u64_to_f64_checked};
///
/// assert_eq!(u64_to_f64_checked(3_628_800, "too big!"), Ok(3_628_800.0));
/// assert!(u64_to_f64_checked(MAX_SAFE_U64_INT + 1, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn u64_to_f64_checked<E>(value: u64, error: E) -> Result<f64, E> {
    if value > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Truncates an `f64` toward zero into an `i64`.
///
/// Values beyond the `i64` range saturate to `i64::MIN` / `i64::MAX`, and NaN
/// becomes `0`. Negative zero truncates to `0`.
///
/// ## Example
/// ```
/// use tally::util::num::f64_trunc_to_i64;
///
/// assert_eq!(f64_trunc_to_i64(9.9), 9);
/// assert_eq!(f64_trunc_to_i64(-0.7), 0);
/// assert_eq!(f64_trunc_to_i64(f64::NAN), 0);
/// assert_eq!(f64_trunc_to_i64(f64::INFINITY), i64::MAX);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_trunc_to_i64(value: f64) -> i64 {
    value as i64
}

/// Truncates an `f64` toward zero into a `u64`.
///
/// Negative values and NaN become `0`; values above `u64::MAX` saturate.
/// Callers range-check the register first, so saturation only matters at the
/// edges.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_trunc_to_u64(value: f64) -> u64 {
    value as u64
}
