//! Seed coercion.

use crate::HostValue;

/// Seed used when the host passes none.
pub const DEFAULT_SEED: u64 = 0;

/// Coerce an optional host argument into a 64-bit seed.
///
/// - `BigInt` values are taken as-is.
/// - `Number` values are truncated toward zero into an `i64` (saturating at
///   the ends) and reinterpreted as `u64`, so `-1` becomes `u64::MAX`.
///   Non-finite numbers coerce to zero.
/// - Anything else, including an absent argument, yields [`DEFAULT_SEED`].
///
/// ```
/// use fingerprint::{HostValue, coerce_seed};
///
/// assert_eq!(coerce_seed(None), 0);
/// assert_eq!(coerce_seed(Some(&HostValue::Number(42.9))), 42);
/// assert_eq!(coerce_seed(Some(&HostValue::BigInt(u64::MAX))), u64::MAX);
/// ```
#[must_use]
pub fn coerce_seed(value: Option<&HostValue<'_>>) -> u64 {
  match value {
    Some(HostValue::BigInt(v)) => *v,
    Some(HostValue::Number(n)) => number_to_seed(*n),
    _ => DEFAULT_SEED,
  }
}

#[inline]
fn number_to_seed(n: f64) -> u64 {
  if !n.is_finite() {
    return DEFAULT_SEED;
  }
  // `as` truncates toward zero and saturates out-of-range values.
  (n as i64) as u64
}
