//! Error types for the hashing boundary.
//!
//! The hash algorithms themselves are total; the only failures come from
//! host arguments that do not carry bytes. Both variants are `Copy` and carry
//! static type names so they can be reported without allocation.

use core::fmt;

/// A host argument was rejected before any hashing happened.
///
/// # Examples
///
/// ```
/// use traits::HashError;
///
/// fn require_bytes(found: &'static str) -> Result<(), HashError> {
///   Err(HashError::invalid_argument("Buffer or TypedArray", found))
/// }
///
/// let err = require_bytes("number").unwrap_err();
/// assert_eq!(err.to_string(), "expected Buffer or TypedArray, found number");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum HashError {
  /// A non-byte-bearing value was passed where a buffer was required.
  ///
  /// Surfaced to the caller of one-shot and streaming entry points.
  InvalidArgument {
    /// What the entry point accepts.
    expected: &'static str,
    /// Type name of what was actually passed.
    found: &'static str,
  },
  /// One element of a batch was not byte-bearing.
  ///
  /// Recovered locally: the batch substitutes zero for that slot and keeps
  /// going. Reported only so callers can inspect what was substituted.
  BatchElementInvalid {
    /// Position of the element in the batch.
    index: usize,
    /// Type name of the element.
    found: &'static str,
  },
}

impl HashError {
  #[inline]
  #[must_use]
  pub const fn invalid_argument(expected: &'static str, found: &'static str) -> Self {
    Self::InvalidArgument { expected, found }
  }

  #[inline]
  #[must_use]
  pub const fn batch_element(index: usize, found: &'static str) -> Self {
    Self::BatchElementInvalid { index, found }
  }

  /// Type name of the rejected value.
  #[inline]
  #[must_use]
  pub const fn found(&self) -> &'static str {
    match self {
      Self::InvalidArgument { found, .. } | Self::BatchElementInvalid { found, .. } => found,
    }
  }
}

impl fmt::Display for HashError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidArgument { expected, found } => write!(f, "expected {expected}, found {found}"),
      Self::BatchElementInvalid { index, found } => {
        write!(f, "batch element {index} is not a Buffer or TypedArray (found {found})")
      }
    }
  }
}

impl core::error::Error for HashError {}
