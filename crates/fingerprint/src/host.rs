//! Host argument normalization.
//!
//! Embedding runtimes pass dynamically typed values. Everything downstream of
//! this module works on plain `&[u8]`; [`HostValue::as_bytes`] is the single
//! place where the dynamic type is inspected.

use traits::HashError;

/// What byte-consuming entry points accept.
pub(crate) const BYTES_EXPECTED: &str = "Buffer or TypedArray";

/// A borrowed, dynamically typed host argument.
///
/// Views never outlive the call they are passed to; anything that must be
/// retained (such as a streaming tail) is copied by the hasher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostValue<'a> {
  /// A contiguous byte buffer.
  Buffer(&'a [u8]),
  /// A typed view over a region of a larger backing store.
  TypedArray {
    /// The whole backing store.
    buffer: &'a [u8],
    /// Start of the view, in bytes.
    byte_offset: usize,
    /// Length of the view, in bytes.
    byte_length: usize,
  },
  Number(f64),
  BigInt(u64),
  Str(&'a str),
  Array(&'a [HostValue<'a>]),
  Null,
  Undefined,
}

impl<'a> HostValue<'a> {
  /// A typed view of `byte_length` bytes starting at `byte_offset`.
  #[inline]
  #[must_use]
  pub const fn typed_array(buffer: &'a [u8], byte_offset: usize, byte_length: usize) -> Self {
    Self::TypedArray { buffer, byte_offset, byte_length }
  }

  /// Host-side name of this value's type, as used in error messages.
  #[must_use]
  pub const fn type_name(&self) -> &'static str {
    match self {
      Self::Buffer(_) => "Buffer",
      Self::TypedArray { .. } => "TypedArray",
      Self::Number(_) => "number",
      Self::BigInt(_) => "bigint",
      Self::Str(_) => "string",
      Self::Array(_) => "Array",
      Self::Null => "null",
      Self::Undefined => "undefined",
    }
  }

  /// Whether this value is a buffer or a typed view.
  ///
  /// A typed view may still fail [`as_bytes`](Self::as_bytes) if its range
  /// does not fit its backing store.
  #[inline]
  #[must_use]
  pub const fn is_byte_bearing(&self) -> bool {
    matches!(self, Self::Buffer(_) | Self::TypedArray { .. })
  }

  /// Normalize into the bytes to hash.
  ///
  /// # Errors
  ///
  /// [`HashError::InvalidArgument`] if the value is not byte-bearing, or is a
  /// typed view whose range falls outside its backing store.
  pub fn as_bytes(&self) -> Result<&'a [u8], HashError> {
    match *self {
      Self::Buffer(bytes) => Ok(bytes),
      Self::TypedArray { buffer, byte_offset, byte_length } => byte_offset
        .checked_add(byte_length)
        .and_then(|end| buffer.get(byte_offset..end))
        .ok_or(HashError::invalid_argument(BYTES_EXPECTED, "TypedArray (view out of bounds)")),
      ref other => Err(HashError::invalid_argument(BYTES_EXPECTED, other.type_name())),
    }
  }
}

impl<'a> From<&'a [u8]> for HostValue<'a> {
  #[inline]
  fn from(bytes: &'a [u8]) -> Self {
    Self::Buffer(bytes)
  }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HostValue<'a> {
  #[inline]
  fn from(bytes: &'a [u8; N]) -> Self {
    Self::Buffer(bytes)
  }
}

impl<'a> From<&'a str> for HostValue<'a> {
  #[inline]
  fn from(s: &'a str) -> Self {
    Self::Str(s)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn buffer_is_passed_through() {
    let v = HostValue::Buffer(b"abc");
    assert_eq!(v.as_bytes(), Ok(&b"abc"[..]));
  }

  #[test]
  fn typed_array_selects_its_window() {
    let backing = b"0123456789";
    let v = HostValue::typed_array(backing, 2, 5);
    assert_eq!(v.as_bytes(), Ok(&b"23456"[..]));

    let empty = HostValue::typed_array(backing, 10, 0);
    assert_eq!(empty.as_bytes(), Ok(&b""[..]));
  }

  #[test]
  fn typed_array_out_of_bounds_is_rejected() {
    let backing = b"0123";
    for v in [HostValue::typed_array(backing, 2, 3), HostValue::typed_array(backing, usize::MAX, 2)] {
      let err = v.as_bytes().unwrap_err();
      assert!(matches!(err, HashError::InvalidArgument { expected: BYTES_EXPECTED, .. }));
    }
  }

  #[test]
  fn non_byte_values_report_their_type() {
    let nested = [HostValue::Null];
    let cases = [
      (HostValue::Number(1.0), "number"),
      (HostValue::BigInt(1), "bigint"),
      (HostValue::Str("abc"), "string"),
      (HostValue::Array(&nested), "Array"),
      (HostValue::Null, "null"),
      (HostValue::Undefined, "undefined"),
    ];
    for (value, name) in cases {
      assert!(!value.is_byte_bearing());
      assert_eq!(value.as_bytes(), Err(HashError::invalid_argument(BYTES_EXPECTED, name)));
    }
  }

  #[test]
  fn conversions() {
    assert_eq!(HostValue::from(b"xy"), HostValue::Buffer(b"xy"));
    assert_eq!(HostValue::from(&b"xy"[..]), HostValue::Buffer(b"xy"));
    assert_eq!(HostValue::from("xy"), HostValue::Str("xy"));
  }
}
