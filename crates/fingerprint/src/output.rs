//! Fingerprint values.

use core::fmt;

use hashes::fast::Xxh64;
use traits::FastHash;

/// A 64-bit XXH64 content fingerprint.
///
/// The full value is always available losslessly through [`get`](Self::get).
/// [`low32`](Self::low32) is only a narrowing view for hosts without native
/// 64-bit integers; it is not an independent 32-bit hash and does not carry a
/// 32-bit hash's distribution guarantees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Fingerprint(u64);

impl Fingerprint {
  /// Value substituted for batch elements that could not be hashed.
  pub const ZERO: Self = Self(0);

  #[inline]
  #[must_use]
  pub const fn new(value: u64) -> Self {
    Self(value)
  }

  /// Fingerprint `data` with `seed`.
  #[inline]
  #[must_use]
  pub fn of(data: &[u8], seed: u64) -> Self {
    Self(Xxh64::hash_with_seed(seed, data))
  }

  #[inline]
  #[must_use]
  pub const fn get(self) -> u64 {
    self.0
  }

  /// Low 32 bits of the fingerprint.
  #[inline]
  #[must_use]
  pub const fn low32(self) -> u32 {
    (self.0 & 0xFFFF_FFFF) as u32
  }

  /// Big-endian bytes, so that byte order matches hex order.
  #[inline]
  #[must_use]
  pub const fn to_be_bytes(self) -> [u8; 8] {
    self.0.to_be_bytes()
  }
}

impl From<u64> for Fingerprint {
  #[inline]
  fn from(value: u64) -> Self {
    Self(value)
  }
}

impl From<Fingerprint> for u64 {
  #[inline]
  fn from(fp: Fingerprint) -> Self {
    fp.0
  }
}

impl fmt::Display for Fingerprint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{:016x}", self.0)
  }
}

impl fmt::LowerHex for Fingerprint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::LowerHex::fmt(&self.0, f)
  }
}

impl fmt::UpperHex for Fingerprint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::UpperHex::fmt(&self.0, f)
  }
}
