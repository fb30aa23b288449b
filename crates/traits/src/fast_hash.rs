//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic one-shot hash.
///
/// Suitable for content fingerprints, Merkle node identifiers, hash tables and
/// sharding. **Not** suitable for signatures, MACs, or any setting where an
/// adversary picks the input.
///
/// Implementations must be pure: the same `(seed, data)` pair always yields the
/// same output, on every platform. Streaming counterparts implement
/// [`StreamingHash`](crate::StreamingHash) and must agree with this trait on
/// the concatenation of their updates.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type. The default value is the unseeded variant.
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using the default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
