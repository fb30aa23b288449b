//! Host-facing streaming state.

use hashes::fast::Xxh64Hasher;
use traits::{HashError, StreamingHash};

use crate::{Fingerprint, HostValue, coerce_seed};

/// Streaming fingerprint bound to one seed for its whole life.
///
/// Construct, feed with [`update`](Self::update) any number of times, read
/// with [`digest`](Self::digest) as often as needed, and [`reset`](Self::reset)
/// to start a new stream with the same seed. A rejected update leaves the
/// state untouched.
///
/// ```
/// use fingerprint::{HashState, HostValue, hash64};
///
/// let mut state = HashState::from_host_seed(Some(&HostValue::BigInt(7)));
/// state.update(&HostValue::Buffer(b"abc"))?;
/// assert!(state.update(&HostValue::Null).is_err());
/// assert_eq!(state.digest(), hash64(&HostValue::Buffer(b"abc"), 7)?);
/// # Ok::<(), fingerprint::HashError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct HashState {
  inner: Xxh64Hasher,
}

impl HashState {
  #[inline]
  #[must_use]
  pub const fn new(seed: u64) -> Self {
    Self { inner: Xxh64Hasher::with_seed(seed) }
  }

  /// Create a state from an optional host seed argument.
  ///
  /// See [`coerce_seed`] for how the argument is interpreted.
  #[inline]
  #[must_use]
  pub fn from_host_seed(seed: Option<&HostValue<'_>>) -> Self {
    Self::new(coerce_seed(seed))
  }

  #[inline]
  #[must_use]
  pub fn seed(&self) -> u64 {
    self.inner.seed()
  }

  /// Bytes fed since construction or the last reset.
  #[inline]
  #[must_use]
  pub fn total_len(&self) -> u64 {
    self.inner.total_len()
  }

  /// Append the bytes of `value` to the stream.
  ///
  /// # Errors
  ///
  /// [`HashError::InvalidArgument`] if `value` is not a buffer or a valid
  /// typed view.
  pub fn update(&mut self, value: &HostValue<'_>) -> Result<&mut Self, HashError> {
    let bytes = value.as_bytes()?;
    self.inner.update(bytes);
    Ok(self)
  }

  #[inline]
  pub fn update_bytes(&mut self, bytes: &[u8]) -> &mut Self {
    self.inner.update(bytes);
    self
  }

  #[inline]
  #[must_use]
  pub fn digest(&self) -> Fingerprint {
    Fingerprint::new(self.inner.digest())
  }

  #[inline]
  #[must_use]
  pub fn digest_low32(&self) -> u32 {
    self.digest().low32()
  }

  #[inline]
  pub fn reset(&mut self) -> &mut Self {
    self.inner.reset();
    self
  }
}
