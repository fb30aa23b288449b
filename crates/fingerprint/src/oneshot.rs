//! One-shot entry points.

use traits::HashError;

use crate::{Fingerprint, HostValue};

/// Fingerprint a single host value.
///
/// # Errors
///
/// [`HashError::InvalidArgument`] if `value` is not a buffer or a valid typed
/// view. Nothing is hashed in that case.
#[inline]
pub fn hash64(value: &HostValue<'_>, seed: u64) -> Result<Fingerprint, HashError> {
  let bytes = value.as_bytes()?;
  Ok(Fingerprint::of(bytes, seed))
}

/// Like [`hash64`], narrowed to the low 32 bits.
///
/// # Errors
///
/// Same as [`hash64`].
#[inline]
pub fn hash64_low32(value: &HostValue<'_>, seed: u64) -> Result<u32, HashError> {
  hash64(value, seed).map(Fingerprint::low32)
}
