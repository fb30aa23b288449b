//! Batch fingerprinting.
//!
//! Each element is hashed independently with the shared seed, so batches are
//! embarrassingly parallel. Results always come back in input order, however
//! the work was scheduled. An element that does not carry bytes gets
//! [`Fingerprint::ZERO`] and never aborts the batch.

use alloc::vec::Vec;

use traits::HashError;

use crate::{BatchPolicy, Fingerprint, HostValue};

/// What the batch entry point accepts as its first argument.
const ARRAY_EXPECTED: &str = "Array of Buffers";

/// Result of [`hash64_batch_with`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchOutcome {
  /// One fingerprint per input, in input order.
  pub hashes: Vec<Fingerprint>,
  /// One [`HashError::BatchElementInvalid`] per slot that was zero-filled,
  /// in ascending index order.
  pub rejected: Vec<HashError>,
}

impl BatchOutcome {
  /// Whether every element was hashed.
  #[inline]
  #[must_use]
  pub fn is_clean(&self) -> bool {
    self.rejected.is_empty()
  }

  /// Low 32 bits of every fingerprint, in input order.
  #[must_use]
  pub fn low32(&self) -> Vec<u32> {
    self.hashes.iter().map(|fp| fp.low32()).collect()
  }
}

#[inline]
fn hash_slot(value: &HostValue<'_>, seed: u64) -> Result<Fingerprint, &'static str> {
  match value.as_bytes() {
    Ok(bytes) => Ok(Fingerprint::of(bytes, seed)),
    Err(err) => Err(err.found()),
  }
}

fn run_sequential(values: &[HostValue<'_>], seed: u64) -> Vec<Result<Fingerprint, &'static str>> {
  values.iter().map(|v| hash_slot(v, seed)).collect()
}

#[cfg(feature = "parallel")]
fn run_parallel(values: &[HostValue<'_>], seed: u64) -> Vec<Result<Fingerprint, &'static str>> {
  use rayon::prelude::*;

  // Indexed collect keeps input order.
  values.par_iter().map(|v| hash_slot(v, seed)).collect()
}

#[cfg(not(feature = "parallel"))]
fn run_parallel(values: &[HostValue<'_>], seed: u64) -> Vec<Result<Fingerprint, &'static str>> {
  run_sequential(values, seed)
}

/// Fingerprint every element of `values` under `policy`.
///
/// Never fails: malformed elements are zero-filled and listed in
/// [`BatchOutcome::rejected`].
#[must_use]
pub fn hash64_batch_with(values: &[HostValue<'_>], seed: u64, policy: &BatchPolicy) -> BatchOutcome {
  let slots = if policy.allows_parallel(values.len()) {
    log::trace!("hashing batch of {} on the rayon pool", values.len());
    run_parallel(values, seed)
  } else {
    log::trace!("hashing batch of {} sequentially", values.len());
    run_sequential(values, seed)
  };

  let mut outcome = BatchOutcome { hashes: Vec::with_capacity(slots.len()), rejected: Vec::new() };
  for (index, slot) in slots.into_iter().enumerate() {
    match slot {
      Ok(fp) => outcome.hashes.push(fp),
      Err(found) => {
        log::debug!("batch element {index} is {found}, substituting zero");
        outcome.hashes.push(Fingerprint::ZERO);
        outcome.rejected.push(HashError::batch_element(index, found));
      }
    }
  }
  outcome
}

/// Fingerprint every element of `values` with the process-wide
/// [`BatchPolicy::global`].
///
/// ```
/// use fingerprint::{Fingerprint, HostValue, hash64_batch};
///
/// let hashes = hash64_batch(&[HostValue::Buffer(b"a"), HostValue::Number(1.0)], 0);
/// assert_eq!(hashes, [Fingerprint::new(0xD24E_C4F1_A98C_6E5B), Fingerprint::ZERO]);
/// ```
#[must_use]
pub fn hash64_batch(values: &[HostValue<'_>], seed: u64) -> Vec<Fingerprint> {
  hash64_batch_with(values, seed, &BatchPolicy::global()).hashes
}

/// Like [`hash64_batch`], narrowed to the low 32 bits.
#[must_use]
pub fn hash64_batch_low32(values: &[HostValue<'_>], seed: u64) -> Vec<u32> {
  hash64_batch_with(values, seed, &BatchPolicy::global()).low32()
}

/// Batch entry point taking the raw host argument.
///
/// # Errors
///
/// [`HashError::InvalidArgument`] if `value` is not an array. Malformed
/// elements inside the array are zero-filled, not reported as errors.
pub fn hash64_batch_value(value: &HostValue<'_>, seed: u64) -> Result<Vec<Fingerprint>, HashError> {
  match value {
    HostValue::Array(items) => Ok(hash64_batch(items, seed)),
    other => Err(HashError::invalid_argument(ARRAY_EXPECTED, other.type_name())),
  }
}
