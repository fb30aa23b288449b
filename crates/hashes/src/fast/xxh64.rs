//! XXH64 (**NOT CRYPTO**).
//!
//! Portable scalar implementation of the canonical 64-bit xxHash. Output is
//! bit-exact with every other conforming implementation, which is what makes
//! it usable as a cross-implementation content fingerprint.
//!
//! - [`Xxh64`] hashes a complete buffer in one shot.
//! - [`Xxh64Hasher`] accepts input in arbitrary increments and agrees with
//!   [`Xxh64`] on the concatenation.
//!
//! Inputs of 32 bytes or more are consumed in 32-byte stripes against four
//! independent accumulators; the remaining 0..=31 tail bytes are folded in
//! 8-, 4- and 1-byte lanes before the final avalanche.

#![allow(clippy::indexing_slicing)] // Fixed-size stripe and tail buffers

use traits::FastHash;

mod stream;

pub use stream::{Xxh64BuildHasher, Xxh64Hasher};

/// One-shot XXH64.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh64;

pub(crate) const PRIME64_1: u64 = 0x9E37_79B1_85EB_CA87;
pub(crate) const PRIME64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
pub(crate) const PRIME64_3: u64 = 0x1656_67B1_9E37_79F9;
pub(crate) const PRIME64_4: u64 = 0x85EB_CA77_C2B2_AE63;
pub(crate) const PRIME64_5: u64 = 0x27D4_EB2F_1656_67C5;

pub(crate) const STRIPE_LEN: usize = 32;
const LANE_LEN: usize = 8;

pub(crate) type Stripe = [u8; STRIPE_LEN];

#[inline(always)]
const fn round(acc: u64, lane: u64) -> u64 {
  acc
    .wrapping_add(lane.wrapping_mul(PRIME64_2))
    .rotate_left(31)
    .wrapping_mul(PRIME64_1)
}

#[inline(always)]
const fn merge_round(hash: u64, acc: u64) -> u64 {
  (hash ^ round(0, acc)).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4)
}

#[inline(always)]
pub(crate) const fn avalanche(mut hash: u64) -> u64 {
  hash ^= hash >> 33;
  hash = hash.wrapping_mul(PRIME64_2);
  hash ^= hash >> 29;
  hash = hash.wrapping_mul(PRIME64_3);
  hash ^= hash >> 32;
  hash
}

#[inline(always)]
pub(crate) const fn initial_accs(seed: u64) -> [u64; 4] {
  [
    seed.wrapping_add(PRIME64_1).wrapping_add(PRIME64_2),
    seed.wrapping_add(PRIME64_2),
    seed,
    seed.wrapping_sub(PRIME64_1),
  ]
}

#[inline(always)]
pub(crate) fn accumulate_stripe(mut acc: [u64; 4], stripe: &Stripe) -> [u64; 4] {
  let (lanes, _) = stripe.as_chunks::<LANE_LEN>();

  let mut idx = 0usize;
  while idx < 4 {
    acc[idx] = round(acc[idx], u64::from_le_bytes(lanes[idx]));
    idx += 1;
  }

  acc
}

/// Fold the four accumulators into a single running hash.
#[inline(always)]
pub(crate) const fn converge(acc: [u64; 4]) -> u64 {
  let mut hash = acc[0]
    .rotate_left(1)
    .wrapping_add(acc[1].rotate_left(7))
    .wrapping_add(acc[2].rotate_left(12))
    .wrapping_add(acc[3].rotate_left(18));

  hash = merge_round(hash, acc[0]);
  hash = merge_round(hash, acc[1]);
  hash = merge_round(hash, acc[2]);
  merge_round(hash, acc[3])
}

/// Fold the 0..=31 tail bytes into `hash` and avalanche.
///
/// `hash` must already include the total input length.
#[inline(always)]
pub(crate) fn finalize(mut hash: u64, tail: &[u8]) -> u64 {
  debug_assert!(tail.len() < STRIPE_LEN);

  let (lanes, rest) = tail.as_chunks::<LANE_LEN>();
  for lane in lanes {
    hash ^= round(0, u64::from_le_bytes(*lane));
    hash = hash.rotate_left(27).wrapping_mul(PRIME64_1).wrapping_add(PRIME64_4);
  }

  // At most one 4-byte lane fits in what is left.
  let (words, bytes) = rest.as_chunks::<4>();
  for word in words {
    hash ^= u64::from(u32::from_le_bytes(*word)).wrapping_mul(PRIME64_1);
    hash = hash.rotate_left(23).wrapping_mul(PRIME64_2).wrapping_add(PRIME64_3);
  }

  for &byte in bytes {
    hash ^= u64::from(byte).wrapping_mul(PRIME64_5);
    hash = hash.rotate_left(11).wrapping_mul(PRIME64_1);
  }

  avalanche(hash)
}

#[inline]
pub(crate) fn xxh64_with_seed(input: &[u8], seed: u64) -> u64 {
  let (stripes, tail) = input.as_chunks::<STRIPE_LEN>();

  let hash = if stripes.is_empty() {
    seed.wrapping_add(PRIME64_5)
  } else {
    let mut acc = initial_accs(seed);
    for stripe in stripes {
      acc = accumulate_stripe(acc, stripe);
    }
    converge(acc)
  };

  finalize(hash.wrapping_add(input.len() as u64), tail)
}

impl FastHash for Xxh64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    xxh64_with_seed(data, seed)
  }
}
