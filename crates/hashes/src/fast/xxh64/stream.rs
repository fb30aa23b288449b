//! Streaming XXH64.

use core::hash::{BuildHasher, Hasher};

use traits::StreamingHash;

use super::{PRIME64_5, STRIPE_LEN, Stripe, accumulate_stripe, converge, finalize, initial_accs};

/// Incremental XXH64 state.
///
/// Bytes that do not yet fill a 32-byte stripe are copied into an owned
/// buffer; nothing borrowed from the caller outlives an `update` call.
///
/// ```
/// use hashes::fast::{Xxh64, Xxh64Hasher};
/// use traits::{FastHash, StreamingHash};
///
/// let mut hasher = Xxh64Hasher::with_seed(7);
/// hasher.update(b"content ");
/// hasher.update(b"addressed");
/// assert_eq!(hasher.digest(), Xxh64::hash_with_seed(7, b"content addressed"));
/// ```
#[derive(Clone, Debug)]
pub struct Xxh64Hasher {
  seed: u64,
  acc: [u64; 4],
  buf: Stripe,
  /// Bytes of `buf` in use; always `< STRIPE_LEN` between calls.
  buf_len: usize,
  total_len: u64,
}

impl Xxh64Hasher {
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u64) -> Self {
    Self { seed, acc: initial_accs(seed), buf: [0u8; STRIPE_LEN], buf_len: 0, total_len: 0 }
  }

  /// The partial stripe carried over to the next update.
  #[inline]
  fn buffered(&self) -> &[u8] {
    self.buf.get(..self.buf_len).unwrap_or_default()
  }

  fn absorb(&mut self, mut data: &[u8]) {
    self.total_len = self.total_len.wrapping_add(data.len() as u64);

    if self.buf_len > 0 {
      let need = STRIPE_LEN - self.buf_len;
      if data.len() < need {
        if let Some(dst) = self.buf.get_mut(self.buf_len..self.buf_len + data.len()) {
          dst.copy_from_slice(data);
        }
        self.buf_len += data.len();
        return;
      }

      let (head, rest) = data.split_at(need);
      if let Some(dst) = self.buf.get_mut(self.buf_len..) {
        dst.copy_from_slice(head);
      }
      self.acc = accumulate_stripe(self.acc, &self.buf);
      self.buf_len = 0;
      data = rest;
    }

    let (stripes, tail) = data.as_chunks::<STRIPE_LEN>();
    for stripe in stripes {
      self.acc = accumulate_stripe(self.acc, stripe);
    }

    if let Some(dst) = self.buf.get_mut(..tail.len()) {
      dst.copy_from_slice(tail);
    }
    self.buf_len = tail.len();
  }

  fn compute(&self) -> u64 {
    let hash = if self.total_len >= STRIPE_LEN as u64 {
      converge(self.acc)
    } else {
      // No stripe consumed yet: the buffer holds the whole input.
      self.seed.wrapping_add(PRIME64_5)
    };

    finalize(hash.wrapping_add(self.total_len), self.buffered())
  }
}

impl Default for Xxh64Hasher {
  #[inline]
  fn default() -> Self {
    Self::with_seed(0)
  }
}

impl StreamingHash for Xxh64Hasher {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = u64;

  #[inline]
  fn with_seed(seed: Self::Seed) -> Self {
    Self::with_seed(seed)
  }

  #[inline]
  fn seed(&self) -> Self::Seed {
    self.seed
  }

  #[inline]
  fn total_len(&self) -> u64 {
    self.total_len
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.absorb(data);
  }

  #[inline]
  fn digest(&self) -> Self::Output {
    self.compute()
  }

  #[inline]
  fn reset(&mut self) {
    *self = Self::with_seed(self.seed);
  }
}

impl Hasher for Xxh64Hasher {
  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.absorb(bytes);
  }

  #[inline]
  fn finish(&self) -> u64 {
    self.compute()
  }
}

/// [`BuildHasher`] producing seeded [`Xxh64Hasher`]s.
///
/// ```
/// use std::collections::HashMap;
///
/// use hashes::fast::Xxh64BuildHasher;
///
/// let mut nodes: HashMap<&str, u32, _> = HashMap::with_hasher(Xxh64BuildHasher::with_seed(3));
/// nodes.insert("root", 0);
/// assert_eq!(nodes.get("root"), Some(&0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Xxh64BuildHasher {
  seed: u64,
}

impl Xxh64BuildHasher {
  #[inline]
  #[must_use]
  pub const fn with_seed(seed: u64) -> Self {
    Self { seed }
  }

  #[inline]
  #[must_use]
  pub const fn seed(&self) -> u64 {
    self.seed
  }
}

impl BuildHasher for Xxh64BuildHasher {
  type Hasher = Xxh64Hasher;

  #[inline]
  fn build_hasher(&self) -> Self::Hasher {
    Xxh64Hasher::with_seed(self.seed)
  }
}
