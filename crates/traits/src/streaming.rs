//! Incremental (streaming) hash traits.
//!
//! - **Equivalence**: any split of the input yields the one-shot result
//! - **Idempotence**: `digest()` never disturbs the running state
//! - **Reuse**: `reset()` returns to the freshly seeded state

use core::fmt::Debug;

/// Incremental hash state.
///
/// Feeds bytes in any number of calls of any size and produces, at any point,
/// the hash of everything seen so far.
///
/// # Usage
///
/// ```rust,ignore
/// use hashes::fast::Xxh64Hasher;
/// use traits::StreamingHash;
///
/// let mut hasher = Xxh64Hasher::with_seed(7);
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let h = hasher.digest();
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `digest()` must be idempotent and must not change the state
/// - `reset()` must restore the state produced by `with_seed(self.seed())`
/// - state retained between calls must be owned; never borrow caller buffers
pub trait StreamingHash: Clone + Default {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type.
  type Seed: Copy + Debug + Default;

  /// Create a hasher with the default seed.
  #[inline]
  #[must_use]
  fn new() -> Self {
    Self::with_seed(Self::Seed::default())
  }

  /// Create a hasher with `seed`.
  #[must_use]
  fn with_seed(seed: Self::Seed) -> Self;

  /// The seed this hasher was created with.
  #[must_use]
  fn seed(&self) -> Self::Seed;

  /// Total number of bytes fed since construction or the last reset.
  #[must_use]
  fn total_len(&self) -> u64;

  /// Append `data` to the stream. Zero-length input is a no-op.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Hash of every byte seen so far.
  ///
  /// Does not consume or mutate the state; further updates continue the same
  /// stream.
  #[must_use]
  fn digest(&self) -> Self::Output;

  /// Return to the freshly seeded state, keeping the seed.
  fn reset(&mut self);

  /// Hash multiple buffers as if they were one contiguous input.
  #[inline]
  #[must_use]
  fn hash_vectored(seed: Self::Seed, bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::with_seed(seed);
    h.update_vectored(bufs);
    h.digest()
  }

  /// Wrap a reader so every byte read is hashed.
  ///
  /// # Example
  ///
  /// ```rust,ignore
  /// use hashes::fast::Xxh64Hasher;
  /// use traits::StreamingHash;
  ///
  /// let file = std::fs::File::open("node.bin")?;
  /// let mut reader = Xxh64Hasher::reader(file);
  /// std::io::copy(&mut reader, &mut std::io::sink())?;
  /// println!("{:016x}", reader.digest());
  /// ```
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn reader<R>(inner: R) -> crate::io::HashReader<R, Self>
  where
    Self: Sized,
  {
    crate::io::HashReader::new(inner)
  }

  /// Wrap a writer so every byte accepted by it is hashed.
  #[cfg(feature = "std")]
  #[inline]
  #[must_use]
  fn writer<W>(inner: W) -> crate::io::HashWriter<W, Self>
  where
    Self: Sized,
  {
    crate::io::HashWriter::new(inner)
  }
}
