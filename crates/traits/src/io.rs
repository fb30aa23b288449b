//! I/O adapters for streaming hashes.
//!
//! [`HashReader`] and [`HashWriter`] wrap [`std::io::Read`] and
//! [`std::io::Write`] implementations and feed every transferred byte into a
//! [`StreamingHash`](crate::StreamingHash) state.
//!
//! Only bytes actually transferred are hashed: short reads and short writes
//! are accounted for exactly, so the digest always matches the data that moved.
//!
//! # Example
//!
//! ```rust
//! # use traits::StreamingHash;
//! # #[derive(Clone, Default)]
//! # struct Sum { seed: u64, acc: u64, len: u64 }
//! # impl StreamingHash for Sum {
//! #   const OUTPUT_SIZE: usize = 8;
//! #   type Output = u64;
//! #   type Seed = u64;
//! #   fn with_seed(seed: u64) -> Self { Self { seed, acc: seed, len: 0 } }
//! #   fn seed(&self) -> u64 { self.seed }
//! #   fn total_len(&self) -> u64 { self.len }
//! #   fn update(&mut self, data: &[u8]) {
//! #     self.len += data.len() as u64;
//! #     self.acc = data.iter().fold(self.acc, |acc, &b| acc.wrapping_add(u64::from(b)));
//! #   }
//! #   fn digest(&self) -> u64 { self.acc }
//! #   fn reset(&mut self) { *self = Self::with_seed(self.seed); }
//! # }
//! # use std::io::Cursor;
//! let mut reader = Sum::reader(Cursor::new(b"abc".to_vec()));
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! assert_eq!(reader.digest(), u64::from(b'a') + u64::from(b'b') + u64::from(b'c'));
//! # Ok::<(), std::io::Error>(())
//! ```

#[cfg(feature = "std")]
#[inline]
fn read_and_update<R>(inner: &mut R, buf: &mut [u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn read_vectored_and_update<R>(
  inner: &mut R,
  bufs: &mut [std::io::IoSliceMut<'_>],
  on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  R: std::io::Read,
{
  let n = inner.read_vectored(bufs)?;
  feed_prefix(bufs.iter().map(|b| &**b), n, on_data);
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn write_and_update<W>(inner: &mut W, buf: &[u8], mut on_data: impl FnMut(&[u8])) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write(buf)?;
  if let Some(data) = buf.get(..n) {
    on_data(data);
  }
  Ok(n)
}

#[cfg(feature = "std")]
#[inline]
fn write_vectored_and_update<W>(
  inner: &mut W,
  bufs: &[std::io::IoSlice<'_>],
  on_data: impl FnMut(&[u8]),
) -> std::io::Result<usize>
where
  W: std::io::Write,
{
  let n = inner.write_vectored(bufs)?;
  feed_prefix(bufs.iter().map(|b| &**b), n, on_data);
  Ok(n)
}

/// Feed the first `n` bytes spread across `bufs`, in order.
#[cfg(feature = "std")]
#[inline]
fn feed_prefix<'a>(bufs: impl Iterator<Item = &'a [u8]>, n: usize, mut on_data: impl FnMut(&[u8])) {
  let mut remaining = n;
  for buf in bufs {
    if remaining == 0 {
      break;
    }
    let take = remaining.min(buf.len());
    if let Some(data) = buf.get(..take) {
      on_data(data);
    }
    remaining -= take;
  }
}

/// Wraps a [`Read`](std::io::Read) and hashes every byte read.
///
/// # Type Parameters
///
/// - `R`: The inner reader type
/// - `H`: The streaming hash state (e.g., `Xxh64Hasher`)
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct HashReader<R, H: crate::StreamingHash> {
  inner: R,
  hasher: H,
}

#[cfg(feature = "std")]
impl<R, H: crate::StreamingHash> HashReader<R, H> {
  /// Create a reader wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: R) -> Self {
    Self { inner, hasher: H::new() }
  }

  /// Create a reader wrapper with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: R, seed: H::Seed) -> Self {
    Self { inner, hasher: H::with_seed(seed) }
  }

  /// Hash of everything read so far. Further reads keep extending it.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> H::Output {
    self.hasher.digest()
  }

  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap into the inner reader and the hash of everything read.
  #[inline]
  pub fn into_parts(self) -> (R, H::Output) {
    let digest = self.hasher.digest();
    (self.inner, digest)
  }

  #[inline]
  pub fn into_inner(self) -> R {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &R {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut R {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<R: std::io::Read, H: crate::StreamingHash> std::io::Read for HashReader<R, H> {
  #[inline]
  fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
    read_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn read_vectored(&mut self, bufs: &mut [std::io::IoSliceMut<'_>]) -> std::io::Result<usize> {
    read_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

/// Wraps a [`Write`](std::io::Write) and hashes every byte the inner writer
/// accepts.
///
/// The hash is updated **after** the inner write returns, with exactly the
/// prefix it reported as written. A failed write hashes nothing.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct HashWriter<W, H: crate::StreamingHash> {
  inner: W,
  hasher: H,
}

#[cfg(feature = "std")]
impl<W, H: crate::StreamingHash> HashWriter<W, H> {
  /// Create a writer wrapper with the default seed.
  #[inline]
  #[must_use]
  pub fn new(inner: W) -> Self {
    Self { inner, hasher: H::new() }
  }

  /// Create a writer wrapper with `seed`.
  #[inline]
  #[must_use]
  pub fn with_seed(inner: W, seed: H::Seed) -> Self {
    Self { inner, hasher: H::with_seed(seed) }
  }

  /// Hash of everything written so far.
  #[inline]
  #[must_use]
  pub fn digest(&self) -> H::Output {
    self.hasher.digest()
  }

  #[inline]
  pub fn hasher_mut(&mut self) -> &mut H {
    &mut self.hasher
  }

  /// Unwrap into the inner writer and the hash of everything written.
  #[inline]
  pub fn into_parts(self) -> (W, H::Output) {
    let digest = self.hasher.digest();
    (self.inner, digest)
  }

  #[inline]
  pub fn into_inner(self) -> W {
    self.inner
  }

  #[inline]
  pub fn inner(&self) -> &W {
    &self.inner
  }

  #[inline]
  pub fn inner_mut(&mut self) -> &mut W {
    &mut self.inner
  }
}

#[cfg(feature = "std")]
impl<W: std::io::Write, H: crate::StreamingHash> std::io::Write for HashWriter<W, H> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    write_and_update(&mut self.inner, buf, |data| self.hasher.update(data))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    self.inner.flush()
  }

  #[inline]
  fn write_vectored(&mut self, bufs: &[std::io::IoSlice<'_>]) -> std::io::Result<usize> {
    write_vectored_and_update(&mut self.inner, bufs, |data| self.hasher.update(data))
  }
}

#[cfg(all(test, feature = "std"))]
mod tests {
  use std::{
    io::{Cursor, IoSlice, Read, Write},
    vec::Vec,
  };

  use super::{HashReader, HashWriter};
  use crate::StreamingHash;

  /// Order-sensitive toy hash so that dropped or reordered bytes show up.
  #[derive(Clone, Default, Debug)]
  struct Poly {
    seed: u64,
    acc: u64,
    len: u64,
  }

  impl StreamingHash for Poly {
    const OUTPUT_SIZE: usize = 8;
    type Output = u64;
    type Seed = u64;

    fn with_seed(seed: u64) -> Self {
      Self { seed, acc: seed, len: 0 }
    }
    fn seed(&self) -> u64 {
      self.seed
    }
    fn total_len(&self) -> u64 {
      self.len
    }
    fn update(&mut self, data: &[u8]) {
      self.len += data.len() as u64;
      for &b in data {
        self.acc = self.acc.wrapping_mul(31).wrapping_add(u64::from(b));
      }
    }
    fn digest(&self) -> u64 {
      self.acc
    }
    fn reset(&mut self) {
      *self = Self::with_seed(self.seed);
    }
  }

  fn one_shot(seed: u64, data: &[u8]) -> u64 {
    let mut h = Poly::with_seed(seed);
    h.update(data);
    h.digest()
  }

  /// Accepts at most `limit` bytes per write.
  struct Trickle {
    out: Vec<u8>,
    limit: usize,
  }

  impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
      let n = buf.len().min(self.limit);
      self.out.extend_from_slice(&buf[..n]);
      Ok(n)
    }
    fn flush(&mut self) -> std::io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn reader_hashes_everything_read() {
    let data: Vec<u8> = (0u8..=200).collect();
    let mut reader = HashReader::<_, Poly>::with_seed(Cursor::new(data.clone()), 9);
    let mut sink = Vec::new();
    reader.read_to_end(&mut sink).unwrap();
    assert_eq!(sink, data);
    assert_eq!(reader.digest(), one_shot(9, &data));
  }

  #[test]
  fn reader_small_buffer_reads() {
    let data = b"the quick brown fox jumps over the lazy dog".to_vec();
    let mut reader = Poly::reader(Cursor::new(data.clone()));
    let mut buf = [0u8; 3];
    loop {
      let n = reader.read(&mut buf).unwrap();
      if n == 0 {
        break;
      }
    }
    let (_, digest) = reader.into_parts();
    assert_eq!(digest, one_shot(0, &data));
  }

  #[test]
  fn writer_hashes_only_accepted_bytes() {
    let mut writer = HashWriter::<_, Poly>::new(Trickle { out: Vec::new(), limit: 5 });
    let n = writer.write(b"0123456789").unwrap();
    assert_eq!(n, 5);
    assert_eq!(writer.digest(), one_shot(0, b"01234"));

    writer.write_all(b"56789abc").unwrap();
    let (inner, digest) = writer.into_parts();
    assert_eq!(inner.out, b"0123456789abc".to_vec());
    assert_eq!(digest, one_shot(0, b"0123456789abc"));
  }

  #[test]
  fn writer_vectored_matches_concatenation() {
    let mut writer = Poly::writer(Vec::new());
    let bufs = [IoSlice::new(b"ab"), IoSlice::new(b""), IoSlice::new(b"cde")];
    let n = writer.write_vectored(&bufs).unwrap();
    let written = writer.inner().clone();
    assert_eq!(writer.digest(), one_shot(0, &written));
    assert_eq!(&written[..], &b"abcde"[..n]);
  }

  #[test]
  fn hash_vectored_matches_update() {
    let bufs: [&[u8]; 3] = [b"merkle", b"", b" node"];
    assert_eq!(Poly::hash_vectored(4, &bufs), one_shot(4, b"merkle node"));
  }
}
