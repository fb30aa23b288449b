//! Fuzz target for the streaming XXH64 API.
//!
//! Arbitrary update sequences, with digests and resets interleaved, must
//! always agree with the one-shot hash of what was fed since the last reset.

#![no_main]

use arbitrary::Arbitrary;
use hashes::fast::{Xxh64, Xxh64Hasher};
use libfuzzer_sys::fuzz_target;
use traits::{FastHash as _, StreamingHash as _};

#[derive(Arbitrary, Debug)]
enum Op {
  Update(Vec<u8>),
  Digest,
  Reset,
}

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u64,
  ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
  let mut hasher = Xxh64Hasher::with_seed(input.seed);
  let mut fed = Vec::new();

  for op in &input.ops {
    match op {
      Op::Update(bytes) => {
        hasher.update(bytes);
        fed.extend_from_slice(bytes);
      }
      Op::Digest => {
        assert_eq!(hasher.digest(), Xxh64::hash_with_seed(input.seed, &fed), "xxh64 streaming mismatch");
      }
      Op::Reset => {
        hasher.reset();
        fed.clear();
      }
    }
  }

  assert_eq!(hasher.digest(), Xxh64::hash_with_seed(input.seed, &fed));
  assert_eq!(hasher.total_len(), fed.len() as u64);
});
