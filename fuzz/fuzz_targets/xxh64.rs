#![no_main]

use hashes::fast::Xxh64;
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

fuzz_target!(|input: &[u8]| {
  let (seed_bytes, data) = input.split_at(core::cmp::min(8, input.len()));
  let mut seed = 0u64;
  for (i, &b) in seed_bytes.iter().enumerate() {
    seed |= (b as u64) << (i * 8);
  }

  let ours = Xxh64::hash_with_seed(seed, data);
  let reference = xxhash_rust::xxh64::xxh64(data, seed);
  assert_eq!(ours, reference);
});
