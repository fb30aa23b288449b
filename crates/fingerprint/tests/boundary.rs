//! One-shot, streaming and seed handling at the host boundary.

use fingerprint::{
  DEFAULT_SEED, Fingerprint, HashError, HashState, HostValue, coerce_seed, hash64, hash64_low32,
};
use proptest::prelude::*;
use xxhash_rust::xxh64::xxh64;

const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

#[test]
fn canonical_values() {
  let cases: &[(&[u8], u64, u64)] = &[
    (b"", 0, 0xEF46_DB37_51D8_E999),
    (b"", 1, 0xD5AF_BA13_36A3_BE4B),
    (b"a", 0, 0xD24E_C4F1_A98C_6E5B),
    (b"abc", 0, 0x44BC_2CF5_AD77_0999),
    (b"123456789", 0, 0x8CB8_41DB_40E6_AE83),
    (b"hello world", 0, 0x45AB_6734_B21E_6968),
    (b"hello world", 42, 0x69C2_B68F_9D93_52A1),
    (FOX, 0, 0x0B24_2D36_1FDA_71BC),
    (FOX, 1, 0xDF50_91B6_DAD2_C6DB),
  ];
  for &(input, seed, want) in cases {
    assert_eq!(hash64(&HostValue::Buffer(input), seed), Ok(Fingerprint::new(want)), "{input:?} / {seed}");
    assert_eq!(hash64_low32(&HostValue::Buffer(input), seed), Ok(want as u32));
  }
}

#[test]
fn seeds_from_host_values() {
  let data = HostValue::Buffer(b"hello world");
  let by_number = hash64(&data, coerce_seed(Some(&HostValue::Number(42.0)))).unwrap();
  let by_bigint = hash64(&data, coerce_seed(Some(&HostValue::BigInt(42)))).unwrap();
  assert_eq!(by_number, by_bigint);

  let unseeded = hash64(&data, coerce_seed(Some(&HostValue::Str("42")))).unwrap();
  assert_eq!(unseeded, hash64(&data, DEFAULT_SEED).unwrap());
}

#[test]
fn streaming_rejects_without_side_effects() {
  let mut state = HashState::new(0);
  state.update(&HostValue::Buffer(b"hello ")).unwrap();
  assert_eq!(
    state.update(&HostValue::Array(&[])).unwrap_err(),
    HashError::invalid_argument("Buffer or TypedArray", "Array")
  );
  state.update(&HostValue::Buffer(b"world")).unwrap();
  assert_eq!(state.digest().get(), 0x45AB_6734_B21E_6968);
}

#[test]
fn digest_is_repeatable_and_stream_continues() {
  let mut state = HashState::new(1);
  state.update_bytes(&FOX[..20]);
  let mid = state.digest();
  assert_eq!(state.digest(), mid);
  assert_eq!(mid.get(), xxh64(&FOX[..20], 1));

  state.update_bytes(&FOX[20..]);
  assert_eq!(state.digest().get(), 0xDF50_91B6_DAD2_C6DB);
  assert_eq!(state.total_len(), FOX.len() as u64);
}

#[test]
fn reset_is_equivalent_to_fresh_state() {
  let mut reused = HashState::new(7);
  reused.update_bytes(&[0xAA; 77]).reset();
  reused.update_bytes(b"abc");

  let mut fresh = HashState::new(7);
  fresh.update_bytes(b"abc");
  assert_eq!(reused.digest(), fresh.digest());
  assert_eq!(reused.total_len(), 3);
}

proptest! {
  #[test]
  fn streaming_partition_matches_one_shot(
    data in proptest::collection::vec(any::<u8>(), 0..512),
    cuts in proptest::collection::vec(any::<usize>(), 0..8),
    seed in any::<u64>(),
  ) {
    let mut points: Vec<usize> = cuts.iter().map(|c| c % (data.len() + 1)).collect();
    points.sort_unstable();

    let mut state = HashState::new(seed);
    let mut start = 0;
    for end in points.into_iter().chain(core::iter::once(data.len())) {
      let backing = data.as_slice();
      state.update(&HostValue::typed_array(backing, start, end - start)).unwrap();
      start = end;
    }
    prop_assert_eq!(state.digest(), hash64(&HostValue::Buffer(&data), seed).unwrap());
    prop_assert_eq!(state.digest().get(), xxh64(&data, seed));
  }

  #[test]
  fn low32_is_truncation(data in proptest::collection::vec(any::<u8>(), 0..128), seed in any::<u64>()) {
    let full = hash64(&HostValue::Buffer(&data), seed).unwrap();
    prop_assert_eq!(hash64_low32(&HostValue::Buffer(&data), seed).unwrap(), full.get() as u32);
  }
}
