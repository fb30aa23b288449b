//! Batch entry points against the reference `xxhash-rust` implementation.

use fingerprint::{BatchPolicy, Fingerprint, HashError, HostValue, hash64_batch, hash64_batch_value, hash64_batch_with};
use proptest::prelude::*;
use xxhash_rust::xxh64::xxh64;

/// A generated batch slot: either bytes or something the boundary must reject.
#[derive(Clone, Debug)]
enum Slot {
  Bytes(Vec<u8>),
  Number(f64),
  Null,
}

fn slot() -> impl Strategy<Value = Slot> {
  prop_oneof![
    4 => proptest::collection::vec(any::<u8>(), 0..200).prop_map(Slot::Bytes),
    1 => any::<f64>().prop_map(Slot::Number),
    1 => Just(Slot::Null),
  ]
}

fn host_values(slots: &[Slot]) -> Vec<HostValue<'_>> {
  slots
    .iter()
    .map(|s| match s {
      Slot::Bytes(b) => HostValue::Buffer(b),
      Slot::Number(n) => HostValue::Number(*n),
      Slot::Null => HostValue::Null,
    })
    .collect()
}

fn expected(slots: &[Slot], seed: u64) -> Vec<Fingerprint> {
  slots
    .iter()
    .map(|s| match s {
      Slot::Bytes(b) => Fingerprint::new(xxh64(b, seed)),
      _ => Fingerprint::ZERO,
    })
    .collect()
}

proptest! {
  #[test]
  fn sequential_matches_reference(slots in proptest::collection::vec(slot(), 0..40), seed in any::<u64>()) {
    let values = host_values(&slots);
    let outcome = hash64_batch_with(&values, seed, &BatchPolicy::sequential());
    prop_assert_eq!(outcome.hashes, expected(&slots, seed));

    let rejected: Vec<usize> = slots.iter().enumerate().filter(|(_, s)| !matches!(s, Slot::Bytes(_))).map(|(i, _)| i).collect();
    let reported: Vec<usize> = outcome
      .rejected
      .iter()
      .map(|e| match e {
        HashError::BatchElementInvalid { index, .. } => *index,
        other => panic!("unexpected error {other:?}"),
      })
      .collect();
    prop_assert_eq!(reported, rejected);
  }

  #[test]
  fn forced_parallel_matches_reference(slots in proptest::collection::vec(slot(), 0..80), seed in any::<u64>()) {
    let values = host_values(&slots);
    let policy = BatchPolicy::new().with_parallel_min_items(1);
    let outcome = hash64_batch_with(&values, seed, &policy);
    prop_assert_eq!(outcome.hashes, expected(&slots, seed));
  }
}

#[test]
fn large_batch_keeps_input_order() {
  let owned: Vec<Vec<u8>> = (0..1024u32).map(|i| i.to_le_bytes().repeat((i % 17) as usize)).collect();
  let values: Vec<HostValue<'_>> = owned.iter().map(|b| HostValue::Buffer(b)).collect();

  let hashes = hash64_batch(&values, 0x0123_4567_89AB_CDEF);
  assert_eq!(hashes.len(), owned.len());
  for (bytes, fp) in owned.iter().zip(&hashes) {
    assert_eq!(fp.get(), xxh64(bytes, 0x0123_4567_89AB_CDEF));
  }
}

#[test]
fn host_array_argument() {
  let items = [HostValue::Buffer(b"hello world"), HostValue::Str("hello world")];
  let hashes = hash64_batch_value(&HostValue::Array(&items), 42).unwrap();
  assert_eq!(hashes, [Fingerprint::new(0x69C2_B68F_9D93_52A1), Fingerprint::ZERO]);

  let err = hash64_batch_value(&HostValue::Undefined, 0).unwrap_err();
  assert_eq!(err.to_string(), "expected Array of Buffers, found undefined");
}
