//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! These hashes identify content; they do not authenticate it. Do not use them
//! for signatures, MACs, key derivation, or anything an adversary can steer.

pub mod xxh64;

pub use xxh64::{Xxh64, Xxh64BuildHasher, Xxh64Hasher};
