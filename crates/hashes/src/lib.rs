//! Fast non-cryptographic content hashes.
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`fast`] - Non-cryptographic hashes (**NOT CRYPTO**).
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod fast;

pub use traits::{FastHash, StreamingHash};
