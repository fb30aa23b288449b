//! Core hashing traits for the fingerprint workspace.
//!
//! This crate defines the seams every hash implementation plugs into. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot non-cryptographic hash of a complete buffer | XXH64 |
//! | [`StreamingHash`] | Incremental hashing with idempotent digest and reset | XXH64 state |
//!
//! # Error Types
//!
//! - [`HashError`] - Rejected host arguments at the boundary layer
//!
//! # I/O Adapters
//!
//! With the `std` feature, [`io::HashReader`] and [`io::HashWriter`] hash the
//! bytes flowing through any [`std::io::Read`] or [`std::io::Write`].
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
pub mod io;
mod streaming;

pub use error::HashError;
pub use fast_hash::FastHash;
pub use streaming::StreamingHash;
