//! XXH64 content fingerprints for Merkle trees and other content-addressed
//! structures.
//!
//! `fingerprint` puts a host-facing surface on the portable XXH64 core in
//! [`hashes`]. Host runtimes hand over loosely typed arguments ([`HostValue`]).
//! Each argument is normalized into a byte slice once, at the boundary, before
//! any hashing happens.
//!
//! # Quick Start
//!
//! ```
//! use fingerprint::{HashState, HostValue, hash64, hash64_batch};
//!
//! let node = HostValue::Buffer(b"merkle node");
//! let fp = hash64(&node, 0)?;
//!
//! // Streaming produces the same fingerprint as the one-shot call.
//! let mut state = HashState::new(0);
//! state.update(&HostValue::Buffer(b"merkle "))?.update(&HostValue::Buffer(b"node"))?;
//! assert_eq!(state.digest(), fp);
//!
//! // Batches keep input order; non-buffer elements yield zero.
//! let hashes = hash64_batch(&[node, HostValue::Null], 0);
//! assert_eq!(hashes[0], fp);
//! assert_eq!(hashes[1].get(), 0);
//! # Ok::<(), fingerprint::HashError>(())
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Environment-driven [`BatchPolicy`] and I/O adapters |
//! | `parallel` | No | Hashes large batches on the rayon thread pool |
//!
//! # Logging
//!
//! Batch decisions and substituted elements are reported through the [`log`]
//! facade at `debug`/`trace` level. No logger is installed by this crate.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod batch;
mod config;
mod host;
mod oneshot;
mod output;
mod seed;
mod state;

pub use batch::{BatchOutcome, hash64_batch, hash64_batch_low32, hash64_batch_value, hash64_batch_with};
pub use config::{BatchPolicy, ENV_PARALLEL, ENV_PARALLEL_MIN};
pub use hashes::fast::{Xxh64, Xxh64BuildHasher, Xxh64Hasher};
pub use host::HostValue;
pub use oneshot::{hash64, hash64_low32};
pub use output::Fingerprint;
pub use seed::{DEFAULT_SEED, coerce_seed};
pub use state::HashState;
#[cfg(feature = "std")]
pub use traits::io::{HashReader, HashWriter};
pub use traits::{FastHash, HashError, StreamingHash};
