//! Batch execution policy.
//!
//! Defaults are compiled in; with `std`, two environment variables override
//! them. The environment is read once per process by [`BatchPolicy::global`].
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `FINGERPRINT_BATCH_PARALLEL` | `0`/`false`/`off` forces sequential batches |
//! | `FINGERPRINT_BATCH_PARALLEL_MIN` | Minimum batch length before fanning out |

use alloc::string::String;

/// Disables parallel batches when set to `0`, `false`, `no` or `off`.
pub const ENV_PARALLEL: &str = "FINGERPRINT_BATCH_PARALLEL";

/// Overrides [`BatchPolicy::parallel_min_items`].
pub const ENV_PARALLEL_MIN: &str = "FINGERPRINT_BATCH_PARALLEL_MIN";

/// How batch entry points schedule their work.
///
/// Parallel execution only happens when the crate is built with the
/// `parallel` feature; otherwise every batch runs sequentially regardless of
/// the policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchPolicy {
  /// Whether large batches may fan out across threads.
  pub parallel: bool,
  /// Batches shorter than this always run on the calling thread.
  pub parallel_min_items: usize,
}

impl BatchPolicy {
  pub const DEFAULT_PARALLEL_MIN_ITEMS: usize = 256;

  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { parallel: true, parallel_min_items: Self::DEFAULT_PARALLEL_MIN_ITEMS }
  }

  /// Never leave the calling thread.
  #[inline]
  #[must_use]
  pub const fn sequential() -> Self {
    Self { parallel: false, parallel_min_items: Self::DEFAULT_PARALLEL_MIN_ITEMS }
  }

  #[inline]
  #[must_use]
  pub const fn with_parallel_min_items(mut self, items: usize) -> Self {
    self.parallel_min_items = items;
    self
  }

  /// Whether a batch of `len` elements should run in parallel.
  #[inline]
  #[must_use]
  pub const fn allows_parallel(&self, len: usize) -> bool {
    cfg!(feature = "parallel") && self.parallel && len >= self.parallel_min_items
  }

  /// Build a policy from a variable lookup, starting from the defaults.
  ///
  /// Unparsable values are ignored and leave the default in place.
  #[must_use]
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let mut policy = Self::new();

    if let Some(raw) = lookup(ENV_PARALLEL) {
      match parse_flag(&raw) {
        Some(parallel) => policy.parallel = parallel,
        None => log::debug!("ignoring {ENV_PARALLEL}={raw:?}: not a boolean"),
      }
    }

    if let Some(raw) = lookup(ENV_PARALLEL_MIN) {
      match raw.trim().parse::<usize>() {
        Ok(items) => policy.parallel_min_items = items,
        Err(_) => log::debug!("ignoring {ENV_PARALLEL_MIN}={raw:?}: not an item count"),
      }
    }

    policy
  }

  /// Build a policy from the process environment.
  #[cfg(feature = "std")]
  #[must_use]
  pub fn from_env() -> Self {
    let policy = Self::from_lookup(|key| std::env::var(key).ok());
    log::debug!("batch policy from environment: {policy:?}");
    policy
  }

  /// Process-wide policy used by [`hash64_batch`](crate::hash64_batch).
  ///
  /// With `std` this is [`from_env`](Self::from_env), evaluated once and
  /// cached; without it, the compiled-in defaults.
  #[must_use]
  pub fn global() -> Self {
    #[cfg(feature = "std")]
    {
      static GLOBAL: std::sync::OnceLock<BatchPolicy> = std::sync::OnceLock::new();
      *GLOBAL.get_or_init(Self::from_env)
    }
    #[cfg(not(feature = "std"))]
    {
      Self::new()
    }
  }
}

impl Default for BatchPolicy {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

fn parse_flag(raw: &str) -> Option<bool> {
  let v = raw.trim();
  if v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("on") {
    Some(true)
  } else if v == "0" || v.eq_ignore_ascii_case("false") || v.eq_ignore_ascii_case("no") || v.eq_ignore_ascii_case("off")
  {
    Some(false)
  } else {
    None
  }
}
