//! Host capabilities: wall clock and randomness.
//!
//! Commands never read the clock or a global RNG directly. They go through
//! a [`Host`], which tests replace with a fixed implementation.

use rand::Rng;
use rand::rngs::ThreadRng;

/// Source of time and randomness for command execution.
pub trait Host {
    /// Current time as a Unix timestamp in seconds.
    fn now(&self) -> u64;

    /// Uniformly random index in `0..len`. `len` is never zero.
    fn random_index(&mut self, len: usize) -> usize;

    /// Pick a uniformly random element of a non-empty slice.
    fn choose<'a>(&mut self, items: &'a [&'a str]) -> &'a str {
        items[self.random_index(items.len())]
    }
}

/// Host backed by the real clock and the thread-local RNG.
///
/// On `wasm32` the clock comes from `Date.now()` and the RNG is seeded via
/// `crypto.getRandomValues`.
#[derive(Clone, Debug, Default)]
pub struct SystemHost {
    rng: ThreadRng,
}

impl SystemHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Host for SystemHost {
    fn now(&self) -> u64 {
        wall_clock_secs()
    }

    fn random_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

#[cfg(target_arch = "wasm32")]
fn wall_clock_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn wall_clock_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
