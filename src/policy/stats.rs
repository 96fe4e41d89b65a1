//! Simulation statistics.

use std::fmt;

use crate::policy::Access;

/// Counters collected over one simulation run.
///
/// A run is single-threaded and owns its stats, so plain integers are
/// enough. Invariants: `hits + misses == accesses` and
/// `evictions <= misses`.
///
/// # Example
/// ```
/// use pagesim::{Policy, Trace};
///
/// let stats = Policy::Lru.simulate(&Trace::from(vec![1, 2, 1]), 1);
/// assert_eq!(stats.hits, 0);
/// assert_eq!(stats.evictions, 2);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Number of references replayed.
    pub accesses: u64,

    /// References served from the resident set.
    pub hits: u64,

    /// References that had to load the page.
    pub misses: u64,

    /// Misses that displaced a resident page.
    pub evictions: u64,
}

impl SimStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one access.
    pub fn record(&mut self, access: &Access) {
        self.accesses += 1;
        match access {
            Access::Hit => self.hits += 1,
            Access::Miss { evicted } => {
                self.misses += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Calculate cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.accesses == 0 {
            0.0
        } else {
            self.hits as f64 / self.accesses as f64
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ accesses: {}, hits: {}, misses: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.accesses,
            self.hits,
            self.misses,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
