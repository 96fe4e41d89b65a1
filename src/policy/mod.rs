//! Page replacement policies.
//!
//! Every policy answers the same question: given an access trace and a
//! cache capacity, how many accesses hit? They differ only in how they
//! pick a victim when a miss lands on a full cache.
//!
//! # Components
//! - [`Replacer`] - The per-access contract shared by all policies
//! - [`Policy`] - Tagged variant selecting a policy at runtime
//! - [`SimStats`] - Counters produced by a run
//! - [`FifoReplacer`], [`OptReplacer`], [`RandomReplacer`],
//!   [`LruReplacer`], [`ClockReplacer`] - The five simulators
//!
//! # Example
//! ```
//! use pagesim::{Policy, Trace};
//!
//! let trace = Trace::from(vec![1, 2, 1, 2, 1, 2]);
//! assert_eq!(Policy::Fifo.hit_count(&trace, 2), 4);
//! assert_eq!(Policy::Opt.hit_count(&trace, 0), 0);
//! ```

pub mod clock;
pub mod fifo;
pub mod lru;
pub mod opt;
pub mod random;
mod stats;

use std::fmt;
use std::str::FromStr;

use crate::common::config::DEFAULT_SEED;
use crate::common::{Capacity, Error, PageId, Result};

pub use clock::ClockReplacer;
pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use opt::OptReplacer;
pub use random::RandomReplacer;
pub use stats::SimStats;

/// Outcome of a single page reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was resident.
    Hit,
    /// The page was not resident and has been loaded.
    ///
    /// `evicted` is the page it displaced, or `None` if a free slot was
    /// used (or the cache has no slots at all).
    Miss { evicted: Option<PageId> },
}

impl Access {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    /// Page evicted by this access, if any.
    #[inline]
    pub fn evicted(&self) -> Option<PageId> {
        match self {
            Access::Hit => None,
            Access::Miss { evicted } => *evicted,
        }
    }
}

/// A simulated cache that replays references one at a time.
///
/// Implementors own their cache state exclusively. After every call to
/// [`access`](Replacer::access), `len() <= capacity()` holds.
pub trait Replacer {
    /// Reference `page`, updating resident state and evicting if needed.
    fn access(&mut self, page: PageId) -> Access;

    /// Number of resident pages.
    fn len(&self) -> usize;

    /// Number of slots.
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Replay `trace` through `replacer` and collect statistics.
pub fn run<R: Replacer>(replacer: &mut R, trace: &[PageId]) -> SimStats {
    let mut stats = SimStats::new();
    for &page in trace {
        let access = replacer.access(page);
        if let Some(victim) = access.evicted() {
            log::trace!("{} evicted to load {}", victim, page);
        }
        stats.record(&access);
        debug_assert!(replacer.len() <= replacer.capacity());
    }
    stats
}

/// A replacement policy, selectable at runtime.
///
/// Each variant dispatches statically to its own simulator; there is no
/// trait object involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First-in, first-out.
    Fifo,
    /// Belady's optimal offline policy.
    Opt,
    /// Uniformly random victim, drawn from a generator seeded with `seed`.
    Rand { seed: u64 },
    /// Least recently used.
    Lru,
    /// Second-chance clock.
    Clock,
}

impl Policy {
    /// All five policies, with `seed` used for RAND.
    pub fn all(seed: u64) -> [Policy; 5] {
        [
            Policy::Fifo,
            Policy::Opt,
            Policy::Rand { seed },
            Policy::Lru,
            Policy::Clock,
        ]
    }

    /// Short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fifo => "fifo",
            Policy::Opt => "opt",
            Policy::Rand { .. } => "rand",
            Policy::Lru => "lru",
            Policy::Clock => "clock",
        }
    }

    /// Run this policy over `trace` with a cache of `capacity` pages.
    pub fn simulate(&self, trace: impl AsRef<[PageId]>, capacity: usize) -> SimStats {
        let trace = trace.as_ref();

        let stats = match *self {
            Policy::Fifo => run(&mut FifoReplacer::new(capacity), trace),
            Policy::Opt => run(&mut OptReplacer::new(trace, capacity), trace),
            Policy::Rand { seed } => run(&mut RandomReplacer::new(capacity, seed), trace),
            Policy::Lru => run(&mut LruReplacer::new(capacity), trace),
            Policy::Clock => run(&mut ClockReplacer::new(capacity), trace),
        };

        log::debug!("{} capacity={}: {}", self, capacity, stats);
        stats
    }

    /// Number of hits for `trace` under this policy.
    pub fn hit_count(&self, trace: impl AsRef<[PageId]>, capacity: usize) -> usize {
        self.simulate(trace, capacity).hits as usize
    }

    /// Like [`hit_count`](Policy::hit_count), but takes a signed capacity
    /// from an untrusted caller.
    ///
    /// # Errors
    /// - `Error::NegativeCapacity` if `capacity < 0`
    pub fn checked_hit_count(&self, trace: impl AsRef<[PageId]>, capacity: i64) -> Result<usize> {
        let capacity = Capacity::try_from(capacity)?;
        Ok(self.hit_count(trace, capacity.get()))
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Policy::Rand { seed } => write!(f, "rand(seed={})", seed),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Policy {
    type Err = Error;

    /// Parse a policy name. RAND parses with [`DEFAULT_SEED`].
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Policy::Fifo),
            "opt" | "optimal" => Ok(Policy::Opt),
            "rand" | "random" => Ok(Policy::Rand { seed: DEFAULT_SEED }),
            "lru" => Ok(Policy::Lru),
            "clock" => Ok(Policy::Clock),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
