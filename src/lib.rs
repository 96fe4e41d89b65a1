//! pagesim - offline evaluation of page replacement policies.
//!
//! Given a fully materialized access trace and a cache capacity, each
//! simulator replays the trace and reports how many references would have
//! been served from the cache.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   Trace (&[PageId])          Capacity (usize)                   │
//! │          └──────────────┬──────────────┘                        │
//! │                         ↓                                       │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Policy (policy/)                         │   │
//! │  │   FIFO | OPT | RAND | LRU | CLOCK  (one Replacer each)   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                         ↓                                       │
//! │        SimStats { accesses, hits, misses, evictions }           │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Capacity, Trace, Error, config)
//! - [`policy`] - The replacement policies and run statistics
//!
//! Simulators share no state: each call builds its own cache, so runs of
//! different policies can go on separate threads without coordination.
//!
//! # Quick Start
//! ```
//! use pagesim::{Policy, Trace};
//!
//! let trace = Trace::from(vec![1, 2, 3, 1, 4, 1]);
//!
//! assert_eq!(Policy::Fifo.hit_count(&trace, 3), 1);
//! assert_eq!(Policy::Lru.hit_count(&trace, 3), 2);
//! assert_eq!(Policy::Opt.hit_count(&trace, 3), 2);
//! ```

pub mod common;
pub mod policy;

// Re-export commonly used items at crate root for convenience
pub use common::{Capacity, Error, PageId, Result, Trace};

pub use policy::{
    Access, ClockReplacer, FifoReplacer, LruReplacer, OptReplacer, Policy, RandomReplacer,
    Replacer, SimStats,
};
