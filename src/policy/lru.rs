//! LRU (Least Recently Used) replacement policy.

use std::collections::HashMap;

use crate::common::PageId;
use crate::policy::{Access, Replacer, SimStats};

/// An LRU cache driven by a logical clock.
///
/// Every reference advances the clock by one tick and stamps the page
/// with it. The victim is the resident page with the oldest stamp.
/// Stamps are unique, so the choice is always deterministic.
pub struct LruReplacer {
    /// Resident page → tick of its last reference.
    last_access: HashMap<PageId, u64>,

    /// Ticks elapsed so far.
    now: u64,

    capacity: usize,
}

impl LruReplacer {
    /// Create an LRU cache with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            last_access: HashMap::with_capacity(capacity),
            now: 0,
            capacity,
        }
    }

    fn least_recent(&self) -> Option<PageId> {
        self.last_access
            .iter()
            .min_by_key(|&(_, &tick)| tick)
            .map(|(&page, _)| page)
    }
}

impl Replacer for LruReplacer {
    fn access(&mut self, page: PageId) -> Access {
        let tick = self.now;
        self.now += 1;

        if let Some(stamp) = self.last_access.get_mut(&page) {
            *stamp = tick;
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Miss { evicted: None };
        }

        let evicted = if self.last_access.len() >= self.capacity {
            let victim = self.least_recent();
            if let Some(victim) = victim {
                self.last_access.remove(&victim);
            }
            victim
        } else {
            None
        };

        self.last_access.insert(page, tick);
        Access::Miss { evicted }
    }

    fn len(&self) -> usize {
        self.last_access.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Hits produced by LRU replacement over `trace`.
pub fn hit_count(trace: &[PageId], capacity: usize) -> usize {
    simulate(trace, capacity).hits as usize
}

/// Statistics produced by LRU replacement over `trace`.
pub fn simulate(trace: &[PageId], capacity: usize) -> SimStats {
    crate::policy::run(&mut LruReplacer::new(capacity), trace)
}
