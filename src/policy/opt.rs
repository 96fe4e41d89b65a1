//! OPT (Belady's optimal) replacement policy.
//!
//! OPT evicts the resident page whose next reference lies farthest in the
//! future. It needs the whole trace up front, so it is only usable
//! offline, where it gives the upper bound every other policy is measured
//! against.
//!
//! Next-use positions are precomputed in one backward pass over the
//! trace, so each eviction is a single scan over the resident set rather
//! than a forward scan of the remaining trace.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::common::config::NEVER;
use crate::common::PageId;
use crate::policy::{Access, Replacer, SimStats};

/// An OPT cache bound to the trace it will replay.
///
/// References must be fed in trace order: the replacer tracks its
/// position internally and looks up the next use of the page at that
/// position.
pub struct OptReplacer<'a> {
    trace: &'a [PageId],

    /// `next_use[i]` is the position of the next reference to `trace[i]`
    /// after `i`, or [`NEVER`].
    next_use: Vec<usize>,

    /// Position of the next reference to be replayed.
    position: usize,

    /// Resident page → position of its next reference.
    resident: HashMap<PageId, usize>,

    capacity: usize,
}

impl<'a> OptReplacer<'a> {
    /// Create an OPT cache with `capacity` slots for `trace`.
    pub fn new(trace: &'a [PageId], capacity: usize) -> Self {
        Self {
            trace,
            next_use: next_use_positions(trace),
            position: 0,
            resident: HashMap::with_capacity(capacity),
            capacity,
        }
    }

    /// Resident page referenced farthest in the future.
    ///
    /// Only pages that never recur can share a next-use position, so the
    /// lowest page id among them wins the tie and results stay
    /// reproducible regardless of hash order.
    fn victim(&self) -> Option<PageId> {
        self.resident
            .iter()
            .max_by_key(|&(&page, &next)| (next, Reverse(page)))
            .map(|(&page, _)| page)
    }
}

impl Replacer for OptReplacer<'_> {
    fn access(&mut self, page: PageId) -> Access {
        debug_assert_eq!(
            self.trace.get(self.position),
            Some(&page),
            "OPT must replay its own trace in order"
        );
        let next = self.next_use.get(self.position).copied().unwrap_or(NEVER);
        self.position += 1;

        if let Some(slot) = self.resident.get_mut(&page) {
            *slot = next;
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Miss { evicted: None };
        }

        let evicted = if self.resident.len() >= self.capacity {
            let victim = self.victim();
            if let Some(victim) = victim {
                self.resident.remove(&victim);
            }
            victim
        } else {
            None
        };

        self.resident.insert(page, next);
        Access::Miss { evicted }
    }

    fn len(&self) -> usize {
        self.resident.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// For each position, the position of the next reference to the same page.
fn next_use_positions(trace: &[PageId]) -> Vec<usize> {
    let mut next_use = vec![NEVER; trace.len()];
    let mut seen: HashMap<PageId, usize> = HashMap::new();

    for (i, page) in trace.iter().enumerate().rev() {
        if let Some(next) = seen.insert(*page, i) {
            next_use[i] = next;
        }
    }
    next_use
}

/// Hits produced by optimal replacement over `trace`.
pub fn hit_count(trace: &[PageId], capacity: usize) -> usize {
    simulate(trace, capacity).hits as usize
}

/// Statistics produced by optimal replacement over `trace`.
pub fn simulate(trace: &[PageId], capacity: usize) -> SimStats {
    crate::policy::run(&mut OptReplacer::new(trace, capacity), trace)
}
