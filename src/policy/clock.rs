//! CLOCK (second chance) replacement policy.

use crate::common::PageId;
use crate::policy::{Access, Replacer, SimStats};

/// One clock slot: a resident page and its use bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockEntry {
    page: PageId,
    referenced: bool,
}

/// A CLOCK cache.
///
/// Resident pages sit in a circular buffer, each with a use bit that is
/// set on load and on every hit. On a miss with a full buffer the hand
/// sweeps forward, clearing set bits, and replaces the first page whose
/// bit is already clear. The hand persists across accesses.
///
/// # Termination
/// If every bit is set, one full revolution clears them all and the hand
/// arrives back at its starting slot, which is then the victim. A sweep
/// therefore inspects at most `capacity + 1` slots.
pub struct ClockReplacer {
    entries: Vec<ClockEntry>,

    /// Slot the next sweep starts from.
    hand: usize,

    capacity: usize,
}

impl ClockReplacer {
    /// Create a CLOCK cache with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            hand: 0,
            capacity,
        }
    }

    /// Advance the hand to the first slot with a clear use bit.
    ///
    /// Must only be called on a non-empty buffer.
    fn sweep(&mut self) -> usize {
        let len = self.entries.len();
        loop {
            let entry = &mut self.entries[self.hand];
            if !entry.referenced {
                return self.hand;
            }
            entry.referenced = false;
            self.hand = (self.hand + 1) % len;
        }
    }

    #[cfg(test)]
    fn use_bits(&self) -> Vec<bool> {
        self.entries.iter().map(|e| e.referenced).collect()
    }
}

impl Replacer for ClockReplacer {
    fn access(&mut self, page: PageId) -> Access {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.page == page) {
            entry.referenced = true;
            return Access::Hit;
        }

        if self.entries.len() < self.capacity {
            self.entries.push(ClockEntry {
                page,
                referenced: true,
            });
            return Access::Miss { evicted: None };
        }

        // Full with zero slots: there is nothing to sweep.
        if self.entries.is_empty() {
            return Access::Miss { evicted: None };
        }

        let victim = self.sweep();
        let evicted = std::mem::replace(
            &mut self.entries[victim],
            ClockEntry {
                page,
                referenced: true,
            },
        );
        self.hand = (victim + 1) % self.entries.len();

        Access::Miss {
            evicted: Some(evicted.page),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Hits produced by CLOCK replacement over `trace`.
pub fn hit_count(trace: &[PageId], capacity: usize) -> usize {
    simulate(trace, capacity).hits as usize
}

/// Statistics produced by CLOCK replacement over `trace`.
pub fn simulate(trace: &[PageId], capacity: usize) -> SimStats {
    crate::policy::run(&mut ClockReplacer::new(capacity), trace)
}
