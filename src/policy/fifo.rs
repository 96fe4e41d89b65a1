//! FIFO (First-In-First-Out) replacement policy.

use crate::common::PageId;
use crate::policy::{Access, Replacer, SimStats};

/// A FIFO cache of fixed capacity.
///
/// Resident pages live in a fixed array of slots with a rotating write
/// cursor. A miss overwrites the slot under the cursor, which always
/// holds the oldest-loaded page once the cache is full. Hits never touch
/// the cursor, so re-referencing a page does not protect it.
pub struct FifoReplacer {
    /// Fixed pool of slots, `None` until first filled.
    slots: Vec<Option<PageId>>,

    /// Next slot to overwrite.
    cursor: usize,

    /// Number of filled slots.
    len: usize,
}

impl FifoReplacer {
    /// Create a FIFO cache with `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            cursor: 0,
            len: 0,
        }
    }

    fn contains(&self, page: PageId) -> bool {
        self.slots.iter().any(|slot| *slot == Some(page))
    }
}

impl Replacer for FifoReplacer {
    fn access(&mut self, page: PageId) -> Access {
        if self.contains(page) {
            return Access::Hit;
        }

        // Zero slots: nothing to write, and no modulo by zero below.
        if self.slots.is_empty() {
            return Access::Miss { evicted: None };
        }

        let evicted = self.slots[self.cursor].replace(page);
        if evicted.is_none() {
            self.len += 1;
        }
        self.cursor = (self.cursor + 1) % self.slots.len();

        Access::Miss { evicted }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }
}

/// Hits produced by FIFO replacement over `trace`.
pub fn hit_count(trace: &[PageId], capacity: usize) -> usize {
    simulate(trace, capacity).hits as usize
}

/// Statistics produced by FIFO replacement over `trace`.
pub fn simulate(trace: &[PageId], capacity: usize) -> SimStats {
    crate::policy::run(&mut FifoReplacer::new(capacity), trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(ids: &[i64]) -> Vec<PageId> {
        ids.iter().copied().map(PageId::new).collect()
    }

    #[test]
    fn test_fifo_basic() {
        let mut replacer = FifoReplacer::new(2);

        assert_eq!(replacer.access(PageId::new(1)), Access::Miss { evicted: None });
        assert_eq!(replacer.access(PageId::new(2)), Access::Miss { evicted: None });
        assert_eq!(replacer.access(PageId::new(1)), Access::Hit);
        assert_eq!(replacer.len(), 2);

        // Oldest load goes first.
        assert_eq!(
            replacer.access(PageId::new(3)),
            Access::Miss {
                evicted: Some(PageId::new(1))
            }
        );
        assert_eq!(
            replacer.access(PageId::new(4)),
            Access::Miss {
                evicted: Some(PageId::new(2))
            }
        );
    }

    #[test]
    fn test_fifo_reaccess_no_reorder() {
        let mut replacer = FifoReplacer::new(2);

        replacer.access(PageId::new(0));
        replacer.access(PageId::new(1));
        replacer.access(PageId::new(0)); // Hit - should NOT reorder

        // FIFO: page 0 was loaded first, so it is evicted first
        assert_eq!(replacer.access(PageId::new(2)).evicted(), Some(PageId::new(0)));
        assert_eq!(replacer.access(PageId::new(3)).evicted(), Some(PageId::new(1)));
    }

    #[test]
    fn test_fifo_no_repeats() {
        assert_eq!(hit_count(&pages(&[1, 2, 3, 4]), 2), 0);
    }

    #[test]
    fn test_fifo_alternating() {
        assert_eq!(hit_count(&pages(&[1, 2, 1, 2, 1, 2]), 2), 4);
    }

    #[test]
    fn test_fifo_zero_capacity() {
        let mut replacer = FifoReplacer::new(0);
        for id in [1, 1, 1] {
            assert_eq!(replacer.access(PageId::new(id)), Access::Miss { evicted: None });
        }
        assert!(replacer.is_empty());
        assert_eq!(replacer.capacity(), 0);
    }

    #[test]
    fn test_fifo_belady_anomaly() {
        // Classic trace where more frames produce fewer hits under FIFO.
        let trace = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
        assert_eq!(hit_count(&trace, 3), 3);
        assert_eq!(hit_count(&trace, 4), 2);
    }
}
