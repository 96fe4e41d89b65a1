//! RAND replacement policy.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::common::PageId;
use crate::policy::{Access, Replacer, SimStats};

/// A cache that evicts a uniformly random resident page.
///
/// The random source is injected, so a run is fully determined by its
/// seed. Use [`RandomReplacer::from_entropy`] when reproducibility does
/// not matter.
pub struct RandomReplacer<R = ChaCha8Rng> {
    /// Resident pages in load order; a victim's slot is overwritten in place.
    resident: Vec<PageId>,

    capacity: usize,

    rng: R,
}

impl RandomReplacer<ChaCha8Rng> {
    /// Create a RAND cache whose victims are drawn from a generator
    /// seeded with `seed`.
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self::with_rng(capacity, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Create a RAND cache seeded from the operating system.
    pub fn from_entropy(capacity: usize) -> Self {
        Self::with_rng(capacity, ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomReplacer<R> {
    /// Create a RAND cache drawing victims from `rng`.
    pub fn with_rng(capacity: usize, rng: R) -> Self {
        Self {
            resident: Vec::with_capacity(capacity),
            capacity,
            rng,
        }
    }
}

impl<R: Rng> Replacer for RandomReplacer<R> {
    fn access(&mut self, page: PageId) -> Access {
        if self.resident.contains(&page) {
            return Access::Hit;
        }

        if self.resident.len() < self.capacity {
            self.resident.push(page);
            return Access::Miss { evicted: None };
        }

        // Full with zero slots: nothing to draw from.
        if self.resident.is_empty() {
            return Access::Miss { evicted: None };
        }

        let index = self.rng.gen_range(0..self.resident.len());
        let evicted = std::mem::replace(&mut self.resident[index], page);
        Access::Miss {
            evicted: Some(evicted),
        }
    }

    fn len(&self) -> usize {
        self.resident.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Hits produced by random replacement over `trace`, seeded with `seed`.
pub fn hit_count(trace: &[PageId], capacity: usize, seed: u64) -> usize {
    simulate(trace, capacity, seed).hits as usize
}

/// Statistics produced by random replacement over `trace`, seeded with `seed`.
pub fn simulate(trace: &[PageId], capacity: usize, seed: u64) -> SimStats {
    crate::policy::run(&mut RandomReplacer::new(capacity, seed), trace)
}
