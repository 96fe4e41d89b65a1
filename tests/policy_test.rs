//! Policy Tests
//!
//! Hand-checked traces for every policy, including the textbook reference
//! strings and the capacity/trace edge cases.

use pagesim::policy::{clock, fifo, lru, opt, random};
use pagesim::{Access, FifoReplacer, LruReplacer, PageId, Policy, Replacer, Trace};

const SEED: u64 = 2024;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn pages(ids: &[i64]) -> Vec<PageId> {
    ids.iter().copied().map(PageId::new).collect()
}

// ============================================================================
// Edge cases shared by all policies
// ============================================================================

#[test]
fn test_empty_trace_all_policies() {
    init_logging();
    let trace = Trace::default();

    for policy in Policy::all(SEED) {
        for capacity in [0, 1, 4, 100] {
            let stats = policy.simulate(&trace, capacity);
            assert_eq!(stats.hits, 0, "{} capacity={}", policy, capacity);
            assert_eq!(stats.accesses, 0);
        }
    }
}

#[test]
fn test_zero_capacity_all_policies() {
    init_logging();
    let trace = Trace::from(vec![1, 1, 2, 2, 1, 1, 3]);

    for policy in Policy::all(SEED) {
        let stats = policy.simulate(&trace, 0);
        assert_eq!(stats.hits, 0, "{}", policy);
        assert_eq!(stats.misses, trace.len() as u64);
        assert_eq!(stats.evictions, 0);
    }
}

#[test]
fn test_single_slot_all_policies() {
    let trace = Trace::from(vec![1, 1, 2, 2, 2, 1]);

    // With one slot every policy has exactly one choice of victim.
    for policy in Policy::all(SEED) {
        assert_eq!(policy.hit_count(&trace, 1), 3, "{}", policy);
    }
}

#[test]
fn test_capacity_covers_all_pages() {
    let trace = Trace::from(vec![5, 3, 5, 9, 3, 3, 1, 9, 5]);
    assert_eq!(trace.distinct_pages(), 4);

    for policy in Policy::all(SEED) {
        for capacity in [4, 5, 64] {
            let stats = policy.simulate(&trace, capacity);
            assert_eq!(stats.hits as usize, trace.max_hits(), "{}", policy);
            assert_eq!(stats.evictions, 0);
        }
    }
}

#[test]
fn test_negative_capacity_rejected() {
    let trace = Trace::from(vec![1, 2, 1]);
    for policy in Policy::all(SEED) {
        assert!(policy.checked_hit_count(&trace, -4).is_err());
        assert_eq!(policy.checked_hit_count(&trace, 2), Ok(1));
    }
}

// ============================================================================
// FIFO
// ============================================================================

#[test]
fn test_fifo_no_repeats() {
    assert_eq!(fifo::hit_count(&pages(&[1, 2, 3, 4]), 2), 0);
}

#[test]
fn test_fifo_alternating_pair() {
    assert_eq!(fifo::hit_count(&pages(&[1, 2, 1, 2, 1, 2]), 2), 4);
}

// ============================================================================
// LRU vs FIFO
// ============================================================================

#[test]
fn test_lru_fifo_evict_different_victims() {
    let trace = pages(&[1, 2, 3, 1, 2, 4, 5, 1]);

    let mut fifo = FifoReplacer::new(3);
    let mut lru = LruReplacer::new(3);
    let fifo_victims: Vec<_> = trace.iter().filter_map(|&p| fifo.access(p).evicted()).collect();
    let lru_victims: Vec<_> = trace.iter().filter_map(|&p| lru.access(p).evicted()).collect();

    assert_eq!(fifo_victims, pages(&[1, 2, 3]));
    assert_eq!(lru_victims, pages(&[3, 1, 2]));
}

#[test]
fn test_lru_fifo_hit_counts_diverge() {
    // FIFO throws out page 1 despite the re-reference; LRU keeps it.
    let trace = pages(&[1, 2, 3, 1, 4, 1]);
    assert_eq!(fifo::hit_count(&trace, 3), 1);
    assert_eq!(lru::hit_count(&trace, 3), 2);
}

// ============================================================================
// Textbook reference string (Silberschatz), 3 frames
// ============================================================================

#[test]
fn test_textbook_reference_string() {
    init_logging();
    let trace = pages(&[7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]);

    // 15 / 9 / 12 page faults respectively.
    assert_eq!(fifo::hit_count(&trace, 3), 5);
    assert_eq!(opt::hit_count(&trace, 3), 11);
    assert_eq!(lru::hit_count(&trace, 3), 8);

    let clock_hits = clock::hit_count(&trace, 3);
    let rand_hits = random::hit_count(&trace, 3, SEED);
    assert!(clock_hits <= 11);
    assert!(rand_hits <= 11);
}

#[test]
fn test_policy_matches_free_functions() {
    let trace = pages(&[3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3, 2, 3, 8, 4]);

    for capacity in 0..6 {
        assert_eq!(Policy::Fifo.hit_count(&trace, capacity), fifo::hit_count(&trace, capacity));
        assert_eq!(Policy::Opt.hit_count(&trace, capacity), opt::hit_count(&trace, capacity));
        assert_eq!(
            Policy::Rand { seed: SEED }.hit_count(&trace, capacity),
            random::hit_count(&trace, capacity, SEED)
        );
        assert_eq!(Policy::Lru.hit_count(&trace, capacity), lru::hit_count(&trace, capacity));
        assert_eq!(Policy::Clock.hit_count(&trace, capacity), clock::hit_count(&trace, capacity));
    }
}

#[test]
fn test_resident_set_never_exceeds_capacity() {
    let trace = pages(&[1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]);
    let mut replacer = FifoReplacer::new(3);

    for &page in &trace {
        let access = replacer.access(page);
        assert!(replacer.len() <= 3);
        if replacer.len() < 3 {
            assert_eq!(access.evicted(), None);
        }
    }
    assert!(matches!(replacer.access(PageId::new(5)), Access::Hit));
}
