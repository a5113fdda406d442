//! Stress tests that push the heap through large operation counts
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use fiboheap::FibonacciHeap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Checks that `heap` drains in non-decreasing order, returning the count
fn drain_sorted(heap: &mut FibonacciHeap<u32>) -> usize {
    let mut count = 0;
    let mut last = None;
    while let Some(value) = heap.extract_min() {
        if let Some(prev) = last {
            assert!(value >= prev, "extracted {value} after {prev}");
        }
        last = Some(value);
        count += 1;
    }
    count
}

#[test]
fn test_seeded_batches() {
    const BATCH1: usize = 1000;
    const EXTRACT: usize = 523;
    const BATCH2: usize = 1234;

    let mut rng = StdRng::seed_from_u64(13);
    let mut heap = FibonacciHeap::new();

    for _ in 0..BATCH1 {
        heap.insert(rng.random_range(0..10_000u32));
    }
    assert_eq!(heap.len(), BATCH1);

    let mut last = heap.extract_min().unwrap();
    for _ in 1..EXTRACT {
        let value = heap.extract_min().unwrap();
        assert!(value >= last, "extracted {value} < {last}");
        last = value;
    }
    assert_eq!(heap.len(), BATCH1 - EXTRACT);
    assert!(heap.verify_internal_structure());

    for _ in 0..BATCH2 {
        heap.insert(rng.random_range(0..10_000u32));
    }
    assert_eq!(heap.len(), BATCH1 - EXTRACT + BATCH2);

    assert_eq!(drain_sorted(&mut heap), BATCH1 - EXTRACT + BATCH2);
    assert!(heap.is_empty());
}

#[test]
fn test_massive_operations() {
    let mut heap = FibonacciHeap::new();
    for i in (0..10_000u32).rev() {
        heap.insert(i);
    }
    assert_eq!(heap.len(), 10_000);

    for i in 0..10_000u32 {
        assert_eq!(heap.extract_min(), Some(i));
    }
    assert!(heap.is_empty());
    assert_eq!(heap.extract_min(), None);
}

#[test]
fn test_alternating_ops() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut heap = FibonacciHeap::new();
    let mut model: Vec<u32> = Vec::new();

    for _ in 0..2_000 {
        let a = rng.random_range(0..1_000u32);
        let b = rng.random_range(0..1_000u32);
        heap.insert(a);
        heap.insert(b);
        model.push(a);
        model.push(b);

        model.sort_unstable_by(|x, y| y.cmp(x));
        assert_eq!(heap.extract_min(), model.pop());
        assert_eq!(heap.find_min(), model.last());
    }
    assert_eq!(heap.len(), model.len());
    assert!(heap.verify_internal_structure());
}

#[test]
fn test_repeated_merges() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut total = FibonacciHeap::new();
    let mut expected = 0;

    for round in 0..50 {
        let mut part = FibonacciHeap::new();
        for _ in 0..(round * 7 % 40) {
            part.insert(rng.random_range(0..100_000u32));
        }
        if round % 3 == 0 {
            part.extract_min();
        }
        expected += part.len();

        total.append(&mut part);
        assert!(part.is_empty());
        assert_eq!(total.len(), expected);

        if round % 5 == 0 && total.extract_min().is_some() {
            expected -= 1;
        }
    }

    assert!(total.verify_internal_structure());
    assert_eq!(drain_sorted(&mut total), expected);
}

#[test]
fn test_many_duplicates() {
    let mut heap = FibonacciHeap::new();
    for i in 0..3_000u32 {
        heap.insert(i % 3);
    }
    let mut counts = [0usize; 3];
    while let Some(value) = heap.extract_min() {
        counts[value as usize] += 1;
    }
    assert_eq!(counts, [1_000, 1_000, 1_000]);
}
