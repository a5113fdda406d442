//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and check the heap
//! against a brute-force model after every step.

use fiboheap::{FibonacciHeap, Heap};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    ExtractMin,
    FindMin,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (-100i32..100).prop_map(Op::Insert),
        2 => Just(Op::ExtractMin),
        1 => Just(Op::FindMin),
    ]
}

/// Removes and returns the smallest model item
fn model_pop(model: &mut Vec<i32>) -> Option<i32> {
    let (pos, _) = model.iter().enumerate().min_by_key(|(_, v)| **v)?;
    Some(model.swap_remove(pos))
}

/// Test that every operation agrees with a brute-force scan
fn test_against_model<H: Heap<i32>>(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    let mut model = Vec::new();

    for op in ops {
        let len_before = heap.len();
        match op {
            Op::Insert(value) => {
                heap.push(value);
                model.push(value);
                prop_assert_eq!(heap.len(), len_before + 1);
            }
            Op::ExtractMin => {
                let expected = model_pop(&mut model);
                prop_assert_eq!(heap.pop(), expected);
                prop_assert_eq!(heap.len(), len_before.saturating_sub(1));
            }
            Op::FindMin => {
                let _ = heap.peek();
                prop_assert_eq!(heap.len(), len_before);
            }
        }

        prop_assert_eq!(heap.peek().copied(), model.iter().min().copied());
        prop_assert_eq!(heap.len(), model.len());
        prop_assert_eq!(heap.is_empty(), model.is_empty());
    }

    Ok(())
}

/// Test that all popped items come out in non-decreasing order
fn test_pop_order_invariant<H: Heap<i32>>(
    values: Vec<i32>,
    ops: Vec<(bool, i32)>,
) -> Result<(), TestCaseError> {
    let mut heap = H::new();
    for val in &values {
        heap.push(*val);
    }

    // interleaved inserts may go below what was already popped, so only
    // the final drain is required to be sorted
    for (should_pop, value) in ops {
        if should_pop {
            heap.pop();
        } else {
            heap.push(value);
        }
    }

    let mut last = i32::MIN;
    while let Some(value) = heap.pop() {
        prop_assert!(value >= last, "popped {} after {}", value, last);
        last = value;
    }
    prop_assert!(heap.is_empty());

    Ok(())
}

/// Test merge keeps every item and empties the source
fn test_merge_invariant(
    left: Vec<i32>,
    right: Vec<i32>,
    pops_before: usize,
) -> Result<(), TestCaseError> {
    let mut dest: FibonacciHeap<i32> = left.iter().copied().collect();
    let mut source: FibonacciHeap<i32> = right.iter().copied().collect();

    // give both heaps real trees, not just lone roots
    let mut expected: Vec<i32> = left.iter().chain(right.iter()).copied().collect();
    expected.sort_unstable();
    let mut removed = Vec::new();
    for _ in 0..pops_before {
        removed.extend(dest.extract_min());
        removed.extend(source.extract_min());
    }
    for value in removed {
        let pos = expected.iter().position(|v| *v == value).unwrap();
        expected.remove(pos);
    }

    let total = dest.len() + source.len();
    dest.append(&mut source);

    prop_assert_eq!(dest.len(), total);
    prop_assert_eq!(source.len(), 0);
    prop_assert_eq!(source.find_min(), None);
    prop_assert!(dest.verify_internal_structure());
    prop_assert_eq!(dest.find_min().copied(), expected.first().copied());

    let mut drained = Vec::new();
    while let Some(value) = dest.extract_min() {
        drained.push(value);
    }
    prop_assert_eq!(drained, expected);

    Ok(())
}

/// Test the root count stays logarithmic after every extract_min
fn test_root_bound(values: Vec<i32>, pops: usize) -> Result<(), TestCaseError> {
    let mut heap: FibonacciHeap<i32> = values.into_iter().collect();
    for _ in 0..pops {
        if heap.extract_min().is_none() {
            break;
        }
        let n = heap.len() as f64;
        let bound = (n + 1.0).log2().ceil() as usize + 1;
        prop_assert!(
            heap.root_count() <= bound,
            "{} roots for {} items",
            heap.root_count(),
            heap.len()
        );
        prop_assert!(heap.verify_internal_structure());
    }

    Ok(())
}

proptest! {
    #[test]
    fn test_fibonacci_matches_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        test_against_model::<FibonacciHeap<i32>>(ops)?;
    }

    #[test]
    fn test_fibonacci_pop_order_invariant(
        values in prop::collection::vec(-100i32..100, 0..100),
        ops in prop::collection::vec((prop::bool::ANY, -100i32..100), 0..100)
    ) {
        test_pop_order_invariant::<FibonacciHeap<i32>>(values, ops)?;
    }

    #[test]
    fn test_fibonacci_merge_invariant(
        left in prop::collection::vec(-100i32..100, 0..60),
        right in prop::collection::vec(-100i32..100, 0..60),
        pops_before in 0usize..5
    ) {
        test_merge_invariant(left, right, pops_before)?;
    }

    #[test]
    fn test_fibonacci_root_bound(
        values in prop::collection::vec(any::<i32>(), 1..300),
        pops in 1usize..300
    ) {
        test_root_bound(values, pops)?;
    }
}
