//! Storing a user-defined type that only knows how to compare itself
//!
//! ```bash
//! cargo run --example int_sortable
//! ```

use fiboheap::{FibonacciHeap, Sortable};

/// An integer wrapper with no `Ord`, only `Sortable`
#[derive(Debug, Clone, Copy)]
struct IntSortable(i64);

impl Sortable for IntSortable {
    fn less(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

fn main() {
    let mut heap = FibonacciHeap::new();
    for k in [2, 1, 5, 3] {
        heap.insert(IntSortable(k));
    }

    if let Some(min) = heap.find_min() {
        println!("minimum: {}", min.0);
    }

    let mut drained = Vec::with_capacity(heap.len());
    while let Some(IntSortable(k)) = heap.extract_min() {
        drained.push(k.to_string());
    }
    println!("{}", drained.join(" "));
}
