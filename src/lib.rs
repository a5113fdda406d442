//! Mergeable Fibonacci-style priority queue
//!
//! [`FibonacciHeap`] is a min-heap built from a forest of heap-ordered
//! trees:
//!
//! | Operation     | Complexity         |
//! |---------------|--------------------|
//! | `insert`      | O(1)               |
//! | `find_min`    | O(1)               |
//! | `append`      | O(1)               |
//! | `extract_min` | O(log n) amortized |
//!
//! Items only need the [`Sortable`] ordering capability, which every `Ord`
//! type already has. There is deliberately no `decrease_key` and no
//! deletion of arbitrary items.
//!
//! Each node is a separate heap allocation and the sibling and child lists
//! link nodes by pointer, so merging two heaps only relinks the ends of
//! their root lists.
//!
//! # Example
//!
//! ```rust
//! use fiboheap::FibonacciHeap;
//!
//! let mut a = FibonacciHeap::new();
//! a.insert(5);
//! a.insert(9);
//!
//! let mut b = FibonacciHeap::new();
//! b.insert(2);
//! b.insert(7);
//!
//! a.append(&mut b);
//! assert_eq!(a.len(), 4);
//! assert!(b.is_empty());
//! assert_eq!(a.find_min(), Some(&2));
//! assert_eq!(a.extract_min(), Some(2));
//! assert_eq!(a.extract_min(), Some(5));
//! ```

mod consolidate;
mod degree;
pub mod fibonacci;
mod storage;
pub mod traits;

pub use fibonacci::FibonacciHeap;
pub use traits::{Heap, LinkError, Sortable};
