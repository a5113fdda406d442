//! Common traits for the heap
//!
//! - [`Sortable`]: the ordering capability stored items must provide
//! - [`Heap`]: the generic mergeable min-heap surface
//! - [`LinkError`]: internal link corruption reported by the list primitives

use std::fmt;

/// Ordering capability for items stored in a heap
///
/// `less` must be a strict weak ordering (irreflexive and transitive).
/// Nothing else is required: no equality, no hashing. A violating
/// implementation degrades the heap order of extracted items but never
/// corrupts the structure.
///
/// Every `Ord` type is `Sortable` already. Types without a total order
/// implement `less` directly:
///
/// ```rust
/// use fiboheap::{FibonacciHeap, Sortable};
///
/// struct Job {
///     deadline: f64,
/// }
///
/// impl Sortable for Job {
///     fn less(&self, other: &Self) -> bool {
///         self.deadline < other.deadline
///     }
/// }
///
/// let mut heap = FibonacciHeap::new();
/// heap.insert(Job { deadline: 2.5 });
/// heap.insert(Job { deadline: 0.5 });
/// assert_eq!(heap.find_min().map(|j| j.deadline), Some(0.5));
/// ```
pub trait Sortable {
    /// Returns true if `self` orders strictly before `other`
    fn less(&self, other: &Self) -> bool;
}

impl<T: Ord> Sortable for T {
    #[inline]
    fn less(&self, other: &Self) -> bool {
        self < other
    }
}

/// Corruption detected while relinking nodes
///
/// These never describe caller mistakes. Seeing one means the heap's own
/// bookkeeping is broken, so the heap turns them into panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// A node expected to be free still has sibling links
    AlreadyLinked,
    /// A node is not linked into the child list it was removed from
    NotAChild,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkError::AlreadyLinked => {
                write!(f, "node is already linked into a sibling list")
            }
            LinkError::NotAChild => {
                write!(f, "node is not a child of the given parent")
            }
        }
    }
}

impl std::error::Error for LinkError {}

/// Base trait for mergeable min-heaps
///
/// Unlike `BinaryHeap` this is a min-heap, and items only need
/// [`Sortable`], not `Ord`.
///
/// # Example
///
/// ```rust
/// use fiboheap::{FibonacciHeap, Heap};
///
/// fn drain<H: Heap<u32>>(mut heap: H) -> Vec<u32> {
///     let mut out = Vec::new();
///     while let Some(x) = heap.pop() {
///         out.push(x);
///     }
///     out
/// }
///
/// let mut heap = <FibonacciHeap<u32> as Heap<u32>>::new();
/// heap.push(3);
/// heap.push(1);
/// assert_eq!(drain(heap), vec![1, 3]);
/// ```
pub trait Heap<T: Sortable> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of items in the heap
    fn len(&self) -> usize;

    /// Inserts an item
    ///
    /// # Time Complexity
    /// O(1)
    fn push(&mut self, item: T);

    /// Returns the minimum item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum item
    ///
    /// # Time Complexity
    /// O(log n) amortized
    fn pop(&mut self) -> Option<T>;

    /// Merges another heap into this one, consuming the other heap
    fn merge(&mut self, other: Self);
}
