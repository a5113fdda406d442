//! Fibonacci Heap implementation
//!
//! A lazy mergeable min-heap made of heap-ordered trees:
//! - O(1) insert, find_min and merge
//! - O(log n) amortized extract_min
//!
//! The roots form a linear doubly linked list whose first entry is always
//! the minimum. Insert and merge only splice into that list; all tree
//! linking is deferred to `extract_min`, which consolidates the roots so
//! that no two share a degree.
//!
//! Nodes carry no parent link and no mark bit, so there is no
//! `decrease_key` and no deletion of arbitrary items.
//!
//! # Example
//!
//! ```rust
//! use fiboheap::FibonacciHeap;
//!
//! let mut heap = FibonacciHeap::new();
//! for k in [2, 1, 5, 3] {
//!     heap.insert(k);
//! }
//! assert_eq!(heap.find_min(), Some(&1));
//!
//! let mut drained = Vec::new();
//! while let Some(k) = heap.extract_min() {
//!     drained.push(k);
//! }
//! assert_eq!(drained, vec![1, 2, 3, 5]);
//! ```

use crate::storage::{invariant, Forest, Parent};
use crate::traits::{Heap, Sortable};
use std::fmt;
use std::mem;

/// Fibonacci Heap
///
/// A default-constructed heap is ready to use.
///
/// Not synchronized: share it across threads only behind a lock.
/// [`append`](FibonacciHeap::append) needs exclusive access to both heaps.
pub struct FibonacciHeap<T> {
    forest: Forest<T>,
    len: usize,
}

impl<T> Default for FibonacciHeap<T> {
    fn default() -> Self {
        Self {
            forest: Forest::default(),
            len: 0,
        }
    }
}

impl<T> fmt::Debug for FibonacciHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len)
            .field("roots", &self.root_count())
            .finish()
    }
}

impl<T> FibonacciHeap<T> {
    /// Creates an empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the heap holds no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the minimum item without removing it
    ///
    /// # Time Complexity
    /// O(1)
    pub fn find_min(&self) -> Option<&T> {
        let min = self.forest.roots().first?;
        // SAFETY: the first root is a live node of this heap
        Some(unsafe { self.forest.item(min) })
    }

    /// Number of trees in the root list
    ///
    /// Right after [`extract_min`](FibonacciHeap::extract_min) this is at
    /// most one tree per degree, i.e. O(log n).
    pub fn root_count(&self) -> usize {
        self.forest.roots().degree
    }

    /// Drops every item, leaving the heap empty
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl<T: Sortable> FibonacciHeap<T> {
    /// Inserts an item
    ///
    /// The new node becomes a lone root: at the front of the root list if it
    /// is the new minimum, at the end otherwise.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn insert(&mut self, item: T) {
        let node = self.forest.alloc(item);
        // SAFETY: `node` was just allocated by this forest and the first
        // root is one of its live nodes
        unsafe {
            let becomes_min = match self.forest.roots().first {
                None => true,
                Some(min) => self.forest.item(node).less(self.forest.item(min)),
            };
            if becomes_min {
                invariant(self.forest.try_insert_at_front(Parent::Forest, node));
            } else {
                invariant(self.forest.try_append_child(Parent::Forest, node));
            }
        }
        self.len += 1;
    }

    /// Removes and returns the minimum item
    ///
    /// The children of the removed root are promoted to roots, the root
    /// list is consolidated to one tree per degree, and the smallest
    /// remaining root is moved to the front.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn extract_min(&mut self) -> Option<T> {
        let min = self.forest.roots().first?;

        // SAFETY: every pointer used is read from this forest's own lists
        let item = unsafe {
            invariant(self.forest.try_remove_child(Parent::Forest, min));
            self.forest.append_children(Parent::Forest, Parent::Node(min));
            self.forest.restructure_children(Parent::Forest);

            if let Some(new_min) = self.forest.find_min_child(Parent::Forest) {
                if self.forest.roots().first != Some(new_min) {
                    invariant(self.forest.try_remove_child(Parent::Forest, new_min));
                    invariant(self.forest.try_insert_at_front(Parent::Forest, new_min));
                }
            }
            invariant(self.forest.release(min))
        };

        self.len -= 1;
        Some(item)
    }

    /// Moves every item of `other` into `self`, leaving `other` empty
    ///
    /// `other`'s roots are spliced behind `self`'s roots without any
    /// consolidation; duplicate degrees are left for the next
    /// `extract_min`. `other` stays usable as a fresh empty heap.
    ///
    /// # Time Complexity
    /// O(1): only the ends of the two root lists are relinked, no node
    /// is moved or visited.
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }

        let dest_min = self.forest.roots().first;
        let source_min = other.forest.roots().first;
        self.forest.adopt(&mut other.forest);
        self.len += mem::take(&mut other.len);

        if let (Some(dest_min), Some(source_min)) = (dest_min, source_min) {
            // SAFETY: both minimums are roots of this forest after adopting
            unsafe {
                if self.forest.item(source_min).less(self.forest.item(dest_min)) {
                    invariant(self.forest.try_remove_child(Parent::Forest, source_min));
                    invariant(self.forest.try_insert_at_front(Parent::Forest, source_min));
                }
            }
        }
    }

    /// Checks links, degrees, heap order, the min-pointer and the count
    ///
    /// O(n); meant for tests and debugging.
    pub fn verify_internal_structure(&self) -> bool {
        if self.forest.node_count() != self.len || self.forest.reachable_nodes() != Some(self.len) {
            return false;
        }
        if !self.forest.is_heap_ordered() {
            return false;
        }
        // SAFETY: the links were just checked
        unsafe {
            match self.forest.find_min_child(Parent::Forest) {
                None => self.len == 0,
                Some(min) => self
                    .forest
                    .roots()
                    .first
                    .is_some_and(|first| !self.forest.item(min).less(self.forest.item(first))),
            }
        }
    }
}

impl<T: Sortable> Heap<T> for FibonacciHeap<T> {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn push(&mut self, item: T) {
        self.insert(item)
    }

    fn peek(&self) -> Option<&T> {
        self.find_min()
    }

    fn pop(&mut self) -> Option<T> {
        self.extract_min()
    }

    fn merge(&mut self, mut other: Self) {
        self.append(&mut other)
    }
}

impl<T: Sortable> Extend<T> for FibonacciHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Sortable> FromIterator<T> for FibonacciHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
