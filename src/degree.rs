//! Degree index used while consolidating a child list
//!
//! Maps a degree to at most one tree root of that degree. A fresh index is
//! built for each consolidation pass and dropped afterwards.
//!
//! The index is a plain growable vector. Degrees of real nodes are bounded
//! by O(log n), so after the first growth to [`MIN_SLOTS`] it almost never
//! reallocates.

use crate::storage::NodePtr;

/// Smallest number of slots allocated once the index grows at all
///
/// A tuning choice: `2^32` items would be needed before a node reaches
/// degree 32.
pub(crate) const MIN_SLOTS: usize = 32;

pub(crate) struct DegreeIndex<T> {
    slots: Vec<Option<NodePtr<T>>>,
}

impl<T> Default for DegreeIndex<T> {
    fn default() -> Self {
        Self { slots: Vec::new() }
    }
}

impl<T> DegreeIndex<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the root recorded for `degree`, if any
    ///
    /// Degrees past the allocated range simply hold nothing.
    #[inline]
    pub(crate) fn get(&self, degree: usize) -> Option<NodePtr<T>> {
        self.slots.get(degree).copied().flatten()
    }

    /// Removes and returns the root recorded for `degree`
    #[inline]
    pub(crate) fn take(&mut self, degree: usize) -> Option<NodePtr<T>> {
        self.slots.get_mut(degree).and_then(Option::take)
    }

    /// Records `root` as the root of degree `degree`
    ///
    /// Grows to `max(degree + 1, MIN_SLOTS)` slots when needed, keeping
    /// existing entries and leaving new slots empty.
    pub(crate) fn put(&mut self, degree: usize, root: NodePtr<T>) {
        if degree >= self.slots.len() {
            let len = (degree + 1).max(MIN_SLOTS);
            self.slots.resize(len, None);
        }
        self.slots[degree] = Some(root);
    }

    /// Number of allocated slots
    #[inline]
    pub(crate) fn slots(&self) -> usize {
        self.slots.len()
    }
}
