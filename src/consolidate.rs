//! Degree consolidation of a child list
//!
//! Trees of equal degree are linked pairwise, the smaller item becoming the
//! root, exactly like the carry of a binary counter: linking two trees of
//! degree `d` yields one tree of degree `d + 1`, which may collide again.
//! Afterwards the list holds at most one tree per degree, so at most
//! O(log n) trees remain.

use crate::degree::DegreeIndex;
use crate::storage::{invariant, Forest, NodePtr, Parent};
use crate::traits::Sortable;

impl<T: Sortable> Forest<T> {
    /// Links two equal-degree children of `parent` into one tree
    ///
    /// The root holding the smaller item survives and gains the other as its
    /// last child. On ties `x` survives. Returns the surviving root.
    pub(crate) unsafe fn combine(
        &mut self,
        parent: Parent<T>,
        x: NodePtr<T>,
        y: NodePtr<T>,
    ) -> NodePtr<T> {
        debug_assert_eq!(self.degree(x), self.degree(y));
        let (winner, loser) = if self.item(y).less(self.item(x)) {
            (y, x)
        } else {
            (x, y)
        };
        invariant(self.try_remove_child(parent, loser));
        invariant(self.try_append_child(Parent::Node(winner), loser));
        winner
    }

    /// Leaves at most one child of each degree under `parent`
    ///
    /// Children are visited in list order. Surviving roots keep their list
    /// position; losers move under the winner.
    pub(crate) unsafe fn restructure_children(&mut self, parent: Parent<T>) {
        let before = self.list(parent).degree;
        let mut carries = 0usize;
        let mut index = DegreeIndex::new();

        let mut cursor = self.list(parent).first;
        while let Some(x) = cursor {
            // read before linking; x may move under a previous root
            cursor = self.next_sibling(x);

            let mut root = x;
            while let Some(other) = index.take(self.degree(root)) {
                root = self.combine(parent, root, other);
                carries += 1;
            }
            index.put(self.degree(root), root);
            debug_assert_eq!(index.get(self.degree(root)), Some(root));
        }

        log::trace!(
            "consolidated {} trees into {} ({} links, {} degree slots)",
            before,
            self.list(parent).degree,
            carries,
            index.slots()
        );
    }
}
