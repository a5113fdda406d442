//! Node storage and sibling-list primitives
//!
//! Every node is its own heap allocation, owned by exactly one [`Forest`].
//! Links between nodes are raw [`NodePtr`]s:
//!
//! - `prev` / `next`: the node's place in exactly one sibling list
//! - `first` / `last`: the head and tail of the node's own child list
//!
//! Sibling lists are linear (terminated by `None` on both ends), not
//! circular. The root list is the child list of a virtual sentinel held by
//! the forest itself and addressed as [`Parent::Forest`].
//!
//! Because a splice only rewrites the two list ends it joins, handing the
//! whole root list of one forest to another ([`Forest::adopt`]) is O(1)
//! and never touches the nodes in between.
//!
//! # Safety
//!
//! Every `unsafe fn` here taking a [`NodePtr`] or a [`Parent::Node`]
//! requires that pointer to address a live node owned by `self`. Pointers
//! read from `self`'s own lists always satisfy this.
//!
//! All primitives are O(1) except [`Forest::find_min_child`], which scans
//! one child list.

use crate::traits::{LinkError, Sortable};
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

pub(crate) type NodePtr<T> = NonNull<Node<T>>;

/// Head, tail and length of a child list
pub(crate) struct ChildList<T> {
    pub(crate) first: Option<NodePtr<T>>,
    pub(crate) last: Option<NodePtr<T>>,
    /// Number of entries in the list; always equals the true count
    pub(crate) degree: usize,
}

impl<T> Clone for ChildList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ChildList<T> {}

impl<T> Default for ChildList<T> {
    fn default() -> Self {
        Self {
            first: None,
            last: None,
            degree: 0,
        }
    }
}

impl<T> PartialEq for ChildList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.last == other.last && self.degree == other.degree
    }
}

impl<T> fmt::Debug for ChildList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChildList")
            .field("first", &self.first)
            .field("last", &self.last)
            .field("degree", &self.degree)
            .finish()
    }
}

/// A tree node holding exactly one item
///
/// There is no parent link and no mark bit, so a node can never be cut
/// out of its tree. Nodes only move by whole-list splices and by
/// becoming the child of an equal-degree sibling.
pub(crate) struct Node<T> {
    pub(crate) item: T,
    prev: Option<NodePtr<T>>,
    next: Option<NodePtr<T>>,
    children: ChildList<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(item: T) -> Self {
        Node {
            item,
            prev: None,
            next: None,
            children: ChildList::default(),
        }
    }

    #[inline]
    fn has_siblings(&self) -> bool {
        self.prev.is_some() || self.next.is_some()
    }
}

/// Owner of a child list: either the forest sentinel or a real node
pub(crate) enum Parent<T> {
    Forest,
    Node(NodePtr<T>),
}

impl<T> Clone for Parent<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Parent<T> {}

/// Turns a primitive's corruption report into a panic
///
/// The heap never continues over broken links.
#[track_caller]
#[inline]
pub(crate) fn invariant<R>(result: Result<R, LinkError>) -> R {
    match result {
        Ok(value) => value,
        Err(err) => corrupted(err),
    }
}

#[cold]
#[track_caller]
fn corrupted(err: LinkError) -> ! {
    panic!("heap links corrupted: {err}")
}

/// Owner of a set of trees plus the root-list sentinel
pub(crate) struct Forest<T> {
    roots: ChildList<T>,
    nodes: usize,
    _owns: PhantomData<Box<Node<T>>>,
}

// SAFETY: a forest owns every node reachable from it, like a `Box` would;
// no node is shared with another forest.
unsafe impl<T: Send> Send for Forest<T> {}
unsafe impl<T: Sync> Sync for Forest<T> {}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self {
            roots: ChildList::default(),
            nodes: 0,
            _owns: PhantomData,
        }
    }
}

impl<T> Drop for Forest<T> {
    fn drop(&mut self) {
        // iterative, so tall trees and long lists cannot overflow the stack
        let mut pending = vec![self.roots.first];
        while let Some(mut cursor) = pending.pop() {
            while let Some(ptr) = cursor {
                let node = unsafe { Box::from_raw(ptr.as_ptr()) };
                cursor = node.next;
                pending.push(node.children.first);
            }
        }
    }
}

impl<T> Forest<T> {
    /// Number of live nodes, detached ones included
    #[inline]
    pub(crate) fn node_count(&self) -> usize {
        self.nodes
    }

    /// The root list
    #[inline]
    pub(crate) fn roots(&self) -> &ChildList<T> {
        &self.roots
    }

    /// Allocates a free, childless node
    ///
    /// The node is only freed by [`release`](Forest::release) or, once
    /// linked into this forest, when the forest drops.
    pub(crate) fn alloc(&mut self, item: T) -> NodePtr<T> {
        self.nodes += 1;
        NonNull::from(Box::leak(Box::new(Node::new(item))))
    }

    /// Frees a node and hands back its item
    ///
    /// The node must already be detached and childless.
    pub(crate) unsafe fn release(&mut self, ptr: NodePtr<T>) -> Result<T, LinkError> {
        let node = ptr.as_ref();
        if node.has_siblings() || node.children.first.is_some() {
            return Err(LinkError::AlreadyLinked);
        }
        self.nodes -= 1;
        Ok(Box::from_raw(ptr.as_ptr()).item)
    }

    #[inline]
    pub(crate) unsafe fn item(&self, ptr: NodePtr<T>) -> &T {
        &(*ptr.as_ptr()).item
    }

    #[inline]
    pub(crate) unsafe fn degree(&self, ptr: NodePtr<T>) -> usize {
        (*ptr.as_ptr()).children.degree
    }

    #[inline]
    pub(crate) unsafe fn next_sibling(&self, ptr: NodePtr<T>) -> Option<NodePtr<T>> {
        (*ptr.as_ptr()).next
    }

    #[inline]
    pub(crate) unsafe fn list(&self, parent: Parent<T>) -> &ChildList<T> {
        match parent {
            Parent::Forest => &self.roots,
            Parent::Node(ptr) => &(*ptr.as_ptr()).children,
        }
    }

    #[inline]
    unsafe fn list_mut(&mut self, parent: Parent<T>) -> &mut ChildList<T> {
        match parent {
            Parent::Forest => &mut self.roots,
            Parent::Node(ptr) => &mut (*ptr.as_ptr()).children,
        }
    }

    /// Takes over every tree of `other`, leaving it empty
    ///
    /// `other`'s roots are linked behind this forest's last root. Only the
    /// two list ends are rewritten.
    pub(crate) fn adopt(&mut self, other: &mut Forest<T>) {
        let chain = std::mem::take(&mut other.roots);
        self.nodes += std::mem::take(&mut other.nodes);
        // SAFETY: the chain's nodes now belong to `self`
        unsafe { self.splice_back(Parent::Forest, chain) }
    }

    /// Moves all children of `src` to the end of `dst`'s child list
    ///
    /// `src` is left without children. No items are compared.
    pub(crate) unsafe fn append_children(&mut self, dst: Parent<T>, src: Parent<T>) {
        let moved = std::mem::take(self.list_mut(src));
        self.splice_back(dst, moved);
    }

    /// Links a detached chain (`first..=last`, `degree` entries) behind
    /// `dst`'s last child
    unsafe fn splice_back(&mut self, dst: Parent<T>, chain: ChildList<T>) {
        let (Some(first), Some(last)) = (chain.first, chain.last) else {
            return;
        };
        let list = self.list_mut(dst);
        match list.last {
            None => list.first = Some(first),
            Some(tail) => {
                (*tail.as_ptr()).next = Some(first);
                (*first.as_ptr()).prev = Some(tail);
            }
        }
        list.last = Some(last);
        list.degree += chain.degree;
    }

    /// Detaches `child` from `parent`'s child list
    ///
    /// Nothing is modified when `child` turns out not to be linked under
    /// `parent`.
    pub(crate) unsafe fn try_remove_child(
        &mut self,
        parent: Parent<T>,
        child: NodePtr<T>,
    ) -> Result<(), LinkError> {
        let (prev, next) = {
            let node = child.as_ref();
            (node.prev, node.next)
        };
        let list = self.list_mut(parent);
        if (prev.is_none() && list.first != Some(child))
            || (next.is_none() && list.last != Some(child))
        {
            return Err(LinkError::NotAChild);
        }

        match prev {
            None => list.first = next,
            Some(p) => (*p.as_ptr()).next = next,
        }
        match next {
            None => list.last = prev,
            Some(n) => (*n.as_ptr()).prev = prev,
        }
        list.degree -= 1;

        let node = &mut *child.as_ptr();
        node.prev = None;
        node.next = None;
        Ok(())
    }

    /// Attaches a free node at the end of `parent`'s child list
    pub(crate) unsafe fn try_append_child(
        &mut self,
        parent: Parent<T>,
        child: NodePtr<T>,
    ) -> Result<(), LinkError> {
        check_free(child)?;
        let chain = ChildList {
            first: Some(child),
            last: Some(child),
            degree: 1,
        };
        self.splice_back(parent, chain);
        Ok(())
    }

    /// Attaches a free node at the front of `parent`'s child list
    pub(crate) unsafe fn try_insert_at_front(
        &mut self,
        parent: Parent<T>,
        child: NodePtr<T>,
    ) -> Result<(), LinkError> {
        check_free(child)?;
        let list = self.list_mut(parent);
        match list.first {
            None => list.last = Some(child),
            Some(head) => {
                (*child.as_ptr()).next = Some(head);
                (*head.as_ptr()).prev = Some(child);
            }
        }
        list.first = Some(child);
        list.degree += 1;
        Ok(())
    }

    /// Checks every link and degree reachable from the root list
    ///
    /// Returns the number of nodes reachable from the forest, or `None`
    /// when any list is inconsistent.
    pub(crate) fn reachable_nodes(&self) -> Option<usize> {
        let mut stack = vec![self.roots];
        let mut seen = 0usize;
        while let Some(list) = stack.pop() {
            let mut count = 0usize;
            let mut prev = None;
            let mut cursor = list.first;
            while let Some(ptr) = cursor {
                // SAFETY: reachable from the root list, hence owned and live
                let node = unsafe { ptr.as_ref() };
                if node.prev != prev {
                    return None;
                }
                count += 1;
                seen += 1;
                if seen > self.nodes {
                    // a cycle
                    return None;
                }
                stack.push(node.children);
                prev = Some(ptr);
                cursor = node.next;
            }
            if count != list.degree || list.last != prev {
                return None;
            }
        }
        Some(seen)
    }
}

unsafe fn check_free<T>(ptr: NodePtr<T>) -> Result<(), LinkError> {
    if ptr.as_ref().has_siblings() {
        Err(LinkError::AlreadyLinked)
    } else {
        Ok(())
    }
}

impl<T: Sortable> Forest<T> {
    /// Returns the child of `parent` holding the smallest item
    ///
    /// Ties keep the earliest child. O(degree).
    pub(crate) unsafe fn find_min_child(&self, parent: Parent<T>) -> Option<NodePtr<T>> {
        let mut min = self.list(parent).first?;
        let mut cursor = self.next_sibling(min);
        while let Some(ptr) = cursor {
            if self.item(ptr).less(self.item(min)) {
                min = ptr;
            }
            cursor = self.next_sibling(ptr);
        }
        Some(min)
    }

    /// True when no child anywhere orders before its parent
    ///
    /// Only call on a forest whose links passed
    /// [`reachable_nodes`](Forest::reachable_nodes).
    pub(crate) fn is_heap_ordered(&self) -> bool {
        let mut stack: Vec<NodePtr<T>> = Vec::new();
        let mut cursor = self.roots.first;
        // SAFETY: every pointer visited is reachable from the root list
        unsafe {
            while let Some(ptr) = cursor {
                stack.push(ptr);
                cursor = self.next_sibling(ptr);
            }
            while let Some(parent) = stack.pop() {
                let mut cursor = self.list(Parent::Node(parent)).first;
                while let Some(child) = cursor {
                    if self.item(child).less(self.item(parent)) {
                        return false;
                    }
                    stack.push(child);
                    cursor = self.next_sibling(child);
                }
            }
        }
        true
    }
}
