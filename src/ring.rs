//! Circular doubly-linked rings of heap nodes
//!
//! Every node is a member of exactly one ring: the heap's root ring or the child
//! ring of its parent.
//!
//! In a circular ring:
//! - A single node points to itself (both `left` and `right`)
//! - There is no head or tail - any member can be the entry point
//! - Splicing two rings together is O(1)
//! - Iteration wraps around, so walks track their starting member
//!
//! The operations here are pure ring surgery. They never compare keys or touch
//! `degree`, `parent` or the heap's minimum.
//!
//! All of them take raw node links, so every pointer passed in must refer to a
//! live node whose ring neighbours are live as well.

use crate::node::NodePtr;

/// Splices two disjoint rings into one
///
/// ```text
/// Before:  ... <-> a_prev <-> a <-> ...      ... <-> b_prev <-> b <-> ...
/// After:   ... <-> a_prev <-> b <-> ... <-> b_prev <-> a <-> ...
/// ```
///
/// Either ring may be a singleton. Splicing two members of the same ring
/// splits it instead, so callers must only pass disjoint rings.
pub(crate) unsafe fn splice(a: NodePtr, b: NodePtr) {
    let a_prev = (*a.as_ptr()).left;
    let b_prev = (*b.as_ptr()).left;

    (*a_prev.as_ptr()).right = b;
    (*b.as_ptr()).left = a_prev;

    (*b_prev.as_ptr()).right = a;
    (*a.as_ptr()).left = b_prev;
}

/// Unlinks `node` from its ring by joining its neighbours
///
/// `node`'s own `left`/`right` are left stale; reset them with
/// [`make_singleton`] before reusing the node.
pub(crate) unsafe fn detach(node: NodePtr) {
    let left = (*node.as_ptr()).left;
    let right = (*node.as_ptr()).right;

    if left != node {
        (*left.as_ptr()).right = right;
        (*right.as_ptr()).left = left;
    }
}

/// Turns `node` into a ring of one
pub(crate) unsafe fn make_singleton(node: NodePtr) {
    (*node.as_ptr()).left = node;
    (*node.as_ptr()).right = node;
}

/// Walks the ring containing `start`, following `right` links
///
/// The walk ends when it returns to `start`. The ring must neither be mutated
/// nor freed while the iterator is alive; collect it first if the walk feeds a
/// mutation.
pub(crate) unsafe fn ring(start: NodePtr) -> RingIter {
    RingIter {
        start,
        next: Some(start),
    }
}

/// Iterator over the members of one ring, see [`ring`]
pub(crate) struct RingIter {
    start: NodePtr,
    next: Option<NodePtr>,
}

impl Iterator for RingIter {
    type Item = NodePtr;

    fn next(&mut self) -> Option<NodePtr> {
        let current = self.next?;
        // SAFETY: `ring` requires every member to stay live during the walk
        let right = unsafe { (*current.as_ptr()).right };
        self.next = (right != self.start).then_some(right);
        Some(current)
    }
}
