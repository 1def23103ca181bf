//! Heap nodes
//!
//! Every node is its own heap allocation, linked to its ring neighbours, parent
//! and one child through [`NonNull`] pointers. Rings stay genuinely cyclic while
//! ownership stays tree-shaped: the [`FibonacciHeap`](crate::FibonacciHeap) owns
//! every node reachable from its minimum and frees them when dropped.
//!
//! Moving a tree between heaps never touches the node memory, which is what lets
//! merge splice two root rings without visiting their members.

use std::ptr::NonNull;

use crate::traits::Key;

/// Link to a node owned by some heap
pub(crate) type NodePtr = NonNull<Node>;

/// A single tree/ring element
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: Key,
    /// Number of nodes in this node's child ring
    pub(crate) degree: usize,
    /// Cascading-cut bookkeeping. Nothing in this crate sets it; always false.
    pub(crate) mark: bool,
    pub(crate) parent: Option<NodePtr>,
    /// Any one member of the child ring
    pub(crate) child: Option<NodePtr>,
    pub(crate) left: NodePtr,
    pub(crate) right: NodePtr,
}

impl Node {
    /// Allocates a node holding `key` as a singleton ring
    ///
    /// The caller owns the allocation and must release it with [`Node::free`].
    pub(crate) fn alloc(key: Key) -> NodePtr {
        let node = NonNull::from(Box::leak(Box::new(Node {
            key,
            degree: 0,
            mark: false,
            parent: None,
            child: None,
            left: NonNull::dangling(), // Will be set immediately
            right: NonNull::dangling(),
        })));

        // SAFETY: freshly allocated above and not yet shared
        unsafe {
            (*node.as_ptr()).left = node;
            (*node.as_ptr()).right = node;
        }
        node
    }

    /// Frees a node, returning its key
    ///
    /// # Safety
    /// `node` must come from [`Node::alloc`], must not have been freed, and no
    /// ring may still link to it. Its children must already live elsewhere.
    pub(crate) unsafe fn free(node: NodePtr) -> Key {
        let node = Box::from_raw(node.as_ptr());
        debug_assert!(node.child.is_none(), "freeing a node that still owns children");
        node.key
    }
}
