//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized insert and merge
//! - O(log n) amortized extract_min
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list (the root ring) and every node's children form
//! a ring of their own. The heap maintains a pointer to the minimum root.
//!
//! All work is deferred to [`FibonacciHeap::extract_min`]: insert and merge only
//! splice rings, and extraction consolidates the root ring so that no two roots
//! share a degree.
//!
//! Every pointer reachable from `min` refers to a live node owned by this heap;
//! the `unsafe` blocks below rely on that and on nothing else.

use std::fmt;
use std::marker::PhantomData;
use std::mem;

use log::trace;

use crate::node::{Node, NodePtr};
use crate::ring::{detach, make_singleton, ring, splice};
use crate::traits::{Heap, HeapError, Key};

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use fibonacci_ring_heap::fibonacci::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// heap.insert(5);
/// heap.insert(1);
/// heap.insert(3);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.extract_min(), Ok(1));
/// assert_eq!(heap.len(), 2);
/// ```
pub struct FibonacciHeap {
    pub(crate) min: Option<NodePtr>,
    len: usize,
    // The heap owns its nodes for drop-check purposes
    _owns: PhantomData<Box<Node>>,
}

// SAFETY: nodes are reachable only through the heap that owns them, and keys are
// plain integers, so moving or sharing the heap moves or shares the whole forest.
unsafe impl Send for FibonacciHeap {}
unsafe impl Sync for FibonacciHeap {}

impl FibonacciHeap {
    /// Creates a new empty heap
    pub fn new() -> Self {
        Self {
            min: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    /// Returns the number of keys in the heap
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the minimum key without removing it
    pub fn peek(&self) -> Option<&Key> {
        self.min.map(|min| unsafe { &(*min.as_ptr()).key })
    }

    /// Inserts a key as a new single-node tree in the root ring
    ///
    /// # Time Complexity
    /// O(1)
    pub fn insert(&mut self, key: Key) {
        let node = Node::alloc(key);

        match self.min {
            None => self.min = Some(node),
            Some(min) => unsafe {
                splice(min, node);
                if key < (*min.as_ptr()).key {
                    self.min = Some(node);
                }
            },
        }

        self.len += 1;
    }

    /// Merges another heap into this one, consuming the other heap
    ///
    /// The two root rings are spliced together and the smaller minimum is kept;
    /// on equal minima this heap's minimum stays. No trees are restructured and
    /// no node is moved or visited.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn merge(&mut self, mut other: Self) {
        let Some(other_min) = other.min.take() else {
            return;
        };
        // `other` is left empty, so its drop frees nothing
        let other_len = mem::take(&mut other.len);

        trace!(
            "merging heap of {} keys into heap of {} keys",
            other_len,
            self.len
        );

        match self.min {
            None => self.min = Some(other_min),
            Some(min) => unsafe {
                splice(min, other_min);
                if (*other_min.as_ptr()).key < (*min.as_ptr()).key {
                    self.min = Some(other_min);
                }
            },
        }

        self.len += other_len;
    }

    /// Removes and returns the minimum key
    ///
    /// The children of the minimum are promoted to the root ring before the
    /// minimum is freed, then the root ring is consolidated.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap holds no keys. The heap is
    /// left untouched in that case.
    ///
    /// # Time Complexity
    /// O(log n) amortized
    pub fn extract_min(&mut self) -> Result<Key, HeapError> {
        let old = self.min.ok_or(HeapError::EmptyHeap)?;

        unsafe {
            // Promote children; snapshot first since each splice rewires the child ring
            if let Some(first_child) = (*old.as_ptr()).child.take() {
                let children: Vec<NodePtr> = ring(first_child).collect();
                for child in children {
                    detach(child);
                    make_singleton(child);
                    splice(old, child);
                    (*child.as_ptr()).parent = None;
                }
                (*old.as_ptr()).degree = 0;
            }

            let survivor = (*old.as_ptr()).right;
            detach(old);
            self.len -= 1;

            if survivor == old {
                self.min = None;
            } else {
                self.min = Some(survivor);
                self.consolidate();
            }

            Ok(Node::free(old))
        }
    }

    /// Links trees of equal degree until every root has a distinct degree
    ///
    /// Recomputes the minimum from the surviving roots.
    fn consolidate(&mut self) {
        let Some(start) = self.min else {
            return;
        };

        let mut degree_table: Vec<Option<NodePtr>> = vec![None; degree_table_len(self.len)];

        // Collect all roots; linking rewires the root ring under an in-place walk
        let roots: Vec<NodePtr> = unsafe { ring(start) }.collect();
        let root_count = roots.len();

        for root in roots {
            let mut x = root;
            let mut d = unsafe { (*x.as_ptr()).degree };

            while let Some(mut y) = degree_table.get_mut(d).and_then(Option::take) {
                unsafe {
                    // x keeps the smaller key; on a tie the current root stays on top
                    if (*x.as_ptr()).key > (*y.as_ptr()).key {
                        mem::swap(&mut x, &mut y);
                    }
                    link(y, x);
                }
                d += 1;
            }

            if d >= degree_table.len() {
                degree_table.resize(d + 1, None);
            }
            degree_table[d] = Some(x);
        }

        // Rebuild root ring and find new min
        self.min = None;
        let mut rebuilt = 0;
        for root in degree_table.into_iter().flatten() {
            rebuilt += 1;
            unsafe {
                make_singleton(root);
                match self.min {
                    None => self.min = Some(root),
                    Some(min) => {
                        splice(min, root);
                        if (*root.as_ptr()).key < (*min.as_ptr()).key {
                            self.min = Some(root);
                        }
                    }
                }
            }
        }

        trace!("consolidated {} roots into {}", root_count, rebuilt);
    }

    /// Removes every key, returning them in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<Key> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Ok(key) = self.extract_min() {
            sorted.push(key);
        }
        sorted
    }
}

/// Makes `child` a direct child of `parent`
unsafe fn link(child: NodePtr, parent: NodePtr) {
    detach(child);
    make_singleton(child);

    match (*parent.as_ptr()).child {
        Some(first) => splice(first, child),
        None => (*parent.as_ptr()).child = Some(child),
    }

    (*child.as_ptr()).parent = Some(parent);
    (*child.as_ptr()).mark = false;
    (*parent.as_ptr()).degree += 1;
}

/// Copies the ring containing `start`, and every ring below it, into fresh nodes
///
/// Returns the copy of `start`; ring order is preserved.
unsafe fn copy_ring(start: NodePtr, parent: Option<NodePtr>) -> NodePtr {
    let first = copy_node(start, parent);
    for node in ring(start).skip(1) {
        splice(first, copy_node(node, parent));
    }
    first
}

unsafe fn copy_node(node: NodePtr, parent: Option<NodePtr>) -> NodePtr {
    let src = &*node.as_ptr();
    let copy = Node::alloc(src.key);
    (*copy.as_ptr()).degree = src.degree;
    (*copy.as_ptr()).mark = src.mark;
    (*copy.as_ptr()).parent = parent;
    if let Some(child) = src.child {
        (*copy.as_ptr()).child = Some(copy_ring(child, Some(copy)));
    }
    copy
}

/// Number of degree slots needed to consolidate a heap of `len` nodes
///
/// Without cuts every tree of degree `d` holds at least `2^d` nodes, so degrees
/// stay within `0..=floor(log2(len))`.
fn degree_table_len(len: usize) -> usize {
    len.max(1).ilog2() as usize + 1
}

impl Drop for FibonacciHeap {
    fn drop(&mut self) {
        let Some(min) = self.min.take() else {
            return;
        };

        // Free ring by ring; children are taken off each node before it goes
        let mut pending = vec![min];
        while let Some(start) = pending.pop() {
            let members: Vec<NodePtr> = unsafe { ring(start) }.collect();
            for node in members {
                unsafe {
                    if let Some(child) = (*node.as_ptr()).child.take() {
                        pending.push(child);
                    }
                    Node::free(node);
                }
            }
        }
    }
}

impl Clone for FibonacciHeap {
    /// Deep copy with the same tree shapes and ring order
    fn clone(&self) -> Self {
        Self {
            min: self.min.map(|min| unsafe { copy_ring(min, None) }),
            len: self.len,
            _owns: PhantomData,
        }
    }
}

impl Default for FibonacciHeap {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FibonacciHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FibonacciHeap")
            .field("len", &self.len)
            .field("min", &self.peek())
            .finish()
    }
}

impl Heap for FibonacciHeap {
    type Key = Key;

    fn new() -> Self {
        FibonacciHeap::new()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn push(&mut self, key: Key) {
        self.insert(key)
    }

    fn peek(&self) -> Option<&Key> {
        self.peek()
    }

    fn pop(&mut self) -> Option<Key> {
        self.extract_min().ok()
    }

    fn merge(&mut self, other: Self) {
        FibonacciHeap::merge(self, other)
    }
}

impl Extend<Key> for FibonacciHeap {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for FibonacciHeap {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut heap = FibonacciHeap::new();
        heap.extend(iter);
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(ptr: NodePtr) -> &'static Node {
        unsafe { &*ptr.as_ptr() }
    }

    #[test]
    fn test_basic_operations() {
        let mut heap = FibonacciHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert(5);
        heap.insert(3);
        heap.insert(7);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&3));

        assert_eq!(heap.extract_min(), Ok(3));
        assert_eq!(heap.peek(), Some(&5));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_extract_from_empty() {
        let mut heap = FibonacciHeap::new();
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert(1);
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn test_merge() {
        let mut heap1 = FibonacciHeap::new();
        heap1.insert(5);
        heap1.insert(10);

        let mut heap2 = FibonacciHeap::new();
        heap2.insert(3);
        heap2.insert(7);

        heap1.merge(heap2);
        assert_eq!(heap1.peek(), Some(&3));
        assert_eq!(heap1.len(), 4);
        assert_eq!(heap1.into_sorted_vec(), vec![3, 5, 7, 10]);
    }

    #[test]
    fn test_merge_into_empty_adopts_other() {
        let mut heap = FibonacciHeap::new();
        let other: FibonacciHeap = [4, 2, 9].into_iter().collect();
        let other_min = other.min;

        heap.merge(other);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&2));
        assert_eq!(heap.min, other_min);
    }

    #[test]
    fn test_merge_empty_other_is_noop() {
        let mut heap: FibonacciHeap = [4, 2].into_iter().collect();
        heap.merge(FibonacciHeap::new());
        assert_eq!(heap.len(), 2);
        assert_eq!(heap.peek(), Some(&2));
    }

    #[test]
    fn test_merge_tie_keeps_receiver_min() {
        let mut heap: FibonacciHeap = [1, 8].into_iter().collect();
        let receiver_min = heap.min;
        let other: FibonacciHeap = (1..=20).collect();
        let donor_min = other.min;

        heap.merge(other);
        assert_eq!(heap.len(), 22);
        assert_eq!(heap.min, receiver_min);
        assert_ne!(heap.min, donor_min);
    }

    #[test]
    fn test_merge_splices_without_moving_nodes() {
        let mut heap: FibonacciHeap = (100..110).collect();
        let other: FibonacciHeap = (0..1000).rev().collect();
        let other_min = other.min;
        let other_key_addr = other.peek().map(|k| k as *const Key);

        heap.merge(other);

        // The donor's minimum is the very same node, not a copy
        assert_eq!(heap.min, other_min);
        assert_eq!(heap.peek().map(|k| k as *const Key), other_key_addr);
        // Both root rings were joined as-is: 10 + 1000 singleton roots
        assert_eq!(heap.root_degrees().len(), 1010);
        assert_eq!(heap.verify(), Ok(()));
    }

    #[test]
    fn test_link_sets_structure() {
        let heap: FibonacciHeap = [1, 2].into_iter().collect();
        let parent = heap.min.expect("non-empty");
        let child = node(parent).right;

        unsafe { link(child, parent) };

        assert_eq!(node(parent).degree, 1);
        assert_eq!(node(parent).child, Some(child));
        assert_eq!(node(child).parent, Some(parent));
        assert!(!node(child).mark);
        assert_eq!(node(parent).right, parent);
        assert_eq!(node(child).right, child);
    }

    #[test]
    fn test_consolidate_distinct_root_degrees() {
        let mut heap: FibonacciHeap = (0..9).rev().collect();
        assert_eq!(heap.extract_min(), Ok(0));

        // 8 nodes left: a single binomial tree of degree 3
        let min = heap.min.expect("non-empty");
        assert_eq!(unsafe { ring(min) }.count(), 1);
        assert_eq!(node(min).degree, 3);
        assert_eq!(heap.peek(), Some(&1));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut heap: FibonacciHeap = (0..20).collect();
        heap.extract_min().expect("heap is non-empty");
        let copy = heap.clone();

        assert_eq!(copy.print_heap(), heap.print_heap());
        assert_eq!(copy.verify(), Ok(()));
        assert_ne!(copy.min, heap.min);

        heap.insert(-1);
        assert_eq!(copy.peek(), Some(&1));
        assert_eq!(copy.into_sorted_vec(), (1..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_degree_table_len() {
        assert_eq!(degree_table_len(0), 1);
        assert_eq!(degree_table_len(1), 1);
        assert_eq!(degree_table_len(2), 2);
        assert_eq!(degree_table_len(3), 2);
        assert_eq!(degree_table_len(4), 3);
        assert_eq!(degree_table_len(1024), 11);
    }

    #[test]
    fn test_duplicate_keys() {
        let mut heap: FibonacciHeap = [2, 2, 1, 1, 2].into_iter().collect();
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.into_sorted_vec(), vec![2, 2, 2]);
    }
}
