//! Common traits for heap data structures
//!
//! This module provides the [`Heap`] trait shared by the Fibonacci heap and the
//! standard library's binary heap, together with the crate's domain error type.
//!
//! The trait mirrors the method names of `std::collections::BinaryHeap`
//! (`push`, `peek`, `pop`) but describes a **min**-heap over plain keys.

use thiserror::Error;

/// Key type stored by the heaps in this crate
pub type Key = i64;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// An element was requested from a heap that holds none
    #[error("heap is empty")]
    EmptyHeap,
}

/// Base trait for mergeable min-heaps
///
/// # Example
///
/// ```rust
/// use fibonacci_ring_heap::{FibonacciHeap, Heap};
///
/// let mut heap = <FibonacciHeap as Heap>::new();
/// heap.push(3);
/// heap.push(1);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// ```
pub trait Heap: Sized {
    /// Ordered key type held by the heap
    type Key: Ord;

    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a key
    ///
    /// # Time Complexity
    /// O(1) for the Fibonacci heap, O(log n) for the binary heap.
    fn push(&mut self, key: Self::Key);

    /// Returns the minimum key without removing it
    fn peek(&self) -> Option<&Self::Key>;

    /// Removes and returns the minimum key, or `None` when empty
    fn pop(&mut self) -> Option<Self::Key>;

    /// Merges another heap into this one, consuming the other heap
    ///
    /// # Time Complexity
    /// Varies by implementation: O(1) ring splice for the Fibonacci heap,
    /// O(m log(n + m)) for the binary heap.
    fn merge(&mut self, other: Self);
}
