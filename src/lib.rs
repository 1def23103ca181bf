//! Fibonacci Heap over integer keys
//!
//! This crate provides a mergeable min-priority queue implemented as a Fibonacci
//! heap: a forest of heap-ordered trees whose roots, and every node's children,
//! are linked into circular doubly-linked rings.
//!
//! # Features
//!
//! - **Fibonacci Heap**: O(1) amortized insert and merge; O(log n) amortized extract-min
//! - **Pointer-linked nodes**: merging splices two root rings in place, without
//!   visiting or moving any node
//! - **Diagnostics**: an indented text dump of the forest and a structural verifier
//! - **Standard library compatibility**: `BinaryHeap<Reverse<i64>>` implements the
//!   same [`Heap`] trait
//!
//! # Example
//!
//! ```rust
//! use fibonacci_ring_heap::fibonacci::FibonacciHeap;
//! use fibonacci_ring_heap::HeapError;
//!
//! let mut heap = FibonacciHeap::new();
//! heap.insert(5);
//! heap.insert(3);
//!
//! let mut other = FibonacciHeap::new();
//! other.insert(1);
//! heap.merge(other);
//!
//! assert_eq!(heap.extract_min(), Ok(1));
//! assert_eq!(heap.extract_min(), Ok(3));
//! assert_eq!(heap.extract_min(), Ok(5));
//! assert_eq!(heap.extract_min(), Err(HeapError::EmptyHeap));
//! ```

pub mod diagnostics;
pub mod fibonacci;
mod node;
mod ring;
pub mod stdlib_compat;
pub mod traits;

// Re-export the main types for convenience
pub use diagnostics::StructureError;
pub use fibonacci::FibonacciHeap;
pub use traits::{Heap, HeapError, Key};
