//! Standard library compatibility layer
//!
//! Implements [`Heap`] for `std::collections::BinaryHeap<Reverse<Key>>`, so the
//! standard binary heap can stand in wherever a [`Heap`] is expected: as the
//! reference in differential tests and as the baseline in benchmarks.
//!
//! # Differences from the Fibonacci heap
//!
//! - **Min-heap via `Reverse`**: `BinaryHeap` is a max-heap, so keys are wrapped
//!   in [`Reverse`] on the way in and unwrapped on the way out.
//! - **Merge cost**: `merge` is `BinaryHeap::append`, O(m log(n + m)) rather than
//!   a constant-time splice.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Reverse;
//! use std::collections::BinaryHeap;
//!
//! use fibonacci_ring_heap::Heap;
//!
//! let mut heap: BinaryHeap<Reverse<i64>> = Heap::new();
//! Heap::push(&mut heap, 5);
//! Heap::push(&mut heap, 3);
//! assert_eq!(Heap::peek(&heap), Some(&3)); // min first, unlike plain BinaryHeap
//! assert_eq!(Heap::pop(&mut heap), Some(3));
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::traits::{Heap, Key};

impl Heap for BinaryHeap<Reverse<Key>> {
    type Key = Key;

    fn new() -> Self {
        BinaryHeap::new()
    }

    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, key: Key) {
        BinaryHeap::push(self, Reverse(key))
    }

    fn peek(&self) -> Option<&Key> {
        BinaryHeap::peek(self).map(|Reverse(key)| key)
    }

    fn pop(&mut self) -> Option<Key> {
        BinaryHeap::pop(self).map(|Reverse(key)| key)
    }

    fn merge(&mut self, mut other: Self) {
        self.append(&mut other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type StdMinHeap = BinaryHeap<Reverse<Key>>;

    #[test]
    fn test_pops_smallest_first() {
        let mut heap = <StdMinHeap as Heap>::new();
        for k in [4, -2, 9, 0] {
            Heap::push(&mut heap, k);
        }

        assert_eq!(Heap::len(&heap), 4);
        assert_eq!(Heap::peek(&heap), Some(&-2));
        let drained: Vec<Key> = std::iter::from_fn(|| Heap::pop(&mut heap)).collect();
        assert_eq!(drained, vec![-2, 0, 4, 9]);
        assert!(Heap::is_empty(&heap));
    }

    #[test]
    fn test_merge_appends_other() {
        let mut heap: StdMinHeap = [5, 7].into_iter().map(Reverse).collect();
        let other: StdMinHeap = [1, 6].into_iter().map(Reverse).collect();

        Heap::merge(&mut heap, other);
        assert_eq!(Heap::len(&heap), 4);
        assert_eq!(Heap::peek(&heap), Some(&1));
    }
}
