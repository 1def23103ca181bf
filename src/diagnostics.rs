//! Read-only inspection of a [`FibonacciHeap`]
//!
//! - [`FibonacciHeap::print_heap`] renders the root ring and, recursively, every
//!   child ring as depth-indented text
//! - [`FibonacciHeap::verify`] walks the whole forest and reports the first
//!   broken structural invariant
//!
//! Both walk every ring from a starting member until they come back to it.

use std::fmt;

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::fibonacci::FibonacciHeap;
use crate::node::NodePtr;
use crate::ring::ring;
use crate::traits::Key;

/// A structural invariant that does not hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructureError {
    /// `left`/`right` links of a node are not mirrored by its neighbours
    #[error("ring links around node {key} are not symmetric")]
    BrokenRing { key: Key },
    /// A node was reached twice while walking the forest
    #[error("node {key} is reachable from more than one ring position")]
    NodeRevisited { key: Key },
    /// A node's parent link does not point at the node owning its ring
    #[error("node {key} has a wrong parent link")]
    ParentMismatch { key: Key },
    /// Recorded degree differs from the child ring length
    #[error("node {key} records degree {recorded} but has {actual} children")]
    DegreeMismatch {
        key: Key,
        recorded: usize,
        actual: usize,
    },
    /// A child holds a smaller key than its parent
    #[error("child {child} is smaller than its parent {parent}")]
    HeapOrder { parent: Key, child: Key },
    /// Some root is smaller than the recorded minimum
    #[error("root {root} is smaller than the minimum root {min}")]
    MinNotMinimal { min: Key, root: Key },
    /// A node carries the cascading-cut mark
    #[error("node {key} is marked")]
    MarkedNode { key: Key },
    /// Recorded length differs from the number of reachable nodes
    #[error("heap records {recorded} keys but {reachable} are reachable")]
    CountMismatch { recorded: usize, reachable: usize },
}

impl FibonacciHeap {
    /// Renders the heap as depth-indented text
    ///
    /// Each line is `<key> (<degree>)`, indented two spaces per tree level, with a
    /// node's children listed directly below it. The root ring is listed starting
    /// at the minimum. An empty heap renders as `Heap is empty.`.
    ///
    /// The layout is meant for inspection and may change.
    pub fn print_heap(&self) -> String {
        self.to_string()
    }

    /// Degrees of the roots, in root ring order starting at the minimum
    pub fn root_degrees(&self) -> Vec<usize> {
        match self.min {
            Some(min) => unsafe { ring(min).map(|root| (*root.as_ptr()).degree).collect() },
            None => Vec::new(),
        }
    }

    /// Checks every structural invariant of the heap
    ///
    /// Verified:
    /// - every ring is a symmetric circular list and no node is in two places
    /// - roots have no parent, every child points at the node owning its ring
    /// - `degree` equals the child ring length
    /// - no child is smaller than its parent, no root smaller than the minimum
    /// - no node is marked
    /// - `len()` equals the number of reachable nodes
    ///
    /// The walk follows links as they are, so it detects inconsistent links
    /// between live nodes but cannot recover from a link to freed memory.
    ///
    /// # Errors
    /// Returns the first violation found.
    pub fn verify(&self) -> Result<(), StructureError> {
        let mut visited = FxHashSet::default();
        let reachable = match self.min {
            Some(min) => {
                let min_key = unsafe { (*min.as_ptr()).key };
                verify_ring(min, None, &mut visited)?;
                for root in unsafe { ring(min) } {
                    let key = unsafe { (*root.as_ptr()).key };
                    if key < min_key {
                        return Err(StructureError::MinNotMinimal { min: min_key, root: key });
                    }
                }
                visited.len()
            }
            None => 0,
        };

        if reachable != self.len() {
            return Err(StructureError::CountMismatch {
                recorded: self.len(),
                reachable,
            });
        }

        Ok(())
    }
}

/// Verifies one ring and everything below it, returning the ring length
fn verify_ring(
    start: NodePtr,
    parent: Option<NodePtr>,
    visited: &mut FxHashSet<NodePtr>,
) -> Result<usize, StructureError> {
    let mut current = start;
    let mut members = 0;

    loop {
        let node = unsafe { &*current.as_ptr() };
        let key = node.key;

        if !visited.insert(current) {
            return Err(StructureError::NodeRevisited { key });
        }
        let (left_right, right_left) =
            unsafe { ((*node.left.as_ptr()).right, (*node.right.as_ptr()).left) };
        if left_right != current || right_left != current {
            return Err(StructureError::BrokenRing { key });
        }
        if node.parent != parent {
            return Err(StructureError::ParentMismatch { key });
        }
        if node.mark {
            return Err(StructureError::MarkedNode { key });
        }
        if let Some(p) = parent {
            let parent_key = unsafe { (*p.as_ptr()).key };
            if key < parent_key {
                return Err(StructureError::HeapOrder {
                    parent: parent_key,
                    child: key,
                });
            }
        }

        let children = match node.child {
            Some(child) => verify_ring(child, Some(current), visited)?,
            None => 0,
        };
        if children != node.degree {
            return Err(StructureError::DegreeMismatch {
                key,
                recorded: node.degree,
                actual: children,
            });
        }

        members += 1;
        current = node.right;
        if current == start {
            return Ok(members);
        }
    }
}

fn write_ring(f: &mut fmt::Formatter<'_>, start: NodePtr, depth: usize) -> fmt::Result {
    for node in unsafe { ring(start) } {
        let n = unsafe { &*node.as_ptr() };
        writeln!(f, "{:indent$}{} ({})", "", n.key, n.degree, indent = depth * 2)?;
        if let Some(child) = n.child {
            write_ring(f, child, depth + 1)?;
        }
    }
    Ok(())
}

impl fmt::Display for FibonacciHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min {
            Some(min) => write_ring(f, min, 0),
            None => writeln!(f, "Heap is empty."),
        }
    }
}
