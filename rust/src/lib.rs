//! An m-way search tree with a set-like API and bidirectional cursors.
//!
//! Each node stores up to `capacity` sorted unique elements and
//! `capacity + 1` child links. A node with room absorbs inserted values; a
//! full node routes them into child subtrees, growing a new child when the
//! routing slot is empty. Nodes are never split, merged, or rebalanced, and
//! elements are never deleted, so every operation is an iterative walk over
//! arena ids. A stored [`Position`] is a snapshot of a node and slot, not a
//! handle to one element: a later insert landing before it in the same node
//! shifts which element the slot holds.
//!
//! Ordering comes from `Ord`. Cursors and the forward/reverse iterators walk
//! the elements in that order; the `Display` form instead lists them level
//! by level, which exposes how insertion order shaped the tree.
//!
//! # Examples
//!
//! ```
//! use mwaytree::MwayTreeSet;
//!
//! let mut tree = MwayTreeSet::new(3).unwrap();
//! for value in [6, 7, 8, 9, 1] {
//!     tree.insert(value);
//! }
//! let (_, fresh) = tree.insert(7);
//! assert!(!fresh);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 6, 7, 8, 9]);
//! assert_eq!(tree.to_string(), "6 7 8 1 9");
//!
//! let mut cursor = tree.find(&8);
//! cursor.move_prev();
//! assert_eq!(cursor.value(), Some(&7));
//! ```

mod arena;
mod construction;
mod error;
mod insert_operations;
mod iteration;
mod node;
mod search_operations;
mod tree_structure;
mod types;
mod validation;

pub use construction::DEFAULT_CAPACITY;
pub use error::{InitResult, MwayTreeError, TreeResult};
pub use iteration::{Cursor, Iter, LevelOrder, RevIter};
pub use types::{MwayTreeSet, Position, MIN_CAPACITY};
