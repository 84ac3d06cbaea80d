//! Core types for the m-way search tree.
//!
//! Every node lives in a single arena and nodes are wired together with
//! `NodeId` indices instead of pointers. Parent links are plain ids as well,
//! so the structure has no ownership cycles: the arena owns every node, and
//! the tree owns the arena.

use crate::arena::Arena;

// ============================================================================
// TYPE ALIASES AND CONSTANTS
// ============================================================================

/// Index of a node in the tree's arena.
pub type NodeId = u32;

/// Sentinel meaning "no node": an absent child slot, the root's parent link,
/// or the node of the end cursor.
pub const NULL_NODE: NodeId = u32::MAX;

/// Smallest legal node capacity. A capacity of 1 degenerates into a plain
/// binary search tree and is still valid; only 0 is rejected.
pub const MIN_CAPACITY: usize = 1;

// ============================================================================
// NODE
// ============================================================================

/// A single node: up to `capacity` sorted unique elements plus
/// `capacity + 1` child slots.
///
/// Element `i` separates child slot `i` (strictly smaller values) from child
/// slot `i + 1` (strictly greater values). Children only ever hang off full
/// nodes: a node with room absorbs values instead of routing them, and
/// elements are never removed, so a node that has any child is full.
#[derive(Debug, Clone)]
pub struct Node<T> {
    /// Sorted, duplicate-free elements. Never empty once allocated.
    pub(crate) elements: Vec<T>,
    /// Fixed-width child table of `capacity + 1` slots; `NULL_NODE` marks an
    /// absent child.
    pub(crate) children: Vec<NodeId>,
    /// Back-reference to the parent node; `NULL_NODE` for the root.
    pub(crate) parent: NodeId,
}

// ============================================================================
// TREE
// ============================================================================

/// An ordered set backed by an m-way search tree.
///
/// Nodes absorb values while they have room and route overflow into child
/// subtrees. They are never split, merged, or rebalanced, and elements are
/// never deleted, so the shape of the tree follows insertion order while the
/// cursors always walk it in `Ord` order.
///
/// `Clone` performs a deep copy: the arena is duplicated wholesale, and
/// because links are arena indices the copied nodes keep correct parent and
/// child wiring. A [`Position`] taken from a tree designates the equal
/// element in its clone.
#[derive(Debug, Clone)]
pub struct MwayTreeSet<T> {
    /// Maximum elements per node, fixed at construction.
    pub(crate) capacity: usize,
    /// Root node id, or `NULL_NODE` while the tree is empty.
    pub(crate) root: NodeId,
    /// Element count, maintained on every successful insert.
    pub(crate) len: usize,
    /// Storage for every node of this tree.
    pub(crate) nodes: Arena<Node<T>>,
}

// ============================================================================
// POSITION
// ============================================================================

/// A copyable token naming one element slot in a tree, or the end sentinel.
///
/// Returned by [`MwayTreeSet::insert`] and [`MwayTreeSet::position_of`], and
/// resolved back into data with [`MwayTreeSet::get`] or turned into a cursor
/// with [`MwayTreeSet::cursor`]. A token carries no borrow, so it can be
/// stored while the tree keeps growing.
///
/// The token names a slot, not an element. A later insert that lands in the
/// same node at or before the slot shifts the occupants one place right,
/// and the token then resolves to the new occupant; re-resolve with
/// [`MwayTreeSet::position_of`] when the element itself matters. Slots of a
/// full node never shift again, since a full node stops absorbing elements.
/// A clone resolves any token exactly as its source does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) node: NodeId,
    pub(crate) index: usize,
}

impl Position {
    /// The one-past-the-largest sentinel position.
    pub const END: Position = Position {
        node: NULL_NODE,
        index: 0,
    };

    pub(crate) fn new(node: NodeId, index: usize) -> Self {
        Position { node, index }
    }

    /// True if this token is the end sentinel rather than an element slot.
    pub fn is_end(&self) -> bool {
        self.node == NULL_NODE
    }
}
