//! Construction and initialization for the tree and its nodes.
//!
//! Capacity is the one tunable: it is validated once here and fixed for the
//! life of the tree. The tree starts with no root at all; the first insert
//! allocates it.

use crate::arena::Arena;
use crate::error::InitResult;
use crate::types::{MwayTreeSet, Node, NodeId, MIN_CAPACITY, NULL_NODE};

/// Node capacity used when the caller does not pick one.
pub const DEFAULT_CAPACITY: usize = 40;

impl<T> MwayTreeSet<T> {
    /// Create a tree whose nodes hold up to `capacity` elements.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of elements per node (minimum 1)
    ///
    /// # Returns
    ///
    /// Returns `Ok(MwayTreeSet)` if the capacity is usable,
    /// `Err(MwayTreeError)` otherwise. A zero capacity could never store
    /// anything, so it is rejected up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::MwayTreeSet;
    ///
    /// let tree = MwayTreeSet::<i32>::new(3).unwrap();
    /// assert!(tree.is_empty());
    /// assert!(MwayTreeSet::<i32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> InitResult<Self> {
        validation::validate_capacity(capacity)?;

        Ok(Self {
            capacity,
            root: NULL_NODE,
            len: 0,
            nodes: Arena::new(),
        })
    }

    /// Create a tree with [`DEFAULT_CAPACITY`] elements per node.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::{MwayTreeSet, DEFAULT_CAPACITY};
    ///
    /// let tree = MwayTreeSet::<i32>::with_default_capacity();
    /// assert_eq!(tree.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn with_default_capacity() -> Self {
        // DEFAULT_CAPACITY is a valid capacity, so no fallible path here.
        Self {
            capacity: DEFAULT_CAPACITY,
            root: NULL_NODE,
            len: 0,
            nodes: Arena::new(),
        }
    }
}

impl<T> Default for MwayTreeSet<T> {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl<T> Node<T> {
    /// Create a node holding exactly one element.
    ///
    /// Every node enters the tree this way: either as the root of an empty
    /// tree or as a fresh child hanging off a full node. The child table is
    /// born fully empty at its fixed width of `capacity + 1`.
    pub(crate) fn with_element(element: T, capacity: usize, parent: NodeId) -> Self {
        let mut elements = Vec::with_capacity(capacity);
        elements.push(element);

        Node {
            elements,
            children: vec![NULL_NODE; capacity + 1],
            parent,
        }
    }
}

/// Capacity validation shared by the constructors.
pub(crate) mod validation {
    use super::*;
    use crate::error::MwayTreeError;

    /// Reject a capacity no node could use.
    pub(crate) fn validate_capacity(capacity: usize) -> InitResult<()> {
        if capacity < MIN_CAPACITY {
            return Err(MwayTreeError::invalid_capacity(capacity, MIN_CAPACITY));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MwayTreeError;

    #[test]
    fn new_accepts_any_positive_capacity() {
        for capacity in [1, 2, 3, 40, 1000] {
            let tree = MwayTreeSet::<i32>::new(capacity).unwrap();
            assert_eq!(tree.capacity(), capacity);
            assert!(tree.is_empty());
            assert_eq!(tree.len(), 0);
        }
    }

    #[test]
    fn new_rejects_zero_capacity() {
        let err = MwayTreeSet::<i32>::new(0).unwrap_err();
        assert!(matches!(err, MwayTreeError::InvalidCapacity(_)));
        assert!(err.to_string().contains("Capacity 0"));
    }

    #[test]
    fn default_uses_default_capacity() {
        let tree: MwayTreeSet<i32> = MwayTreeSet::default();
        assert_eq!(tree.capacity(), DEFAULT_CAPACITY);
        assert_eq!(DEFAULT_CAPACITY, 40);
    }

    #[test]
    fn fresh_node_holds_one_element_and_empty_child_table() {
        let node = Node::with_element(7, 3, NULL_NODE);
        assert_eq!(node.elements, vec![7]);
        assert_eq!(node.children.len(), 4);
        assert!(node.children.iter().all(|&child| child == NULL_NODE));
        assert_eq!(node.parent, NULL_NODE);
    }

    #[test]
    fn fresh_tree_has_no_root_node() {
        let tree = MwayTreeSet::<i32>::new(3).unwrap();
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn validate_capacity_boundary() {
        assert!(validation::validate_capacity(0).is_err());
        assert!(validation::validate_capacity(1).is_ok());
    }
}
