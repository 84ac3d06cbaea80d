//! Node-level operations.
//!
//! Everything a node can decide on its own lives here: scanning its sorted
//! elements for a value's slot, absorbing a value while it still has room,
//! and reading its child table. Anything that crosses node boundaries
//! (descent, stepping, child creation) belongs to the tree.

use crate::types::{Node, NodeId, NULL_NODE};
use std::cmp::Ordering;

impl<T> Node<T> {
    /// Number of elements currently stored.
    pub(crate) fn len(&self) -> usize {
        self.elements.len()
    }

    /// True once the node holds as many elements as its child table allows.
    ///
    /// The capacity is not stored per node; the fixed-width child table
    /// (`capacity + 1` slots) encodes it.
    pub(crate) fn is_full(&self) -> bool {
        self.elements.len() + 1 == self.children.len()
    }

    /// Element at `index`. Out-of-range indices are internal misuse and
    /// panic.
    pub(crate) fn element(&self, index: usize) -> &T {
        &self.elements[index]
    }

    /// Smallest element. Nodes are never empty once allocated.
    pub(crate) fn first(&self) -> &T {
        &self.elements[0]
    }

    /// Largest element.
    pub(crate) fn last(&self) -> &T {
        &self.elements[self.elements.len() - 1]
    }

    /// Child id at `slot`, if one is attached.
    pub(crate) fn child(&self, slot: usize) -> Option<NodeId> {
        match self.children[slot] {
            NULL_NODE => None,
            id => Some(id),
        }
    }

    /// Attach a child at an empty `slot`.
    pub(crate) fn set_child(&mut self, slot: usize, id: NodeId) {
        debug_assert_eq!(self.children[slot], NULL_NODE, "child slot already occupied");
        self.children[slot] = id;
    }

    /// Present children in slot order.
    pub(crate) fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().copied().filter(|&id| id != NULL_NODE)
    }

    /// Width of the child table (always `capacity + 1`).
    pub(crate) fn child_slots(&self) -> usize {
        self.children.len()
    }
}

impl<T: Ord> Node<T> {
    /// Find `value`'s slot by scanning the sorted elements left to right.
    ///
    /// `Ok(i)` means element `i` equals `value`; the index is exact wherever
    /// the match sits, first slot or last. `Err(i)` means `value` belongs at
    /// index `i`, which doubles as the child slot it routes to when this
    /// node is full. A value greater than every element yields
    /// `Err(self.len())`, the last child slot.
    pub(crate) fn locate(&self, value: &T) -> Result<usize, usize> {
        for (index, element) in self.elements.iter().enumerate() {
            match value.cmp(element) {
                Ordering::Less => return Err(index),
                Ordering::Equal => return Ok(index),
                Ordering::Greater => {}
            }
        }
        Err(self.elements.len())
    }

    /// Insert into this node, which must have room.
    ///
    /// Returns the element's index and whether anything was inserted; a
    /// duplicate reports its existing index and leaves the node untouched.
    pub(crate) fn insert_local(&mut self, value: T) -> (usize, bool) {
        debug_assert!(!self.is_full(), "insert_local on a full node");

        match self.locate(&value) {
            Ok(index) => (index, false),
            Err(index) => {
                self.elements.insert(index, value);
                (index, true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_with(elements: &[i32], capacity: usize) -> Node<i32> {
        let mut iter = elements.iter().copied();
        let mut node = Node::with_element(iter.next().unwrap(), capacity, NULL_NODE);
        for element in iter {
            node.insert_local(element);
        }
        node
    }

    #[test]
    fn locate_reports_the_exact_match_index_in_every_slot() {
        // A full node must still report a match at index 1 or 2, not 0.
        let node = node_with(&[10, 20, 30], 3);
        assert!(node.is_full());
        assert_eq!(node.locate(&10), Ok(0));
        assert_eq!(node.locate(&20), Ok(1));
        assert_eq!(node.locate(&30), Ok(2));
    }

    #[test]
    fn locate_returns_the_insertion_slot_on_a_miss() {
        let node = node_with(&[10, 20, 30], 4);
        assert_eq!(node.locate(&5), Err(0));
        assert_eq!(node.locate(&15), Err(1));
        assert_eq!(node.locate(&25), Err(2));
        assert_eq!(node.locate(&35), Err(3));
    }

    #[test]
    fn locate_past_every_element_names_the_last_slot() {
        let node = node_with(&[1, 2], 3);
        assert_eq!(node.locate(&99), Err(2));
    }

    #[test]
    fn insert_local_keeps_elements_sorted() {
        let mut node = Node::with_element(20, 4, NULL_NODE);
        assert_eq!(node.insert_local(40), (1, true));
        assert_eq!(node.insert_local(10), (0, true));
        assert_eq!(node.insert_local(30), (2, true));
        assert_eq!(node.elements, vec![10, 20, 30, 40]);
        assert_eq!(node.first(), &10);
        assert_eq!(node.last(), &40);
        assert!(node.is_full());
    }

    #[test]
    fn insert_local_ignores_duplicates() {
        let mut node = node_with(&[10, 20], 3);
        assert_eq!(node.insert_local(20), (1, false));
        assert_eq!(node.insert_local(10), (0, false));
        assert_eq!(node.elements, vec![10, 20]);
    }

    #[test]
    fn fullness_tracks_the_child_table_width() {
        let mut node = Node::with_element(1, 2, NULL_NODE);
        assert!(!node.is_full());
        node.insert_local(2);
        assert!(node.is_full());
        assert_eq!(node.child_slots(), 3);
    }

    #[test]
    fn child_slots_distinguish_absent_from_attached() {
        let mut node = node_with(&[10, 20], 2);
        assert_eq!(node.child(0), None);
        node.set_child(1, 7);
        assert_eq!(node.child(1), Some(7));
        assert_eq!(node.children().collect::<Vec<_>>(), vec![7]);
    }
}
