//! Insert operations: the iterative descent from the root.
//!
//! A node with room absorbs the value. A full node either already holds it,
//! routes it into the child at the insertion slot, or grows a new child
//! there. Nothing is ever split or rebalanced, so an insert touches the
//! descent path and at most one new node.

use crate::types::{MwayTreeSet, Node, Position, NULL_NODE};

impl<T: Ord> MwayTreeSet<T> {
    /// Insert `value`, keeping elements unique.
    ///
    /// Returns the element's [`Position`] and `true` if it was added, or the
    /// position of the equal element already present and `false`. Inserting
    /// a duplicate is not an error and never mutates the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::MwayTreeSet;
    ///
    /// let mut tree = MwayTreeSet::new(3).unwrap();
    /// let (position, inserted) = tree.insert(7);
    /// assert!(inserted);
    /// assert_eq!(tree.get(position), Some(&7));
    ///
    /// let (same, inserted) = tree.insert(7);
    /// assert!(!inserted);
    /// assert_eq!(same, position);
    /// ```
    pub fn insert(&mut self, value: T) -> (Position, bool) {
        if self.root == NULL_NODE {
            let root = self
                .nodes
                .allocate(Node::with_element(value, self.capacity, NULL_NODE));
            self.root = root;
            self.len = 1;
            return (Position::new(root, 0), true);
        }

        let mut current = self.root;
        loop {
            if !self.nodes[current].is_full() {
                // A node with room never has children, so the value lands
                // here whether or not it is new.
                let (index, inserted) = self.nodes[current].insert_local(value);
                if inserted {
                    self.len += 1;
                }
                return (Position::new(current, index), inserted);
            }

            match self.nodes[current].locate(&value) {
                Ok(index) => return (Position::new(current, index), false),
                Err(slot) => match self.nodes[current].child(slot) {
                    Some(child) => current = child,
                    None => {
                        let child = self
                            .nodes
                            .allocate(Node::with_element(value, self.capacity, current));
                        self.nodes[current].set_child(slot, child);
                        self.len += 1;
                        return (Position::new(child, 0), true);
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_insert_creates_the_root() {
        let mut tree = MwayTreeSet::new(3).unwrap();
        let (position, inserted) = tree.insert(5);
        assert!(inserted);
        assert_eq!(tree.get(position), Some(&5));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn a_node_with_room_absorbs_values() {
        let mut tree = MwayTreeSet::new(3).unwrap();
        for value in [6, 7, 8] {
            assert!(tree.insert(value).1);
        }
        // Three values fit in one capacity-3 node.
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn a_full_node_routes_overflow_into_new_children() {
        let mut tree = MwayTreeSet::new(1).unwrap();
        tree.insert(2);
        tree.insert(1);
        tree.insert(3);
        assert_eq!(tree.node_count(), 3);
        assert_eq!(tree.len(), 3);
        assert!(tree.check_invariants());
    }

    #[test]
    fn overflow_reuses_an_existing_child_before_growing_one() {
        let mut tree = MwayTreeSet::new(3).unwrap();
        for value in [6, 7, 8, 1, 2, 3] {
            tree.insert(value);
        }
        // 1, 2 and 3 all route through the root's first slot into one child.
        assert_eq!(tree.node_count(), 2);
        assert!(tree.check_invariants());
    }

    #[test]
    fn duplicate_in_a_full_node_reports_its_real_position() {
        let mut tree = MwayTreeSet::new(3).unwrap();
        tree.insert(10);
        tree.insert(20);
        tree.insert(30);

        // Matches deep in a full node must name that element, not slot 0.
        let (position, inserted) = tree.insert(30);
        assert!(!inserted);
        assert_eq!(tree.get(position), Some(&30));

        let (position, inserted) = tree.insert(20);
        assert!(!inserted);
        assert_eq!(tree.get(position), Some(&20));

        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn duplicates_report_false_without_mutating() {
        let mut tree = MwayTreeSet::new(40).unwrap();
        let flags: Vec<bool> = [1, 2, 2, 3].into_iter().map(|v| tree.insert(v).1).collect();
        assert_eq!(flags, vec![true, true, false, true]);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn duplicate_positions_name_the_current_slot() {
        let mut tree = MwayTreeSet::new(2).unwrap();
        let (first, _) = tree.insert(9);
        assert_eq!(tree.get(first), Some(&9));

        // 4 lands in slot 0 of the same node and shifts 9 one slot right,
        // so the old token now resolves to 4.
        tree.insert(4);
        assert_eq!(tree.get(first), Some(&4));

        let (again, inserted) = tree.insert(9);
        assert!(!inserted);
        assert_ne!(again, first);
        assert_eq!(tree.get(again), Some(&9));
    }

    #[test]
    fn deep_descent_keeps_parents_linked() {
        // Capacity 1 with ascending input builds a rightward chain.
        let mut tree = MwayTreeSet::new(1).unwrap();
        for value in 0..10 {
            tree.insert(value);
        }
        assert_eq!(tree.len(), 10);
        assert_eq!(tree.node_count(), 10);
        assert_eq!(tree.depth(), 10);
        assert!(tree.check_invariants());
    }
}
