//! Validation and debugging utilities.
//!
//! Invariant checking walks the whole structure: per-node ordering and
//! occupancy, child partition bounds, parent back-references, arena
//! consistency, and a full in-order sweep cross-checked against the element
//! count. Nothing here is on any hot path; it exists for tests and for
//! diagnosing a tree that something external has trampled.

use crate::error::{MwayTreeError, TreeResult};
use crate::types::{MwayTreeSet, NodeId, NULL_NODE};
use std::fmt;
use std::fmt::Write as _;

// ============================================================================
// VALIDATION METHODS
// ============================================================================

impl<T: Ord> MwayTreeSet<T> {
    /// Check every structural invariant. Returns true when all hold.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> Result<(), String> {
        self.check_structure().map_err(|e| e.to_string())?;
        self.check_in_order_walk().map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Structural pass: node contents, linkage, and arena consistency.
    fn check_structure(&self) -> TreeResult<()> {
        if self.root == NULL_NODE {
            if self.len != 0 {
                return Err(MwayTreeError::corrupted_tree(
                    "tree",
                    "no root but len is nonzero",
                ));
            }
            if !self.nodes.is_empty() {
                return Err(MwayTreeError::corrupted_tree(
                    "arena",
                    "no root but nodes are allocated",
                ));
            }
            return Ok(());
        }

        let root = self
            .nodes
            .get(self.root)
            .ok_or_else(|| MwayTreeError::corrupted_tree("tree", "root id is unallocated"))?;
        if root.parent != NULL_NODE {
            return Err(MwayTreeError::corrupted_tree(
                "root",
                "parent link is not null",
            ));
        }

        let reachable = self.check_node(self.root, None, None)?;
        if reachable != self.nodes.len() {
            return Err(MwayTreeError::corrupted_tree(
                "arena",
                &format!(
                    "{} nodes reachable from the root vs {} allocated",
                    reachable,
                    self.nodes.len()
                ),
            ));
        }
        Ok(())
    }

    /// Verify one node and its subtree against the open interval
    /// `(lower, upper)`; returns how many nodes were visited.
    fn check_node(&self, id: NodeId, lower: Option<&T>, upper: Option<&T>) -> TreeResult<usize> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| MwayTreeError::corrupted_tree("node", "child link is unallocated"))?;

        if node.elements.is_empty() {
            return Err(MwayTreeError::corrupted_tree("node", "holds no elements"));
        }
        if node.len() > self.capacity {
            return Err(MwayTreeError::corrupted_tree(
                "node",
                &format!("holds {} elements, capacity is {}", node.len(), self.capacity),
            ));
        }
        if node.child_slots() != self.capacity + 1 {
            return Err(MwayTreeError::corrupted_tree(
                "node",
                "child table has the wrong width",
            ));
        }

        for pair in node.elements.windows(2) {
            if pair[0] >= pair[1] {
                return Err(MwayTreeError::corrupted_tree(
                    "node",
                    "elements out of order or duplicated",
                ));
            }
        }
        // Sorted already, so the boundary elements carry the whole interval
        // check.
        if let Some(lower) = lower {
            if node.first() <= lower {
                return Err(MwayTreeError::corrupted_tree(
                    "node",
                    "element at or below its subtree's lower bound",
                ));
            }
        }
        if let Some(upper) = upper {
            if node.last() >= upper {
                return Err(MwayTreeError::corrupted_tree(
                    "node",
                    "element at or above its subtree's upper bound",
                ));
            }
        }

        if !node.is_full() && node.children().next().is_some() {
            return Err(MwayTreeError::corrupted_tree(
                "node",
                "has children while it still has room",
            ));
        }

        let mut visited = 1;
        for slot in 0..node.child_slots() {
            if let Some(child) = node.child(slot) {
                let child_node = self.nodes.get(child).ok_or_else(|| {
                    MwayTreeError::corrupted_tree("node", "child link is unallocated")
                })?;
                if child_node.parent != id {
                    return Err(MwayTreeError::corrupted_tree(
                        "node",
                        "child's parent link names a different node",
                    ));
                }
                let lower = if slot == 0 {
                    lower
                } else {
                    Some(node.element(slot - 1))
                };
                let upper = if slot == node.len() {
                    upper
                } else {
                    Some(node.element(slot))
                };
                visited += self.check_node(child, lower, upper)?;
            }
        }
        Ok(visited)
    }

    /// Cursor pass: the in-order walk must be strictly increasing and agree
    /// with the maintained element count.
    fn check_in_order_walk(&self) -> TreeResult<()> {
        let mut count = 0usize;
        let mut previous: Option<&T> = None;
        let mut cursor = self.begin();
        while let Some(value) = cursor.value() {
            if let Some(previous) = previous {
                if previous >= value {
                    return Err(MwayTreeError::corrupted_tree(
                        "walk",
                        "in-order traversal is not strictly increasing",
                    ));
                }
            }
            previous = Some(value);
            count += 1;
            if count > self.len {
                return Err(MwayTreeError::corrupted_tree(
                    "walk",
                    "in-order traversal yields more elements than len",
                ));
            }
            cursor.move_next();
        }
        if count != self.len {
            return Err(MwayTreeError::corrupted_tree(
                "walk",
                &format!("len is {} but the walk found {}", self.len, count),
            ));
        }
        Ok(())
    }

    /// In-order snapshot of the elements; test helper.
    pub fn slice(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

// ============================================================================
// DEBUG INTROSPECTION
// ============================================================================

impl<T: fmt::Debug> MwayTreeSet<T> {
    /// Indented per-node dump of the structure, one node per line, children
    /// below their parent.
    pub fn structure_string(&self) -> String {
        let mut out = String::new();
        if self.root == NULL_NODE {
            out.push_str("(empty)");
            return out;
        }
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, level)) = stack.pop() {
            let node = &self.nodes[id];
            let _ = writeln!(out, "{}{:?}", "  ".repeat(level), node.elements);
            // Reversed push keeps the leftmost child on top of the stack.
            for slot in (0..node.child_slots()).rev() {
                if let Some(child) = node.child(slot) {
                    stack.push((child, level + 1));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> MwayTreeSet<i32> {
        let mut tree = MwayTreeSet::new(3).unwrap();
        for value in [6, 7, 8, 9, 1, 2, 3, 4] {
            tree.insert(value);
        }
        tree
    }

    #[test]
    fn a_freshly_built_tree_passes_all_checks() {
        assert!(MwayTreeSet::<i32>::new(3).unwrap().check_invariants());
        assert!(sample_tree().check_invariants());
        assert!(sample_tree().check_invariants_detailed().is_ok());
    }

    #[test]
    fn slice_is_the_sorted_view() {
        let tree = sample_tree();
        assert_eq!(tree.slice(), vec![&1, &2, &3, &4, &6, &7, &8, &9]);
    }

    #[test]
    fn a_tampered_len_is_reported() {
        let mut tree = sample_tree();
        tree.len += 1;
        let report = tree.check_invariants_detailed().unwrap_err();
        assert!(report.contains("len is 9"));
    }

    #[test]
    fn out_of_order_elements_are_reported() {
        let mut tree = sample_tree();
        let root = tree.root;
        tree.nodes[root].elements.swap(0, 2);
        let report = tree.check_invariants_detailed().unwrap_err();
        assert!(report.contains("out of order"));
    }

    #[test]
    fn a_broken_parent_link_is_reported() {
        let mut tree = sample_tree();
        let root = tree.root;
        let first_child = tree.nodes[root].children().next().unwrap();
        tree.nodes[first_child].parent = first_child;
        let report = tree.check_invariants_detailed().unwrap_err();
        assert!(report.contains("parent link"));
    }

    #[test]
    fn an_element_outside_its_partition_is_reported() {
        let mut tree = sample_tree();
        let root = tree.root;
        // Slot 0 must stay strictly below the root's first element (6).
        let first_child = tree.nodes[root].children().next().unwrap();
        tree.nodes[first_child].elements[2] = 7;
        let report = tree.check_invariants_detailed().unwrap_err();
        assert!(report.contains("upper bound"));
    }

    #[test]
    fn structure_string_shows_nesting() {
        let tree = sample_tree();
        let dump = tree.structure_string();
        assert!(dump.starts_with("[6, 7, 8]"));
        assert!(dump.contains("  [1, 2, 3]"));
        assert!(dump.contains("    [4]"));
        assert!(dump.contains("  [9]"));

        let empty = MwayTreeSet::<i32>::new(3).unwrap();
        assert_eq!(empty.structure_string(), "(empty)");
    }
}
