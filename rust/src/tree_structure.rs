//! Whole-tree queries and std trait wiring.
//!
//! Size and shape accessors, the level-order `Display` form, and the
//! conversions that make the tree behave like the rest of the collections
//! ecosystem.

use crate::types::{MwayTreeSet, NULL_NODE};
use std::fmt;

// ============================================================================
// SIZE AND SHAPE
// ============================================================================

impl<T> MwayTreeSet<T> {
    /// Number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum elements per node, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of allocated nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of levels, counting the root; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        if self.root == NULL_NODE {
            return 0;
        }
        let mut depth = 0;
        let mut level = vec![self.root];
        while !level.is_empty() {
            depth += 1;
            let mut next = Vec::new();
            for id in level {
                next.extend(self.nodes[id].children());
            }
            level = next;
        }
        depth
    }

    /// Remove every element, keeping the capacity.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NULL_NODE;
        self.len = 0;
    }

    /// Smallest element, unless the tree is empty.
    pub fn first(&self) -> Option<&T> {
        self.begin().value()
    }

    /// Largest element, unless the tree is empty.
    pub fn last(&self) -> Option<&T> {
        let (node, index) = self.last_position()?;
        Some(self.nodes[node].element(index))
    }
}

// ============================================================================
// STD TRAIT WIRING
// ============================================================================

/// Formats the elements level by level, space-separated: the root's elements
/// first, then each deeper level left to right. No trailing space or
/// newline; an empty tree prints nothing.
impl<T: fmt::Display> fmt::Display for MwayTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, element) in self.level_order().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", element)?;
        }
        Ok(())
    }
}

impl<T: Ord> FromIterator<T> for MwayTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = MwayTreeSet::with_default_capacity();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}
