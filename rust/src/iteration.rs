//! Cursors and iterators.
//!
//! One core bidirectional cursor does all the walking. The forward and
//! reverse iterators are thin adapters over it, and the level-order iterator
//! feeds the `Display` form. Stepping uses child links and parent
//! back-references only; there is no recursion and no side stack, so a
//! cursor is nothing more than a node id and an element index.

use crate::types::{MwayTreeSet, NodeId, Position, NULL_NODE};
use std::collections::VecDeque;
use std::iter::FusedIterator;

// ============================================================================
// CURSOR
// ============================================================================

/// A bidirectional cursor over a tree.
///
/// Points at one element in `Ord` order, or at the end sentinel one step
/// past the largest element. [`move_next`](Cursor::move_next) and
/// [`move_prev`](Cursor::move_prev) walk the in-order sequence without
/// touching any element twice along the way.
///
/// Two cursors are equal when they come from the same tree and sit on the
/// same node and index; all end cursors of one tree are equal to each other.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    tree: &'a MwayTreeSet<T>,
    node: NodeId,
    index: usize,
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree)
            && self.node == other.node
            && self.index == other.index
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> Cursor<'a, T> {
    /// Element under the cursor; `None` at the end sentinel.
    pub fn value(&self) -> Option<&'a T> {
        let node = self.tree.nodes.get(self.node)?;
        node.elements.get(self.index)
    }

    /// True at the end sentinel.
    pub fn is_end(&self) -> bool {
        self.node == NULL_NODE
    }

    /// Tree-independent token for this cursor's position.
    pub fn position(&self) -> Position {
        Position::new(self.node, self.index)
    }
}

impl<'a, T: Ord> Cursor<'a, T> {
    /// Step to the in-order successor.
    ///
    /// Stepping off the largest element lands on the end sentinel. Returns
    /// whether the cursor moved; only the sentinel itself stays put.
    pub fn move_next(&mut self) -> bool {
        if self.node == NULL_NODE {
            return false;
        }
        match self.tree.successor(self.node, self.index) {
            Some((node, index)) => {
                self.node = node;
                self.index = index;
            }
            None => {
                self.node = NULL_NODE;
                self.index = 0;
            }
        }
        true
    }

    /// Step to the in-order predecessor.
    ///
    /// From the end sentinel this moves onto the largest element. At the
    /// smallest element there is nowhere left to go: the cursor stays where
    /// it is and `false` comes back.
    pub fn move_prev(&mut self) -> bool {
        if self.node == NULL_NODE {
            return match self.tree.last_position() {
                Some((node, index)) => {
                    self.node = node;
                    self.index = index;
                    true
                }
                // Empty tree: the sentinel is both begin and end.
                None => false,
            };
        }
        match self.tree.predecessor(self.node, self.index) {
            Some((node, index)) => {
                self.node = node;
                self.index = index;
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// TREE CURSOR AND ITERATOR METHODS
// ============================================================================

impl<T> MwayTreeSet<T> {
    /// Cursor at the smallest element; equals [`end`](MwayTreeSet::end) when
    /// the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        if self.root == NULL_NODE {
            return self.end();
        }
        Cursor {
            tree: self,
            node: self.leftmost_from(self.root),
            index: 0,
        }
    }

    /// The end sentinel cursor.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor {
            tree: self,
            node: NULL_NODE,
            index: 0,
        }
    }

    /// Cursor at a previously obtained position token.
    ///
    /// The token must come from this tree (or a clone of it); anything else
    /// resolves to a cursor whose `value` is `None` or to an unrelated
    /// element.
    pub fn cursor(&self, position: Position) -> Cursor<'_, T> {
        Cursor {
            tree: self,
            node: position.node,
            index: position.index,
        }
    }

    /// Iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.begin(),
            remaining: self.len,
        }
    }

    /// Iterator over the elements in descending order.
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter {
            cursor: self.end(),
            remaining: self.len,
        }
    }

    /// Breadth-first iterator: the root's elements first, then each deeper
    /// level left to right.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            tree: self,
            queue: VecDeque::new(),
            current: self.root,
            index: 0,
        }
    }

    /// Descend first-child links to the smallest node of `node`'s subtree.
    pub(crate) fn leftmost_from(&self, mut node: NodeId) -> NodeId {
        while let Some(child) = self.nodes[node].child(0) {
            node = child;
        }
        node
    }

    /// Descend last-slot links to the largest node of `node`'s subtree.
    ///
    /// Only the slot after the last element leads to bigger values; a node
    /// without that child already holds its subtree's maximum.
    pub(crate) fn rightmost_from(&self, mut node: NodeId) -> NodeId {
        loop {
            let n = &self.nodes[node];
            match n.child(n.len()) {
                Some(child) => node = child,
                None => return node,
            }
        }
    }

    /// Node and index of the largest element, unless the tree is empty.
    pub(crate) fn last_position(&self) -> Option<(NodeId, usize)> {
        if self.root == NULL_NODE {
            return None;
        }
        let node = self.rightmost_from(self.root);
        Some((node, self.nodes[node].len() - 1))
    }
}

impl<T: Ord> MwayTreeSet<T> {
    /// In-order successor of `(node, index)`; `None` past the largest
    /// element.
    pub(crate) fn successor(&self, node: NodeId, index: usize) -> Option<(NodeId, usize)> {
        let n = &self.nodes[node];

        // A subtree hangs between this element and the next one; its
        // minimum comes first.
        if let Some(child) = n.child(index + 1) {
            return Some((self.leftmost_from(child), 0));
        }
        if index + 1 < n.len() {
            return Some((node, index + 1));
        }

        // Done with this node: climb until an ancestor holds something
        // bigger than the element we are leaving.
        let left = n.element(index);
        let mut current = node;
        loop {
            let parent = self.nodes[current].parent;
            if parent == NULL_NODE {
                return None;
            }
            let ancestor = &self.nodes[parent];
            if let Some(index) = ancestor.elements.iter().position(|e| e > left) {
                return Some((parent, index));
            }
            current = parent;
        }
    }

    /// In-order predecessor of `(node, index)`; `None` below the smallest
    /// element.
    pub(crate) fn predecessor(&self, node: NodeId, index: usize) -> Option<(NodeId, usize)> {
        let n = &self.nodes[node];

        if let Some(child) = n.child(index) {
            let below = self.rightmost_from(child);
            return Some((below, self.nodes[below].len() - 1));
        }
        if index > 0 {
            return Some((node, index - 1));
        }

        let left = n.element(index);
        let mut current = node;
        loop {
            let parent = self.nodes[current].parent;
            if parent == NULL_NODE {
                return None;
            }
            let ancestor = &self.nodes[parent];
            if let Some(index) = ancestor.elements.iter().rposition(|e| e < left) {
                return Some((parent, index));
            }
            current = parent;
        }
    }
}

// ============================================================================
// ITERATOR ADAPTERS
// ============================================================================

/// Forward in-order iterator.
#[derive(Debug)]
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T: Ord> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.cursor.value()?;
        self.cursor.move_next();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Ord> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Ord> FusedIterator for Iter<'a, T> {}

/// Reverse in-order iterator: the direction-swapping adapter over the same
/// cursor, stepping with `move_prev` instead of `move_next`.
#[derive(Debug)]
pub struct RevIter<'a, T> {
    cursor: Cursor<'a, T>,
    remaining: usize,
}

impl<'a, T> Clone for RevIter<'a, T> {
    fn clone(&self) -> Self {
        RevIter {
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T: Ord> Iterator for RevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        // Starts on the end sentinel, so step first and yield after.
        if !self.cursor.move_prev() {
            return None;
        }
        self.remaining -= 1;
        self.cursor.value()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T: Ord> ExactSizeIterator for RevIter<'a, T> {}

impl<'a, T: Ord> FusedIterator for RevIter<'a, T> {}

impl<'a, T: Ord> IntoIterator for &'a MwayTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Breadth-first element iterator.
///
/// Emits a node's elements in slot order, then queues its children left to
/// right. The root's elements therefore come first, whatever their rank.
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    tree: &'a MwayTreeSet<T>,
    queue: VecDeque<NodeId>,
    current: NodeId,
    index: usize,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        while self.current != NULL_NODE {
            let node = &self.tree.nodes[self.current];
            if self.index < node.len() {
                let element = node.element(self.index);
                self.index += 1;
                return Some(element);
            }
            for child in node.children() {
                self.queue.push_back(child);
            }
            self.current = self.queue.pop_front().unwrap_or(NULL_NODE);
            self.index = 0;
        }
        None
    }
}

impl<'a, T> FusedIterator for LevelOrder<'a, T> {}
