//! Lookup operations: the non-mutating descent.
//!
//! `find`, `contains` and `position_of` all ride the same walk insert
//! uses: a full node either matches or routes, and the descent falls out at
//! the first node with room or at an empty child slot.

use crate::error::{MwayTreeError, TreeResult};
use crate::iteration::Cursor;
use crate::types::{MwayTreeSet, Position, NULL_NODE};

impl<T: Ord> MwayTreeSet<T> {
    /// Look up `value` and return a cursor at it, or the end cursor when it
    /// is absent. Never mutates.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::MwayTreeSet;
    ///
    /// let mut tree = MwayTreeSet::with_default_capacity();
    /// tree.insert(5);
    ///
    /// assert_eq!(tree.find(&5).value(), Some(&5));
    /// assert!(tree.find(&6).is_end());
    /// assert_eq!(tree.find(&6), tree.end());
    /// ```
    pub fn find(&self, value: &T) -> Cursor<'_, T> {
        match self.position_lookup(value) {
            Some(position) => self.cursor(position),
            None => self.end(),
        }
    }

    /// True if `value` is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::MwayTreeSet;
    ///
    /// let mut tree = MwayTreeSet::new(3).unwrap();
    /// tree.insert(2);
    /// assert!(tree.contains(&2));
    /// assert!(!tree.contains(&4));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        self.position_lookup(value).is_some()
    }

    /// Like [`find`](MwayTreeSet::find), but reports absence as
    /// [`MwayTreeError::ValueNotFound`] instead of an end cursor.
    pub fn position_of(&self, value: &T) -> TreeResult<Position> {
        self.position_lookup(value)
            .ok_or(MwayTreeError::ValueNotFound)
    }

    /// The descent shared by every lookup.
    ///
    /// Each step scans the current node; a match settles the search, a miss
    /// follows the routing slot. An empty slot ends the walk, and so does a
    /// node with room (it has no children to route into).
    fn position_lookup(&self, value: &T) -> Option<Position> {
        if self.root == NULL_NODE {
            return None;
        }
        let mut current = self.root;
        loop {
            let node = &self.nodes[current];
            match node.locate(value) {
                Ok(index) => return Some(Position::new(current, index)),
                Err(slot) => current = node.child(slot)?,
            }
        }
    }
}

impl<T> MwayTreeSet<T> {
    /// Element a position token refers to; `None` for the end sentinel or a
    /// token this tree never issued.
    ///
    /// # Examples
    ///
    /// ```
    /// use mwaytree::{MwayTreeSet, Position};
    ///
    /// let mut tree = MwayTreeSet::new(3).unwrap();
    /// let (position, _) = tree.insert(9);
    /// assert_eq!(tree.get(position), Some(&9));
    /// assert_eq!(tree.get(Position::END), None);
    /// ```
    pub fn get(&self, position: Position) -> Option<&T> {
        let node = self.nodes.get(position.node)?;
        node.elements.get(position.index)
    }
}
