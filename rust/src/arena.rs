//! Index-addressed node storage.
//!
//! Nodes never leave the tree individually (there is no deletion), so the
//! arena is allocate-only: slots are handed out in allocation order and
//! reclaimed all at once by [`Arena::clear`]. Links between nodes are
//! [`NodeId`] indices into this storage, which keeps parent references free
//! of ownership cycles and makes a deep copy of the whole tree a plain
//! `Vec` clone.

use crate::types::{NodeId, NULL_NODE};
use std::ops::{Index, IndexMut};

/// Grow-only storage addressed by [`NodeId`].
#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
    storage: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena {
            storage: Vec::new(),
        }
    }

    /// Stores `item` and returns its id.
    pub(crate) fn allocate(&mut self, item: T) -> NodeId {
        let index = self.storage.len();
        // u32::MAX is reserved for NULL_NODE, so ids stop one short of it.
        assert!(index < NULL_NODE as usize, "arena exhausted the NodeId space");
        self.storage.push(item);
        index as NodeId
    }

    /// Shared access; `None` for `NULL_NODE` or an id this arena never
    /// issued.
    pub(crate) fn get(&self, id: NodeId) -> Option<&T> {
        if id == NULL_NODE {
            return None;
        }
        self.storage.get(id as usize)
    }

    /// Number of allocated slots.
    pub(crate) fn len(&self) -> usize {
        self.storage.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Drops every slot at once.
    pub(crate) fn clear(&mut self) {
        self.storage.clear();
    }
}

/// Direct accessors for ids the tree itself issued. Indexing with a stale or
/// foreign id is a corruption bug, so it panics rather than limping on.
impl<T> Index<NodeId> for Arena<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        &self.storage[id as usize]
    }
}

impl<T> IndexMut<NodeId> for Arena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.storage[id as usize]
    }
}
