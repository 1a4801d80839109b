use std::cell::RefCell;

use smallvec::SmallVec;

use crate::node::{NodeId, NodeRef};

/// Snapshot of a child list; inline for the common small group.
pub type ChildSnapshot = SmallVec<[NodeRef; 8]>;

/// Ordered children of a group.
///
/// The list holds the strong handles that keep children alive. It never
/// contains the same node twice: the tree operations detach a node from its
/// previous parent before inserting it. Walks must go through
/// [`ChildList::snapshot`] so callbacks fired mid-walk can mutate the list.
#[derive(Default)]
pub struct ChildList {
    items: RefCell<Vec<NodeRef>>,
}

impl ChildList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeRef> {
        self.items.borrow().get(index).cloned()
    }

    /// Copies the current handles so the list can change during iteration.
    pub fn snapshot(&self) -> ChildSnapshot {
        self.items.borrow().iter().cloned().collect()
    }

    pub fn ids(&self) -> Vec<NodeId> {
        self.items.borrow().iter().map(|child| child.id()).collect()
    }

    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.items.borrow().iter().position(|child| child.id() == id)
    }

    pub(crate) fn insert(&self, index: usize, child: NodeRef) {
        let mut items = self.items.borrow_mut();
        let index = index.min(items.len());
        items.insert(index, child);
    }

    pub(crate) fn remove(&self, index: usize) -> NodeRef {
        self.items.borrow_mut().remove(index)
    }

    pub(crate) fn move_item(&self, from: usize, to: usize) {
        let mut items = self.items.borrow_mut();
        let child = items.remove(from);
        let target = to.min(items.len());
        items.insert(target, child);
    }

    pub(crate) fn take_all(&self) -> Vec<NodeRef> {
        std::mem::take(&mut *self.items.borrow_mut())
    }
}
