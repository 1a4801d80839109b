//! Structural operations: ownership, parent links and structural callbacks.

use std::cell::Cell;
use std::rc::Rc;

use stagecraft_core::{
    add_child, clear_children, insert_child, is_ancestor_of, move_child, remove_child,
    remove_from_parent, ChildList, Container, Node, NodeCore, NodeError, Quad,
};
use stagecraft_ui_graphics::Color;

/// Group that counts its structural callbacks.
struct CountingGroup {
    core: NodeCore,
    children: ChildList,
    changes: Cell<usize>,
}

impl CountingGroup {
    fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            core: NodeCore::new(this),
            children: ChildList::new(),
            changes: Cell::new(0),
        })
    }
}

impl Node for CountingGroup {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn children(&self) -> Option<&ChildList> {
        Some(&self.children)
    }

    fn children_changed(&self) {
        self.changes.set(self.changes.get() + 1);
    }
}

fn quad() -> Rc<Quad> {
    Quad::new(Color::WHITE)
}

#[test]
fn add_child_links_parent_and_fires_callback_once() {
    let group = CountingGroup::new();
    let child = quad();

    add_child(&*group, child.clone()).expect("group accepts children");

    assert_eq!(group.changes.get(), 1);
    assert_eq!(child.parent().map(|p| p.id()), Some(group.id()));
    assert_eq!(group.children.ids(), vec![child.id()]);
}

#[test]
fn insert_child_preserves_order_and_clamps_index() {
    let group = Container::new();
    let a = quad();
    let b = quad();
    let c = quad();

    add_child(&*group, a.clone()).unwrap();
    add_child(&*group, b.clone()).unwrap();
    insert_child(&*group, 1, c.clone()).unwrap();
    let d = quad();
    insert_child(&*group, 99, d.clone()).unwrap();

    assert_eq!(
        group.children().unwrap().ids(),
        vec![a.id(), c.id(), b.id(), d.id()]
    );
}

#[test]
fn reparenting_detaches_from_previous_parent() {
    let first = CountingGroup::new();
    let second = CountingGroup::new();
    let child = quad();

    add_child(&*first, child.clone()).unwrap();
    add_child(&*second, child.clone()).unwrap();

    assert!(first.children.is_empty());
    assert_eq!(second.children.ids(), vec![child.id()]);
    assert_eq!(child.parent().map(|p| p.id()), Some(second.id()));
    // add + implicit removal
    assert_eq!(first.changes.get(), 2);
    assert_eq!(second.changes.get(), 1);
}

#[test]
fn readding_to_same_parent_keeps_a_single_entry() {
    let group = Container::new();
    let a = quad();
    let b = quad();
    add_child(&*group, a.clone()).unwrap();
    add_child(&*group, b.clone()).unwrap();

    add_child(&*group, a.clone()).unwrap();

    assert_eq!(group.children().unwrap().ids(), vec![b.id(), a.id()]);
}

#[test]
fn readding_to_same_parent_fires_one_callback() {
    let group = CountingGroup::new();
    let a = quad();
    let b = quad();
    let c = quad();
    add_child(&*group, a.clone()).unwrap();
    add_child(&*group, b.clone()).unwrap();
    add_child(&*group, c.clone()).unwrap();
    group.changes.set(0);

    add_child(&*group, a.clone()).unwrap();
    assert_eq!(group.changes.get(), 1);
    assert_eq!(group.children.ids(), vec![b.id(), c.id(), a.id()]);

    insert_child(&*group, 0, c.clone()).unwrap();
    assert_eq!(group.changes.get(), 2);
    assert_eq!(group.children.ids(), vec![c.id(), b.id(), a.id()]);
    assert_eq!(c.parent().map(|p| p.id()), Some(group.id()));
}

#[test]
fn remove_child_clears_parent_link() {
    let group = CountingGroup::new();
    let child = quad();
    add_child(&*group, child.clone()).unwrap();

    let removed = remove_child(&*group, &*child).expect("child is present");

    assert_eq!(removed.id(), child.id());
    assert!(child.parent().is_none());
    assert_eq!(group.changes.get(), 2);
}

#[test]
fn removing_a_stranger_is_an_error() {
    let group = Container::new();
    let stranger = quad();

    let err = remove_child(&*group, &*stranger).err();
    assert_eq!(
        err,
        Some(NodeError::NotAChild {
            parent: group.id(),
            child: stranger.id(),
        })
    );
    assert!(!remove_from_parent(&*stranger));
}

#[test]
fn leaves_cannot_hold_children() {
    let leaf = quad();
    let err = add_child(&*leaf, quad()).unwrap_err();
    assert_eq!(err, NodeError::NotAContainer { id: leaf.id() });
    assert_eq!(err.to_string(), format!("node {} cannot hold children", leaf.id()));
}

#[test]
fn cycles_are_rejected() {
    let outer = Container::new();
    let inner = Container::new();
    add_child(&*outer, inner.clone()).unwrap();

    assert!(matches!(
        add_child(&*inner, outer.clone()),
        Err(NodeError::WouldCycle { .. })
    ));
    assert!(matches!(
        add_child(&*outer, outer.clone()),
        Err(NodeError::WouldCycle { .. })
    ));
    assert!(is_ancestor_of(&*outer, &*inner));
    assert!(!is_ancestor_of(&*inner, &*outer));
}

#[test]
fn move_child_reorders_and_skips_noop() {
    let group = CountingGroup::new();
    let a = quad();
    let b = quad();
    add_child(&*group, a.clone()).unwrap();
    add_child(&*group, b.clone()).unwrap();
    let before = group.changes.get();

    move_child(&*group, 1, 1).unwrap();
    assert_eq!(group.changes.get(), before);

    move_child(&*group, 0, 1).unwrap();
    assert_eq!(group.children.ids(), vec![b.id(), a.id()]);
    assert_eq!(group.changes.get(), before + 1);

    assert_eq!(
        move_child(&*group, 5, 0),
        Err(NodeError::IndexOutOfBounds { index: 5, len: 2 })
    );
}

#[test]
fn clear_children_fires_once_and_orphans_everything() {
    let group = CountingGroup::new();
    let a = quad();
    let b = quad();
    add_child(&*group, a.clone()).unwrap();
    add_child(&*group, b.clone()).unwrap();
    let before = group.changes.get();

    let removed = clear_children(&*group).unwrap();

    assert_eq!(removed.len(), 2);
    assert_eq!(group.changes.get(), before + 1);
    assert!(a.parent().is_none());
    assert!(b.parent().is_none());
}

#[test]
fn parent_link_does_not_keep_parent_alive() {
    let child = quad();
    {
        let group = Container::new();
        add_child(&*group, child.clone()).unwrap();
        assert!(child.parent().is_some());
    }
    assert!(child.parent().is_none());
}

#[test]
fn snapshot_is_stable_while_list_changes() {
    let group = Container::new();
    let a = quad();
    let b = quad();
    add_child(&*group, a.clone()).unwrap();
    add_child(&*group, b.clone()).unwrap();

    let mut visited = Vec::new();
    for child in group.children().unwrap().snapshot() {
        visited.push(child.id());
        remove_from_parent(&*child);
    }

    assert_eq!(visited, vec![a.id(), b.id()]);
    assert!(group.children().unwrap().is_empty());
}
