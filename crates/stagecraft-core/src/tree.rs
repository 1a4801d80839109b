//! Structural operations on the scene graph.
//!
//! Every successful structural change fires [`Node::children_changed`] on the
//! affected group exactly once, after the child list and the parent links are
//! consistent again.

use std::fmt::Write as _;

use log::trace;
use stagecraft_ui_graphics::{DrawScope, Size};

use crate::children::ChildList;
use crate::error::NodeError;
use crate::node::{Node, NodeCore, NodeRef};

fn child_list(parent: &dyn Node) -> Result<&ChildList, NodeError> {
    parent
        .children()
        .ok_or(NodeError::NotAContainer { id: parent.id() })
}

/// Appends `child` to `parent`, detaching it from its current parent first.
pub fn add_child(parent: &dyn Node, child: NodeRef) -> Result<(), NodeError> {
    let len = child_list(parent)?.len();
    insert_child(parent, len, child)
}

/// Inserts `child` at `index` (clamped to the end of the list).
///
/// A child that already has another parent is removed from it first, which
/// fires that parent's structural callback as well. A child re-inserted into
/// its current parent is repositioned with a single callback; `index` then
/// counts positions without the child itself.
pub fn insert_child(parent: &dyn Node, index: usize, child: NodeRef) -> Result<(), NodeError> {
    let children = child_list(parent)?;
    if child.id() == parent.id() || is_ancestor_of(&*child, parent) {
        return Err(NodeError::WouldCycle {
            parent: parent.id(),
            child: child.id(),
        });
    }

    if let Some(current) = children.position(child.id()) {
        trace!("reposition node {} in {} to {}", child.id(), parent.id(), index);
        children.move_item(current, index);
        parent.children_changed();
        return Ok(());
    }

    remove_from_parent(&*child);

    child.core().set_parent(Some(parent.core().downgrade()));
    trace!("insert node {} into {} at {}", child.id(), parent.id(), index);
    children.insert(index, child);
    parent.children_changed();
    Ok(())
}

/// Removes `child` from `parent` and returns the handle that kept it alive.
pub fn remove_child(parent: &dyn Node, child: &dyn Node) -> Result<NodeRef, NodeError> {
    let children = child_list(parent)?;
    let index = children.position(child.id()).ok_or(NodeError::NotAChild {
        parent: parent.id(),
        child: child.id(),
    })?;
    let removed = children.remove(index);
    removed.core().set_parent(None);
    trace!("remove node {} from {}", child.id(), parent.id());
    parent.children_changed();
    Ok(removed)
}

/// Detaches `node` from its parent. Returns false if it had none.
pub fn remove_from_parent(node: &dyn Node) -> bool {
    match node.parent() {
        Some(parent) => remove_child(&*parent, node).is_ok(),
        None => false,
    }
}

/// Moves the child at `from` to `to`. Moving a child onto itself is a no-op
/// and fires no callback.
pub fn move_child(parent: &dyn Node, from: usize, to: usize) -> Result<(), NodeError> {
    let children = child_list(parent)?;
    let len = children.len();
    if from >= len {
        return Err(NodeError::IndexOutOfBounds { index: from, len });
    }
    if from == to {
        return Ok(());
    }
    children.move_item(from, to);
    parent.children_changed();
    Ok(())
}

/// Removes every child of `parent`, firing the structural callback once.
pub fn clear_children(parent: &dyn Node) -> Result<Vec<NodeRef>, NodeError> {
    let removed = child_list(parent)?.take_all();
    for child in &removed {
        child.core().set_parent(None);
    }
    parent.children_changed();
    Ok(removed)
}

/// Returns true if `ancestor` is a strict ancestor of `node`.
pub fn is_ancestor_of(ancestor: &dyn Node, node: &dyn Node) -> bool {
    let mut current = node.parent();
    while let Some(candidate) = current {
        if candidate.id() == ancestor.id() {
            return true;
        }
        current = candidate.parent();
    }
    false
}

/// Size a fill-parent node should take, or `None` when it has no parent.
///
/// Children of the stage root track the viewport instead of the root's own
/// size.
pub fn fill_target(node: &dyn Node) -> Option<Size> {
    let parent = node.parent()?;
    let target = match parent.core().viewport() {
        Some(viewport) => viewport.size(),
        None => parent.size(),
    };
    Some(target)
}

/// Draws the children of a group in order, in the group's coordinate space.
pub fn draw_children(
    core: &NodeCore,
    children: Option<&ChildList>,
    scope: &mut dyn DrawScope,
    parent_alpha: f32,
) {
    let Some(children) = children else {
        return;
    };
    let origin = core.position();
    scope.push_offset(origin.x, origin.y);
    for child in children.snapshot() {
        child.draw(scope, parent_alpha);
    }
    scope.pop_offset(origin.x, origin.y);
}

/// Indented text dump of the subtree rooted at `root`, one node per line.
pub fn dump_tree(root: &dyn Node) -> String {
    let mut output = String::new();
    dump_node(&mut output, root, 0);
    output
}

fn dump_node(output: &mut String, node: &dyn Node, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = write!(
        output,
        "{}[{}] {} {}x{}",
        indent,
        node.id(),
        node.debug_label(),
        node.width(),
        node.height()
    );
    if let Some(layout) = node.as_layout() {
        let _ = write!(
            output,
            " layout(dirty={}, enabled={}, fill={})",
            layout.needs_layout(),
            layout.is_layout_enabled(),
            layout.fill_parent()
        );
    }
    output.push('\n');

    if let Some(children) = node.children() {
        for child in children.snapshot() {
            dump_node(output, &*child, depth + 1);
        }
    }
}
