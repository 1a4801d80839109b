use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use stagecraft_ui_graphics::{DrawScope, Point, Rect, Size};
use stagecraft_ui_layout::Layout;

use crate::children::ChildList;
use crate::stage::Viewport;
use crate::tree::draw_children;

pub type NodeId = usize;
pub type NodeRef = Rc<dyn Node>;
pub type WeakNodeRef = Weak<dyn Node>;

thread_local! {
    static NEXT_NODE_ID: Cell<NodeId> = const { Cell::new(1) };
}

fn allocate_node_id() -> NodeId {
    NEXT_NODE_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    })
}

/// A node of the scene graph.
///
/// Nodes are shared as [`NodeRef`]s and mutated through `&self`; all state
/// lives in cells inside [`NodeCore`] or the implementing type. A node is a
/// group when [`Node::children`] returns a list, and takes part in automatic
/// layout when [`Node::as_layout`] returns the capability.
pub trait Node: 'static {
    fn core(&self) -> &NodeCore;

    /// The child list, for nodes that can hold children.
    fn children(&self) -> Option<&ChildList> {
        None
    }

    /// The layout capability, for nodes that participate in layout.
    fn as_layout(&self) -> Option<&dyn Layout> {
        None
    }

    /// Called after the width or height changed through any mutator.
    fn size_changed(&self) {}

    /// Called after a child was added, removed or reordered.
    fn children_changed(&self) {}

    /// Draws the node. `parent_alpha` is the accumulated opacity of the ancestors.
    fn draw(&self, scope: &mut dyn DrawScope, parent_alpha: f32) {
        draw_children(self.core(), self.children(), scope, parent_alpha);
    }

    fn debug_label(&self) -> &'static str {
        "Node"
    }

    fn id(&self) -> NodeId {
        self.core().id()
    }

    fn parent(&self) -> Option<NodeRef> {
        self.core().parent()
    }

    fn x(&self) -> f32 {
        self.core().x.get()
    }

    fn y(&self) -> f32 {
        self.core().y.get()
    }

    fn width(&self) -> f32 {
        self.core().width.get()
    }

    fn height(&self) -> f32 {
        self.core().height.get()
    }

    fn size(&self) -> Size {
        self.core().size()
    }

    fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.core().position(), self.size())
    }

    fn set_position(&self, x: f32, y: f32) {
        self.core().x.set(x);
        self.core().y.set(y);
    }

    /// Resizes the node, firing [`Node::size_changed`] only if the size differs.
    fn set_size(&self, width: f32, height: f32) {
        if self.core().replace_size(width, height) {
            self.size_changed();
        }
    }

    fn set_width(&self, width: f32) {
        self.set_size(width, self.height());
    }

    fn set_height(&self, height: f32) {
        self.set_size(self.width(), height);
    }

    fn set_bounds(&self, x: f32, y: f32, width: f32, height: f32) {
        self.set_position(x, y);
        self.set_size(width, height);
    }
}

/// Identity, geometry and tree links shared by every node.
pub struct NodeCore {
    id: NodeId,
    this: WeakNodeRef,
    parent: RefCell<Option<WeakNodeRef>>,
    // Only the stage root links to the viewport.
    viewport: RefCell<Option<Weak<Viewport>>>,
    x: Cell<f32>,
    y: Cell<f32>,
    width: Cell<f32>,
    height: Cell<f32>,
}

impl NodeCore {
    /// Creates the core for a node under construction, typically from inside
    /// `Rc::new_cyclic`.
    pub fn new<N: Node>(this: &Weak<N>) -> Self {
        let this: WeakNodeRef = this.clone();
        Self {
            id: allocate_node_id(),
            this,
            parent: RefCell::new(None),
            viewport: RefCell::new(None),
            x: Cell::new(0.0),
            y: Cell::new(0.0),
            width: Cell::new(0.0),
            height: Cell::new(0.0),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub(crate) fn downgrade(&self) -> WeakNodeRef {
        self.this.clone()
    }

    pub fn parent(&self) -> Option<NodeRef> {
        self.parent.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn set_parent(&self, parent: Option<WeakNodeRef>) {
        *self.parent.borrow_mut() = parent;
    }

    pub fn viewport(&self) -> Option<Rc<Viewport>> {
        self.viewport.borrow().as_ref().and_then(Weak::upgrade)
    }

    pub(crate) fn attach_viewport(&self, viewport: &Rc<Viewport>) {
        *self.viewport.borrow_mut() = Some(Rc::downgrade(viewport));
    }

    pub fn position(&self) -> Point {
        Point::new(self.x.get(), self.y.get())
    }

    pub fn size(&self) -> Size {
        Size::new(self.width.get(), self.height.get())
    }

    /// Stores the size and reports whether it changed.
    fn replace_size(&self, width: f32, height: f32) -> bool {
        let changed = self.width.get() != width || self.height.get() != height;
        self.width.set(width);
        self.height.set(height);
        changed
    }
}
