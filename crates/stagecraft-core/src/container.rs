use std::cell::Cell;
use std::rc::Rc;

use stagecraft_ui_graphics::{Color, DrawScope};

use crate::children::ChildList;
use crate::node::{Node, NodeCore};

/// A group that holds children but does not take part in layout.
pub struct Container {
    core: NodeCore,
    children: ChildList,
}

impl Container {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            core: NodeCore::new(this),
            children: ChildList::new(),
        })
    }
}

impl Node for Container {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn children(&self) -> Option<&ChildList> {
        Some(&self.children)
    }

    fn debug_label(&self) -> &'static str {
        "Container"
    }
}

/// A childless node that paints its bounds with a solid color.
pub struct Quad {
    core: NodeCore,
    color: Cell<Color>,
}

impl Quad {
    pub fn new(color: Color) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            core: NodeCore::new(this),
            color: Cell::new(color),
        })
    }

    pub fn color(&self) -> Color {
        self.color.get()
    }

    pub fn set_color(&self, color: Color) {
        self.color.set(color);
    }
}

impl Node for Quad {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn draw(&self, scope: &mut dyn DrawScope, parent_alpha: f32) {
        scope.draw_rect_at(self.bounds(), self.color().modulate_alpha(parent_alpha));
    }

    fn debug_label(&self) -> &'static str {
        "Quad"
    }
}
