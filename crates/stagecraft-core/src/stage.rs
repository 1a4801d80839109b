//! The stage hosts the scene: it owns the root group and the viewport that
//! fill-parent children of the root resize to.

use std::cell::Cell;
use std::rc::Rc;

use log::debug;
use stagecraft_ui_graphics::{DrawScope, Size};

use crate::container::Container;
use crate::error::NodeError;
use crate::node::{Node, NodeRef};
use crate::tree::{add_child, dump_tree};

/// Top-level dimensions of the area the stage renders into.
#[derive(Debug)]
pub struct Viewport {
    width: Cell<f32>,
    height: Cell<f32>,
}

impl Viewport {
    fn new(size: Size) -> Self {
        Self {
            width: Cell::new(size.width),
            height: Cell::new(size.height),
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width.get(), self.height.get())
    }
}

/// Construction options for a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageOptions {
    viewport_size: Size,
}

impl Default for StageOptions {
    fn default() -> Self {
        Self {
            viewport_size: Size::new(800.0, 600.0),
        }
    }
}

impl StageOptions {
    pub fn with_viewport_size(mut self, width: f32, height: f32) -> Self {
        self.viewport_size = Size::new(width, height);
        self
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport_size
    }
}

pub struct Stage {
    viewport: Rc<Viewport>,
    root: Rc<Container>,
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(StageOptions::default())
    }
}

impl Stage {
    pub fn new(options: StageOptions) -> Self {
        let viewport = Rc::new(Viewport::new(options.viewport_size()));
        let root = Container::new();
        root.core().attach_viewport(&viewport);
        debug!(
            "stage created with root {} and viewport {}x{}",
            root.id(),
            options.viewport_size().width,
            options.viewport_size().height
        );
        Self { viewport, root }
    }

    pub fn root(&self) -> &Rc<Container> {
        &self.root
    }

    pub fn viewport(&self) -> &Rc<Viewport> {
        &self.viewport
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport.size()
    }

    /// Resizes the viewport. Fill-parent children of the root pick the new
    /// size up on their next validation.
    pub fn set_viewport_size(&self, width: f32, height: f32) {
        debug!("viewport resized to {width}x{height}");
        self.viewport.width.set(width);
        self.viewport.height.set(height);
    }

    /// Adds a node to the root group.
    pub fn add_actor(&self, node: NodeRef) -> Result<(), NodeError> {
        add_child(&*self.root, node)
    }

    pub fn draw(&self, scope: &mut dyn DrawScope) {
        self.root.draw(scope, 1.0);
    }

    pub fn dump_tree(&self) -> String {
        dump_tree(&*self.root)
    }
}
