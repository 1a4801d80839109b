use std::cell::Cell;
use std::rc::Rc;

use stagecraft_core::{Node, NodeCore};
use stagecraft_ui_layout::{Layout, LayoutState};

/// A hand-written layout participant that counts the calls it receives.
///
/// It is built directly on [`NodeCore`] and [`LayoutState`], the way any
/// custom node type opts into the capability without going through
/// `stagecraft-ui`.
pub struct EnableProbe {
    core: NodeCore,
    state: LayoutState,
    enable_calls: Cell<usize>,
    layouts: Cell<usize>,
}

impl EnableProbe {
    pub fn new() -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            core: NodeCore::new(this),
            state: LayoutState::new(),
            enable_calls: Cell::new(0),
            layouts: Cell::new(0),
        })
    }

    /// Number of `set_layout_enabled` calls, whatever their argument.
    pub fn enable_calls(&self) -> usize {
        self.enable_calls.get()
    }

    pub fn layout_count(&self) -> usize {
        self.layouts.get()
    }
}

impl Node for EnableProbe {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn as_layout(&self) -> Option<&dyn Layout> {
        Some(self)
    }

    fn size_changed(&self) {
        self.invalidate();
    }

    fn debug_label(&self) -> &'static str {
        "EnableProbe"
    }
}

impl Layout for EnableProbe {
    fn set_layout_enabled(&self, enabled: bool) {
        self.enable_calls.set(self.enable_calls.get() + 1);
        self.state.replace_layout_enabled(enabled);
    }

    fn is_layout_enabled(&self) -> bool {
        self.state.layout_enabled()
    }

    fn set_fill_parent(&self, fill_parent: bool) {
        self.state.set_fill_parent(fill_parent);
    }

    fn fill_parent(&self) -> bool {
        self.state.fill_parent()
    }

    fn needs_layout(&self) -> bool {
        self.state.needs_layout()
    }

    fn validate(&self) {
        if self.state.layout_enabled() && self.state.take_needs_layout() {
            self.layout();
        }
    }

    fn invalidate(&self) {
        self.state.mark_needs_layout();
    }

    fn invalidate_hierarchy(&self) {
        self.invalidate();
        if let Some(parent) = self.parent() {
            if let Some(layout) = parent.as_layout() {
                layout.invalidate_hierarchy();
            }
        }
    }

    fn layout(&self) {
        self.layouts.set(self.layouts.get() + 1);
    }

    fn pack(&self) {
        self.set_size(self.pref_width(), self.pref_height());
        self.validate();
    }
}
