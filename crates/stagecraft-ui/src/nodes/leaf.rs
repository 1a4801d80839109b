use std::cell::RefCell;
use std::rc::Rc;

use log::trace;
use stagecraft_core::{fill_target, Node, NodeCore};
use stagecraft_ui_graphics::DrawScope;
use stagecraft_ui_layout::{Layout, LayoutState};

use crate::policy::{EmptyPolicy, LayoutPolicy};

/// A childless node that takes part in layout.
///
/// Size hints, layout and painting come from its [`LayoutPolicy`]. Any size
/// change marks the leaf dirty, so `validate` re-runs the policy's layout
/// after a resize.
pub struct LayoutLeaf {
    core: NodeCore,
    state: LayoutState,
    policy: RefCell<Rc<dyn LayoutPolicy<LayoutLeaf>>>,
}

impl LayoutLeaf {
    pub fn new() -> Rc<Self> {
        Self::with_policy(Rc::new(EmptyPolicy))
    }

    pub fn with_policy(policy: Rc<dyn LayoutPolicy<LayoutLeaf>>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            core: NodeCore::new(this),
            state: LayoutState::new(),
            policy: RefCell::new(policy),
        })
    }

    pub fn policy(&self) -> Rc<dyn LayoutPolicy<LayoutLeaf>> {
        self.policy.borrow().clone()
    }

    /// Swaps the policy. The leaf and its ancestors are invalidated unless the
    /// same policy is installed again.
    pub fn set_policy(&self, policy: Rc<dyn LayoutPolicy<LayoutLeaf>>) {
        if Rc::ptr_eq(&*self.policy.borrow(), &policy) {
            return;
        }
        *self.policy.borrow_mut() = policy;
        self.invalidate_hierarchy();
    }

    pub fn layout_state(&self) -> &LayoutState {
        &self.state
    }
}

impl Node for LayoutLeaf {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn as_layout(&self) -> Option<&dyn Layout> {
        Some(self)
    }

    fn size_changed(&self) {
        self.invalidate();
    }

    fn draw(&self, scope: &mut dyn DrawScope, parent_alpha: f32) {
        self.validate();
        self.policy().paint(self, scope, parent_alpha);
    }

    fn debug_label(&self) -> &'static str {
        "LayoutLeaf"
    }
}

impl Layout for LayoutLeaf {
    fn min_width(&self) -> f32 {
        self.policy().min_width(self)
    }

    fn min_height(&self) -> f32 {
        self.policy().min_height(self)
    }

    fn pref_width(&self) -> f32 {
        self.policy().pref_width(self)
    }

    fn pref_height(&self) -> f32 {
        self.policy().pref_height(self)
    }

    fn max_width(&self) -> f32 {
        self.policy().max_width(self)
    }

    fn max_height(&self) -> f32 {
        self.policy().max_height(self)
    }

    /// Enabling always re-arms the leaf and its ancestors, even if it was
    /// already enabled.
    fn set_layout_enabled(&self, enabled: bool) {
        self.state.replace_layout_enabled(enabled);
        if enabled {
            self.invalidate_hierarchy();
        }
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
        if !self.state.layout_enabled() {
            return;
        }

        if self.state.fill_parent() {
            // Resized on every call, dirty or not.
            if let Some(target) = fill_target(self) {
                self.set_size(target.width, target.height);
            }
        }

        if !self.state.take_needs_layout() {
            return;
        }
        trace!("layout leaf {}", self.id());
        self.layout();
    }

    fn invalidate(&self) {
        self.state.mark_needs_layout();
    }

    fn invalidate_hierarchy(&self) {
        if !self.state.layout_enabled() {
            return;
        }
        self.invalidate();
        trace!("invalidate hierarchy from leaf {}", self.id());
        if let Some(parent) = self.parent() {
            if let Some(layout) = parent.as_layout() {
                layout.invalidate_hierarchy();
            }
        }
    }

    fn layout(&self) {
        self.policy().layout(self);
    }

    fn pack(&self) {
        self.set_size(self.pref_width(), self.pref_height());
        self.validate();
    }
}

#[cfg(test)]
#[path = "../tests/leaf_tests.rs"]
mod tests;
