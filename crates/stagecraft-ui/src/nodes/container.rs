use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};
use stagecraft_core::{
    add_child, draw_children, fill_target, ChildList, Node, NodeCore, NodeError, NodeRef,
};
use stagecraft_ui_graphics::DrawScope;
use stagecraft_ui_layout::{Layout, LayoutState};

use crate::policy::{EmptyPolicy, LayoutPolicy};

/// A group that takes part in layout.
///
/// Its policy positions and sizes the children from `layout`. Any structural
/// change to the child list invalidates the container and its layout-aware
/// ancestors.
pub struct LayoutContainer {
    core: NodeCore,
    children: ChildList,
    state: LayoutState,
    policy: RefCell<Rc<dyn LayoutPolicy<LayoutContainer>>>,
}

impl LayoutContainer {
    pub fn new() -> Rc<Self> {
        Self::with_policy(Rc::new(EmptyPolicy))
    }

    pub fn with_policy(policy: Rc<dyn LayoutPolicy<LayoutContainer>>) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            core: NodeCore::new(this),
            children: ChildList::new(),
            state: LayoutState::new(),
            policy: RefCell::new(policy),
        })
    }

    /// Builds a container and appends `children` in order.
    pub fn with_children(
        policy: Rc<dyn LayoutPolicy<LayoutContainer>>,
        children: impl IntoIterator<Item = NodeRef>,
    ) -> Result<Rc<Self>, NodeError> {
        let container = Self::with_policy(policy);
        for child in children {
            add_child(&*container, child)?;
        }
        Ok(container)
    }

    pub fn policy(&self) -> Rc<dyn LayoutPolicy<LayoutContainer>> {
        self.policy.borrow().clone()
    }

    /// Swaps the policy. The container and its ancestors are invalidated
    /// unless the same policy is installed again.
    pub fn set_policy(&self, policy: Rc<dyn LayoutPolicy<LayoutContainer>>) {
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

/// Pushes `enabled` to every layout-aware node below `children`.
///
/// Plain groups are walked through; layout-aware children handle their own
/// subtree.
fn propagate_layout_enabled(children: &ChildList, enabled: bool) {
    for child in children.snapshot() {
        if let Some(layout) = child.as_layout() {
            layout.set_layout_enabled(enabled);
        } else if let Some(grandchildren) = child.children() {
            propagate_layout_enabled(grandchildren, enabled);
        }
    }
}

impl Node for LayoutContainer {
    fn core(&self) -> &NodeCore {
        &self.core
    }

    fn children(&self) -> Option<&ChildList> {
        Some(&self.children)
    }

    fn as_layout(&self) -> Option<&dyn Layout> {
        Some(self)
    }

    fn size_changed(&self) {
        self.invalidate();
    }

    fn children_changed(&self) {
        self.invalidate_hierarchy();
    }

    fn draw(&self, scope: &mut dyn DrawScope, parent_alpha: f32) {
        self.validate();
        self.policy().paint(self, scope, parent_alpha);
        draw_children(&self.core, Some(&self.children), scope, parent_alpha);
    }

    fn debug_label(&self) -> &'static str {
        "LayoutContainer"
    }
}

impl Layout for LayoutContainer {
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

    /// Does not invalidate the container itself.
    fn set_layout_enabled(&self, enabled: bool) {
        if self.state.replace_layout_enabled(enabled) == enabled {
            return;
        }
        trace!("container {} layout enabled = {}", self.id(), enabled);
        propagate_layout_enabled(&self.children, enabled);
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
            if let Some(target) = fill_target(self) {
                if self.size() != target {
                    debug!(
                        "container {} fills parent: {}x{}",
                        self.id(),
                        target.width,
                        target.height
                    );
                    self.set_size(target.width, target.height);
                    self.invalidate();
                }
            }
        }

        if !self.state.take_needs_layout() {
            return;
        }
        trace!("layout container {}", self.id());
        self.layout();
    }

    fn invalidate(&self) {
        self.state.mark_needs_layout();
    }

    fn invalidate_hierarchy(&self) {
        self.invalidate();
        trace!("invalidate hierarchy from container {}", self.id());
        if let Some(parent) = self.parent() {
            if let Some(layout) = parent.as_layout() {
                layout.invalidate_hierarchy();
            }
        }
    }

    fn layout(&self) {
        self.policy().layout(self);
    }

    /// Layouts that change the preferred size get one extra pass.
    fn pack(&self) {
        self.set_size(self.pref_width(), self.pref_height());
        self.validate();
        if !self.state.needs_layout() {
            return;
        }

        debug!("container {} still dirty after pack, retrying", self.id());
        self.set_size(self.pref_width(), self.pref_height());
        self.validate();
        if self.state.needs_layout() {
            debug!("container {} left dirty after pack retry", self.id());
        }
    }
}

#[cfg(test)]
#[path = "../tests/container_tests.rs"]
mod tests;
