use std::cell::Cell;

/// Flags every layout participant carries.
///
/// A fresh state is dirty, enabled, and does not fill its parent. Custom node
/// types implementing [`Layout`](crate::Layout) can embed this directly.
#[derive(Debug)]
pub struct LayoutState {
    needs_layout: Cell<bool>,
    fill_parent: Cell<bool>,
    layout_enabled: Cell<bool>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            needs_layout: Cell::new(true), // never validated at creation
            fill_parent: Cell::new(false),
            layout_enabled: Cell::new(true),
        }
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout.get()
    }

    pub fn mark_needs_layout(&self) {
        self.needs_layout.set(true);
    }

    /// Clears the dirty flag and returns whether it was set.
    pub fn take_needs_layout(&self) -> bool {
        self.needs_layout.replace(false)
    }

    pub fn fill_parent(&self) -> bool {
        self.fill_parent.get()
    }

    pub fn set_fill_parent(&self, fill_parent: bool) {
        self.fill_parent.set(fill_parent);
    }

    pub fn layout_enabled(&self) -> bool {
        self.layout_enabled.get()
    }

    /// Stores the flag and returns the previous value.
    pub fn replace_layout_enabled(&self, enabled: bool) -> bool {
        self.layout_enabled.replace(enabled)
    }
}
