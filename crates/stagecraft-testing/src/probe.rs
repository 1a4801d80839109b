use std::cell::{Cell, RefCell};
use std::rc::Rc;

use stagecraft_core::Node;
use stagecraft_ui::{LayoutContainer, LayoutPolicy};
use stagecraft_ui_graphics::{Color, DrawScope, Size};
use stagecraft_ui_layout::{Layout, SizeHints};

/// Policy that records every `layout` pass it is asked to run.
///
/// Its preferred size is set directly and, unlike a well-behaved widget,
/// changing it does not invalidate anything. Tests use that to reproduce stale
/// geometry and then invalidate by hand.
#[derive(Debug, Default)]
pub struct ProbePolicy {
    pref: Cell<Size>,
    layouts: Cell<usize>,
    layout_sizes: RefCell<Vec<Size>>,
    redirty: Cell<usize>,
    redirty_growth: Cell<Size>,
    color: Cell<Option<Color>>,
}

impl ProbePolicy {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_pref_size(width: f32, height: f32) -> Rc<Self> {
        let probe = Self::new();
        probe.set_pref_size(width, height);
        probe
    }

    /// Paints the node's bounds in `color` when drawn.
    pub fn with_color(self: Rc<Self>, color: Color) -> Rc<Self> {
        self.color.set(Some(color));
        self
    }

    pub fn pref_size(&self) -> Size {
        self.pref.get()
    }

    /// Changes the preferred size without invalidating the node.
    pub fn set_pref_size(&self, width: f32, height: f32) {
        self.pref.set(Size::new(width, height));
    }

    pub fn layout_count(&self) -> usize {
        self.layouts.get()
    }

    /// Node size observed at the start of each layout pass.
    pub fn layout_sizes(&self) -> Vec<Size> {
        self.layout_sizes.borrow().clone()
    }

    pub fn reset(&self) {
        self.layouts.set(0);
        self.layout_sizes.borrow_mut().clear();
    }

    /// The next `times` layout passes grow the preferred size by `growth` and
    /// invalidate the node again.
    pub fn redirty_next(&self, times: usize, growth: Size) {
        self.redirty.set(times);
        self.redirty_growth.set(growth);
    }
}

impl<N: Node + Layout> LayoutPolicy<N> for ProbePolicy {
    fn pref_width(&self, _node: &N) -> f32 {
        self.pref.get().width
    }

    fn pref_height(&self, _node: &N) -> f32 {
        self.pref.get().height
    }

    fn layout(&self, node: &N) {
        self.layouts.set(self.layouts.get() + 1);
        self.layout_sizes.borrow_mut().push(node.size());

        let remaining = self.redirty.get();
        if remaining == 0 {
            return;
        }
        self.redirty.set(remaining - 1);
        let growth = self.redirty_growth.get();
        let pref = self.pref.get();
        self.pref
            .set(Size::new(pref.width + growth.width, pref.height + growth.height));
        node.invalidate();
    }

    fn paint(&self, node: &N, scope: &mut dyn DrawScope, parent_alpha: f32) {
        if let Some(color) = self.color.get() {
            scope.draw_rect_at(node.bounds(), color.modulate_alpha(parent_alpha));
        }
    }
}

/// Container policy that stretches every child over the container.
///
/// The preferred size is the largest preferred size among the layout-aware
/// children. Children are validated right after being sized.
#[derive(Debug, Default)]
pub struct StackPolicy {
    layouts: Cell<usize>,
}

impl StackPolicy {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn layout_count(&self) -> usize {
        self.layouts.get()
    }

    fn largest_pref(&self, node: &LayoutContainer) -> Size {
        let mut largest = Size::ZERO;
        let Some(children) = node.children() else {
            return largest;
        };
        for child in children.snapshot() {
            if let Some(layout) = child.as_layout() {
                let pref = SizeHints::of(layout).pref_size();
                largest.width = largest.width.max(pref.width);
                largest.height = largest.height.max(pref.height);
            }
        }
        largest
    }
}

impl LayoutPolicy<LayoutContainer> for StackPolicy {
    fn pref_width(&self, node: &LayoutContainer) -> f32 {
        self.largest_pref(node).width
    }

    fn pref_height(&self, node: &LayoutContainer) -> f32 {
        self.largest_pref(node).height
    }

    fn layout(&self, node: &LayoutContainer) {
        self.layouts.set(self.layouts.get() + 1);
        let Some(children) = node.children() else {
            return;
        };
        let size = node.size();
        for child in children.snapshot() {
            match child.as_layout() {
                Some(layout) => {
                    let hints = SizeHints::of(layout);
                    child.set_bounds(
                        0.0,
                        0.0,
                        hints.constrain_width(size.width),
                        hints.constrain_height(size.height),
                    );
                    layout.validate();
                }
                None => child.set_bounds(0.0, 0.0, size.width, size.height),
            }
        }
    }
}
