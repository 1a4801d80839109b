use stagecraft_ui_graphics::DrawScope;

/// Widget-specific behaviour plugged into a layout node of type `N`.
///
/// Hints default to the capability defaults: the minimum follows the
/// preferred size, the preferred size is zero and a zero maximum means
/// unbounded. A policy whose hints depend on mutable state must invalidate the
/// node (usually with `invalidate_hierarchy`) whenever that state changes.
pub trait LayoutPolicy<N: ?Sized> {
    fn min_width(&self, node: &N) -> f32 {
        self.pref_width(node)
    }

    fn min_height(&self, node: &N) -> f32 {
        self.pref_height(node)
    }

    fn pref_width(&self, _node: &N) -> f32 {
        0.0
    }

    fn pref_height(&self, _node: &N) -> f32 {
        0.0
    }

    fn max_width(&self, _node: &N) -> f32 {
        0.0
    }

    fn max_height(&self, _node: &N) -> f32 {
        0.0
    }

    /// Positions and sizes the node's content. Runs from `validate` only when
    /// the node is dirty.
    fn layout(&self, _node: &N) {}

    /// Paints the node itself, after it has been validated and before any
    /// children are drawn.
    fn paint(&self, _node: &N, _scope: &mut dyn DrawScope, _parent_alpha: f32) {}
}

/// Policy with every default: zero-sized and nothing to lay out.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyPolicy;

impl<N: ?Sized> LayoutPolicy<N> for EmptyPolicy {}
