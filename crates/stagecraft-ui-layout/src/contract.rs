//! The layout capability.

/// Operation set a node exposes to participate in automatic sizing.
///
/// Every method takes `&self`: implementers keep their flags in interior
/// mutable cells so the capability can be driven through a shared
/// `&dyn Layout` reached from anywhere in the tree.
///
/// Size hints are pure, non-negative queries. A maximum of `0.0` means there
/// is no maximum. Implementers must call [`Layout::invalidate`] or
/// [`Layout::invalidate_hierarchy`] from every mutator that affects their size
/// hints or the geometry of their children; nothing checks this, and a missed
/// call shows up only as stale geometry.
pub trait Layout {
    fn min_width(&self) -> f32 {
        self.pref_width()
    }

    fn min_height(&self) -> f32 {
        self.pref_height()
    }

    fn pref_width(&self) -> f32 {
        0.0
    }

    fn pref_height(&self) -> f32 {
        0.0
    }

    /// Zero means no maximum.
    fn max_width(&self) -> f32 {
        0.0
    }

    /// Zero means no maximum.
    fn max_height(&self) -> f32 {
        0.0
    }

    /// Turns participation in the protocol on or off.
    fn set_layout_enabled(&self, enabled: bool);

    fn is_layout_enabled(&self) -> bool;

    /// When set, [`Layout::validate`] sizes the node to its parent (or to the
    /// stage viewport when the parent is the stage root).
    fn set_fill_parent(&self, fill_parent: bool);

    fn fill_parent(&self) -> bool;

    /// Returns true if the node was invalidated since its last layout.
    fn needs_layout(&self) -> bool;

    /// Ensures the node is laid out.
    ///
    /// Lazy and idempotent: [`Layout::layout`] only runs when the node was
    /// invalidated. Must be called before the node's geometry is used for
    /// drawing or read by a parent's layout. Does nothing while layout is
    /// disabled.
    fn validate(&self);

    /// Marks this node as needing layout. Does not propagate.
    fn invalidate(&self);

    /// Invalidates this node and every ancestor that also exposes the
    /// capability, stopping at the first one that does not.
    fn invalidate_hierarchy(&self);

    /// Positions and sizes the node's children. Called by [`Layout::validate`].
    fn layout(&self) {}

    /// Sizes the node to its preferred size and validates it.
    fn pack(&self);
}
