//! Layout-aware scene nodes for Stagecraft
//!
//! [`LayoutLeaf`] and [`LayoutContainer`] implement the
//! [`Layout`](stagecraft_ui_layout::Layout) capability on top of the scene
//! graph in `stagecraft-core`. Widgets supply their size hints, layout and
//! painting through a [`LayoutPolicy`].

mod nodes;
mod policy;

pub use nodes::*;
pub use policy::*;

pub use stagecraft_core::{Node, NodeError, NodeRef, Stage, StageOptions};
pub use stagecraft_ui_layout::{Layout, LayoutState, SizeHints};

pub mod prelude {
    pub use crate::nodes::{LayoutContainer, LayoutLeaf};
    pub use crate::policy::{EmptyPolicy, LayoutPolicy};
    pub use stagecraft_core::prelude::*;
    pub use stagecraft_ui_layout::prelude::*;
}
