//! Retained scene graph runtime for Stagecraft
//!
//! Nodes are shared through [`NodeRef`] handles. A group owns its children
//! through a [`ChildList`]; every node keeps only a weak link back to its
//! parent, used for upward lookups such as layout invalidation.

mod children;
mod container;
mod error;
mod node;
mod stage;
mod tree;

pub use children::*;
pub use container::*;
pub use error::*;
pub use node::*;
pub use stage::*;
pub use tree::*;

pub use stagecraft_ui_layout::Layout;

pub mod prelude {
    pub use crate::children::ChildList;
    pub use crate::container::{Container, Quad};
    pub use crate::error::NodeError;
    pub use crate::node::{Node, NodeCore, NodeId, NodeRef};
    pub use crate::stage::{Stage, StageOptions, Viewport};
    pub use crate::tree::{add_child, insert_child, move_child, remove_child};
}
