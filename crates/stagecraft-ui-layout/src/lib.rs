//! Layout capability contract & shared state for Stagecraft
//!
//! The [`Layout`] trait is the operation set a scene node exposes to take part
//! in automatic sizing. Any node type can opt in; the scene graph discovers the
//! capability at runtime rather than through a common base type.

mod contract;
mod hints;
mod state;

pub use contract::*;
pub use hints::*;
pub use state::*;

pub mod prelude {
    pub use crate::contract::Layout;
    pub use crate::hints::SizeHints;
    pub use crate::state::LayoutState;
}
