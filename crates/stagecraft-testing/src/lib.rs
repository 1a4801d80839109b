//! Testing utilities and probes for Stagecraft layout
//!
//! Probes record what the layout protocol did to them so tests can assert on
//! call counts instead of inspecting internal flags:
//! - [`ProbePolicy`] counts `layout` passes and can re-dirty its node
//! - [`StackPolicy`] stretches every child over its container
//! - [`EnableProbe`] is a hand-written node that opts into the capability
//!
//! The scene builders assemble the small trees most tests start from.

mod enable_probe;
mod probe;
mod scenes;

pub use enable_probe::*;
pub use probe::*;
pub use scenes::*;

pub mod prelude {
    pub use crate::enable_probe::EnableProbe;
    pub use crate::probe::{ProbePolicy, StackPolicy};
    pub use crate::scenes::{build_chain, build_enable_scene, Chain, EnableScene};
}
