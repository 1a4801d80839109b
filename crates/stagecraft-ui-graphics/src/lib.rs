//! Pure math/data for drawing in Stagecraft
//!
//! This crate contains the geometry primitives, colors and the draw surface
//! abstraction shared by the scene graph and the layout nodes.

mod color;
mod draw;
mod geometry;

pub use color::*;
pub use draw::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::draw::{DrawPrimitive, DrawScope, RecordingDrawScope};
    pub use crate::geometry::{Point, Rect, Size};
}
