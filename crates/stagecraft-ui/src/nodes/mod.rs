mod container;
mod leaf;

pub use container::LayoutContainer;
pub use leaf::LayoutLeaf;
