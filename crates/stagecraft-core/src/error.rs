use crate::node::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    NotAContainer { id: NodeId },
    WouldCycle { parent: NodeId, child: NodeId },
    NotAChild { parent: NodeId, child: NodeId },
    IndexOutOfBounds { index: usize, len: usize },
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::NotAContainer { id } => write!(f, "node {id} cannot hold children"),
            NodeError::WouldCycle { parent, child } => {
                write!(f, "adding node {child} to node {parent} would create a cycle")
            }
            NodeError::NotAChild { parent, child } => {
                write!(f, "node {child} is not a child of node {parent}")
            }
            NodeError::IndexOutOfBounds { index, len } => {
                write!(f, "child index {index} out of bounds for {len} children")
            }
        }
    }
}

impl std::error::Error for NodeError {}
