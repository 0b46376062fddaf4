use thiserror::Error;

use crate::edge::EdgeId;
use crate::node::NodeId;

/// Errors reported by [`Graph`](crate::Graph) operations.
///
/// Every variant is a local, recoverable condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("no node holds the requested value")]
    NodeNotFound,
    #[error("node handle {0} does not belong to this graph")]
    UnknownNode(NodeId),
    #[error("edge handle {0} does not belong to this graph")]
    UnknownEdge(EdgeId),
    #[error("no edge connects the requested nodes")]
    EdgeNotFound,
    #[error("a node with this value already exists")]
    DuplicateValue,
    #[error("target node is unreachable from the start node")]
    Unreachable,
    #[error("edge weight must be non-negative, got {0}")]
    NegativeWeight(i32),
    #[error("maximum cost must be non-negative, got {0}")]
    NegativeCost(i64),
    #[error("at least one source node is required")]
    EmptySources,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
