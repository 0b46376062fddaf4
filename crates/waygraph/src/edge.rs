use std::fmt;

use crate::node::NodeId;

/// Stable handle to an edge inside a [`Graph`](crate::Graph).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl EdgeId {
    #[inline]
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}v{}", self.index, self.generation)
    }
}

/// An undirected weighted connection between two nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub(crate) a: NodeId,
    pub(crate) b: NodeId,
    pub(crate) weight: i32,
}

impl Edge {
    /// Both endpoints, in the order they were given at insertion.
    #[inline]
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    /// Cost of crossing this edge. Never negative.
    #[inline]
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// The endpoint opposite to `from`. For a self-loop this is `from`.
    #[inline]
    pub fn other(&self, from: NodeId) -> NodeId {
        if self.a == from { self.b } else { self.a }
    }

    /// Whether this edge joins `x` and `y`, in either order.
    #[inline]
    pub fn connects(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// Whether `n` is one of the endpoints.
    #[inline]
    pub fn touches(&self, n: NodeId) -> bool {
        self.a == n || self.b == n
    }
}
