use std::fmt;

use crate::edge::EdgeId;

/// Stable handle to a node inside a [`Graph`](crate::Graph).
///
/// Handles compare by identity, never by payload. A handle outlives the
/// node it names but stops resolving once that node is removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    #[inline]
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index, dense over the graph's node storage.
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}v{}", self.index, self.generation)
    }
}

/// A vertex: a payload value, its incident edges and a traversability flag.
#[derive(Debug, Clone)]
pub struct Node<V> {
    pub(crate) value: V,
    pub(crate) edges: Vec<EdgeId>,
    pub(crate) traversable: bool,
}

impl<V> Node<V> {
    pub(crate) fn new(value: V) -> Self {
        Self {
            value,
            edges: Vec::new(),
            traversable: true,
        }
    }

    /// The payload.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Incident edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Number of incident edges.
    #[inline]
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Whether searches may enter this node.
    #[inline]
    pub fn is_traversable(&self) -> bool {
        self.traversable
    }

    pub fn become_traversable(&mut self) {
        self.traversable = true;
    }

    pub fn become_untraversable(&mut self) {
        self.traversable = false;
    }

    pub fn set_traversable(&mut self, traversable: bool) {
        self.traversable = traversable;
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }

    pub(crate) fn detach(&mut self, edge: EdgeId) {
        if let Some(pos) = self.edges.iter().position(|&e| e == edge) {
            self.edges.remove(pos);
        }
    }
}
