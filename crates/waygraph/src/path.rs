use crate::node::NodeId;

/// A node with an associated cost, returned from cost-map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub node: NodeId,
    pub cost: i64,
}

/// A route through the graph, start and end inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<NodeId>,
    cost: i64,
}

impl Path {
    pub(crate) fn new(nodes: Vec<NodeId>, cost: i64) -> Self {
        Self { nodes, cost }
    }

    /// Nodes from start to end.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Sum of the edge weights along the path.
    #[inline]
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Number of nodes, endpoints included. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false. Kept to pair with `len` (clippy `len_without_is_empty`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl IntoIterator for Path {
    type Item = NodeId;
    type IntoIter = std::vec::IntoIter<NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Rebuild a path by following predecessor links back from `end`.
///
/// `prev` is indexed by [`NodeId::index`]; the walk stops at the first node
/// without a predecessor, which is the start of the search.
pub(crate) fn reconstruct(prev: &[Option<NodeId>], end: NodeId, cost: i64) -> Path {
    let mut nodes = vec![end];
    let mut cur = end;
    while let Some(p) = prev.get(cur.index()).copied().flatten() {
        nodes.push(p);
        cur = p;
    }
    nodes.reverse();
    Path::new(nodes, cost)
}
