use std::borrow::Borrow;

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::node::NodeId;

/// Anything that can name a node of a `Graph<V>`: a [`NodeId`] handle, or a
/// reference to a payload value.
///
/// Value keys resolve to the first live node holding an equal value, in
/// insertion order. On graphs with repeated values prefer handles.
pub trait NodeKey<V> {
    /// Resolve to a live node handle.
    fn locate(&self, graph: &Graph<V>) -> Result<NodeId>;
}

impl<V> NodeKey<V> for NodeId {
    fn locate(&self, graph: &Graph<V>) -> Result<NodeId> {
        if graph.contains(*self) {
            Ok(*self)
        } else {
            Err(GraphError::UnknownNode(*self))
        }
    }
}

impl<V, Q> NodeKey<V> for &Q
where
    V: Borrow<Q>,
    Q: PartialEq + ?Sized,
{
    fn locate(&self, graph: &Graph<V>) -> Result<NodeId> {
        graph.node_by_value(*self).ok_or(GraphError::NodeNotFound)
    }
}
