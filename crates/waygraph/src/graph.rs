//! The [`Graph`] container: node and edge storage, mutation and lookup.

use std::borrow::Borrow;

use crate::arena::Arena;
use crate::config::GraphConfig;
use crate::edge::{Edge, EdgeId};
use crate::error::{GraphError, Result};
use crate::key::NodeKey;
use crate::node::{Node, NodeId};

/// An undirected graph with non-negative integer edge weights.
///
/// The graph exclusively owns its nodes and edges. Callers hold
/// [`NodeId`] / [`EdgeId`] handles; removing a node or edge invalidates
/// its handle. Search algorithms live in sibling modules as further
/// `impl` blocks and keep all of their bookkeeping local to one call.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    nodes: Arena<Node<V>>,
    edges: Arena<Edge>,
    order: Vec<NodeId>,
    config: GraphConfig,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V> {
    /// Create an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph with the given configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            nodes: Arena::with_capacity(config.initial_capacity),
            edges: Arena::with_capacity(config.initial_capacity),
            order: Vec::with_capacity(config.initial_capacity),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Remove every node and edge. All outstanding handles become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.order.clear();
        log::debug!("graph cleared");
    }

    // -----------------------------------------------------------------------
    // Edges
    // -----------------------------------------------------------------------

    /// Connect two nodes with an undirected edge of the given weight.
    ///
    /// Either endpoint may be given as a handle or as a value. Nothing is
    /// created when an endpoint cannot be resolved or `weight` is negative.
    pub fn add_edge<A, B>(&mut self, a: A, b: B, weight: i32) -> Result<EdgeId>
    where
        A: NodeKey<V>,
        B: NodeKey<V>,
    {
        let a = a.locate(self)?;
        let b = b.locate(self)?;
        if weight < 0 {
            return Err(GraphError::NegativeWeight(weight));
        }

        let (index, generation) = self.edges.insert(Edge { a, b, weight });
        let id = EdgeId::new(index, generation);
        self.attach(a, id);
        if b != a {
            self.attach(b, id);
        }
        log::debug!("added edge {id} between {a} and {b} (weight {weight})");
        Ok(id)
    }

    /// Remove an edge by handle, detaching it from both endpoints.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge> {
        let edge = self
            .edges
            .remove(id.index, id.generation)
            .ok_or(GraphError::UnknownEdge(id))?;
        for end in [edge.a, edge.b] {
            if let Some(node) = self.nodes.get_mut(end.index, end.generation) {
                node.detach(id);
            }
        }
        log::debug!("removed edge {id} between {} and {}", edge.a, edge.b);
        Ok(edge)
    }

    /// Remove the edge joining `a` and `b`.
    ///
    /// Fails with [`GraphError::EdgeNotFound`] and leaves the graph untouched
    /// when the nodes are not adjacent.
    pub fn remove_edge_between<A, B>(&mut self, a: A, b: B) -> Result<Edge>
    where
        A: NodeKey<V>,
        B: NodeKey<V>,
    {
        let a = a.locate(self)?;
        let b = b.locate(self)?;
        match self.find_edge(a, b) {
            Some(id) => self.remove_edge(id),
            None => {
                log::warn!("no edge between {a} and {b} to remove");
                Err(GraphError::EdgeNotFound)
            }
        }
    }

    /// The edge joining `a` and `b`, if any. With parallel edges the first
    /// one in `a`'s edge list is returned.
    pub fn edge_between<A, B>(&self, a: A, b: B) -> Option<EdgeId>
    where
        A: NodeKey<V>,
        B: NodeKey<V>,
    {
        let a = a.locate(self).ok()?;
        let b = b.locate(self).ok()?;
        self.find_edge(a, b)
    }

    /// Whether `a` and `b` are directly connected.
    pub fn has_edge_between<A, B>(&self, a: A, b: B) -> bool
    where
        A: NodeKey<V>,
        B: NodeKey<V>,
    {
        self.edge_between(a, b).is_some()
    }

    /// Weight of the edge joining `a` and `b`, if any.
    pub fn edge_weight<A, B>(&self, a: A, b: B) -> Option<i32>
    where
        A: NodeKey<V>,
        B: NodeKey<V>,
    {
        let id = self.edge_between(a, b)?;
        self.edge(id).map(Edge::weight)
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index, id.generation)
    }

    /// Every live edge, in storage order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges
            .iter()
            .map(|(i, generation, e)| (EdgeId::new(i, generation), e))
    }

    fn find_edge(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        let node = self.node(a)?;
        node.edges
            .iter()
            .copied()
            .find(|&e| self.edge(e).is_some_and(|edge| edge.connects(a, b)))
    }

    fn attach(&mut self, n: NodeId, edge: EdgeId) {
        if let Some(node) = self.nodes.get_mut(n.index, n.generation) {
            node.attach(edge);
        }
    }

    // -----------------------------------------------------------------------
    // Nodes
    // -----------------------------------------------------------------------

    /// Remove a node and every edge touching it, returning its payload.
    pub fn remove_node<K: NodeKey<V>>(&mut self, key: K) -> Result<V> {
        let id = key.locate(self)?;
        let incident = self
            .node(id)
            .map(|n| n.edges.clone())
            .unwrap_or_default();
        for edge in incident {
            self.remove_edge(edge)?;
        }
        let node = self
            .nodes
            .remove(id.index, id.generation)
            .ok_or(GraphError::UnknownNode(id))?;
        if let Some(pos) = self.order.iter().position(|&n| n == id) {
            self.order.remove(pos);
        }
        log::debug!("removed node {id}");
        Ok(node.value)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id.index, id.generation)
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        self.nodes.get_mut(id.index, id.generation)
    }

    /// Payload of a node.
    #[inline]
    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.node(id).map(Node::value)
    }

    /// Whether `id` names a live node of this graph.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// First node, in insertion order, whose value equals `value`.
    pub fn node_by_value<Q>(&self, value: &Q) -> Option<NodeId>
    where
        V: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let found = self
            .iter()
            .find(|(_, node)| Borrow::<Q>::borrow(&node.value) == value)
            .map(|(id, _)| id);
        if found.is_none() {
            log::warn!("no node holds the requested value");
        }
        found
    }

    /// Resolve any key to a live node handle.
    #[inline]
    pub fn locate<K: NodeKey<V>>(&self, key: K) -> Result<NodeId> {
        key.locate(self)
    }

    /// All node handles in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.order
    }

    /// All nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<V>)> {
        self.order
            .iter()
            .filter_map(|&id| self.node(id).map(|node| (id, node)))
    }

    /// Adjacent nodes of `id` with the connecting edge weight, in edge-list
    /// order. Empty for an unknown handle.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, i32)> + '_ {
        self.node(id).into_iter().flat_map(move |node| {
            node.edges
                .iter()
                .filter_map(move |&e| self.edge(e).map(|edge| (edge.other(id), edge.weight)))
        })
    }

    pub fn become_traversable<K: NodeKey<V>>(&mut self, key: K) -> Result<()> {
        self.set_traversable(key, true)
    }

    pub fn become_untraversable<K: NodeKey<V>>(&mut self, key: K) -> Result<()> {
        self.set_traversable(key, false)
    }

    fn set_traversable<K: NodeKey<V>>(&mut self, key: K, traversable: bool) -> Result<()> {
        let id = key.locate(self)?;
        let node = self.node_mut(id).ok_or(GraphError::UnknownNode(id))?;
        node.set_traversable(traversable);
        log::debug!("node {id} traversable = {traversable}");
        Ok(())
    }

    /// Whether searches may enter `id`. False for unknown handles.
    #[inline]
    pub fn is_traversable(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_traversable)
    }

    // -----------------------------------------------------------------------
    // Helpers for the search modules
    // -----------------------------------------------------------------------

    /// Upper bound on `NodeId::index()` of any live node; sizes the flat
    /// per-call tables used by the searches.
    #[inline]
    pub(crate) fn slot_count(&self) -> usize {
        self.nodes.slot_count()
    }
}

impl<V: PartialEq> Graph<V> {
    /// Add a traversable node holding `value`.
    ///
    /// Fails with [`GraphError::DuplicateValue`] only when the graph was
    /// configured with [`GraphConfig::unique_values`].
    pub fn add_node(&mut self, value: V) -> Result<NodeId> {
        if self.config.unique_values && self.iter().any(|(_, n)| n.value == value) {
            return Err(GraphError::DuplicateValue);
        }
        let (index, generation) = self.nodes.insert(Node::new(value));
        let id = NodeId::new(index, generation);
        self.order.push(id);
        log::debug!("added node {id}");
        Ok(id)
    }

    /// Replace the payload of a node, returning the old one.
    ///
    /// Under [`GraphConfig::unique_values`], a value held by another live
    /// node is rejected with [`GraphError::DuplicateValue`] and nothing
    /// changes.
    pub fn set_value<K: NodeKey<V>>(&mut self, key: K, value: V) -> Result<V> {
        let id = key.locate(self)?;
        if self.config.unique_values
            && self.iter().any(|(other, n)| other != id && n.value == value)
        {
            return Err(GraphError::DuplicateValue);
        }
        let node = self.node_mut(id).ok_or(GraphError::UnknownNode(id))?;
        log::debug!("replaced value of node {id}");
        Ok(std::mem::replace(&mut node.value, value))
    }
}
