//! Range queries built on the multi-source cost expansion.

use crate::error::{GraphError, Result};
use crate::frontier::UNREACHED;
use crate::graph::Graph;
use crate::key::NodeKey;
use crate::node::NodeId;

impl<V> Graph<V> {
    /// Nodes farthest, by path cost, from the nearest of `sources`.
    ///
    /// Costs are measured to the closest source. Only traversable nodes that
    /// were actually reached count; nodes cut off from every source are
    /// ignored. Results are in insertion order.
    pub fn farthest_nodes<K, I>(&self, sources: I) -> Result<Vec<NodeId>>
    where
        K: NodeKey<V>,
        I: IntoIterator<Item = K>,
    {
        let sources = self.locate_all(sources)?;
        if sources.is_empty() {
            return Err(GraphError::EmptySources);
        }

        let map = self.cost_map(&sources, i64::MAX);
        let reached = |id: &NodeId| map.cost[id.index()] != UNREACHED && self.is_traversable(*id);

        let Some(max) = self
            .nodes()
            .iter()
            .filter(|id| reached(*id))
            .map(|id| map.cost[id.index()])
            .max()
        else {
            return Ok(Vec::new());
        };

        Ok(self
            .nodes()
            .iter()
            .copied()
            .filter(|id| reached(id) && map.cost[id.index()] == max)
            .collect())
    }

    /// Nodes whose cheapest path from `start` costs at most `max_cost`.
    ///
    /// `start` itself is excluded. Non-traversable nodes are never entered,
    /// so they and anything reachable only through them are left out.
    /// Results are ordered by increasing cost.
    pub fn reachable_within_cost<K: NodeKey<V>>(
        &self,
        start: K,
        max_cost: i64,
    ) -> Result<Vec<NodeId>> {
        if max_cost < 0 {
            return Err(GraphError::NegativeCost(max_cost));
        }
        let start = start.locate(self)?;
        let map = self.cost_map(&[start], max_cost);
        Ok(map
            .settled
            .into_iter()
            .map(|pn| pn.node)
            .filter(|&id| id != start)
            .collect())
    }
}
