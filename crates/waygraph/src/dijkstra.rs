use std::collections::BinaryHeap;

use crate::error::{GraphError, Result};
use crate::frontier::{NodeRef, UNREACHED};
use crate::graph::Graph;
use crate::key::NodeKey;
use crate::node::NodeId;
use crate::path::{Path, PathNode, reconstruct};

/// Result of a multi-source cost expansion.
pub(crate) struct CostMap {
    /// Cost per node slot, [`UNREACHED`] where the expansion did not get.
    pub(crate) cost: Vec<i64>,
    /// Reached nodes in settlement order (non-decreasing cost).
    pub(crate) settled: Vec<PathNode>,
}

impl<V> Graph<V> {
    /// Shortest path from `start` to `end` using Dijkstra's algorithm.
    ///
    /// Non-traversable nodes are never entered, so a blocked `end` is
    /// unreachable. Returns [`GraphError::Unreachable`] when no path exists;
    /// `start == end` yields the one-node path with cost 0. Among equally
    /// cheap routes the one whose nodes were discovered first wins.
    pub fn shortest_path_dijkstra<A, B>(&self, start: A, end: B) -> Result<Path>
    where
        A: NodeKey<V>,
        B: NodeKey<V>,
    {
        let start = start.locate(self)?;
        let end = end.locate(self)?;

        if start == end {
            return Ok(Path::new(vec![start], 0));
        }
        if !self.is_traversable(end) {
            log::debug!("dijkstra: target {end} is not traversable");
            return Err(GraphError::Unreachable);
        }

        let len = self.slot_count();
        let mut dist = vec![UNREACHED; len];
        let mut prev: Vec<Option<NodeId>> = vec![None; len];
        let mut done = vec![false; len];

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        dist[start.index()] = 0;
        open.push(NodeRef {
            node: start,
            f: 0,
            seq,
        });

        while let Some(current) = open.pop() {
            let ci = current.node.index();
            // Skip stale entries.
            if done[ci] || current.f != dist[ci] {
                continue;
            }
            done[ci] = true;

            if current.node == end {
                return Ok(reconstruct(&prev, end, dist[ci]));
            }

            for (next, weight) in self.neighbors(current.node) {
                let ni = next.index();
                if done[ni] || !self.is_traversable(next) {
                    continue;
                }
                let tentative = dist[ci] + i64::from(weight);
                if tentative >= dist[ni] {
                    continue;
                }
                dist[ni] = tentative;
                prev[ni] = Some(current.node);
                seq += 1;
                open.push(NodeRef {
                    node: next,
                    f: tentative,
                    seq,
                });
            }
        }

        log::debug!("dijkstra: no path from {start} to {end}");
        Err(GraphError::Unreachable)
    }

    /// Compute a multi-source Dijkstra cost map.
    ///
    /// Every source starts at cost 0. Expansion stops when the cumulative
    /// cost exceeds `max_cost`. Returns all reached nodes, sources included,
    /// in order of non-decreasing cost.
    pub fn dijkstra_map<K, I>(&self, sources: I, max_cost: i64) -> Result<Vec<PathNode>>
    where
        K: NodeKey<V>,
        I: IntoIterator<Item = K>,
    {
        if max_cost < 0 {
            return Err(GraphError::NegativeCost(max_cost));
        }
        let sources = self.locate_all(sources)?;
        Ok(self.cost_map(&sources, max_cost).settled)
    }

    pub(crate) fn locate_all<K, I>(&self, keys: I) -> Result<Vec<NodeId>>
    where
        K: NodeKey<V>,
        I: IntoIterator<Item = K>,
    {
        keys.into_iter().map(|k| k.locate(self)).collect()
    }

    /// Multi-source expansion shared by the cost map and the range queries.
    /// Sources are seeded whatever their traversability; other nodes are
    /// entered only when traversable.
    pub(crate) fn cost_map(&self, sources: &[NodeId], max_cost: i64) -> CostMap {
        let len = self.slot_count();
        let mut cost = vec![UNREACHED; len];
        let mut done = vec![false; len];
        let mut settled = Vec::new();

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;

        for &src in sources {
            let si = src.index();
            if cost[si] == 0 {
                continue;
            }
            cost[si] = 0;
            open.push(NodeRef {
                node: src,
                f: 0,
                seq,
            });
            seq += 1;
        }

        while let Some(current) = open.pop() {
            let ci = current.node.index();
            if done[ci] || current.f != cost[ci] {
                continue;
            }
            done[ci] = true;
            settled.push(PathNode {
                node: current.node,
                cost: current.f,
            });

            for (next, weight) in self.neighbors(current.node) {
                let ni = next.index();
                if done[ni] || !self.is_traversable(next) {
                    continue;
                }
                let tentative = current.f + i64::from(weight);
                if tentative > max_cost || tentative >= cost[ni] {
                    continue;
                }
                cost[ni] = tentative;
                open.push(NodeRef {
                    node: next,
                    f: tentative,
                    seq,
                });
                seq += 1;
            }
        }

        CostMap { cost, settled }
    }
}
