use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::Graph;
use crate::key::NodeKey;
use crate::node::{Node, NodeId};

impl<V> Graph<V> {
    /// Breadth-first traversal from `start`, returning the visit order.
    ///
    /// The start node is always visited. Non-traversable neighbors are never
    /// entered. Nodes at the same depth are visited in edge-list order.
    pub fn bfs<K: NodeKey<V>>(&self, start: K) -> Result<Vec<NodeId>> {
        let mut order = Vec::new();
        self.bfs_with(start, |id, _| order.push(id))?;
        Ok(order)
    }

    /// Breadth-first traversal calling `visit` on each node as it is
    /// dequeued.
    pub fn bfs_with<K, F>(&self, start: K, mut visit: F) -> Result<()>
    where
        K: NodeKey<V>,
        F: FnMut(NodeId, &Node<V>),
    {
        let start = start.locate(self)?;

        let mut visited = vec![false; self.slot_count()];
        let mut queue: VecDeque<NodeId> = VecDeque::new();
        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(cur) = queue.pop_front() {
            let Some(node) = self.node(cur) else {
                continue;
            };
            log::trace!("bfs visit {cur}");
            visit(cur, node);

            for (next, _) in self.neighbors(cur) {
                // Marked on enqueue so a node is never queued twice.
                if visited[next.index()] || !self.is_traversable(next) {
                    continue;
                }
                visited[next.index()] = true;
                queue.push_back(next);
            }
        }
        Ok(())
    }
}
