use crate::error::Result;
use crate::graph::Graph;
use crate::key::NodeKey;
use crate::node::{Node, NodeId};

impl<V> Graph<V> {
    /// Depth-first traversal from `start`, returning the visit order.
    ///
    /// Pre-order: a node is visited before any of its neighbors, and
    /// neighbors are explored in edge-list order. Uses an explicit stack, so
    /// long chains do not grow the call stack.
    pub fn dfs<K: NodeKey<V>>(&self, start: K) -> Result<Vec<NodeId>> {
        let mut order = Vec::new();
        self.dfs_with(start, |id, _| order.push(id))?;
        Ok(order)
    }

    /// Depth-first traversal calling `visit` on each node in pre-order.
    pub fn dfs_with<K, F>(&self, start: K, mut visit: F) -> Result<()>
    where
        K: NodeKey<V>,
        F: FnMut(NodeId, &Node<V>),
    {
        let start = start.locate(self)?;

        let mut visited = vec![false; self.slot_count()];
        // (node, position of the next edge to explore in its edge list)
        let mut stack: Vec<(NodeId, usize)> = Vec::new();

        visited[start.index()] = true;
        if let Some(node) = self.node(start) {
            log::trace!("dfs visit {start}");
            visit(start, node);
        }
        stack.push((start, 0));

        while let Some(top) = stack.last_mut() {
            let (cur, cursor) = *top;
            let Some(&edge_id) = self.node(cur).and_then(|n| n.edges.get(cursor)) else {
                stack.pop();
                continue;
            };
            top.1 += 1;

            let Some(edge) = self.edge(edge_id) else {
                continue;
            };
            let next = edge.other(cur);
            if visited[next.index()] || !self.is_traversable(next) {
                continue;
            }
            visited[next.index()] = true;
            if let Some(node) = self.node(next) {
                log::trace!("dfs visit {next}");
                visit(next, node);
            }
            stack.push((next, 0));
        }
        Ok(())
    }
}
