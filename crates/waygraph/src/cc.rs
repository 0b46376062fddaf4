//! Connected-component labelling.

use crate::error::Result;
use crate::graph::Graph;
use crate::key::NodeKey;
use crate::node::NodeId;

impl<V> Graph<V> {
    /// Every node reachable from `start`, in breadth-first order.
    pub fn connected_component<K: NodeKey<V>>(&self, start: K) -> Result<Vec<NodeId>> {
        self.bfs(start)
    }

    /// Partition the graph into connected components.
    ///
    /// Components are listed in the insertion order of their first node.
    /// A non-traversable node cannot be entered, so it always forms a
    /// component of its own.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let mut labelled = vec![false; self.slot_count()];
        let mut stack: Vec<NodeId> = Vec::new();
        let mut out = Vec::new();

        for &start in self.nodes() {
            if labelled[start.index()] {
                continue;
            }
            labelled[start.index()] = true;
            let mut component = vec![start];

            // Only traversable nodes expand; a blocked seed stays alone.
            if self.is_traversable(start) {
                stack.clear();
                stack.push(start);
                while let Some(cur) = stack.pop() {
                    for (next, _) in self.neighbors(cur) {
                        if labelled[next.index()] || !self.is_traversable(next) {
                            continue;
                        }
                        labelled[next.index()] = true;
                        component.push(next);
                        stack.push(next);
                    }
                }
            }
            out.push(component);
        }
        out
    }

    /// Number of connected components.
    pub fn component_count(&self) -> usize {
        self.components().len()
    }
}
