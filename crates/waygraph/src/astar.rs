use std::collections::BinaryHeap;

use crate::error::{GraphError, Result};
use crate::frontier::{NodeRef, UNREACHED};
use crate::graph::Graph;
use crate::heuristic::{Heuristic, ZeroHeuristic};
use crate::key::NodeKey;
use crate::node::NodeId;
use crate::path::{Path, reconstruct};

impl<V> Graph<V> {
    /// Shortest path from `start` to `end` using A* with a zero heuristic.
    ///
    /// Same result contract as
    /// [`shortest_path_dijkstra`](Self::shortest_path_dijkstra).
    pub fn shortest_path_astar<A, B>(&self, start: A, end: B) -> Result<Path>
    where
        A: NodeKey<V>,
        B: NodeKey<V>,
    {
        self.shortest_path_astar_with(start, end, &ZeroHeuristic)
    }

    /// Compute the shortest path from `start` to `end` using A*.
    ///
    /// `heuristic` estimates the remaining cost from a node's value to the
    /// target's value; negative estimates are treated as 0. Non-traversable
    /// neighbors are never entered. Returns [`GraphError::Unreachable`] when
    /// the open set runs dry before reaching `end`.
    pub fn shortest_path_astar_with<A, B, H>(
        &self,
        start: A,
        end: B,
        heuristic: &H,
    ) -> Result<Path>
    where
        A: NodeKey<V>,
        B: NodeKey<V>,
        H: Heuristic<V> + ?Sized,
    {
        let start = start.locate(self)?;
        let end = end.locate(self)?;

        if start == end {
            return Ok(Path::new(vec![start], 0));
        }
        if !self.is_traversable(end) {
            log::debug!("astar: target {end} is not traversable");
            return Err(GraphError::Unreachable);
        }
        let Some(goal) = self.value(end) else {
            return Err(GraphError::UnknownNode(end));
        };
        let estimate = |n: NodeId| -> i64 {
            self.value(n)
                .map_or(0, |v| i64::from(heuristic.estimate(v, goal).max(0)))
        };

        let len = self.slot_count();
        let mut g_score = vec![UNREACHED; len];
        let mut f_score = vec![UNREACHED; len];
        let mut came_from: Vec<Option<NodeId>> = vec![None; len];
        let mut closed = vec![false; len];

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        let mut seq: u64 = 0;
        g_score[start.index()] = 0;
        f_score[start.index()] = estimate(start);
        open.push(NodeRef {
            node: start,
            f: f_score[start.index()],
            seq,
        });

        while let Some(current) = open.pop() {
            let ci = current.node.index();
            // Skip stale entries.
            if closed[ci] || current.f != f_score[ci] {
                continue;
            }

            if current.node == end {
                return Ok(reconstruct(&came_from, end, g_score[ci]));
            }
            closed[ci] = true;

            for (next, weight) in self.neighbors(current.node) {
                let ni = next.index();
                if !self.is_traversable(next) {
                    continue;
                }
                let tentative_g = g_score[ci] + i64::from(weight);
                if tentative_g >= g_score[ni] {
                    continue;
                }

                came_from[ni] = Some(current.node);
                g_score[ni] = tentative_g;
                f_score[ni] = tentative_g + estimate(next);
                // An inconsistent heuristic may improve a closed node; reopen it.
                closed[ni] = false;
                seq += 1;
                open.push(NodeRef {
                    node: next,
                    f: f_score[ni],
                    seq,
                });
            }
        }

        log::debug!("astar: no path from {start} to {end}");
        Err(GraphError::Unreachable)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphError;
    use crate::graph::Graph;
    use crate::heuristic::Manhattan;
    use crate::node::NodeId;

    fn path_graph() -> (Graph<&'static str>, [NodeId; 4]) {
        let mut g = Graph::new();
        let a = g.add_node("A").unwrap();
        let b = g.add_node("B").unwrap();
        let c = g.add_node("C").unwrap();
        let d = g.add_node("D").unwrap();
        g.add_edge(a, b, 1).unwrap();
        g.add_edge(b, c, 2).unwrap();
        g.add_edge(c, d, 4).unwrap();
        (g, [a, b, c, d])
    }

    #[test]
    fn zero_heuristic_matches_dijkstra() {
        let (g, [a, b, c, d]) = path_graph();
        let astar = g.shortest_path_astar(a, d).unwrap();
        let dijkstra = g.shortest_path_dijkstra(a, d).unwrap();
        assert_eq!(astar.nodes(), &[a, b, c, d]);
        assert_eq!(astar.cost(), 7);
        assert_eq!(astar, dijkstra);
    }

    #[test]
    fn disconnected_is_unreachable() {
        let mut g = Graph::new();
        g.add_node("A").unwrap();
        g.add_node("B").unwrap();
        assert_eq!(g.shortest_path_astar("A", "B"), Err(GraphError::Unreachable));
    }

    #[test]
    fn same_start_and_end() {
        let (g, [_, b, ..]) = path_graph();
        let path = g.shortest_path_astar(b, b).unwrap();
        assert_eq!(path.nodes(), &[b]);
        assert_eq!(path.cost(), 0);
    }

    #[test]
    fn blocked_neighbor_is_skipped() {
        let (mut g, [a, b, _, d]) = path_graph();
        g.become_untraversable(b).unwrap();
        assert_eq!(g.shortest_path_astar(a, d), Err(GraphError::Unreachable));
    }

    // 3x3 grid of waypoints with unit edges; the centre is a wall.
    fn grid() -> Graph<(i32, i32)> {
        let mut g = Graph::new();
        for y in 0..3 {
            for x in 0..3 {
                g.add_node((x, y)).unwrap();
            }
        }
        for y in 0..3 {
            for x in 0..3 {
                if x + 1 < 3 {
                    g.add_edge(&(x, y), &(x + 1, y), 1).unwrap();
                }
                if y + 1 < 3 {
                    g.add_edge(&(x, y), &(x, y + 1), 1).unwrap();
                }
            }
        }
        g.become_untraversable(&(1, 1)).unwrap();
        g
    }

    #[test]
    fn manhattan_heuristic_on_grid() {
        let g = grid();
        let path = g
            .shortest_path_astar_with(&(0, 1), &(2, 1), &Manhattan::default())
            .unwrap();
        assert_eq!(path.cost(), 4);
        assert_eq!(path.len(), 5);
        let centre = g.node_by_value(&(1, 1)).unwrap();
        assert!(!path.nodes().contains(&centre));
        let dijkstra = g.shortest_path_dijkstra(&(0, 1), &(2, 1)).unwrap();
        assert_eq!(dijkstra.cost(), path.cost());
    }

    #[test]
    fn closure_heuristic() {
        let g = grid();
        let h = |a: &(i32, i32), b: &(i32, i32)| (a.0 - b.0).abs().max((a.1 - b.1).abs());
        let path = g.shortest_path_astar_with(&(0, 0), &(2, 2), &h).unwrap();
        assert_eq!(path.cost(), 4);
    }

    #[test]
    fn costs_past_i32_range() {
        let mut g = Graph::new();
        let x = g.add_node("X").unwrap();
        let y = g.add_node("Y").unwrap();
        let z = g.add_node("Z").unwrap();
        g.add_edge(x, y, i32::MAX - 1).unwrap();
        g.add_edge(y, z, 5).unwrap();

        let path = g.shortest_path_astar(x, y).unwrap();
        assert_eq!(path.cost(), i64::from(i32::MAX - 1));
        let h = |_: &&str, _: &&str| i32::MAX;
        let path = g.shortest_path_astar_with(x, z, &h).unwrap();
        assert_eq!(path.nodes(), &[x, y, z]);
        assert_eq!(path.cost(), i64::from(i32::MAX) + 4);
    }

    #[test]
    fn negative_estimates_are_clamped() {
        let (g, [a, _, _, d]) = path_graph();
        let h = |_: &&str, _: &&str| -100;
        let path = g.shortest_path_astar_with(a, d, &h).unwrap();
        assert_eq!(path.cost(), 7);
    }
}
