//! Randomized cross-checks between the searches and a brute-force oracle.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::distance::manhattan;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::heuristic::Manhattan;
use crate::node::NodeId;

const ROUNDS: u64 = 200;

fn random_graph(rng: &mut StdRng, block: bool) -> Graph<usize> {
    let mut g = Graph::new();
    let n = rng.random_range(2..12usize);
    let ids: Vec<NodeId> = (0..n).map(|v| g.add_node(v).unwrap()).collect();
    let edges = rng.random_range(0..n * 2);
    for _ in 0..edges {
        let a = ids[rng.random_range(0..n)];
        let b = ids[rng.random_range(0..n)];
        if a == b || g.has_edge_between(a, b) {
            continue;
        }
        g.add_edge(a, b, rng.random_range(0..10)).unwrap();
    }
    if block {
        for &id in &ids {
            if rng.random_range(0..5) == 0 {
                g.become_untraversable(id).unwrap();
            }
        }
    }
    g
}

/// Minimum cost from `start` to every node by repeated relaxation, entering
/// only traversable nodes. `None` means unreachable.
fn oracle<V>(g: &Graph<V>, start: NodeId) -> Vec<Option<i64>> {
    let mut cost = vec![None; g.slot_count()];
    cost[start.index()] = Some(0);
    loop {
        let mut changed = false;
        for (_, edge) in g.edges() {
            let (a, b) = edge.endpoints();
            for (from, to) in [(a, b), (b, a)] {
                let Some(c) = cost[from.index()] else {
                    continue;
                };
                if !g.is_traversable(to) {
                    continue;
                }
                let t = c + i64::from(edge.weight());
                if cost[to.index()].is_none_or(|old| t < old) {
                    cost[to.index()] = Some(t);
                    changed = true;
                }
            }
        }
        if !changed {
            return cost;
        }
    }
}

fn path_weight<V>(g: &Graph<V>, nodes: &[NodeId]) -> i64 {
    nodes
        .windows(2)
        .map(|w| g.edge_weight(w[0], w[1]).expect("consecutive path nodes share an edge"))
        .map(i64::from)
        .sum()
}

#[test]
fn shortest_paths_match_oracle() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..ROUNDS {
        let g = random_graph(&mut rng, true);
        for &s in g.nodes() {
            let best = oracle(&g, s);
            for &t in g.nodes() {
                let dijkstra = g.shortest_path_dijkstra(s, t);
                let astar = g.shortest_path_astar(s, t);
                let expected = if s == t { Some(0) } else { best[t.index()] };
                match expected {
                    Some(cost) => {
                        let d = dijkstra.unwrap();
                        let a = astar.unwrap();
                        assert_eq!(d.cost(), cost);
                        assert_eq!(a.cost(), cost);
                        assert_eq!(path_weight(&g, d.nodes()), cost);
                        assert_eq!(path_weight(&g, a.nodes()), cost);
                        assert_eq!(d.start(), Some(s));
                        assert_eq!(d.end(), Some(t));
                    }
                    None => {
                        assert_eq!(dijkstra, Err(GraphError::Unreachable));
                        assert_eq!(astar, Err(GraphError::Unreachable));
                    }
                }
            }
        }
    }
}

/// Waypoints at random positions; every edge costs at least the Manhattan
/// distance between its endpoints, so `Manhattan::default()` is admissible.
fn random_spatial_graph(rng: &mut StdRng) -> Graph<[i32; 2]> {
    let mut g = Graph::new();
    let n = rng.random_range(2..14usize);
    let ids: Vec<NodeId> = (0..n)
        .map(|_| {
            let pos = [rng.random_range(0..8), rng.random_range(0..8)];
            g.add_node(pos).unwrap()
        })
        .collect();
    let edges = rng.random_range(0..n * 3);
    for _ in 0..edges {
        let a = ids[rng.random_range(0..n)];
        let b = ids[rng.random_range(0..n)];
        if a == b || g.has_edge_between(a, b) {
            continue;
        }
        let floor = manhattan(*g.value(a).unwrap(), *g.value(b).unwrap());
        g.add_edge(a, b, floor + rng.random_range(0..6)).unwrap();
    }
    for &id in &ids {
        if rng.random_range(0..6) == 0 {
            g.become_untraversable(id).unwrap();
        }
    }
    g
}

#[test]
fn astar_with_admissible_heuristics_is_optimal() {
    // Admissible but inconsistent: half the positions estimate zero, so
    // closed nodes can be improved later and must be reopened.
    let patchy = |p: &[i32; 2], q: &[i32; 2]| {
        if (p[0] + p[1]) % 2 == 0 {
            manhattan(*p, *q)
        } else {
            0
        }
    };
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..ROUNDS {
        let g = random_spatial_graph(&mut rng);
        for &s in g.nodes() {
            let best = oracle(&g, s);
            for &t in g.nodes() {
                let expected = if s == t { Some(0) } else { best[t.index()] };
                let results = [
                    g.shortest_path_astar_with(s, t, &Manhattan::default()),
                    g.shortest_path_astar_with(s, t, &patchy),
                ];
                for got in results {
                    match expected {
                        Some(cost) => {
                            let path = got.unwrap();
                            assert_eq!(path.cost(), cost);
                            assert_eq!(path_weight(&g, path.nodes()), cost);
                            assert_eq!(path.start(), Some(s));
                            assert_eq!(path.end(), Some(t));
                        }
                        None => assert_eq!(got, Err(GraphError::Unreachable)),
                    }
                }
            }
        }
    }
}

#[test]
fn reachable_within_cost_matches_oracle() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..ROUNDS {
        let g = random_graph(&mut rng, true);
        let start = g.nodes()[rng.random_range(0..g.len())];
        let budget = rng.random_range(0..25);
        let best = oracle(&g, start);

        let got: HashSet<NodeId> = g
            .reachable_within_cost(start, budget)
            .unwrap()
            .into_iter()
            .collect();
        let want: HashSet<NodeId> = g
            .nodes()
            .iter()
            .copied()
            .filter(|&n| n != start && best[n.index()].is_some_and(|c| c <= budget))
            .collect();
        assert_eq!(got, want);
    }
}

#[test]
fn traversals_cover_component_once() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..ROUNDS {
        let g = random_graph(&mut rng, false);
        for component in g.components() {
            let members: HashSet<NodeId> = component.iter().copied().collect();
            for &start in &component {
                let bfs = g.bfs(start).unwrap();
                let dfs = g.dfs(start).unwrap();
                assert_eq!(bfs.len(), members.len());
                assert_eq!(dfs.len(), members.len());
                assert_eq!(bfs.iter().copied().collect::<HashSet<_>>(), members);
                assert_eq!(dfs.iter().copied().collect::<HashSet<_>>(), members);
                assert_eq!(bfs[0], start);
                assert_eq!(dfs[0], start);
            }
        }
    }
}

#[test]
fn removal_leaves_no_dangling_edges() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..ROUNDS {
        let mut g = random_graph(&mut rng, false);
        let victim = g.nodes()[rng.random_range(0..g.len())];
        g.remove_node(victim).unwrap();

        assert!(!g.contains(victim));
        for (id, edge) in g.edges() {
            assert!(!edge.touches(victim));
            let (a, b) = edge.endpoints();
            assert!(g.node(a).unwrap().edges().contains(&id));
            assert!(g.node(b).unwrap().edges().contains(&id));
        }
        for (_, node) in g.iter() {
            for &e in node.edges() {
                assert!(g.edge(e).is_some());
            }
        }
    }
}

#[test]
fn farthest_nodes_hold_the_maximum_cost() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..ROUNDS {
        let g = random_graph(&mut rng, true);
        let source = g.nodes()[rng.random_range(0..g.len())];
        let best = oracle(&g, source);
        let max = g
            .nodes()
            .iter()
            .filter(|&&n| g.is_traversable(n))
            .filter_map(|n| best[n.index()])
            .max();

        let far = g.farthest_nodes([source]).unwrap();
        match max {
            Some(max) => {
                assert!(!far.is_empty());
                for n in far {
                    assert_eq!(best[n.index()], Some(max));
                }
            }
            None => assert!(far.is_empty()),
        }
    }
}
