//! Weighted undirected graphs for game maps.
//!
//! A [`Graph`] owns nodes carrying arbitrary payload values (waypoints,
//! rooms, tiles) joined by undirected edges with non-negative integer
//! weights. Nodes and edges are addressed by stable [`NodeId`] / [`EdgeId`]
//! handles; most operations also accept a payload value through
//! [`NodeKey`].
//!
//! - **BFS / DFS** traversals ([`Graph::bfs`], [`Graph::dfs`])
//! - **Dijkstra** shortest paths and cost maps
//!   ([`Graph::shortest_path_dijkstra`], [`Graph::dijkstra_map`])
//! - **A\*** shortest paths with a pluggable [`Heuristic`]
//!   ([`Graph::shortest_path_astar_with`])
//! - **Range queries** ([`Graph::farthest_nodes`],
//!   [`Graph::reachable_within_cost`])
//! - **Connected components** ([`Graph::components`])
//!
//! Nodes marked non-traversable are never entered by any search. Both
//! shortest-path searches report a missing route as
//! [`GraphError::Unreachable`].
//!
//! ```
//! use waygraph::Graph;
//!
//! let mut g = Graph::new();
//! for v in ["A", "B", "C", "D"] {
//!     g.add_node(v)?;
//! }
//! g.add_edge("A", "B", 1)?;
//! g.add_edge("B", "C", 2)?;
//! g.add_edge("C", "D", 4)?;
//!
//! let path = g.shortest_path_dijkstra("A", "D")?;
//! assert_eq!(path.cost(), 7);
//! assert_eq!(g.reachable_within_cost("A", 3)?.len(), 2);
//! # Ok::<(), waygraph::GraphError>(())
//! ```

mod arena;
mod astar;
mod bfs;
mod cc;
mod config;
mod dfs;
mod dijkstra;
mod distance;
mod edge;
mod error;
mod frontier;
mod graph;
mod heuristic;
mod key;
mod node;
mod path;
mod range;

#[cfg(test)]
mod properties;

pub use config::GraphConfig;
pub use distance::{chebyshev, manhattan};
pub use edge::{Edge, EdgeId};
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use heuristic::{Chebyshev, Heuristic, Manhattan, Spatial, ZeroHeuristic};
pub use key::NodeKey;
pub use node::{Node, NodeId};
pub use path::{Path, PathNode};
