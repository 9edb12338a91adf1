//! Vicinity is a small toolkit for analysing neighbourhood adjacency graphs: undirected, weighted
//! graphs whose nodes are named places, optionally grouped into regions.
//!
//! # Basic usage
//!
//! The library is centered around the [`Graph`](graph::Graph) structure. Nodes are added with an
//! optional region, edges with a non-negative weight. Once constructed, structural metrics,
//! subgraphs, traversals and shortest paths can be computed from it.
//!
//! ```rust
//! use vicinity::{dijkstra::dijkstra, graph::Graph, traversal::bfs};
//!
//! // Construct the graph instance.
//! let mut graph = Graph::new();
//!
//! graph.add_node("Boa Vista", Some(1));
//! graph.add_node("Santo Amaro", Some(1));
//! graph.add_node("Soledade", Some(1));
//!
//! // Endpoints that weren't added beforehand are created without a region.
//! graph.add_edge("Boa Vista", "Santo Amaro", 1.0).unwrap();
//! graph.add_edge("Boa Vista", "Soledade", 2.0).unwrap();
//! graph.add_edge("Soledade", "Derby", 1.5).unwrap();
//!
//! // Compute some metrics on that state of the graph.
//! assert_eq!(graph.order(), 4);
//! assert_eq!(graph.size(), 3);
//! assert_eq!(graph.density(), 0.5);
//!
//! // Ego-networks and induced subgraphs are independent graphs.
//! let ego = graph.ego_network("Boa Vista").unwrap();
//! assert_eq!(ego.order(), 3);
//!
//! // Traverse and route.
//! let tree = bfs(&graph, "Santo Amaro").unwrap();
//! assert_eq!(tree.depth["Derby"], 3);
//!
//! let route = dijkstra(&graph, "Santo Amaro", "Derby");
//! assert_eq!(route.cost, 4.5);
//! assert_eq!(route.to_string(), "Santo Amaro -> Boa Vista -> Soledade -> Derby");
//! ```
//!
//! The engine is synchronous and does no I/O. Reading rows and writing reports is left to the
//! caller; see [`loader`] for the input records and [`report`] for the serializable outputs.

#[cfg(test)]
#[macro_use]
mod testing;

pub mod dijkstra;
pub mod edge;
pub mod error;
pub mod graph;
pub mod loader;
pub mod matrix;
pub mod metrics;
pub mod report;
mod subgraph;
pub mod traversal;

pub use error::{GraphError, Result};
