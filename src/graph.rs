//! A module for working with graphs.

use std::collections::{BTreeMap, HashMap};

use tracing::trace;

use crate::{
    edge::Edge,
    error::{GraphError, Result},
};

/// The weight assumed for an edge inserted without one, and the weight reported for pairs that
/// have no stored weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Per-node state: the optional region attribute and the adjacency list.
#[derive(Clone, Debug, Default, PartialEq)]
struct Node {
    region: Option<u32>,
    /// Neighbours in insertion order. Traversals rely on this order.
    neighbors: Vec<String>,
}

/// An undirected, weighted graph keyed by string labels.
///
/// Adjacency is kept symmetric at all times: inserting `(u, v)` lists `v` under `u` and `u` under
/// `v`, once each.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    /// The nodes in the graph.
    ///
    /// The use of a `BTreeMap` keeps iteration in label order, which keeps every computation
    /// that walks the node set reproducible.
    nodes: BTreeMap<String, Node>,
    /// Edge weights, keyed by the canonical label pair.
    weights: HashMap<Edge, f64>,
}

impl Graph {
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::graph::Graph;
    ///
    /// let graph = Graph::new();
    /// assert_eq!(graph.order(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node if it is absent and returns whether it was inserted.
    ///
    /// If the node already exists, a `Some` region overwrites the stored one while `None` leaves
    /// it untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// assert!(graph.add_node("Boa Vista", None));
    /// assert!(!graph.add_node("Boa Vista", Some(1)));
    ///
    /// assert_eq!(graph.order(), 1);
    /// assert_eq!(graph.region("Boa Vista"), Some(1));
    /// ```
    pub fn add_node(&mut self, label: &str, region: Option<u32>) -> bool {
        match self.nodes.get_mut(label) {
            Some(node) => {
                if region.is_some() {
                    node.region = region;
                }

                false
            }
            None => {
                self.nodes.insert(
                    label.to_string(),
                    Node {
                        region,
                        neighbors: Vec::new(),
                    },
                );

                true
            }
        }
    }

    /// Inserts an undirected edge and returns whether the pair was new.
    ///
    /// Missing endpoints are created without a region. Re-inserting an existing pair only
    /// replaces its weight. Self-loops, negative and non-finite weights are rejected before the
    /// graph is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// assert_eq!(graph.add_edge("a", "b", 2.5), Ok(true));
    /// assert_eq!(graph.add_edge("b", "a", 4.0), Ok(false));
    ///
    /// assert_eq!(graph.size(), 1);
    /// assert_eq!(graph.weight("a", "b"), 4.0);
    /// assert!(graph.add_edge("a", "a", 1.0).is_err());
    /// ```
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) -> Result<bool> {
        validate_edge(u, v, weight)?;

        Ok(self.insert_edge(u, v, weight))
    }

    /// Inserts an edge that is already known to be valid, creating missing endpoints.
    pub(crate) fn insert_edge(&mut self, u: &str, v: &str, weight: f64) -> bool {
        debug_assert!(validate_edge(u, v, weight).is_ok());

        self.add_node(u, None);
        self.add_node(v, None);

        for (from, to) in [(u, v), (v, u)] {
            // Both endpoints were inserted above.
            if let Some(node) = self.nodes.get_mut(from) {
                if !node.neighbors.iter().any(|n| n == to) {
                    node.neighbors.push(to.to_string());
                }
            }
        }

        let previous = self.weights.insert(Edge::new(u, v), weight);
        if let Some(previous) = previous {
            trace!(u, v, previous, weight, "replaced edge weight");
        }

        previous.is_none()
    }

    /// Checks if the graph contains a node.
    pub fn contains(&self, label: &str) -> bool {
        self.nodes.contains_key(label)
    }

    /// Returns the region attribute of a node, `None` if the node is unknown or has none.
    pub fn region(&self, label: &str) -> Option<u32> {
        self.nodes.get(label).and_then(|node| node.region)
    }

    /// Returns the node labels in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Returns the edges and their weights, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (&Edge, f64)> {
        self.weights.iter().map(|(edge, weight)| (edge, *weight))
    }

    /// Returns the neighbours of a node in insertion order.
    ///
    /// Unknown and isolated nodes both yield an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("a", "b", 1.0).unwrap();
    /// graph.add_edge("a", "c", 1.0).unwrap();
    ///
    /// assert_eq!(graph.neighbors("a"), ["b", "c"]);
    /// assert!(graph.neighbors("z").is_empty());
    /// ```
    pub fn neighbors(&self, label: &str) -> &[String] {
        self.nodes
            .get(label)
            .map(|node| node.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the weight stored for the pair, or [`DEFAULT_WEIGHT`] if there is none.
    ///
    /// The default is returned whether or not the edge exists; use
    /// [`edge_exists`](Self::edge_exists) to tell the two apart.
    pub fn weight(&self, u: &str, v: &str) -> f64 {
        self.weights
            .get(&Edge::new(u, v))
            .copied()
            .unwrap_or(DEFAULT_WEIGHT)
    }

    /// Checks if the graph contains an edge between `u` and `v`, in either orientation.
    pub fn edge_exists(&self, u: &str, v: &str) -> bool {
        self.weights.contains_key(&Edge::new(u, v))
    }

    /// Returns the node count of the graph.
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct undirected edges.
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    /// Returns the number of neighbours of a node, zero if it is unknown.
    pub fn degree(&self, label: &str) -> usize {
        self.neighbors(label).len()
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// edges.
    ///
    /// Graphs with fewer than two nodes have a density of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// assert_eq!(graph.density(), 0.0);
    ///
    /// graph.add_edge("a", "b", 1.0).unwrap();
    /// assert_eq!(graph.density(), 1.0);
    ///
    /// graph.add_edge("a", "c", 1.0).unwrap();
    /// assert_eq!(graph.density(), 2.0 / 3.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.order() as f64;
        let ec = self.size() as f64;

        if self.order() < 2 {
            return 0.0;
        }

        // Actual edges divided by the possible edges gives the density.
        2.0 * ec / (vc * (vc - 1.0))
    }
}

/// Rejects self-loops and weights Dijkstra can't work with.
fn validate_edge(u: &str, v: &str, weight: f64) -> Result<()> {
    if u == v {
        return Err(GraphError::SelfLoop(u.to_string()));
    }

    if !weight.is_finite() {
        return Err(GraphError::NonFiniteWeight {
            from: u.to_string(),
            to: v.to_string(),
        });
    }

    if weight < 0.0 {
        return Err(GraphError::NegativeWeight {
            from: u.to_string(),
            to: v.to_string(),
            weight,
        });
    }

    Ok(())
}
