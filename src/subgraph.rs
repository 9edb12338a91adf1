//! Induced subgraphs and ego-networks.
//!
//! Both operations return a new, independent [`Graph`]: weights and region attributes are copied
//! and mutating the result never affects the parent.

use tracing::debug;

use crate::{
    error::{GraphError, Result},
    graph::Graph,
};

impl Graph {
    /// Builds the subgraph induced by `labels`: the known labels plus every edge whose endpoints
    /// are both among them.
    ///
    /// Labels that aren't in the graph are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("a", "b", 1.0).unwrap();
    /// graph.add_edge("b", "c", 1.0).unwrap();
    /// graph.add_edge("a", "c", 1.0).unwrap();
    ///
    /// let sub = graph.induced_subgraph(["a", "b", "z"]);
    /// assert_eq!(sub.order(), 2);
    /// assert_eq!(sub.size(), 1);
    /// assert!(sub.edge_exists("a", "b"));
    /// ```
    pub fn induced_subgraph<I, S>(&self, labels: I) -> Graph
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let labels: Vec<S> = labels.into_iter().collect();
        let mut sub = Graph::new();

        for label in &labels {
            let label = label.as_ref();
            if self.contains(label) {
                sub.add_node(label, self.region(label));
            }
        }

        for label in &labels {
            let u = label.as_ref();

            // Only emit (u, v) with u < v so each undirected edge is added once.
            for v in self.neighbors(u) {
                if sub.contains(v) && u < v.as_str() {
                    sub.insert_edge(u, v, self.weight(u, v));
                }
            }
        }

        debug!(order = sub.order(), size = sub.size(), "built induced subgraph");

        sub
    }

    /// Builds the ego-network of `label`: the subgraph induced by the node and its neighbours.
    ///
    /// Unlike [`induced_subgraph`](Self::induced_subgraph), an unknown anchor is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::graph::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add_edge("a", "b", 1.0).unwrap();
    /// graph.add_edge("b", "c", 1.0).unwrap();
    /// graph.add_edge("c", "d", 1.0).unwrap();
    ///
    /// let ego = graph.ego_network("b").unwrap();
    /// assert_eq!(ego.order(), 3);
    /// assert_eq!(ego.size(), 2);
    ///
    /// assert!(graph.ego_network("z").is_err());
    /// ```
    pub fn ego_network(&self, label: &str) -> Result<Graph> {
        if !self.contains(label) {
            return Err(GraphError::UnknownNode(label.to_string()));
        }

        Ok(self.ego_of(label))
    }

    /// Ego-network of a node already known to be in the graph.
    pub(crate) fn ego_of(&self, label: &str) -> Graph {
        let members =
            std::iter::once(label).chain(self.neighbors(label).iter().map(String::as_str));

        self.induced_subgraph(members)
    }
}
