//! Populating a graph from row-oriented records.
//!
//! Readers (CSV, JSON, ...) deserialize rows into [`NodeRecord`]s and [`EdgeRecord`]s and hand
//! them to [`Graph::from_records`]. [`LoadOptions`] decides what happens to edge rows that name
//! nodes no node row declared.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::{GraphError, Result},
    graph::{Graph, DEFAULT_WEIGHT},
};

/// How edge rows referencing undeclared nodes are handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointPolicy {
    /// Create the missing endpoints without a region.
    #[default]
    Create,
    /// Drop the row and log a warning.
    Skip,
    /// Fail the whole load with [`GraphError::UnknownNode`].
    Reject,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoadOptions {
    #[serde(default)]
    pub endpoints: EndpointPolicy,
}

impl LoadOptions {
    pub fn new(endpoints: EndpointPolicy) -> Self {
        Self { endpoints }
    }
}

/// A node row: a label and an optional region id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeRecord {
    pub label: String,
    #[serde(default)]
    pub region: Option<u32>,
}

impl NodeRecord {
    pub fn new(label: impl Into<String>, region: Option<u32>) -> Self {
        Self {
            label: label.into(),
            region,
        }
    }
}

/// An edge row. A missing weight means [`DEFAULT_WEIGHT`].
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Option<f64>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

impl Graph {
    /// Builds a graph from node and edge rows.
    ///
    /// Node rows are applied first so their regions are set before edges reference them. Any
    /// invalid edge row (self-loop, negative or non-finite weight, or an undeclared endpoint
    /// under [`EndpointPolicy::Reject`]) fails the whole load.
    ///
    /// # Examples
    ///
    /// ```
    /// use vicinity::{
    ///     graph::Graph,
    ///     loader::{EdgeRecord, EndpointPolicy, LoadOptions, NodeRecord},
    /// };
    ///
    /// let nodes = vec![NodeRecord::new("a", Some(1)), NodeRecord::new("b", Some(1))];
    /// let edges = vec![
    ///     EdgeRecord::new("a", "b", Some(2.0)),
    ///     EdgeRecord::new("b", "c", None),
    /// ];
    ///
    /// let graph = Graph::from_records(
    ///     nodes.clone(),
    ///     edges.clone(),
    ///     &LoadOptions::new(EndpointPolicy::Skip),
    /// )
    /// .unwrap();
    /// assert_eq!(graph.order(), 2);
    /// assert_eq!(graph.size(), 1);
    ///
    /// let graph = Graph::from_records(nodes, edges, &LoadOptions::default()).unwrap();
    /// assert_eq!(graph.order(), 3);
    /// assert_eq!(graph.weight("b", "c"), 1.0);
    /// ```
    pub fn from_records<N, E>(nodes: N, edges: E, options: &LoadOptions) -> Result<Graph>
    where
        N: IntoIterator<Item = NodeRecord>,
        E: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = Graph::new();
        let mut skipped = 0usize;

        for node in nodes {
            graph.add_node(&node.label, node.region);
        }

        for edge in edges {
            let missing = [&edge.source, &edge.target]
                .into_iter()
                .find(|label| !graph.contains(label));

            if let Some(label) = missing {
                match options.endpoints {
                    EndpointPolicy::Create => {}
                    EndpointPolicy::Skip => {
                        warn!(
                            from = edge.source.as_str(),
                            to = edge.target.as_str(),
                            "skipping edge with undeclared endpoint"
                        );
                        skipped += 1;
                        continue;
                    }
                    EndpointPolicy::Reject => {
                        return Err(GraphError::UnknownNode(label.clone()));
                    }
                }
            }

            graph.add_edge(
                &edge.source,
                &edge.target,
                edge.weight.unwrap_or(DEFAULT_WEIGHT),
            )?;
        }

        debug!(
            order = graph.order(),
            size = graph.size(),
            skipped,
            "loaded graph from records"
        );

        Ok(graph)
    }
}

/// Groups node labels by region id, both in ascending order. Nodes without a region are left
/// out.
pub fn region_members(graph: &Graph) -> BTreeMap<u32, Vec<String>> {
    let mut members: BTreeMap<u32, Vec<String>> = BTreeMap::new();

    for label in graph.nodes() {
        if let Some(region) = graph.region(label) {
            members.entry(region).or_default().push(label.to_string());
        }
    }

    members
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<NodeRecord> {
        vec![
            NodeRecord::new("Boa Vista", Some(1)),
            NodeRecord::new("Santo Amaro", Some(1)),
            NodeRecord::new("Torre", Some(4)),
            NodeRecord::new("Madalena", Some(4)),
        ]
    }

    fn edges() -> Vec<EdgeRecord> {
        vec![
            EdgeRecord::new("Boa Vista", "Santo Amaro", Some(1.5)),
            EdgeRecord::new("Torre", "Madalena", None),
            EdgeRecord::new("Madalena", "Ilha do Retiro", Some(2.0)),
        ]
    }

    #[test]
    fn create_policy() {
        let graph = Graph::from_records(nodes(), edges(), &LoadOptions::default()).unwrap();

        assert_eq!(graph.order(), 5);
        assert_eq!(graph.size(), 3);
        assert_eq!(graph.region("Torre"), Some(4));
        assert_eq!(graph.region("Ilha do Retiro"), None);
        assert_eq!(graph.weight("Boa Vista", "Santo Amaro"), 1.5);
        assert_eq!(graph.weight("Torre", "Madalena"), DEFAULT_WEIGHT);
    }

    #[test]
    fn skip_policy() {
        let options = LoadOptions::new(EndpointPolicy::Skip);
        let graph = Graph::from_records(nodes(), edges(), &options).unwrap();

        assert_eq!(graph.order(), 4);
        assert_eq!(graph.size(), 2);
        assert!(!graph.contains("Ilha do Retiro"));
    }

    #[test]
    fn reject_policy() {
        let options = LoadOptions::new(EndpointPolicy::Reject);

        assert_eq!(
            Graph::from_records(nodes(), edges(), &options),
            Err(GraphError::UnknownNode("Ilha do Retiro".into()))
        );
    }

    #[test]
    fn invalid_edge_fails_load() {
        let edges = vec![EdgeRecord::new("Torre", "Torre", None)];

        assert_eq!(
            Graph::from_records(nodes(), edges, &LoadOptions::default()),
            Err(GraphError::SelfLoop("Torre".into()))
        );
    }

    #[test]
    fn later_node_rows_fill_regions() {
        let nodes = vec![NodeRecord::new("a", None), NodeRecord::new("a", Some(2))];

        let edges: Vec<EdgeRecord> = Vec::new();

        let graph = Graph::from_records(nodes, edges, &LoadOptions::default()).unwrap();

        assert_eq!(graph.region("a"), Some(2));
    }

    #[test]
    fn region_members() {
        let mut graph = Graph::from_records(nodes(), edges(), &LoadOptions::default()).unwrap();
        graph.add_node("Afogados", Some(5));

        let members = super::region_members(&graph);

        assert_eq!(members.keys().copied().collect::<Vec<_>>(), vec![1, 4, 5]);
        assert_eq!(members[&1], ["Boa Vista", "Santo Amaro"]);
        assert_eq!(members[&4], ["Madalena", "Torre"]);
        assert_eq!(members[&5], ["Afogados"]);
    }

    #[test]
    fn deserialize_options() {
        let options: LoadOptions = serde_json::from_str(r#"{"endpoints": "reject"}"#).unwrap();
        assert_eq!(options.endpoints, EndpointPolicy::Reject);

        let options: LoadOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.endpoints, EndpointPolicy::Create);
    }

    #[test]
    fn deserialize_records() {
        let node: NodeRecord = serde_json::from_str(r#"{"label": "Torre"}"#).unwrap();
        assert_eq!(node, NodeRecord::new("Torre", None));

        let edge: EdgeRecord =
            serde_json::from_str(r#"{"source": "Torre", "target": "Madalena", "weight": 0.8}"#)
                .unwrap();
        assert_eq!(edge, EdgeRecord::new("Torre", "Madalena", Some(0.8)));
    }
}
