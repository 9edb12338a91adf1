//! Serializable result records.
//!
//! These are the shapes external writers turn into JSON or delimited text. Field names and file
//! layout are left to them.

use serde::Serialize;

use crate::{dijkstra::dijkstra, graph::Graph};

/// Order, size and density of a whole graph.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphMetrics {
    pub order: usize,
    pub size: usize,
    pub density: f64,
}

impl From<&Graph> for GraphMetrics {
    fn from(graph: &Graph) -> Self {
        Self {
            order: graph.order(),
            size: graph.size(),
            density: graph.density(),
        }
    }
}

/// Metrics of the subgraph induced by one region's nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionMetrics {
    pub region: u32,
    pub order: usize,
    pub size: usize,
    pub density: f64,
}

/// A node's degree alongside the metrics of its ego-network.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EgoMetrics {
    pub label: String,
    pub degree: usize,
    pub ego_order: usize,
    pub ego_size: usize,
    pub ego_density: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DegreeEntry {
    pub label: String,
    pub degree: usize,
}

/// The best-connected node and the node with the densest ego-network.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rankings {
    pub highest_degree: Option<DegreeEntry>,
    pub densest_ego: Option<EgoMetrics>,
}

/// A shortest path shaped for serialization.
///
/// `cost` is `None` when there is no path, since JSON has no infinity.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteReport {
    pub origin: String,
    pub destination: String,
    pub cost: Option<f64>,
    pub path: Vec<String>,
}

/// Computes the cheapest route between two nodes and wraps it in a [`RouteReport`].
///
/// # Examples
///
/// ```
/// use vicinity::{graph::Graph, report::route};
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 1.5).unwrap();
/// graph.add_node("c", None);
///
/// assert_eq!(route(&graph, "a", "b").cost, Some(1.5));
/// assert_eq!(route(&graph, "a", "c").cost, None);
/// ```
pub fn route(graph: &Graph, origin: &str, destination: &str) -> RouteReport {
    let shortest = dijkstra(graph, origin, destination);

    RouteReport {
        origin: origin.to_string(),
        destination: destination.to_string(),
        cost: shortest.is_reachable().then_some(shortest.cost),
        path: shortest.path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_metrics_from_graph() {
        let graph = graph!(["a", "b", "c"]);

        assert_eq!(
            GraphMetrics::from(&graph),
            GraphMetrics {
                order: 3,
                size: 2,
                density: 2.0 / 3.0
            }
        );
    }

    #[test]
    fn route_reachable() {
        let graph = weighted_graph![("A", "B", 1.0), ("B", "C", 2.0), ("A", "C", 5.0)];

        assert_eq!(
            route(&graph, "A", "C"),
            RouteReport {
                origin: "A".into(),
                destination: "C".into(),
                cost: Some(3.0),
                path: vec!["A".into(), "B".into(), "C".into()],
            }
        );
    }

    #[test]
    fn route_unreachable_has_no_cost() {
        let mut graph = graph!(["A", "B"]);
        graph.add_node("D", None);

        let report = route(&graph, "A", "D");

        assert_eq!(report.cost, None);
        assert!(report.path.is_empty());
    }
}
