//! Structural metrics over a graph and its subgraphs.
//!
//! Everything here is recomputed on each call, nothing is cached.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    graph::Graph,
    loader::region_members,
    report::{DegreeEntry, EgoMetrics, GraphMetrics, Rankings, RegionMetrics},
};

/// Returns the number of nodes.
pub fn order(graph: &Graph) -> usize {
    graph.order()
}

/// Returns the number of distinct undirected edges.
pub fn size(graph: &Graph) -> usize {
    graph.size()
}

/// Returns the number of neighbours of `label`, zero if it is unknown.
pub fn degree(graph: &Graph, label: &str) -> usize {
    graph.degree(label)
}

/// Returns `2 * size / (order * (order - 1))`, zero for fewer than two nodes.
pub fn density(graph: &Graph) -> f64 {
    graph.density()
}

/// Returns the order, size and density of the whole graph.
pub fn global_metrics(graph: &Graph) -> GraphMetrics {
    GraphMetrics::from(graph)
}

/// Returns the metrics of each region's induced subgraph, in ascending region order.
///
/// # Examples
///
/// ```
/// use vicinity::{graph::Graph, metrics::region_metrics};
///
/// let mut graph = Graph::new();
/// graph.add_node("a", Some(1));
/// graph.add_node("b", Some(1));
/// graph.add_node("c", Some(2));
/// graph.add_edge("a", "b", 1.0).unwrap();
/// graph.add_edge("b", "c", 1.0).unwrap();
///
/// let regions = region_metrics(&graph);
/// assert_eq!(regions.len(), 2);
/// assert_eq!((regions[0].region, regions[0].size), (1, 1));
/// assert_eq!((regions[1].region, regions[1].size), (2, 0));
/// ```
pub fn region_metrics(graph: &Graph) -> Vec<RegionMetrics> {
    region_members(graph)
        .into_iter()
        .map(|(region, members)| {
            let sub = graph.induced_subgraph(&members);

            RegionMetrics {
                region,
                order: sub.order(),
                size: sub.size(),
                density: sub.density(),
            }
        })
        .collect()
}

/// Returns each node's degree and ego-network metrics, highest degree first and ties in label
/// order.
pub fn ego_metrics(graph: &Graph) -> Vec<EgoMetrics> {
    let mut metrics: Vec<EgoMetrics> = graph
        .nodes()
        .map(|label| {
            let ego = graph.ego_of(label);

            EgoMetrics {
                label: label.to_string(),
                degree: graph.degree(label),
                ego_order: ego.order(),
                ego_size: ego.size(),
                ego_density: ego.density(),
            }
        })
        .collect();

    metrics.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.label.cmp(&b.label)));

    debug!(nodes = metrics.len(), "computed ego-network metrics");

    metrics
}

/// Returns every node's degree, highest first and ties in label order.
///
/// # Examples
///
/// ```
/// use vicinity::{graph::Graph, metrics::degree_table};
///
/// let mut graph = Graph::new();
/// graph.add_edge("b", "a", 1.0).unwrap();
/// graph.add_edge("b", "c", 1.0).unwrap();
///
/// let table = degree_table(&graph);
/// assert_eq!(table[0].label, "b");
/// assert_eq!(table[0].degree, 2);
/// assert_eq!(table[1].label, "a");
/// ```
pub fn degree_table(graph: &Graph) -> Vec<DegreeEntry> {
    let mut table: Vec<DegreeEntry> = graph
        .nodes()
        .map(|label| DegreeEntry {
            label: label.to_string(),
            degree: graph.degree(label),
        })
        .collect();

    table.sort_by(|a, b| b.degree.cmp(&a.degree).then_with(|| a.label.cmp(&b.label)));

    table
}

/// Returns how many nodes have each degree.
pub fn degree_distribution(graph: &Graph) -> BTreeMap<usize, usize> {
    let mut distribution = BTreeMap::new();

    for label in graph.nodes() {
        *distribution.entry(graph.degree(label)).or_insert(0) += 1;
    }

    distribution
}

/// Returns the node with the highest degree and the node whose ego-network is densest.
///
/// Ties on either go to the node that comes first by degree descending, then label. Both are
/// `None` for an empty graph.
pub fn rankings(graph: &Graph) -> Rankings {
    let highest_degree = degree_table(graph).into_iter().next();

    // Stable, so equal densities keep the degree-then-label order of `ego_metrics`.
    let mut egos = ego_metrics(graph);
    egos.sort_by(|a, b| b.ego_density.total_cmp(&a.ego_density));
    let densest_ego = egos.into_iter().next();

    Rankings {
        highest_degree,
        densest_ego,
    }
}

/// Returns the subgraph induced by the `k` highest-degree nodes.
///
/// A `k` of zero, or at least the order of the graph, keeps every node.
pub fn top_by_degree(graph: &Graph, k: usize) -> Graph {
    let table = degree_table(graph);
    let take = if k == 0 { table.len() } else { k };

    graph.induced_subgraph(table.iter().take(take).map(|entry| entry.label.as_str()))
}
