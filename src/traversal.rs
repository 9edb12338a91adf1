//! Breadth-first and depth-first traversals.
//!
//! Both follow each node's adjacency list in insertion order, so for a given sequence of edge
//! insertions the output is fully determined.

use std::collections::{BTreeMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::{
    error::{GraphError, Result},
    graph::Graph,
};

/// The breadth-first spanning tree of the component containing the source.
///
/// Nodes that can't be reached from the source are absent from all three fields.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BfsTree {
    /// Nodes in discovery order.
    pub order: Vec<String>,
    /// The node each node was discovered from, `None` for the source.
    pub parent: BTreeMap<String, Option<String>>,
    /// Hop distance from the source.
    pub depth: BTreeMap<String, usize>,
}

impl BfsTree {
    /// Returns the number of tree edges, i.e. nodes with a parent.
    pub fn tree_edges(&self) -> usize {
        self.parent.values().filter(|p| p.is_some()).count()
    }

    /// Groups the visited nodes by depth, each layer in discovery order. Nodes without a depth
    /// are left out.
    pub fn layers(&self) -> Vec<Vec<String>> {
        let mut layers: Vec<Vec<String>> = Vec::new();

        for node in &self.order {
            let Some(&depth) = self.depth.get(node) else {
                continue;
            };
            if layers.len() <= depth {
                layers.resize_with(depth + 1, Vec::new);
            }
            layers[depth].push(node.clone());
        }

        layers
    }
}

/// Runs a breadth-first search from `source`.
///
/// Ties within a layer are broken by the position of each node in its discoverer's adjacency
/// list.
///
/// # Examples
///
/// ```
/// use vicinity::{graph::Graph, traversal::bfs};
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 1.0).unwrap();
/// graph.add_edge("b", "c", 1.0).unwrap();
///
/// let tree = bfs(&graph, "a").unwrap();
/// assert_eq!(tree.order, ["a", "b", "c"]);
/// assert_eq!(tree.depth["c"], 2);
/// assert_eq!(tree.parent["c"].as_deref(), Some("b"));
/// ```
pub fn bfs(graph: &Graph, source: &str) -> Result<BfsTree> {
    if !graph.contains(source) {
        return Err(GraphError::UnknownNode(source.to_string()));
    }

    let mut tree = BfsTree::default();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();

    tree.order.push(source.to_string());
    tree.parent.insert(source.to_string(), None);
    tree.depth.insert(source.to_string(), 0);
    queue.push_back((source, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for next in graph.neighbors(current) {
            if tree.depth.contains_key(next) {
                continue;
            }

            tree.order.push(next.clone());
            tree.parent.insert(next.clone(), Some(current.to_string()));
            tree.depth.insert(next.clone(), depth + 1);
            queue.push_back((next.as_str(), depth + 1));
        }
    }

    debug!(source, visited = tree.order.len(), "bfs complete");

    Ok(tree)
}

/// Runs a depth-first search from `source` and returns the nodes in preorder.
///
/// Children are visited in adjacency order. The search uses an explicit stack rather than
/// recursion, so deep graphs can't overflow the call stack.
///
/// # Examples
///
/// ```
/// use vicinity::{graph::Graph, traversal::dfs};
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 1.0).unwrap();
/// graph.add_edge("a", "c", 1.0).unwrap();
/// graph.add_edge("b", "d", 1.0).unwrap();
///
/// assert_eq!(dfs(&graph, "a").unwrap(), ["a", "b", "d", "c"]);
/// ```
pub fn dfs(graph: &Graph, source: &str) -> Result<Vec<String>> {
    if !graph.contains(source) {
        return Err(GraphError::UnknownNode(source.to_string()));
    }

    let mut order = Vec::new();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![source];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.to_string());

        // Pushed in reverse so the first neighbour is popped first, matching recursive preorder.
        stack.extend(
            graph
                .neighbors(current)
                .iter()
                .rev()
                .map(String::as_str)
                .filter(|n| !visited.contains(n)),
        );
    }

    debug!(source, visited = order.len(), "dfs complete");

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    // a--b--d
    // |
    // c--e
    fn mini() -> Graph {
        graph!(["a", "b", "d"], ["a", "c", "e"])
    }

    #[test]
    fn bfs_layers_and_parents() {
        let tree = bfs(&mini(), "a").unwrap();

        assert_eq!(tree.order, ["a", "b", "c", "d", "e"]);
        assert_eq!(tree.parent["a"], None);
        assert_eq!(tree.depth["a"], 0);
        assert_eq!(tree.depth["b"], 1);
        assert_eq!(tree.depth["c"], 1);
        assert_eq!(tree.depth["d"], 2);
        assert_eq!(tree.parent["d"].as_deref(), Some("b"));
        assert_eq!(tree.depth["e"], 2);
        assert_eq!(tree.parent["e"].as_deref(), Some("c"));
    }

    #[test]
    fn bfs_is_a_spanning_tree() {
        let graph = graph!(["a", "b", "c", "d", "a"], ["b", "d"], ["c", "e"]);
        let tree = bfs(&graph, "c").unwrap();

        assert_eq!(tree.order.len(), graph.order());
        assert_eq!(tree.tree_edges(), tree.order.len() - 1);
    }

    #[test]
    fn bfs_follows_adjacency_order() {
        let mut graph = Graph::new();
        graph.add_edge("hub", "z", 1.0).unwrap();
        graph.add_edge("hub", "m", 1.0).unwrap();
        graph.add_edge("hub", "a", 1.0).unwrap();

        let tree = bfs(&graph, "hub").unwrap();
        assert_eq!(tree.order, ["hub", "z", "m", "a"]);
    }

    #[test]
    fn bfs_skips_unreachable() {
        let mut graph = graph!(["a", "b"], ["c", "d"]);
        graph.add_node("isolated", None);

        let tree = bfs(&graph, "a").unwrap();

        assert_eq!(tree.order, ["a", "b"]);
        assert!(!tree.parent.contains_key("c"));
        assert!(!tree.depth.contains_key("isolated"));
    }

    #[test]
    fn bfs_unknown_source() {
        assert_eq!(
            bfs(&mini(), "z"),
            Err(GraphError::UnknownNode("z".into()))
        );
    }

    #[test]
    fn bfs_layers() {
        let tree = bfs(&mini(), "a").unwrap();

        assert_eq!(
            tree.layers(),
            vec![vec!["a"], vec!["b", "c"], vec!["d", "e"]]
        );
    }

    #[test]
    fn layers_skip_nodes_without_depth() {
        let mut tree = BfsTree::default();
        tree.order = vec!["a".into(), "b".into()];
        tree.depth.insert("b".into(), 1);

        assert_eq!(tree.layers(), vec![vec![], vec!["b"]]);
    }

    #[test]
    fn dfs_preorder() {
        assert_eq!(dfs(&mini(), "a").unwrap(), ["a", "b", "d", "c", "e"]);
    }

    #[test]
    fn dfs_matches_recursive_preorder_with_cycles() {
        // a: [b, c], b: [a, c, d], c: [b, a], d: [b]
        let graph = graph!(["a", "b", "c", "a"], ["b", "d"]);

        assert_eq!(dfs(&graph, "a").unwrap(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn dfs_visits_every_connected_node_once() {
        let graph = graph!(["a", "b", "c", "d", "e", "a"], ["b", "e"], ["c", "f"]);

        let order = dfs(&graph, "d").unwrap();
        let unique: HashSet<&String> = order.iter().collect();

        assert_eq!(order.len(), graph.order());
        assert_eq!(unique.len(), order.len());
        assert_eq!(order[0], "d");
    }

    #[test]
    fn dfs_deep_path() {
        let labels: Vec<String> = (0..10_000).map(|i| format!("n{i}")).collect();
        let mut graph = Graph::new();
        for pair in labels.windows(2) {
            graph.add_edge(&pair[0], &pair[1], 1.0).unwrap();
        }

        assert_eq!(dfs(&graph, "n0").unwrap(), labels);
    }

    #[test]
    fn dfs_unknown_source() {
        assert_eq!(
            dfs(&mini(), "z"),
            Err(GraphError::UnknownNode("z".into()))
        );
    }
}
