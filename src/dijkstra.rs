//! Weighted single-pair shortest paths.

use std::{
    cmp::{Ordering, Reverse},
    collections::{BinaryHeap, HashMap},
    fmt,
};

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, trace};

use crate::{edge::Edge, graph::Graph};

/// The cheapest route between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShortestPath {
    /// Sum of the edge weights along the path, `f64::INFINITY` if there is no path.
    pub cost: f64,
    /// The route from origin to destination inclusive, empty if there is no path.
    pub path: Vec<String>,
}

impl ShortestPath {
    fn unreachable() -> Self {
        Self {
            cost: f64::INFINITY,
            path: Vec::new(),
        }
    }

    /// Returns whether a path was found.
    pub fn is_reachable(&self) -> bool {
        self.cost.is_finite()
    }

    /// Returns the number of edges on the path.
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Returns the edges traversed, in path order.
    pub fn edges(&self) -> Vec<Edge> {
        self.path
            .iter()
            .tuple_windows()
            .map(|(a, b)| Edge::new(a.as_str(), b.as_str()))
            .collect()
    }

    /// Splits the result into `(cost, path)`.
    pub fn into_parts(self) -> (f64, Vec<String>) {
        (self.cost, self.path)
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.iter().join(" -> "))
    }
}

/// Min-heap entry, ordered by tentative cost and then by label so equal costs pop
/// deterministically.
#[derive(Debug, Clone, PartialEq)]
struct HeapEntry<'a> {
    cost: f64,
    label: &'a str,
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.label.cmp(other.label))
    }
}

/// Finds the cheapest path from `origin` to `destination` with Dijkstra's algorithm.
///
/// Unknown endpoints and disconnected pairs yield a cost of `f64::INFINITY` and an empty path
/// rather than an error. Weights are assumed non-negative, which [`Graph::add_edge`] enforces.
///
/// # Examples
///
/// ```
/// use vicinity::{dijkstra::dijkstra, graph::Graph};
///
/// let mut graph = Graph::new();
/// graph.add_edge("A", "B", 1.0).unwrap();
/// graph.add_edge("B", "C", 2.0).unwrap();
/// graph.add_edge("A", "C", 5.0).unwrap();
///
/// let route = dijkstra(&graph, "A", "C");
/// assert_eq!(route.cost, 3.0);
/// assert_eq!(route.path, ["A", "B", "C"]);
/// assert_eq!(route.to_string(), "A -> B -> C");
/// ```
pub fn dijkstra(graph: &Graph, origin: &str, destination: &str) -> ShortestPath {
    if !graph.contains(origin) || !graph.contains(destination) {
        debug!(origin, destination, "unknown endpoint, no path");
        return ShortestPath::unreachable();
    }

    let mut dist: HashMap<&str, f64> = HashMap::new();
    let mut parent: HashMap<&str, &str> = HashMap::new();
    let mut heap = BinaryHeap::new();

    dist.insert(origin, 0.0);
    heap.push(Reverse(HeapEntry {
        cost: 0.0,
        label: origin,
    }));

    while let Some(Reverse(HeapEntry { cost, label: u })) = heap.pop() {
        // The same node may be queued several times with improving costs, skip the stale ones.
        if cost > dist.get(u).copied().unwrap_or(f64::INFINITY) {
            continue;
        }

        // Non-negative weights mean nothing left in the heap can improve on this.
        if u == destination {
            break;
        }

        for v in graph.neighbors(u) {
            let candidate = cost + graph.weight(u, v);

            if candidate < dist.get(v.as_str()).copied().unwrap_or(f64::INFINITY) {
                trace!(from = u, to = v.as_str(), cost = candidate, "relaxed");

                dist.insert(v, candidate);
                parent.insert(v, u);
                heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    label: v,
                }));
            }
        }
    }

    let Some(&cost) = dist.get(destination) else {
        debug!(origin, destination, "destination unreachable");
        return ShortestPath::unreachable();
    };

    // Walk the parent pointers back from the destination; the origin has no parent.
    let mut path = vec![destination.to_string()];
    let mut current = destination;
    while let Some(&previous) = parent.get(current) {
        path.push(previous.to_string());
        current = previous;
    }
    path.reverse();

    debug!(origin, destination, cost, hops = path.len() - 1, "shortest path found");

    ShortestPath { cost, path }
}
