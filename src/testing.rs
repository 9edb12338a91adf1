//! Graph construction shorthands for unit tests.

/// Builds an unweighted graph from one or more paths, e.g. `graph!(["a", "b", "c"], ["a", "c"])`
/// inserts `a-b`, `b-c` and `a-c`.
macro_rules! graph {
    ($($path:expr),*) => {{
        let mut graph = $crate::graph::Graph::new();

        $(
            let mut iter = $path.into_iter().peekable();
            while let (Some(a), Some(b)) = (iter.next(), iter.peek()) {
                graph.add_edge(a, b, $crate::graph::DEFAULT_WEIGHT).unwrap();
            }
        )*

        graph
    }};
}

/// Builds a weighted graph from `(u, v, weight)` triples.
macro_rules! weighted_graph {
    ($(($u:expr, $v:expr, $w:expr)),* $(,)?) => {{
        let mut graph = $crate::graph::Graph::new();

        $(
            graph.add_edge($u, $v, $w).unwrap();
        )*

        graph
    }};
}
