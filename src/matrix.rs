//! Matrix representations of a graph.
//!
//! Rows and columns follow the label order of [`Graph::nodes`], see [`index`].

use std::{collections::BTreeMap, ops::Sub};

use nalgebra::DMatrix;

use crate::graph::Graph;

/// Maps each label to its row (and column) in the matrices of this module.
pub fn index(graph: &Graph) -> BTreeMap<String, usize> {
    graph
        .nodes()
        .enumerate()
        .map(|(i, label)| (label.to_string(), i))
        .collect()
}

/// Constructs the (unweighted) adjacency matrix for this graph.
///
/// # Examples
///
/// ```
/// use nalgebra::dmatrix;
/// use vicinity::{graph::Graph, matrix::adjacency_matrix};
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 3.0).unwrap();
/// assert_eq!(
///     adjacency_matrix(&graph),
///     dmatrix![0.0, 1.0;
///              1.0, 0.0]
/// );
/// ```
pub fn adjacency_matrix(graph: &Graph) -> DMatrix<f64> {
    fill(graph, |_| 1.0)
}

/// Constructs the weighted adjacency matrix: the edge weight where an edge exists, zero
/// elsewhere.
///
/// # Examples
///
/// ```
/// use nalgebra::dmatrix;
/// use vicinity::{graph::Graph, matrix::weight_matrix};
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 3.0).unwrap();
/// assert_eq!(
///     weight_matrix(&graph),
///     dmatrix![0.0, 3.0;
///              3.0, 0.0]
/// );
/// ```
pub fn weight_matrix(graph: &Graph) -> DMatrix<f64> {
    fill(graph, |weight| weight)
}

/// Constructs the degree matrix for this graph.
pub fn degree_matrix(graph: &Graph) -> DMatrix<f64> {
    let adjacency_matrix = adjacency_matrix(graph);
    let n = adjacency_matrix.nrows();
    let mut matrix = DMatrix::<f64>::zeros(n, n);

    for (i, row) in adjacency_matrix.row_iter().enumerate() {
        // The diagonal is the sum of edges in that row; rows are already in index order.
        matrix[(i, i)] = row.sum()
    }

    matrix
}

/// Constructs the laplacian matrix for this graph.
///
/// # Examples
///
/// ```
/// use nalgebra::dmatrix;
/// use vicinity::{graph::Graph, matrix::laplacian_matrix};
///
/// let mut graph = Graph::new();
/// graph.add_edge("a", "b", 1.0).unwrap();
/// assert_eq!(
///     laplacian_matrix(&graph),
///     dmatrix![1.0, -1.0;
///              -1.0, 1.0]
/// );
/// ```
pub fn laplacian_matrix(graph: &Graph) -> DMatrix<f64> {
    degree_matrix(graph).sub(&adjacency_matrix(graph))
}

/// Returns the difference between the highest and lowest degree in the graph, zero for an empty
/// graph.
pub fn degree_centrality_delta(graph: &Graph) -> f64 {
    let degree_matrix = degree_matrix(graph);

    if degree_matrix.is_empty() {
        return 0.0;
    }

    let diagonal = degree_matrix.diagonal();
    diagonal.max() - diagonal.min()
}

/// Builds a symmetric matrix with `value(weight)` at each edge's two positions.
fn fill(graph: &Graph, value: impl Fn(f64) -> f64) -> DMatrix<f64> {
    let index = index(graph);
    let n = index.len();
    let mut matrix = DMatrix::<f64>::zeros(n, n);

    for (edge, weight) in graph.edges() {
        // Edges only reference nodes of the graph, so both lookups succeed.
        if let (Some(&i), Some(&j)) = (index.get(edge.source()), index.get(edge.target())) {
            matrix[(i, j)] = value(weight);
            matrix[(j, i)] = value(weight);
        }
    }

    matrix
}
