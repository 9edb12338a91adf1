//! Error types surfaced by the graph engine.

use thiserror::Error;

/// Errors raised by operations that need a valid anchor or a valid edge.
///
/// Permissive lookups (neighbour queries, weight queries, shortest paths) never produce these;
/// they degrade to empty, default or unreachable results instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(String),
    #[error("negative weight {weight} on edge {from} -- {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },
    #[error("non-finite weight on edge {from} -- {to}")]
    NonFiniteWeight { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
