//! Error types for graph queries and edge-list loading.

use thiserror::Error;

/// Errors raised by [`Graph`](crate::Graph) lookups and shortest-path queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The key does not name a node of the graph.
    #[error("node not found: {0}")]
    UnknownNode(String),

    /// The destination was never reached from the source of the run.
    #[error("node {0} is unreachable from the source")]
    Unreachable(String),

    /// Both nodes exist but share no edge.
    #[error("nodes {from} and {to} are not adjacent")]
    NotAdjacent { from: String, to: String },
}

impl GraphError {
    pub(crate) fn unknown<K: std::fmt::Debug>(key: &K) -> Self {
        GraphError::UnknownNode(format!("{key:?}"))
    }

    pub(crate) fn unreachable<K: std::fmt::Debug>(key: &K) -> Self {
        GraphError::Unreachable(format!("{key:?}"))
    }
}

/// Errors raised while reading an edge list.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line with more tokens than `from to weight`.
    #[error("line {line}: malformed record {content:?}")]
    MalformedLine { line: usize, content: String },

    /// Weight that is not a finite, non-negative number.
    #[error("line {line}: invalid weight {weight:?}")]
    InvalidWeight { line: usize, weight: String },
}
