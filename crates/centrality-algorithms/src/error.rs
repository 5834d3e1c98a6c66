//! Error types for centrality computations

use super::common::NodeId;
use thiserror::Error;

/// Errors that can occur while building a graph view or computing scores
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    /// Closeness of `node` would divide by a zero total distance
    #[error("Division by zero: total distance from node {node} is 0")]
    DivisionByZero { node: NodeId },

    /// Betweenness normalization needs at least 3 nodes
    #[error("Degenerate graph: betweenness normalization needs at least 3 nodes, got {node_count}")]
    DegenerateGraph { node_count: usize },

    /// A neighbor list references a node without its own adjacency entry
    #[error("Invalid graph: node {node} lists neighbor {neighbor}, which has no adjacency entry")]
    InvalidGraph { node: NodeId, neighbor: NodeId },

    #[error("Node {0} appears more than once in the adjacency list")]
    DuplicateNode(NodeId),

    #[error("Node {0} not found")]
    NodeNotFound(NodeId),
}

pub type AlgoResult<T> = Result<T, AlgoError>;
