//! Centrality algorithms module
//!
//! Algorithms are implemented in the `centrality-algorithms` crate.
//! This module re-exports them and adds the report layer that runs several
//! metrics over one graph.

pub mod report;

// Re-export algorithms
pub use centrality_algorithms::{
    all_shortest_paths, bfs_distances,
    betweenness_centrality, betweenness_centrality_with_config,
    closeness_centrality, degree_centrality,
    AlgoError, AlgoResult, BetweennessConfig, GraphView, NodeId, Normalization, Scores,
    UNREACHABLE,
};

pub use report::{CentralityReport, Metric, ReportConfig};
