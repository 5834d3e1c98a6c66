//! Centrality Toolkit
//!
//! Degree, closeness and betweenness centrality for small, unweighted,
//! undirected graphs given as adjacency lists.
//!
//! Betweenness is computed by enumerating every shortest simple path between
//! each ordered pair of nodes, so running time grows exponentially with graph
//! density. The toolkit targets graphs of tens of nodes, not large networks.
//!
//! ## Example Usage
//!
//! ```rust
//! use centrality::algo::{closeness_centrality, degree_centrality};
//! use centrality::graph::reference_graph;
//!
//! let view = reference_graph().to_view().unwrap();
//!
//! let degrees = degree_centrality(&view);
//! assert_eq!(degrees[&1], 3);
//!
//! let closeness = closeness_centrality(&view).unwrap();
//! assert!((closeness[&0] - 5.0 / 9.0).abs() < 1e-12);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod graph;

// Re-export main types for convenience
pub use algo::{
    AlgoError, AlgoResult, BetweennessConfig, CentralityReport, GraphView, Metric, NodeId,
    Normalization, ReportConfig, Scores,
};

pub use graph::{load_graph, reference_graph, AdjacencyList, GraphFormat, LoadError, LoadResult};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
