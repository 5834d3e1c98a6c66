//! Graph input
//!
//! Adjacency lists built in code or loaded from JSON/YAML files, and their
//! conversion to the dense view used by the algorithms.

pub mod adjacency;
pub mod loader;

pub use adjacency::{reference_graph, AdjacencyList};
pub use loader::{load_graph, GraphFormat, LoadError, LoadResult};
