//! Reading adjacency lists from JSON and YAML files
//!
//! Both formats hold a single object mapping node id to neighbor list:
//!
//! ```yaml
//! 0: [1, 2]
//! 1: [0, 2]
//! 2: [0, 1]
//! ```

use super::adjacency::AdjacencyList;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a graph file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON graph: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML graph: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported graph file extension: {0:?}")]
    UnsupportedFormat(String),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// Supported graph file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Json,
    Yaml,
}

impl GraphFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match ext.as_str() {
            "json" => Ok(GraphFormat::Json),
            "yaml" | "yml" => Ok(GraphFormat::Yaml),
            _ => Err(LoadError::UnsupportedFormat(ext)),
        }
    }

    pub fn parse(self, input: &str) -> LoadResult<AdjacencyList> {
        Ok(match self {
            GraphFormat::Json => serde_json::from_str(input)?,
            GraphFormat::Yaml => serde_yaml::from_str(input)?,
        })
    }
}

/// Load an adjacency list, choosing the format by extension
pub fn load_graph(path: impl AsRef<Path>) -> LoadResult<AdjacencyList> {
    let path = path.as_ref();
    let format = GraphFormat::from_path(path)?;
    let input = fs::read_to_string(path)?;
    let graph = format.parse(&input)?;

    debug!(path = %path.display(), nodes = graph.node_count(), ?format, "loaded graph");
    Ok(graph)
}
