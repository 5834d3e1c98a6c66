pub mod common;
pub mod error;
pub mod pathfinding;
pub mod centrality;

pub use common::{GraphView, NodeId, Scores};
pub use error::{AlgoError, AlgoResult};
pub use pathfinding::{all_shortest_paths, bfs_distances, UNREACHABLE};
pub use centrality::{
    degree_centrality, closeness_centrality,
    betweenness_centrality, betweenness_centrality_with_config,
    BetweennessConfig, Normalization,
};
