//! Node centrality metrics
//!
//! Degree, closeness and a path-enumeration form of betweenness. Each metric
//! is computed independently from a read-only [`GraphView`].

use super::common::{GraphView, Scores};
use super::error::{AlgoError, AlgoResult};
use super::pathfinding::{distances_from, shortest_paths_between, UNREACHABLE};
use tracing::{debug, warn};

/// Divisor applied to accumulated betweenness scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Normalization {
    /// (n-1)(n-2)/2. Ordered pairs are accumulated, so every score comes out
    /// twice the classical normalized value.
    #[default]
    UnorderedPairs,
    /// (n-1)(n-2), the ordered pair count
    OrderedPairs,
    /// No division
    Raw,
}

/// Betweenness configuration
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BetweennessConfig {
    pub normalization: Normalization,
}

/// Degree centrality: the length of each node's neighbor list.
///
/// Duplicate neighbor entries are counted as they appear.
pub fn degree_centrality(view: &GraphView) -> Scores<usize> {
    let degrees = (0..view.node_count).map(|idx| view.out_degree(idx)).collect();
    view.to_scores(degrees)
}

/// Closeness centrality: `(n - 1) / total`, where `total` sums every entry of
/// the node's BFS distance map.
///
/// Unreached nodes contribute their `-1` sentinel to the total as is. A zero
/// total fails with [`AlgoError::DivisionByZero`].
pub fn closeness_centrality(view: &GraphView) -> AlgoResult<Scores<f64>> {
    let n = view.node_count;
    let mut scores = Vec::with_capacity(n);

    for idx in 0..n {
        let distances = distances_from(view, idx);
        let total: i64 = distances.iter().sum();
        let node = view.index_to_node[idx];

        if total == 0 {
            return Err(AlgoError::DivisionByZero { node });
        }

        let unreached = distances.iter().filter(|&&d| d == UNREACHABLE).count();
        if unreached > 0 {
            warn!(node, unreached, total, "closeness total includes unreachable sentinels");
        }

        scores.push((n as f64 - 1.0) / total as f64);
    }

    debug!(nodes = n, "computed closeness centrality");
    Ok(view.to_scores(scores))
}

/// Betweenness centrality with the default [`Normalization::UnorderedPairs`].
pub fn betweenness_centrality(view: &GraphView) -> AlgoResult<Scores<f64>> {
    betweenness_centrality_with_config(view, &BetweennessConfig::default())
}

/// Betweenness centrality over all shortest simple paths.
///
/// For every ordered pair `(start, end)` the shortest paths are enumerated
/// and each other node earns the fraction of those paths passing through
/// it. Graphs with fewer than 3 nodes fail with
/// [`AlgoError::DegenerateGraph`] unless normalization is
/// [`Normalization::Raw`].
pub fn betweenness_centrality_with_config(
    view: &GraphView,
    config: &BetweennessConfig,
) -> AlgoResult<Scores<f64>> {
    let n = view.node_count;

    let divisor = match config.normalization {
        Normalization::Raw => None,
        _ if n < 3 => return Err(AlgoError::DegenerateGraph { node_count: n }),
        Normalization::UnorderedPairs => Some(((n - 1) * (n - 2) / 2) as f64),
        Normalization::OrderedPairs => Some(((n - 1) * (n - 2)) as f64),
    };

    let mut scores = vec![0.0; n];

    for start in 0..n {
        for end in 0..n {
            if start == end {
                continue;
            }

            let paths = shortest_paths_between(view, start, end);
            if paths.is_empty() {
                continue;
            }

            let path_count = paths.len() as f64;
            for (mid, score) in scores.iter_mut().enumerate() {
                if mid == start || mid == end {
                    continue;
                }
                let through = paths.iter().filter(|path| path.contains(&mid)).count();
                *score += through as f64 / path_count;
            }
        }
    }

    if let Some(divisor) = divisor {
        for score in &mut scores {
            *score /= divisor;
        }
    }

    debug!(nodes = n, normalization = ?config.normalization, "computed betweenness centrality");
    Ok(view.to_scores(scores))
}
