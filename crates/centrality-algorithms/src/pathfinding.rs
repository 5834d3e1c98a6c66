//! Unweighted pathfinding
//!
//! Single-source BFS distances and enumeration of every shortest simple
//! path between two nodes.

use super::common::{GraphView, NodeId, Scores};
use super::error::AlgoResult;
use std::collections::VecDeque;

/// Distance recorded for nodes a search never reached
pub const UNREACHABLE: i64 = -1;

/// Breadth-First Search distances from `source` to every node.
///
/// Unreached nodes carry [`UNREACHABLE`]; the source maps to 0.
pub fn bfs_distances(view: &GraphView, source: NodeId) -> AlgoResult<Scores<i64>> {
    let source_idx = view.index_of(source)?;
    Ok(view.to_scores(distances_from(view, source_idx)))
}

pub(crate) fn distances_from(view: &GraphView, source_idx: usize) -> Vec<i64> {
    let mut distances = vec![UNREACHABLE; view.node_count];
    let mut visited = vec![false; view.node_count];
    let mut queue = VecDeque::new();

    distances[source_idx] = 0;
    visited[source_idx] = true;
    queue.push_back(source_idx);

    while let Some(current_idx) = queue.pop_front() {
        for &next_idx in view.successors(current_idx) {
            if !visited[next_idx] {
                distances[next_idx] = distances[current_idx] + 1;
                visited[next_idx] = true;
                queue.push_back(next_idx);
            }
        }
    }

    distances
}

/// All shortest simple paths from `source` to `target`.
///
/// Returns an empty set when `target` is unreachable, and the single path
/// `[source]` when both ends are the same node.
pub fn all_shortest_paths(
    view: &GraphView,
    source: NodeId,
    target: NodeId,
) -> AlgoResult<Vec<Vec<NodeId>>> {
    let source_idx = view.index_of(source)?;
    let target_idx = view.index_of(target)?;

    Ok(shortest_paths_between(view, source_idx, target_idx)
        .into_iter()
        .map(|path| path.into_iter().map(|idx| view.index_to_node[idx]).collect())
        .collect())
}

/// Breadth-first expansion over partial paths (by index).
///
/// Paths leave the queue in non-decreasing length, so the first completed
/// path has the minimum length. Longer paths still reach the completed list
/// when they were enqueued before it was found; the final filter drops them.
pub(crate) fn shortest_paths_between(
    view: &GraphView,
    source_idx: usize,
    target_idx: usize,
) -> Vec<Vec<usize>> {
    let mut completed: Vec<Vec<usize>> = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(vec![source_idx]);

    while let Some(path) = queue.pop_front() {
        let last_idx = path[path.len() - 1];

        if last_idx == target_idx {
            completed.push(path);
            continue;
        }

        let within_bound = completed
            .first()
            .map_or(true, |first| path.len() <= first.len());
        if !within_bound {
            continue;
        }

        for &next_idx in view.successors(last_idx) {
            if !path.contains(&next_idx) {
                let mut next_path = Vec::with_capacity(path.len() + 1);
                next_path.extend_from_slice(&path);
                next_path.push(next_idx);
                queue.push_back(next_path);
            }
        }
    }

    if let Some(min_len) = completed.iter().map(Vec::len).min() {
        completed.retain(|path| path.len() == min_len);
    }

    completed
}
