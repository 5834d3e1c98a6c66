//! Shared utilities for centrality algorithms
//!
//! Provides a read-only, integer-indexed view of an adjacency-list graph.

use super::error::{AlgoError, AlgoResult};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Node Identifier type (u64)
pub type NodeId = u64;

/// Per-node scores, ordered like the adjacency list the view was built from
pub type Scores<T> = IndexMap<NodeId, T>;

/// A dense, integer-indexed view of an adjacency-list graph.
///
/// Node ids are mapped to dense indices (0..N) in the order their adjacency
/// entries were supplied. Neighbor lists keep their original order and any
/// duplicate entries. Edge symmetry is not checked: an asymmetric list is
/// traversed as a directed graph.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,
    /// Neighbor lists: index -> vec![neighbor_index]
    pub outgoing: Vec<Vec<usize>>,
}

impl GraphView {
    /// Build a view from `(node, neighbors)` entries.
    ///
    /// Fails with [`AlgoError::DuplicateNode`] if a node has two entries and
    /// with [`AlgoError::InvalidGraph`] if a neighbor has no entry of its own.
    pub fn from_adjacency_list<I>(adjacency: I) -> AlgoResult<Self>
    where
        I: IntoIterator<Item = (NodeId, Vec<NodeId>)>,
    {
        let entries: Vec<(NodeId, Vec<NodeId>)> = adjacency.into_iter().collect();
        let node_count = entries.len();

        // 1. Build index mappings
        let mut index_to_node = Vec::with_capacity(node_count);
        let mut node_to_index = HashMap::with_capacity(node_count);

        for (idx, (node_id, _)) in entries.iter().enumerate() {
            if node_to_index.insert(*node_id, idx).is_some() {
                return Err(AlgoError::DuplicateNode(*node_id));
            }
            index_to_node.push(*node_id);
        }

        // 2. Translate neighbor lists
        let mut outgoing = Vec::with_capacity(node_count);
        for (node_id, neighbors) in &entries {
            let row = neighbors
                .iter()
                .map(|neighbor| {
                    node_to_index
                        .get(neighbor)
                        .copied()
                        .ok_or(AlgoError::InvalidGraph {
                            node: *node_id,
                            neighbor: *neighbor,
                        })
                })
                .collect::<AlgoResult<Vec<usize>>>()?;
            outgoing.push(row);
        }

        Ok(GraphView {
            node_count,
            index_to_node,
            node_to_index,
            outgoing,
        })
    }

    /// Get the out-degree of a node (by index), duplicates included
    pub fn out_degree(&self, idx: usize) -> usize {
        self.outgoing[idx].len()
    }

    /// Get the neighbors of a node (by index)
    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.outgoing[idx]
    }

    /// Resolve a NodeId to its dense index
    pub fn index_of(&self, node: NodeId) -> AlgoResult<usize> {
        self.node_to_index
            .get(&node)
            .copied()
            .ok_or(AlgoError::NodeNotFound(node))
    }

    /// Iterate node ids in adjacency order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.index_to_node.iter().copied()
    }

    /// Map per-index values back to NodeIds
    pub fn to_scores<T>(&self, values: Vec<T>) -> Scores<T> {
        self.index_to_node.iter().copied().zip(values).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_adjacency_list() {
        let view = GraphView::from_adjacency_list(vec![
            (10, vec![20, 30]),
            (20, vec![10]),
            (30, vec![10]),
        ])
        .unwrap();

        assert_eq!(view.node_count, 3);
        assert_eq!(view.index_to_node, vec![10, 20, 30]);
        assert_eq!(view.successors(0), &[1, 2]);
        assert_eq!(view.out_degree(1), 1);
        assert_eq!(view.index_of(30), Ok(2));
        assert_eq!(view.index_of(40), Err(AlgoError::NodeNotFound(40)));
    }

    #[test]
    fn test_missing_neighbor_entry() {
        let result = GraphView::from_adjacency_list(vec![(1, vec![2]), (2, vec![1, 3])]);
        assert_eq!(
            result.unwrap_err(),
            AlgoError::InvalidGraph { node: 2, neighbor: 3 }
        );
    }

    #[test]
    fn test_duplicate_node_entry() {
        let result = GraphView::from_adjacency_list(vec![(1, vec![]), (1, vec![])]);
        assert_eq!(result.unwrap_err(), AlgoError::DuplicateNode(1));
    }

    #[test]
    fn test_scores_keep_adjacency_order() {
        let view = GraphView::from_adjacency_list(vec![(5, vec![]), (2, vec![]), (9, vec![])])
            .unwrap();
        let scores = view.to_scores(vec!['a', 'b', 'c']);
        let keys: Vec<NodeId> = scores.keys().copied().collect();
        assert_eq!(keys, vec![5, 2, 9]);
        assert_eq!(scores[&2], 'b');
    }
}
