//! Adjacency-list graph model

use crate::algo::{AlgoResult, GraphView, NodeId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from node id to its ordered neighbor list.
///
/// Key order is kept as written, and scores computed from this graph are
/// reported in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    nodes: IndexMap<NodeId, Vec<NodeId>>,
}

impl AdjacencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the neighbor list of `node`, replacing any previous one
    pub fn insert(&mut self, node: NodeId, neighbors: Vec<NodeId>) -> &mut Self {
        self.nodes.insert(node, neighbors);
        self
    }

    /// Add `b` to `a`'s neighbors and `a` to `b`'s
    pub fn add_undirected_edge(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.nodes.entry(a).or_default().push(b);
        self.nodes.entry(b).or_default().push(a);
        self
    }

    pub fn neighbors(&self, node: NodeId) -> Option<&[NodeId]> {
        self.nodes.get(&node).map(Vec::as_slice)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> {
        self.nodes.iter().map(|(node, neighbors)| (*node, neighbors.as_slice()))
    }

    /// Build the dense view the algorithms run on
    pub fn to_view(&self) -> AlgoResult<GraphView> {
        GraphView::from_adjacency_list(
            self.nodes
                .iter()
                .map(|(node, neighbors)| (*node, neighbors.clone())),
        )
    }
}

impl FromIterator<(NodeId, Vec<NodeId>)> for AdjacencyList {
    fn from_iter<I: IntoIterator<Item = (NodeId, Vec<NodeId>)>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// The six-node sample graph: two triangles (0-1-2, 3-4-5) bridged by the
/// edges 1-3 and 2-4.
pub fn reference_graph() -> AdjacencyList {
    [
        (0, vec![1, 2]),
        (1, vec![0, 2, 3]),
        (2, vec![0, 1, 4]),
        (3, vec![1, 4, 5]),
        (4, vec![2, 3, 5]),
        (5, vec![3, 4]),
    ]
    .into_iter()
    .collect()
}
