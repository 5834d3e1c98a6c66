use centrality::algo::{
    all_shortest_paths, betweenness_centrality, bfs_distances, closeness_centrality,
    degree_centrality, UNREACHABLE,
};
use centrality::{reference_graph, AdjacencyList, AlgoError, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random undirected graph on `n` nodes; each pair is linked with probability `p`
fn random_graph(rng: &mut StdRng, n: u64, p: f64) -> AdjacencyList {
    let mut graph: AdjacencyList = (0..n).map(|node| (node, Vec::new())).collect();
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(p) {
                graph.add_undirected_edge(a, b);
            }
        }
    }
    graph
}

/// Random connected graph: a random spanning tree plus extra edges
fn random_connected_graph(rng: &mut StdRng, n: u64, extra: usize) -> AdjacencyList {
    let mut graph: AdjacencyList = (0..n).map(|node| (node, Vec::new())).collect();
    for node in 1..n {
        let parent = rng.gen_range(0..node);
        graph.add_undirected_edge(parent, node);
    }
    for _ in 0..extra {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        let already = graph.neighbors(a).map_or(false, |ns| ns.contains(&b));
        if a != b && !already {
            graph.add_undirected_edge(a, b);
        }
    }
    graph
}

#[test]
fn test_reference_graph_scores() {
    let view = reference_graph().to_view().unwrap();

    let distances = bfs_distances(&view, 0).unwrap();
    let expected: Vec<(NodeId, i64)> = vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2), (5, 3)];
    assert_eq!(distances.into_iter().collect::<Vec<_>>(), expected);

    let closeness = closeness_centrality(&view).unwrap();
    assert_eq!(format!("{:.4}", closeness[&0]), "0.5556");

    let betweenness = betweenness_centrality(&view).unwrap();
    let formatted: Vec<String> = betweenness.values().map(|s| format!("{s:.4}")).collect();
    assert_eq!(formatted, vec!["0.0000", "0.4000", "0.4000", "0.4000", "0.4000", "0.0000"]);
}

#[test]
fn test_degree_matches_neighbor_lists() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let graph = random_graph(&mut rng, 8, 0.3);
        let view = graph.to_view().unwrap();
        let degrees = degree_centrality(&view);

        assert_eq!(degrees.len(), graph.node_count());
        for (node, neighbors) in graph.iter() {
            assert_eq!(degrees[&node], neighbors.len());
        }
    }
}

#[test]
fn test_shortest_paths_match_bfs_distances() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let graph = random_graph(&mut rng, 7, 0.35);
        let view = graph.to_view().unwrap();

        for source in view.node_ids() {
            let distances = bfs_distances(&view, source).unwrap();
            for target in view.node_ids() {
                let paths = all_shortest_paths(&view, source, target).unwrap();
                let distance = distances[&target];

                if distance == UNREACHABLE {
                    assert!(paths.is_empty());
                    continue;
                }

                assert!(!paths.is_empty());
                for path in &paths {
                    assert_eq!(path.len() as i64, distance + 1);
                    assert_eq!(path.first(), Some(&source));
                    assert_eq!(path.last(), Some(&target));

                    let mut seen = path.clone();
                    seen.sort_unstable();
                    seen.dedup();
                    assert_eq!(seen.len(), path.len(), "path {path:?} repeats a node");

                    for hop in path.windows(2) {
                        assert!(graph.neighbors(hop[0]).unwrap().contains(&hop[1]));
                    }
                }
            }
        }
    }
}

#[test]
fn test_betweenness_non_negative_on_connected_graphs() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..10 {
        let graph = random_connected_graph(&mut rng, 7, 4);
        let view = graph.to_view().unwrap();
        let scores = betweenness_centrality(&view).unwrap();

        assert_eq!(scores.len(), 7);
        assert!(scores.values().all(|&s| s >= 0.0));
    }
}

#[test]
fn test_betweenness_leaves_score_zero() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_connected_graph(&mut rng, 8, 0);
    let view = graph.to_view().unwrap();
    let scores = betweenness_centrality(&view).unwrap();

    for (node, neighbors) in graph.iter() {
        if neighbors.len() == 1 {
            assert_eq!(scores[&node], 0.0);
        }
    }
}

#[test]
fn test_metrics_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(5);
    let graph = random_connected_graph(&mut rng, 6, 3);
    let view = graph.to_view().unwrap();

    assert_eq!(degree_centrality(&view), degree_centrality(&view));
    assert_eq!(closeness_centrality(&view), closeness_centrality(&view));
    assert_eq!(betweenness_centrality(&view), betweenness_centrality(&view));
}

#[test]
fn test_degenerate_inputs() {
    let single: AdjacencyList = [(0, vec![])].into_iter().collect();
    let view = single.to_view().unwrap();
    assert_eq!(
        closeness_centrality(&view),
        Err(AlgoError::DivisionByZero { node: 0 })
    );

    let mut pair = AdjacencyList::new();
    pair.add_undirected_edge(0, 1);
    let view = pair.to_view().unwrap();
    assert_eq!(
        betweenness_centrality(&view),
        Err(AlgoError::DegenerateGraph { node_count: 2 })
    );
}

#[test]
fn test_empty_graph() {
    let view = AdjacencyList::new().to_view().unwrap();
    assert!(degree_centrality(&view).is_empty());
    assert!(closeness_centrality(&view).unwrap().is_empty());
    assert!(betweenness_centrality(&view).is_err());
}
