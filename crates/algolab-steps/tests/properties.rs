//! Property tests for the step generators.

use std::collections::BTreeSet;

use algolab_steps::presets::{self, RANDOM_SEARCH_VALUES, RANDOM_SORT_LEN, RANDOM_SORT_VALUES};
use algolab_steps::{
    generate_steps, AlgorithmInput, AlgorithmKind, BinarySearch, Dijkstra, DisjointSet, EdgeDecision, Graph, Kruskal, NodeId, SearchOutcome,
    SelectionSort, StepGenerator, StepState, WeightedEdge,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn label(i: usize) -> NodeId {
    NodeId::new(format!("N{}", i))
}

/// Random undirected edges over `n` nodes.
fn edges(
    max_nodes: usize,
    max_edges: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (2..=max_nodes).prop_flat_map(move |n| {
        let edge = (0..n, 0..n, 1u32..20);
        (Just(n), proptest::collection::vec(edge, 1..=max_edges))
    })
}

/// Shortest distances by repeated relaxation over the effective adjacency.
fn bellman_ford(graph: &Graph, source: usize) -> Vec<Option<u64>> {
    let mut dist = vec![None; graph.node_count()];
    dist[source] = Some(0u64);
    for _ in 0..graph.node_count() {
        for from in 0..graph.node_count() {
            let Some(d) = dist[from] else { continue };
            for &(to, w) in graph.neighbors(from) {
                let candidate = d + u64::from(w);
                if dist[to].map_or(true, |known| candidate < known) {
                    dist[to] = Some(candidate);
                }
            }
        }
    }
    dist
}

/// Minimum spanning tree weight by checking every subset of `|V|-1` edges.
fn brute_force_mst(node_count: usize, edges: &[(usize, usize, u32)]) -> Option<u64> {
    let mut best: Option<u64> = None;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != node_count - 1 {
            continue;
        }
        let mut sets = DisjointSet::new(node_count);
        let mut weight = 0u64;
        let mut acyclic = true;
        for (i, &(a, b, w)) in edges.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            if !sets.union(a, b) {
                acyclic = false;
                break;
            }
            weight += u64::from(w);
        }
        if acyclic && best.map_or(true, |b| weight < b) {
            best = Some(weight);
        }
    }
    best
}

proptest! {
    #[test]
    fn binary_search_outcome_matches_contents(
        mut array in proptest::collection::vec(-20i64..20, 0..15),
        target in -25i64..25,
    ) {
        array.sort();
        let trace = BinarySearch::new(array.clone(), target).unwrap().generate();

        let StepState::BinarySearch(state) = &trace.last().state else {
            panic!("wrong state kind");
        };
        match state.outcome {
            SearchOutcome::Found(i) => { prop_assert_eq!(array[i], target); }
            SearchOutcome::NotFound => { prop_assert!(!array.contains(&target)); }
            SearchOutcome::Searching => { prop_assert!(false, "trace ended while searching"); }
        }
        prop_assert!(trace.last().complete);
        for (i, step) in trace.iter().enumerate() {
            prop_assert_eq!(step.index, i);
        }
    }

    #[test]
    fn dijkstra_matches_bellman_ford((n, raw) in edges(7, 12)) {
        let mut graph = Graph::new();
        for i in 0..n {
            graph.add_node(label(i));
        }
        for &(a, b, w) in &raw {
            graph.add_undirected_edge(label(a), label(b), w);
        }
        let expected = bellman_ford(&graph, 0);

        let trace = Dijkstra::new(graph.clone(), &label(0)).unwrap().generate();
        let StepState::ShortestPath(state) = &trace.last().state else {
            panic!("wrong state kind");
        };
        for (i, node) in graph.nodes().iter().enumerate() {
            prop_assert_eq!(state.distance(node), expected[i]);
            if let Some(path) = state.path_to(node) {
                prop_assert_eq!(path.first(), Some(&label(0)));
                prop_assert_eq!(path.last(), Some(node));
            }
        }
    }

    #[test]
    fn kruskal_finds_minimum_tree((_, raw) in edges(6, 8)) {
        let edge_list: Vec<WeightedEdge> = raw
            .iter()
            .map(|&(a, b, w)| WeightedEdge::new(label(a), label(b), w))
            .collect();
        let kruskal = Kruskal::new(edge_list).unwrap();

        // Re-index over the endpoints actually present.
        let nodes: Vec<NodeId> = kruskal.nodes().to_vec();
        let position = |id: &NodeId| nodes.iter().position(|n| n == id).unwrap();
        let reindexed: Vec<(usize, usize, u32)> = raw
            .iter()
            .map(|&(a, b, w)| (position(&label(a)), position(&label(b)), w))
            .collect();
        let mut sets = DisjointSet::new(nodes.len());
        for &(a, b, _) in &reindexed {
            sets.union(a, b);
        }
        let connected = (1..nodes.len()).all(|i| sets.connected(0, i));

        let trace = kruskal.generate();
        let StepState::SpanningTree(state) = &trace.last().state else {
            panic!("wrong state kind");
        };

        let mut check = DisjointSet::new(nodes.len());
        for edge in &state.mst {
            prop_assert!(check.union(position(&edge.from), position(&edge.to)), "cycle in tree");
        }

        let accepted = trace
            .iter()
            .filter(|step| matches!(
                &step.state,
                StepState::SpanningTree(s) if s.decision == Some(EdgeDecision::Accepted)
            ))
            .count();
        prop_assert_eq!(accepted, state.mst.len());

        if connected {
            prop_assert_eq!(state.mst.len(), nodes.len() - 1);
            prop_assert_eq!(Some(state.total_weight), brute_force_mst(nodes.len(), &reindexed));
        } else {
            prop_assert!(trace.last().message.starts_with("Edge list exhausted"));
        }
    }

    #[test]
    fn selection_sort_ends_sorted(array in proptest::collection::vec(-50i64..50, 2..=12)) {
        let trace = SelectionSort::new(array.clone()).generate();
        let StepState::Sort(state) = &trace.last().state else {
            panic!("wrong state kind");
        };

        let mut expected = array.clone();
        expected.sort();
        prop_assert_eq!(&state.array, &expected);
        prop_assert!(trace.len() <= array.len());
    }

    #[test]
    fn generation_is_deterministic((_, raw) in edges(6, 10)) {
        let edge_list: Vec<WeightedEdge> = raw
            .iter()
            .map(|&(a, b, w)| WeightedEdge::new(label(a), label(b), w))
            .collect();
        let graph = Graph::undirected(&edge_list);
        let source = graph.node(0).clone();

        let dijkstra = Dijkstra::new(graph, &source).unwrap();
        prop_assert_eq!(dijkstra.generate(), dijkstra.generate());

        let kruskal = Kruskal::new(edge_list).unwrap();
        prop_assert_eq!(kruskal.generate(), kruskal.generate());
    }

    #[test]
    fn random_arrays_stay_in_bounds(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);

        let search = presets::random_search_array(&mut rng);
        prop_assert_eq!(search.len(), presets::RANDOM_SEARCH_LEN);
        prop_assert!(search.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(search.iter().all(|v| RANDOM_SEARCH_VALUES.contains(v)));

        let sort = presets::random_sort_array(&mut rng);
        prop_assert!(RANDOM_SORT_LEN.contains(&sort.len()));
        prop_assert!(sort.iter().all(|v| RANDOM_SORT_VALUES.contains(v)));

        let input = AlgorithmInput::random(AlgorithmKind::BinarySearch, &mut rng).unwrap();
        let trace = generate_steps(&input).unwrap();
        let StepState::BinarySearch(state) = &trace.last().state else {
            panic!("wrong state kind");
        };
        prop_assert!(matches!(state.outcome, SearchOutcome::Found(_)));
    }
}

#[test]
fn node_sets_cover_every_endpoint() {
    let kruskal = Kruskal::new(vec![
        WeightedEdge::new("C", "A", 1),
        WeightedEdge::new("B", "C", 2),
    ])
    .unwrap();
    let nodes: BTreeSet<&str> = kruskal.nodes().iter().map(NodeId::as_str).collect();
    assert_eq!(nodes.into_iter().collect::<Vec<_>>(), ["A", "B", "C"]);
}
