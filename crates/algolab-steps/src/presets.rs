//! Default inputs each visualizer starts with.

use std::collections::BTreeMap;
use std::ops::{Range, RangeInclusive};

use rand::Rng;

use crate::graph::{Graph, NodeId, WeightedEdge};
use crate::greedy::Heuristic;

/// Sorted array shown by the binary search view.
pub const SEARCH_ARRAY: [i64; 15] = [3, 8, 12, 17, 23, 29, 34, 41, 47, 52, 60, 66, 73, 85, 94];

/// Target that is present in [`SEARCH_ARRAY`].
pub const SEARCH_TARGET: i64 = 47;

/// Unsorted array shown by the selection sort view.
pub const SORT_ARRAY: [i64; 5] = [64, 25, 12, 22, 11];

/// Length of a random binary search array.
pub const RANDOM_SEARCH_LEN: usize = 15;

/// Values of a random binary search array.
pub const RANDOM_SEARCH_VALUES: Range<i64> = 0..100;

/// Length of a random selection sort array.
pub const RANDOM_SORT_LEN: RangeInclusive<usize> = 5..=9;

/// Values of a random selection sort array.
pub const RANDOM_SORT_VALUES: RangeInclusive<i64> = 1..=100;

/// Shown when a random array replaces the current one.
pub const RANDOM_MESSAGE: &str = "Random array generated!";

pub const DIJKSTRA_SOURCE: &str = "A";

pub const GREEDY_START: &str = "A";

pub const GREEDY_GOAL: &str = "I";

fn edges(list: &[(&str, &str, u32)]) -> Vec<WeightedEdge> {
    list.iter()
        .map(|&(from, to, weight)| WeightedEdge::new(from, to, weight))
        .collect()
}

/// Six-node weighted graph for the shortest-path view.
pub fn dijkstra_edges() -> Vec<WeightedEdge> {
    edges(&[
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
        ("D", "F", 6),
        ("E", "F", 3),
    ])
}

pub fn dijkstra_graph() -> Graph {
    Graph::undirected(&dijkstra_edges())
}

/// Seven-node edge list for the spanning-tree view.
pub fn kruskal_edges() -> Vec<WeightedEdge> {
    edges(&[
        ("A", "B", 7),
        ("A", "D", 5),
        ("B", "C", 8),
        ("B", "D", 9),
        ("B", "E", 7),
        ("C", "E", 5),
        ("D", "E", 15),
        ("D", "F", 6),
        ("E", "F", 8),
        ("E", "G", 9),
        ("F", "G", 11),
    ])
}

/// Unit-weight tree for the best-first view.
pub fn greedy_edges() -> Vec<WeightedEdge> {
    edges(&[
        ("A", "B", 1),
        ("A", "C", 1),
        ("B", "D", 1),
        ("B", "E", 1),
        ("C", "F", 1),
        ("C", "G", 1),
        ("E", "H", 1),
        ("F", "I", 1),
    ])
}

pub fn greedy_graph() -> Graph {
    Graph::undirected(&greedy_edges())
}

/// Estimated distance from each node to `I`.
pub fn greedy_heuristics() -> BTreeMap<NodeId, Heuristic> {
    [
        ("A", 8),
        ("B", 4),
        ("C", 3),
        ("D", 5),
        ("E", 2),
        ("F", 1),
        ("G", 6),
        ("H", 3),
        ("I", 0),
    ]
    .into_iter()
    .map(|(node, h)| (NodeId::from(node), h))
    .collect()
}

/// Sorted array of [`RANDOM_SEARCH_LEN`] values, duplicates allowed.
pub fn random_search_array<R: Rng + ?Sized>(rng: &mut R) -> Vec<i64> {
    let mut values: Vec<i64> = (0..RANDOM_SEARCH_LEN)
        .map(|_| rng.gen_range(RANDOM_SEARCH_VALUES))
        .collect();
    values.sort_unstable();
    values
}

/// Unsorted array with a random length in [`RANDOM_SORT_LEN`].
pub fn random_sort_array<R: Rng + ?Sized>(rng: &mut R) -> Vec<i64> {
    let len = rng.gen_range(RANDOM_SORT_LEN);
    (0..len).map(|_| rng.gen_range(RANDOM_SORT_VALUES)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_search_array_is_sorted_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let values = random_search_array(&mut rng);
            assert_eq!(values.len(), RANDOM_SEARCH_LEN);
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
            assert!(values.iter().all(|v| RANDOM_SEARCH_VALUES.contains(v)));
        }
    }

    #[test]
    fn random_sort_array_is_bounded() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let values = random_sort_array(&mut rng);
            assert!(RANDOM_SORT_LEN.contains(&values.len()));
            assert!(values.iter().all(|v| RANDOM_SORT_VALUES.contains(v)));
        }
    }

    #[test]
    fn same_seed_same_array() {
        let a = random_sort_array(&mut StdRng::seed_from_u64(3));
        let b = random_sort_array(&mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
