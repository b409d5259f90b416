//! Algorithm catalogue and the generation entry point.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::binary_search::BinarySearch;
use crate::dijkstra::Dijkstra;
use crate::error::Result;
use crate::graph::{GraphSpec, NodeId, WeightedEdge};
use crate::greedy::{GreedyBestFirst, Heuristic};
use crate::input::{NumbersInput, ValueInput, SEARCH_BOUNDS, SORT_BOUNDS};
use crate::kruskal::Kruskal;
use crate::presets;
use crate::selection_sort::SelectionSort;
use crate::step::{StepGenerator, Trace};

/// The visualizable algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    BinarySearch,
    Dijkstra,
    Kruskal,
    GreedyBestFirst,
    SelectionSort,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::BinarySearch,
        AlgorithmKind::Dijkstra,
        AlgorithmKind::Kruskal,
        AlgorithmKind::GreedyBestFirst,
        AlgorithmKind::SelectionSort,
    ];

    /// URL slug, e.g. `greedy-best-first`.
    pub fn slug(self) -> &'static str {
        match self {
            AlgorithmKind::BinarySearch => "binary-search",
            AlgorithmKind::Dijkstra => "dijkstra",
            AlgorithmKind::Kruskal => "kruskal",
            AlgorithmKind::GreedyBestFirst => "greedy-best-first",
            AlgorithmKind::SelectionSort => "selection-sort",
        }
    }

    /// Whether [`AlgorithmInput::random`] supports this kind.
    pub fn has_random_input(self) -> bool {
        matches!(self, AlgorithmKind::BinarySearch | AlgorithmKind::SelectionSort)
    }

    pub fn title(self) -> &'static str {
        match self {
            AlgorithmKind::BinarySearch => "Binary Search",
            AlgorithmKind::Dijkstra => "Dijkstra's Algorithm",
            AlgorithmKind::Kruskal => "Kruskal's Algorithm",
            AlgorithmKind::GreedyBestFirst => "Greedy Best-First Search",
            AlgorithmKind::SelectionSort => "Selection Sort",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Raw input for one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "kebab-case")]
pub enum AlgorithmInput {
    BinarySearch {
        array: NumbersInput,
        target: ValueInput,
    },
    Dijkstra {
        graph: GraphSpec,
        source: NodeId,
    },
    Kruskal {
        edges: Vec<WeightedEdge>,
    },
    GreedyBestFirst {
        graph: GraphSpec,
        heuristics: BTreeMap<NodeId, Heuristic>,
        start: NodeId,
        goal: NodeId,
    },
    SelectionSort {
        array: NumbersInput,
    },
}

impl AlgorithmInput {
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            AlgorithmInput::BinarySearch { .. } => AlgorithmKind::BinarySearch,
            AlgorithmInput::Dijkstra { .. } => AlgorithmKind::Dijkstra,
            AlgorithmInput::Kruskal { .. } => AlgorithmKind::Kruskal,
            AlgorithmInput::GreedyBestFirst { .. } => AlgorithmKind::GreedyBestFirst,
            AlgorithmInput::SelectionSort { .. } => AlgorithmKind::SelectionSort,
        }
    }

    /// The input each view starts with.
    pub fn preset(kind: AlgorithmKind) -> Self {
        match kind {
            AlgorithmKind::BinarySearch => AlgorithmInput::BinarySearch {
                array: presets::SEARCH_ARRAY.to_vec().into(),
                target: presets::SEARCH_TARGET.into(),
            },
            AlgorithmKind::Dijkstra => AlgorithmInput::Dijkstra {
                graph: GraphSpec {
                    edges: presets::dijkstra_edges(),
                    ..GraphSpec::default()
                },
                source: presets::DIJKSTRA_SOURCE.into(),
            },
            AlgorithmKind::Kruskal => AlgorithmInput::Kruskal {
                edges: presets::kruskal_edges(),
            },
            AlgorithmKind::GreedyBestFirst => AlgorithmInput::GreedyBestFirst {
                graph: GraphSpec {
                    edges: presets::greedy_edges(),
                    ..GraphSpec::default()
                },
                heuristics: presets::greedy_heuristics(),
                start: presets::GREEDY_START.into(),
                goal: presets::GREEDY_GOAL.into(),
            },
            AlgorithmKind::SelectionSort => AlgorithmInput::SelectionSort {
                array: presets::SORT_ARRAY.to_vec().into(),
            },
        }
    }

    /// A random array input, for the array algorithms only.
    ///
    /// The binary search target is drawn from the array, so it is present.
    pub fn random<R: Rng + ?Sized>(kind: AlgorithmKind, rng: &mut R) -> Option<Self> {
        match kind {
            AlgorithmKind::BinarySearch => {
                let array = presets::random_search_array(rng);
                let target = array[rng.gen_range(0..array.len())];
                Some(AlgorithmInput::BinarySearch {
                    array: array.into(),
                    target: target.into(),
                })
            }
            AlgorithmKind::SelectionSort => Some(AlgorithmInput::SelectionSort {
                array: presets::random_sort_array(rng).into(),
            }),
            AlgorithmKind::Dijkstra | AlgorithmKind::Kruskal | AlgorithmKind::GreedyBestFirst => {
                None
            }
        }
    }

    /// Validate into a ready-to-run generator.
    pub fn generator(&self) -> Result<Box<dyn StepGenerator>> {
        Ok(match self {
            AlgorithmInput::BinarySearch { array, target } => Box::new(BinarySearch::from_unsorted(
                array.resolve(SEARCH_BOUNDS)?,
                target.resolve()?,
            )),
            AlgorithmInput::Dijkstra { graph, source } => {
                Box::new(Dijkstra::new(graph.build()?, source)?)
            }
            AlgorithmInput::Kruskal { edges } => Box::new(Kruskal::new(edges.clone())?),
            AlgorithmInput::GreedyBestFirst {
                graph,
                heuristics,
                start,
                goal,
            } => Box::new(GreedyBestFirst::new(graph.build()?, heuristics, start, goal)?),
            AlgorithmInput::SelectionSort { array } => {
                Box::new(SelectionSort::new(array.resolve(SORT_BOUNDS)?))
            }
        })
    }
}

/// Validate `input` and record the full trace.
pub fn generate_steps(input: &AlgorithmInput) -> Result<Trace> {
    let generator = input.generator()?;
    let trace = generator.generate();
    debug!("Generated {} steps for {}", trace.len(), generator.kind());
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn every_preset_generates() {
        for kind in AlgorithmKind::ALL {
            let input = AlgorithmInput::preset(kind);
            assert_eq!(input.kind(), kind);

            let trace = generate_steps(&input).unwrap();
            assert_eq!(trace.algorithm(), kind);
            assert!(trace.last().complete, "{} did not complete", kind);
        }
    }

    #[test]
    fn slugs_round_trip() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.slug().parse::<AlgorithmKind>(), Ok(kind));
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.slug());
        }
        assert!("bogo-sort".parse::<AlgorithmKind>().is_err());
    }

    #[test]
    fn text_input_from_json() {
        let input: AlgorithmInput = serde_json::from_str(
            r#"{"algorithm": "binary-search", "array": "9, 3, 5", "target": "5"}"#,
        )
        .unwrap();
        let trace = generate_steps(&input).unwrap();

        assert_eq!(trace.last().message, "Found target 5 at index 1!");
    }

    #[test]
    fn invalid_input_is_reported() {
        let input: AlgorithmInput =
            serde_json::from_str(r#"{"algorithm": "selection-sort", "array": "4"}"#).unwrap();
        assert_eq!(
            generate_steps(&input).unwrap_err(),
            InputError::TooFew { min: 2, got: 1 }
        );

        let input: AlgorithmInput = serde_json::from_str(
            r#"{"algorithm": "dijkstra", "graph": {"edges": [{"from": "A", "to": "B", "weight": 1}]}, "source": "Q"}"#,
        )
        .unwrap();
        assert_eq!(generate_steps(&input).unwrap_err().to_string(), "Unknown node Q");
    }

    #[test]
    fn random_inputs_generate() {
        let mut rng = StdRng::seed_from_u64(42);
        for kind in AlgorithmKind::ALL {
            let Some(input) = AlgorithmInput::random(kind, &mut rng) else {
                assert!(!kind.has_random_input(), "{} has no random input", kind);
                continue;
            };
            assert!(kind.has_random_input());
            assert_eq!(input.kind(), kind);
            assert!(generate_steps(&input).unwrap().last().complete);
        }
    }

    #[test]
    fn random_search_finds_its_target() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..20 {
            let input = AlgorithmInput::random(AlgorithmKind::BinarySearch, &mut rng).unwrap();
            let trace = generate_steps(&input).unwrap();
            assert!(trace.last().message.starts_with("Found target"));
        }
    }

    #[test]
    fn generation_is_deterministic() {
        for kind in AlgorithmKind::ALL {
            let input = AlgorithmInput::preset(kind);
            assert_eq!(generate_steps(&input).unwrap(), generate_steps(&input).unwrap());
        }
    }
}
