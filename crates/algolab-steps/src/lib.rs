//! AlgoLab Step Generators
//!
//! Records every intermediate state of an algorithm run so it can be played
//! back one step at a time.
//!
//! # Architecture
//!
//! - **Inputs**: validated up front; constructors return [`InputError`]
//! - **Generators**: one per algorithm, each implementing [`StepGenerator`]
//! - **Trace**: the immutable, non-empty list of [`Step`]s a run produced
//!
//! # Usage
//!
//! ```
//! use algolab_steps::{generate_steps, AlgorithmInput, AlgorithmKind};
//!
//! let input = AlgorithmInput::preset(AlgorithmKind::SelectionSort);
//! let trace = generate_steps(&input).unwrap();
//!
//! assert!(trace.last().complete);
//! assert_eq!(trace[1].message, "Swapped 64 (index 0) with 11 (index 4).");
//! ```

mod algorithm;
mod binary_search;
mod dijkstra;
mod error;
mod graph;
mod greedy;
mod kruskal;
mod selection_sort;
mod step;
mod union_find;

pub mod input;
pub mod presets;

pub use algorithm::{generate_steps, AlgorithmInput, AlgorithmKind};
pub use binary_search::{BinarySearch, SearchOutcome, SearchState};
pub use dijkstra::{Dijkstra, DijkstraState};
pub use error::{InputError, Result};
pub use graph::{Graph, GraphSpec, NodeId, Weight, WeightedEdge};
pub use greedy::{BestFirstState, GreedyBestFirst, Heuristic};
pub use kruskal::{EdgeDecision, Kruskal, MstState};
pub use selection_sort::{changed_indices, SelectionSort, SortState};
pub use step::{Step, StepGenerator, StepState, Trace};
pub use union_find::DisjointSet;
