//! Greedy best-first search guided only by a heuristic.
//!
//! The frontier is re-sorted by heuristic before every selection. The sort
//! is stable, so nodes with equal estimates are taken in the order they
//! joined the frontier. Edge weights are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::error::{InputError, Result};
use crate::graph::{Graph, NodeId};
use crate::step::{Recorder, StepGenerator, StepState, Trace};

/// Heuristic estimate of the remaining distance to the goal.
pub type Heuristic = u32;

/// Snapshot of one best-first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestFirstState {
    pub visited: Vec<NodeId>,
    /// Frontier in the order it will be considered after the next sort.
    pub frontier: Vec<NodeId>,
    pub current: Option<NodeId>,
    pub examining: Option<NodeId>,
    /// Start-to-goal path, set once the goal is reached.
    pub path: Vec<NodeId>,
}

/// Best-first input: graph, per-node heuristics, start and goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyBestFirst {
    graph: Graph,
    heuristics: Vec<Heuristic>,
    start: usize,
    goal: usize,
}

impl GreedyBestFirst {
    /// Every graph node needs a heuristic; extra entries are ignored.
    pub fn new(
        graph: Graph,
        heuristics: &BTreeMap<NodeId, Heuristic>,
        start: &NodeId,
        goal: &NodeId,
    ) -> Result<Self> {
        let start = graph.require(start)?;
        let goal = graph.require(goal)?;
        let heuristics = graph
            .nodes()
            .iter()
            .map(|node| {
                heuristics
                    .get(node)
                    .copied()
                    .ok_or_else(|| InputError::MissingHeuristic(node.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            graph,
            heuristics,
            start,
            goal,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn heuristic(&self, node: &NodeId) -> Option<Heuristic> {
        self.graph.index_of(node).map(|idx| self.heuristics[idx])
    }
}

struct Search<'a> {
    graph: &'a Graph,
    visited: Vec<usize>,
    is_visited: Vec<bool>,
    frontier: Vec<usize>,
    parent: Vec<Option<usize>>,
    path: Vec<usize>,
}

impl Search<'_> {
    fn labels(&self, nodes: &[usize]) -> Vec<NodeId> {
        nodes.iter().map(|&idx| self.graph.node(idx).clone()).collect()
    }

    fn snapshot(&self, current: Option<usize>, examining: Option<usize>) -> StepState {
        StepState::BestFirst(BestFirstState {
            visited: self.labels(&self.visited),
            frontier: self.labels(&self.frontier),
            current: current.map(|idx| self.graph.node(idx).clone()),
            examining: examining.map(|idx| self.graph.node(idx).clone()),
            path: self.labels(&self.path),
        })
    }

    fn trace_back(&self, goal: usize) -> Vec<usize> {
        let mut path = vec![goal];
        let mut node = goal;
        while let Some(prev) = self.parent[node] {
            path.push(prev);
            node = prev;
        }
        path.reverse();
        path
    }
}

impl StepGenerator for GreedyBestFirst {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::GreedyBestFirst
    }

    fn generate(&self) -> Trace {
        let n = self.graph.node_count();
        let start = self.graph.node(self.start);
        let goal = self.graph.node(self.goal);
        let mut search = Search {
            graph: &self.graph,
            visited: Vec::new(),
            is_visited: vec![false; n],
            frontier: vec![self.start],
            parent: vec![None; n],
            path: Vec::new(),
        };
        let mut recorder = Recorder::new(
            search.snapshot(None, None),
            format!(
                "Starting Greedy Best-First Search from node {} to goal node {}",
                start, goal
            ),
        );

        loop {
            search.frontier.sort_by_key(|&idx| self.heuristics[idx]);
            let current = search.frontier.remove(0);
            search.is_visited[current] = true;
            search.visited.push(current);
            recorder.record(
                search.snapshot(Some(current), None),
                format!(
                    "Selected node {} with heuristic value {}",
                    self.graph.node(current),
                    self.heuristics[current]
                ),
            );

            if current == self.goal {
                search.path = search.trace_back(current);
                let route: Vec<&str> = search
                    .path
                    .iter()
                    .map(|&idx| self.graph.node(idx).as_str())
                    .collect();
                recorder.record_complete(
                    search.snapshot(Some(current), None),
                    format!("Goal reached! Path: {}", route.join(" → ")),
                );
                return recorder.finish();
            }

            for &(neighbor, _) in self.graph.neighbors(current) {
                if search.is_visited[neighbor] || search.frontier.contains(&neighbor) {
                    continue;
                }
                let label = self.graph.node(neighbor);
                recorder.record(
                    search.snapshot(Some(current), Some(neighbor)),
                    format!("Examining neighbor {} of node {}", label, self.graph.node(current)),
                );
                search.frontier.push(neighbor);
                search.parent[neighbor] = Some(current);
                recorder.record(
                    search.snapshot(Some(current), Some(neighbor)),
                    format!("Added {} to frontier with heuristic {}", label, self.heuristics[neighbor]),
                );
            }

            if search.frontier.is_empty() {
                recorder.record_complete(
                    search.snapshot(None, None),
                    format!("No path found from {} to {}", start, goal),
                );
                return recorder.finish();
            }
        }
    }
}
