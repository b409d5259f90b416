//! Dijkstra's shortest paths with a linear minimum scan.
//!
//! The scan walks nodes in graph insertion order and keeps the first node
//! with the smallest tentative distance, so ties go to the node that was
//! added first. Visited neighbors are still examined (and reported as
//! "current path is better"), which keeps every adjacency entry visible in
//! the trace.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use crate::step::{Recorder, StepGenerator, StepState, Trace};

/// Snapshot of one shortest-path step. `None` distances are infinite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DijkstraState {
    pub distances: BTreeMap<NodeId, Option<u64>>,
    pub previous: BTreeMap<NodeId, Option<NodeId>>,
    /// Nodes in the order they were finalized.
    pub visited: Vec<NodeId>,
    pub current: Option<NodeId>,
    pub examining: Option<NodeId>,
    pub unreachable: Vec<NodeId>,
}

impl DijkstraState {
    pub fn distance(&self, node: &NodeId) -> Option<u64> {
        self.distances.get(node).copied().flatten()
    }

    /// Source-to-`target` path along the recorded predecessors.
    pub fn path_to(&self, target: &NodeId) -> Option<Vec<NodeId>> {
        self.distance(target)?;
        let mut path = vec![target.clone()];
        let mut node = target;
        while let Some(Some(prev)) = self.previous.get(node) {
            if path.len() > self.previous.len() {
                return None;
            }
            path.push(prev.clone());
            node = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra input: a graph and a source node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dijkstra {
    graph: Graph,
    source: usize,
}

impl Dijkstra {
    pub fn new(graph: Graph, source: &NodeId) -> Result<Self> {
        let source = graph.require(source)?;
        for edge in graph.edges() {
            edge.validate()?;
        }
        Ok(Self { graph, source })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn source(&self) -> &NodeId {
        self.graph.node(self.source)
    }
}

/// Mutable run state, indexed by node position.
struct Run<'a> {
    graph: &'a Graph,
    distances: Vec<Option<u64>>,
    previous: Vec<Option<usize>>,
    is_visited: Vec<bool>,
    visited: Vec<usize>,
    unreachable: Vec<usize>,
}

impl<'a> Run<'a> {
    fn new(graph: &'a Graph, source: usize) -> Self {
        let n = graph.node_count();
        let mut distances = vec![None; n];
        distances[source] = Some(0);
        Self {
            graph,
            distances,
            previous: vec![None; n],
            is_visited: vec![false; n],
            visited: Vec::with_capacity(n),
            unreachable: Vec::new(),
        }
    }

    /// Unvisited node with the smallest finite distance; first wins on ties.
    fn closest_unvisited(&self) -> Option<(usize, u64)> {
        let mut best: Option<(usize, u64)> = None;
        for (idx, distance) in self.distances.iter().enumerate() {
            if self.is_visited[idx] {
                continue;
            }
            if let Some(d) = *distance {
                if best.map_or(true, |(_, best_d)| d < best_d) {
                    best = Some((idx, d));
                }
            }
        }
        best
    }

    fn label(&self, idx: usize) -> NodeId {
        self.graph.node(idx).clone()
    }

    fn snapshot(&self, current: Option<usize>, examining: Option<usize>) -> StepState {
        let nodes = self.graph.nodes();
        StepState::ShortestPath(DijkstraState {
            distances: nodes.iter().cloned().zip(self.distances.iter().copied()).collect(),
            previous: nodes
                .iter()
                .cloned()
                .zip(self.previous.iter().map(|p| p.map(|idx| self.label(idx))))
                .collect(),
            visited: self.visited.iter().map(|&idx| self.label(idx)).collect(),
            current: current.map(|idx| self.label(idx)),
            examining: examining.map(|idx| self.label(idx)),
            unreachable: self.unreachable.iter().map(|&idx| self.label(idx)).collect(),
        })
    }
}

impl StepGenerator for Dijkstra {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Dijkstra
    }

    fn generate(&self) -> Trace {
        let mut run = Run::new(&self.graph, self.source);
        let mut recorder = Recorder::new(
            run.snapshot(None, None),
            format!("Starting Dijkstra's algorithm from node {}", self.source()),
        );

        while run.visited.len() < self.graph.node_count() {
            let Some((current, distance)) = run.closest_unvisited() else {
                run.unreachable = (0..self.graph.node_count())
                    .filter(|&idx| !run.is_visited[idx])
                    .collect();
                recorder.record(run.snapshot(None, None), "Some nodes are unreachable from source");
                break;
            };

            run.is_visited[current] = true;
            run.visited.push(current);
            recorder.record(
                run.snapshot(Some(current), None),
                format!("Selected node {} with distance {}", run.label(current), distance),
            );

            for &(neighbor, weight) in self.graph.neighbors(current) {
                let candidate = distance + u64::from(weight);
                let improves = run.distances[neighbor].map_or(true, |known| candidate < known);
                let message = if improves {
                    run.distances[neighbor] = Some(candidate);
                    run.previous[neighbor] = Some(current);
                    format!(
                        "Updated distance to {} via {} to {}",
                        run.label(neighbor),
                        run.label(current),
                        candidate
                    )
                } else {
                    format!("Examined {}, but current path is better", run.label(neighbor))
                };
                recorder.record(run.snapshot(Some(current), Some(neighbor)), message);
            }
        }

        recorder.record_complete(run.snapshot(None, None), "Algorithm complete - shortest paths found");
        recorder.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use crate::graph::WeightedEdge;
    use crate::presets;

    fn ids(labels: &[&str]) -> Vec<NodeId> {
        labels.iter().map(|&label| NodeId::from(label)).collect()
    }

    fn final_state(trace: &Trace) -> &DijkstraState {
        match &trace.last().state {
            StepState::ShortestPath(state) => state,
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn preset_distances() {
        let dijkstra = Dijkstra::new(presets::dijkstra_graph(), &"A".into()).unwrap();
        let trace = dijkstra.generate();
        let state = final_state(&trace);

        let expected = [("A", 0), ("B", 3), ("C", 2), ("D", 8), ("E", 10), ("F", 13)];
        for (node, distance) in expected {
            assert_eq!(state.distance(&node.into()), Some(distance), "node {}", node);
        }
        assert_eq!(
            state.path_to(&"F".into()).unwrap(),
            ids(&["A", "C", "B", "D", "E", "F"])
        );
        assert_eq!(trace.first().message, "Starting Dijkstra's algorithm from node A");
        assert_eq!(trace.last().message, "Algorithm complete - shortest paths found");
        assert!(trace.last().complete);
        assert_eq!(state.visited.len(), 6);
    }

    #[test]
    fn records_updates_and_rejections() {
        let dijkstra = Dijkstra::new(presets::dijkstra_graph(), &"A".into()).unwrap();
        let trace = dijkstra.generate();
        let messages: Vec<&str> = trace.messages().collect();

        assert_eq!(messages[1], "Selected node A with distance 0");
        assert_eq!(messages[2], "Updated distance to B via A to 4");
        assert_eq!(messages[3], "Updated distance to C via A to 2");
        assert_eq!(messages[4], "Selected node C with distance 2");
        assert_eq!(messages[5], "Examined A, but current path is better");
        assert_eq!(messages[6], "Updated distance to B via C to 3");
    }

    #[test]
    fn ties_go_to_insertion_order() {
        let graph = Graph::undirected(&[
            WeightedEdge::new("S", "Y", 1),
            WeightedEdge::new("S", "X", 1),
        ]);
        let trace = Dijkstra::new(graph, &"S".into()).unwrap().generate();

        assert!(trace.messages().any(|m| m == "Selected node Y with distance 1"));
        let y = trace.messages().position(|m| m == "Selected node Y with distance 1");
        let x = trace.messages().position(|m| m == "Selected node X with distance 1");
        assert!(y < x);
    }

    #[test]
    fn unreachable_nodes_are_reported() {
        let mut graph = Graph::undirected(&[WeightedEdge::new("A", "B", 2)]);
        graph.add_undirected_edge("C", "D", 1);
        let trace = Dijkstra::new(graph, &"A".into()).unwrap().generate();

        let flagged = trace
            .iter()
            .find(|step| step.message == "Some nodes are unreachable from source")
            .expect("unreachable step");
        match &flagged.state {
            StepState::ShortestPath(state) => {
                assert_eq!(state.unreachable, ids(&["C", "D"]));
            }
            _ => unreachable!(),
        }

        let state = final_state(&trace);
        assert_eq!(state.distance(&"C".into()), None);
        assert_eq!(state.path_to(&"D".into()), None);
        assert_eq!(trace.last().message, "Algorithm complete - shortest paths found");
    }

    #[test]
    fn single_node_graph() {
        let mut graph = Graph::new();
        graph.add_node("A");
        let trace = Dijkstra::new(graph, &"A".into()).unwrap().generate();

        assert_eq!(trace.len(), 3);
        assert_eq!(final_state(&trace).path_to(&"A".into()), Some(ids(&["A"])));
    }

    #[test]
    fn unknown_source() {
        let err = Dijkstra::new(presets::dijkstra_graph(), &"Z".into()).unwrap_err();
        assert_eq!(err, InputError::UnknownNode("Z".into()));
    }
}
