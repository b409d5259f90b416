//! Kruskal's minimum spanning tree.
//!
//! Edges are considered in ascending weight order. The sort is stable, so
//! equal-weight edges keep their input order.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::error::{InputError, Result};
use crate::graph::{NodeId, WeightedEdge};
use crate::step::{Recorder, StepGenerator, StepState, Trace};
use crate::union_find::DisjointSet;

/// What happened to the edge under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDecision {
    Accepted,
    /// The edge would close a cycle.
    Rejected,
}

/// Snapshot of one spanning-tree step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstState {
    pub mst: Vec<WeightedEdge>,
    pub current_edge: Option<WeightedEdge>,
    pub decision: Option<EdgeDecision>,
    pub total_weight: u64,
}

/// Kruskal input: an undirected edge list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kruskal {
    nodes: Vec<NodeId>,
    edges: Vec<WeightedEdge>,
}

impl Kruskal {
    pub fn new(edges: Vec<WeightedEdge>) -> Result<Self> {
        if edges.is_empty() {
            return Err(InputError::NoEdges);
        }
        for edge in &edges {
            edge.validate()?;
        }
        let nodes: BTreeSet<NodeId> = edges
            .iter()
            .flat_map(|edge| [edge.from.clone(), edge.to.clone()])
            .collect();
        Ok(Self {
            nodes: nodes.into_iter().collect(),
            edges,
        })
    }

    /// Distinct endpoints, sorted.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }
}

impl StepGenerator for Kruskal {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::Kruskal
    }

    fn generate(&self) -> Trace {
        let index: HashMap<&NodeId, usize> =
            self.nodes.iter().enumerate().map(|(i, node)| (node, i)).collect();
        let mut sorted = self.edges.clone();
        sorted.sort_by_key(|edge| edge.weight);

        let mut sets = DisjointSet::new(self.nodes.len());
        let target = self.nodes.len() - 1;
        let mut state = MstState {
            mst: Vec::with_capacity(target),
            current_edge: None,
            decision: None,
            total_weight: 0,
        };
        let mut recorder = Recorder::new(
            StepState::SpanningTree(state.clone()),
            "Starting Kruskal's algorithm with an empty MST",
        );

        for edge in sorted {
            let joined = sets.union(index[&edge.from], index[&edge.to]);
            let message = if joined {
                state.total_weight += u64::from(edge.weight);
                state.mst.push(edge.clone());
                format!("Added edge {} with weight {} to MST", edge, edge.weight)
            } else {
                format!("Rejected edge {} with weight {} (would form a cycle)", edge, edge.weight)
            };
            state.decision = Some(if joined { EdgeDecision::Accepted } else { EdgeDecision::Rejected });
            state.current_edge = Some(edge);

            if state.mst.len() == target {
                recorder.record_complete(StepState::SpanningTree(state.clone()), message);
                state.current_edge = None;
                state.decision = None;
                recorder.record_complete(
                    StepState::SpanningTree(state.clone()),
                    format!("Minimum Spanning Tree complete with total weight {}", state.total_weight),
                );
                return recorder.finish();
            }
            recorder.record(StepState::SpanningTree(state.clone()), message);
        }

        state.current_edge = None;
        state.decision = None;
        recorder.record_complete(
            StepState::SpanningTree(state.clone()),
            format!(
                "Edge list exhausted: graph is disconnected, spanning forest has total weight {}",
                state.total_weight
            ),
        );
        recorder.finish()
    }
}
