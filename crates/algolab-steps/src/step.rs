//! Recorded steps and traces.
//!
//! A [`Trace`] is the full, ordered list of snapshots one algorithm run
//! produced. Traces are built once by a generator and are read-only after
//! that; playback only ever moves a cursor over them.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::binary_search::SearchState;
use crate::dijkstra::DijkstraState;
use crate::greedy::BestFirstState;
use crate::kruskal::MstState;
use crate::selection_sort::SortState;

/// Algorithm-specific snapshot carried by a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepState {
    BinarySearch(SearchState),
    ShortestPath(DijkstraState),
    SpanningTree(MstState),
    BestFirst(BestFirstState),
    Sort(SortState),
}

impl StepState {
    /// Algorithm that produced this snapshot.
    pub fn algorithm(&self) -> AlgorithmKind {
        match self {
            StepState::BinarySearch(_) => AlgorithmKind::BinarySearch,
            StepState::ShortestPath(_) => AlgorithmKind::Dijkstra,
            StepState::SpanningTree(_) => AlgorithmKind::Kruskal,
            StepState::BestFirst(_) => AlgorithmKind::GreedyBestFirst,
            StepState::Sort(_) => AlgorithmKind::SelectionSort,
        }
    }
}

/// One recorded snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Position in the trace.
    pub index: usize,
    /// Human-readable explanation shown under the visualization.
    pub message: String,
    /// Set on the step where the algorithm reached its final answer.
    #[serde(default)]
    pub complete: bool,
    pub state: StepState,
}

/// Ordered, non-empty sequence of steps from one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether no steps were recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the step at `index`, if recorded.
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    /// Get the initial step.
    pub fn first(&self) -> &Step {
        &self.steps[0]
    }

    /// Get the final step.
    pub fn last(&self) -> &Step {
        &self.steps[self.steps.len() - 1]
    }

    /// Get all steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    /// Iterate over the step messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.message.as_str())
    }

    /// Get the algorithm that produced this trace.
    pub fn algorithm(&self) -> AlgorithmKind {
        self.first().state.algorithm()
    }
}

impl Index<usize> for Trace {
    type Output = Step;

    fn index(&self, index: usize) -> &Step {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Appends steps while a generator runs.
///
/// Construction records the first step, so a finished recorder always holds
/// a non-empty trace.
#[derive(Debug)]
pub(crate) struct Recorder {
    steps: Vec<Step>,
}

impl Recorder {
    pub(crate) fn new(state: StepState, message: impl Into<String>) -> Self {
        let mut recorder = Self { steps: Vec::new() };
        recorder.push(state, message.into(), false);
        recorder
    }

    pub(crate) fn record(&mut self, state: StepState, message: impl Into<String>) {
        self.push(state, message.into(), false);
    }

    /// Record a step and mark it as the completion point.
    pub(crate) fn record_complete(&mut self, state: StepState, message: impl Into<String>) {
        self.push(state, message.into(), true);
    }

    /// Mark the most recent step as the completion point.
    pub(crate) fn mark_complete(&mut self) {
        if let Some(step) = self.steps.last_mut() {
            step.complete = true;
        }
    }

    pub(crate) fn finish(self) -> Trace {
        Trace { steps: self.steps }
    }

    fn push(&mut self, state: StepState, message: String, complete: bool) {
        let index = self.steps.len();
        self.steps.push(Step {
            index,
            message,
            complete,
            state,
        });
    }
}

/// A validated algorithm input that can replay itself as a trace.
///
/// Implementors are constructed through a fallible `new`, so `generate`
/// itself cannot fail and is deterministic.
pub trait StepGenerator {
    fn kind(&self) -> AlgorithmKind;

    fn generate(&self) -> Trace;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection_sort::SortState;

    fn sort_state(array: Vec<i64>) -> StepState {
        StepState::Sort(SortState {
            array,
            swapped: None,
            sorted_through: None,
        })
    }

    #[test]
    fn recorder_numbers_steps() {
        let mut recorder = Recorder::new(sort_state(vec![2, 1]), "first");
        recorder.record(sort_state(vec![1, 2]), "second");
        recorder.mark_complete();
        let trace = recorder.finish();

        assert_eq!(trace.len(), 2);
        assert_eq!(trace[0].index, 0);
        assert_eq!(trace[1].index, 1);
        assert!(!trace.first().complete);
        assert!(trace.last().complete);
        assert_eq!(trace.algorithm(), AlgorithmKind::SelectionSort);
    }

    #[test]
    fn state_serializes_with_kind_tag() {
        let step = Recorder::new(sort_state(vec![3]), "only").finish()[0].clone();
        let json = serde_json::to_value(&step).unwrap();

        assert_eq!(json["state"]["kind"], "sort");
        assert_eq!(json["state"]["array"][0], 3);
        assert_eq!(json["message"], "only");

        let back: Step = serde_json::from_value(json).unwrap();
        assert_eq!(back, step);
    }
}
