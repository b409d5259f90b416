//! Selection sort, recorded one swap at a time.
//!
//! Steps are only recorded when a swap actually happens. Passes where the
//! minimum is already in place leave no trace.

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::step::{Recorder, StepGenerator, StepState, Trace};

/// Snapshot of the array after a swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub array: Vec<i64>,
    /// Positions exchanged by this step.
    pub swapped: Option<(usize, usize)>,
    /// Highest index known to hold its final value.
    pub sorted_through: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSort {
    array: Vec<i64>,
}

impl SelectionSort {
    /// Any array is accepted here; length limits are applied when parsing
    /// user input.
    pub fn new(array: Vec<i64>) -> Self {
        Self { array }
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }
}

impl StepGenerator for SelectionSort {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::SelectionSort
    }

    fn generate(&self) -> Trace {
        let mut array = self.array.clone();
        let mut recorder = Recorder::new(
            StepState::Sort(SortState {
                array: array.clone(),
                swapped: None,
                sorted_through: None,
            }),
            "Initial array. Selection sort starts by finding the minimum value in the unsorted part.",
        );

        for i in 0..array.len().saturating_sub(1) {
            let mut min = i;
            for j in i + 1..array.len() {
                if array[j] < array[min] {
                    min = j;
                }
            }
            if min == i {
                continue;
            }

            let message = format!(
                "Swapped {} (index {}) with {} (index {}).",
                array[i], i, array[min], min
            );
            array.swap(i, min);
            recorder.record(
                StepState::Sort(SortState {
                    array: array.clone(),
                    swapped: Some((i, min)),
                    sorted_through: Some(i),
                }),
                message,
            );
        }

        recorder.mark_complete();
        recorder.finish()
    }
}

/// Indices whose values differ between two snapshots of the same length.
pub fn changed_indices(previous: &[i64], next: &[i64]) -> Vec<usize> {
    previous
        .iter()
        .zip(next)
        .enumerate()
        .filter(|(_, (a, b))| a != b)
        .map(|(idx, _)| idx)
        .collect()
}
