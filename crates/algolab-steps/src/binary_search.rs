//! Binary search over a sorted array.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::algorithm::AlgorithmKind;
use crate::error::{InputError, Result};
use crate::step::{Recorder, StepGenerator, StepState, Trace};

/// Where the search stands at a given step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "index", rename_all = "snake_case")]
pub enum SearchOutcome {
    Searching,
    Found(usize),
    NotFound,
}

/// Snapshot of one binary search step.
///
/// `left` and `right` are signed: once the range closes `right` can sit one
/// below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    pub array: Vec<i64>,
    pub target: i64,
    pub left: isize,
    pub right: isize,
    pub mid: Option<usize>,
    pub outcome: SearchOutcome,
}

impl SearchState {
    /// Whether `index` is still inside the live search range.
    pub fn in_range(&self, index: usize) -> bool {
        let index = index as isize;
        self.left <= index && index <= self.right
    }
}

/// Binary search input: a sorted array and a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySearch {
    array: Vec<i64>,
    target: i64,
}

impl BinarySearch {
    /// Accept an array already in ascending order.
    pub fn new(array: Vec<i64>, target: i64) -> Result<Self> {
        if !array.windows(2).all(|pair| pair[0] <= pair[1]) {
            return Err(InputError::Unsorted);
        }
        Ok(Self { array, target })
    }

    /// Sort `array` first. Custom input from the learner goes through here.
    pub fn from_unsorted(mut array: Vec<i64>, target: i64) -> Self {
        array.sort_unstable();
        Self { array, target }
    }

    pub fn array(&self) -> &[i64] {
        &self.array
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    fn snapshot(&self, left: isize, right: isize, mid: Option<usize>, outcome: SearchOutcome) -> StepState {
        StepState::BinarySearch(SearchState {
            array: self.array.clone(),
            target: self.target,
            left,
            right,
            mid,
            outcome,
        })
    }
}

impl StepGenerator for BinarySearch {
    fn kind(&self) -> AlgorithmKind {
        AlgorithmKind::BinarySearch
    }

    fn generate(&self) -> Trace {
        let target = self.target;
        let not_found = format!("Target {} not found in the array.", target);

        if self.array.is_empty() {
            let mut recorder = Recorder::new(self.snapshot(0, -1, None, SearchOutcome::NotFound), not_found);
            recorder.mark_complete();
            return recorder.finish();
        }

        let mut left: isize = 0;
        let mut right = self.array.len() as isize - 1;
        let mut recorder = Recorder::new(
            self.snapshot(left, right, None, SearchOutcome::Searching),
            format!("Starting binary search for target {} in sorted array", target),
        );

        let mut attempt = 1;
        while left <= right {
            let mid = ((left + right) / 2) as usize;
            let value = self.array[mid];
            recorder.record(
                self.snapshot(left, right, Some(mid), SearchOutcome::Searching),
                format!("Step {}: Checking element at index {} (value: {})", attempt, mid, value),
            );

            match value.cmp(&target) {
                Ordering::Equal => {
                    recorder.record_complete(
                        self.snapshot(left, right, Some(mid), SearchOutcome::Found(mid)),
                        format!("Found target {} at index {}!", target, mid),
                    );
                    return recorder.finish();
                }
                Ordering::Less => {
                    left = mid as isize + 1;
                    recorder.record(
                        self.snapshot(left, right, Some(mid), SearchOutcome::Searching),
                        format!("{} < {}, so search in the right half", value, target),
                    );
                }
                Ordering::Greater => {
                    right = mid as isize - 1;
                    recorder.record(
                        self.snapshot(left, right, Some(mid), SearchOutcome::Searching),
                        format!("{} > {}, so search in the left half", value, target),
                    );
                }
            }
            attempt += 1;
        }

        recorder.record_complete(self.snapshot(left, right, None, SearchOutcome::NotFound), not_found);
        recorder.finish()
    }
}
