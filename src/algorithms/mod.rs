//! Algorithm engine
//!
//! - [`sorts`]: the five animated comparison sorts
//! - [`tree`]: binary search tree insert, delete, traversals and metrics
//!
//! Sorts suspend through a [`crate::stepper::Emitter`] and return
//! `Err(Cancelled)` as soon as an emission reports cancellation. Tree
//! procedures are synchronous and emit nothing.

pub mod sorts;
pub mod tree;

use crate::errors::VisualError;
use crate::stepper::{Cancelled, Emitter, StepSink};
use std::fmt;
use std::str::FromStr;

pub use tree::Traversal;

/// The sort procedures a run can execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

/// Static descriptive metadata shown next to the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
    pub stable: bool,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "Bubble Sort",
            SortAlgorithm::Selection => "Selection Sort",
            SortAlgorithm::Insertion => "Insertion Sort",
            SortAlgorithm::Merge => "Merge Sort",
            SortAlgorithm::Quick => "Quick Sort",
        }
    }

    pub fn complexity(self) -> Complexity {
        match self {
            SortAlgorithm::Bubble => Complexity {
                time: "O(n²)",
                space: "O(1)",
                stable: true,
            },
            SortAlgorithm::Selection => Complexity {
                time: "O(n²)",
                space: "O(1)",
                stable: false,
            },
            SortAlgorithm::Insertion => Complexity {
                time: "O(n²)",
                space: "O(1)",
                stable: true,
            },
            SortAlgorithm::Merge => Complexity {
                time: "O(n log n)",
                space: "O(n)",
                stable: true,
            },
            SortAlgorithm::Quick => Complexity {
                time: "O(n²)",
                space: "O(log n)",
                stable: false,
            },
        }
    }

    /// The next algorithm in selector order, wrapping around
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }

    /// Run this sort in place, suspending through `emitter`
    pub fn run<S: StepSink + ?Sized>(
        self,
        values: &mut [i32],
        emitter: &mut Emitter<'_, S>,
    ) -> Result<(), Cancelled> {
        match self {
            SortAlgorithm::Bubble => sorts::bubble_sort(values, emitter),
            SortAlgorithm::Selection => sorts::selection_sort(values, emitter),
            SortAlgorithm::Insertion => sorts::insertion_sort(values, emitter),
            SortAlgorithm::Merge => sorts::merge_sort(values, emitter),
            SortAlgorithm::Quick => sorts::quick_sort(values, emitter),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = VisualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "selection" => Ok(SortAlgorithm::Selection),
            "insertion" => Ok(SortAlgorithm::Insertion),
            "merge" => Ok(SortAlgorithm::Merge),
            "quick" => Ok(SortAlgorithm::Quick),
            other => Err(VisualError::invalid(format!(
                "unknown algorithm '{}' (expected bubble, selection, insertion, merge or quick)",
                other
            ))),
        }
    }
}
