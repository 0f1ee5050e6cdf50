// Shared helpers for the integration tests

#![allow(dead_code)]

use sortty::algorithms::SortAlgorithm;
use sortty::controller::{RunController, RunOutcome};
use sortty::stepper::{Controls, Step, StepKind, StepSink};
use std::time::Duration;

/// Owned copy of one emitted step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedStep {
    pub index: usize,
    pub kind: StepKind,
    pub values: Vec<i32>,
    pub highlighted: Vec<usize>,
    pub mutated: bool,
}

/// Sink that records everything and never sleeps
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub steps: Vec<RecordedStep>,
    pub accents: usize,
    pub pauses: Vec<Duration>,
    /// Request cancellation during the pause after this many paced steps
    pub cancel_after: Option<usize>,
}

impl RecordingSink {
    pub fn cancelling_after(steps: usize) -> Self {
        RecordingSink {
            cancel_after: Some(steps),
            ..Default::default()
        }
    }

    /// Steps that were paced (everything but the finished step)
    pub fn paced(&self) -> Vec<&RecordedStep> {
        self.steps
            .iter()
            .filter(|s| s.kind != StepKind::Finished)
            .collect()
    }

    pub fn mutated_count(&self) -> usize {
        self.steps.iter().filter(|s| s.mutated).count()
    }

    pub fn finished(&self) -> Option<&RecordedStep> {
        self.steps.iter().find(|s| s.kind == StepKind::Finished)
    }
}

impl StepSink for RecordingSink {
    fn on_step(&mut self, step: &Step<'_>) {
        self.steps.push(RecordedStep {
            index: step.index,
            kind: step.kind,
            values: step.values.to_vec(),
            highlighted: step.highlighted.to_vec(),
            mutated: step.mutated,
        });
    }

    fn on_accent(&mut self) {
        self.accents += 1;
    }

    fn pause(&mut self, interval: Duration, controls: &Controls<'_>) {
        self.pauses.push(interval);
        if let Some(limit) = self.cancel_after {
            if self.pauses.len() >= limit {
                controls.run.request_cancel();
            }
        }
    }
}

/// Run `algorithm` over a copy of `input` with no pacing
pub fn run_sort(
    algorithm: SortAlgorithm,
    input: &[i32],
    sink: &mut RecordingSink,
) -> (Vec<i32>, RunOutcome) {
    let controller = RunController::new(0);
    let mut values = input.to_vec();
    let outcome = controller
        .start(algorithm, &mut values, sink)
        .expect("controller is idle");
    (values, outcome)
}

pub fn sorted_copy(values: &[i32]) -> Vec<i32> {
    let mut copy = values.to_vec();
    copy.sort_unstable();
    copy
}
