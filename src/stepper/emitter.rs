//! The emitter an algorithm body suspends through

use super::run_state::Controls;
use std::time::Duration;
use thiserror::Error;

/// What an emitted step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Elements are being compared; nothing moved yet
    Compare,
    /// Two elements were exchanged
    Swap,
    /// A single position is being written (shift target, merge output)
    Write,
    /// The run completed; delivered once, unpaced
    Finished,
}

/// One observable pause point during a run
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    /// Zero-based position among the paced steps of this run
    pub index: usize,
    pub kind: StepKind,
    /// Full snapshot of the sequence at this point
    pub values: &'a [i32],
    pub highlighted: &'a [usize],
    pub mutated: bool,
}

/// Result of an emission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Cancelled,
}

impl Signal {
    pub fn into_result(self) -> Result<(), Cancelled> {
        match self {
            Signal::Continue => Ok(()),
            Signal::Cancelled => Err(Cancelled),
        }
    }
}

/// Termination signal carried up through an algorithm's recursion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("run cancelled")]
pub struct Cancelled;

/// Consumer of steps: the presentation layer
pub trait StepSink {
    /// Called synchronously for every emitted step
    fn on_step(&mut self, step: &Step<'_>);

    /// Accent cue for mutating steps
    fn on_accent(&mut self) {}

    /// Wait out the pacing interval after a step
    fn pause(&mut self, interval: Duration, _controls: &Controls<'_>) {
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }
}

impl<S: StepSink + ?Sized> StepSink for &mut S {
    fn on_step(&mut self, step: &Step<'_>) {
        (**self).on_step(step);
    }

    fn on_accent(&mut self) {
        (**self).on_accent();
    }

    fn pause(&mut self, interval: Duration, controls: &Controls<'_>) {
        (**self).pause(interval, controls);
    }
}

pub struct Emitter<'a, S: StepSink + ?Sized> {
    controls: Controls<'a>,
    sink: &'a mut S,
    emitted: usize,
}

impl<'a, S: StepSink + ?Sized> Emitter<'a, S> {
    pub fn new(controls: Controls<'a>, sink: &'a mut S) -> Self {
        Emitter {
            controls,
            sink,
            emitted: 0,
        }
    }

    /// Deliver a step and pace, or report cancellation without doing either
    pub fn emit(
        &mut self,
        kind: StepKind,
        values: &[i32],
        highlighted: &[usize],
        mutated: bool,
    ) -> Signal {
        if self.controls.run.is_cancelled() {
            return Signal::Cancelled;
        }

        let step = Step {
            index: self.emitted,
            kind,
            values,
            highlighted,
            mutated,
        };
        self.sink.on_step(&step);
        if mutated {
            self.sink.on_accent();
        }
        self.emitted += 1;

        // read fresh so a speed change lands on the next pause
        let interval = self.controls.pacing.interval();
        self.sink.pause(interval, &self.controls);
        Signal::Continue
    }

    /// [`emit`](Self::emit) as a `Result`, for `?` in algorithm bodies
    pub fn step(
        &mut self,
        kind: StepKind,
        values: &[i32],
        highlighted: &[usize],
        mutated: bool,
    ) -> Result<(), Cancelled> {
        self.emit(kind, values, highlighted, mutated).into_result()
    }

    /// Accent cue for a mutation that has no step of its own
    pub fn accent(&mut self) {
        self.sink.on_accent();
    }

    /// Final, unpaced step showing the completed state
    pub fn finish(&mut self, values: &[i32]) {
        let step = Step {
            index: self.emitted,
            kind: StepKind::Finished,
            values,
            highlighted: &[],
            mutated: false,
        };
        self.sink.on_step(&step);
    }

    /// Number of paced steps emitted so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn controls(&self) -> Controls<'a> {
        self.controls
    }
}
