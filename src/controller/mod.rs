//! Run controller
//!
//! Owns at most one active run. Every method takes `&self`, so a sink holding a
//! shared handle to the controller can cancel (or try to start another run)
//! from inside a pause.
//!
//! # Phases
//!
//! ```text
//! Idle ──start──▶ Running ──┬──▶ Completed
//!   ▲                        └──▶ Cancelled
//!   └──────────── reset ◀───────────┘
//! ```
//!
//! `Completed` and `Cancelled` behave like `Idle` for `start` and `cancel`;
//! they only record how the last run ended.

use crate::algorithms::SortAlgorithm;
use crate::errors::VisualError;
use crate::stepper::{Cancelled, Controls, Emitter, Pacing, RunState, StepSink};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// How a finished run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub algorithm: SortAlgorithm,
    pub status: RunStatus,
    /// Paced steps emitted before the run returned
    pub steps: usize,
}

#[derive(Debug)]
pub struct RunController {
    phase: Cell<RunPhase>,
    active: RefCell<Option<Rc<RunState>>>,
    pacing: Pacing,
}

impl RunController {
    pub fn new(pacing_ms: u64) -> Self {
        RunController {
            phase: Cell::new(RunPhase::Idle),
            active: RefCell::new(None),
            pacing: Pacing::new(pacing_ms),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase.get()
    }

    pub fn is_running(&self) -> bool {
        self.phase.get() == RunPhase::Running
    }

    pub fn pacing_ms(&self) -> u64 {
        self.pacing.millis()
    }

    /// Takes effect at the next pause, never the one in progress
    pub fn set_pacing(&self, millis: u64) {
        debug!(millis, "pacing changed");
        self.pacing.set_millis(millis);
    }

    /// Run `algorithm` over `values` until it completes or is cancelled
    pub fn start<S: StepSink + ?Sized>(
        &self,
        algorithm: SortAlgorithm,
        values: &mut [i32],
        sink: &mut S,
    ) -> Result<RunOutcome, VisualError> {
        if self.is_running() {
            debug!(%algorithm, "start rejected: a run is already active");
            return Err(VisualError::AlreadyRunning);
        }

        let run = Rc::new(RunState::new());
        *self.active.borrow_mut() = Some(Rc::clone(&run));
        self.phase.set(RunPhase::Running);
        info!(%algorithm, len = values.len(), "run started");

        let controls = Controls {
            run: &run,
            pacing: &self.pacing,
        };
        let mut emitter = Emitter::new(controls, sink);

        let status = match algorithm.run(values, &mut emitter) {
            Ok(()) => {
                emitter.finish(values);
                RunStatus::Completed
            }
            Err(Cancelled) => RunStatus::Cancelled,
        };
        let steps = emitter.emitted();

        run.mark_finished();
        self.active.borrow_mut().take();
        self.phase.set(match status {
            RunStatus::Completed => RunPhase::Completed,
            RunStatus::Cancelled => RunPhase::Cancelled,
        });
        info!(%algorithm, steps, ?status, "run finished");

        Ok(RunOutcome {
            algorithm,
            status,
            steps,
        })
    }

    /// Request cancellation; observed at the run's next emission
    pub fn cancel(&self) -> Result<(), VisualError> {
        if !self.is_running() {
            return Err(VisualError::NotRunning);
        }

        match self.active.borrow().as_ref() {
            Some(run) => {
                run.request_cancel();
                info!("cancel requested");
                Ok(())
            }
            None => Err(VisualError::NotRunning),
        }
    }

    /// Forget how the last run ended
    pub fn reset(&self) {
        if !self.is_running() {
            self.phase.set(RunPhase::Idle);
        }
    }
}

impl Default for RunController {
    fn default() -> Self {
        Self::new(crate::config::pacing_for_speed(crate::constants::DEFAULT_SPEED))
    }
}
