//! Shared run flags and pacing
//!
//! Both types use `Cell` so the controller, the emitter and a sink can all
//! hold `&` references to them during a run. They are intentionally `!Sync`.

use std::cell::Cell;
use std::time::Duration;

/// Flags for one run, created when it starts and dropped when it returns
#[derive(Debug)]
pub struct RunState {
    running: Cell<bool>,
    cancelled: Cell<bool>,
}

impl RunState {
    pub fn new() -> Self {
        RunState {
            running: Cell::new(true),
            cancelled: Cell::new(false),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Ask the run to stop at its next emission
    pub fn request_cancel(&self) {
        if self.running.get() {
            self.cancelled.set(true);
        }
    }

    pub(crate) fn mark_finished(&self) {
        self.running.set(false);
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Delay applied after each emitted step
#[derive(Debug)]
pub struct Pacing {
    millis: Cell<u64>,
}

impl Pacing {
    pub fn new(millis: u64) -> Self {
        Pacing {
            millis: Cell::new(millis),
        }
    }

    pub fn millis(&self) -> u64 {
        self.millis.get()
    }

    pub fn set_millis(&self, millis: u64) {
        self.millis.set(millis);
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.millis.get())
    }
}

/// What a sink may touch while pausing
#[derive(Debug, Clone, Copy)]
pub struct Controls<'a> {
    pub run: &'a RunState,
    pub pacing: &'a Pacing,
}
