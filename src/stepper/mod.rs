//! Step emission for animated runs
//!
//! An algorithm body calls into an [`Emitter`] at every point a viewer should
//! see. Each emission:
//!
//! 1. returns [`Signal::Cancelled`] straight away if the run was cancelled,
//! 2. hands a [`Step`] (full snapshot + highlighted indices) to the
//!    [`StepSink`],
//! 3. fires the accent cue when the step mutated the structure,
//! 4. lets the sink pause for the current [`Pacing`] interval.
//!
//! # Suspension model
//!
//! There is a single thread of control. The sink's [`StepSink::pause`] is the
//! only yield point, so between two emissions the algorithm has exclusive
//! access to the data. Cancellation is polled, never preemptive: a cancel
//! requested during a pause is observed by the next emission.
//!
//! ```text
//! algorithm ──emit──▶ Emitter ──on_step──▶ sink
//!     ▲                  │   └─pause────▶ sink (may cancel / change pacing)
//!     └──── Continue ────┘
//! ```

pub mod emitter;
pub mod run_state;

pub use emitter::{Cancelled, Emitter, Signal, Step, StepKind, StepSink};
pub use run_state::{Controls, Pacing, RunState};
