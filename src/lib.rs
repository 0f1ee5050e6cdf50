//! # Introduction
//!
//! sortty animates classic sorting algorithms and elementary data structures
//! in the terminal. A sort runs in place on an integer array and pauses after
//! every comparison or move so the current state can be drawn; the run can be
//! sped up, slowed down or stopped while it is paused.
//!
//! ## Pipeline
//!
//! ```text
//! Session → RunController → SortAlgorithm → Emitter → StepSink (TUI / trace)
//! ```
//!
//! 1. [`collections`]: the array, linked list, stack, queue and binary search
//!    tree being visualized.
//! 2. [`stepper`]: the [`stepper::Emitter`] each algorithm suspends through,
//!    with the per-run [`stepper::RunState`] and shared [`stepper::Pacing`].
//! 3. [`algorithms`]: bubble, selection, insertion, merge and quick sort, plus
//!    BST insert/delete/traversals.
//! 4. [`controller`]: owns the single active run and its cancellation.
//! 5. [`session`]: the control surface: every user operation and the text
//!    command parser.
//! 6. [`ui`]: ratatui-based TUI; [`trace`]: plain-text sink for the CLI.
//!
//! ## Example
//!
//! ```
//! use sortty::algorithms::SortAlgorithm;
//! use sortty::controller::{RunController, RunStatus};
//! use sortty::trace::TraceSink;
//!
//! let controller = RunController::new(0);
//! let mut values = vec![5, 3, 8, 1];
//! let mut sink = TraceSink::new(Vec::new());
//!
//! let outcome = controller
//!     .start(SortAlgorithm::Bubble, &mut values, &mut sink)
//!     .unwrap();
//! assert_eq!(outcome.status, RunStatus::Completed);
//! assert_eq!(values, [1, 3, 5, 8]);
//! ```

pub mod algorithms;
pub mod collections;
pub mod config;
pub mod constants;
pub mod controller;
pub mod errors;
pub mod logging;
pub mod session;
pub mod stepper;
pub mod trace;
pub mod ui;
