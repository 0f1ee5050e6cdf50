//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, tabs, command prompt
//! - **[`sink`]**: the [`StepSink`](crate::stepper::StepSink) that draws steps
//!   and polls keys while a run is in progress
//! - **[`panes`]**: stateless render functions for each structure and the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Session`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Session`]: crate::session::Session
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod sink;
pub mod theme;

pub use app::App;
