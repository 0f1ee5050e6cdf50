//! Error types for structure operations and run control
//!
//! This module defines [`VisualError`], which covers every failure the control
//! surface can report back to the presentation layer. None of them are fatal:
//! the operation that produced one is a no-op and the session carries on.
//!
//! Cancellation of a run is not an error and lives in
//! [`stepper::Cancelled`](crate::stepper::Cancelled) instead.

use std::fmt;
use thiserror::Error;

/// The structure an [`VisualError::EmptyStructure`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Structure {
    List,
    Stack,
    Queue,
    Tree,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Structure::List => "List",
            Structure::Stack => "Stack",
            Structure::Queue => "Queue",
            Structure::Tree => "Tree",
        };
        f.write_str(name)
    }
}

/// Recoverable errors surfaced by the control surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisualError {
    /// Non-numeric or out-of-range value, index or command
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Removal or inspection on an empty stack, queue or list
    #[error("{0} is empty")]
    EmptyStructure(Structure),

    /// A run was requested while another one is still active
    #[error("A run is already in progress")]
    AlreadyRunning,

    /// Cancel was requested with no active run
    #[error("No run is in progress")]
    NotRunning,
}

impl VisualError {
    pub fn invalid(message: impl Into<String>) -> Self {
        VisualError::InvalidInput(message.into())
    }
}
