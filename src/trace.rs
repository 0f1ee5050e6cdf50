//! Plain-text step sink for the `trace` subcommand
//!
//! Each step becomes one line:
//!
//! ```text
//!    1 compare  [5, 3, 8, 1]  at 0,1
//!    2 swap*    [3, 5, 8, 1]  at 0,1
//!      finished [1, 3, 5, 8]
//! ```
//!
//! A `*` marks steps that moved data.

use crate::stepper::{Step, StepKind, StepSink};
use std::io::Write;

pub struct TraceSink<W: Write> {
    out: W,
    accents: usize,
    failed: bool,
}

impl<W: Write> TraceSink<W> {
    pub fn new(out: W) -> Self {
        TraceSink {
            out,
            accents: 0,
            failed: false,
        }
    }

    pub fn accents(&self) -> usize {
        self.accents
    }

    /// Whether any write to the output failed
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render one step the way the trace listing shows it
pub fn format_step(step: &Step<'_>) -> String {
    let kind = match step.kind {
        StepKind::Compare => "compare",
        StepKind::Swap => "swap",
        StepKind::Write => "write",
        StepKind::Finished => "finished",
    };
    let marker = if step.mutated { "*" } else { "" };
    let number = if step.kind == StepKind::Finished {
        String::new()
    } else {
        (step.index + 1).to_string()
    };

    let mut line = format!(
        "{:>4} {:<9}{:?}",
        number,
        format!("{}{}", kind, marker),
        step.values
    );
    if !step.highlighted.is_empty() {
        let indices: Vec<String> = step.highlighted.iter().map(|i| i.to_string()).collect();
        line.push_str(&format!("  at {}", indices.join(",")));
    }
    line
}

impl<W: Write> StepSink for TraceSink<W> {
    fn on_step(&mut self, step: &Step<'_>) {
        if writeln!(self.out, "{}", format_step(step)).is_err() {
            self.failed = true;
        }
    }

    fn on_accent(&mut self) {
        self.accents += 1;
    }
}
