//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so interactive sessions only log when a log file
//! is given. Trace mode logs to stderr, keeping stdout for the step listing.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log output goes
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init(target: LogTarget<'_>, default_level: &str) -> std::io::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    // try_init only fails if a subscriber is already installed, which is fine
    match target {
        LogTarget::File(path) => {
            let file = File::create(path)?;
            let _ = builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        LogTarget::Stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        LogTarget::Disabled => {}
    }
    Ok(())
}
