//! Command-line configuration
//!
//! [`Cli`] is the raw clap definition; [`Settings`] is what the rest of the
//! program consumes after validation.

use crate::algorithms::SortAlgorithm;
use crate::constants::{
    DEFAULT_ARRAY_SIZE, DEFAULT_SPEED, MAX_ARRAY_SIZE, MAX_SPEED, MIN_SPEED, PACING_BASE_MS,
    PACING_STEP_MS,
};
use crate::errors::VisualError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pacing in milliseconds for a speed-slider position (clamped to 1..=10)
pub fn pacing_for_speed(speed: u8) -> u64 {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED) as u64;
    PACING_BASE_MS - speed * PACING_STEP_MS
}

#[derive(Parser, Debug)]
#[command(
    name = "sortty",
    version,
    about = "Watch sorting algorithms and data structures at work in the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Animation speed from 1 (slowest) to 10 (fastest)
    #[arg(long, default_value_t = DEFAULT_SPEED, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub speed: u8,

    /// Size of the randomly generated array
    #[arg(long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Comma-separated starting values instead of a random array
    #[arg(long)]
    pub values: Option<String>,

    /// Seed for random array generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one sort without the TUI, printing every step
    Trace {
        /// bubble, selection, insertion, merge or quick
        algorithm: String,
        /// Pause between steps in milliseconds
        #[arg(long, default_value_t = 0)]
        pacing_ms: u64,
    },
}

/// How the binary should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Interactive,
    Trace { algorithm: SortAlgorithm },
}

/// Validated configuration
#[derive(Debug, Clone)]
pub struct Settings {
    pub mode: Mode,
    pub speed: u8,
    pub pacing_ms: u64,
    pub array_size: usize,
    pub values: Option<String>,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self, VisualError> {
        if cli.size == 0 || cli.size > MAX_ARRAY_SIZE {
            return Err(VisualError::invalid(format!(
                "--size must be between 1 and {}",
                MAX_ARRAY_SIZE
            )));
        }

        let (mode, pacing_ms) = match cli.command {
            None => (Mode::Interactive, pacing_for_speed(cli.speed)),
            Some(Commands::Trace {
                algorithm,
                pacing_ms,
            }) => (
                Mode::Trace {
                    algorithm: algorithm.parse()?,
                },
                pacing_ms,
            ),
        };

        Ok(Settings {
            mode,
            speed: cli.speed,
            pacing_ms,
            array_size: cli.size,
            values: cli.values,
            seed: cli.seed,
            log_file: cli.log_file,
            log_level: cli.log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_maps_to_pacing() {
        assert_eq!(pacing_for_speed(1), 1000);
        assert_eq!(pacing_for_speed(6), 500);
        assert_eq!(pacing_for_speed(10), 100);
        assert_eq!(pacing_for_speed(0), 1000);
        assert_eq!(pacing_for_speed(42), 100);
    }

    #[test]
    fn test_trace_subcommand() {
        let cli = Cli::parse_from(["sortty", "--values", "3,1,2", "trace", "merge"]);
        let settings = Settings::from_cli(cli).expect("valid settings");
        assert_eq!(
            settings.mode,
            Mode::Trace {
                algorithm: SortAlgorithm::Merge
            }
        );
        assert_eq!(settings.pacing_ms, 0);
        assert_eq!(settings.values.as_deref(), Some("3,1,2"));
    }

    #[test]
    fn test_unknown_trace_algorithm_is_rejected() {
        let cli = Cli::parse_from(["sortty", "trace", "bogo"]);
        assert!(matches!(
            Settings::from_cli(cli),
            Err(VisualError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_size_bounds() {
        let cli = Cli::parse_from(["sortty", "--size", "0"]);
        assert!(Settings::from_cli(cli).is_err());
    }
}
