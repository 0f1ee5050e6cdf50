// sortty: sorting and data structure visualizer for the terminal

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::algorithms::SortAlgorithm;
use sortty::config::{Cli, Mode, Settings};
use sortty::controller::RunStatus;
use sortty::logging::{self, LogTarget};
use sortty::session::Session;
use sortty::trace::TraceSink;
use sortty::ui::App;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(cli)?;

    match settings.mode {
        Mode::Interactive => run_interactive(&settings),
        Mode::Trace { algorithm } => run_trace(&settings, algorithm),
    }
}

fn build_session(settings: &Settings) -> Result<Session> {
    let mut session = Session::new(settings.pacing_ms, settings.seed);
    match &settings.values {
        Some(values) => session
            .set_custom_values(values)
            .context("failed to load --values")?,
        None => session
            .generate_random(settings.array_size)
            .context("failed to generate the starting array")?,
    }
    Ok(session)
}

fn run_trace(settings: &Settings, algorithm: SortAlgorithm) -> Result<()> {
    logging::init(LogTarget::Stderr, &settings.log_level)?;

    let mut session = build_session(settings)?;
    session.set_algorithm(algorithm);

    let stdout = io::stdout();
    let mut sink = TraceSink::new(stdout.lock());
    let outcome = session.start(&mut sink)?;
    let accents = sink.accents();
    if sink.failed() {
        anyhow::bail!("failed to write the trace to stdout");
    }

    let mut out = sink.into_inner();
    let verb = match outcome.status {
        RunStatus::Completed => "finished",
        RunStatus::Cancelled => "stopped",
    };
    writeln!(
        out,
        "{} {} after {} steps ({} moves)",
        algorithm, verb, outcome.steps, accents
    )?;
    Ok(())
}

fn run_interactive(settings: &Settings) -> Result<()> {
    let target = match &settings.log_file {
        Some(path) => LogTarget::File(path),
        None => LogTarget::Disabled,
    };
    logging::init(target, &settings.log_level).context("failed to open the log file")?;

    let session = build_session(settings)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session, settings.speed);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
