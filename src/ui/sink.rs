//! The TUI as a step sink
//!
//! While a run is in progress the normal event loop is blocked inside
//! [`RunController::start`](crate::controller::RunController::start). This
//! sink keeps the terminal alive in the meantime: it draws every step and, in
//! each pause, polls the keyboard so the user can stop the run or change the
//! speed.

use crate::algorithms::SortAlgorithm;
use crate::config::pacing_for_speed;
use crate::constants::{MAX_SPEED, MIN_SPEED};
use crate::stepper::{Controls, Step, StepKind, StepSink};
use crate::ui::app::Tab;
use crate::ui::panes::{
    render_sequence_pane, render_status_bar, render_tab_bar, screen_areas, SequenceRenderData,
    StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Longest single wait on the keyboard inside a pause
const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub struct TuiSink<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    algorithm: SortAlgorithm,
    speed: u8,
    pacing_ms: u64,
    accents: usize,
    quit_requested: bool,
    error: Option<io::Error>,
}

impl<'t, B: Backend> TuiSink<'t, B> {
    pub fn new(
        terminal: &'t mut Terminal<B>,
        algorithm: SortAlgorithm,
        speed: u8,
        pacing_ms: u64,
    ) -> Self {
        TuiSink {
            terminal,
            algorithm,
            speed,
            pacing_ms,
            accents: 0,
            quit_requested: false,
            error: None,
        }
    }

    pub fn speed(&self) -> u8 {
        self.speed
    }

    pub fn accents(&self) -> usize {
        self.accents
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// The first terminal error hit during the run, if any
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Returns `true` when the key ends the current pause
    fn handle_key(&mut self, key: KeyEvent, controls: &Controls<'_>) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('s') => {
                info!("run stopped from keyboard");
                controls.run.request_cancel();
                true
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.quit_requested = true;
                controls.run.request_cancel();
                true
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_speed(self.speed.saturating_add(1), controls);
                false
            }
            KeyCode::Char('-') => {
                self.change_speed(self.speed.saturating_sub(1), controls);
                false
            }
            _ => false,
        }
    }

    fn change_speed(&mut self, speed: u8, controls: &Controls<'_>) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self.pacing_ms = pacing_for_speed(self.speed);
        controls.pacing.set_millis(self.pacing_ms);
    }

    fn fail(&mut self, error: io::Error, controls: &Controls<'_>) {
        warn!(%error, "terminal error during run");
        self.error = Some(error);
        controls.run.request_cancel();
    }
}

impl<B: Backend> StepSink for TuiSink<'_, B> {
    fn on_step(&mut self, step: &Step<'_>) {
        if self.error.is_some() {
            return;
        }

        let finished = step.kind == StepKind::Finished;
        let message = if finished {
            format!("{} finished", self.algorithm)
        } else {
            format!("Step {} · {:?}", step.index + 1, step.kind)
        };
        let data = SequenceRenderData {
            values: step.values,
            highlighted: step.highlighted,
            mutated: step.mutated,
            algorithm: self.algorithm,
            pacing_ms: self.pacing_ms,
            speed: self.speed,
            accents: self.accents,
            sorted: finished,
        };

        let result = self.terminal.draw(|frame| {
            let areas = screen_areas(frame.area());
            render_tab_bar(frame, areas.tabs, Tab::Sorting);
            render_sequence_pane(frame, areas.body, &data);
            render_status_bar(
                frame,
                areas.status,
                &StatusRenderData {
                    message: &message,
                    is_error: false,
                    is_running: !finished,
                    tab: Tab::Sorting,
                },
            );
        });
        if let Err(error) = result {
            warn!(%error, "failed to draw step");
            self.error = Some(error);
        }
    }

    fn on_accent(&mut self) {
        self.accents += 1;
    }

    fn pause(&mut self, interval: Duration, controls: &Controls<'_>) {
        if self.error.is_some() {
            controls.run.request_cancel();
            return;
        }

        let deadline = Instant::now() + interval;
        loop {
            let now = Instant::now();
            if now >= deadline {
                break;
            }

            match event::poll((deadline - now).min(POLL_INTERVAL)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, controls) {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(error) => {
                        self.fail(error, controls);
                        break;
                    }
                },
                Ok(false) => {}
                Err(error) => {
                    self.fail(error, controls);
                    break;
                }
            }
        }
    }
}
