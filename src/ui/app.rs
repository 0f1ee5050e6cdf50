//! Main TUI application state and logic

use crate::algorithms::Traversal;
use crate::config::pacing_for_speed;
use crate::constants::{MAX_SPEED, MIN_SPEED};
use crate::controller::RunPhase;
use crate::session::command::Command;
use crate::session::Session;
use crate::stepper::{Step, StepSink};
use crate::ui::panes::{
    render_list_pane, render_prompt, render_queue_pane, render_sequence_pane, render_stack_pane,
    render_status_bar, render_tab_bar, render_tree_pane, screen_areas, SequenceRenderData,
    StatusRenderData, TreeRenderData,
};
use crate::ui::sink::TuiSink;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;
use std::time::Duration;
use tracing::debug;

/// Which structure is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Sorting,
    LinkedList,
    Stack,
    Queue,
    Tree,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Sorting,
        Tab::LinkedList,
        Tab::Stack,
        Tab::Queue,
        Tab::Tree,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Sorting => "Sorting",
            Tab::LinkedList => "Linked List",
            Tab::Stack => "Stack",
            Tab::Queue => "Queue",
            Tab::Tree => "Tree",
        }
    }

    /// Move to the next tab (wrapping)
    pub fn next(self) -> Self {
        match self {
            Tab::Sorting => Tab::LinkedList,
            Tab::LinkedList => Tab::Stack,
            Tab::Stack => Tab::Queue,
            Tab::Queue => Tab::Tree,
            Tab::Tree => Tab::Sorting,
        }
    }

    /// Move to the previous tab (wrapping)
    pub fn prev(self) -> Self {
        match self {
            Tab::Sorting => Tab::Tree,
            Tab::LinkedList => Tab::Sorting,
            Tab::Stack => Tab::LinkedList,
            Tab::Queue => Tab::Stack,
            Tab::Tree => Tab::Queue,
        }
    }
}

/// Sink for commands executed outside a run; nothing is animated
struct Silent;

impl StepSink for Silent {
    fn on_step(&mut self, _step: &Step<'_>) {}

    fn pause(&mut self, _interval: Duration, _controls: &crate::stepper::Controls<'_>) {}
}

/// The main application state
pub struct App {
    pub session: Session,

    /// Tab currently on screen
    pub tab: Tab,

    /// Speed slider position, 1..=10
    pub speed: u8,

    /// Command line contents while typing, `None` otherwise
    pub input: Option<String>,

    /// Status message to display
    pub status_message: String,
    pub status_is_error: bool,

    /// Accent cues fired by the last run
    pub last_accents: usize,

    /// Index highlighted by the last list search
    pub found_index: Option<usize>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    pub fn new(session: Session, speed: u8) -> Self {
        App {
            session,
            tab: Tab::Sorting,
            speed,
            input: None,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_accents: 0,
            found_index: None,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key, terminal)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let areas = screen_areas(frame.area());
        render_tab_bar(frame, areas.tabs, self.tab);

        match self.tab {
            Tab::Sorting => {
                let data = SequenceRenderData {
                    values: self.session.sequence().values(),
                    highlighted: &[],
                    mutated: false,
                    algorithm: self.session.algorithm(),
                    pacing_ms: self.session.controller().pacing_ms(),
                    speed: self.speed,
                    accents: self.last_accents,
                    sorted: self.session.controller().phase() == RunPhase::Completed,
                };
                render_sequence_pane(frame, areas.body, &data);
            }
            Tab::LinkedList => {
                render_list_pane(frame, areas.body, self.session.list(), self.found_index)
            }
            Tab::Stack => render_stack_pane(frame, areas.body, self.session.stack()),
            Tab::Queue => render_queue_pane(frame, areas.body, self.session.queue()),
            Tab::Tree => {
                let data = TreeRenderData {
                    tree: self.session.tree(),
                    last_traversal: self.session.last_traversal(),
                };
                render_tree_pane(frame, areas.body, &data);
            }
        }

        match &self.input {
            Some(input) => render_prompt(frame, areas.status, input),
            None => render_status_bar(
                frame,
                areas.status,
                &StatusRenderData {
                    message: &self.status_message,
                    is_error: self.status_is_error,
                    is_running: false,
                    tab: self.tab,
                },
            ),
        }
    }

    /// Handle keyboard events
    fn handle_key_event<B: Backend>(
        &mut self,
        key: KeyEvent,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()> {
        if self.input.is_some() {
            return self.handle_input_key(key, terminal);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.tab = self.tab.next();
            }
            KeyCode::BackTab => {
                self.tab = self.tab.prev();
            }
            KeyCode::Char(':') | KeyCode::Char('/') => {
                self.input = Some(String::new());
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_speed(self.speed.saturating_add(1));
            }
            KeyCode::Char('-') => {
                self.change_speed(self.speed.saturating_sub(1));
            }
            KeyCode::Char('s') | KeyCode::Enter if self.tab == Tab::Sorting => {
                self.start_sort(terminal)?;
            }
            KeyCode::Char('a') if self.tab == Tab::Sorting => {
                let next = self.session.algorithm().next();
                self.session.set_algorithm(next);
                self.set_status(format!("Selected {}", next), false);
            }
            KeyCode::Char('g') if self.tab == Tab::Sorting => {
                let size = self.session.sequence().len().max(1);
                let result = self.session.generate_random(size);
                self.report(result.map(|()| format!("Generated {} random values", size)));
            }
            KeyCode::Char('t') if self.tab == Tab::Tree => {
                // cycle through the traversal orders
                let order = match self.session.last_traversal() {
                    Some((order, _)) => {
                        let position = Traversal::ALL.iter().position(|t| *t == order).unwrap_or(0);
                        Traversal::ALL[(position + 1) % Traversal::ALL.len()]
                    }
                    None => Traversal::InOrder,
                };
                self.session.traverse(order);
                self.set_status(format!("{} traversal done", order), false);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_input_key<B: Backend>(
        &mut self,
        key: KeyEvent,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()> {
        let Some(input) = self.input.as_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => {
                self.input = None;
            }
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(c) => {
                input.push(c);
            }
            KeyCode::Enter => {
                let line = self.input.take().unwrap_or_default();
                self.submit_command(&line, terminal)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn submit_command<B: Backend>(&mut self, line: &str, terminal: &mut Terminal<B>) -> io::Result<()> {
        debug!(line, "command submitted");
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                self.set_status(e.to_string(), true);
                return Ok(());
            }
        };

        self.found_index = None;
        match command {
            Command::Sort(algorithm) => {
                if let Some(algorithm) = algorithm {
                    self.session.set_algorithm(algorithm);
                }
                self.tab = Tab::Sorting;
                self.start_sort(terminal)?;
            }
            Command::Speed(speed) => self.change_speed(speed),
            command => {
                self.tab = tab_for(&command).unwrap_or(self.tab);
                if let Command::Search(value) = command {
                    self.found_index = self.session.search(value);
                }
                let result = self.session.execute(command, &mut Silent);
                self.report(result);
            }
        }
        Ok(())
    }

    /// Animate the selected sort; blocks until the run ends
    fn start_sort<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let algorithm = self.session.algorithm();
        let pacing_ms = self.session.controller().pacing_ms();
        let mut sink = TuiSink::new(terminal, algorithm, self.speed, pacing_ms);

        let result = self.session.start(&mut sink);

        self.speed = sink.speed();
        self.last_accents = sink.accents();
        if sink.quit_requested() {
            self.should_quit = true;
        }
        if let Some(error) = sink.take_error() {
            return Err(error);
        }

        match result {
            Ok(outcome) => {
                let message = match outcome.status {
                    crate::controller::RunStatus::Completed => {
                        format!("{} finished in {} steps", algorithm, outcome.steps)
                    }
                    crate::controller::RunStatus::Cancelled => {
                        format!("{} stopped after {} steps", algorithm, outcome.steps)
                    }
                };
                self.set_status(message, false);
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
        Ok(())
    }

    fn change_speed(&mut self, speed: u8) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        self.session.set_speed(self.speed);
        self.set_status(
            format!("Speed {} ({} ms per step)", self.speed, pacing_for_speed(self.speed)),
            false,
        );
    }

    fn report(&mut self, result: Result<String, crate::errors::VisualError>) {
        match result {
            Ok(message) => self.set_status(message, false),
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = message;
        self.status_is_error = is_error;
    }
}

/// The tab a command's result is visible on
fn tab_for(command: &Command) -> Option<Tab> {
    match command {
        Command::Generate(_) | Command::Values(_) | Command::Algorithm(_) => Some(Tab::Sorting),
        Command::AddHead(_)
        | Command::AddTail(_)
        | Command::InsertAt { .. }
        | Command::RemoveHead
        | Command::RemoveTail
        | Command::Search(_) => Some(Tab::LinkedList),
        Command::Push(_) | Command::Pop | Command::Peek => Some(Tab::Stack),
        Command::Enqueue(_) | Command::Dequeue | Command::Front | Command::Rear => {
            Some(Tab::Queue)
        }
        Command::Insert(_) | Command::Delete(_) | Command::Traverse(_) => Some(Tab::Tree),
        Command::Clear(structure) => Some(match structure {
            crate::errors::Structure::List => Tab::LinkedList,
            crate::errors::Structure::Stack => Tab::Stack,
            crate::errors::Structure::Queue => Tab::Queue,
            crate::errors::Structure::Tree => Tab::Tree,
        }),
        Command::Sort(_) | Command::Speed(_) => None,
    }
}
