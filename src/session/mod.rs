//! Control surface
//!
//! A [`Session`] owns one instance of every structure plus the run controller
//! and exposes the operations a user can trigger. Each operation returns a
//! value or a [`VisualError`] for the presentation layer to report; none of
//! them panic on bad input.
//!
//! [`command`] parses the one-line text commands typed into the TUI prompt
//! and [`Session::execute`] dispatches them.

pub mod command;

use crate::algorithms::{SortAlgorithm, Traversal};
use crate::collections::{BinarySearchTree, LinkedList, Queue, Sequence, Stack};
use crate::config::pacing_for_speed;
use crate::constants::DEFAULT_ARRAY_SIZE;
use crate::controller::{RunController, RunOutcome, RunStatus};
use crate::errors::{Structure, VisualError};
use crate::stepper::StepSink;
use command::Command;
use tracing::{debug, warn};

pub struct Session {
    sequence: Sequence,
    list: LinkedList,
    stack: Stack,
    queue: Queue,
    tree: BinarySearchTree,
    controller: RunController,
    algorithm: SortAlgorithm,
    rng: fastrand::Rng,
    last_traversal: Option<(Traversal, Vec<i32>)>,
}

impl Session {
    pub fn new(pacing_ms: u64, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        let sequence = Sequence::random(&mut rng, DEFAULT_ARRAY_SIZE).unwrap_or_default();

        Session {
            sequence,
            list: LinkedList::new(),
            stack: Stack::new(),
            queue: Queue::new(),
            tree: BinarySearchTree::new(),
            controller: RunController::new(pacing_ms),
            algorithm: SortAlgorithm::Bubble,
            rng,
            last_traversal: None,
        }
    }

    // ----- sequence and runs -----

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn generate_random(&mut self, size: usize) -> Result<(), VisualError> {
        self.ensure_idle()?;
        self.sequence = Sequence::random(&mut self.rng, size)?;
        self.controller.reset();
        Ok(())
    }

    pub fn set_custom_values(&mut self, input: &str) -> Result<(), VisualError> {
        self.ensure_idle()?;
        self.sequence = Sequence::parse_custom(input)?;
        self.controller.reset();
        Ok(())
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    pub fn set_algorithm(&mut self, algorithm: SortAlgorithm) {
        self.algorithm = algorithm;
    }

    pub fn controller(&self) -> &RunController {
        &self.controller
    }

    /// Sort the sequence with the selected algorithm; blocks until the run ends
    pub fn start<S: StepSink + ?Sized>(&mut self, sink: &mut S) -> Result<RunOutcome, VisualError> {
        let algorithm = self.algorithm;
        self.controller
            .start(algorithm, self.sequence.values_mut(), sink)
    }

    pub fn cancel(&self) -> Result<(), VisualError> {
        self.controller.cancel()
    }

    pub fn set_pacing(&self, millis: u64) {
        self.controller.set_pacing(millis);
    }

    /// Speed-slider form of [`set_pacing`](Self::set_pacing)
    pub fn set_speed(&self, speed: u8) {
        self.controller.set_pacing(pacing_for_speed(speed));
    }

    // ----- linked list -----

    pub fn list(&self) -> &LinkedList {
        &self.list
    }

    pub fn add_head(&mut self, value: i32) {
        self.list.add_head(value);
    }

    pub fn add_tail(&mut self, value: i32) {
        self.list.add_tail(value);
    }

    pub fn insert_at(&mut self, value: i32, index: usize) -> Result<(), VisualError> {
        self.list.insert_at(index, value)
    }

    pub fn remove_head(&mut self) -> Result<i32, VisualError> {
        self.list.remove_head()
    }

    pub fn remove_tail(&mut self) -> Result<i32, VisualError> {
        self.list.remove_tail()
    }

    pub fn search(&self, value: i32) -> Option<usize> {
        self.list.search(value)
    }

    // ----- stack -----

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn push(&mut self, value: i32) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Result<i32, VisualError> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Result<i32, VisualError> {
        self.stack.peek()
    }

    // ----- queue -----

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn enqueue(&mut self, value: i32) {
        self.queue.enqueue(value);
    }

    pub fn dequeue(&mut self) -> Result<i32, VisualError> {
        self.queue.dequeue()
    }

    pub fn front(&self) -> Result<i32, VisualError> {
        self.queue.front()
    }

    pub fn rear(&self) -> Result<i32, VisualError> {
        self.queue.rear()
    }

    // ----- tree -----

    pub fn tree(&self) -> &BinarySearchTree {
        &self.tree
    }

    pub fn insert_bst(&mut self, value: i32) -> bool {
        self.last_traversal = None;
        self.tree.insert(value)
    }

    pub fn delete_bst(&mut self, value: i32) -> bool {
        self.last_traversal = None;
        self.tree.delete(value)
    }

    pub fn traverse(&mut self, order: Traversal) -> &[i32] {
        let values = self.tree.traverse(order);
        &self.last_traversal.insert((order, values)).1
    }

    /// The most recent traversal, cleared whenever the tree changes
    pub fn last_traversal(&self) -> Option<(Traversal, &[i32])> {
        self.last_traversal
            .as_ref()
            .map(|(order, values)| (*order, values.as_slice()))
    }

    pub fn clear(&mut self, structure: Structure) {
        match structure {
            Structure::List => self.list.clear(),
            Structure::Stack => self.stack.clear(),
            Structure::Queue => self.queue.clear(),
            Structure::Tree => {
                self.tree.clear();
                self.last_traversal = None;
            }
        }
    }

    // ----- text commands -----

    /// Parse and execute one command line
    pub fn execute_line<S: StepSink + ?Sized>(
        &mut self,
        line: &str,
        sink: &mut S,
    ) -> Result<String, VisualError> {
        let command = Command::parse(line).inspect_err(|e| warn!(line, error = %e, "rejected command"))?;
        self.execute(command, sink)
    }

    /// Run a parsed command and describe the result
    pub fn execute<S: StepSink + ?Sized>(
        &mut self,
        command: Command,
        sink: &mut S,
    ) -> Result<String, VisualError> {
        debug!(?command, "executing");
        let message = match command {
            Command::Generate(size) => {
                self.generate_random(size)?;
                format!("Generated {} random values", size)
            }
            Command::Values(input) => {
                self.set_custom_values(&input)?;
                format!("Loaded {} values", self.sequence.len())
            }
            Command::Algorithm(algorithm) => {
                self.set_algorithm(algorithm);
                format!("Selected {}", algorithm)
            }
            Command::Sort(algorithm) => {
                if let Some(algorithm) = algorithm {
                    self.set_algorithm(algorithm);
                }
                let outcome = self.start(sink)?;
                describe_outcome(&outcome)
            }
            Command::Speed(speed) => {
                self.set_speed(speed);
                format!("Speed {} ({} ms per step)", speed, self.controller.pacing_ms())
            }
            Command::AddHead(value) => {
                self.add_head(value);
                format!("Added {} at head", value)
            }
            Command::AddTail(value) => {
                self.add_tail(value);
                format!("Added {} at tail", value)
            }
            Command::InsertAt { value, index } => {
                self.insert_at(value, index)?;
                format!("Inserted {} at index {}", value, index)
            }
            Command::RemoveHead => format!("Removed head {}", self.remove_head()?),
            Command::RemoveTail => format!("Removed tail {}", self.remove_tail()?),
            Command::Search(value) => match self.search(value) {
                Some(index) => format!("Value {} found at index {}", value, index),
                None => format!("Value {} not found in the list", value),
            },
            Command::Push(value) => {
                self.push(value);
                format!("Pushed {}", value)
            }
            Command::Pop => format!("Popped: {}", self.pop()?),
            Command::Peek => format!("Top element: {}", self.peek()?),
            Command::Enqueue(value) => {
                self.enqueue(value);
                format!("Enqueued {}", value)
            }
            Command::Dequeue => format!("Dequeued: {}", self.dequeue()?),
            Command::Front => format!("Front element: {}", self.front()?),
            Command::Rear => format!("Rear element: {}", self.rear()?),
            Command::Insert(value) => {
                if self.insert_bst(value) {
                    format!("Inserted {} into the tree", value)
                } else {
                    format!("{} is already in the tree", value)
                }
            }
            Command::Delete(value) => {
                // reported the same whether or not the value was present
                self.delete_bst(value);
                format!("Node with value {} has been deleted", value)
            }
            Command::Traverse(order) => {
                let values = self.traverse(order);
                format!("{}: {}", order, join_values(values))
            }
            Command::Clear(structure) => {
                self.clear(structure);
                format!("{} cleared", structure)
            }
        };
        Ok(message)
    }

    fn ensure_idle(&self) -> Result<(), VisualError> {
        if self.controller.is_running() {
            return Err(VisualError::AlreadyRunning);
        }
        Ok(())
    }
}

fn describe_outcome(outcome: &RunOutcome) -> String {
    match outcome.status {
        RunStatus::Completed => format!("{} finished in {} steps", outcome.algorithm, outcome.steps),
        RunStatus::Cancelled => format!(
            "{} stopped after {} steps",
            outcome.algorithm, outcome.steps
        ),
    }
}

/// Comma-joined values, or `None` for an empty walk
pub fn join_values(values: &[i32]) -> String {
    if values.is_empty() {
        return "None".to_string();
    }
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
