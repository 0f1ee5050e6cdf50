//! FIFO queue; enqueue at the rear, dequeue from the front

use crate::errors::{Structure, VisualError};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue {
    items: VecDeque<i32>,
}

impl Queue {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    pub fn enqueue(&mut self, value: i32) {
        self.items.push_back(value);
    }

    pub fn dequeue(&mut self) -> Result<i32, VisualError> {
        self.items
            .pop_front()
            .ok_or(VisualError::EmptyStructure(Structure::Queue))
    }

    pub fn front(&self) -> Result<i32, VisualError> {
        self.items
            .front()
            .copied()
            .ok_or(VisualError::EmptyStructure(Structure::Queue))
    }

    pub fn rear(&self) -> Result<i32, VisualError> {
        self.items
            .back()
            .copied()
            .ok_or(VisualError::EmptyStructure(Structure::Queue))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items from front to rear
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.items.iter().copied()
    }
}
