//! LIFO stack; the top is the end of the backing vector

use crate::errors::{Structure, VisualError};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    items: Vec<i32>,
}

impl Stack {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, value: i32) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Result<i32, VisualError> {
        self.items
            .pop()
            .ok_or(VisualError::EmptyStructure(Structure::Stack))
    }

    pub fn peek(&self) -> Result<i32, VisualError> {
        self.items
            .last()
            .copied()
            .ok_or(VisualError::EmptyStructure(Structure::Stack))
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

    /// Items from bottom to top
    pub fn items(&self) -> &[i32] {
        &self.items
    }
}
