//! Singly linked list
//!
//! Each [`ListNode`] owns the next node through a `Box`, and the list owns the
//! head. Walking forward through `next` slots is the only way to reach a node,
//! which keeps the list acyclic without any runtime check.

use crate::errors::{Structure, VisualError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub value: i32,
    next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn next(&self) -> Option<&ListNode> {
        self.next.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct LinkedList {
    head: Option<Box<ListNode>>,
    len: usize,
}

impl LinkedList {
    pub fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn head(&self) -> Option<&ListNode> {
        self.head.as_deref()
    }

    pub fn add_head(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Box::new(ListNode { value, next }));
        self.len += 1;
    }

    pub fn add_tail(&mut self, value: i32) {
        if let Some(slot) = self.slot_at(self.len) {
            *slot = Some(Box::new(ListNode { value, next: None }));
            self.len += 1;
        }
    }

    /// Insert so that the new node ends up at `index` (`0..=len`)
    pub fn insert_at(&mut self, index: usize, value: i32) -> Result<(), VisualError> {
        if index > self.len {
            return Err(VisualError::invalid(format!(
                "index {} is out of range for a list of length {}",
                index, self.len
            )));
        }

        let slot = self
            .slot_at(index)
            .ok_or_else(|| VisualError::invalid(format!("index {} is out of range", index)))?;
        let next = slot.take();
        *slot = Some(Box::new(ListNode { value, next }));
        self.len += 1;
        Ok(())
    }

    pub fn remove_head(&mut self) -> Result<i32, VisualError> {
        let node = self
            .head
            .take()
            .ok_or(VisualError::EmptyStructure(Structure::List))?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    pub fn remove_tail(&mut self) -> Result<i32, VisualError> {
        if self.len == 0 {
            return Err(VisualError::EmptyStructure(Structure::List));
        }

        let node = self
            .slot_at(self.len - 1)
            .and_then(Option::take)
            .ok_or(VisualError::EmptyStructure(Structure::List))?;
        self.len -= 1;
        Ok(node.value)
    }

    /// Index of the first node holding `value`
    pub fn search(&self, value: i32) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    pub fn clear(&mut self) {
        self.unlink_all();
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// The `next` slot that currently holds the node at `index`
    /// (the empty slot after the tail when `index == len`)
    fn slot_at(&mut self, index: usize) -> Option<&mut Option<Box<ListNode>>> {
        let mut slot = &mut self.head;
        for _ in 0..index {
            slot = &mut slot.as_mut()?.next;
        }
        Some(slot)
    }

    // Iterative unlink so dropping a long list does not recurse per node
    fn unlink_all(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

/// Borrowing iterator from head to tail
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.value
        })
    }
}
