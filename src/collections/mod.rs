//! Collection model for the visualizer
//!
//! This module provides the plain data holders that runs and user actions
//! mutate in place:
//! - [`sequence`]: the integer array the sorts operate on
//! - [`linked_list`]: singly linked list with single-owner `Box` links
//! - [`stack`]: LIFO stack
//! - [`queue`]: FIFO queue
//! - [`bst`]: binary search tree; the recursive node algorithms live in
//!   [`crate::algorithms::tree`]
//!
//! # Ownership
//!
//! Linked structures own their nodes through `Option<Box<_>>` slots. Every node
//! has exactly one owner (the head/root slot or its predecessor/parent), so a
//! walk from the head or root always terminates.

pub mod bst;
pub mod linked_list;
pub mod queue;
pub mod sequence;
pub mod stack;

pub use bst::BinarySearchTree;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use sequence::Sequence;
pub use stack::Stack;
