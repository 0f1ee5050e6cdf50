//! Binary search tree
//!
//! The tree owns its root slot and every [`TreeNode`] owns its two child
//! slots. For every node, values in the left subtree are smaller and values
//! in the right subtree are larger; duplicates are never stored.
//!
//! Node count and height are recomputed by walking the tree each time they are
//! asked for. The recursive insert, delete and traversal procedures are in
//! [`crate::algorithms::tree`].

use crate::algorithms::tree::{self, Traversal};

/// An owned, possibly empty subtree
pub type Link = Option<Box<TreeNode>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl TreeNode {
    pub fn leaf(value: i32) -> Self {
        TreeNode {
            value,
            left: None,
            right: None,
        }
    }

    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinarySearchTree {
    root: Link,
}

impl BinarySearchTree {
    pub fn new() -> Self {
        BinarySearchTree { root: None }
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert `value`; returns `false` if it was already present
    pub fn insert(&mut self, value: i32) -> bool {
        tree::insert(&mut self.root, value)
    }

    /// Delete `value`; returns `false` if it was absent
    pub fn delete(&mut self, value: i32) -> bool {
        tree::delete(&mut self.root, value)
    }

    pub fn contains(&self, value: i32) -> bool {
        tree::contains(&self.root, value)
    }

    pub fn traverse(&self, order: Traversal) -> Vec<i32> {
        tree::traverse(&self.root, order)
    }

    pub fn count(&self) -> usize {
        tree::count(&self.root)
    }

    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    pub fn clear(&mut self) {
        self.root = None;
    }
}
