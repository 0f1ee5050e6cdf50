//! Binary search tree procedures
//!
//! These operate on a [`Link`] (an owned, possibly empty subtree) and are the
//! recursive bodies behind [`BinarySearchTree`](crate::collections::BinarySearchTree).
//! None of them emit steps.

use crate::collections::bst::{Link, TreeNode};
use crate::errors::VisualError;
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Walk orders supported by [`traverse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    InOrder,
    PreOrder,
    PostOrder,
    LevelOrder,
}

impl Traversal {
    pub const ALL: [Traversal; 4] = [
        Traversal::InOrder,
        Traversal::PreOrder,
        Traversal::PostOrder,
        Traversal::LevelOrder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Traversal::InOrder => "In-order",
            Traversal::PreOrder => "Pre-order",
            Traversal::PostOrder => "Post-order",
            Traversal::LevelOrder => "Level-order",
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Traversal {
    type Err = VisualError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inorder" | "in-order" | "in" => Ok(Traversal::InOrder),
            "preorder" | "pre-order" | "pre" => Ok(Traversal::PreOrder),
            "postorder" | "post-order" | "post" => Ok(Traversal::PostOrder),
            "levelorder" | "level-order" | "level" | "bfs" => Ok(Traversal::LevelOrder),
            other => Err(VisualError::invalid(format!(
                "unknown traversal '{}' (expected in, pre, post or level)",
                other
            ))),
        }
    }
}

/// Insert `value` below `link`; equal values are ignored
pub fn insert(link: &mut Link, value: i32) -> bool {
    match link {
        None => {
            *link = Some(Box::new(TreeNode::leaf(value)));
            true
        }
        Some(node) => {
            if value < node.value {
                insert(&mut node.left, value)
            } else if value > node.value {
                insert(&mut node.right, value)
            } else {
                false
            }
        }
    }
}

/// Delete `value` from the subtree at `link`; absent values are a no-op
pub fn delete(link: &mut Link, value: i32) -> bool {
    let Some(node) = link else {
        return false;
    };

    if value < node.value {
        return delete(&mut node.left, value);
    }
    if value > node.value {
        return delete(&mut node.right, value);
    }

    match (node.left.is_some(), node.right.is_some()) {
        (false, _) => *link = node.right.take(),
        (true, false) => *link = node.left.take(),
        (true, true) => {
            // promote the in-order successor
            if let Some(successor) = take_min(&mut node.right) {
                node.value = successor;
            }
        }
    }
    true
}

/// Unlink the leftmost node of the subtree and return its value
fn take_min(link: &mut Link) -> Option<i32> {
    let node = link.as_mut()?;
    if node.left.is_some() {
        return take_min(&mut node.left);
    }

    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.value)
}

pub fn contains(link: &Link, value: i32) -> bool {
    let mut current = link.as_deref();
    while let Some(node) = current {
        current = if value < node.value {
            node.left.as_deref()
        } else if value > node.value {
            node.right.as_deref()
        } else {
            return true;
        };
    }
    false
}

pub fn traverse(link: &Link, order: Traversal) -> Vec<i32> {
    let mut out = Vec::new();
    match order {
        Traversal::InOrder => in_order(link, &mut out),
        Traversal::PreOrder => pre_order(link, &mut out),
        Traversal::PostOrder => post_order(link, &mut out),
        Traversal::LevelOrder => level_order(link, &mut out),
    }
    out
}

fn in_order(link: &Link, out: &mut Vec<i32>) {
    if let Some(node) = link {
        in_order(&node.left, out);
        out.push(node.value);
        in_order(&node.right, out);
    }
}

fn pre_order(link: &Link, out: &mut Vec<i32>) {
    if let Some(node) = link {
        out.push(node.value);
        pre_order(&node.left, out);
        pre_order(&node.right, out);
    }
}

fn post_order(link: &Link, out: &mut Vec<i32>) {
    if let Some(node) = link {
        post_order(&node.left, out);
        post_order(&node.right, out);
        out.push(node.value);
    }
}

fn level_order(link: &Link, out: &mut Vec<i32>) {
    let mut pending: VecDeque<&TreeNode> = link.as_deref().into_iter().collect();

    while let Some(node) = pending.pop_front() {
        out.push(node.value);
        pending.extend(node.left.as_deref());
        pending.extend(node.right.as_deref());
    }
}

pub fn count(link: &Link) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    }
}

/// Height in nodes: empty tree is 0, a single node is 1
pub fn height(link: &Link) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}
