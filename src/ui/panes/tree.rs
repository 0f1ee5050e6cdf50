//! Binary search tree pane
//!
//! The tree is drawn top-down as an outline, left child before right child:
//!
//! ```text
//! 5
//! ├── L: 3
//! │   └── L: 1
//! └── R: 8
//! ```

use super::pane_block;
use crate::algorithms::Traversal;
use crate::collections::bst::TreeNode;
use crate::collections::BinarySearchTree;
use crate::session::join_values;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Data needed to render the tree pane
pub struct TreeRenderData<'a> {
    pub tree: &'a BinarySearchTree,
    pub last_traversal: Option<(Traversal, &'a [i32])>,
}

pub fn render_tree_pane(frame: &mut Frame, area: Rect, data: &TreeRenderData) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(5)])
        .split(area);

    let lines = match data.tree.root() {
        None => vec![Line::from(Span::styled(
            "Insert nodes to build your Binary Search Tree",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
        Some(root) => {
            let mut lines = vec![Line::from(Span::styled(
                root.value.to_string(),
                node_style(),
            ))];
            push_subtree(root, "", &mut lines);
            lines
        }
    };
    frame.render_widget(
        Paragraph::new(lines).block(pane_block(" Binary Search Tree ", true)),
        rows[0],
    );

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);
    let (order, result) = match data.last_traversal {
        Some((order, values)) => (order.name(), join_values(values)),
        None => ("None", "None".to_string()),
    };
    let info = vec![
        Line::from(vec![
            Span::styled("Nodes: ", label),
            Span::styled(data.tree.count().to_string(), value),
            Span::styled("   Height: ", label),
            Span::styled(data.tree.height().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Traversal: ", label),
            Span::styled(order, value),
        ]),
        Line::from(Span::styled(result, Style::default().fg(DEFAULT_THEME.success))),
    ];
    frame.render_widget(
        Paragraph::new(info)
            .block(pane_block(" Tree Info ", false))
            .wrap(Wrap { trim: true }),
        rows[1],
    );
}

fn node_style() -> Style {
    Style::default()
        .fg(DEFAULT_THEME.node)
        .add_modifier(Modifier::BOLD)
}

fn push_subtree(node: &TreeNode, prefix: &str, out: &mut Vec<Line<'static>>) {
    let children: Vec<(&str, &TreeNode)> = [("L", node.left()), ("R", node.right())]
        .into_iter()
        .filter_map(|(tag, child)| child.map(|c| (tag, c)))
        .collect();

    for (i, (tag, child)) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };
        out.push(Line::from(vec![
            Span::styled(
                format!("{}{}", prefix, branch),
                Style::default().fg(DEFAULT_THEME.pointer),
            ),
            Span::styled(
                format!("{}: ", tag),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::styled(child.value.to_string(), node_style()),
        ]));

        let next_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        push_subtree(child, &next_prefix, out);
    }
}
