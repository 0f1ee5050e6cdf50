//! Stack pane; the top is drawn first

use super::pane_block;
use crate::collections::Stack;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

pub fn render_stack_pane(frame: &mut Frame, area: Rect, stack: &Stack) {
    let title = match stack.peek() {
        Ok(top) => format!(" Stack (size {}, top {}) ", stack.len(), top),
        Err(_) => " Stack (empty) ".to_string(),
    };

    let items: Vec<ListItem> = if stack.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "Stack is empty",
            Style::default().fg(DEFAULT_THEME.comment),
        )))]
    } else {
        let top_index = stack.len() - 1;
        stack
            .items()
            .iter()
            .enumerate()
            .rev()
            .map(|(index, value)| {
                let mut spans = vec![Span::styled(
                    format!("│ {:^9} │", value),
                    Style::default().fg(DEFAULT_THEME.node),
                )];
                if index == top_index {
                    spans.push(Span::styled(
                        " ← top",
                        Style::default()
                            .fg(DEFAULT_THEME.secondary)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let list = List::new(items).block(pane_block(&title, true));
    frame.render_widget(list, area);
}
