//! Linked list pane

use super::pane_block;
use crate::collections::LinkedList;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Render the list as `[a] → [b] → NULL`, highlighting `found` if set
pub fn render_list_pane(frame: &mut Frame, area: Rect, list: &LinkedList, found: Option<usize>) {
    let node_style = Style::default()
        .fg(DEFAULT_THEME.node)
        .add_modifier(Modifier::BOLD);
    let found_style = Style::default()
        .fg(DEFAULT_THEME.compare)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED);
    let pointer_style = Style::default().fg(DEFAULT_THEME.pointer);

    let mut spans = Vec::new();
    for (index, value) in list.iter().enumerate() {
        let style = if found == Some(index) {
            found_style
        } else {
            node_style
        };
        spans.push(Span::styled(format!("[{}]", value), style));
        spans.push(Span::styled(" → ", pointer_style));
    }
    spans.push(Span::styled("NULL", pointer_style));

    let lines = vec![
        Line::from(vec![
            Span::styled("Length: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(list.len().to_string(), Style::default().fg(DEFAULT_THEME.fg)),
        ]),
        Line::from(""),
        Line::from(spans),
    ];

    let paragraph = Paragraph::new(lines)
        .block(pane_block(" Linked List ", true))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
