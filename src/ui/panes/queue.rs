//! Queue pane, drawn front (left) to rear (right)

use super::pane_block;
use crate::collections::Queue;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

pub fn render_queue_pane(frame: &mut Frame, area: Rect, queue: &Queue) {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);
    let show = |result: Result<i32, _>| match result {
        Ok(v) => v.to_string(),
        Err(_) => "Empty".to_string(),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Size: ", label),
            Span::styled(queue.len().to_string(), value),
            Span::styled("   Front: ", label),
            Span::styled(show(queue.front()), value),
            Span::styled("   Rear: ", label),
            Span::styled(show(queue.rear()), value),
        ]),
        Line::from(""),
    ];

    if queue.is_empty() {
        lines.push(Line::from(Span::styled("Queue is empty", label)));
    } else {
        let last = queue.len() - 1;
        let mut spans = vec![Span::styled(
            "front ▸ ",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        )];
        for (index, item) in queue.iter().enumerate() {
            let style = if index == 0 || index == last {
                Style::default()
                    .fg(DEFAULT_THEME.node)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.node)
            };
            spans.push(Span::styled(format!("[{}]", item), style));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            "◂ rear",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines)
        .block(pane_block(" Queue ", true))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
