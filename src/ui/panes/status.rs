//! Tab bar, status bar and command prompt

use crate::ui::app::Tab;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_error: bool,
    pub is_running: bool,
    pub tab: Tab,
}

pub fn render_tab_bar(frame: &mut Frame, area: Rect, active: Tab) {
    let mut spans = vec![Span::styled(
        " sortty ",
        Style::default()
            .bg(DEFAULT_THEME.primary)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )];

    for tab in Tab::ALL {
        let style = if tab == active {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} ", tab.title()), style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg));
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (badge, badge_bg) = if data.is_running {
        (" ▶ RUNNING ", DEFAULT_THEME.secondary)
    } else if data.is_error {
        (" ERROR ", DEFAULT_THEME.error)
    } else {
        (" READY ", DEFAULT_THEME.primary)
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default().bg(DEFAULT_THEME.status_bg).fg(if data.is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let bindings: &[(&str, &str)] = if data.is_running {
        &[("esc", "stop"), ("+/-", "speed"), ("q", "quit")]
    } else if data.tab == Tab::Sorting {
        &[
            ("s", "sort"),
            ("a", "algorithm"),
            ("g", "generate"),
            ("+/-", "speed"),
            (":", "command"),
            ("tab", "next"),
            ("q", "quit"),
        ]
    } else {
        &[(":", "command"), ("tab", "next"), ("q", "quit")]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in bindings.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}

/// Command line shown in place of the status bar while typing
pub fn render_prompt(frame: &mut Frame, area: Rect, input: &str) {
    let line = Line::from(vec![
        Span::styled(
            " : ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", input),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled("█", Style::default().fg(DEFAULT_THEME.border_focused)),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().bg(DEFAULT_THEME.status_bg));
    frame.render_widget(paragraph, area);
}
