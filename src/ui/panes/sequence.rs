//! Sorting pane: array bars and algorithm metadata
//!
//! Bars are scaled relative to the smallest value so negative inputs still
//! get a visible bar. Highlighted indices are drawn in the compare colour,
//! or the mutate colour when the step moved data.

use super::pane_block;
use crate::algorithms::SortAlgorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Data needed to render the sorting pane
pub struct SequenceRenderData<'a> {
    pub values: &'a [i32],
    pub highlighted: &'a [usize],
    pub mutated: bool,
    pub algorithm: SortAlgorithm,
    pub pacing_ms: u64,
    pub speed: u8,
    /// Accent cues fired during the current run
    pub accents: usize,
    pub sorted: bool,
}

pub fn render_sequence_pane(frame: &mut Frame, area: Rect, data: &SequenceRenderData) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(30)])
        .split(area);

    render_bars(frame, columns[0], data);
    render_info(frame, columns[1], data);
}

fn render_bars(frame: &mut Frame, area: Rect, data: &SequenceRenderData) {
    let block = pane_block(" Array ", true);

    if data.values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let highlighted: FxHashSet<usize> = data.highlighted.iter().copied().collect();
    let highlight_color = if data.mutated {
        DEFAULT_THEME.mutate
    } else {
        DEFAULT_THEME.compare
    };
    let base_color = if data.sorted {
        DEFAULT_THEME.success
    } else {
        DEFAULT_THEME.bar
    };

    let min = data.values.iter().copied().min().unwrap_or(0) as i64;
    let bars: Vec<Bar> = data
        .values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = if highlighted.contains(&index) {
                highlight_color
            } else {
                base_color
            };
            Bar::default()
                .value((value as i64 - min + 1) as u64)
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let count = data.values.len() as u16;
    let inner_width = area.width.saturating_sub(2);
    let bar_width = (inner_width / count.max(1)).saturating_sub(1).clamp(1, 6);

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

fn render_info(frame: &mut Frame, area: Rect, data: &SequenceRenderData) {
    let complexity = data.algorithm.complexity();
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default().fg(DEFAULT_THEME.fg);

    let lines = vec![
        Line::from(Span::styled(
            data.algorithm.name(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Time:      ", label),
            Span::styled(complexity.time, value),
        ]),
        Line::from(vec![
            Span::styled("Space:     ", label),
            Span::styled(complexity.space, value),
        ]),
        Line::from(vec![
            Span::styled("Stability: ", label),
            Span::styled(if complexity.stable { "Stable" } else { "Unstable" }, value),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Speed:     ", label),
            Span::styled(format!("{} ({} ms)", data.speed, data.pacing_ms), value),
        ]),
        Line::from(vec![
            Span::styled("Size:      ", label),
            Span::styled(data.values.len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Moves:     ", label),
            Span::styled(
                data.accents.to_string(),
                Style::default().fg(DEFAULT_THEME.mutate),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(pane_block(" Algorithm ", false));
    frame.render_widget(paragraph, area);
}
