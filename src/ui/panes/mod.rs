//! TUI pane rendering modules
//!
//! Every pane is a stateless `render_*` function over borrowed data, so the
//! same code draws the idle screen and the frames produced mid-run by the
//! [`TuiSink`](crate::ui::sink::TuiSink).
//!
//! # Pane Modules
//!
//! - [`sequence`]: bar chart of the array plus algorithm metadata
//! - [`list`]: linked list as a chain of nodes
//! - [`stack`]: stack drawn top-down
//! - [`queue`]: queue drawn front to rear
//! - [`tree`]: binary search tree drawn sideways, with metrics and traversal
//! - [`status`]: tab bar, status bar and command prompt

pub mod list;
pub mod queue;
pub mod sequence;
pub mod stack;
pub mod status;
pub mod tree;

pub use list::render_list_pane;
pub use queue::render_queue_pane;
pub use sequence::{render_sequence_pane, SequenceRenderData};
pub use stack::render_stack_pane;
pub use status::{render_prompt, render_status_bar, render_tab_bar, StatusRenderData};
pub use tree::{render_tree_pane, TreeRenderData};

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Screen regions: tab bar, body, status bar
pub struct ScreenAreas {
    pub tabs: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenAreas {
        tabs: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Bordered block with the shared focus styling
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
