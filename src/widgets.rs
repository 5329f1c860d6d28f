//! Reusable clickable UI components.
//!
//! Each component renders and registers its own click targets, so the rows
//! and rectangles that respond to taps always match what was drawn.
//!
//! - [`ButtonRow`]: equal-width boxed buttons side by side.
//! - [`ClickableList`]: vertical list with per-row click targets.

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::Style;
use ratzilla::ratatui::text::Line;
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── ButtonRow ──────────────────────────────────────────────────

/// A row of boxed buttons that split the area evenly.
///
/// # Example
/// ```ignore
/// ButtonRow::new()
///     .button("FIGHT", normal, ACTION_BUTTON_BASE)
///     .button("ACT", selected, ACTION_BUTTON_BASE + 1)
///     .render(f, area, &mut cs);
/// ```
pub struct ButtonRow<'a> {
    buttons: Vec<(Line<'a>, Style, u16)>,
    enabled: bool,
}

impl<'a> ButtonRow<'a> {
    pub fn new() -> Self {
        Self {
            buttons: Vec::new(),
            enabled: true,
        }
    }

    pub fn button(mut self, label: impl Into<Line<'a>>, style: Style, action_id: u16) -> Self {
        self.buttons.push((label.into(), style, action_id));
        self
    }

    /// Disabled rows still draw but register no click targets.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let cells = self.cells(area);
        for ((label, style, action_id), cell) in self.buttons.into_iter().zip(cells) {
            let widget = Paragraph::new(label)
                .style(style)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(style));
            f.render_widget(widget, cell);
            if self.enabled {
                cs.add_click_target(cell, action_id);
            }
        }
    }

    fn cells(&self, area: Rect) -> Vec<Rect> {
        let n = self.buttons.len() as u32;
        if n == 0 {
            return Vec::new();
        }
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..n).map(|_| Constraint::Ratio(1, n)))
            .split(area)
            .to_vec()
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// Pairs rendered [`Line`]s with click actions.
///
/// Lines are annotated as clickable when they are added; a single call to
/// [`register_targets`](ClickableList::register_targets) after rendering
/// places every target on the row its line ended up on.
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)`
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        self.actions.push((self.lines.len() as u16, action_id));
        self.lines.push(line);
    }

    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines, assuming one row per
    /// line (no wrapping).
    ///
    /// `top_offset`/`bottom_offset` are the rows taken by borders or padding.
    pub fn register_targets(&self, area: Rect, cs: &mut ClickState, top_offset: u16, bottom_offset: u16) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);
        for &(line_idx, action_id) in &self.actions {
            let row = content_y + line_idx;
            if row >= content_end {
                continue;
            }
            cs.add_row_target(area, row, action_id);
        }
    }
}
