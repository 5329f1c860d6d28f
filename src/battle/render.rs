//! Battle menu rendering — portrait, dialogue box (or submenu), stat bar,
//! action buttons. Also the splash and farewell screens.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ButtonRow, ClickableList};

use super::actions::{ACTION_BUTTON_BASE, SUBMENU_ROW_BASE};
use super::lore::{
    submenu_items, ACTIONS, FAREWELL_TEXT, PLAYER_HP, PLAYER_LV, PLAYER_MAX_HP, PLAYER_NAME,
    PORTRAIT_ART,
};
use super::state::{MenuState, Mode};

const ORANGE: Color = Color::Rgb(255, 140, 0);
const HP_YELLOW: Color = Color::Rgb(255, 255, 0);

pub fn render(
    state: &MenuState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let narrow = is_narrow_layout(area.width);
    let portrait_height = if narrow {
        Constraint::Length(PORTRAIT_ART.len() as u16 + 2)
    } else {
        Constraint::Percentage(45)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            portrait_height,
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    render_portrait(f, chunks[0]);
    match state.mode {
        Mode::None => render_dialogue(&state.display_text, f, chunks[1], narrow),
        Mode::Act | Mode::Item => render_submenu(state, f, chunks[1], narrow, click_state),
    }
    render_stat_bar(f, chunks[2]);
    render_action_buttons(state, f, chunks[3], narrow, click_state);
}

// ── Helpers ─────────────────────────────────────────────────

fn hp_bar(current: u32, max: u32, width: usize) -> String {
    let ratio = if max > 0 { current as f64 / max as f64 } else { 0.0 };
    let filled = (ratio * width as f64).round() as usize;
    "\u{2588}".repeat(filled) + &"\u{2591}".repeat(width.saturating_sub(filled))
}

fn dialogue_box(narrow: bool) -> Block<'static> {
    let border_type = if narrow { BorderType::Plain } else { BorderType::Thick };
    Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(Color::White))
}

/// Dialogue text as display lines: a `* ` bullet unless the text already has
/// one, and a line break for every embedded newline.
pub fn dialogue_lines(text: &str) -> Vec<Line<'static>> {
    let bulleted = if text.starts_with("* ") {
        text.to_string()
    } else {
        format!("* {}", text)
    };
    bulleted.lines().map(|l| Line::from(l.to_string())).collect()
}

// ── Portrait ────────────────────────────────────────────────

fn render_portrait(f: &mut Frame, area: Rect) {
    let dim = Style::default().fg(Color::DarkGray);
    let inner_height = area.height.saturating_sub(2) as usize;
    let pad = inner_height.saturating_sub(PORTRAIT_ART.len());

    // Bottom-aligned, like a sprite standing on the dialogue box.
    let mut lines: Vec<Line> = vec![Line::from(""); pad];
    lines.extend(PORTRAIT_ART.iter().map(|row| Line::from(Span::styled(*row, dim))));

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(widget, area);
}

// ── Dialogue / submenu ──────────────────────────────────────

fn render_dialogue(text: &str, f: &mut Frame, area: Rect, narrow: bool) {
    let block = dialogue_box(narrow);
    let inner = block.inner(area);
    let paragraph = Paragraph::new(dialogue_lines(text))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    // Keep the end of long text in view.
    let rendered = paragraph.line_count(inner.width) as u16;
    let scroll = rendered.saturating_sub(inner.height);

    f.render_widget(paragraph.scroll((scroll, 0)).block(block), area);
}

fn render_submenu(
    state: &MenuState,
    f: &mut Frame,
    area: Rect,
    narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    // Top margin above the rows.
    cl.push(Line::from(""));
    for (i, item) in submenu_items(state.mode).iter().enumerate() {
        let style = if i == state.submenu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        cl.push_clickable(
            Line::from(Span::styled(format!("* {}", item.title), style)),
            SUBMENU_ROW_BASE + item.id as u16,
        );
    }

    {
        let mut cs = click_state.borrow_mut();
        cl.register_targets(area, &mut cs, 1, 1);
    }

    let widget = Paragraph::new(cl.into_lines()).block(dialogue_box(narrow));
    f.render_widget(widget, area);
}

// ── Stat bar ────────────────────────────────────────────────

fn render_stat_bar(f: &mut Frame, area: Rect) {
    let label = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(format!(" {}   ", PLAYER_NAME), label),
        Span::styled(format!("LV {}   ", PLAYER_LV), label),
        Span::styled("HP ", label),
        Span::styled(hp_bar(PLAYER_HP, PLAYER_MAX_HP, 8), Style::default().fg(HP_YELLOW)),
        Span::styled(format!(" {} / {}", PLAYER_HP, PLAYER_MAX_HP), label),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

// ── Action buttons ──────────────────────────────────────────

fn render_action_buttons(
    state: &MenuState,
    f: &mut Frame,
    area: Rect,
    narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let enabled = state.mode == Mode::None;
    let mut row = ButtonRow::new().enabled(enabled);

    for action in ACTIONS.iter() {
        let focused = action.id == state.focused_action;
        let style = match (enabled, focused) {
            (false, _) => Style::default().fg(Color::DarkGray),
            (true, true) => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(ORANGE),
        };
        let label = if focused && !narrow {
            format!("\u{2665} {}", action.name)
        } else {
            action.name.to_string()
        };
        row = row.button(label, style, ACTION_BUTTON_BASE + action.id as u16);
    }

    let mut cs = click_state.borrow_mut();
    row.render(f, area, &mut cs);
}

// ── Splash / farewell ───────────────────────────────────────

/// Draw the loading screen; returns the rect of the "Loading..." line so the
/// caller can run the pulse effect over it.
pub fn render_splash(progress: (usize, usize), f: &mut Frame, area: Rect) -> Rect {
    let (settled, total) = progress;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Span::styled(
        "Loading...",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, chunks[1]);

    let counter = Paragraph::new(Span::styled(
        format!("{}/{}", settled, total),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    f.render_widget(counter, chunks[2]);

    chunks[1]
}

pub fn render_farewell(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    let widget = Paragraph::new(dialogue_lines(FAREWELL_TEXT))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(widget, chunks[1]);
}
