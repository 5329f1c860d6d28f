//! Battle menu transitions.
//!
//! [`transition`] is a pure function from the current state and one input to
//! what should happen next. The event adapters in `battle/mod.rs` translate
//! keys and clicks into [`MenuInput`].

use super::lore::{
    submenu_items, ACT, ACTIONS, ACT_PROMPT, FIGHT, INTRO_TEXT, ITEM, ITEM_PROMPT, MERCY,
    MERCY_TEXT,
};
use super::state::{MenuState, Mode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuInput {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    /// Pointer: single activation on an action button.
    FocusAction(usize),
    /// Pointer: double activation on an action button.
    ConfirmAction(usize),
    /// Pointer: activation on a submenu row selects and confirms it.
    PickRow(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Ignored,
    Next(MenuState),
    /// FIGHT was confirmed: the session ends.
    Terminate,
}

pub fn transition(state: &MenuState, input: MenuInput) -> Transition {
    match state.mode {
        Mode::None => top_level(state, input),
        Mode::Act | Mode::Item => submenu(state, input),
    }
}

// ── Top level ───────────────────────────────────────────────

fn top_level(state: &MenuState, input: MenuInput) -> Transition {
    let n = ACTIONS.len();
    match input {
        MenuInput::MoveRight => focus(state, (state.focused_action + 1) % n),
        MenuInput::MoveLeft => focus(state, (state.focused_action + n - 1) % n),
        MenuInput::Confirm => confirm_action(state, state.focused_action),
        MenuInput::FocusAction(i) if i < n => focus(state, i),
        MenuInput::ConfirmAction(i) if i < n => confirm_action(state, i),
        _ => Transition::Ignored,
    }
}

fn focus(state: &MenuState, index: usize) -> Transition {
    Transition::Next(MenuState {
        focused_action: index,
        ..state.clone()
    })
}

fn confirm_action(state: &MenuState, index: usize) -> Transition {
    let open = |mode: Mode, prompt: &str| {
        Transition::Next(MenuState {
            mode,
            focused_action: index,
            submenu_index: 0,
            display_text: prompt.to_string(),
        })
    };
    match index {
        FIGHT => Transition::Terminate,
        ACT => open(Mode::Act, ACT_PROMPT),
        ITEM => open(Mode::Item, ITEM_PROMPT),
        MERCY => Transition::Next(MenuState {
            focused_action: index,
            display_text: MERCY_TEXT.to_string(),
            ..state.clone()
        }),
        _ => Transition::Ignored,
    }
}

// ── Submenu ─────────────────────────────────────────────────

fn submenu(state: &MenuState, input: MenuInput) -> Transition {
    let items = submenu_items(state.mode);
    let len = items.len();
    match input {
        MenuInput::MoveDown => select_row(state, (state.submenu_index + 1) % len),
        MenuInput::MoveUp => select_row(state, (state.submenu_index + len - 1) % len),
        MenuInput::Confirm => pick(state, state.submenu_index),
        MenuInput::PickRow(i) if i < len => pick(state, i),
        MenuInput::Cancel => Transition::Next(MenuState {
            mode: Mode::None,
            display_text: INTRO_TEXT.to_string(),
            ..state.clone()
        }),
        // Left/right and the action buttons are inert while a submenu is open.
        _ => Transition::Ignored,
    }
}

fn select_row(state: &MenuState, index: usize) -> Transition {
    Transition::Next(MenuState {
        submenu_index: index,
        ..state.clone()
    })
}

fn pick(state: &MenuState, index: usize) -> Transition {
    let items = submenu_items(state.mode);
    match items.get(index) {
        Some(item) => Transition::Next(MenuState {
            mode: Mode::None,
            submenu_index: index,
            display_text: format!("* {}", item.output),
            ..state.clone()
        }),
        None => Transition::Ignored,
    }
}
