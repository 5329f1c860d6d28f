//! Battle menu — the interactive scene behind the splash.
//!
//! Keys: arrows move, [Z]/Enter confirms, [X]/Esc cancels.
//! Pointer: tap an action button to focus it, double-tap to confirm it;
//! tap a submenu row to pick it.

pub mod actions;
pub mod logic;
pub mod lore;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent, Key};

use actions::{action_button, submenu_row};
use logic::{transition, MenuInput, Transition};
use state::{MenuSnapshot, MenuState};

/// What an input did to the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    Ignored,
    Changed,
    Terminate,
}

pub struct BattleMenu {
    state: MenuState,
}

impl BattleMenu {
    pub fn new() -> Self {
        Self { state: MenuState::new() }
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn snapshot(&self) -> MenuSnapshot<'_> {
        self.state.snapshot()
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> Response {
        let input = match event {
            InputEvent::Key(key) => key_input(*key),
            InputEvent::Click(id) => click_input(*id),
            InputEvent::DoubleClick(id) => double_click_input(*id),
        };
        let Some(input) = input else {
            return Response::Ignored;
        };
        match transition(&self.state, input) {
            Transition::Ignored => Response::Ignored,
            Transition::Next(next) => {
                if next == self.state {
                    return Response::Ignored;
                }
                self.state = next;
                Response::Changed
            }
            Transition::Terminate => Response::Terminate,
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}

// ── Input mapping ───────────────────────────────────────────

fn key_input(key: Key) -> Option<MenuInput> {
    match key {
        Key::Left => Some(MenuInput::MoveLeft),
        Key::Right => Some(MenuInput::MoveRight),
        Key::Up => Some(MenuInput::MoveUp),
        Key::Down => Some(MenuInput::MoveDown),
        Key::Enter | Key::Char('z' | 'Z') => Some(MenuInput::Confirm),
        Key::Escape | Key::Char('x' | 'X') => Some(MenuInput::Cancel),
        Key::Char(_) => None,
    }
}

fn click_input(id: u16) -> Option<MenuInput> {
    if let Some(i) = action_button(id) {
        return Some(MenuInput::FocusAction(i));
    }
    submenu_row(id).map(MenuInput::PickRow)
}

fn double_click_input(id: u16) -> Option<MenuInput> {
    // The first press of the pair already arrived as a Click; rows were
    // confirmed by it, so only buttons react to the pair.
    action_button(id).map(MenuInput::ConfirmAction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::actions::{ACTION_BUTTON_BASE, SUBMENU_ROW_BASE};
    use super::lore::{ACT, MERCY};
    use super::state::Mode;

    fn press(menu: &mut BattleMenu, key: Key) -> Response {
        menu.handle_input(&InputEvent::Key(key))
    }

    #[test]
    fn starts_at_intro() {
        let menu = BattleMenu::new();
        assert_eq!(menu.state().mode, Mode::None);
        assert_eq!(menu.snapshot().display_text, "A weird creature appears...");
    }

    #[test]
    fn z_and_enter_both_confirm() {
        for key in [Key::Enter, Key::Char('z'), Key::Char('Z')] {
            let mut menu = BattleMenu::new();
            press(&mut menu, Key::Right);
            assert_eq!(press(&mut menu, key), Response::Changed);
            assert_eq!(menu.state().mode, Mode::Act);
        }
    }

    #[test]
    fn x_and_escape_both_cancel() {
        for key in [Key::Escape, Key::Char('x'), Key::Char('X')] {
            let mut menu = BattleMenu::new();
            press(&mut menu, Key::Right);
            press(&mut menu, Key::Enter);
            press(&mut menu, Key::Down);
            assert_eq!(press(&mut menu, key), Response::Changed);
            assert_eq!(menu.state().mode, Mode::None);
            assert_eq!(menu.state().display_text, "A weird creature appears...");
        }
    }

    #[test]
    fn keyboard_walkthrough_act_call() {
        let mut menu = BattleMenu::new();
        press(&mut menu, Key::Right);
        press(&mut menu, Key::Enter);
        press(&mut menu, Key::Down);
        press(&mut menu, Key::Enter);
        assert_eq!(menu.state().mode, Mode::None);
        assert_eq!(menu.state().display_text, "* ring... ring... \n no one picked up.");
    }

    #[test]
    fn confirm_on_fight_terminates() {
        let mut menu = BattleMenu::new();
        assert_eq!(press(&mut menu, Key::Char('z')), Response::Terminate);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut menu = BattleMenu::new();
        assert_eq!(press(&mut menu, Key::Char('q')), Response::Ignored);
        assert_eq!(press(&mut menu, Key::Up), Response::Ignored);
    }

    #[test]
    fn repeated_mercy_reports_no_change() {
        let mut menu = BattleMenu::new();
        menu.handle_input(&InputEvent::Click(ACTION_BUTTON_BASE + MERCY as u16));
        assert_eq!(press(&mut menu, Key::Enter), Response::Changed);
        assert_eq!(press(&mut menu, Key::Enter), Response::Ignored);
        assert_eq!(menu.state().display_text, "You hesitate.");
    }

    #[test]
    fn click_focuses_and_double_click_confirms() {
        let mut menu = BattleMenu::new();
        let id = ACTION_BUTTON_BASE + ACT as u16;
        assert_eq!(menu.handle_input(&InputEvent::Click(id)), Response::Changed);
        assert_eq!(menu.state().focused_action, ACT);
        assert_eq!(menu.state().mode, Mode::None);

        assert_eq!(menu.handle_input(&InputEvent::Click(id)), Response::Ignored);
        assert_eq!(menu.handle_input(&InputEvent::DoubleClick(id)), Response::Changed);
        assert_eq!(menu.state().mode, Mode::Act);
    }

    #[test]
    fn row_click_picks_immediately() {
        let mut menu = BattleMenu::new();
        press(&mut menu, Key::Left);
        press(&mut menu, Key::Left);
        press(&mut menu, Key::Enter);
        assert_eq!(menu.state().mode, Mode::Item);

        menu.handle_input(&InputEvent::Click(SUBMENU_ROW_BASE + 2));
        assert_eq!(menu.state().mode, Mode::None);
        assert_eq!(
            menu.state().display_text,
            "* It's bold of you to assume i finished any projects."
        );
        // The second press of a double tap lands on a closed submenu.
        assert_eq!(
            menu.handle_input(&InputEvent::DoubleClick(SUBMENU_ROW_BASE + 2)),
            Response::Ignored
        );
    }

    #[test]
    fn buttons_disabled_while_submenu_open() {
        let mut menu = BattleMenu::new();
        press(&mut menu, Key::Right);
        press(&mut menu, Key::Enter);
        let before = menu.state().clone();
        for ev in [
            InputEvent::Click(ACTION_BUTTON_BASE),
            InputEvent::DoubleClick(ACTION_BUTTON_BASE),
            InputEvent::Key(Key::Left),
            InputEvent::Key(Key::Right),
        ] {
            assert_eq!(menu.handle_input(&ev), Response::Ignored);
        }
        assert_eq!(menu.state(), &before);
    }
}
