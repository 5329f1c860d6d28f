//! Battle menu state — data structures only, no logic.

use serde::Serialize;

use crate::assets::ResourceRef;

use super::lore::INTRO_TEXT;

/// Which submenu, if any, is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    None,
    Act,
    Item,
}

/// One of the four top-level battle choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub id: usize,
    pub name: &'static str,
    pub normal_sprite: ResourceRef,
    pub selected_sprite: ResourceRef,
}

/// A row in the ACT or ITEM submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmenuItem {
    pub id: usize,
    pub title: &'static str,
    /// Dialogue shown (with a `* ` prefix) when the row is confirmed.
    pub output: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuState {
    pub mode: Mode,
    /// Always in `0..4`, whatever the mode.
    pub focused_action: usize,
    /// Valid for the open submenu; reset to 0 on every entry.
    pub submenu_index: usize,
    pub display_text: String,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            mode: Mode::None,
            focused_action: 0,
            submenu_index: 0,
            display_text: INTRO_TEXT.to_string(),
        }
    }

    pub fn snapshot(&self) -> MenuSnapshot<'_> {
        MenuSnapshot {
            mode: self.mode,
            focused_action: self.focused_action,
            submenu_index: self.submenu_index,
            display_text: &self.display_text,
        }
    }
}

/// Read-only view handed to presentation and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MenuSnapshot<'a> {
    pub mode: Mode,
    pub focused_action: usize,
    pub submenu_index: usize,
    pub display_text: &'a str,
}
