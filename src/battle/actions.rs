//! Semantic action IDs for battle menu click targets.

/// Action button base: + action index (FIGHT=0 .. MERCY=3).
pub const ACTION_BUTTON_BASE: u16 = 10;
/// Submenu row base: + row index in the open submenu.
pub const SUBMENU_ROW_BASE: u16 = 20;

const ACTION_BUTTON_COUNT: u16 = 4;
const SUBMENU_ROW_LIMIT: u16 = 10;

/// Action index for a button target, if `id` is one.
pub fn action_button(id: u16) -> Option<usize> {
    (ACTION_BUTTON_BASE..ACTION_BUTTON_BASE + ACTION_BUTTON_COUNT)
        .contains(&id)
        .then(|| (id - ACTION_BUTTON_BASE) as usize)
}

/// Row index for a submenu target, if `id` is one.
pub fn submenu_row(id: u16) -> Option<usize> {
    (SUBMENU_ROW_BASE..SUBMENU_ROW_BASE + SUBMENU_ROW_LIMIT)
        .contains(&id)
        .then(|| (id - SUBMENU_ROW_BASE) as usize)
}
