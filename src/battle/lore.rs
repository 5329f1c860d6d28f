//! Static battle content: the four actions, both submenus, dialogue lines,
//! the player's stat line, and the asset manifest.

use crate::assets::ResourceRef;

use super::state::{Action, Mode, SubmenuItem};

pub const INTRO_TEXT: &str = "A weird creature appears...";
pub const ACT_PROMPT: &str = "What will you do?";
pub const ITEM_PROMPT: &str = "Choose an item.";
pub const MERCY_TEXT: &str = "You hesitate.";
pub const FAREWELL_TEXT: &str = "You left the battle.";

pub const FIGHT: usize = 0;
pub const ACT: usize = 1;
pub const ITEM: usize = 2;
pub const MERCY: usize = 3;

pub const PORTRAIT: ResourceRef = ResourceRef::new("assets/imgs/pp.jpg");

pub const ACTIONS: [Action; 4] = [
    Action {
        id: FIGHT,
        name: "FIGHT",
        normal_sprite: ResourceRef::new("assets/sprites/fight.png"),
        selected_sprite: ResourceRef::new("assets/sprites/fight_selected.png"),
    },
    Action {
        id: ACT,
        name: "ACT",
        normal_sprite: ResourceRef::new("assets/sprites/act.png"),
        selected_sprite: ResourceRef::new("assets/sprites/act_selected.png"),
    },
    Action {
        id: ITEM,
        name: "ITEM",
        normal_sprite: ResourceRef::new("assets/sprites/item.png"),
        selected_sprite: ResourceRef::new("assets/sprites/item_selected.png"),
    },
    Action {
        id: MERCY,
        name: "MERCY",
        normal_sprite: ResourceRef::new("assets/sprites/mercy.png"),
        selected_sprite: ResourceRef::new("assets/sprites/mercy_selected.png"),
    },
];

pub const ACT_ITEMS: [SubmenuItem; 2] = [
    SubmenuItem { id: 0, title: "Check", output: "Just a nerd." },
    SubmenuItem { id: 1, title: "Call", output: "ring... ring... \n no one picked up." },
];

pub const ITEM_ITEMS: [SubmenuItem; 3] = [
    SubmenuItem { id: 0, title: "Hobbies", output: "I like..." },
    SubmenuItem { id: 1, title: "Resources", output: "Here are some cool stuff" },
    SubmenuItem {
        id: 2,
        title: "Projects",
        output: "It's bold of you to assume i finished any projects.",
    },
];

/// Items of the submenu opened in `mode`; empty for `Mode::None`.
pub fn submenu_items(mode: Mode) -> &'static [SubmenuItem] {
    match mode {
        Mode::None => &[],
        Mode::Act => &ACT_ITEMS,
        Mode::Item => &ITEM_ITEMS,
    }
}

/// Everything the splash waits on: portrait first, then each action's two sprites.
pub fn asset_manifest() -> Vec<ResourceRef> {
    std::iter::once(PORTRAIT)
        .chain(ACTIONS.iter().flat_map(|a| [a.normal_sprite, a.selected_sprite]))
        .collect()
}

// ── Stat bar ──────────────────────────────────────────────────

pub const PLAYER_NAME: &str = "FRISK";
pub const PLAYER_LV: u32 = 1;
pub const PLAYER_HP: u32 = 20;
pub const PLAYER_MAX_HP: u32 = 20;

/// Text stand-in for the portrait, drawn dimmed.
pub const PORTRAIT_ART: [&str; 5] = [
    r"   .-----.   ",
    r"  / o   o \  ",
    r" |    ^    | ",
    r"  \  ---  /  ",
    r"   '-----'   ",
];
