//! Top-level application state: splash → battle → ended.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::Color;
use ratzilla::ratatui::Frame;
use tachyonfx::{fx, Duration, Effect, Interpolation};

use crate::assets::{AssetGate, LoadOutcome, SPLASH_DELAY_MS};
use crate::battle::lore::asset_manifest;
use crate::battle::{render, BattleMenu, Response};
use crate::input::{ClickState, InputEvent};
use crate::time::FrameClock;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Splash: assets still settling or the post-load delay running.
    Loading,
    Battle,
    /// FIGHT was confirmed. Nothing reacts any more.
    Ended,
}

pub struct App {
    gate: AssetGate,
    menu: BattleMenu,
    clock: FrameClock,
    pulse: Effect,
    ended: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            gate: AssetGate::new(&asset_manifest(), SPLASH_DELAY_MS),
            menu: BattleMenu::new(),
            clock: FrameClock::new(),
            pulse: fx::repeating(fx::ping_pong(fx::fade_to_fg(
                Color::DarkGray,
                (600, Interpolation::SineInOut),
            ))),
            ended: false,
        }
    }

    pub fn phase(&self) -> Phase {
        if self.ended {
            Phase::Ended
        } else if self.gate.is_loading() {
            Phase::Loading
        } else {
            Phase::Battle
        }
    }

    pub fn gate(&self) -> &AssetGate {
        &self.gate
    }

    pub fn menu(&self) -> &BattleMenu {
        &self.menu
    }

    pub fn settle_asset(&mut self, index: usize, outcome: LoadOutcome, now_ms: f64) {
        self.gate.settle(index, outcome, now_ms);
    }

    /// Advance clocks for this frame. Returns the frame delta in ms and
    /// whether the gate opened on this frame.
    pub fn tick(&mut self, now_ms: f64) -> (u32, bool) {
        let delta = self.clock.update(now_ms);
        let opened = self.gate.poll(now_ms);
        (delta, opened)
    }

    /// Route an input event. Input only reaches the menu during `Battle`.
    pub fn handle_input(&mut self, event: &InputEvent) -> Response {
        if self.phase() != Phase::Battle {
            return Response::Ignored;
        }
        let response = self.menu.handle_input(event);
        if response == Response::Terminate {
            self.ended = true;
        }
        response
    }

    pub fn render(
        &mut self,
        f: &mut Frame,
        area: Rect,
        delta_ms: u32,
        click_state: &Rc<RefCell<ClickState>>,
    ) {
        match self.phase() {
            Phase::Loading => {
                let pulse_area = render::render_splash(self.gate.progress(), f, area);
                self.pulse
                    .process(Duration::from_millis(delta_ms), f.buffer_mut(), pulse_area);
            }
            Phase::Battle => self.menu.render(f, area, click_state),
            Phase::Ended => render::render_farewell(f, area),
        }
    }
}
