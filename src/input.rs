//! Shared input handling: key normalisation, click targets, double activation,
//! and pixel → cell conversion.
//!
//! Nothing here knows about the battle menu. `battle` maps these events onto
//! menu inputs.

use ratzilla::ratatui::layout::Rect;

/// Two presses on the same target within this window count as a double activation.
pub const DOUBLE_ACTIVATION_MS: f64 = 500.0;

/// Keys the menu cares about, normalised from the host's key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Enter,
    Escape,
    Char(char),
}

/// All possible input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(Key),
    /// A single press on a registered target, identified by a semantic action ID.
    Click(u16),
    /// The second press of a pair on the same target (see [`TapTracker`]).
    DoubleClick(u16),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// The rectangular region (in terminal cell coordinates) for hit testing.
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared state between the render loop and click handler.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-row target inside `area`. Rows outside the area are dropped.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.add_click_target(Rect::new(area.x, row, area.width, 1), action_id);
        }
    }

    /// Hit-test a cell. Later-registered targets sit on top and win on overlap.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            let inside = col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height;
            inside.then_some(t.action_id)
        })
    }
}

/// Detects double activation from a stream of presses.
///
/// Browsers report every press of a double click, so the menu sees a `Click`
/// for each press and one extra `DoubleClick` on the second press of a pair.
pub struct TapTracker {
    last: Option<(u16, f64)>,
}

impl TapTracker {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record a press on `action_id` at `now_ms`. Returns true when it completes a pair.
    pub fn press(&mut self, action_id: u16, now_ms: f64) -> bool {
        match self.last {
            Some((prev_id, prev_ms))
                if prev_id == action_id && now_ms - prev_ms <= DOUBLE_ACTIVATION_MS =>
            {
                // A third press starts a new pair.
                self.last = None;
                true
            }
            _ => {
                self.last = Some((action_id, now_ms));
                false
            }
        }
    }
}

/// Determine whether a screen width (in columns) should use narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}

/// Convert a pixel Y coordinate (relative to the grid's top edge) to a terminal row.
///
/// Returns `None` if the click is outside the grid or inputs are invalid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    pixel_to_cell(click_y, grid_height, terminal_rows)
}

/// Convert a pixel X coordinate (relative to the grid's left edge) to a terminal column.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    pixel_to_cell(click_x, grid_width, terminal_cols)
}

fn pixel_to_cell(offset: f64, extent: f64, cells: u16) -> Option<u16> {
    if extent <= 0.0 || cells == 0 || offset < 0.0 {
        return None;
    }
    let cell = (offset / (extent / cells as f64)) as u16;
    if cell >= cells { None } else { Some(cell) }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test ────────────────────────────────────────────────

    #[test]
    fn hit_test_basic() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
        assert_eq!(cs.hit_test(5, 12), None);
    }

    #[test]
    fn hit_test_side_by_side_buttons() {
        // Four action buttons, 20 columns each, three rows tall.
        let mut cs = ClickState::new();
        for i in 0..4u16 {
            cs.add_click_target(Rect::new(i * 20, 30, 20, 3), 10 + i);
        }

        assert_eq!(cs.hit_test(0, 30), Some(10));
        assert_eq!(cs.hit_test(19, 32), Some(10));
        assert_eq!(cs.hit_test(20, 31), Some(11));
        assert_eq!(cs.hit_test(79, 32), Some(13));
        assert_eq!(cs.hit_test(80, 31), None);
        assert_eq!(cs.hit_test(40, 33), None);
    }

    #[test]
    fn hit_test_overlap_last_wins() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 80, 1), 1);
        cs.add_click_target(Rect::new(5, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(7, 5), Some(2));
        assert_eq!(cs.hit_test(0, 5), Some(1));
    }

    #[test]
    fn add_row_target_clipped_to_area() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 9, 98);
        cs.add_row_target(area, 12, 99);
        cs.add_row_target(area, 15, 97);

        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(15, 12), Some(99));
        assert_eq!(cs.hit_test(4, 12), None);
    }

    #[test]
    fn clear_targets_empties_state() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 1, 80, 1), 1);
        cs.clear_targets();
        assert!(cs.targets.is_empty());
        assert_eq!(cs.hit_test(0, 1), None);
    }

    // ── TapTracker ──────────────────────────────────────────────

    #[test]
    fn second_press_on_same_target_is_double() {
        let mut tt = TapTracker::new();
        assert!(!tt.press(10, 1000.0));
        assert!(tt.press(10, 1200.0));
    }

    #[test]
    fn presses_too_far_apart_are_not_double() {
        let mut tt = TapTracker::new();
        assert!(!tt.press(10, 1000.0));
        assert!(!tt.press(10, 1600.0));
        // The late press opens a new pair.
        assert!(tt.press(10, 1700.0));
    }

    #[test]
    fn presses_on_different_targets_are_not_double() {
        let mut tt = TapTracker::new();
        assert!(!tt.press(10, 0.0));
        assert!(!tt.press(11, 100.0));
        assert!(tt.press(11, 200.0));
    }

    #[test]
    fn third_press_starts_new_pair() {
        let mut tt = TapTracker::new();
        tt.press(12, 0.0);
        assert!(tt.press(12, 100.0));
        assert!(!tt.press(12, 200.0));
        assert!(tt.press(12, 300.0));
    }

    // ── Layout / pixel conversion ───────────────────────────────

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(30));
        assert!(is_narrow_layout(59));
        assert!(!is_narrow_layout(60));
        assert!(!is_narrow_layout(120));
    }

    #[test]
    fn pixel_to_row_basic() {
        // 30 rows, 450px → 15px per row
        assert_eq!(pixel_y_to_row(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(14.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_y_to_row(449.0, 450.0, 30), Some(29));
    }

    #[test]
    fn pixel_to_row_rejects_outside_and_degenerate() {
        assert_eq!(pixel_y_to_row(450.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(-1.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 0.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 450.0, 0), None);
    }

    #[test]
    fn pixel_x_to_col_basic() {
        assert_eq!(pixel_x_to_col(0.0, 800.0, 80), Some(0));
        assert_eq!(pixel_x_to_col(10.0, 800.0, 80), Some(1));
        assert_eq!(pixel_x_to_col(799.0, 800.0, 80), Some(79));
        assert_eq!(pixel_x_to_col(800.0, 800.0, 80), None);
    }

    #[test]
    fn full_click_pipeline() {
        let mut cs = ClickState::new();
        cs.terminal_cols = 80;
        cs.terminal_rows = 30;
        cs.add_click_target(Rect::new(20, 26, 20, 3), 11);

        let (grid_w, grid_h) = (800.0, 450.0);
        let col = pixel_x_to_col(25.0 * 10.0 + 3.0, grid_w, cs.terminal_cols).unwrap();
        let row = pixel_y_to_row(27.0 * 15.0 + 7.0, grid_h, cs.terminal_rows).unwrap();
        assert_eq!((col, row), (25, 27));
        assert_eq!(cs.hit_test(col, row), Some(11));
    }
}
