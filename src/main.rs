mod app;
mod assets;
mod battle;
mod input;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use app::App;
use assets::LoadOutcome;
use battle::Response;
use input::{pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent, Key, TapTracker};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

/// Milliseconds since page load, from `performance.now()`.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Query the grid container's bounding rect and convert pixel coordinates to a cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

/// Forward one event to the app and report what happened on the console.
fn dispatch(app: &Rc<RefCell<App>>, event: InputEvent) {
    let mut app = app.borrow_mut();
    match app.handle_input(&event) {
        Response::Ignored => {}
        Response::Changed => {
            let json = serde_json::to_string(&app.menu().snapshot()).unwrap_or_default();
            web_sys::console::log_1(&format!("menu: {:?} -> {}", event, json).into());
        }
        Response::Terminate => {
            web_sys::console::log_1(&"menu: FIGHT confirmed, closing session".into());
            close_window();
        }
    }
}

/// Browsers refuse to close windows that script did not open; the app has
/// already switched to its ended phase, so a refusal is only logged.
fn close_window() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.close() {
        web_sys::console::warn_1(&format!("window.close() rejected: {:?}", e).into());
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let app = Rc::new(RefCell::new(App::new()));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let taps = Rc::new(RefCell::new(TapTracker::new()));

    // Kick off image loads; each callback fills one gate slot.
    let manifest = app.borrow().gate().resources().to_vec();
    assets::preload(&manifest, {
        let app = app.clone();
        Rc::new(move |index: usize, outcome: LoadOutcome| {
            if outcome == LoadOutcome::Failed {
                if let Some(resource) = manifest_path(&app, index) {
                    web_sys::console::warn_1(&format!("asset failed to load: {}", resource).into());
                }
            }
            app.borrow_mut().settle_asset(index, outcome, now_ms());
        })
    });

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let app = app.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                return;
            };
            let hit = cs.hit_test(col, row);
            drop(cs);

            if let Some(id) = hit {
                let double = taps.borrow_mut().press(id, now_ms());
                dispatch(&app, InputEvent::Click(id));
                if double {
                    dispatch(&app, InputEvent::DoubleClick(id));
                }
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let app = app.clone();
        move |key_event| {
            if let Some(key) = map_key(key_event.code) {
                dispatch(&app, InputEvent::Key(key));
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            let mut app = app.borrow_mut();
            let (delta, opened) = app.tick(now_ms());
            if opened {
                let (settled, total) = app.gate().progress();
                let failed = app.gate().failed().count();
                web_sys::console::log_1(
                    &format!("assets settled: {}/{} ({} failed), battle ready", settled, total, failed)
                        .into(),
                );
            }
            app.render(f, size, delta, &click_state);
        }
    });

    Ok(())
}

fn manifest_path(app: &Rc<RefCell<App>>, index: usize) -> Option<&'static str> {
    app.borrow().gate().resources().get(index).map(|r| r.path)
}
