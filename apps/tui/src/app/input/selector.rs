use crate::app::input::helpers::{clamp_forward, wrap_decrement, wrap_increment};
use crate::app::state::App;
use crossterm::event::KeyCode;

const PAGE_STEP: usize = 5;

pub fn handle_selector_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Char('q') {
        app.running = false;
        return;
    }

    if !app.view.selector_enabled() {
        return;
    }

    let total_rows = app.visible_len();

    match key {
        KeyCode::Char('/') => {
            app.start_filter();
        }
        KeyCode::Esc => {
            if !app.filter.query.is_empty() {
                app.clear_filter();
            }
        }
        KeyCode::Up => {
            app.highlighted_index = wrap_decrement(app.highlighted_index, total_rows);
        }
        KeyCode::Down => {
            app.highlighted_index = wrap_increment(app.highlighted_index, total_rows);
        }
        KeyCode::PageUp => {
            app.highlighted_index = app.highlighted_index.saturating_sub(PAGE_STEP);
        }
        KeyCode::PageDown => {
            app.highlighted_index = clamp_forward(app.highlighted_index, PAGE_STEP, total_rows);
        }
        KeyCode::Home => {
            app.highlighted_index = 0;
        }
        KeyCode::End => {
            app.highlighted_index = total_rows - 1;
        }
        KeyCode::Enter => {
            app.apply_highlighted();
        }
        _ => {}
    }
}
