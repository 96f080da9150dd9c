use crate::app::state::App;
use crossterm::event::KeyCode;

/// Text keys while the filter prompt is open. Returns false for keys the
/// selector should still see (arrows, paging).
pub fn handle_filter_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Esc => {
            app.clear_filter();
        }
        KeyCode::Enter => {
            // Nothing matches: keep the prompt open rather than apply the placeholder.
            if app.visible_names().is_empty() {
                return true;
            }
            app.apply_highlighted();
            app.filter.active = false;
        }
        KeyCode::Backspace => {
            app.pop_filter_char();
        }
        KeyCode::Char(ch) => {
            app.push_filter_char(ch);
        }
        _ => return false,
    }

    true
}
