mod filter;
mod help;
mod helpers;
mod selector;

use crate::app::state::App;
use crossterm::event::KeyCode;

/// Routes one key press. Never awaits: network work is queued on
/// `App::pending` and run by the event loop.
pub fn handle_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.filter.active && filter::handle_filter_input(app, key) {
        return;
    }

    selector::handle_selector_input(app, key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Request;
    use crate::source::memory::MemorySource;
    use baby_names_core::{NameRecord, Selection};

    async fn app_with(names: &[&str]) -> App {
        let records = names
            .iter()
            .map(|name| NameRecord::new(name, "2014", Some(5), None))
            .collect();
        let mut app = App::new(Box::new(MemorySource::new(records)));
        app.run_pending().await;
        app
    }

    #[tokio::test]
    async fn arrows_move_the_highlight_and_wrap() {
        let mut app = app_with(&["Ava", "Emma", "Mia"]).await;

        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Down);
        assert_eq!(app.highlighted(), Some(Selection::Name("Emma".to_string())));

        handle_input(&mut app, KeyCode::Up);
        handle_input(&mut app, KeyCode::Up);
        handle_input(&mut app, KeyCode::Up);
        assert_eq!(app.highlighted(), Some(Selection::Name("Mia".to_string())));

        handle_input(&mut app, KeyCode::Home);
        assert_eq!(app.highlighted(), Some(Selection::Placeholder));
        handle_input(&mut app, KeyCode::End);
        assert_eq!(app.highlighted_index, 3);
    }

    #[tokio::test]
    async fn enter_on_a_name_queues_its_request() {
        let mut app = app_with(&["Ava", "Emma"]).await;

        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Enter);

        assert_eq!(app.pending, Some(Request::Details("Ava".to_string())));
    }

    #[tokio::test]
    async fn enter_on_placeholder_clears() {
        let mut app = app_with(&["Ava"]).await;
        app.view.show_details(&[NameRecord::new("Ava", "2014", Some(1), None)]);

        handle_input(&mut app, KeyCode::Enter);

        assert!(app.pending.is_none());
        assert!(app.view.chart().is_none());
    }

    #[tokio::test]
    async fn slash_filters_and_enter_applies_the_match() {
        let mut app = app_with(&["Ava", "Emma", "Emmett"]).await;

        handle_input(&mut app, KeyCode::Char('/'));
        for ch in "mmet".chars() {
            handle_input(&mut app, KeyCode::Char(ch));
        }
        assert_eq!(app.visible_names(), ["Emmett"]);

        handle_input(&mut app, KeyCode::Enter);
        assert_eq!(app.pending, Some(Request::Details("Emmett".to_string())));
        assert!(!app.filter.active);
    }

    #[tokio::test]
    async fn enter_with_no_matches_keeps_the_chart() {
        let mut app = app_with(&["Ava", "Emma"]).await;
        app.apply_selection(Selection::Name("Emma".to_string()));
        app.run_pending().await;

        handle_input(&mut app, KeyCode::Char('/'));
        for ch in "zzz".chars() {
            handle_input(&mut app, KeyCode::Char(ch));
        }
        assert!(app.visible_names().is_empty());

        handle_input(&mut app, KeyCode::Enter);

        assert!(app.filter.active);
        assert!(app.pending.is_none());
        assert!(app.view.chart().is_some());
        assert_eq!(app.active_name.as_deref(), Some("Emma"));
    }

    #[tokio::test]
    async fn q_inside_filter_is_text_not_quit() {
        let mut app = app_with(&["Quinn"]).await;

        handle_input(&mut app, KeyCode::Char('/'));
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(app.running);
        assert_eq!(app.filter.query, "q");

        handle_input(&mut app, KeyCode::Esc);
        handle_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[tokio::test]
    async fn help_popup_swallows_keys_until_closed() {
        let mut app = app_with(&["Ava"]).await;

        handle_input(&mut app, KeyCode::F(1));
        assert!(app.show_help);
        handle_input(&mut app, KeyCode::Down);
        assert_eq!(app.highlighted_index, 0);

        handle_input(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[tokio::test]
    async fn selector_ignores_keys_until_catalog_loads() {
        let mut app = App::new(Box::new(MemorySource::new(Vec::new())));

        handle_input(&mut app, KeyCode::Down);
        handle_input(&mut app, KeyCode::Enter);

        assert_eq!(app.highlighted_index, 0);
        assert_eq!(app.pending, Some(Request::Catalog));
    }
}
