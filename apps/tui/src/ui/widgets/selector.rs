use crate::app::App;
use baby_names_core::view::{NO_NAMES, PLACEHOLDER};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

pub fn render_selector(app: &App, f: &mut Frame<'_>, area: Rect) {
    let enabled = app.view.selector_enabled();
    let border_color = if enabled { Color::Green } else { Color::DarkGray };

    let block = Block::default()
        .title(selector_title(app))
        .title_style(Style::default().fg(border_color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let list = List::new(selector_items(app))
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(enabled.then_some(app.highlighted_index));
    f.render_stateful_widget(list, area, &mut state);
}

fn selector_title(app: &App) -> String {
    if app.filter.active {
        format!(" Names /{}_ ", app.filter.query)
    } else if app.filter.query.is_empty() {
        " Names ".to_string()
    } else {
        format!(" Names /{} ", app.filter.query)
    }
}

/// Placeholder first, then the visible names. Trailing hint rows are never
/// selectable because the cursor stops at `visible_len`.
pub fn selector_items(app: &App) -> Vec<ListItem<'static>> {
    let muted = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC);

    let mut items = vec![ListItem::new(TextLine::from(Span::styled(
        PLACEHOLDER,
        muted,
    )))];

    if !app.view.selector_enabled() {
        return items;
    }

    let names = app.visible_names();
    if names.is_empty() {
        let hint = if app.view.catalog().is_empty() {
            NO_NAMES
        } else {
            "No matching names"
        };
        items.push(ListItem::new(TextLine::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        ))));
        return items;
    }

    items.extend(
        names
            .into_iter()
            .map(|name| ListItem::new(TextLine::from(name.to_string()))),
    );
    items
}
