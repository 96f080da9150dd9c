mod state;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use baby_names_core::chart::MAX_BAR_HEIGHT;
use baby_names_core::endpoint::{name_endpoint, DEFAULT_API_URL};
use baby_names_core::view::{NO_NAMES, NO_RANKING_DATA, PLACEHOLDER};
use baby_names_core::{parse_records, FetchError, NameRecord, RankChart};
use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use state::WebState;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Request, RequestInit, RequestMode, Response};

const SELECTOR_WIDTH: u16 = 26;

fn main() -> io::Result<()> {
    let state = Rc::new(RefCell::new(WebState::new()));

    spawn_local(load_catalog(state.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let state = state.clone();
        move |event| match event.code {
            ratzilla::event::KeyCode::Up => state.borrow_mut().move_up(),
            ratzilla::event::KeyCode::Down => state.borrow_mut().move_down(),
            ratzilla::event::KeyCode::Enter => {
                let name = state.borrow_mut().select_highlighted();
                if let Some(name) = name {
                    spawn_local(load_details(state.clone(), name));
                }
            }
            _ => {}
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("Baby Names")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        render_dashboard(&state.borrow(), f, inner);
    });

    Ok(())
}

fn render_dashboard(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SELECTOR_WIDTH), Constraint::Min(20)])
        .split(main_layout[0]);

    render_selector(state, f, content[0]);
    render_chart(state, f, content[1]);
    render_meaning(state, f, main_layout[1]);
    render_error(state, f, main_layout[2]);
    render_footer(state, f, main_layout[3]);
}

fn render_selector(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let enabled = state.view.selector_enabled();
    let color = if enabled { Color::Green } else { Color::DarkGray };

    let mut items = vec![ListItem::new(TextLine::from(Span::styled(
        PLACEHOLDER,
        Style::default().fg(Color::Gray),
    )))];
    if enabled && state.view.catalog().is_empty() {
        items.push(ListItem::new(TextLine::from(Span::styled(
            NO_NAMES,
            Style::default().fg(Color::DarkGray),
        ))));
    }
    items.extend(
        state
            .view
            .catalog()
            .names()
            .iter()
            .map(|name| ListItem::new(TextLine::from(name.clone()))),
    );

    let list = List::new(items)
        .block(
            Block::default()
                .title("Names")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default().with_selected(enabled.then_some(state.highlighted));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_chart(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let title = state
        .active_name
        .as_deref()
        .map_or_else(|| "Rankings".to_string(), |name| format!("Rankings: {name}"));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    match state.view.chart() {
        None => {
            let paragraph = Paragraph::new("Select a name to see its ranking history")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(paragraph, area);
        }
        Some(RankChart::NoRankingData) => {
            let paragraph = Paragraph::new(NO_RANKING_DATA)
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(paragraph, area);
        }
        Some(chart) => {
            let bars: Vec<Bar<'_>> = chart
                .bars()
                .iter()
                .map(|bar| {
                    let color = if bar.top_ten {
                        Color::Yellow
                    } else {
                        Color::Cyan
                    };
                    Bar::default()
                        .value(u64::from(bar.height))
                        .text_value(bar.label().unwrap_or_default())
                        .label(TextLine::from(bar.year))
                        .style(Style::default().fg(color))
                        .value_style(Style::default().fg(Color::Black).bg(color))
                })
                .collect();

            let chart = BarChart::default()
                .block(block)
                .data(BarGroup::default().bars(&bars))
                .max(u64::from(MAX_BAR_HEIGHT))
                .bar_gap(1)
                .bar_width(5);
            f.render_widget(chart, area);
        }
    }
}

fn render_meaning(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let paragraph = Paragraph::new(state.view.meaning())
        .block(
            Block::default()
                .title("Meaning")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_error(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let error = state.view.error();
    let border = if error.is_empty() {
        Color::DarkGray
    } else {
        Color::Red
    };
    let paragraph = Paragraph::new(Span::styled(
        error,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .block(
        Block::default()
            .title("Errors")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
    .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_footer(state: &WebState, f: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![
        Span::styled("Up/Down", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("Enter", Style::default().fg(Color::Gray)),
    ];
    if let Some(label) = &state.loading {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(label.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

async fn load_catalog(state: Rc<RefCell<WebState>>) {
    let result = fetch_records(DEFAULT_API_URL).await;
    report(&result, "catalog");
    state.borrow_mut().finish_catalog(result);
}

async fn load_details(state: Rc<RefCell<WebState>>, name: String) {
    let encoded = String::from(js_sys::encode_uri_component(&name));
    let result = fetch_records(&name_endpoint(DEFAULT_API_URL, &encoded)).await;
    report(&result, &name);
    state.borrow_mut().finish_details(name, result);
}

fn report(result: &Result<Vec<NameRecord>, FetchError>, what: &str) {
    match result {
        Ok(records) => {
            web_sys::console::log_1(&format!("{what}: {} rows", records.len()).into());
        }
        Err(error) => {
            web_sys::console::error_1(&format!("{what}: {error}").into());
        }
    }
}

async fn fetch_records(url: &str) -> Result<Vec<NameRecord>, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::network("no browser window"))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FetchError::network(js_message(&e)))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FetchError::network(js_message(&e)))?;

    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| FetchError::network("fetch did not return a response"))?;

    if !response.ok() {
        return Err(FetchError::network(format!("HTTP {}", response.status())));
    }

    let text = response
        .text()
        .map_err(|e| FetchError::network(js_message(&e)))?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| FetchError::network(js_message(&e)))?;

    let body = body
        .as_string()
        .ok_or_else(|| FetchError::parse("response body is not text"))?;
    parse_records(&body)
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
