use crate::app::App;
use crate::ui::widgets::chart::render_rank_chart;
use crate::ui::widgets::popup::centered_rect;
use crate::ui::widgets::selector::render_selector;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use throbber_widgets_tui::Throbber;

const SELECTOR_WIDTH: u16 = 28;

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = build_main_layout(app, f);

    if app.show_help {
        render_help_popup(f, main_layout[0]);
        return;
    }

    render_title_section(f, main_layout[0]);
    render_content_section(app, f, main_layout[1]);
    render_error_section(app, f, main_layout[2]);
    render_status_section(app, f, main_layout[3]);
    render_shortcuts(f, main_layout[4]);
}

fn build_main_layout(app: &App, f: &Frame<'_>) -> Vec<Rect> {
    if app.show_help {
        return Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(100)])
            .split(f.area().inner(Margin::new(2, 1)))
            .to_vec();
    }

    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Selector and chart
            Constraint::Length(3), // Error line
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)))
        .to_vec()
}

fn render_title_section(f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Baby Names ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "popularity ranks 2014-2023",
            Style::default().fg(Color::White),
        ),
    ]))
    .block(title_block)
    .alignment(Alignment::Left);

    f.render_widget(title, area);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SELECTOR_WIDTH), Constraint::Min(20)])
        .split(area);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(3)])
        .split(columns[1]);

    render_selector(app, f, columns[0]);
    render_rank_chart(app, f, right[0]);
    render_meaning(app, f, right[1]);
}

fn render_meaning(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Meaning ")
        .title_style(Style::default().fg(Color::Magenta))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let paragraph = Paragraph::new(app.view.meaning())
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_error_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let error = app.view.error();
    let color = if error.is_empty() {
        Color::DarkGray
    } else {
        Color::Red
    };

    let block = Block::default()
        .title(" Errors ")
        .title_style(Style::default().fg(color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(Span::styled(
        error,
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    ))
    .block(block)
    .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_line = app.pending.as_ref().map_or_else(
        || {
            TextLine::from(Span::styled(
                app.status_message.clone(),
                Style::default().fg(Color::Green),
            ))
        },
        |request| {
            Throbber::default()
                .label(request.loading_label())
                .style(Style::default().fg(Color::Yellow))
                .to_line(&app.throbber_state)
        },
    );

    let status_paragraph = Paragraph::new(status_line).block(status_block);
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("Up/Down", key),
        Span::styled(": Move | ", text),
        Span::styled("Enter", key),
        Span::styled(": Show | ", text),
        Span::styled("/", key),
        Span::styled(": Filter | ", text),
        Span::styled("Esc", key),
        Span::styled(": Clear filter | ", text),
        Span::styled("?", key),
        Span::styled(": Help | ", text),
        Span::styled("q", key),
        Span::styled(": Quit", text),
    ]);

    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Center),
        area,
    );
}

fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(Clear, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::Gray),
    ))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };
    f.render_widget(hint, hint_area);
}

fn help_key_line(key: &'static str, action: &'static str) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(action),
    ])
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Baby Names",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Pick a name to chart its popularity rank for 2014-2023."),
        TextLine::from("Taller bars are better ranks; yellow bars are top 10 years."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        help_key_line("  Up/Down", " - Move through the name list"),
        help_key_line("  PgUp/PgDn", " - Jump five names"),
        help_key_line("  Home/End", " - First or last name"),
        help_key_line("  Enter", " - Chart the highlighted name"),
        help_key_line("  /", " - Filter names (Enter keeps, Esc clears)"),
        help_key_line("  ? / F1", " - Toggle this help popup"),
        help_key_line("  q", " - Quit application"),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "CLI Options:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let help_text = crate::cli::CliArgs::help_text();
    for line in help_text.lines() {
        if line.starts_with("Usage") || line.starts_with("Options") || line.trim().is_empty() {
            continue;
        }
        lines.push(TextLine::from(line.to_string()));
    }

    lines
}

#[cfg(test)]
mod tests {
    use crate::app::App;
    use crate::source::memory::MemorySource;
    use crate::ui::ui;
    use baby_names_core::{FetchError, NameRecord, Selection};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn records() -> Vec<NameRecord> {
        vec![
            NameRecord::new("Emma", "2014", Some(2), Some("Whole")),
            NameRecord::new("Emma", "2023", Some(30), Some("Whole")),
            NameRecord::new("Liam", "2014", Some(0), None),
        ]
    }

    #[test]
    fn startup_frame_shows_loading_and_placeholder() {
        let app = App::new(Box::new(MemorySource::new(records())));

        let screen = rendered(&app);

        assert!(screen.contains("Loading names..."));
        assert!(screen.contains("Select a name..."));
        assert!(screen.contains("Select a name to see its ranking history"));
    }

    #[tokio::test]
    async fn chart_frame_shows_years_and_meaning() {
        let mut app = App::new(Box::new(MemorySource::new(records())));
        app.run_pending().await;
        app.apply_selection(Selection::Name("Emma".to_string()));
        app.run_pending().await;

        let screen = rendered(&app);

        assert!(screen.contains("Rankings: Emma"));
        assert!(screen.contains("2014"));
        assert!(screen.contains("2023"));
        assert!(screen.contains("Origin/Meaning: Whole"));
        assert!(screen.contains("2 rows for Emma"));
    }

    #[tokio::test]
    async fn unranked_name_shows_no_ranking_data() {
        let mut app = App::new(Box::new(MemorySource::new(records())));
        app.run_pending().await;
        app.apply_selection(Selection::Name("Liam".to_string()));
        app.run_pending().await;

        let screen = rendered(&app);

        assert!(screen.contains("This name has no ranking data."));
        assert!(screen.contains("(Nothing for you here! Whoops!)"));
    }

    #[tokio::test]
    async fn failures_render_in_the_error_region() {
        let source = MemorySource::failing_catalog(FetchError::network("offline"));
        let mut app = App::new(Box::new(source));
        app.run_pending().await;

        let screen = rendered(&app);

        assert!(screen.contains("ATTENTION!! SOMETHING WENT WRONG: network error: offline"));
    }

    #[test]
    fn help_popup_replaces_the_main_screen() {
        let mut app = App::new(Box::new(MemorySource::new(Vec::new())));
        app.show_help = true;

        let screen = rendered(&app);

        assert!(screen.contains("Help & Keyboard Shortcuts"));
        assert!(screen.contains("Press ? or Esc to close"));
        assert!(!screen.contains("Select a name..."));
    }
}
