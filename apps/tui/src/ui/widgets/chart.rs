use crate::app::App;
use baby_names_core::chart::{MAX_BAR_HEIGHT, YEAR_AXIS};
use baby_names_core::view::NO_RANKING_DATA;
use baby_names_core::RankChart;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const TOP_TEN_COLOR: Color = Color::Yellow;
const BAR_COLOR: Color = Color::Cyan;

pub fn render_rank_chart(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title = app
        .active_name
        .as_deref()
        .map_or_else(|| " Rankings ".to_string(), |name| format!(" Rankings: {name} "));

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(BAR_COLOR).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BAR_COLOR));

    match app.view.chart() {
        None => {
            let hint = Paragraph::new("Select a name to see its ranking history")
                .style(Style::default().fg(Color::Gray))
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(hint, area);
        }
        Some(RankChart::NoRankingData) => {
            let paragraph = Paragraph::new(NO_RANKING_DATA)
                .style(Style::default().fg(Color::Yellow))
                .block(block)
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
        }
        Some(chart) => {
            let bars = rank_bars(chart);
            let chart = BarChart::default()
                .block(block.title_bottom(legend_line()))
                .data(BarGroup::default().bars(&bars))
                .max(u64::from(MAX_BAR_HEIGHT))
                .bar_gap(1)
                .bar_width(bar_width(area.width));
            f.render_widget(chart, area);
        }
    }
}

/// One bar per axis year. Flat bars get an empty value text so no `0` is drawn.
pub fn rank_bars(chart: &RankChart) -> Vec<Bar<'static>> {
    chart
        .bars()
        .iter()
        .map(|bar| {
            let color = if bar.top_ten { TOP_TEN_COLOR } else { BAR_COLOR };
            Bar::default()
                .value(u64::from(bar.height))
                .text_value(bar.label().unwrap_or_default())
                .label(TextLine::from(bar.year))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect()
}

/// Widest bar that still fits every year column in `width`.
fn bar_width(width: u16) -> u16 {
    let columns = u16::try_from(YEAR_AXIS.len()).unwrap_or(u16::MAX);
    (width.saturating_sub(2) / columns).saturating_sub(1).clamp(3, 6)
}

fn legend_line() -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(" ■ ", Style::default().fg(TOP_TEN_COLOR)),
        Span::styled("top 10  ", Style::default().fg(Color::Gray)),
        Span::styled("■ ", Style::default().fg(BAR_COLOR)),
        Span::styled("ranked ", Style::default().fg(Color::Gray)),
    ])
}
