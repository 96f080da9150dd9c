use baby_names_core::chart::MAX_BAR_HEIGHT;
use baby_names_core::view::NO_RANKING_DATA;
use baby_names_core::{NameCatalog, RankChart, Selection};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fmt::Write as _;
use tracing::info;

use crate::app::App;

const TEXT_BAR_WIDTH: u32 = 30;

/// Run the application in headless mode (no UI)
///
/// Without a name the catalog is printed; with one, that name's chart.
pub async fn run_headless(app: &mut App, name: Option<&str>, json: bool) -> Result<()> {
    if let Some(name) = name {
        app.apply_selection(Selection::Name(name.to_string()));
    }
    app.run_pending().await;

    if !app.view.error().is_empty() {
        return Err(eyre!("{}", app.view.error()));
    }

    let output = match name {
        None if json => serde_json::to_string_pretty(&HeadlessCatalog::from(app.view.catalog()))?,
        None => render_catalog_text(app.view.catalog()),
        Some(name) => {
            let chart = app.view.chart().cloned().unwrap_or(RankChart::NoRankingData);
            if json {
                serde_json::to_string_pretty(&HeadlessChart {
                    name,
                    chart: &chart,
                    meaning: app.view.meaning(),
                })?
            } else {
                render_chart_text(name, &chart, app.view.meaning())
            }
        }
    };

    info!(json, "headless output ready");
    println!("{output}");
    Ok(())
}

pub fn render_catalog_text(catalog: &NameCatalog) -> String {
    let mut out = String::from("\nBaby Names\n==========\n");
    let _ = writeln!(out, "Total names: {}", catalog.len());
    for name in catalog.names() {
        let _ = writeln!(out, "- {name}");
    }
    out
}

pub fn render_chart_text(name: &str, chart: &RankChart, meaning: &str) -> String {
    let mut out = format!("\n{name}\n{}\n", "=".repeat(name.chars().count()));

    match chart {
        RankChart::NoRankingData => {
            let _ = writeln!(out, "{NO_RANKING_DATA}");
        }
        RankChart::Bars { bars } => {
            for bar in bars {
                let fill = (bar.height * TEXT_BAR_WIDTH / MAX_BAR_HEIGHT) as usize;
                let empty = TEXT_BAR_WIDTH as usize - fill;
                let rank = bar
                    .label()
                    .map_or_else(|| "-".to_string(), |label| format!("#{label}"));
                let marker = if bar.top_ten { " *" } else { "" };
                let _ = writeln!(
                    out,
                    "{} | {}{} {:>3} {rank}{marker}",
                    bar.year,
                    "█".repeat(fill),
                    "░".repeat(empty),
                    bar.height,
                );
            }
            let _ = writeln!(out, "(* top 10)");
        }
    }

    let _ = write!(out, "\n{meaning}");
    out
}

#[derive(serde::Serialize)]
struct HeadlessCatalog<'a> {
    total_names: usize,
    names: &'a [String],
}

impl<'a> From<&'a NameCatalog> for HeadlessCatalog<'a> {
    fn from(catalog: &'a NameCatalog) -> Self {
        Self {
            total_names: catalog.len(),
            names: catalog.names(),
        }
    }
}

#[derive(serde::Serialize)]
struct HeadlessChart<'a> {
    name: &'a str,
    chart: &'a RankChart,
    meaning: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::memory::MemorySource;
    use crate::source::RecordSource;
    use baby_names_core::{normalize, FetchError, NameRecord};
    use std::sync::Arc;

    fn records() -> Vec<NameRecord> {
        vec![
            NameRecord::new("Emma", "2014", Some(5), Some("Whole")),
            NameRecord::new("Emma", "2015", Some(50), Some("Whole")),
            NameRecord::new("Liam", "2014", Some(0), None),
        ]
    }

    #[test]
    fn catalog_text_lists_every_name() {
        let catalog = NameCatalog::from_records(&records());

        let text = render_catalog_text(&catalog);

        assert!(text.contains("Total names: 2"));
        assert!(text.contains("- Emma\n- Liam\n"));
    }

    #[test]
    fn chart_text_draws_one_row_per_year() {
        let chart = normalize(&records()[..2]);

        let text = render_chart_text("Emma", &chart, "Origin/Meaning: Whole");

        assert!(text.contains(&format!("2014 | {} 180 #5 *", "█".repeat(30))));
        assert!(text.contains(&format!("2015 | {}   0 -", "░".repeat(30))));
        assert_eq!(text.lines().filter(|line| line.contains(" | ")).count(), 10);
        assert!(text.ends_with("Origin/Meaning: Whole"));
    }

    #[test]
    fn chart_text_reports_missing_rankings() {
        let text = render_chart_text("Liam", &RankChart::NoRankingData, "Origin/Meaning: x");
        assert!(text.contains(NO_RANKING_DATA));
        assert!(!text.contains(" | "));
    }

    #[test]
    fn catalog_json_shape() {
        let catalog = NameCatalog::from_records(&records());
        let value = serde_json::to_value(HeadlessCatalog::from(&catalog)).unwrap();

        assert_eq!(value["total_names"], 2);
        assert_eq!(value["names"][0], "Emma");
    }

    #[test]
    fn chart_json_is_tagged_by_state() {
        let chart = normalize(&records()[..2]);
        let value = serde_json::to_value(HeadlessChart {
            name: "Emma",
            chart: &chart,
            meaning: "m",
        })
        .unwrap();

        assert_eq!(value["chart"]["state"], "bars");
        assert_eq!(value["chart"]["bars"][0]["height"], 180);
        assert_eq!(value["chart"]["bars"][0]["top_ten"], true);

        let empty = serde_json::to_value(RankChart::NoRankingData).unwrap();
        assert_eq!(empty["state"], "no_ranking_data");
    }

    #[tokio::test]
    async fn headless_name_request_skips_the_catalog() {
        let source = Arc::new(MemorySource::new(records()));
        let mut app = App::new(Box::new(SharedSource(source.clone())));

        run_headless(&mut app, Some("Emma"), true).await.unwrap();

        assert_eq!(source.requests(), ["Emma"]);
    }

    #[tokio::test]
    async fn headless_failure_returns_the_error_line() {
        let source = MemorySource::failing_catalog(FetchError::network("offline"));
        let mut app = App::new(Box::new(source));

        let error = run_headless(&mut app, None, false).await.unwrap_err();

        assert!(error
            .to_string()
            .starts_with("ATTENTION!! SOMETHING WENT WRONG"));
    }

    struct SharedSource(Arc<MemorySource>);

    #[async_trait::async_trait]
    impl RecordSource for SharedSource {
        async fn fetch_all(&self) -> Result<Vec<NameRecord>, FetchError> {
            self.0.fetch_all().await
        }

        async fn fetch_by_name(&self, name: &str) -> Result<Vec<NameRecord>, FetchError> {
            self.0.fetch_by_name(name).await
        }
    }
}
