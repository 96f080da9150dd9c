use crate::catalog::NameCatalog;
use crate::chart::{normalize, RankChart};
use crate::error::FetchError;
use crate::record::NameRecord;

pub const PLACEHOLDER: &str = "Select a name...";
pub const NO_RANKING_DATA: &str = "This name has no ranking data.";
pub const NO_NAMES: &str = "No names available";
pub const MEANING_PREFIX: &str = "Origin/Meaning: ";
pub const MEANING_FALLBACK: &str = "(Nothing for you here! Whoops!)";
pub const ERROR_PREFIX: &str = "ATTENTION!! SOMETHING WENT WRONG: ";

/// An entry of the selector: the leading placeholder or a catalog name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Placeholder,
    Name(String),
}

/// The four display regions: selector, chart, meaning line and error line.
///
/// Front ends own one of these and redraw from it; every update goes through
/// the methods below.
#[derive(Debug, Clone, Default)]
pub struct NamesView {
    catalog: NameCatalog,
    selector_enabled: bool,
    chart: Option<RankChart>,
    meaning: String,
    error: String,
}

impl NamesView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills the selector and enables it.
    pub fn populate(&mut self, catalog: NameCatalog) {
        self.catalog = catalog;
        self.selector_enabled = true;
    }

    /// Draws the chart and meaning line for one name's records.
    pub fn show_details(&mut self, records: &[NameRecord]) {
        self.chart = Some(normalize(records));
        self.meaning = meaning_text(records);
    }

    /// Overwrites the error line. Chart and meaning are left as they were.
    pub fn show_error(&mut self, error: &FetchError) {
        self.error = error_text(error);
    }

    /// Empties chart, meaning and error, as when the placeholder is chosen.
    pub fn clear(&mut self) {
        self.chart = None;
        self.meaning.clear();
        self.error.clear();
    }

    /// Selector entry at `index`, counting the placeholder as entry 0.
    pub fn option_at(&self, index: usize) -> Option<Selection> {
        if index == 0 {
            return Some(Selection::Placeholder);
        }
        self.catalog
            .get(index - 1)
            .map(|name| Selection::Name(name.to_string()))
    }

    /// Number of selector entries including the placeholder.
    pub fn option_count(&self) -> usize {
        self.catalog.len() + 1
    }

    pub const fn catalog(&self) -> &NameCatalog {
        &self.catalog
    }

    pub const fn selector_enabled(&self) -> bool {
        self.selector_enabled
    }

    pub const fn chart(&self) -> Option<&RankChart> {
        self.chart.as_ref()
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn error(&self) -> &str {
        &self.error
    }
}

/// Meaning line built from the first record's `meaning` column.
pub fn meaning_text(records: &[NameRecord]) -> String {
    let meaning = records
        .first()
        .and_then(|record| record.meaning.as_deref())
        .filter(|meaning| !meaning.is_empty())
        .unwrap_or(MEANING_FALLBACK);
    format!("{MEANING_PREFIX}{meaning}")
}

pub fn error_text(error: &FetchError) -> String {
    format!("{ERROR_PREFIX}{error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emma() -> Vec<NameRecord> {
        vec![
            NameRecord::new("Emma", "2014", Some(2), Some("Universal")),
            NameRecord::new("Emma", "2015", Some(3), Some("ignored")),
        ]
    }

    #[test]
    fn selector_is_disabled_until_populated() {
        let mut view = NamesView::new();
        assert!(!view.selector_enabled());
        assert_eq!(view.option_count(), 1);
        assert_eq!(view.option_at(0), Some(Selection::Placeholder));

        view.populate(NameCatalog::from_records(&emma()));

        assert!(view.selector_enabled());
        assert_eq!(view.option_count(), 2);
        assert_eq!(view.option_at(1), Some(Selection::Name("Emma".to_string())));
        assert_eq!(view.option_at(2), None);
    }

    #[test]
    fn details_use_first_record_meaning() {
        let mut view = NamesView::new();
        view.show_details(&emma());

        assert_eq!(view.meaning(), "Origin/Meaning: Universal");
        assert_eq!(view.chart().map(|chart| chart.bars().len()), Some(10));
    }

    #[test]
    fn missing_meaning_falls_back() {
        assert_eq!(
            meaning_text(&[]),
            "Origin/Meaning: (Nothing for you here! Whoops!)"
        );

        let blank = [NameRecord::new("Ava", "2014", Some(1), Some(""))];
        assert_eq!(meaning_text(&blank), format!("{MEANING_PREFIX}{MEANING_FALLBACK}"));

        // Only the first row is consulted.
        let later = [
            NameRecord::new("Ava", "2014", Some(1), None),
            NameRecord::new("Ava", "2015", Some(1), Some("Bird")),
        ];
        assert_eq!(meaning_text(&later), format!("{MEANING_PREFIX}{MEANING_FALLBACK}"));
    }

    #[test]
    fn zero_rows_show_no_ranking_data() {
        let mut view = NamesView::new();
        view.show_details(&[]);

        assert_eq!(view.chart(), Some(&RankChart::NoRankingData));
        assert!(view.meaning().ends_with(MEANING_FALLBACK));
    }

    #[test]
    fn errors_overwrite_and_leave_chart_alone() {
        let mut view = NamesView::new();
        view.show_details(&emma());

        view.show_error(&FetchError::network("connection refused"));
        view.show_error(&FetchError::parse("expected an array"));

        assert_eq!(
            view.error(),
            "ATTENTION!! SOMETHING WENT WRONG: could not parse response: expected an array"
        );
        assert_eq!(view.meaning(), "Origin/Meaning: Universal");
        assert!(view.chart().is_some());
    }

    #[test]
    fn clear_resets_every_output_region() {
        let mut view = NamesView::new();
        view.populate(NameCatalog::from_records(&emma()));
        view.show_details(&emma());
        view.show_error(&FetchError::network("timeout"));

        view.clear();

        assert!(view.chart().is_none());
        assert!(view.meaning().is_empty());
        assert!(view.error().is_empty());
        assert_eq!(view.catalog().len(), 1);
    }
}
