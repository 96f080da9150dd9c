use std::collections::BTreeSet;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::record::NameRecord;

/// Distinct selectable names, sorted byte-wise and case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCatalog {
    names: Vec<String>,
}

impl NameCatalog {
    /// Builds the catalog from the full record set. Rows without a name are skipped.
    pub fn from_records(records: &[NameRecord]) -> Self {
        let names = records
            .iter()
            .map(|record| record.name.as_str())
            .filter(|name| !name.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names fuzzy-matching `query`, in catalog order.
    pub fn filter(&self, query: &str) -> Vec<&str> {
        let query = query.trim();
        if query.is_empty() {
            return self.names.iter().map(String::as_str).collect();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        self.names
            .iter()
            .filter(|name| matcher.fuzzy_match(name, query).is_some())
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> NameRecord {
        NameRecord::new(name, "2014", Some(1), None)
    }

    #[test]
    fn dedupes_and_sorts_names() {
        let records = ["Olivia", "Emma", "Olivia", "Ava", "Emma"].map(record);

        let catalog = NameCatalog::from_records(&records);

        assert_eq!(catalog.names(), ["Ava", "Emma", "Olivia"]);
    }

    #[test]
    fn order_does_not_depend_on_input_order() {
        let forward = ["Liam", "Noah", "Amelia"].map(record);
        let backward = ["Amelia", "Noah", "Liam"].map(record);

        assert_eq!(
            NameCatalog::from_records(&forward),
            NameCatalog::from_records(&backward)
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        let records = ["emma", "Emma", "EMMA"].map(record);

        let catalog = NameCatalog::from_records(&records);

        assert_eq!(catalog.names(), ["EMMA", "Emma", "emma"]);
    }

    #[test]
    fn empty_input_gives_empty_catalog() {
        let catalog = NameCatalog::from_records(&[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(0), None);
    }

    #[test]
    fn blank_names_are_skipped() {
        let records = ["", "Mia"].map(record);
        assert_eq!(NameCatalog::from_records(&records).names(), ["Mia"]);
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let records = ["Amelia", "Emma", "Emmett", "Liam"].map(record);
        let catalog = NameCatalog::from_records(&records);

        assert_eq!(catalog.filter("emm"), ["Emma", "Emmett"]);
        assert_eq!(catalog.filter("  ").len(), 4);
        assert!(catalog.filter("zzz").is_empty());
    }
}
