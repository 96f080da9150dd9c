use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use baby_names_core::{FetchError, NameRecord};

use super::RecordSource;

/// In-memory source for driving the app without a network.
#[derive(Debug, Default)]
pub struct MemorySource {
    records: Vec<NameRecord>,
    failures: HashMap<String, FetchError>,
    catalog_failure: Option<FetchError>,
    requests: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new(records: Vec<NameRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn failing_catalog(error: FetchError) -> Self {
        Self {
            catalog_failure: Some(error),
            ..Self::default()
        }
    }

    pub fn fail_name(mut self, name: &str, error: FetchError) -> Self {
        self.failures.insert(name.to_string(), error);
        self
    }

    /// Names passed to `fetch_by_name`, in call order; `*` marks `fetch_all`.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map(|log| log.clone()).unwrap_or_default()
    }

    fn log(&self, entry: &str) {
        if let Ok(mut log) = self.requests.lock() {
            log.push(entry.to_string());
        }
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    async fn fetch_all(&self) -> Result<Vec<NameRecord>, FetchError> {
        self.log("*");
        match &self.catalog_failure {
            Some(error) => Err(error.clone()),
            None => Ok(self.records.clone()),
        }
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Vec<NameRecord>, FetchError> {
        self.log(name);
        if let Some(error) = self.failures.get(name) {
            return Err(error.clone());
        }
        Ok(self
            .records
            .iter()
            .filter(|record| record.name == name)
            .cloned()
            .collect())
    }
}
