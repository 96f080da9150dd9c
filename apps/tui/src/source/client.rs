use async_trait::async_trait;
use baby_names_core::endpoint::NAME_SEGMENT;
use baby_names_core::{parse_records, FetchError, NameRecord};
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use super::RecordSource;

/// `RecordSource` backed by the SheetBest HTTP API.
#[derive(Debug, Clone)]
pub struct SheetClient {
    base_url: Url,
    client: Client,
}

impl SheetClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// `{base}/name/{name}`, with the name encoded as a single path segment.
    pub fn name_url(&self, name: &str) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| FetchError::network(format!("cannot build a URL from {}", self.base_url)))?
            .pop_if_empty()
            .push(NAME_SEGMENT)
            .push(name);
        Ok(url)
    }

    async fn get_records(&self, url: Url) -> Result<Vec<NameRecord>, FetchError> {
        debug!(%url, "requesting rows");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "sheet request rejected");
            return Err(FetchError::network(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let records = parse_records(&body)?;
        info!(%url, rows = records.len(), "fetched rows");
        Ok(records)
    }
}

#[async_trait]
impl RecordSource for SheetClient {
    async fn fetch_all(&self) -> Result<Vec<NameRecord>, FetchError> {
        self.get_records(self.base_url.clone()).await
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Vec<NameRecord>, FetchError> {
        let url = self.name_url(name)?;
        self.get_records(url).await
    }
}
