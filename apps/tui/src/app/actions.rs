use baby_names_core::{FetchError, NameCatalog, NameRecord};
use tracing::{info, warn};

use crate::source::RecordSource;

/// Work the event loop runs between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Catalog,
    Details(String),
}

impl Request {
    pub fn loading_label(&self) -> String {
        match self {
            Self::Catalog => "Loading names...".to_string(),
            Self::Details(name) => format!("Loading rankings for {name}..."),
        }
    }
}

/// Result of one `Request`, folded into the view by `App::apply_outcome`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Catalog(Result<NameCatalog, FetchError>),
    Details(String, Result<Vec<NameRecord>, FetchError>),
}

/// The app's side of the data source adapter.
pub struct AppActions {
    source: Box<dyn RecordSource>,
}

impl AppActions {
    pub fn new(source: Box<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Runs `request` against the source. Only borrows the actions, so the
    /// rest of the app can be redrawn while this is awaited.
    pub async fn perform(&self, request: &Request) -> Outcome {
        match request {
            Request::Catalog => Outcome::Catalog(self.fetch_catalog().await),
            Request::Details(name) => {
                Outcome::Details(name.clone(), self.fetch_details(name).await)
            }
        }
    }

    pub async fn fetch_catalog(&self) -> Result<NameCatalog, FetchError> {
        let records = self.source.fetch_all().await.inspect_err(|error| {
            warn!(%error, "catalog request failed");
        })?;

        let catalog = NameCatalog::from_records(&records);
        info!(rows = records.len(), names = catalog.len(), "catalog built");
        Ok(catalog)
    }

    pub async fn fetch_details(&self, name: &str) -> Result<Vec<NameRecord>, FetchError> {
        self.source.fetch_by_name(name).await.inspect_err(|error| {
            warn!(%error, name, "detail request failed");
        })
    }
}

impl std::fmt::Debug for AppActions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppActions").finish_non_exhaustive()
    }
}
