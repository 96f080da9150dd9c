// Data source adapter: the two read-only queries against the names sheet.

mod client;
#[cfg(test)]
pub mod memory;

pub use client::SheetClient;

use async_trait::async_trait;
use baby_names_core::{FetchError, NameRecord};

/// Read-only access to the names sheet.
///
/// Each call is one request with no retry; the first failure is returned
/// to the caller as-is.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Every row of the sheet
    async fn fetch_all(&self) -> Result<Vec<NameRecord>, FetchError>;

    /// Rows whose `name` column equals `name`
    async fn fetch_by_name(&self, name: &str) -> Result<Vec<NameRecord>, FetchError>;
}
