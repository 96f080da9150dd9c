/// Sheet holding the 2014-2023 name rankings.
pub const DEFAULT_API_URL: &str =
    "https://api.sheetbest.com/sheets/c1e0ead6-6df0-49f7-ace0-ec90562a8c3f";

/// Path segment that introduces the name filter: `{base}/name/{name}`.
pub const NAME_SEGMENT: &str = "name";

/// Filtered endpoint for an already percent-encoded name.
pub fn name_endpoint(base: &str, encoded_name: &str) -> String {
    format!(
        "{}/{NAME_SEGMENT}/{encoded_name}",
        base.trim_end_matches('/')
    )
}
