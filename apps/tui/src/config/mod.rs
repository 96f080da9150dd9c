// Runtime configuration for the baby names explorer.
// Values come from the environment (optionally via .env) after CLI overrides.

mod logging;

pub use logging::{init_logging, LogTarget};

use color_eyre::eyre::eyre;
use dotenv::dotenv;
use reqwest::Url;
use std::env;
use std::path::PathBuf;

pub use baby_names_core::endpoint::DEFAULT_API_URL;
pub const DEFAULT_LOG_FILE: &str = "baby-names.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base of the sheet API; the filtered endpoint is `{api_url}/name/{name}`.
    pub api_url: Url,
    pub log_file: PathBuf,
    pub debug: bool,
}

impl AppConfig {
    /// Loads `.env` if present, then reads the process environment
    pub fn from_env() -> color_eyre::eyre::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::eyre::Result<Self> {
        let raw_url = lookup("BABY_NAMES_API_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let api_url = Url::parse(raw_url.trim())
            .map_err(|e| eyre!("Invalid API URL '{raw_url}': {e}"))?;

        if api_url.cannot_be_a_base() {
            return Err(eyre!("API URL '{raw_url}' cannot take a path"));
        }

        let log_file = lookup("BABY_NAMES_LOG_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from);

        let debug = lookup("DEBUG").is_some_and(|value| !matches!(value.as_str(), "" | "0"));

        Ok(Self {
            api_url,
            log_file,
            debug,
        })
    }
}
