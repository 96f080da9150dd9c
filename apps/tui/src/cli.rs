use clap::{CommandFactory, Parser};

#[derive(Debug, Parser)]
#[command(name = "baby-names", version, about = "Baby name rank explorer")]
pub struct CliArgs {
    /// Print results to stdout instead of starting the UI
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Chart this name in headless mode instead of listing the catalog
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the sheet API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the log file used while the UI is running
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var("BABY_NAMES_API_URL", url);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var("BABY_NAMES_LOG_FILE", path);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_headless_chart_request() {
        let args = CliArgs::parse_from(["baby-names", "--headless", "--json", "--name", "Emma"]);

        assert!(args.headless);
        assert!(args.json);
        assert_eq!(args.name.as_deref(), Some("Emma"));
        assert!(args.api_url.is_none());
    }

    #[test]
    fn help_lists_options() {
        let help = CliArgs::help_text();
        assert!(help.contains("--api-url"));
        assert!(help.contains("--headless"));
    }
}
