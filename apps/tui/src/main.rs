use baby_names_tui::cli::CliArgs;
use baby_names_tui::config::{init_logging, AppConfig, LogTarget};
use baby_names_tui::source::SheetClient;
use baby_names_tui::{event, terminal, App};
use clap::Parser;
use color_eyre::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = AppConfig::from_env()?;

    let headless = args.headless || !is_terminal();
    let log_target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.log_file.clone())
    };
    init_logging(&config, &log_target)?;
    info!(api_url = %config.api_url, headless, "starting baby names explorer");

    let source = SheetClient::new(config.api_url.clone());
    let mut app = App::new(Box::new(source));

    if headless {
        return event::run_headless(&mut app, args.name.as_deref(), args.json).await;
    }

    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app).await;

    // Restore terminal even when the loop failed
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
