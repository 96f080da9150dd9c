use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::Duration;
use tracing::{debug, info};

use crate::app::{handle_input, App};
use crate::ui;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);
const THROBBER_TICK: Duration = Duration::from_millis(100);

/// Run the main application event loop
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    info!("event loop started");

    while app.running {
        app.update();
        draw(terminal, app)?;

        if app.pending.is_some() {
            drive_request(terminal, app).await?;
            continue;
        }

        if !matches!(event::poll(EVENT_POLL_TIMEOUT), Ok(true)) {
            continue;
        }

        match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                handle_input(app, key.code);
            }
            Ok(Event::Resize(_, _)) => {
                // Next iteration redraws at the new size
            }
            Ok(_) | Err(_) => {
                // Ignore non-key events
            }
        }
    }

    info!("event loop finished");
    Ok(())
}

/// Awaits the pending request, redrawing every `THROBBER_TICK` so the
/// loading indicator spins. Keys are not read until it completes.
///
/// Returns the number of frames drawn while waiting.
pub async fn drive_request<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<usize> {
    let Some(request) = app.pending.clone() else {
        return Ok(0);
    };
    debug!(?request, "running request");

    let mut frames = 0;
    let outcome = {
        let fetch = app.actions.perform(&request);
        tokio::pin!(fetch);

        loop {
            tokio::select! {
                outcome = &mut fetch => break outcome,
                () = tokio::time::sleep(THROBBER_TICK) => {
                    app.throbber_state.calc_next();
                    draw(terminal, app)?;
                    frames += 1;
                }
            }
        }
    };

    debug!(frames, "request finished");
    app.apply_outcome(outcome);
    Ok(frames)
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    terminal
        .draw(|f| ui::ui(app, f))
        .map(|_| ())
        .map_err(|e| eyre!("Terminal draw error: {e}"))
}
