use anyhow::Result;

use crate::usecases::{
    context::AppContext,
    contracts::{AppEventSource, ShellOrchestrator},
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        splash_delay_ms = context.config.splash.delay_ms,
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    orchestrator.start()?;

    while orchestrator.state().is_running() {
        terminal.draw(|frame| view::render(frame, orchestrator.state()))?;
        pump_event(event_source, orchestrator)?;
    }

    tracing::info!("TUI shell stopped");
    Ok(())
}

/// Feeds at most one event from the source to the orchestrator.
/// Returns whether an event was delivered.
fn pump_event(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<bool> {
    match event_source.next_event()? {
        Some(event) => {
            orchestrator.handle_event(event)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
