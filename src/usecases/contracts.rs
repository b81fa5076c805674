use std::time::Duration;

use anyhow::Result;

use crate::domain::{events::AppEvent, navigation::SplashEntry, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    /// Called once before the first event is handled.
    fn start(&mut self) -> Result<()>;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Delivers `AppEvent::SplashElapsed(entry)` once `delay` has passed, unless
/// cancelled first.
pub trait SplashScheduler {
    fn schedule(&mut self, entry: SplashEntry, delay: Duration) -> Result<()>;
    fn cancel(&mut self);
}
