//! Splash-screen timer.

use std::{sync::mpsc::Sender, time::Duration};

use anyhow::Result;
use tokio::{runtime::Runtime, task::JoinHandle};

use crate::{
    domain::{events::AppEvent, navigation::SplashEntry},
    infra::error::AppError,
};

use super::contracts::SplashScheduler;

/// Runs splash delays as tokio tasks and posts the elapsed event back to the
/// UI loop over a channel.
///
/// At most one delay is pending. Cancelling or dropping the scheduler aborts
/// it, and a firing whose receiver is gone is discarded.
pub struct TokioSplashScheduler {
    runtime: Runtime,
    events: Sender<AppEvent>,
    pending: Option<JoinHandle<()>>,
}

impl TokioSplashScheduler {
    pub fn new(events: Sender<AppEvent>) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("swiftchat-timer")
            .enable_time()
            .build()
            .map_err(AppError::RuntimeInit)?;

        Ok(Self {
            runtime,
            events,
            pending: None,
        })
    }
}

impl SplashScheduler for TokioSplashScheduler {
    fn schedule(&mut self, entry: SplashEntry, delay: Duration) -> Result<()> {
        self.cancel();

        let events = self.events.clone();
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if events.send(AppEvent::SplashElapsed(entry)).is_err() {
                tracing::trace!(
                    entry = entry.value(),
                    "splash elapsed after the UI loop went away"
                );
            }
        });

        tracing::debug!(
            entry = entry.value(),
            delay_ms = delay.as_millis() as u64,
            "splash timer scheduled"
        );
        self.pending = Some(handle);
        Ok(())
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for TokioSplashScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Records schedule requests instead of running timers.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ManualSplashScheduler {
    pub scheduled: Vec<(SplashEntry, Duration)>,
    pub cancellations: usize,
}

#[cfg(test)]
impl SplashScheduler for ManualSplashScheduler {
    fn schedule(&mut self, entry: SplashEntry, delay: Duration) -> Result<()> {
        self.scheduled.push((entry, delay));
        Ok(())
    }

    fn cancel(&mut self) {
        self.cancellations += 1;
    }
}
