use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::AbortHandle;
use tokio_stream::wrappers::IntervalStream;

use crate::app::Msg;

/// Time between automatic draws.
pub const CALL_INTERVAL: Duration = Duration::from_secs(2);

/// The auto-mode timer: an owned, abortable task that feeds
/// [`Msg::AutoTick`] into the message channel every [`CALL_INTERVAL`].
///
/// The runtime reconciles it against `Game::auto_calling()` after every
/// update, the same diff-start-stop discipline the subscription model uses:
/// the task exists exactly while auto calling should be happening, so a
/// timer belonging to a previous game session can never fire. The first
/// tick comes one full interval after activation.
pub struct PeriodicCaller {
    task: Option<AbortHandle>,
}

impl PeriodicCaller {
    pub fn new() -> Self {
        Self { task: None }
    }

    pub fn running(&self) -> bool {
        self.task.is_some()
    }

    /// Start or stop the timer task to match `should_run`. A no-op when
    /// already in the requested state.
    pub fn reconcile(&mut self, should_run: bool, tx: &UnboundedSender<Msg>) {
        if should_run && self.task.is_none() {
            let tx = tx.clone();
            let handle = tokio::spawn(async move {
                let first = tokio::time::Instant::now() + CALL_INTERVAL;
                let mut ticks =
                    IntervalStream::new(tokio::time::interval_at(first, CALL_INTERVAL));
                while ticks.next().await.is_some() {
                    if tx.send(Msg::AutoTick).is_err() {
                        break;
                    }
                }
            });
            self.task = Some(handle.abort_handle());
        } else if !should_run {
            self.shutdown();
        }
    }

    /// Abort the timer task if one is running.
    pub fn shutdown(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Default for PeriodicCaller {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for PeriodicCaller {
    fn drop(&mut self) {
        self.shutdown();
    }
}
