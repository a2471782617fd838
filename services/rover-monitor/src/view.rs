//! Monitor view: unobtrusive fixed-period polling

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use rover_core::render::render;
use rover_core::screen::CycleSequence;
use rover_core::store::RecordStore;
use rover_core::{Screen, ScreenHandle};

use crate::config::Config;

/// Status text when the store holds no records
pub const NO_RECORDS: &str = "Sin registros";
/// Status text after a failed poll; the table keeps its last contents
pub const CONNECTION_ERROR: &str = "Error de conexión";

/// Polls the store on a fixed clock and renders the newest records.
///
/// Every tick spawns its own read cycle, so a slow response never delays the
/// next fetch. Cycles are numbered and a late answer to an older cycle is
/// dropped instead of overwriting a newer one.
pub struct MonitorView {
    store: Arc<dyn RecordStore>,
    screen: ScreenHandle,
    history_size: usize,
    interval: Duration,
    sequence: CycleSequence,
    cancel: CancellationToken,
    tasks: TaskTracker,
}

impl std::fmt::Debug for MonitorView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorView")
            .field("history_size", &self.history_size)
            .field("interval", &self.interval)
            .finish()
    }
}

impl MonitorView {
    pub fn new(config: &Config, store: Arc<dyn RecordStore>) -> Arc<Self> {
        Arc::new(Self {
            store,
            screen: ScreenHandle::new(Screen::new()),
            history_size: config.history_size,
            interval: config.polling_interval(),
            sequence: CycleSequence::default(),
            cancel: CancellationToken::new(),
            tasks: TaskTracker::new(),
        })
    }

    pub fn screen(&self) -> &ScreenHandle {
        &self.screen
    }

    /// Start polling. The first cycle runs immediately.
    pub fn start(self: &Arc<Self>) {
        tracing::info!("Monitor polling every {:?}", self.interval);
        let view = Arc::clone(self);
        self.tasks.spawn(async move { view.poll_loop().await });
    }

    /// Stop the clock, cancel in-flight cycles, and wait for them to finish
    pub async fn stop(&self) {
        self.cancel.cancel();
        self.tasks.close();
        self.tasks.wait().await;
        tracing::info!("Monitor stopped");
    }

    async fn poll_loop(self: Arc<Self>) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let view = Arc::clone(&self);
                    self.tasks.spawn(async move { view.refresh().await });
                }
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Polling loop cancelled");
                    break;
                }
            }
        }
    }

    /// One read-and-render cycle
    pub async fn refresh(&self) {
        let seq = self.sequence.next();

        let result = tokio::select! {
            result = self.store.list_records() => result,
            _ = self.cancel.cancelled() => {
                tracing::debug!("Read cycle #{} cancelled", seq);
                return;
            }
        };

        match result {
            Ok(records) => {
                let rendered = render(records, self.history_size);
                self.screen.update_if_newer(seq, |s| {
                    s.set_status_if_changed(rendered.status.as_deref().unwrap_or(NO_RECORDS));
                    s.rows = rendered.rows;
                });
            }
            Err(e) => {
                tracing::warn!("Polling failed: {}", e);
                self.screen.update_if_newer(seq, |s| {
                    s.set_status_if_changed(CONNECTION_ERROR);
                });
            }
        }
    }
}
