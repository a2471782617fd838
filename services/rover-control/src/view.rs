//! Control view: command submission plus a short history

use std::sync::Arc;

use chrono::{FixedOffset, Utc};
use tokio_util::sync::CancellationToken;

use rover_core::public_ip::IpLookup;
use rover_core::render::{render, TableRow};
use rover_core::screen::CycleSequence;
use rover_core::store::RecordStore;
use rover_core::timestamp::format_timestamp;
use rover_core::{Command, NewRecord, Record, Screen, ScreenHandle};

use crate::busy::LoadingGuard;
use crate::config::Config;

/// Status text when the store holds no records
pub const NO_RECORDS: &str = "Sin registros";
/// Status text after a failed read
pub const READ_ERROR: &str = "Error";
/// Message in the single error row after a failed read
pub const LOAD_FAILED: &str = "No se pudieron cargar los datos.";

/// Whether the panel accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    Busy,
}

/// What happened to a button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    /// The store accepted the record and the history was refreshed
    Submitted(Record),
    /// The store rejected the record or could not be reached
    Failed,
    /// Buttons were disabled; nothing was sent
    Ignored,
    /// The view was stopped while the press was in flight
    Cancelled,
}

/// Owns the control panel's screen and drives both the read and write paths
pub struct ControlView {
    store: Arc<dyn RecordStore>,
    ip: Arc<dyn IpLookup>,
    screen: ScreenHandle,
    device_name: String,
    history_size: usize,
    zone: FixedOffset,
    sequence: CycleSequence,
    cancel: CancellationToken,
}

impl std::fmt::Debug for ControlView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlView")
            .field("device_name", &self.device_name)
            .field("history_size", &self.history_size)
            .field("zone", &self.zone)
            .finish()
    }
}

impl ControlView {
    pub fn new(
        config: &Config,
        store: Arc<dyn RecordStore>,
        ip: Arc<dyn IpLookup>,
    ) -> rover_core::Result<Self> {
        Ok(Self {
            store,
            ip,
            screen: ScreenHandle::new(Screen::with_buttons(Command::ALL)),
            device_name: config.device_name.clone(),
            history_size: config.history_size,
            zone: config.utc_offset()?,
            sequence: CycleSequence::default(),
            cancel: CancellationToken::new(),
        })
    }

    pub fn screen(&self) -> &ScreenHandle {
        &self.screen
    }

    pub fn state(&self) -> ControlState {
        if self.screen.snapshot().is_busy() {
            ControlState::Busy
        } else {
            ControlState::Idle
        }
    }

    /// Initial load
    pub async fn start(&self) {
        tracing::info!("Control view started");
        self.refresh().await;
    }

    /// Cancel whatever is in flight. The loader still clears.
    pub fn stop(&self) {
        tracing::info!("Control view stopping");
        self.cancel.cancel();
    }

    /// Read path: fetch, keep the newest records, render them
    pub async fn refresh(&self) {
        let _busy = LoadingGuard::acquire(&self.screen);
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
                tracing::debug!("Read cycle #{} rendered {} rows", seq, rendered.rows.len());
                self.screen.update_if_newer(seq, |s| {
                    s.set_status(rendered.status.as_deref().unwrap_or(NO_RECORDS));
                    s.rows = rendered.rows;
                });
            }
            Err(e) => {
                tracing::warn!("Failed to fetch records: {}", e);
                self.screen.update_if_newer(seq, |s| {
                    s.set_status(READ_ERROR);
                    s.rows = vec![TableRow::error(LOAD_FAILED)];
                });
            }
        }
    }

    /// Write path for one button
    pub async fn press(&self, command: Command) -> PressOutcome {
        let Some(_busy) = LoadingGuard::try_acquire(&self.screen) else {
            tracing::debug!("Ignoring '{}' while busy", command);
            return PressOutcome::Ignored;
        };

        let ip = tokio::select! {
            ip = self.ip.get_public_ip() => ip,
            _ = self.cancel.cancelled() => return PressOutcome::Cancelled,
        };
        let record = NewRecord {
            name: self.device_name.clone(),
            status: command,
            ip,
            date: format_timestamp(Utc::now(), self.zone),
        };

        tracing::info!("Submitting '{}' from {}", command, record.ip);
        let result = tokio::select! {
            result = self.store.create_record(&record) => result,
            _ = self.cancel.cancelled() => return PressOutcome::Cancelled,
        };

        match result {
            Ok(created) => {
                tracing::info!("Record {} stored", created.id);
                self.refresh().await;
                PressOutcome::Submitted(created)
            }
            Err(e) => {
                tracing::error!("Failed to submit '{}': {}", command, e);
                PressOutcome::Failed
            }
        }
    }
}
