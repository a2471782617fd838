//! In-memory model of the rendered surface
//!
//! Views write into a [`Screen`] through a [`ScreenHandle`]; a painter task
//! watches the handle's revision counter and redraws the terminal.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::watch;

use crate::command::Command;
use crate::render::TableRow;

/// Everything a view can show
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub status: String,
    pub status_visible: bool,
    pub rows: Vec<TableRow>,
    pub loading: bool,
    /// Command buttons, empty for views without controls
    pub buttons: Vec<Command>,
    pub buttons_enabled: bool,
    /// Number of times the status text has been assigned
    pub status_writes: u64,
    /// Sequence number of the last read cycle applied
    pub applied_seq: u64,
    busy_depth: u32,
}

impl Screen {
    /// A screen with no controls
    pub fn new() -> Self {
        Self {
            status_visible: true,
            ..Self::default()
        }
    }

    /// A screen with one enabled button per command
    pub fn with_buttons(buttons: impl IntoIterator<Item = Command>) -> Self {
        Self {
            buttons: buttons.into_iter().collect(),
            buttons_enabled: true,
            ..Self::new()
        }
    }

    pub fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
        self.status_writes += 1;
    }

    /// Assign the status text only when it differs, returning whether it did
    pub fn set_status_if_changed(&mut self, text: &str) -> bool {
        if self.status == text {
            return false;
        }
        self.set_status(text);
        true
    }

    /// Show the loader, hide the status, disable every button
    pub fn begin_busy(&mut self) {
        self.busy_depth += 1;
        self.loading = true;
        self.status_visible = false;
        self.buttons_enabled = false;
    }

    /// Undo one `begin_busy`; the surface goes back to idle on the last one
    pub fn end_busy(&mut self) {
        self.busy_depth = self.busy_depth.saturating_sub(1);
        if self.busy_depth == 0 {
            self.loading = false;
            self.status_visible = true;
            self.buttons_enabled = !self.buttons.is_empty();
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy_depth > 0
    }
}

/// Shared handle to a screen, publishing a revision after every change
#[derive(Debug, Clone)]
pub struct ScreenHandle {
    inner: Arc<RwLock<Screen>>,
    revision: Arc<watch::Sender<u64>>,
}

impl ScreenHandle {
    pub fn new(screen: Screen) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(screen)),
            revision: Arc::new(revision),
        }
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> Screen {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut Screen) -> R) -> R {
        let result = {
            let mut screen = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut screen)
        };
        self.revision.send_modify(|r| *r += 1);
        result
    }

    /// Apply a read cycle's result only if no later cycle has been applied.
    /// Returns false when the result was stale and dropped.
    pub fn update_if_newer(&self, seq: u64, f: impl FnOnce(&mut Screen)) -> bool {
        let applied = {
            let mut screen = self.inner.write().unwrap_or_else(PoisonError::into_inner);
            if seq <= screen.applied_seq {
                false
            } else {
                screen.applied_seq = seq;
                f(&mut screen);
                true
            }
        };
        if applied {
            self.revision.send_modify(|r| *r += 1);
        } else {
            tracing::debug!("Dropping stale read cycle #{}", seq);
        }
        applied
    }

    /// Receiver that changes whenever the screen does
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

/// Hands out read-cycle sequence numbers, starting at 1
#[derive(Debug, Default)]
pub struct CycleSequence(AtomicU64);

impl CycleSequence {
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}
