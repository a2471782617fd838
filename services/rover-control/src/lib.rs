//! Rover Control - terminal control panel
//!
//! Shows one numbered button per rover command. Picking one writes a record
//! to the store and refreshes the five most recent records.

pub mod busy;
pub mod config;
pub mod input;
pub mod view;

pub use config::Config;
pub use view::{ControlState, ControlView, PressOutcome};

use std::sync::Arc;

use rover_core::io::{HttpClient, ReqwestHttpClient};
use rover_core::painter::{run_painter, TerminalPainter};
use rover_core::public_ip::IpifyLookup;
use rover_core::store::HttpRecordStore;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::input::{parse_selection, spawn_stdin_reader, Selection};

/// Run the control panel until the user quits, stdin closes, or ctrl-c
pub async fn run(config: Config) -> rover_core::Result<()> {
    config.validate()?;

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::default());
    let store = Arc::new(HttpRecordStore::new(&config.store, Arc::clone(&http)));
    let ip = Arc::new(IpifyLookup::new(&config.public_ip, Arc::clone(&http)));
    let view = Arc::new(ControlView::new(&config, store, ip)?);

    let cancel = CancellationToken::new();
    let tasks = TaskTracker::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    tasks.spawn(run_painter(
        view.screen().clone(),
        TerminalPainter::new("Control remoto"),
        cancel.clone(),
    ));

    {
        let view = Arc::clone(&view);
        tasks.spawn(async move { view.start().await });
    }

    let mut lines = spawn_stdin_reader();
    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            _ = cancel.cancelled() => break,
        };
        let Some(line) = line else {
            tracing::debug!("stdin closed");
            break;
        };

        match parse_selection(&line) {
            Some(Selection::Press(command)) => {
                let view = Arc::clone(&view);
                tasks.spawn(async move {
                    let outcome = view.press(command).await;
                    tracing::debug!("Press '{}' -> {:?}", command, outcome);
                });
            }
            Some(Selection::Refresh) => {
                let view = Arc::clone(&view);
                tasks.spawn(async move { view.refresh().await });
            }
            Some(Selection::Quit) => break,
            None => tracing::debug!("Ignoring input {:?}", line),
        }
    }

    view.stop();
    cancel.cancel();
    tasks.close();
    tasks.wait().await;
    tracing::info!("Control panel stopped");

    Ok(())
}
