//! Rover Monitor - passive status display
//!
//! Polls the record store on a fixed clock and shows the rover's latest
//! status with the ten most recent records.

pub mod config;
pub mod view;

pub use config::Config;
pub use view::MonitorView;

use std::sync::Arc;

use rover_core::io::{HttpClient, ReqwestHttpClient};
use rover_core::painter::{run_painter, TerminalPainter};
use rover_core::store::HttpRecordStore;
use tokio_util::sync::CancellationToken;

/// Run the monitor until ctrl-c
pub async fn run(config: Config) -> rover_core::Result<()> {
    config.validate()?;

    let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::default());
    let store = Arc::new(HttpRecordStore::new(&config.store, http));
    let view = MonitorView::new(&config, store);
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            return;
        }
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let painter = tokio::spawn(run_painter(
        view.screen().clone(),
        TerminalPainter::new("Monitor"),
        cancel.clone(),
    ));

    view.start();
    cancel.cancelled().await;

    view.stop().await;
    painter.await.ok();

    Ok(())
}
