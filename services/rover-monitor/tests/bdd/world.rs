//! BDD test world for the rover monitor

use std::sync::Arc;
use std::time::Duration;

use bdd_infra::FakeRecordStore;
use cucumber::World;
use rover_core::io::{HttpClient, ReqwestHttpClient};
use rover_core::store::HttpRecordStore;
use rover_core::{Screen, StoreConfig};
use rover_monitor::{Config, MonitorView};

/// Upper bound for any wait on the polling clock
const WAIT_LIMIT: Duration = Duration::from_secs(3);

#[derive(Debug, Default, World)]
pub struct MonitorWorld {
    pub store: Option<FakeRecordStore>,
    pub view: Option<Arc<MonitorView>>,
}

impl MonitorWorld {
    pub fn store(&self) -> &FakeRecordStore {
        self.store.as_ref().expect("record store not started")
    }

    pub fn view(&self) -> &Arc<MonitorView> {
        self.view.as_ref().expect("monitor not started")
    }

    pub fn start_view(&mut self, interval_ms: u64) {
        let config = Config {
            store: StoreConfig {
                base_url: self.store().records_url(),
            },
            polling_interval_ms: interval_ms,
            ..Config::default()
        };
        let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::default());
        let records = Arc::new(HttpRecordStore::new(&config.store, http));
        let view = MonitorView::new(&config, records);
        view.start();
        self.view = Some(view);
    }

    /// Wait until the screen satisfies `check`, panicking after the limit
    pub async fn wait_for_screen(&self, what: &str, check: impl Fn(&Screen) -> bool) {
        let deadline = tokio::time::Instant::now() + WAIT_LIMIT;
        loop {
            let screen = self.view().screen().snapshot();
            if check(&screen) {
                return;
            }
            if tokio::time::Instant::now() >= deadline {
                panic!("timed out waiting for {what}; screen was {screen:?}");
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }

    /// Wait until the store has served at least `count` reads
    pub async fn wait_for_reads(&self, count: usize) {
        let deadline = tokio::time::Instant::now() + WAIT_LIMIT;
        while self.store().read_count() < count {
            if tokio::time::Instant::now() >= deadline {
                panic!(
                    "timed out waiting for {count} reads; saw {}",
                    self.store().read_count()
                );
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }
}

impl Drop for MonitorWorld {
    fn drop(&mut self) {
        if let Some(view) = self.view.take() {
            tokio::spawn(async move { view.stop().await });
        }
    }
}
