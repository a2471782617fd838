//! BDD test world for the rover control panel

use std::sync::Arc;

use bdd_infra::FakeRecordStore;
use cucumber::World;
use rover_control::{Config, ControlView, PressOutcome};
use rover_core::io::{HttpClient, ReqwestHttpClient};
use rover_core::public_ip::IpifyLookup;
use rover_core::store::HttpRecordStore;
use rover_core::{PublicIpConfig, StoreConfig};

#[derive(Debug, Default, World)]
pub struct ControlWorld {
    pub store: Option<FakeRecordStore>,
    pub view: Option<Arc<ControlView>>,
    pub last_outcome: Option<PressOutcome>,
}

impl ControlWorld {
    pub fn store(&self) -> &FakeRecordStore {
        self.store.as_ref().expect("record store not started")
    }

    pub fn view(&self) -> &ControlView {
        self.view.as_ref().expect("control panel not started")
    }

    /// Build a control view wired to the fake store over real HTTP
    pub fn build_view(&mut self) -> Arc<ControlView> {
        let store = self.store();
        let config = Config {
            store: StoreConfig {
                base_url: store.records_url(),
            },
            public_ip: PublicIpConfig {
                url: store.ip_url(),
                timeout_ms: 2000,
            },
            ..Config::default()
        };

        let http: Arc<dyn HttpClient> = Arc::new(ReqwestHttpClient::default());
        let records = Arc::new(HttpRecordStore::new(&config.store, Arc::clone(&http)));
        let ip = Arc::new(IpifyLookup::new(&config.public_ip, http));
        let view = Arc::new(ControlView::new(&config, records, ip).expect("valid config"));
        self.view = Some(Arc::clone(&view));
        view
    }
}
