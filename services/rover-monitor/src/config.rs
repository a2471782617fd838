//! Configuration types for the monitor

use std::time::Duration;

use rover_core::StoreConfig;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default = "default_polling_interval_ms")]
    pub polling_interval_ms: u64,
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            polling_interval_ms: default_polling_interval_ms(),
            history_size: default_history_size(),
        }
    }
}

impl Config {
    pub fn polling_interval(&self) -> Duration {
        Duration::from_millis(self.polling_interval_ms)
    }

    pub fn validate(&self) -> rover_core::Result<()> {
        self.store.validate()?;
        if self.polling_interval_ms == 0 {
            return Err(rover_core::RoverError::Config(
                "polling_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.history_size == 0 {
            return Err(rover_core::RoverError::Config(
                "history_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_polling_interval_ms() -> u64 {
    2000
}

fn default_history_size() -> usize {
    10
}
