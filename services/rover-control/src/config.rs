//! Configuration types for the control panel

use chrono::FixedOffset;
use rover_core::timestamp::{utc_offset, DEFAULT_UTC_OFFSET_MINUTES};
use rover_core::{PublicIpConfig, StoreConfig};
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub public_ip: PublicIpConfig,
    /// Written as `name` on every submitted record
    #[serde(default = "default_device_name")]
    pub device_name: String,
    #[serde(default = "default_history_size")]
    pub history_size: usize,
    /// Zone for submission timestamps, in minutes east of UTC
    #[serde(default = "default_utc_offset_minutes")]
    pub utc_offset_minutes: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            public_ip: PublicIpConfig::default(),
            device_name: default_device_name(),
            history_size: default_history_size(),
            utc_offset_minutes: default_utc_offset_minutes(),
        }
    }
}

impl Config {
    pub fn utc_offset(&self) -> rover_core::Result<FixedOffset> {
        utc_offset(self.utc_offset_minutes)
    }

    pub fn validate(&self) -> rover_core::Result<()> {
        self.store.validate()?;
        self.utc_offset()?;
        if self.history_size == 0 {
            return Err(rover_core::RoverError::Config(
                "history_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_device_name() -> String {
    "WebApp Client".to_string()
}

fn default_history_size() -> usize {
    5
}

fn default_utc_offset_minutes() -> i32 {
    DEFAULT_UTC_OFFSET_MINUTES
}
