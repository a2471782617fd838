//! Configuration shared by both front-ends

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the remote record store lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_url")]
    pub base_url: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_store_url(),
        }
    }
}

impl StoreConfig {
    /// Reject URLs reqwest could never send to
    pub fn validate(&self) -> crate::Result<()> {
        if self.base_url.starts_with("http://") || self.base_url.starts_with("https://") {
            Ok(())
        } else {
            Err(crate::RoverError::Config(format!(
                "Store URL must be http(s), got {:?}",
                self.base_url
            )))
        }
    }
}

/// Public IP echo service settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicIpConfig {
    #[serde(default = "default_ip_url")]
    pub url: String,
    #[serde(default = "default_ip_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for PublicIpConfig {
    fn default() -> Self {
        Self {
            url: default_ip_url(),
            timeout_ms: default_ip_timeout_ms(),
        }
    }
}

fn default_store_url() -> String {
    "https://68bb0df184055bce63f1062a.mockapi.io/api/v1/dispositivos_IoT".to_string()
}

fn default_ip_url() -> String {
    "https://api.ipify.org?format=json".to_string()
}

fn default_ip_timeout_ms() -> u64 {
    5000
}

/// Load a JSON configuration file into any of the front-end config types
pub fn load_config<T: DeserializeOwned>(path: &Path) -> crate::Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::RoverError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: T = serde_json::from_str(&content)?;
    Ok(config)
}
