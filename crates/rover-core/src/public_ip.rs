//! Best-effort public IP lookup

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::PublicIpConfig;
use crate::io::HttpClient;

/// Reported instead of an address whenever the lookup fails
pub const IP_UNAVAILABLE: &str = "No disponible";

#[derive(Debug, Deserialize)]
struct IpResponse {
    ip: String,
}

/// Resolves the caller's public address. Never fails: a broken lookup must
/// not block command submission.
#[async_trait]
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait IpLookup: Send + Sync {
    async fn get_public_ip(&self) -> String;
}

/// Lookup against an ipify-compatible echo service
pub struct IpifyLookup {
    url: String,
    timeout: Duration,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for IpifyLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpifyLookup")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl IpifyLookup {
    pub fn new(config: &PublicIpConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            url: config.url.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            http,
        }
    }

    async fn lookup(&self) -> crate::Result<String> {
        let response = self.http.get(&self.url).await?;
        if !response.is_success() {
            return Err(crate::RoverError::Protocol {
                status: response.status,
                body: response.body,
            });
        }
        let parsed: IpResponse = serde_json::from_str(&response.body)?;
        Ok(parsed.ip)
    }
}

#[async_trait]
impl IpLookup for IpifyLookup {
    async fn get_public_ip(&self) -> String {
        match tokio::time::timeout(self.timeout, self.lookup()).await {
            Ok(Ok(ip)) => {
                tracing::debug!("Public IP is {}", ip);
                ip
            }
            Ok(Err(e)) => {
                tracing::warn!("Public IP lookup failed: {}", e);
                IP_UNAVAILABLE.to_string()
            }
            Err(_) => {
                tracing::warn!("Public IP lookup timed out after {:?}", self.timeout);
                IP_UNAVAILABLE.to_string()
            }
        }
    }
}
