//! Record store client

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StoreConfig;
use crate::io::{HttpClient, HttpResponse};
use crate::record::{NewRecord, Record};

/// Read and write access to the remote record store
#[async_trait]
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait RecordStore: Send + Sync {
    /// Fetch every record the store holds, in whatever order it returns them
    async fn list_records(&self) -> crate::Result<Vec<Record>>;

    /// Create a record and return it with its store-assigned id
    async fn create_record(&self, record: &NewRecord) -> crate::Result<Record>;
}

/// Record store reached over HTTP. No retries and no caching.
pub struct HttpRecordStore {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for HttpRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpRecordStore")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HttpRecordStore {
    pub fn new(config: &StoreConfig, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created HttpRecordStore at {}", config.base_url);
        Self {
            base_url: config.base_url.clone(),
            http,
        }
    }
}

fn ensure_success(response: HttpResponse) -> crate::Result<HttpResponse> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(crate::RoverError::Protocol {
            status: response.status,
            body: response.body,
        })
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn list_records(&self) -> crate::Result<Vec<Record>> {
        let response = ensure_success(self.http.get(&self.base_url).await?)?;
        let records: Vec<Record> = serde_json::from_str(&response.body)?;
        tracing::debug!("Fetched {} records", records.len());
        Ok(records)
    }

    async fn create_record(&self, record: &NewRecord) -> crate::Result<Record> {
        let body = serde_json::to_string(record)?;
        let response = ensure_success(self.http.post_json(&self.base_url, &body).await?)?;
        let created: Record = serde_json::from_str(&response.body)?;
        tracing::debug!("Store assigned id {} to '{}'", created.id, created.status);
        Ok(created)
    }
}
