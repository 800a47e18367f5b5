//! Data sources for the view model.

use std::time::Duration;

use serde::Deserialize;
use taowatch_core::SubnetRecord;
use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// Default timeout for gateway requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the view model gets its records.
///
/// The gateway's HTTP surface is the production implementation; tests
/// inject scripted sources.
#[allow(async_fn_in_trait)]
pub trait SubnetSource {
    /// Fetch the full record batch from the backing service.
    async fn fetch_subnets(&self) -> SourceResult<Vec<SubnetRecord>>;
}

/// Gateway response envelope. Only the `data` array is read; other
/// top-level passthrough fields are ignored.
#[derive(Debug, Deserialize)]
struct SubnetsEnvelope {
    #[serde(default)]
    data: Vec<SubnetRecord>,
}

/// `SubnetSource` over the gateway's `GET /api/subnets` surface.
pub struct HttpSubnetSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSubnetSource {
    /// Create a source against a gateway base URL (e.g.
    /// `http://localhost:5000`).
    pub fn new(base_url: impl Into<String>) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Http(format!("Failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }
}

impl SubnetSource for HttpSubnetSource {
    async fn fetch_subnets(&self) -> SourceResult<Vec<SubnetRecord>> {
        let url = format!("{}/api/subnets", self.base_url);
        debug!(url = %url, "Fetching subnet data");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Http(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let envelope: SubnetsEnvelope = response
            .json()
            .await
            .map_err(|e| SourceError::Decode(format!("Failed to parse response: {e}")))?;

        Ok(envelope.data)
    }
}
