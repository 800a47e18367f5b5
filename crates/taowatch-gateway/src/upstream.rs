//! HTTP client for the upstream statistics API.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use tracing::{debug, info};

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};

/// Default timeout for upstream requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the upstream subnet statistics API.
///
/// Holds the endpoint and credential for the process lifetime. Stateless
/// across calls: every fetch re-queries upstream, nothing is cached.
pub struct UpstreamClient {
    client: Client,
    upstream_url: String,
    auth_token: String,
}

impl UpstreamClient {
    /// Create a new upstream client from the gateway configuration.
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::HttpClient(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            upstream_url: config.upstream_url.clone(),
            auth_token: config.auth_token.clone(),
        })
    }

    /// Fetch the current subnet statistics payload.
    ///
    /// Returns the upstream body verbatim: the `data` array plus whatever
    /// passthrough fields the upstream includes. No schema validation or
    /// coercion happens here; that is the view model's concern.
    pub async fn fetch_subnets(&self) -> GatewayResult<serde_json::Value> {
        debug!("Fetching subnet statistics from upstream");

        let response = self
            .client
            .get(&self.upstream_url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, &self.auth_token)
            .send()
            .await
            .map_err(|e| GatewayError::HttpClient(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(format!("Failed to parse response: {e}")))?;

        info!(
            subnets = body
                .get("data")
                .and_then(serde_json::Value::as_array)
                .map_or(0, Vec::len),
            "Fetched subnet statistics"
        );

        Ok(body)
    }
}
