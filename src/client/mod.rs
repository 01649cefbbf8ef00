//! Read-only client for the mirror node REST API.
//!
//! One [`MirrorClient`] serves all entity kinds; the per-entity lookup
//! methods live in their own files (`accounts`, `contracts`, `tokens`,
//! `topics`, `transactions`, `blocks`) as `impl` extensions.
//!
//! Every lookup maps the service's "resource absent" answers (404, and 400
//! for identifiers the service rejects as malformed) to `None`/empty rather
//! than an error, so that speculative queries stay silent. Anything else
//! non-2xx is a [`SearchError`].

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::{Network, SearchError};

mod accounts;
mod blocks;
mod contracts;
mod tokens;
mod topics;
mod transactions;

/// Default timeout for a single lookup.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client bound to one mirror node endpoint.
#[derive(Debug, Clone)]
pub struct MirrorClient {
    base_url: String,
    network: Network,
    client: Client,
}

impl MirrorClient {
    /// Creates a client for a network's public mirror node.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::ClientInit` if the HTTP client fails to
    /// initialize (e.g. TLS backend unavailable).
    pub fn new(network: Network) -> Result<Self, SearchError> {
        Self::with_base_url(network, network.mirror_url())
    }

    /// Creates a client against a custom base URL (self-hosted mirror nodes,
    /// test servers). The network still determines checksum validation.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::ClientInit` if the HTTP client fails to
    /// initialize.
    pub fn with_base_url(network: Network, base_url: impl Into<String>) -> Result<Self, SearchError> {
        let client = Client::builder()
            .pool_max_idle_per_host(4)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SearchError::client_init(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            network,
            client,
        })
    }

    /// The network this client targets.
    #[must_use]
    pub fn network(&self) -> Network {
        self.network
    }

    /// The mirror node base URL (without the `/api/v1` suffix).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn build_request(&self, path: &str) -> reqwest::RequestBuilder {
        self.client
            .get(format!("{}/api/v1/{}", self.base_url, path))
            .header("accept", "application/json")
    }

    /// Issue a GET and decode the body, mapping not-found answers to `None`.
    pub(crate) async fn get_optional<T: DeserializeOwned>(
        &self,
        entity: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<T>, SearchError> {
        let response = request.send().await?;
        let status = response.status();

        if status.as_u16() == 404 || status.as_u16() == 400 {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(SearchError::http(entity, status.as_u16()));
        }

        let value = response
            .json::<T>()
            .await
            .map_err(|e| SearchError::parse(format!("{entity} response: {e}")))?;
        Ok(Some(value))
    }
}
