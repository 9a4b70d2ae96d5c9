//! Beacon node HTTP API source.

use reqwest::blocking::Client;
use tracing::debug;

use super::PeerSource;
use crate::error::FetchError;

/// Path of the beacon API peer list endpoint.
pub const PEERS_PATH: &str = "/eth/v1/node/peers";

/// Fetches the peer list with a blocking HTTP GET.
///
/// Uses the client's default timeout; no retries.
pub struct HttpPeerSource {
    client: Client,
    endpoint: String,
    url: String,
}

impl HttpPeerSource {
    /// Creates a source for the node at `endpoint` (e.g. `http://127.0.0.1:3500`).
    pub fn new(endpoint: &str) -> Result<Self, FetchError> {
        let client = Client::builder().build().map_err(FetchError::Client)?;
        let endpoint = endpoint.trim_end_matches('/').to_string();
        let url = format!("{}{}", endpoint, PEERS_PATH);
        Ok(Self {
            client,
            endpoint,
            url,
        })
    }

    /// Full URL queried each cycle.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PeerSource for HttpPeerSource {
    fn fetch(&mut self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|source| FetchError::Body {
            url: self.url.clone(),
            source,
        })?;
        debug!(bytes = body.len(), "fetched peer list");
        Ok(body)
    }

    fn describe(&self) -> &str {
        &self.endpoint
    }
}
