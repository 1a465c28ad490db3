//! ntfy.sh HTTP relay client.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::domain::entities::Channel;
use crate::domain::errors::SendError;
use crate::domain::ports::RelayPort;

/// Default relay server.
pub const NTFY_SERVER: &str = "https://ntfy.sh";

const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

/// Relay client publishing over plain HTTP POST.
pub struct NtfyRelayClient {
    client: Client,
    base_url: String,
}

impl NtfyRelayClient {
    /// Creates a client against the public ntfy.sh server.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, SendError> {
        Self::with_base_url(NTFY_SERVER)
    }

    /// Creates a client against a custom server.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SendError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SendError::client(e.to_string()))?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { client, base_url })
    }

    fn classify_transport_error(e: &reqwest::Error) -> SendError {
        if e.is_timeout() {
            SendError::network("request timed out")
        } else if e.is_connect() {
            SendError::network(format!("failed to connect to relay: {e}"))
        } else {
            SendError::network(e.to_string())
        }
    }
}

#[async_trait]
impl RelayPort for NtfyRelayClient {
    async fn publish(&self, channel: &Channel, body: &str) -> Result<(), SendError> {
        let url = format!("{}/{channel}", self.base_url);

        debug!(url = %url, "Posting message to relay");

        let response = self
            .client
            .post(&url)
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Relay request failed");
                Self::classify_transport_error(&e)
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(status = %status, "Relay accepted message");
            Ok(())
        } else {
            warn!(status = %status, "Relay rejected message");
            Err(SendError::http(status.as_u16()))
        }
    }
}
