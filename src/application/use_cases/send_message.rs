//! Send message use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::SendRequest;
use crate::domain::entities::OutboundMessage;
use crate::domain::errors::SendError;
use crate::domain::ports::RelayPort;

/// Composes the outbound body and publishes it through the relay.
#[derive(Clone)]
pub struct SendMessageUseCase {
    relay: Arc<dyn RelayPort>,
}

impl SendMessageUseCase {
    /// Creates new send use case.
    #[must_use]
    pub const fn new(relay: Arc<dyn RelayPort>) -> Self {
        Self { relay }
    }

    /// Executes one submission.
    ///
    /// # Errors
    /// Returns error if the relay answers with a non-success status or the
    /// request fails at the transport level.
    pub async fn execute(&self, request: SendRequest) -> Result<(), SendError> {
        let message =
            OutboundMessage::compose(&request.sender, &request.recipient, &request.draft);

        debug!(channel = %request.channel, "Publishing message to relay");

        self.relay
            .publish(&request.channel, message.body())
            .await
            .map_err(|e| {
                warn!(error = %e, channel = %request.channel, "Publish failed");
                e
            })?;

        info!(channel = %request.channel, "Message published");
        Ok(())
    }
}
