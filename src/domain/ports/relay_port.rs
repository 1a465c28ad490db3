//! Relay port definition.

use async_trait::async_trait;

use crate::domain::entities::Channel;
use crate::domain::errors::SendError;

/// Port for publishing raw-text messages to the push relay.
#[async_trait]
pub trait RelayPort: Send + Sync {
    /// Publishes `body` to the given channel. Success means the relay
    /// answered with a 2xx status.
    async fn publish(&self, channel: &Channel, body: &str) -> Result<(), SendError>;
}
