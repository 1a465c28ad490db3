//! Send request data transfer object.

use crate::domain::entities::{Channel, Identity};

/// Everything one submission needs.
#[derive(Debug, Clone)]
pub struct SendRequest {
    /// The chosen sender.
    pub sender: Identity,
    /// The chosen recipient.
    pub recipient: Identity,
    /// Channel the message is posted to.
    pub channel: Channel,
    /// The draft message text. Expected non-empty; the UI blocks empty
    /// submissions.
    pub draft: String,
}

impl SendRequest {
    /// Creates a new request.
    #[must_use]
    pub fn new(
        sender: Identity,
        recipient: Identity,
        channel: Channel,
        draft: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            recipient,
            channel,
            draft: draft.into(),
        }
    }
}
