//! Selection flow state machine.
//!
//! The flow is an explicit three-state machine rather than a pair of
//! nullable fields: the screen to render falls directly out of the variant,
//! and selections cannot be set out of order.

use crate::domain::entities::{Channel, Identity};

/// Where the selection flow currently stands. Selections are immutable once
/// made; there is no back-navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// No identity chosen yet; the next selection becomes the sender.
    AwaitingSender,
    /// Sender chosen; the next selection becomes the recipient.
    AwaitingRecipient {
        /// The chosen sender.
        sender: Identity,
    },
    /// Both identities chosen; the message form is active.
    Composing {
        /// The chosen sender.
        sender: Identity,
        /// The chosen recipient.
        recipient: Identity,
    },
}

/// What a selection event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEffect {
    /// The sender was set; the flow now awaits a recipient.
    SenderChosen,
    /// The recipient was set; the flow moved to composing. Carries the
    /// channel override and draft pre-fill a special recipient brings.
    RecipientChosen {
        /// Channel the flow should re-target, if the recipient demands one.
        channel: Option<Channel>,
        /// Draft text to pre-fill, if the recipient has a fixed greeting.
        greeting: Option<&'static str>,
    },
    /// Both selections were already made; the event was ignored.
    Ignored,
}

impl WizardState {
    /// Applies one selection event. This is the only transition.
    pub fn select(&mut self, identity: Identity) -> SelectionEffect {
        match *self {
            Self::AwaitingSender => {
                *self = Self::AwaitingRecipient { sender: identity };
                SelectionEffect::SenderChosen
            }
            Self::AwaitingRecipient { sender } => {
                *self = Self::Composing {
                    sender,
                    recipient: identity,
                };
                SelectionEffect::RecipientChosen {
                    channel: identity.channel_override(),
                    greeting: identity.greeting(),
                }
            }
            Self::Composing { .. } => SelectionEffect::Ignored,
        }
    }

    /// The chosen sender, once one exists.
    #[must_use]
    pub const fn sender(&self) -> Option<Identity> {
        match *self {
            Self::AwaitingSender => None,
            Self::AwaitingRecipient { sender } | Self::Composing { sender, .. } => Some(sender),
        }
    }

    /// The chosen recipient, once one exists.
    #[must_use]
    pub const fn recipient(&self) -> Option<Identity> {
        match *self {
            Self::Composing { recipient, .. } => Some(recipient),
            _ => None,
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::AwaitingSender
    }
}
