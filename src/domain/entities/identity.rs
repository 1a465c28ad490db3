//! Selectable identity entity.

use serde::{Deserialize, Serialize};

use super::Channel;

/// Stable key for each known identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityKey {
    /// The duck. The designated special recipient.
    Duck,
    /// Thumbs up.
    ThumbsUp,
    /// Cyclist.
    Cyclist,
}

/// A selectable persona, rendered as an emoji glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    key: IdentityKey,
    glyph: &'static str,
}

/// Channel the duck's messages are routed to.
const DUCK_CHANNEL: &str = "zxrd";

/// Greeting pre-filled when the duck is chosen as recipient.
const DUCK_GREETING: &str = "Hello Ducky";

impl Identity {
    const fn new(key: IdentityKey, glyph: &'static str) -> Self {
        Self { key, glyph }
    }

    /// Returns the full fixed roster, in picker order.
    #[must_use]
    pub const fn roster() -> [Self; 3] {
        [Self::duck(), Self::thumbs_up(), Self::cyclist()]
    }

    /// The duck identity.
    #[must_use]
    pub const fn duck() -> Self {
        Self::new(IdentityKey::Duck, "\u{1f986}")
    }

    /// The thumbs-up identity.
    #[must_use]
    pub const fn thumbs_up() -> Self {
        Self::new(IdentityKey::ThumbsUp, "\u{1f44d}")
    }

    /// The cyclist identity.
    #[must_use]
    pub const fn cyclist() -> Self {
        Self::new(IdentityKey::Cyclist, "\u{1f6b4}\u{200d}\u{2640}\u{fe0f}")
    }

    /// Returns the stable key.
    #[must_use]
    pub const fn key(&self) -> IdentityKey {
        self.key
    }

    /// Returns the emoji glyph.
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        self.glyph
    }

    /// Whether picking this identity as recipient re-targets the flow.
    #[must_use]
    pub const fn is_special(&self) -> bool {
        matches!(self.key, IdentityKey::Duck)
    }

    /// Channel override applied when this identity is chosen as recipient.
    #[must_use]
    pub fn channel_override(&self) -> Option<Channel> {
        self.is_special().then(|| Channel::new(DUCK_CHANNEL))
    }

    /// Greeting pre-filled when this identity is chosen as recipient.
    #[must_use]
    pub const fn greeting(&self) -> Option<&'static str> {
        if self.is_special() {
            Some(DUCK_GREETING)
        } else {
            None
        }
    }
}
