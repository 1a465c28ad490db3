//! Relay channel entity.

use serde::{Deserialize, Serialize};

/// The relay topic messages are posted to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Channel(String);

impl Channel {
    /// Default channel when nothing overrides it.
    pub const DEFAULT: &'static str = "zxrd";

    /// Creates a channel from a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the channel name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Channel {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Channel {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_channel() {
        assert_eq!(Channel::default().as_str(), "zxrd");
    }

    #[test]
    fn test_display() {
        let channel = Channel::new("alerts");
        assert_eq!(channel.to_string(), "alerts");
    }
}
