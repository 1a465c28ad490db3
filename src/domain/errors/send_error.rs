//! Submission error types.

use thiserror::Error;

/// Everything that can go wrong sending one message to the relay.
#[derive(Debug, Clone, Error)]
#[allow(missing_docs)]
pub enum SendError {
    #[error("server returned HTTP {status}")]
    Http { status: u16 },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("failed to create HTTP client: {message}")]
    Client { message: String },
}

impl SendError {
    /// Creates an HTTP status error.
    #[must_use]
    pub const fn http(status: u16) -> Self {
        Self::Http { status }
    }

    /// Creates a transport-level error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a client construction error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// The HTTP status carried by this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display_carries_status() {
        let error = SendError::http(500);
        assert!(error.to_string().contains("500"));
        assert_eq!(error.status(), Some(500));
    }

    #[test]
    fn test_network_error_display_carries_description() {
        let error = SendError::network("connection refused");
        assert!(error.to_string().contains("connection refused"));
        assert_eq!(error.status(), None);
    }
}
