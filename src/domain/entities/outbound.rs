//! Outbound message composition.

use super::Identity;

/// The composed wire body for one submission.
///
/// The relay receives raw text in the fixed form
/// `"<sender glyph> → <recipient glyph>: <message>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    body: String,
}

impl OutboundMessage {
    /// Composes the wire body from the selected identities and the draft.
    #[must_use]
    pub fn compose(sender: &Identity, recipient: &Identity, draft: &str) -> Self {
        Self {
            body: format!(
                "{} \u{2192} {}: {draft}",
                sender.glyph(),
                recipient.glyph()
            ),
        }
    }

    /// Returns the wire body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl std::fmt::Display for OutboundMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_exact_body() {
        let message =
            OutboundMessage::compose(&Identity::duck(), &Identity::thumbs_up(), "hi");
        assert_eq!(message.body(), "🦆 → 👍: hi");
    }

    #[test]
    fn test_compose_preserves_draft_verbatim() {
        let message = OutboundMessage::compose(
            &Identity::cyclist(),
            &Identity::duck(),
            "  spaced: out  ",
        );
        assert_eq!(message.body(), "🚴‍♀️ → 🦆:   spaced: out  ");
    }
}
