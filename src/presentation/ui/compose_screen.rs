//! Message compose screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::domain::entities::Identity;
use crate::presentation::widgets::TextInput;

/// Outcome of the most recent submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Nothing submitted yet (or editing after a result).
    Idle,
    /// A request is in flight; input is locked.
    Sending,
    /// Last submission succeeded.
    Success,
    /// Last submission failed. Carries the message shown inline.
    Error(String),
}

/// What a key press on the compose screen resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposeAction {
    /// Nothing to act on.
    None,
    /// Submit the carried draft.
    Submit(String),
}

/// Message form UI.
pub struct ComposeScreen {
    sender: Identity,
    recipient: Identity,
    input: TextInput,
    status: SubmissionStatus,
}

impl ComposeScreen {
    /// Creates the compose step. Focus lands on the message field; a
    /// special recipient's greeting arrives as `prefill`.
    #[must_use]
    pub fn new(sender: Identity, recipient: Identity, prefill: Option<&str>) -> Self {
        let mut input = TextInput::new(" Message ").placeholder("Type your message...");
        input.set_focused(true);
        if let Some(greeting) = prefill {
            input.set_value(greeting);
        }

        Self {
            sender,
            recipient,
            input,
            status: SubmissionStatus::Idle,
        }
    }

    /// Returns current draft text.
    #[must_use]
    pub fn draft(&self) -> &str {
        self.input.value()
    }

    /// Returns current submission status.
    #[must_use]
    pub const fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Whether a request is in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Marks a submission as in flight.
    pub fn set_sending(&mut self) {
        self.status = SubmissionStatus::Sending;
    }

    /// Records a successful send and resets the draft.
    pub fn set_success(&mut self) {
        self.status = SubmissionStatus::Success;
        self.input.clear();
    }

    /// Records a failed send. The draft stays put for resubmission.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = SubmissionStatus::Error(message.into());
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> ComposeAction {
        // One submission at a time; the form is locked until the result lands.
        if self.is_sending() {
            return ComposeAction::None;
        }

        match key.code {
            KeyCode::Enter => {
                if !self.input.value().is_empty() {
                    return ComposeAction::Submit(self.input.value().to_string());
                }
            }
            KeyCode::Char(c) => {
                self.input.input_char(c);
            }
            KeyCode::Backspace => {
                self.input.backspace();
            }
            KeyCode::Delete => {
                self.input.delete();
            }
            KeyCode::Left => {
                self.input.move_left();
            }
            KeyCode::Right => {
                self.input.move_right();
            }
            KeyCode::Home => {
                self.input.move_start();
            }
            KeyCode::End => {
                self.input.move_end();
            }
            _ => {}
        }

        ComposeAction::None
    }

    fn status_line(&self) -> Line<'_> {
        match &self.status {
            SubmissionStatus::Idle => Line::default(),
            SubmissionStatus::Sending => Line::from(Span::styled(
                "Sending...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            )),
            SubmissionStatus::Success => Line::from(Span::styled(
                "Notification sent successfully!",
                Style::default().fg(Color::Green),
            )),
            SubmissionStatus::Error(message) => Line::from(Span::styled(
                format!("Failed to send: {message}"),
                Style::default().fg(Color::Red),
            )),
        }
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(11),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(50),
            Constraint::Fill(1),
        ]);
        let [_, content_area, _] = horizontal.areas(center);

        Clear.render(content_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Duck Chat ");

        let inner = block.inner(content_area);
        block.render(content_area, buf);

        let inner_layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<6>(inner);

        let title = Paragraph::new("Your message")
            .style(Style::default().fg(Color::White))
            .centered();
        title.render(areas[0], buf);

        let flow = Paragraph::new(format!(
            "{} \u{2192} {}",
            self.sender.glyph(),
            self.recipient.glyph()
        ))
        .centered();
        flow.render(areas[1], buf);

        (&self.input).render(areas[3], buf);

        Paragraph::new(self.status_line())
            .centered()
            .render(areas[5], buf);
    }
}

impl Widget for &ComposeScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_inner(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn make_screen(prefill: Option<&str>) -> ComposeScreen {
        ComposeScreen::new(Identity::duck(), Identity::thumbs_up(), prefill)
    }

    #[test]
    fn test_typing_builds_draft() {
        let mut screen = make_screen(None);
        screen.handle_key(key(KeyCode::Char('h')));
        screen.handle_key(key(KeyCode::Char('i')));

        assert_eq!(screen.draft(), "hi");
    }

    #[test]
    fn test_prefill_lands_in_draft() {
        let screen = make_screen(Some("Hello Ducky"));
        assert_eq!(screen.draft(), "Hello Ducky");
    }

    #[test]
    fn test_submit_empty_draft_is_blocked() {
        let mut screen = make_screen(None);
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ComposeAction::None);
    }

    #[test]
    fn test_submit_carries_draft() {
        let mut screen = make_screen(None);
        screen.handle_key(key(KeyCode::Char('h')));
        screen.handle_key(key(KeyCode::Char('i')));

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ComposeAction::Submit("hi".to_string())
        );
    }

    #[test]
    fn test_sending_locks_the_form() {
        let mut screen = make_screen(Some("hi"));
        screen.set_sending();

        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ComposeAction::None);
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), ComposeAction::None);
        assert_eq!(screen.draft(), "hi");
    }

    #[test]
    fn test_success_clears_draft() {
        let mut screen = make_screen(Some("hi"));
        screen.set_sending();
        screen.set_success();

        assert_eq!(screen.draft(), "");
        assert_eq!(*screen.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_error_keeps_draft_for_resubmission() {
        let mut screen = make_screen(Some("hi"));
        screen.set_sending();
        screen.set_error("server returned HTTP 500");

        assert_eq!(screen.draft(), "hi");
        assert!(matches!(screen.status(), SubmissionStatus::Error(m) if m.contains("500")));

        // The form unlocks for editing and resubmission.
        screen.handle_key(key(KeyCode::Char('!')));
        assert_eq!(screen.draft(), "hi!");
    }
}
