//! Identity picker screen.
//!
//! The same screen serves both wizard steps; only the prompt differs.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::Identity;

/// Identity picker UI for one wizard step.
pub struct PickerScreen {
    prompt: &'static str,
    roster: [Identity; 3],
    highlighted: usize,
}

/// What a key press on the picker resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerAction {
    /// Nothing to act on.
    None,
    /// An identity was chosen.
    Choose(Identity),
}

impl PickerScreen {
    /// Creates the sender-selection step.
    #[must_use]
    pub fn pick_sender() -> Self {
        Self::new("Who are you?")
    }

    /// Creates the recipient-selection step.
    #[must_use]
    pub fn pick_recipient() -> Self {
        Self::new("Who gets the message?")
    }

    fn new(prompt: &'static str) -> Self {
        Self {
            prompt,
            roster: Identity::roster(),
            highlighted: 0,
        }
    }

    /// Returns the currently highlighted identity.
    #[must_use]
    pub fn highlighted(&self) -> Identity {
        self.roster[self.highlighted]
    }

    /// Handles key event, returns action.
    pub fn handle_key(&mut self, key: KeyEvent) -> PickerAction {
        match key.code {
            KeyCode::Left | KeyCode::BackTab => {
                self.highlighted = (self.highlighted + self.roster.len() - 1) % self.roster.len();
            }
            KeyCode::Right | KeyCode::Tab => {
                self.highlighted = (self.highlighted + 1) % self.roster.len();
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = (c as usize) - ('1' as usize);
                self.highlighted = index;
                return PickerAction::Choose(self.roster[index]);
            }
            KeyCode::Enter => {
                return PickerAction::Choose(self.roster[self.highlighted]);
            }
            _ => {}
        }

        PickerAction::None
    }

    fn render_inner(&self, area: Rect, buf: &mut Buffer) {
        let vertical = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(7),
            Constraint::Fill(1),
        ]);
        let [_, center, _] = vertical.areas(area);

        let horizontal = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Min(44),
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
            Constraint::Length(1),
            Constraint::Length(1),
        ]);
        let areas = inner_layout.areas::<5>(inner);

        let prompt = Paragraph::new(self.prompt)
            .style(Style::default().fg(Color::White))
            .centered();
        prompt.render(areas[1], buf);

        let mut spans = Vec::new();
        for (i, identity) in self.roster.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("    "));
            }
            let style = if i == self.highlighted {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            spans.push(Span::styled(format!(" {} ", identity.glyph()), style));
        }
        let row = Line::from(spans);

        // Emoji are double-width; center by measured width, not span count.
        #[allow(clippy::cast_possible_truncation)]
        let row_width = row
            .spans
            .iter()
            .map(|s| s.content.width() as u16)
            .sum::<u16>();
        let glyph_area = areas[3];
        let x = glyph_area.x + glyph_area.width.saturating_sub(row_width) / 2;
        let centered = Rect::new(x, glyph_area.y, row_width.min(glyph_area.width), 1);
        Paragraph::new(row).render(centered, buf);
    }
}

impl Widget for &PickerScreen {
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

    #[test]
    fn test_initial_highlight_is_first_identity() {
        let screen = PickerScreen::pick_sender();
        assert_eq!(screen.highlighted(), Identity::duck());
    }

    #[test]
    fn test_navigation_wraps() {
        let mut screen = PickerScreen::pick_sender();

        screen.handle_key(key(KeyCode::Left));
        assert_eq!(screen.highlighted(), Identity::cyclist());

        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Right));
        assert_eq!(screen.highlighted(), Identity::thumbs_up());
    }

    #[test]
    fn test_enter_chooses_highlighted() {
        let mut screen = PickerScreen::pick_recipient();
        screen.handle_key(key(KeyCode::Right));

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            PickerAction::Choose(Identity::thumbs_up())
        );
    }

    #[test]
    fn test_digit_chooses_directly() {
        let mut screen = PickerScreen::pick_sender();

        assert_eq!(
            screen.handle_key(key(KeyCode::Char('3'))),
            PickerAction::Choose(Identity::cyclist())
        );
    }

    #[test]
    fn test_other_keys_do_nothing() {
        let mut screen = PickerScreen::pick_sender();
        assert_eq!(screen.handle_key(key(KeyCode::Char('x'))), PickerAction::None);
        assert_eq!(screen.highlighted(), Identity::duck());
    }
}
