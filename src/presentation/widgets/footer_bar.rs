//! Key-hint footer bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// One-line footer listing the keys that matter on the current screen.
pub struct FooterBar<'a> {
    hints: &'a [(&'a str, &'a str)],
}

impl<'a> FooterBar<'a> {
    /// Creates a footer from (label, key) pairs.
    #[must_use]
    pub const fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { hints }
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let label_style = Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        let key_style = Style::default().fg(Color::White).bg(Color::DarkGray);

        let mut spans = Vec::new();
        for (i, (label, key)) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(format!(" {label} "), label_style));
            spans.push(Span::styled(format!(" {key} "), key_style));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_renders_hints() {
        let hints = [("Send", "Enter"), ("Quit", "Esc")];
        let footer = FooterBar::new(&hints);

        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        footer.render(area, &mut buf);

        let rendered: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(rendered.contains("Send"));
        assert!(rendered.contains("Enter"));
    }
}
