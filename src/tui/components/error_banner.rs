//! # Error Banner Component
//!
//! Inline, non-blocking error notice shown above the list when the fetch
//! fails. The rest of the UI stays usable; `x` dismisses it.
//!
//! The message is wrapped with `textwrap` (as the cards are) so `height()`
//! matches what gets drawn. Very long messages stop at `MAX_MESSAGE_LINES`
//! and end in an ellipsis.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::{Component, Measure, rows};

/// Border (2) + padding (2) consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
const VERTICAL_OVERHEAD: u16 = 2;
pub const MAX_MESSAGE_LINES: usize = 4;
const ELLIPSIS: &str = "…";

pub struct ErrorBanner<'a> {
    pub message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    fn message_lines(&self, width: u16) -> Vec<String> {
        let inner = usize::from(width.saturating_sub(HORIZONTAL_OVERHEAD).max(1));
        let options = textwrap::Options::new(inner).break_words(true);
        let mut lines: Vec<String> = textwrap::wrap(self.message.trim(), options)
            .into_iter()
            .map(|line| line.into_owned())
            .collect();

        if lines.len() > MAX_MESSAGE_LINES {
            lines.truncate(MAX_MESSAGE_LINES);
            if let Some(last) = lines.last_mut() {
                *last = fit_width(last, inner.saturating_sub(ELLIPSIS.width()));
                last.push_str(ELLIPSIS);
            }
        }
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }
}

/// Longest prefix of `text` that fits in `width` columns.
fn fit_width(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

impl Measure for ErrorBanner<'_> {
    fn height(&self, width: u16) -> u16 {
        rows(self.message_lines(width).len()).saturating_add(VERTICAL_OVERHEAD)
    }
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::Red);
        let block = Block::bordered()
            .border_style(style)
            .title(Line::from(" Error ").style(style.add_modifier(Modifier::BOLD)))
            .title_bottom(Line::from(" x dismiss ").right_aligned())
            .padding(Padding::horizontal(1));

        let lines: Vec<Line> = self
            .message_lines(area.width)
            .into_iter()
            .map(Line::from)
            .collect();
        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(Color::LightRed))
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(message: &str, width: u16) -> (u16, String) {
        let mut banner = ErrorBanner::new(message);
        let height = banner.height(width);
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| banner.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        (height, text)
    }

    #[test]
    fn test_banner_shows_message() {
        let (height, text) = render_text("Unauthorized", 60);
        assert_eq!(height, 3);
        assert!(text.contains("Error"));
        assert!(text.contains("Unauthorized"));
        assert!(text.contains("x dismiss"));
    }

    #[test]
    fn test_long_message_wraps_instead_of_truncating() {
        let message = "Your session has expired, please sign in again to continue browsing";
        let (height, text) = render_text(message, 30);
        // Inner width 26 needs three lines
        assert_eq!(height, 5);
        assert!(text.contains("expired,"));
        assert!(text.contains("browsing"));
    }

    #[test]
    fn test_huge_message_is_capped() {
        let message = "word ".repeat(500);
        let (height, text) = render_text(&message, 40);
        assert_eq!(usize::from(height), MAX_MESSAGE_LINES + 2);
        assert!(text.contains(ELLIPSIS));
    }
}
