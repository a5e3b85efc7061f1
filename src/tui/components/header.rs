//! # Header Component
//!
//! Two-line page header: title with status on the right, and the subtitle
//! with the data source, followed by the view summary on the right.
//!
//! Stateless: it receives all data as props and renders what it's given.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::components::filter_bar::ACCENT;

pub const TITLE: &str = "Interview Experiences";
pub const SUBTITLE: &str = "Learn from real interview experiences shared by the community";

pub struct Header {
    /// Transient status (e.g. "5 experiences loaded")
    pub status_message: String,
    /// Where the data comes from (endpoint URL or "offline sample")
    pub source_label: String,
    /// Shown/total and expanded counts
    pub summary: String,
}

impl Header {
    pub fn new(status_message: String, source_label: String, summary: String) -> Self {
        Self {
            status_message,
            source_label,
            summary,
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Span::styled(
            TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        );
        let status = Span::styled(
            self.status_message.clone(),
            Style::default().fg(Color::Gray),
        );
        let gap = (area.width as usize)
            .saturating_sub(TITLE.width() + self.status_message.width())
            .max(1);
        let first = Line::from(vec![title, Span::raw(" ".repeat(gap)), status]);

        let source = format!("  ({})", self.source_label);
        let gap = (area.width as usize)
            .saturating_sub(SUBTITLE.width() + source.width() + self.summary.width())
            .max(1);
        let second = Line::from(vec![
            Span::styled(SUBTITLE, Style::default().fg(Color::Gray)),
            Span::styled(source, Style::default().fg(Color::DarkGray)),
            Span::raw(" ".repeat(gap)),
            Span::styled(self.summary.clone(), Style::default().fg(Color::Gray)),
        ]);

        frame.render_widget(Paragraph::new(vec![first, second]), area);
    }
}
