//! # Experience Card Component
//!
//! One bordered card per interview experience.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Google                             Selected  │
//! │ Software Engineer                            │
//! │ by John Doe          ▼ Read Full Experience  │
//! │ ──────────────────────────────────────────── │  ┐
//! │ Interview Experience                         │  │ expanded only
//! │ The interview process was thorough and ...   │  ┘
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Content is pre-wrapped with `textwrap` so `height()` is exact and the
//! list can lay cards out without rendering them first.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::experience::{InterviewExperience, Verdict};
use crate::tui::component::{Component, Measure, rows};
use crate::tui::components::filter_bar::ACCENT;

/// Border (2) + padding (2) consumed horizontally
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders
const VERTICAL_OVERHEAD: u16 = 2;
/// Company/badge, role, candidate/toggle
const SUMMARY_LINES: u16 = 3;
/// Separator + "Interview Experience" heading
const DETAIL_HEADER_LINES: u16 = 2;

pub const EXPAND_LABEL: &str = "▼ Read Full Experience";
pub const COLLAPSE_LABEL: &str = "▲ Collapse";
const EMPTY_CONTENT: &str = "No details were shared.";

/// Badge palette per verdict. Unknown verdicts get gray.
pub fn verdict_style(verdict: &Verdict) -> Style {
    let (bg, fg) = match verdict {
        Verdict::Selected => (Color::Rgb(22, 163, 74), Color::Rgb(220, 252, 231)),
        Verdict::Rejected => (Color::Rgb(220, 38, 38), Color::Rgb(254, 226, 226)),
        Verdict::Pending => (Color::Rgb(202, 138, 4), Color::Rgb(254, 249, 195)),
        Verdict::Other(_) => (Color::Rgb(75, 85, 99), Color::Rgb(243, 244, 246)),
    };
    Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD)
}

pub struct ExperienceCard<'a> {
    pub experience: &'a InterviewExperience,
    pub expanded: bool,
    pub selected: bool,
}

impl<'a> ExperienceCard<'a> {
    pub fn new(experience: &'a InterviewExperience, expanded: bool, selected: bool) -> Self {
        Self {
            experience,
            expanded,
            selected,
        }
    }

    fn content_lines(&self, inner_width: u16) -> Vec<String> {
        let content = self.experience.content.trim();
        if content.is_empty() {
            return vec![EMPTY_CONTENT.to_string()];
        }
        let options = textwrap::Options::new(inner_width.max(1) as usize).break_words(true);
        textwrap::wrap(content, options)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }

    /// Builds the bordered paragraph for this card at the given outer width.
    pub fn paragraph(&self, width: u16) -> Paragraph<'a> {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD);
        let exp = self.experience;

        let company = Span::styled(
            exp.company.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        let badge = Span::styled(format!(" {} ", exp.verdict.label()), verdict_style(&exp.verdict));

        let role = Line::from(Span::styled(
            exp.role.clone(),
            Style::default().fg(Color::Gray),
        ));

        let candidate = Span::styled(
            format!("by {}", exp.candidate),
            Style::default().fg(Color::DarkGray),
        );
        let toggle = Span::styled(
            if self.expanded { COLLAPSE_LABEL } else { EXPAND_LABEL },
            Style::default().fg(if self.selected { ACCENT } else { Color::Gray }),
        );

        let mut lines = vec![
            spread(company, badge, inner),
            role,
            spread(candidate, toggle, inner),
        ];

        if self.expanded {
            lines.push(Line::from(Span::styled(
                "─".repeat(inner as usize),
                Style::default().fg(Color::DarkGray),
            )));
            lines.push(Line::from(Span::styled(
                "Interview Experience",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            let body_style = if exp.content.trim().is_empty() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.extend(
                self.content_lines(inner)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, body_style))),
            );
        }

        let border_style = if self.selected {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Paragraph::new(lines).block(
            Block::bordered()
                .border_style(border_style)
                .padding(Padding::horizontal(1)),
        )
    }
}

/// Puts `left` and `right` on one line, with `right` pushed to the edge.
fn spread<'a>(left: Span<'a>, right: Span<'a>, width: u16) -> Line<'a> {
    let used = left.content.width() + right.content.width();
    let gap = (width as usize).saturating_sub(used).max(1);
    Line::from(vec![left, Span::raw(" ".repeat(gap)), right])
}

impl Measure for ExperienceCard<'_> {
    /// Total rows the card occupies at the given outer width.
    fn height(&self, width: u16) -> u16 {
        let summary = VERTICAL_OVERHEAD + SUMMARY_LINES;
        if !self.expanded {
            return summary;
        }
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD);
        summary
            .saturating_add(DETAIL_HEADER_LINES)
            .saturating_add(rows(self.content_lines(inner).len()))
    }
}

impl Component for ExperienceCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.paragraph(area.width), area);
    }
}
