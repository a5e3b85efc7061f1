//! # ExperienceList Component
//!
//! Scrollable stack of experience cards for the filtered records.
//!
//! ## Responsibilities
//!
//! - Render one card per visible record, in source order
//! - Keep a cursor on the selected card, clamped to the filtered length
//! - Scroll so the selected card stays in view
//! - Hit testing for mouse clicks
//! - Loading and empty-state placeholders
//!
//! ## Architecture
//!
//! `ExperienceList` is a transient component (created each frame) that wraps
//! `&'a mut ExperienceListState` (persistent state) and the visible records
//! (props). Card heights measured during render are kept in the state so
//! hit testing and `scroll_to_selected` work between frames.
//!
//! Content rows are addressed as `usize`: a long list easily outgrows the
//! `u16` a `ScrollView` can hold. Each frame only the cards that intersect
//! the viewport are laid into a `ScrollView`, and the scrollbar is drawn
//! separately against the full content height.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::expansion::ExpansionMap;
use crate::core::experience::InterviewExperience;
use crate::core::state::LoadState;
use crate::tui::component::{Component, EventHandler, Measure};
use crate::tui::components::experience_card::ExperienceCard;
use crate::tui::event::TuiEvent;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LOADING_TEXT: &str = "Loading interview experiences...";
pub const NO_MATCH_TEXT: &str = "No interview experiences match the current filters.";
pub const NOTHING_SHARED_TEXT: &str = "No interview experiences have been shared yet.";
pub const LOAD_FAILED_TEXT: &str = "Nothing to show: the list could not be loaded.";

/// Cursor, scroll and layout state for the list.
/// Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct ExperienceListState {
    /// Content row shown at the top of the viewport
    pub offset: usize,
    /// Index into the visible records
    pub selected: usize,
    /// Number of visible records at the last clamp/render
    pub item_count: usize,
    /// Card heights from the last render, in visible order
    pub heights: Vec<u16>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Area the list was last drawn into (for hit testing)
    pub area: Rect,
}

/// Events emitted by the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEvent {
    /// Toggle the card at this visible index.
    Toggle(usize),
}

/// A card that intersects the viewport.
struct WindowCard {
    index: usize,
    top: usize,
    height: u16,
}

impl ExperienceListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamps the cursor after the visible set changed size.
    pub fn clamp_cursor(&mut self, count: usize) {
        self.item_count = count;
        if count == 0 {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.scroll_to_selected();
    }

    pub fn cursor_down(&mut self) {
        if self.selected + 1 < self.item_count {
            self.selected += 1;
        }
        self.scroll_to_selected();
    }

    pub fn home(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn end(&mut self) {
        self.selected = self.item_count.saturating_sub(1);
        self.scroll_to_selected();
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines);
        self.clamp_scroll();
    }

    /// Sum of all card heights.
    pub fn content_height(&self) -> usize {
        self.heights.iter().map(|&h| usize::from(h)).sum()
    }

    /// Top row of card `idx` in content coordinates.
    fn card_top(&self, idx: usize) -> usize {
        self.heights.iter().take(idx).map(|&h| usize::from(h)).sum()
    }

    /// Scroll the viewport so the selected card is fully visible.
    /// If the card is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(&height) = self.heights.get(self.selected) else {
            return;
        };
        let viewport = usize::from(self.viewport_height);
        let height = usize::from(height);
        let top = self.card_top(self.selected);
        let bottom = top + height;

        if top < self.offset || height > viewport {
            self.offset = top;
        } else if bottom > self.offset + viewport {
            self.offset = bottom - viewport;
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_offset = self
            .content_height()
            .saturating_sub(usize::from(self.viewport_height));
        self.offset = self.offset.min(max_offset);
    }

    /// Cards overlapping rows `offset..offset + viewport_height`, in order.
    fn window(&self) -> Vec<WindowCard> {
        let end = self.offset + usize::from(self.viewport_height);
        let mut cards = Vec::new();
        let mut top = 0usize;
        for (index, &height) in self.heights.iter().enumerate() {
            let bottom = top + usize::from(height);
            if top >= end {
                break;
            }
            if bottom > self.offset {
                cards.push(WindowCard { index, top, height });
            }
            top = bottom;
        }
        cards
    }

    /// Visible index of the card at screen position (`column`, `row`).
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        let content_y = usize::from(row - self.area.y) + self.offset;

        let mut accumulated = 0usize;
        for (index, &height) in self.heights.iter().enumerate() {
            accumulated += usize::from(height);
            if content_y < accumulated {
                return Some(index);
            }
        }
        None
    }
}

impl EventHandler for ExperienceListState {
    type Event = ListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ListEvent> {
        let page = usize::from(self.viewport_height.max(1));
        match event {
            TuiEvent::CursorUp => self.cursor_up(),
            TuiEvent::CursorDown => self.cursor_down(),
            TuiEvent::Home => self.home(),
            TuiEvent::End => self.end(),
            TuiEvent::ScrollUp => self.scroll_up(1),
            TuiEvent::ScrollDown => self.scroll_down(1),
            TuiEvent::PageUp => self.scroll_up(page),
            TuiEvent::PageDown => self.scroll_down(page),
            TuiEvent::Toggle if self.item_count > 0 => {
                return Some(ListEvent::Toggle(self.selected));
            }
            _ => {}
        }
        None
    }
}

/// Transient list view, created fresh each frame.
pub struct ExperienceList<'a> {
    pub state: &'a mut ExperienceListState,
    pub experiences: &'a [&'a InterviewExperience],
    pub expanded: &'a ExpansionMap,
    pub load_state: &'a LoadState,
    /// Number of records before filtering
    pub total: usize,
    pub spinner_frame: usize,
}

impl<'a> ExperienceList<'a> {
    pub fn new(
        state: &'a mut ExperienceListState,
        experiences: &'a [&'a InterviewExperience],
        expanded: &'a ExpansionMap,
        load_state: &'a LoadState,
        total: usize,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            experiences,
            expanded,
            load_state,
            total,
            spinner_frame,
        }
    }

    fn placeholder_text(&self) -> String {
        match self.load_state {
            LoadState::Idle | LoadState::Loading => {
                format!("{} {}", SPINNER[self.spinner_frame % SPINNER.len()], LOADING_TEXT)
            }
            LoadState::Failed(_) if self.total == 0 => LOAD_FAILED_TEXT.to_string(),
            _ if self.total == 0 => NOTHING_SHARED_TEXT.to_string(),
            _ => NO_MATCH_TEXT.to_string(),
        }
    }

    fn card(&self, index: usize) -> ExperienceCard<'a> {
        let experience = self.experiences[index];
        ExperienceCard::new(
            experience,
            self.expanded.is_expanded(&experience.id),
            index == self.state.selected,
        )
    }
}

impl Component for ExperienceList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.area = area;
        self.state.viewport_height = area.height;
        self.state.clamp_cursor(self.experiences.len());

        if self.experiences.is_empty() {
            self.state.heights.clear();
            let placeholder = Paragraph::new(self.placeholder_text())
                .style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                )
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(placeholder, area);
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let heights = (0..self.experiences.len())
            .map(|i| self.card(i).height(content_width))
            .collect();
        self.state.heights = heights;
        self.state.clamp_scroll();

        let window = self.state.window();
        let Some(first) = window.first() else {
            return;
        };
        let window_top = first.top;
        let window_height: usize = window.iter().map(|c| usize::from(c.height)).sum();

        let mut scroll_view = ScrollView::new(Size::new(
            content_width,
            u16::try_from(window_height).unwrap_or(u16::MAX),
        ))
        .scrollbars_visibility(ScrollbarVisibility::Never);

        for card in &window {
            let Ok(y) = u16::try_from(card.top - window_top) else {
                break;
            };
            let rect = Rect::new(0, y, content_width, card.height);
            scroll_view.render_widget(self.card(card.index).paragraph(content_width), rect);
        }

        // Never more than one card height past the window top
        let inner_offset = u16::try_from(self.state.offset - window_top).unwrap_or(u16::MAX);
        let mut view_state = ScrollViewState::with_offset(Position::new(0, inner_offset));
        let cards_area = Rect {
            width: content_width,
            ..area
        };
        frame.render_stateful_widget(scroll_view, cards_area, &mut view_state);

        // ScrollbarState content_length is max scrollable position, not total rows
        let max_scroll = self
            .state
            .content_height()
            .saturating_sub(usize::from(area.height));
        if max_scroll > 0 {
            let mut scrollbar_state = ScrollbarState::default()
                .content_length(max_scroll)
                .position(self.state.offset);
            let scrollbar_area = Rect {
                x: area.x + content_width,
                width: 1,
                ..area
            };
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                scrollbar_area,
                &mut scrollbar_state,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::experience::ExperienceId;
    use crate::core::seed::sample_experiences;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(
        state: &mut ExperienceListState,
        records: &[InterviewExperience],
        expanded: &ExpansionMap,
        load_state: &LoadState,
        width: u16,
        height: u16,
    ) -> String {
        let visible: Vec<&InterviewExperience> = records.iter().collect();
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                ExperienceList::new(state, &visible, expanded, load_state, records.len(), 0)
                    .render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_cards_in_source_order() {
        let records = sample_experiences();
        let mut state = ExperienceListState::new();
        let text = draw(&mut state, &records, &ExpansionMap::new(), &LoadState::Loaded, 80, 40);

        let google = text.find("Google").unwrap();
        let microsoft = text.find("Microsoft").unwrap();
        let amazon = text.find("Amazon").unwrap();
        assert!(google < microsoft && microsoft < amazon);
        assert_eq!(state.heights, vec![5; 5]);
    }

    #[test]
    fn test_loading_placeholder() {
        let mut state = ExperienceListState::new();
        let text = draw(&mut state, &[], &ExpansionMap::new(), &LoadState::Loading, 60, 5);
        assert!(text.contains(LOADING_TEXT));
    }

    #[test]
    fn test_empty_filter_result_placeholder() {
        let records = sample_experiences();
        let visible: Vec<&InterviewExperience> = Vec::new();
        let mut state = ExperienceListState::new();
        let backend = TestBackend::new(80, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        let expanded = ExpansionMap::new();
        terminal
            .draw(|f| {
                ExperienceList::new(&mut state, &visible, &expanded, &LoadState::Loaded, records.len(), 0)
                    .render(f, f.area());
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains(NO_MATCH_TEXT));
    }

    #[test]
    fn test_empty_backend_placeholder() {
        let mut state = ExperienceListState::new();
        let text = draw(&mut state, &[], &ExpansionMap::new(), &LoadState::Loaded, 80, 5);
        assert!(text.contains(NOTHING_SHARED_TEXT));
    }

    #[test]
    fn test_failed_placeholder() {
        let mut state = ExperienceListState::new();
        let failed = LoadState::Failed("boom".to_string());
        let text = draw(&mut state, &[], &ExpansionMap::new(), &failed, 80, 5);
        assert!(text.contains(LOAD_FAILED_TEXT));
    }

    #[test]
    fn test_expanded_card_is_taller() {
        let records = sample_experiences();
        let mut expanded = ExpansionMap::new();
        expanded.toggle(&ExperienceId::from(2));
        let mut state = ExperienceListState::new();
        let text = draw(&mut state, &records, &expanded, &LoadState::Loaded, 80, 60);
        assert_eq!(state.heights[0], 5);
        assert!(state.heights[1] > 5);
        assert!(text.contains("diving"));
        assert!(!text.contains("thorough"));
    }

    #[test]
    fn test_hit_test_maps_rows_to_cards() {
        let records = sample_experiences();
        let mut state = ExperienceListState::new();
        draw(&mut state, &records, &ExpansionMap::new(), &LoadState::Loaded, 80, 40);

        assert_eq!(state.hit_test(10, 0), Some(0));
        assert_eq!(state.hit_test(10, 4), Some(0));
        assert_eq!(state.hit_test(10, 5), Some(1));
        assert_eq!(state.hit_test(10, 24), Some(4));
        assert_eq!(state.hit_test(10, 25), None);
        assert_eq!(state.hit_test(200, 0), None);
    }

    #[test]
    fn test_cursor_is_clamped_to_count() {
        let mut state = ExperienceListState::new();
        state.clamp_cursor(5);
        state.end();
        assert_eq!(state.selected, 4);
        state.clamp_cursor(2);
        assert_eq!(state.selected, 1);
        state.clamp_cursor(0);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut state = ExperienceListState::new();
        state.clamp_cursor(3);
        state.cursor_up();
        assert_eq!(state.selected, 0);
        state.cursor_down();
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_toggle_event_targets_selected() {
        let mut state = ExperienceListState::new();
        state.clamp_cursor(3);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Toggle),
            Some(ListEvent::Toggle(1))
        );
    }

    #[test]
    fn test_toggle_on_empty_list_is_ignored() {
        let mut state = ExperienceListState::new();
        state.clamp_cursor(0);
        assert_eq!(state.handle_event(&TuiEvent::Toggle), None);
    }

    #[test]
    fn test_scroll_follows_selection() {
        let records = sample_experiences();
        let mut state = ExperienceListState::new();
        // 12 rows fit two 5-row cards
        draw(&mut state, &records, &ExpansionMap::new(), &LoadState::Loaded, 80, 12);
        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 2);
        // Card 2 spans rows 10..15, so the bottom must be brought into view
        assert_eq!(state.offset, 3);
        state.handle_event(&TuiEvent::Home);
        assert_eq!(state.offset, 0);
    }

    fn many_records(count: u64) -> Vec<InterviewExperience> {
        let template = sample_experiences().remove(0);
        (0..count)
            .map(|i| InterviewExperience {
                id: ExperienceId::from(i),
                candidate: format!("Candidate {i}"),
                ..template.clone()
            })
            .collect()
    }

    #[test]
    fn test_list_taller_than_u16_renders_and_scrolls() {
        // 14,000 five-row cards is 70,000 content rows
        let records = many_records(14_000);
        let mut state = ExperienceListState::new();
        let text = draw(&mut state, &records, &ExpansionMap::new(), &LoadState::Loaded, 80, 30);
        assert!(text.contains("Candidate 0 "));
        assert_eq!(state.content_height(), 70_000);

        state.handle_event(&TuiEvent::End);
        assert_eq!(state.selected, 13_999);
        assert_eq!(state.offset, 70_000 - 30);

        let text = draw(&mut state, &records, &ExpansionMap::new(), &LoadState::Loaded, 80, 30);
        assert!(text.contains("Candidate 13999"));
        assert!(!text.contains("Candidate 0 "));
        assert_eq!(state.hit_test(10, 29), Some(13_999));
        assert_eq!(state.hit_test(10, 0), Some(13_994));
    }

    #[test]
    fn test_scroll_down_stops_at_content_end() {
        let records = sample_experiences();
        let mut state = ExperienceListState::new();
        draw(&mut state, &records, &ExpansionMap::new(), &LoadState::Loaded, 80, 12);
        for _ in 0..10 {
            state.handle_event(&TuiEvent::PageDown);
        }
        assert_eq!(state.offset, 25 - 12);
        state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(state.offset, 12);
    }
}
