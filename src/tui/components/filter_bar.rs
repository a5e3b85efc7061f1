//! # Filter Bar Component
//!
//! A bordered block of mutually-exclusive option chips ("All", "Google", ...).
//! Two instances are drawn: Company and Result.
//!
//! Chips flow left to right and wrap onto extra rows, so every option is
//! on screen and clickable whatever the width. `Measure::height` reports how
//! many rows that takes so the layout can size the bar.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FilterBarState` lives in `TuiState` and remembers where each chip was
//!   drawn, so mouse clicks can be mapped back to options
//! - `FilterBar` is created each frame with borrowed state and props

use std::fmt::Display;

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Block;
use unicode_width::UnicodeWidthStr;

use crate::core::filter::Choice;
use crate::tui::component::{Component, Measure, rows};

pub const ACCENT: Color = Color::Rgb(0xC1, 0x50, 0x2E);
pub const CREAM: Color = Color::Rgb(0xF5, 0xE6, 0xD3);

/// Left/right borders
const HORIZONTAL_OVERHEAD: u16 = 2;
/// Top/bottom borders
const VERTICAL_OVERHEAD: u16 = 2;
/// Blank column between chips
const CHIP_GAP: u16 = 1;

/// Persistent state: chip hit boxes from the last render.
#[derive(Debug, Default)]
pub struct FilterBarState {
    pub chip_areas: Vec<Rect>,
}

impl FilterBarState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the option drawn at (`column`, `row`), if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.chip_areas.iter().position(|area| area.contains(pos))
    }
}

/// Returns the option `delta` steps away from `current`, clamped to the
/// ends of the list. `None` if the selection would not change.
pub fn step_choice<T: Clone + PartialEq>(
    options: &[Choice<T>],
    current: &Choice<T>,
    delta: isize,
) -> Option<Choice<T>> {
    if options.is_empty() {
        return None;
    }
    let index = options.iter().position(|o| o == current).unwrap_or(0);
    let target = index
        .saturating_add_signed(delta)
        .min(options.len() - 1);
    (target != index || options[index] != *current).then(|| options[target].clone())
}

fn chip_label<T: Display>(option: &Choice<T>) -> String {
    format!(" {} ", option)
}

/// Places chips of the given widths in rows of `row_width` columns.
///
/// Returns `(column, row, width)` per chip, relative to the top-left of the
/// chip area. A chip wider than a whole row gets a row of its own and is
/// cut to fit.
pub fn flow_chips(widths: &[u16], row_width: u16) -> Vec<(u16, u16, u16)> {
    let row_width = row_width.max(1);
    let mut placed = Vec::with_capacity(widths.len());
    let mut column: u16 = 0;
    let mut row: u16 = 0;
    for &width in widths {
        let width = width.min(row_width);
        if column > 0 && column.saturating_add(width) > row_width {
            column = 0;
            row = row.saturating_add(1);
        }
        placed.push((column, row, width));
        column = column.saturating_add(width).saturating_add(CHIP_GAP);
    }
    placed
}

/// Transient render wrapper for one filter group.
pub struct FilterBar<'a, T> {
    state: &'a mut FilterBarState,
    title: &'a str,
    options: &'a [Choice<T>],
    selected: &'a Choice<T>,
    focused: bool,
}

impl<'a, T> FilterBar<'a, T> {
    pub fn new(
        state: &'a mut FilterBarState,
        title: &'a str,
        options: &'a [Choice<T>],
        selected: &'a Choice<T>,
        focused: bool,
    ) -> Self {
        Self {
            state,
            title,
            options,
            selected,
            focused,
        }
    }
}

impl<T: Display> FilterBar<'_, T> {
    fn chip_widths(&self) -> Vec<u16> {
        self.options
            .iter()
            .map(|option| rows(chip_label(option).width()))
            .collect()
    }
}

impl<T: Display> Measure for FilterBar<'_, T> {
    fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD);
        let chip_rows = flow_chips(&self.chip_widths(), inner)
            .last()
            .map_or(1, |&(_, row, _)| row.saturating_add(1));
        chip_rows.saturating_add(VERTICAL_OVERHEAD)
    }
}

impl<T: Display + PartialEq> Component for FilterBar<'_, T> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let title_style = if self.focused {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        let block = Block::bordered()
            .title(Span::styled(format!(" {} ", self.title), title_style))
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.state.chip_areas.clear();
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let placements = flow_chips(&self.chip_widths(), inner.width);
        for (option, (column, row, width)) in self.options.iter().zip(placements) {
            // Only reachable when the terminal is shorter than `height()` asked for
            if row >= inner.height {
                break;
            }

            let style = if option == self.selected {
                Style::default()
                    .bg(ACCENT)
                    .fg(CREAM)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(ACCENT)
            };

            let chip = Rect::new(inner.x + column, inner.y + row, width, 1);
            frame.render_widget(Span::styled(chip_label(option), style), chip);
            self.state.chip_areas.push(chip);
        }
    }
}
