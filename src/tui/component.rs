//! Traits shared by every widget in `components/`.
//!
//! Cards, filter bars and the error banner all wrap to the terminal width,
//! so their row count is only known once the width is. `Measure` lets the
//! layout ask before anything is drawn.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a `Rect`.
///
/// Props arrive as struct fields; persistent state is borrowed as
/// `&mut State` and may be updated while drawing (card heights, chip hit
/// boxes, scroll offsets), hence `&mut self`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Rows a component needs at a given outer width.
///
/// Implementations saturate at `u16::MAX` instead of overflowing.
pub trait Measure {
    fn height(&self, width: u16) -> u16;
}

/// A component that turns low-level `TuiEvent`s into its own events.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}

/// Converts a count to rows, saturating at `u16::MAX`.
pub fn rows(count: usize) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_saturates() {
        assert_eq!(rows(0), 0);
        assert_eq!(rows(42), 42);
        assert_eq!(rows(usize::from(u16::MAX)), u16::MAX);
        assert_eq!(rows(70_000), u16::MAX);
    }
}
