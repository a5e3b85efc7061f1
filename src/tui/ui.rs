use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::App;
use crate::tui::component::{Component, Measure};
use crate::tui::components::{ErrorBanner, ExperienceList, FilterBar, Header};
use crate::tui::{FilterFocus, TuiState};

const HELP_TEXT: &str =
    " Tab switch filter  ←/→ choose  ↑/↓ move  Space expand  x dismiss error  q quit ";

/// Measured heights of the variable rows. A zero banner means no banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeights {
    pub company_bar: u16,
    pub verdict_bar: u16,
    pub banner: u16,
}

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAreas {
    pub header: Rect,
    pub company_bar: Rect,
    pub verdict_bar: Rect,
    pub banner: Option<Rect>,
    pub list: Rect,
    pub help: Rect,
}

pub fn layout_areas(area: Rect, heights: SectionHeights) -> UiAreas {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(2),
        Length(heights.company_bar),
        Length(heights.verdict_bar),
        Length(heights.banner),
        Min(0),
        Length(1),
    ]);
    let [header, company_bar, verdict_bar, banner, list, help] = layout.areas(area);
    UiAreas {
        header,
        company_bar,
        verdict_bar,
        banner: (heights.banner > 0).then_some(banner),
        list,
        help,
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let width = frame.area().width;

    let mut company_bar = FilterBar::new(
        &mut tui.company_bar,
        "Company",
        &app.options.companies,
        &app.filter.company,
        tui.focus == FilterFocus::Company,
    );
    let mut verdict_bar = FilterBar::new(
        &mut tui.verdict_bar,
        "Result",
        &app.options.verdicts,
        &app.filter.verdict,
        tui.focus == FilterFocus::Verdict,
    );
    let mut banner = app.error.as_deref().map(ErrorBanner::new);

    let areas = layout_areas(
        frame.area(),
        SectionHeights {
            company_bar: company_bar.height(width),
            verdict_bar: verdict_bar.height(width),
            banner: banner.as_ref().map_or(0, |b| b.height(width)),
        },
    );

    let visible = app.visible_experiences();

    Header::new(
        app.status_message.clone(),
        app.source_label.clone(),
        app.view_summary(),
    )
    .render(frame, areas.header);

    company_bar.render(frame, areas.company_bar);
    verdict_bar.render(frame, areas.verdict_bar);

    if let (Some(banner), Some(banner_area)) = (banner.as_mut(), areas.banner) {
        banner.render(frame, banner_area);
    }

    ExperienceList::new(
        &mut tui.list,
        &visible,
        &app.expanded,
        &app.load_state,
        app.experiences.len(),
        tui.spinner_frame,
    )
    .render(frame, areas.list);

    frame.render_widget(
        Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray))),
        areas.help,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::experience::Verdict;
    use crate::core::filter::Choice;
    use crate::test_support::{loaded_app, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    const ONE_ROW_BARS: SectionHeights = SectionHeights {
        company_bar: 3,
        verdict_bar: 3,
        banner: 0,
    };

    #[test]
    fn test_layout_without_error_has_no_banner() {
        let areas = layout_areas(Rect::new(0, 0, 80, 40), ONE_ROW_BARS);
        assert!(areas.banner.is_none());
        assert_eq!(areas.header.height, 2);
        assert_eq!(areas.company_bar.y, 2);
        assert_eq!(areas.verdict_bar.y, 5);
        assert_eq!(areas.list.y, 8);
        assert_eq!(areas.help.y, 39);
    }

    #[test]
    fn test_layout_with_error_pushes_list_down() {
        let heights = SectionHeights {
            banner: 4,
            ..ONE_ROW_BARS
        };
        let areas = layout_areas(Rect::new(0, 0, 80, 40), heights);
        assert_eq!(areas.banner, Some(Rect::new(0, 8, 80, 4)));
        assert_eq!(areas.list.y, 12);
    }

    #[test]
    fn test_layout_grows_wrapped_filter_bar() {
        let heights = SectionHeights {
            company_bar: 5,
            ..ONE_ROW_BARS
        };
        let areas = layout_areas(Rect::new(0, 0, 30, 40), heights);
        assert_eq!(areas.company_bar.height, 5);
        assert_eq!(areas.verdict_bar.y, 7);
        assert_eq!(areas.list.y, 10);
    }

    #[test]
    fn test_narrow_terminal_shows_selected_company() {
        let backend = TestBackend::new(30, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = loaded_app();
        update(&mut app, Action::SelectCompany(Choice::Only("Netflix".to_string())));
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        assert_eq!(tui.company_bar.chip_areas.len(), app.options.companies.len());
        let netflix = tui.company_bar.chip_areas[5];
        assert_eq!(tui.company_bar.hit_test(netflix.x, netflix.y), Some(5));
        assert!(screen_text(&terminal).contains("Alex Rodriguez"));
    }

    #[test]
    fn test_long_error_message_is_shown_whole() {
        let backend = TestBackend::new(40, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(
            &mut app,
            Action::FetchFailed(
                "The interview service is down for scheduled maintenance until noon".to_string(),
            ),
        );
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("maintenance"));
        assert!(text.contains("noon"));
    }

    #[test]
    fn test_draw_loaded_app() {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = loaded_app();
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Interview Experiences"));
        assert!(text.contains("Company"));
        assert!(text.contains("Result"));
        assert!(text.contains("John Doe"));
        assert!(text.contains("Alex Rodriguez"));
        assert_eq!(tui.company_bar.chip_areas.len(), 6);
        assert_eq!(tui.verdict_bar.chip_areas.len(), 4);
    }

    #[test]
    fn test_draw_failed_fetch_shows_banner() {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(&mut app, Action::FetchFailed("Unauthorized".to_string()));
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Unauthorized"));
        assert!(text.contains("could not be loaded"));
    }

    #[test]
    fn test_filtered_view_renders_only_matches() {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = loaded_app();
        update(&mut app, Action::SelectVerdict(Choice::Only(Verdict::Rejected)));
        let mut tui = TuiState::new();
        terminal.draw(|f| draw_ui(f, &app, &mut tui)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Mike Johnson"));
        assert!(!text.contains("John Doe"));
        assert!(!text.contains("Sarah Chen"));
    }
}
