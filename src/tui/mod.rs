//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Lifecycle
//!
//! `Action::Start` is dispatched once before the first frame. When it asks
//! for `Effect::SpawnFetch`, the list request runs as a tokio task and sends
//! its outcome back through an mpsc channel, which the loop drains every
//! iteration. The task's abort handle is kept so a request still in flight
//! when the user quits is cancelled instead of completing into a dead state.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or fetch results.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{ExperienceSource, HttpSource, SampleSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::filter::FilterOptions;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::filter_bar::step_choice;
use crate::tui::components::{ExperienceListState, FilterBarState, ListEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which filter bar Left/Right act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterFocus {
    #[default]
    Company,
    Verdict,
}

impl FilterFocus {
    pub fn toggle(self) -> Self {
        match self {
            FilterFocus::Company => FilterFocus::Verdict,
            FilterFocus::Verdict => FilterFocus::Company,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: FilterFocus,
    pub company_bar: FilterBarState,
    pub verdict_bar: FilterBarState,
    pub list: ExperienceListState,
    pub spinner_frame: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            focus: FilterFocus::default(),
            company_bar: FilterBarState::new(),
            verdict_bar: FilterBarState::new(),
            list: ExperienceListState::new(),
            spinner_frame: 0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the experience source: the built-in sample when offline, the HTTP
/// endpoint otherwise.
pub fn build_source(config: &ResolvedConfig, offline: bool) -> Arc<dyn ExperienceSource> {
    if offline {
        info!("Offline mode: serving built-in sample experiences");
        return Arc::new(SampleSource::new());
    }
    Arc::new(
        HttpSource::new(config.endpoint_url.clone())
            .with_session_cookie(config.session_cookie.clone())
            .with_timeout(config.timeout),
    )
}

pub fn run(config: ResolvedConfig, source: Arc<dyn ExperienceSource>) -> std::io::Result<()> {
    let mut app = App::new(
        FilterOptions::new(&config.companies),
        source.name().to_string(),
    );
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from the fetch task
    let (tx, rx) = mpsc::channel();

    let mut fetch_handle: Option<tokio::task::AbortHandle> = None;
    if update(&mut app, Action::Start) == Effect::SpawnFetch {
        fetch_handle = Some(spawn_fetch(source.clone(), tx.clone()));
    }

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true;

    let result = loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) == Effect::Quit {
                should_quit = true;
                break;
            }
        }
        if should_quit {
            break Ok(());
        }

        // Handle background task actions (fetch outcome)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut app, action);
            tui.list.clamp_cursor(app.visible_experiences().len());
        }
    };

    if let Some(handle) = fetch_handle
        && !handle.is_finished()
    {
        info!("Aborting in-flight fetch on exit");
        handle.abort();
    }

    ratatui::restore();
    result
}

/// Routes one terminal event to the filter bars, the list, or the core.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            tui.focus = tui.focus.toggle();
            Effect::None
        }
        TuiEvent::DismissError => update(app, Action::DismissError),
        TuiEvent::Left => step_filter(app, tui, -1),
        TuiEvent::Right => step_filter(app, tui, 1),
        TuiEvent::MouseClick(column, row) => handle_click(app, tui, column, row),
        other => match tui.list.handle_event(&other) {
            Some(ListEvent::Toggle(index)) => toggle_visible(app, index),
            None => Effect::None,
        },
    }
}

/// Moves the focused filter one option left or right.
fn step_filter(app: &mut App, tui: &mut TuiState, delta: isize) -> Effect {
    let action = match tui.focus {
        FilterFocus::Company => step_choice(&app.options.companies, &app.filter.company, delta)
            .map(Action::SelectCompany),
        FilterFocus::Verdict => step_choice(&app.options.verdicts, &app.filter.verdict, delta)
            .map(Action::SelectVerdict),
    };
    let Some(action) = action else {
        return Effect::None;
    };
    let effect = update(app, action);
    tui.list.clamp_cursor(app.visible_experiences().len());
    effect
}

fn handle_click(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> Effect {
    if let Some(index) = tui.company_bar.hit_test(column, row) {
        tui.focus = FilterFocus::Company;
        let Some(choice) = app.options.companies.get(index).cloned() else {
            return Effect::None;
        };
        let effect = update(app, Action::SelectCompany(choice));
        tui.list.clamp_cursor(app.visible_experiences().len());
        return effect;
    }

    if let Some(index) = tui.verdict_bar.hit_test(column, row) {
        tui.focus = FilterFocus::Verdict;
        let Some(choice) = app.options.verdicts.get(index).cloned() else {
            return Effect::None;
        };
        let effect = update(app, Action::SelectVerdict(choice));
        tui.list.clamp_cursor(app.visible_experiences().len());
        return effect;
    }

    if let Some(index) = tui.list.hit_test(column, row) {
        tui.list.selected = index;
        return toggle_visible(app, index);
    }

    Effect::None
}

/// Toggles the card at `index` in the current filtered view.
fn toggle_visible(app: &mut App, index: usize) -> Effect {
    let Some(id) = app.visible_experiences().get(index).map(|exp| exp.id.clone()) else {
        warn!("Toggle for index {} outside the visible list", index);
        return Effect::None;
    };
    update(app, Action::ToggleExpanded(id))
}

fn spawn_fetch(
    source: Arc<dyn ExperienceSource>,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning list fetch from {}", source.name());
    let handle = tokio::spawn(async move {
        let action = fetch_action(source.as_ref()).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver fetch result: receiver dropped");
        }
    });
    handle.abort_handle()
}

/// Runs the fetch and turns its outcome into the action for `update()`.
pub async fn fetch_action(source: &dyn ExperienceSource) -> Action {
    match source.list_experiences().await {
        Ok(experiences) => Action::ExperiencesLoaded(experiences),
        Err(e) => {
            warn!("Fetch from {} failed: {}", source.name(), e);
            Action::FetchFailed(e.user_message())
        }
    }
}
