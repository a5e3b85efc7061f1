//! # Actions
//!
//! Everything that can happen in the app becomes an `Action`.
//! User picks "Google" in the Company bar? That's `Action::SelectCompany`.
//! The list request comes back? That's `Action::ExperiencesLoaded(records)`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns an `Effect` telling the adapter what I/O to do.
//! No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::experience::{ExperienceId, InterviewExperience, Verdict};
use crate::core::filter::Choice;
use crate::core::state::{App, LoadState};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The view is up. Requests the one-shot fetch.
    Start,
    SelectCompany(Choice<String>),
    SelectVerdict(Choice<Verdict>),
    ToggleExpanded(ExperienceId),
    ExperiencesLoaded(Vec<InterviewExperience>),
    FetchFailed(String),
    DismissError,
    Quit,
}

/// Side effects the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SpawnFetch,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Start => {
            if app.load_state != LoadState::Idle {
                debug!("Ignoring Start: fetch already issued ({:?})", app.load_state);
                return Effect::None;
            }
            app.load_state = LoadState::Loading;
            app.status_message = format!("Loading from {}", app.source_label);
            Effect::SpawnFetch
        }
        Action::SelectCompany(choice) => {
            if !app.options.has_company(&choice) {
                warn!("Ignoring unknown company option: {}", choice);
                return Effect::None;
            }
            debug!("Company filter: {}", choice);
            app.filter.company = choice;
            Effect::None
        }
        Action::SelectVerdict(choice) => {
            if !app.options.has_verdict(&choice) {
                warn!("Ignoring unknown verdict option: {}", choice);
                return Effect::None;
            }
            debug!("Verdict filter: {}", choice);
            app.filter.verdict = choice;
            Effect::None
        }
        Action::ToggleExpanded(id) => {
            let expanded = app.expanded.toggle(&id);
            debug!("Toggled {} → expanded={}", id, expanded);
            Effect::None
        }
        Action::ExperiencesLoaded(experiences) => {
            if app.load_state != LoadState::Loading {
                warn!("Dropping late fetch result ({:?})", app.load_state);
                return Effect::None;
            }
            info!("Loaded {} interview experiences", experiences.len());
            app.status_message = format!("{} experiences loaded", experiences.len());
            app.experiences = experiences;
            app.load_state = LoadState::Loaded;
            app.error = None;
            Effect::None
        }
        Action::FetchFailed(message) => {
            if app.load_state != LoadState::Loading {
                warn!("Dropping late fetch failure ({:?})", app.load_state);
                return Effect::None;
            }
            warn!("Fetch failed: {}", message);
            app.status_message = "Load failed".to_string();
            app.load_state = LoadState::Failed(message.clone());
            app.error = Some(message);
            Effect::None
        }
        Action::DismissError => {
            app.error = None;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::seed::sample_experiences;
    use crate::test_support::{loaded_app, test_app};

    #[test]
    fn test_start_spawns_fetch_once() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Start), Effect::SpawnFetch);
        assert!(app.is_loading());
        assert_eq!(update(&mut app, Action::Start), Effect::None);
    }

    #[test]
    fn test_start_after_load_does_not_refetch() {
        let mut app = loaded_app();
        assert_eq!(update(&mut app, Action::Start), Effect::None);
        assert_eq!(app.load_state, LoadState::Loaded);
    }

    #[test]
    fn test_successful_load_replaces_list_in_order() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        let mut records = sample_experiences();
        records.reverse();
        update(&mut app, Action::ExperiencesLoaded(records.clone()));
        assert_eq!(app.experiences, records);
        assert_eq!(app.load_state, LoadState::Loaded);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_failure_keeps_list_and_sets_error() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(&mut app, Action::FetchFailed("Server down".to_string()));
        assert!(app.experiences.is_empty());
        assert_eq!(app.load_state, LoadState::Failed("Server down".to_string()));
        assert_eq!(app.error.as_deref(), Some("Server down"));
    }

    #[test]
    fn test_failure_after_load_is_dropped() {
        let mut app = loaded_app();
        let before = app.experiences.clone();
        update(&mut app, Action::FetchFailed("late".to_string()));
        assert_eq!(app.experiences, before);
        assert!(app.error.is_none());
    }

    #[test]
    fn test_late_result_is_dropped() {
        let mut app = test_app();
        update(&mut app, Action::ExperiencesLoaded(sample_experiences()));
        assert!(app.experiences.is_empty());
        assert_eq!(app.load_state, LoadState::Idle);
    }

    #[test]
    fn test_dismiss_error_keeps_failed_state() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(&mut app, Action::FetchFailed("boom".to_string()));
        update(&mut app, Action::DismissError);
        assert!(app.error.is_none());
        assert!(matches!(app.load_state, LoadState::Failed(_)));
    }

    #[test]
    fn test_select_company_does_not_touch_verdict() {
        let mut app = loaded_app();
        update(&mut app, Action::SelectVerdict(Choice::Only(Verdict::Selected)));
        update(&mut app, Action::SelectCompany(Choice::Only("Meta".to_string())));
        assert_eq!(app.filter.verdict, Choice::Only(Verdict::Selected));
        assert_eq!(app.filter.company, Choice::Only("Meta".to_string()));
        assert_eq!(app.visible_experiences().len(), 1);
    }

    #[test]
    fn test_unknown_company_option_is_ignored() {
        let mut app = loaded_app();
        update(&mut app, Action::SelectCompany(Choice::Only("Initech".to_string())));
        assert_eq!(app.filter.company, Choice::All);
    }

    #[test]
    fn test_unknown_verdict_option_is_ignored() {
        let mut app = loaded_app();
        let other = Choice::Only(Verdict::Other("Ghosted".to_string()));
        update(&mut app, Action::SelectVerdict(other));
        assert_eq!(app.filter.verdict, Choice::All);
    }

    #[test]
    fn test_toggle_only_affects_target() {
        let mut app = loaded_app();
        let target = ExperienceId::from(3);
        update(&mut app, Action::ToggleExpanded(target.clone()));
        assert!(app.is_expanded(&target));
        for exp in &app.experiences {
            if exp.id != target {
                assert!(!app.is_expanded(&exp.id));
            }
        }
    }

    #[test]
    fn test_expansion_survives_filter_changes() {
        let mut app = loaded_app();
        let id = ExperienceId::from(1);
        update(&mut app, Action::ToggleExpanded(id.clone()));
        update(&mut app, Action::SelectCompany(Choice::Only("Amazon".to_string())));
        update(&mut app, Action::SelectCompany(Choice::All));
        assert!(app.is_expanded(&id));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
