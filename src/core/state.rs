//! # Application State
//!
//! Core business state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── experiences: Vec<InterviewExperience>  // last successful load
//! ├── filter: FilterSelection                // company + verdict
//! ├── options: FilterOptions                 // fixed option lists
//! ├── expanded: ExpansionMap                 // id → expanded
//! ├── load_state: LoadState                  // fetch lifecycle
//! ├── error: Option<String>                  // inline error banner
//! ├── status_message: String                 // status line text
//! └── source_label: String                   // where data comes from
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::experience::{ExperienceId, InterviewExperience};
use crate::core::expansion::ExpansionMap;
use crate::core::filter::{FilterOptions, FilterSelection};

/// Lifecycle of the one-shot list fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    Idle,
    /// Request in flight.
    Loading,
    /// Last request succeeded.
    Loaded,
    /// Last request failed, with the message shown to the user.
    Failed(String),
}

pub struct App {
    pub experiences: Vec<InterviewExperience>,
    pub filter: FilterSelection,
    pub options: FilterOptions,
    pub expanded: ExpansionMap,
    pub load_state: LoadState,
    /// Inline error banner text. Dismissable; independent of `load_state`.
    pub error: Option<String>,
    pub status_message: String,
    pub source_label: String,
}

impl App {
    pub fn new(options: FilterOptions, source_label: String) -> Self {
        Self {
            experiences: Vec::new(),
            filter: FilterSelection::default(),
            options,
            expanded: ExpansionMap::new(),
            load_state: LoadState::Idle,
            error: None,
            status_message: String::new(),
            source_label,
        }
    }

    /// Experiences passing the current filters, in source order.
    pub fn visible_experiences(&self) -> Vec<&InterviewExperience> {
        self.filter.apply(&self.experiences)
    }

    pub fn is_expanded(&self, id: &ExperienceId) -> bool {
        self.expanded.is_expanded(id)
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// "3 of 5 shown, 1 expanded" for the header.
    pub fn view_summary(&self) -> String {
        format!(
            "{} of {} shown, {} expanded",
            self.visible_experiences().len(),
            self.experiences.len(),
            self.expanded.expanded_count()
        )
    }
}
