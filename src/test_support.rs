//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::api::{ExperienceSource, FetchError};
use crate::core::action::{Action, update};
use crate::core::experience::InterviewExperience;
use crate::core::filter::FilterOptions;
use crate::core::seed::sample_experiences;
use crate::core::state::App;

/// A source that always fails with the given error.
pub struct FailingSource(pub FetchError);

#[async_trait]
impl ExperienceSource for FailingSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn list_experiences(&self) -> Result<Vec<InterviewExperience>, FetchError> {
        Err(self.0.clone())
    }
}

/// Creates an App with default filter options and nothing loaded.
pub fn test_app() -> App {
    App::new(FilterOptions::default(), "test-source".to_string())
}

/// Creates an App that has gone through Start → ExperiencesLoaded(sample).
pub fn loaded_app() -> App {
    let mut app = test_app();
    update(&mut app, Action::Start);
    update(&mut app, Action::ExperiencesLoaded(sample_experiences()));
    app
}
