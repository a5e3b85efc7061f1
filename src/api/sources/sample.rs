//! Offline source serving the built-in sample records.

use async_trait::async_trait;

use crate::api::source::{ExperienceSource, FetchError};
use crate::core::experience::InterviewExperience;
use crate::core::seed::sample_experiences;

/// Serves a fixed list without touching the network.
pub struct SampleSource {
    experiences: Vec<InterviewExperience>,
}

impl SampleSource {
    pub fn new() -> Self {
        Self::with_experiences(sample_experiences())
    }

    pub fn with_experiences(experiences: Vec<InterviewExperience>) -> Self {
        Self { experiences }
    }
}

impl Default for SampleSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExperienceSource for SampleSource {
    fn name(&self) -> &str {
        "offline sample"
    }

    async fn list_experiences(&self) -> Result<Vec<InterviewExperience>, FetchError> {
        Ok(self.experiences.clone())
    }
}
