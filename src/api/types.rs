//! Wire types for the list endpoint.

use serde::{Deserialize, Serialize};

use crate::api::source::FetchError;
use crate::core::experience::InterviewExperience;

/// Body of `GET /api/v1/getInteviewExp`:
/// `{ success: boolean, data: InterviewExperience[], message?: string }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<InterviewExperience>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ListResponse {
    /// Converts the envelope into the record list or a `FetchError`.
    pub fn into_result(self) -> Result<Vec<InterviewExperience>, FetchError> {
        if !self.success {
            return Err(FetchError::Rejected {
                message: self.message,
            });
        }
        self.data
            .ok_or_else(|| FetchError::Parse("success response without a data array".to_string()))
    }
}

/// Minimal shape used to pull a `message` out of error bodies, which rarely
/// carry a well-formed `data` field.
#[derive(Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
