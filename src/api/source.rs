use std::fmt;

use async_trait::async_trait;

use crate::core::experience::InterviewExperience;

/// Shown when a failure carries no server-provided message.
pub const GENERIC_FETCH_MESSAGE: &str = "Failed to load interview experiences";

/// Errors that can occur while fetching the experience list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Source misconfigured (bad URL).
    Config(String),
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// The request did not finish within the configured timeout.
    Timeout,
    /// Non-2xx HTTP status, with the body's `message` if it had one.
    Api { status: u16, message: Option<String> },
    /// HTTP 2xx but `success: false`.
    Rejected { message: Option<String> },
    /// The body could not be decoded.
    Parse(String),
}

impl FetchError {
    /// Text for the inline error banner: the server's message when there is
    /// one, otherwise a generic message.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Api {
                message: Some(message),
                ..
            }
            | FetchError::Rejected {
                message: Some(message),
            } if !message.trim().is_empty() => message.trim().to_string(),
            _ => GENERIC_FETCH_MESSAGE.to_string(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Timeout => write!(f, "request timed out"),
            FetchError::Api { status, message } => write!(
                f,
                "API error (HTTP {status}): {}",
                message.as_deref().unwrap_or("no message")
            ),
            FetchError::Rejected { message } => write!(
                f,
                "request rejected: {}",
                message.as_deref().unwrap_or("no message")
            ),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can produce the list of interview experiences.
#[async_trait]
pub trait ExperienceSource: Send + Sync {
    /// Short human-readable description (shown in the header).
    fn name(&self) -> &str;

    /// Fetches the full list, in the order the source returns it.
    async fn list_experiences(&self) -> Result<Vec<InterviewExperience>, FetchError>;
}
