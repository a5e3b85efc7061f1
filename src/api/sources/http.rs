//! HTTP source for the backend list endpoint.
//!
//! Issues a single `GET` with a JSON content type and, when configured, the
//! user's session cookie. Both transport failures and `success: false`
//! bodies come back as `FetchError`.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::header::{CONTENT_TYPE, COOKIE};

use crate::api::source::{ExperienceSource, FetchError};
use crate::api::types::{ErrorBody, ListResponse};
use crate::core::config::DEFAULT_TIMEOUT_SECS;
use crate::core::experience::InterviewExperience;

/// Fetches experiences from a backend over HTTP.
pub struct HttpSource {
    url: String,
    session_cookie: Option<String>,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            session_cookie: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client: reqwest::Client::new(),
        }
    }

    /// Sends `cookie` verbatim in the `Cookie` header of every request.
    pub fn with_session_cookie(mut self, cookie: Option<String>) -> Self {
        self.session_cookie = cookie;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Maps a reqwest failure to our error type.
fn transport_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Network(err.to_string())
    }
}

#[async_trait]
impl ExperienceSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn list_experiences(&self) -> Result<Vec<InterviewExperience>, FetchError> {
        let url = reqwest::Url::parse(&self.url)
            .map_err(|e| FetchError::Config(format!("invalid endpoint URL '{}': {e}", self.url)))?;

        info!("GET {}", url);

        let mut request = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.timeout);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        debug!("Response: HTTP {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);
            warn!("List request failed: HTTP {} ({:?})", status, message);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ListResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;
        parsed.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let source = HttpSource::new("http://localhost:3000/list".to_string());
        assert_eq!(source.url, "http://localhost:3000/list");
        assert_eq!(source.name(), "http://localhost:3000/list");
        assert!(source.session_cookie.is_none());
        assert_eq!(source.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_builder_overrides() {
        let source = HttpSource::new("http://x/list".to_string())
            .with_session_cookie(Some("token=abc".to_string()))
            .with_timeout(Duration::from_millis(250));
        assert_eq!(source.session_cookie.as_deref(), Some("token=abc"));
        assert_eq!(source.timeout, Duration::from_millis(250));
    }

    #[tokio::test]
    async fn test_invalid_url_is_config_error() {
        let source = HttpSource::new("not a url".to_string());
        let err = source.list_experiences().await.unwrap_err();
        assert!(matches!(err, FetchError::Config(_)));
    }
}
