//! Single-shot HTTP GET used by every remote corpus
//!
//! One request per resource, no retry. Non-success statuses are errors.

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when pulling content from the remote source
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed
    #[error("HTTP request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("HTTP request to {url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// The payload does not have the expected shape
    #[error("Malformed content from {url}: {reason}")]
    Malformed { url: String, reason: String },
}

/// Thin wrapper around a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a Fetcher with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and returns the response body as text
    ///
    /// # Returns
    /// * `Ok(String)` - The body of a 2xx response
    /// * `Err(FetchError::Transport)` - Network failure or unreadable body
    /// * `Err(FetchError::Status)` - Any non-2xx status
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_text_returns_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/hello.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Hello"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::new();
        let body = fetcher
            .get_text(&format!("{}/hello.md", mock_server.uri()))
            .await
            .expect("fetch should succeed");

        assert_eq!(body, "# Hello");
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn test_get_text_reports_non_success_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let fetcher = Fetcher::new();
        let err = fetcher
            .get_text(&format!("{}/missing.md", mock_server.uri()))
            .await
            .unwrap_err();

        match err {
            FetchError::Status { status, url } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert!(url.ends_with("/missing.md"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_get_text_reports_transport_failure() {
        let fetcher = Fetcher::new();
        // Port 9 (discard) on localhost is not expected to accept HTTP
        let err = fetcher.get_text("http://127.0.0.1:9/all.json").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
