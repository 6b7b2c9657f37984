use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::ACCEPT;

use super::source::{FetchError, JokeSource};
use super::types::Joke;

/// Joke source backed by a plain `GET <url>` against a JSON endpoint.
pub struct HttpJokeSource {
    url: String,
    timeout: Option<Duration>,
    client: reqwest::Client,
}

impl HttpJokeSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
            client: reqwest::Client::new(),
        }
    }

    /// Applies a per-request timeout. A request that exceeds it fails as a
    /// network error.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl JokeSource for HttpJokeSource {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_joke(&self) -> Result<Joke, FetchError> {
        let mut request = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json");
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        debug!("GET {} -> {}", self.url, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Joke endpoint returned HTTP {}", status);
            return Err(FetchError::Status {
                status,
                url: self.url.clone(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<Joke>(&body).map_err(|e| {
            warn!("Malformed joke body ({} bytes): {}", body.len(), e);
            FetchError::Parse(e.to_string())
        })
    }
}
