use std::fmt;

use async_trait::async_trait;

use super::types::Joke;

/// Errors that can occur while fetching jokes.
///
/// The page shows every variant the same way; the detail only goes to the log.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The endpoint answered with a non-success HTTP status.
    Status { status: u16, url: String },
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The body was not a valid joke.
    Parse(String),
    /// Anything else, e.g. the fetch task panicked or was dropped.
    Unknown(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Status { status, url } => {
                write!(f, "fetch failed with status {status} ({url})")
            }
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
            FetchError::Unknown(msg) => write!(f, "unknown error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else if err.is_connect() || err.is_timeout() || err.is_request() {
            FetchError::Network(err.to_string())
        } else {
            FetchError::Unknown(err.to_string())
        }
    }
}

/// Anything that can hand out a single joke.
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// Fetches one joke.
    async fn fetch_joke(&self) -> Result<Joke, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_includes_code() {
        let err = FetchError::Status {
            status: 503,
            url: "http://localhost/jokes/random".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fetch failed with status 503 (http://localhost/jokes/random)"
        );
    }

    #[test]
    fn test_parse_display() {
        let err = FetchError::Parse("expected value".to_string());
        assert_eq!(err.to_string(), "parse error: expected value");
    }
}
