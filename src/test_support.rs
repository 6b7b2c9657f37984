//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::api::{FetchError, Joke, JokeSource};

/// A source for tests that never touch the network.
pub struct NoopSource;

#[async_trait]
impl JokeSource for NoopSource {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_joke(&self) -> Result<Joke, FetchError> {
        Ok(Joke::new("noop", "Chuck Norris does not need a network."))
    }
}

/// Creates a test App with a NoopSource and a batch size of 3.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopSource), 3)
}
