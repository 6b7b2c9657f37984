//! # Batch Fetch
//!
//! Issues `count` requests against one source at once and joins on all of
//! them before looking at any result.
//!
//! ```text
//!   fetch_joke ─┐
//!   fetch_joke ─┼─ join_all ──► all Ok?  ──► Ok(Vec<Joke>)   (request order)
//!   fetch_joke ─┘               any Err? ──► Err(first error in request order)
//! ```
//!
//! The join waits for every request, so nothing in flight is cancelled when
//! one of them fails. A failed batch never exposes the jokes that did load.

use futures::future::join_all;
use log::{info, warn};

use super::source::{FetchError, JokeSource};
use super::types::Joke;

/// Fetch `count` jokes concurrently from `source`, all-or-nothing.
pub async fn fetch_batch(source: &dyn JokeSource, count: usize) -> Result<Vec<Joke>, FetchError> {
    info!("Fetching {} jokes from {} source", count, source.name());

    let requests = (0..count).map(|_| source.fetch_joke());
    let results = join_all(requests).await;

    let failures = results.iter().filter(|r| r.is_err()).count();
    if failures > 0 {
        warn!("{} of {} joke requests failed", failures, count);
    }

    let jokes = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    info!("Fetched {} jokes", jokes.len());
    Ok(jokes)
}
