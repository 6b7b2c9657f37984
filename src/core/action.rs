//! # Actions
//!
//! Everything that can happen on the page becomes an `Action`.
//! User types into the filter? That's `Action::FilterChanged(text)`.
//! The batch comes back? That's `Action::LoadFinished(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect`
//! describing the I/O the caller has to perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{error, info};

use crate::api::{FetchError, Joke};
use crate::core::filter::filter_by_prefix;
use crate::core::state::{App, LoadStatus};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Begin the one-shot batch load.
    StartLoad,
    /// The batch finished, all-or-nothing.
    LoadFinished(Result<Vec<Joke>, FetchError>),
    /// Filter input text changed.
    FilterChanged(String),
    /// The debounce window closed; recompute the view for this text.
    ApplyFilter(String),
    Quit,
}

/// Side effects the adapter must carry out after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn the background batch fetch.
    SpawnFetch,
    /// Feed this filter text to the debouncer.
    ScheduleFilter(String),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::StartLoad => {
            if app.is_loading() {
                return Effect::None;
            }
            app.status = LoadStatus::Loading;
            app.jokes.clear();
            app.filtered.clear();
            app.status_message = "Loading...".to_string();
            Effect::SpawnFetch
        }
        Action::LoadFinished(Ok(jokes)) => {
            info!("Loaded {} jokes", jokes.len());
            app.status_message = format!("{} jokes", jokes.len());
            app.jokes = jokes;
            app.status = LoadStatus::Loaded;
            Effect::ScheduleFilter(app.filter_text.clone())
        }
        Action::LoadFinished(Err(err)) => {
            error!("Error fetching jokes: {}", err);
            app.jokes.clear();
            app.filtered.clear();
            app.status_message = "Fetch failed".to_string();
            app.status = LoadStatus::Failed(err);
            Effect::None
        }
        Action::FilterChanged(text) => {
            app.filter_text = text;
            Effect::ScheduleFilter(app.filter_text.clone())
        }
        Action::ApplyFilter(text) => {
            app.filtered = filter_by_prefix(&app.jokes, &text);
            app.status_message = if text.is_empty() {
                format!("{} jokes", app.jokes.len())
            } else {
                format!("{} of {} jokes", app.filtered.len(), app.jokes.len())
            };
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
