//! # Application State
//!
//! Core business state for the joke page. No TUI-specific types here;
//! presentation state (scroll offsets, the filter input buffer) lives in
//! the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn JokeSource>  // where jokes come from
//! ├── joke_count: usize            // batch size N
//! ├── status: LoadStatus           // idle / loading / loaded / failed
//! ├── jokes: Vec<Joke>             // the loaded collection, set once per load
//! ├── filter_text: String          // current filter input
//! ├── filtered: Vec<Joke>          // derived view, recomputed after debounce
//! └── status_message: String       // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::api::{FetchError, Joke, JokeSource};
use crate::core::config::ResolvedConfig;

/// Where the page is in its single load cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(FetchError),
}

pub struct App {
    pub source: Arc<dyn JokeSource>,
    pub joke_count: usize,
    pub status: LoadStatus,
    pub jokes: Vec<Joke>,
    pub filter_text: String,
    pub filtered: Vec<Joke>,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn JokeSource>, joke_count: usize) -> Self {
        Self {
            source,
            joke_count,
            status: LoadStatus::Idle,
            jokes: Vec::new(),
            filter_text: String::new(),
            filtered: Vec::new(),
            status_message: String::new(),
        }
    }

    pub fn from_config(source: Arc<dyn JokeSource>, config: &ResolvedConfig) -> Self {
        Self::new(source, config.joke_count)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded)
    }
}
