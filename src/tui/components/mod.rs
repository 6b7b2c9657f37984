//! # TUI Components
//!
//! All UI components for the joke page.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: page title and status message
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `FilterBox`: the "Filter Jokes:" input, emits `FilterEvent::Changed`
//! - `JokeTable`: scrollable one-column table over `JokeTableState`
//!
//! Each component file holds its state types, event types, rendering,
//! event handling and tests. Components receive external data as props
//! rather than reading the `App` directly.

mod title_bar;
pub use title_bar::TitleBar;

pub mod filter_box;
pub use filter_box::{FilterBox, FilterEvent};
pub mod joke_table;
pub use joke_table::{JokeTable, JokeTableState};
