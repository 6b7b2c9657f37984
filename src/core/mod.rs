//! # Core Application Logic
//!
//! The joke page's business logic. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • filter / debounce    │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │    API     │
//!          │  Adapter   │                │ (reqwest)  │
//!          │ (ratatui)  │                │            │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all page state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`filter`]: Prefix filtering of the loaded jokes
//! - [`debounce`]: Trailing-edge `Debouncer`
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod state;
