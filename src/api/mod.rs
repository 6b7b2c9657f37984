//! # Joke API
//!
//! Everything that talks to the remote joke endpoint lives here.
//!
//! - [`types`]: the `Joke` item as it arrives on the wire
//! - [`source`]: the `JokeSource` trait and `FetchError`
//! - [`client`]: `HttpJokeSource`, the reqwest-backed source
//! - [`batch`]: `fetch_batch`, N concurrent requests joined all-or-nothing

pub mod batch;
pub mod client;
pub mod source;
pub mod types;

pub use batch::fetch_batch;
pub use client::HttpJokeSource;
pub use source::{FetchError, JokeSource};
pub use types::Joke;
