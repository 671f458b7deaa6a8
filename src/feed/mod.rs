//! Feed retrieval and parsing.
//!
//! This module is the loader's transport collaborator:
//!
//! - [`parser`] - Convert RSS/Atom XML into [`Entry`] values using `feed-rs`
//! - [`fetcher`] - Bounded-latency HTTP retrieval with retry and size limits
//!
//! Everything here is url-oriented; registry indices and display concerns
//! live a layer up, in `loader` and `view`.

mod fetcher;
mod parser;

pub use fetcher::{fetch_feed, FetchError};
pub use parser::{parse_entries, Entry};
