// src/pipeline/mod.rs

//! Pipeline entry points for reader operations.
//!
//! - `run_reader`: Fetch a feed, process its entries and render the result

pub mod read;

pub use read::{FeedReader, effective_limit, parse_feed, run_reader};
