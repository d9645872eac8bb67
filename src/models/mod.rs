// src/models/mod.rs

//! Domain models for the reader.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod feed;
mod link;
mod selectors;

// Re-export all public types
pub use config::{Config, ExtractionRule, HttpConfig};
pub use feed::{FeedDocument, FeedItem};
pub use link::{LinkKind, LinkRef, LinkRegistry};
pub use selectors::ArticleSelectors;
