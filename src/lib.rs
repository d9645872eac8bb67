// src/lib.rs

//! RSS Reader Library
//!
//! Fetches an RSS/Atom feed, turns each entry into a [`models::FeedItem`]
//! with numbered link references and renders the result as framed text or
//! JSON. Feeds from configured sources also get their article pages
//! extracted.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod services;
pub mod utils;
