// src/models/feed.rs

//! Normalized feed document produced by a run.

use serde::{Deserialize, Serialize};

use super::LinkRef;

/// One processed feed entry.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,

    /// Publication time, e.g. `Mon, 19 Sep 2022 20:49:19 +0000`
    pub date: String,

    pub link: String,

    /// Feed-supplied media markers followed by the summary text
    pub summary: String,

    /// Text transcript of the article page, empty when not extracted
    pub article_content: String,

    pub links: Vec<LinkRef>,
}

/// The result of reading one feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedDocument {
    /// Feed title
    pub feed: String,

    /// Source feed URL
    pub url: String,

    pub items: Vec<FeedItem>,
}
