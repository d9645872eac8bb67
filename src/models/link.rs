// src/models/link.rs

//! Link references and the per-entry registry that numbers them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a registered reference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Link,
    Image,
    Tweet,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Link => "link",
            LinkKind::Image => "image",
            LinkKind::Tweet => "tweet",
        }
    }
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference discovered while processing one entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinkRef {
    /// 1-based position within the entry's registry
    pub id: usize,

    /// Target URL
    pub src: String,

    #[serde(rename = "type")]
    pub kind: LinkKind,
}

/// Ordered collection of references for a single entry.
///
/// IDs are handed out sequentially starting at 1. A registry belongs to one
/// entry's processing call; a fresh one is created per entry.
#[derive(Debug, Default)]
pub struct LinkRegistry {
    links: Vec<LinkRef>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a reference and return its ID.
    pub fn register(&mut self, src: impl Into<String>, kind: LinkKind) -> usize {
        let id = self.links.len() + 1;
        self.links.push(LinkRef {
            id,
            src: src.into(),
            kind,
        });
        id
    }

    /// Register an image and return its inline marker.
    pub fn image_marker(&mut self, src: impl Into<String>, text: &str) -> String {
        let id = self.register(src, LinkKind::Image);
        format!("[Image {id}: {text}][{id}]")
    }

    /// Register a tweet and return its inline marker.
    pub fn tweet_marker(&mut self, src: impl Into<String>) -> String {
        let id = self.register(src, LinkKind::Tweet);
        format!("[Tweet {id}][{id}]")
    }

    pub fn links(&self) -> &[LinkRef] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn into_links(self) -> Vec<LinkRef> {
        self.links
    }
}
