// src/models/selectors.rs

//! CSS selectors for extracting an article page.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::utils::parse_selector;

/// CSS selectors describing the layout of an article page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSelectors {
    /// Optional cover figure shown above the title
    #[serde(default = "defaults::cover")]
    pub cover: String,

    /// Image element inside a cover or body figure
    #[serde(default = "defaults::image")]
    pub image: String,

    /// Container holding the article title
    #[serde(default = "defaults::title")]
    pub title: String,

    /// Container whose direct children form the article body
    #[serde(default = "defaults::body")]
    pub body: String,

    /// Body child holding an image
    #[serde(default = "defaults::figure")]
    pub figure: String,

    /// Body child wrapping an embedded tweet
    #[serde(default = "defaults::tweet")]
    pub tweet: String,

    /// Anchor inside a tweet wrapper
    #[serde(default = "defaults::anchor")]
    pub anchor: String,
}

impl Default for ArticleSelectors {
    fn default() -> Self {
        Self {
            cover: defaults::cover(),
            image: defaults::image(),
            title: defaults::title(),
            body: defaults::body(),
            figure: defaults::figure(),
            tweet: defaults::tweet(),
            anchor: defaults::anchor(),
        }
    }
}

impl ArticleSelectors {
    /// Check that every selector parses.
    pub fn validate(&self) -> Result<()> {
        for selector in [
            &self.cover,
            &self.image,
            &self.title,
            &self.body,
            &self.figure,
            &self.tweet,
            &self.anchor,
        ] {
            parse_selector(selector)?;
        }
        Ok(())
    }
}

mod defaults {
    pub fn cover() -> String {
        "figure.caas-cover".into()
    }
    pub fn image() -> String {
        "img".into()
    }
    pub fn title() -> String {
        "header.caas-title-wrapper".into()
    }
    pub fn body() -> String {
        "div.caas-body".into()
    }
    pub fn figure() -> String {
        "figure".into()
    }
    pub fn tweet() -> String {
        "div.twitter-tweet-wrapper".into()
    }
    pub fn anchor() -> String {
        "a".into()
    }
}
