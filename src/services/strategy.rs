// src/services/strategy.rs

//! Extraction strategy selection.
//!
//! Decides, per feed source, whether entries get full article extraction and
//! with which selectors.

use crate::models::{ArticleSelectors, ExtractionRule};
use crate::utils::source_key;

/// Service mapping feed sources to article extraction selectors.
pub struct StrategySelector<'a> {
    rules: &'a [ExtractionRule],
}

impl<'a> StrategySelector<'a> {
    pub fn new(rules: &'a [ExtractionRule]) -> Self {
        Self { rules }
    }

    /// Selectors for the given feed URL, or `None` if its entries are read
    /// from the feed alone.
    pub fn select(&self, feed_url: &str) -> Option<&'a ArticleSelectors> {
        let key = match source_key(feed_url) {
            Ok(key) => key,
            Err(e) => {
                log::debug!("Cannot derive source key from {}: {}", feed_url, e);
                return None;
            }
        };

        self.rules.iter().find_map(|rule| {
            if rule.source == key {
                log::debug!("Matched extraction rule '{}'", rule.source);
                Some(&rule.selectors)
            } else {
                None
            }
        })
    }
}
