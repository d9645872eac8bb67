// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;

use scraper::Selector;
use url::Url;

use crate::error::{AppError, Result};

/// Parse a CSS selector, mapping failures into [`AppError::Selector`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Source key of a feed URL: host (with port, if any) followed by the path.
pub fn source_key(url_str: &str) -> Result<String> {
    let url = Url::parse(url_str)?;
    let host = url.host_str().unwrap_or("");
    let key = match url.port() {
        Some(port) => format!("{}:{}{}", host, port, url.path()),
        None => format!("{}{}", host, url.path()),
    };
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.caas-body").is_ok());
        assert!(parse_selector("figure:has(img)").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(matches!(
            parse_selector("[[invalid"),
            Err(AppError::Selector { .. })
        ));
    }

    #[test]
    fn test_source_key() {
        assert_eq!(
            source_key("https://news.yahoo.com/rss/").unwrap(),
            "news.yahoo.com/rss/"
        );
        assert_eq!(
            source_key("https://news.yahoo.com/rss/?region=us").unwrap(),
            "news.yahoo.com/rss/"
        );
        assert_eq!(
            source_key("http://localhost:8080/feed.xml").unwrap(),
            "localhost:8080/feed.xml"
        );
    }

    #[test]
    fn test_source_key_rejects_relative() {
        assert!(source_key("not a url").is_err());
    }
}
