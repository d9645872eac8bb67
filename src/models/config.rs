// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

use super::ArticleSelectors;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Feed sources whose entries get full article extraction
    #[serde(default = "defaults::extraction_rules")]
    pub extraction: Vec<ExtractionRule>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        for rule in &self.extraction {
            if rule.source.trim().is_empty() {
                return Err(AppError::validation("extraction rule with empty source"));
            }
            rule.selectors.validate()?;
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            extraction: defaults::extraction_rules(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Maps a feed source to the selectors used to extract its article pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionRule {
    /// Feed URL host and path, e.g. `news.yahoo.com/rss/`
    pub source: String,

    #[serde(default)]
    pub selectors: ArticleSelectors,
}

mod defaults {
    use super::{ArticleSelectors, ExtractionRule};

    pub fn user_agent() -> String {
        format!("Mozilla/5.0 (compatible; rss_reader/{})", env!("CARGO_PKG_VERSION"))
    }
    pub fn timeout() -> u64 {
        30
    }

    pub fn extraction_rules() -> Vec<ExtractionRule> {
        vec![ExtractionRule {
            source: "news.yahoo.com/rss/".to_string(),
            selectors: ArticleSelectors::default(),
        }]
    }
}
