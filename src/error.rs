// src/error.rs

//! Unified error handling for the reader.

use std::error::Error as _;
use std::fmt;

use thiserror::Error;

/// Result type alias for reader operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// An image-like element has neither a primary nor a fallback source
    #[error("Required <{element}> attribute {attributes} not found")]
    MissingSourceAttribute { element: String, attributes: String },

    /// The article page lacks an expected container
    #[error("Expected '{selector}' element wasn't found during article parsing")]
    RequiredElementMissing { selector: String },

    /// The feed document failed format validation
    #[error("Unable to parse provided URL ({0})")]
    FeedFormat(String),

    /// No cached result exists for the requested date
    #[error("No cached news found for {0}")]
    NotCached(String),

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Raw feed XML scan failed
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// CSS selector parsing failed
    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a missing source attribute error.
    pub fn missing_source(element: impl Into<String>, attributes: &[&str]) -> Self {
        let attributes = attributes
            .iter()
            .map(|a| format!("'{a}'"))
            .collect::<Vec<_>>()
            .join(" or ");
        Self::MissingSourceAttribute {
            element: element.into(),
            attributes,
        }
    }

    /// Create a missing element error.
    pub fn element_missing(selector: impl Into<String>) -> Self {
        Self::RequiredElementMissing {
            selector: selector.into(),
        }
    }

    /// Create a feed format error from the parser diagnostic.
    pub fn feed_format(message: impl fmt::Display) -> Self {
        Self::FeedFormat(message.to_string())
    }

    /// Create a selector parsing error.
    pub fn selector(selector: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Name of the error kind, used as the prefix of the failure report.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingSourceAttribute { .. } => "MissingSourceAttribute",
            Self::RequiredElementMissing { .. } => "RequiredElementMissing",
            Self::FeedFormat(_) => "FeedFormatError",
            Self::NotCached(_) => "NotCached",
            Self::Io(_) => "IoError",
            Self::Http(_) => "HttpError",
            Self::Json(_) => "JsonError",
            Self::Toml(_) => "TomlError",
            Self::Xml(_) => "XmlError",
            Self::Url(_) => "UrlError",
            Self::Selector { .. } => "SelectorError",
            Self::Config(_) => "ConfigError",
            Self::Validation(_) => "ValidationError",
        }
    }
}

/// Build the single line logged when a run fails.
///
/// With `with_trace` set, the chain of underlying causes is appended,
/// one per line.
pub fn failure_report(err: &AppError, with_trace: bool) -> String {
    let mut report = format!("{}: {}", err.kind(), err);
    if with_trace {
        let mut source = err.source();
        if source.is_some() {
            report.push_str("\nCaused by:");
        }
        let mut depth = 0;
        while let Some(cause) = source {
            report.push_str(&format!("\n    {depth}: {cause}"));
            depth += 1;
            source = cause.source();
        }
    }
    report
}
