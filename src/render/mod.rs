// src/render/mod.rs

//! Output renderers for a [`FeedDocument`].

pub mod json;
pub mod text;

use std::io::Write;

use crate::error::Result;
use crate::models::FeedDocument;

/// Renderer selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Framed human-readable text
    #[default]
    Text,
    /// Structured JSON document
    Json,
}

impl OutputFormat {
    pub fn render<W: Write>(&self, document: &FeedDocument, out: &mut W) -> Result<()> {
        match self {
            OutputFormat::Json => {
                log::info!("Printing JSON");
                json::write_document(document, out)
            }
            OutputFormat::Text => {
                log::info!("Printing formatted output");
                text::write_document(document, out)
            }
        }
    }
}
