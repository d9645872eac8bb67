// src/services/images.rs

//! Image attribute extraction.

use scraper::{ElementRef, Html};

use crate::error::{AppError, Result};

const PRIMARY_SOURCE: &str = "src";
const LAZY_SOURCE: &str = "data-src";

/// Display text and source URL of an image element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttrs {
    pub alt: String,
    pub src: String,
}

/// Resolve the alt text and source of an image-like element.
///
/// Markup inside `alt` is reduced to its text. The source is `src`, falling
/// back to the lazy-load `data-src`.
pub fn extract_image_attrs(img: ElementRef<'_>) -> Result<ImageAttrs> {
    let element = img.value();

    let alt = element.attr("alt").map(markup_to_text).unwrap_or_default();
    let src = element
        .attr(PRIMARY_SOURCE)
        .or_else(|| element.attr(LAZY_SOURCE))
        .ok_or_else(|| AppError::missing_source(element.name(), &[PRIMARY_SOURCE, LAZY_SOURCE]))?;

    Ok(ImageAttrs {
        alt,
        src: src.to_string(),
    })
}

fn markup_to_text(markup: &str) -> String {
    Html::parse_fragment(markup).root_element().text().collect()
}
