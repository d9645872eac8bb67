// src/services/article.rs

//! Article page parser.
//!
//! Walks an article page with configured CSS selectors and produces a text
//! transcript in which images and embedded tweets are replaced by inline
//! reference markers registered in the entry's [`LinkRegistry`].

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{ArticleSelectors, LinkRegistry};
use crate::services::images::extract_image_attrs;
use crate::utils::parse_selector;

/// Parser for article pages of a single source layout.
pub struct ArticleParser {
    selectors: ArticleSelectors,
    cover: Selector,
    image: Selector,
    title: Selector,
    body: Selector,
    figure: Selector,
    tweet: Selector,
    anchor: Selector,
}

impl ArticleParser {
    /// Compile the given selectors.
    pub fn new(selectors: &ArticleSelectors) -> Result<Self> {
        Ok(Self {
            cover: parse_selector(&selectors.cover)?,
            image: parse_selector(&selectors.image)?,
            title: parse_selector(&selectors.title)?,
            body: parse_selector(&selectors.body)?,
            figure: parse_selector(&selectors.figure)?,
            tweet: parse_selector(&selectors.tweet)?,
            anchor: parse_selector(&selectors.anchor)?,
            selectors: selectors.clone(),
        })
    }

    /// Parse raw page HTML.
    pub fn parse_page(&self, html: &str, registry: &mut LinkRegistry) -> Result<String> {
        let document = Html::parse_document(html);
        self.parse(&document, registry)
    }

    /// Extract cover image, title and body of an article page.
    ///
    /// Any malformed image aborts the whole parse; no partial output is
    /// returned.
    pub fn parse(&self, document: &Html, registry: &mut LinkRegistry) -> Result<String> {
        let mut text = String::new();

        if let Some(cover) = document.select(&self.cover).next() {
            if let Some(img) = cover.select(&self.image).next() {
                let attrs = extract_image_attrs(img)?;
                text.push_str(&registry.image_marker(attrs.src, &attrs.alt));
                text.push('\n');
            }
        }

        let title = document
            .select(&self.title)
            .next()
            .ok_or_else(|| AppError::element_missing(&self.selectors.title))?;
        text.extend(title.text());
        text.push_str("\n\n");

        let body = document
            .select(&self.body)
            .next()
            .ok_or_else(|| AppError::element_missing(&self.selectors.body))?;

        for child in body.children() {
            if let Some(element) = ElementRef::wrap(child) {
                self.parse_body_element(element, registry, &mut text)?;
            } else if let Some(node_text) = child.value().as_text() {
                let trimmed = node_text.trim();
                if !trimmed.is_empty() {
                    text.push_str(trimmed);
                    text.push('\n');
                }
            }
        }

        Ok(text)
    }

    fn parse_body_element(
        &self,
        element: ElementRef<'_>,
        registry: &mut LinkRegistry,
        text: &mut String,
    ) -> Result<()> {
        if self.figure.matches(&element) {
            if let Some(img) = element.select(&self.image).next() {
                let attrs = extract_image_attrs(img)?;
                text.push_str(&registry.image_marker(attrs.src, &attrs.alt));
                text.push('\n');
            }
        } else if self.tweet.matches(&element) {
            if let Some(anchor) = element.select(&self.anchor).next() {
                let href = anchor
                    .value()
                    .attr("href")
                    .ok_or_else(|| AppError::missing_source(anchor.value().name(), &["href"]))?;
                text.push_str(&registry.tweet_marker(href));
                text.push('\n');
            }
        } else {
            text.push_str(&plain_text(element));
            text.push('\n');
        }
        Ok(())
    }
}

/// Text of an element: each text node trimmed, empty ones dropped, joined by spaces.
fn plain_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
