// src/pipeline/read.rs

//! Feed reading pipeline.

use std::io::Write;

use feed_rs::model::Feed;

use crate::error::{AppError, Result};
use crate::models::{Config, FeedDocument};
use crate::render::OutputFormat;
use crate::services::{ArticleParser, EntryProcessor, RawEntry, StrategySelector, scan_entries};
use crate::utils::http::Fetcher;

/// Reads a feed into a [`FeedDocument`].
pub struct FeedReader<'a> {
    config: &'a Config,
    fetcher: &'a dyn Fetcher,
}

impl<'a> FeedReader<'a> {
    pub fn new(config: &'a Config, fetcher: &'a dyn Fetcher) -> Self {
        Self { config, fetcher }
    }

    /// Fetch the feed at `feed_url` and process up to `limit` entries.
    ///
    /// Any entry failure aborts the whole read.
    pub async fn read(&self, feed_url: &str, limit: i64) -> Result<FeedDocument> {
        log::info!("Start reading {}", feed_url);

        let article = StrategySelector::new(&self.config.extraction)
            .select(feed_url)
            .map(ArticleParser::new)
            .transpose()?;
        log::info!("Parsing article web-page set to {}", article.is_some());

        let body = self.fetcher.fetch(feed_url).await?;
        let feed = parse_feed(&body)?;
        let raw = raw_entries(&body, feed.entries.len());

        let count = effective_limit(limit, feed.entries.len());
        log::info!("Start reading {} entries from feed", count);

        let processor = EntryProcessor::new(self.fetcher, article.as_ref());
        let mut items = Vec::with_capacity(count);
        let no_raw = RawEntry::default();
        for (k, entry) in feed.entries.iter().take(count).enumerate() {
            log::info!("Entry {} start", k + 1);
            let source = raw.get(k).unwrap_or(&no_raw);
            items.push(processor.process(entry, source).await?);
            log::info!("Entry {} end", k + 1);
        }

        Ok(FeedDocument {
            feed: feed.title.map(|t| t.content).unwrap_or_default(),
            url: feed_url.to_string(),
            items,
        })
    }
}

/// Parse a feed document, mapping parser failures to [`AppError::FeedFormat`].
pub fn parse_feed(body: &[u8]) -> Result<Feed> {
    feed_rs::parser::parse(body).map_err(AppError::feed_format)
}

/// Source details per entry, or none when the scan disagrees with the
/// parsed feed (e.g. JSON feeds).
fn raw_entries(body: &[u8], expected: usize) -> Vec<RawEntry> {
    match scan_entries(body) {
        Ok(raw) if raw.len() == expected => raw,
        Ok(raw) => {
            log::debug!(
                "Raw scan found {} entries, parser found {}; using parsed values",
                raw.len(),
                expected
            );
            Vec::new()
        }
        Err(e) => {
            log::debug!("Raw scan failed ({}); using parsed values", e);
            Vec::new()
        }
    }
}

/// Number of entries to process: `limit` capped by the entries available.
/// Non-positive limits yield zero.
pub fn effective_limit(limit: i64, available: usize) -> usize {
    usize::try_from(limit).map_or(0, |limit| limit.min(available))
}

/// Read a feed and render it to `out`.
pub async fn run_reader<W: Write>(
    config: &Config,
    fetcher: &dyn Fetcher,
    feed_url: &str,
    limit: i64,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let document = FeedReader::new(config, fetcher).read(feed_url, limit).await?;
    format.render(&document, out)
}
