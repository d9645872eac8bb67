// src/services/entries.rs

//! Feed entry processor.
//!
//! Turns one parsed feed entry into a [`FeedItem`], registering the entry's
//! own link, its feed-supplied media and, when an article parser is set, the
//! images and tweets of its article page.

use chrono::{DateTime, FixedOffset};
use feed_rs::model::Entry;
use url::Url;

use crate::error::Result;
use crate::models::{FeedItem, LinkKind, LinkRegistry};
use crate::services::{ArticleParser, RawEntry};
use crate::utils::http::Fetcher;

/// RFC-822 style timestamp, e.g. `Mon, 19 Sep 2022 20:49:19 +0600`.
pub const DATE_FORMAT: &str = "%a, %-d %b %Y %H:%M:%S %z";

const NO_SUMMARY: &str = "No summary";

/// Service processing feed entries into items.
pub struct EntryProcessor<'a> {
    fetcher: &'a dyn Fetcher,
    article: Option<&'a ArticleParser>,
}

impl<'a> EntryProcessor<'a> {
    /// Create a processor. Article pages are fetched and parsed only when
    /// `article` is set.
    pub fn new(fetcher: &'a dyn Fetcher, article: Option<&'a ArticleParser>) -> Self {
        Self { fetcher, article }
    }

    /// Process a single entry with a fresh link registry.
    ///
    /// `raw` carries the entry's source timestamps and enclosures; an empty
    /// [`RawEntry`] falls back to the parsed values.
    pub async fn process(&self, entry: &Entry, raw: &RawEntry) -> Result<FeedItem> {
        let mut registry = LinkRegistry::new();

        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.clone())
            .unwrap_or_default();
        let link = entry_link(entry);
        let date = format_date(entry, raw);

        registry.register(link.clone(), LinkKind::Link);
        let summary = build_summary(entry, raw, &title, &mut registry);

        let article_content = match self.article {
            Some(parser) => {
                log::debug!("Fetching article page {}", link);
                let page = self.fetcher.fetch(&link).await?;
                parser.parse_page(&String::from_utf8_lossy(&page), &mut registry)?
            }
            None => String::new(),
        };

        Ok(FeedItem {
            title,
            date,
            link,
            summary,
            article_content,
            links: registry.into_links(),
        })
    }
}

/// The entry's own page: the first `alternate` (or untyped) link, else the
/// first link of any relation.
fn entry_link(entry: &Entry) -> String {
    entry
        .links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| entry.links.first())
        .map(|l| l.href.clone())
        .unwrap_or_default()
}

/// Publication time (falling back to the update time) in [`DATE_FORMAT`],
/// keeping the offset written in the feed.
fn format_date(entry: &Entry, raw: &RawEntry) -> String {
    raw.published
        .as_deref()
        .and_then(parse_with_offset)
        .or_else(|| entry.published.map(|dt| dt.fixed_offset()))
        .or_else(|| raw.updated.as_deref().and_then(parse_with_offset))
        .or_else(|| entry.updated.map(|dt| dt.fixed_offset()))
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn parse_with_offset(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc2822(text)
        .or_else(|_| DateTime::parse_from_rfc3339(text))
        .ok()
}

/// Media markers followed by the entry summary.
///
/// Media content markers are concatenated without separators; thumbnails
/// follow after a single newline. Enclosures are not media content.
fn build_summary(
    entry: &Entry,
    raw: &RawEntry,
    title: &str,
    registry: &mut LinkRegistry,
) -> String {
    let mut summary = String::new();

    let mut enclosures: Vec<Url> = raw
        .enclosures
        .iter()
        .filter_map(|u| Url::parse(u).ok())
        .collect();
    let contents = entry
        .media
        .iter()
        .flat_map(|m| m.content.iter())
        .filter_map(|c| c.url.as_ref())
        .filter(|url| match enclosures.iter().position(|e| e == *url) {
            Some(pos) => {
                enclosures.swap_remove(pos);
                false
            }
            None => true,
        });
    for url in contents {
        summary.push_str(&registry.image_marker(url.as_str(), title));
    }

    let thumbnails: Vec<&str> = entry
        .media
        .iter()
        .flat_map(|m| m.thumbnails.iter())
        .map(|t| t.image.uri.as_str())
        .collect();
    if !thumbnails.is_empty() {
        if !summary.is_empty() {
            summary.push('\n');
        }
        for uri in thumbnails {
            summary.push_str(&registry.image_marker(uri, title));
        }
    }

    summary.push('\n');
    match &entry.summary {
        Some(text) => summary.push_str(&text.content),
        None => summary.push_str(NO_SUMMARY),
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{ArticleSelectors, LinkRef};
    use crate::services::scan_entries;
    use crate::utils::http::StaticFetcher;

    fn first_entry(xml: &str) -> (Entry, RawEntry) {
        let feed = feed_rs::parser::parse(xml.as_bytes()).unwrap();
        let raw = scan_entries(xml.as_bytes()).unwrap();
        (
            feed.entries.into_iter().next().unwrap(),
            raw.into_iter().next().unwrap(),
        )
    }

    fn rss_item(item: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:media="http://search.yahoo.com/mrss/">
  <channel>
    <title>News</title>
    <link>https://e.com/</link>
    <description>Test</description>
    <item>{item}</item>
  </channel>
</rss>"#
        )
    }

    #[tokio::test]
    async fn test_media_content_and_summary() {
        let (entry, raw) = first_entry(&rss_item(
            r#"
      <title>T</title>
      <link>https://e.com/a</link>
      <pubDate>Mon, 19 Sep 2022 14:49:19 GMT</pubDate>
      <media:content url="https://e.com/i.png" medium="image"/>
      <description>Hi</description>"#,
        ));
        let fetcher = StaticFetcher::new();
        let item = EntryProcessor::new(&fetcher, None)
            .process(&entry, &raw)
            .await
            .unwrap();

        assert_eq!(item.title, "T");
        assert_eq!(item.link, "https://e.com/a");
        assert_eq!(item.date, "Mon, 19 Sep 2022 14:49:19 +0000");
        assert_eq!(item.summary, "[Image 2: T][2]\nHi");
        assert_eq!(item.article_content, "");
        assert_eq!(
            item.links,
            vec![
                LinkRef {
                    id: 1,
                    src: "https://e.com/a".to_string(),
                    kind: LinkKind::Link,
                },
                LinkRef {
                    id: 2,
                    src: "https://e.com/i.png".to_string(),
                    kind: LinkKind::Image,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_plain_summary() {
        let (entry, raw) = first_entry(&rss_item(
            r#"<title>T</title><link>https://e.com/a</link><description>S</description>"#,
        ));
        let fetcher = StaticFetcher::new();
        let item = EntryProcessor::new(&fetcher, None)
            .process(&entry, &raw)
            .await
            .unwrap();

        assert_eq!(item.summary, "\nS");
        assert_eq!(item.links.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_summary() {
        let (entry, raw) = first_entry(&rss_item(
            r#"<title>T</title><link>https://e.com/a</link>"#,
        ));
        let fetcher = StaticFetcher::new();
        let item = EntryProcessor::new(&fetcher, None)
            .process(&entry, &raw)
            .await
            .unwrap();

        assert_eq!(item.summary, "\nNo summary");
    }

    #[tokio::test]
    async fn test_content_then_thumbnails() {
        let (entry, raw) = first_entry(&rss_item(
            r#"
      <title>T</title>
      <link>https://e.com/a</link>
      <media:content url="https://e.com/1.png"/>
      <media:content url="https://e.com/2.png"/>
      <media:thumbnail url="https://e.com/t.png"/>
      <description>Hi</description>"#,
        ));
        let fetcher = StaticFetcher::new();
        let item = EntryProcessor::new(&fetcher, None)
            .process(&entry, &raw)
            .await
            .unwrap();

        assert_eq!(
            item.summary,
            "[Image 2: T][2][Image 3: T][3]\n[Image 4: T][4]\nHi"
        );
        let srcs: Vec<&str> = item.links.iter().map(|l| l.src.as_str()).collect();
        assert_eq!(
            srcs,
            vec![
                "https://e.com/a",
                "https://e.com/1.png",
                "https://e.com/2.png",
                "https://e.com/t.png",
            ]
        );
    }

    #[tokio::test]
    async fn test_article_links_follow_feed_links() {
        let (entry, raw) = first_entry(&rss_item(
            r#"
      <title>T</title>
      <link>https://e.com/a</link>
      <media:content url="https://e.com/i.png"/>
      <description>Hi</description>"#,
        ));
        let page = r#"<html><body>
  <figure class="caas-cover"><img alt="Cover" src="https://e.com/cover.png"></figure>
  <header class="caas-title-wrapper">Headline</header>
  <div class="caas-body"><p>Para</p><div class="twitter-tweet-wrapper"><a href="https://twitter.com/x/1">t</a></div></div>
</body></html>"#;
        let fetcher = StaticFetcher::new().with_page("https://e.com/a", page);
        let parser = ArticleParser::new(&ArticleSelectors::default()).unwrap();

        let item = EntryProcessor::new(&fetcher, Some(&parser))
            .process(&entry, &raw)
            .await
            .unwrap();

        assert_eq!(
            item.article_content,
            "[Image 3: Cover][3]\nHeadline\n\nPara\n[Tweet 4][4]\n"
        );
        let kinds: Vec<LinkKind> = item.links.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LinkKind::Link,
                LinkKind::Image,
                LinkKind::Image,
                LinkKind::Tweet,
            ]
        );
    }

    #[tokio::test]
    async fn test_article_failure_propagates() {
        let (entry, raw) = first_entry(&rss_item(
            r#"<title>T</title><link>https://e.com/a</link>"#,
        ));
        let fetcher =
            StaticFetcher::new().with_page("https://e.com/a", "<html><body></body></html>");
        let parser = ArticleParser::new(&ArticleSelectors::default()).unwrap();

        let result = EntryProcessor::new(&fetcher, Some(&parser))
            .process(&entry, &raw)
            .await;
        assert!(matches!(
            result,
            Err(AppError::RequiredElementMissing { .. })
        ));
    }

    #[tokio::test]
    async fn test_source_offset_kept() {
        let (entry, raw) = first_entry(&rss_item(
            r#"<title>T</title><link>https://e.com/a</link>
      <pubDate>Mon, 19 Sep 2022 20:49:19 +0600</pubDate>"#,
        ));
        let fetcher = StaticFetcher::new();
        let processor = EntryProcessor::new(&fetcher, None);

        let item = processor.process(&entry, &raw).await.unwrap();
        assert_eq!(item.date, "Mon, 19 Sep 2022 20:49:19 +0600");

        // without the raw text only the normalised time is known
        let item = processor
            .process(&entry, &RawEntry::default())
            .await
            .unwrap();
        assert_eq!(item.date, "Mon, 19 Sep 2022 14:49:19 +0000");
    }

    #[tokio::test]
    async fn test_enclosure_is_not_media_content() {
        let (entry, raw) = first_entry(&rss_item(
            r#"
      <title>T</title>
      <link>https://e.com/a</link>
      <enclosure url="https://e.com/pod.mp3" length="1024" type="audio/mpeg"/>
      <media:content url="https://e.com/i.png" medium="image"/>
      <description>S</description>"#,
        ));
        let fetcher = StaticFetcher::new();
        let item = EntryProcessor::new(&fetcher, None)
            .process(&entry, &raw)
            .await
            .unwrap();

        assert_eq!(item.summary, "[Image 2: T][2]\nS");
        let srcs: Vec<&str> = item.links.iter().map(|l| l.src.as_str()).collect();
        assert_eq!(srcs, vec!["https://e.com/a", "https://e.com/i.png"]);
    }

    #[tokio::test]
    async fn test_atom_alternate_link_preferred() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Blog</title>
  <id>urn:blog</id>
  <updated>2022-09-19T20:49:19-04:00</updated>
  <entry>
    <title>Post</title>
    <id>urn:post</id>
    <link rel="replies" href="https://e.com/a/comments"/>
    <link rel="alternate" href="https://e.com/a"/>
    <updated>2022-09-19T20:49:19-04:00</updated>
    <summary>S</summary>
  </entry>
</feed>"#;
        let (entry, raw) = first_entry(xml);
        let fetcher = StaticFetcher::new();
        let item = EntryProcessor::new(&fetcher, None)
            .process(&entry, &raw)
            .await
            .unwrap();

        assert_eq!(item.link, "https://e.com/a");
        assert_eq!(item.links[0].src, "https://e.com/a");
        assert_eq!(item.date, "Mon, 19 Sep 2022 20:49:19 -0400");
    }
}
