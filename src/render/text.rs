// src/render/text.rs

//! Framed human-readable renderer.

use std::io::Write;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::models::{FeedDocument, FeedItem};

const ITEM_SEPARATOR: &str = "==============================";
const SECTION_SEPARATOR: &str = "------------------------------";

/// Write the feed header frame followed by every item.
pub fn write_document<W: Write>(document: &FeedDocument, out: &mut W) -> Result<()> {
    let header = format!("Feed: {}", document.feed);
    write_frame(&[header.as_str(), document.url.as_str()], out)?;

    for item in &document.items {
        write_item(item, out)?;
    }
    Ok(())
}

/// Print lines inside a `#` border sized to the longest line.
///
/// ```text
/// ###########
/// #         #
/// #  text1  #
/// #  text2  #
/// #         #
/// ###########
/// ```
pub fn write_frame<W: Write>(lines: &[&str], out: &mut W) -> Result<()> {
    let width = lines.iter().map(|l| display_len(l)).max().unwrap_or(0);
    let border = "#".repeat(width + 6);
    let blank = format!("#{}#", " ".repeat(width + 4));

    writeln!(out, "{border}")?;
    writeln!(out, "{blank}")?;
    for line in lines {
        let padding = " ".repeat(width - display_len(line));
        writeln!(out, "#  {line}{padding}  #")?;
    }
    writeln!(out, "{blank}")?;
    writeln!(out, "{border}")?;
    writeln!(out)?;
    Ok(())
}

fn write_item<W: Write>(item: &FeedItem, out: &mut W) -> Result<()> {
    writeln!(out, "{ITEM_SEPARATOR}")?;
    writeln!(out)?;
    writeln!(out, "Title: {}", item.title)?;
    writeln!(out, "Date: {}", item.date)?;
    writeln!(out, "Link: {}", item.link)?;
    writeln!(out)?;
    if !item.summary.is_empty() {
        writeln!(out, "{}", item.summary)?;
    }
    writeln!(out)?;
    writeln!(out, "{SECTION_SEPARATOR}")?;
    if !item.article_content.is_empty() {
        writeln!(out, "{}", item.article_content)?;
        writeln!(out)?;
    }
    writeln!(out, "Links:")?;
    for link in &item.links {
        writeln!(out, "[{}]: {} ({})", link.id, link.src, link.kind)?;
    }
    writeln!(out)?;
    Ok(())
}

fn display_len(s: &str) -> usize {
    s.graphemes(true).count()
}
