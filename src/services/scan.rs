// src/services/scan.rs

//! Raw entry scan.
//!
//! The parsed feed model normalises timestamps to UTC and files RSS
//! `<enclosure>` elements under media content. This scan reads the feed XML
//! once more and keeps, per `<item>`/`<entry>`, the timestamps as written
//! and the enclosure URLs.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::Result;

/// Entry details as they appear in the source document.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// `pubDate`, `dc:date` or Atom `published` text
    pub published: Option<String>,
    /// Atom `updated` text
    pub updated: Option<String>,
    /// `url` attributes of `<enclosure>` elements, in document order
    pub enclosures: Vec<String>,
}

/// Scan `body` for entries in document order.
pub fn scan_entries(body: &[u8]) -> Result<Vec<RawEntry>> {
    let mut reader = Reader::from_reader(body);

    let mut entries = Vec::new();
    let mut current: Option<RawEntry> = None;
    // open elements below the current entry element
    let mut depth: usize = 0;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match current.as_mut() {
                None => {
                    if is_entry(&e) {
                        current = Some(RawEntry::default());
                        depth = 0;
                    }
                }
                Some(entry) if depth == 0 => match e.local_name().as_ref() {
                    b"pubDate" | b"date" | b"published" => {
                        let text = reader.read_text(e.name())?;
                        set_once(&mut entry.published, &text);
                    }
                    b"updated" => {
                        let text = reader.read_text(e.name())?;
                        set_once(&mut entry.updated, &text);
                    }
                    b"enclosure" => {
                        push_enclosure(&e, &reader, entry)?;
                        depth += 1;
                    }
                    _ => depth += 1,
                },
                Some(_) => depth += 1,
            },
            Event::Empty(e) => match current.as_mut() {
                None => {
                    if is_entry(&e) {
                        entries.push(RawEntry::default());
                    }
                }
                Some(entry) if depth == 0 && e.local_name().as_ref() == b"enclosure" => {
                    push_enclosure(&e, &reader, entry)?;
                }
                Some(_) => {}
            },
            Event::End(_) => {
                if current.is_some() {
                    if depth == 0 {
                        entries.extend(current.take());
                    } else {
                        depth -= 1;
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

fn is_entry(e: &BytesStart<'_>) -> bool {
    matches!(e.local_name().as_ref(), b"item" | b"entry")
}

fn set_once(field: &mut Option<String>, text: &str) {
    let text = text.trim();
    if field.is_none() && !text.is_empty() {
        *field = Some(text.to_string());
    }
}

fn push_enclosure(e: &BytesStart<'_>, reader: &Reader<&[u8]>, entry: &mut RawEntry) -> Result<()> {
    if let Some(attr) = e
        .try_get_attribute("url")
        .map_err(quick_xml::Error::from)?
    {
        let url = attr.decode_and_unescape_value(reader.decoder())?;
        entry.enclosures.push(url.trim().to_string());
    }
    Ok(())
}
