// src/render/json.rs

//! Structured JSON renderer.
//!
//! Keys keep the declaration order of the models; non-ASCII text is written
//! verbatim.

use std::io::Write;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::models::FeedDocument;

const INDENT: &[u8] = b"    ";

/// Write the document as pretty-printed JSON followed by a newline.
pub fn write_document<W: Write>(document: &FeedDocument, out: &mut W) -> Result<()> {
    let mut serializer = Serializer::with_formatter(&mut *out, PrettyFormatter::with_indent(INDENT));
    document.serialize(&mut serializer)?;
    writeln!(out)?;
    Ok(())
}

/// Read a document previously written by [`write_document`].
pub fn read_document(input: &str) -> Result<FeedDocument> {
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeedItem, LinkKind, LinkRef};

    fn sample_document() -> FeedDocument {
        FeedDocument {
            feed: "Новости".to_string(),
            url: "https://e.com/feed".to_string(),
            items: vec![FeedItem {
                title: "The Queen’s Funeral".to_string(),
                date: "Mon, 19 Sep 2022 20:49:19 +0000".to_string(),
                link: "https://e.com/a".to_string(),
                summary: "[Image 2: The Queen’s Funeral][2]\nHi".to_string(),
                article_content: String::new(),
                links: vec![
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
                ],
            }],
        }
    }

    fn render(document: &FeedDocument) -> String {
        let mut out = Vec::new();
        write_document(document, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let document = sample_document();
        let json = render(&document);
        assert_eq!(read_document(&json).unwrap(), document);
    }

    #[test]
    fn test_key_order_and_indent() {
        let json = render(&sample_document());
        assert!(json.starts_with("{\n    \"feed\": \"Новости\",\n    \"url\": "));
        assert!(json.ends_with("}\n"));

        let keys = [
            "\"title\"",
            "\"date\"",
            "\"link\"",
            "\"summary\"",
            "\"article_content\"",
            "\"links\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.contains(
            "{\n                    \"id\": 1,\n                    \"src\": \"https://e.com/a\",\n                    \"type\": \"link\"\n                }"
        ));
    }

    #[test]
    fn test_unicode_not_escaped() {
        let json = render(&sample_document());
        assert!(json.contains("The Queen’s Funeral"));
        assert!(!json.contains("\\u"));
    }
}
