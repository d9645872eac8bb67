// src/services/mod.rs

//! Service layer for the reader.
//!
//! This module contains the business logic for:
//! - Image attribute extraction (`extract_image_attrs`)
//! - Article page parsing (`ArticleParser`)
//! - Extraction strategy selection (`StrategySelector`)
//! - Raw entry scan for source timestamps and enclosures (`scan_entries`)
//! - Feed entry processing (`EntryProcessor`)

mod article;
mod entries;
mod images;
mod scan;
mod strategy;

pub use article::ArticleParser;
pub use entries::{DATE_FORMAT, EntryProcessor};
pub use images::{ImageAttrs, extract_image_attrs};
pub use scan::{RawEntry, scan_entries};
pub use strategy::StrategySelector;
