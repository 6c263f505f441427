//! Feed parsing — CSV and XML feeds into ordered records.
//!
//! Stage 1 of the gallerize pipeline. Reads a feed file and produces the
//! ordered list of [`FeedRecord`]s that [`crate::render`] turns into the
//! gallery page.
//!
//! ## Feed Formats
//!
//! **CSV** — a header row names the columns; the image and reference columns
//! are identified by name ([`CsvFields`], default `image_link` / `id`):
//!
//! ```text
//! id,image_link,price
//! r1,http://cdn.example/1.png,9.99
//! r2,http://cdn.example/2.png,4.50
//! ```
//!
//! **XML** — repeated item elements directly under the root, each carrying
//! the image and reference as child tags ([`XmlFields`], default `item` /
//! `image` / `reference`):
//!
//! ```text
//! <feed>
//!   <item><reference>r1</reference><image>http://cdn.example/1.png</image></item>
//!   <item><reference>r2</reference><image>http://cdn.example/2.png</image></item>
//! </feed>
//! ```
//!
//! ## Validation
//!
//! Schema problems are errors, data problems are not:
//!
//! - A required CSV column absent from the header, or an XML tag absent from
//!   every item, is a configuration mistake. The error names **all** missing
//!   fields at once so one run surfaces the whole fix.
//! - A single row or item with an empty image or reference value is a
//!   data-quality drop: the record is skipped and parsing continues.
//!
//! Record order always follows source-file order.

use crate::config::{CsvFields, GallerizeConfig, XmlFields};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("feed file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("missing required columns in CSV feed: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("missing required tags in XML feed: {}", .0.join(", "))]
    MissingTags(Vec<String>),
}

/// Feed format, supplied explicitly by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FeedFormat {
    Csv,
    Xml,
}

impl FeedFormat {
    /// Conventional feed filename for this format.
    pub fn default_feed_name(self) -> &'static str {
        match self {
            FeedFormat::Csv => "feed.csv",
            FeedFormat::Xml => "feed.xml",
        }
    }
}

impl fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedFormat::Csv => write!(f, "csv"),
            FeedFormat::Xml => write!(f, "xml"),
        }
    }
}

/// One gallery entry as it appears in the feed.
///
/// Both fields are guaranteed non-empty: rows and items missing either value
/// never become records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRecord {
    pub reference: String,
    pub image_url: String,
}

/// Read a feed file into ordered records.
///
/// Checks existence up front so both CLI and library callers see
/// [`FeedError::NotFound`] instead of a format-specific open error, then
/// dispatches to the per-format parser with the field names from `config`.
pub fn read(
    path: &Path,
    format: FeedFormat,
    config: &GallerizeConfig,
) -> Result<Vec<FeedRecord>, FeedError> {
    if !path.is_file() {
        return Err(FeedError::NotFound(path.to_path_buf()));
    }
    match format {
        FeedFormat::Csv => read_csv(path, &config.csv),
        FeedFormat::Xml => read_xml(path, &config.xml),
    }
}

/// Parse a CSV feed.
///
/// Fails with [`FeedError::MissingColumns`] naming every absent required
/// column. Rows where either value is empty are skipped.
pub fn read_csv(path: &Path, fields: &CsvFields) -> Result<Vec<FeedRecord>, FeedError> {
    // flexible: a short row reads as empty values and gets skipped below,
    // instead of aborting the whole feed
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = reader.headers()?.clone();

    let image_idx = headers.iter().position(|h| h == fields.image);
    let reference_idx = headers.iter().position(|h| h == fields.reference);

    let (image_idx, reference_idx) = match (image_idx, reference_idx) {
        (Some(image), Some(reference)) => (image, reference),
        (image, reference) => {
            let mut missing = Vec::new();
            if image.is_none() {
                missing.push(fields.image.clone());
            }
            if reference.is_none() {
                missing.push(fields.reference.clone());
            }
            return Err(FeedError::MissingColumns(missing));
        }
    };

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let reference = row.get(reference_idx).unwrap_or_default();
        let image = row.get(image_idx).unwrap_or_default();
        if reference.is_empty() || image.is_empty() {
            continue;
        }
        records.push(FeedRecord {
            reference: reference.to_string(),
            image_url: image.to_string(),
        });
    }
    Ok(records)
}

/// Parse an XML feed.
///
/// Items are the elements named `fields.item` directly under the document
/// root. Fails with [`FeedError::MissingTags`] if no item carries the image
/// tag (and likewise for the reference tag), naming every absent tag. Items
/// where either child is missing or has empty text are skipped.
pub fn read_xml(path: &Path, fields: &XmlFields) -> Result<Vec<FeedRecord>, FeedError> {
    let content = fs::read_to_string(path)?;
    let document = roxmltree::Document::parse(&content)?;

    let items: Vec<_> = document
        .root_element()
        .children()
        .filter(|node| node.is_element() && node.tag_name().name() == fields.item)
        .collect();

    let mut missing = Vec::new();
    if !items.iter().any(|item| has_child(*item, &fields.image)) {
        missing.push(fields.image.clone());
    }
    if !items.iter().any(|item| has_child(*item, &fields.reference)) {
        missing.push(fields.reference.clone());
    }
    if !missing.is_empty() {
        return Err(FeedError::MissingTags(missing));
    }

    let mut records = Vec::new();
    for item in items {
        let reference = child_text(item, &fields.reference);
        let image = child_text(item, &fields.image);
        if let (Some(reference), Some(image_url)) = (reference, image) {
            records.push(FeedRecord {
                reference,
                image_url,
            });
        }
    }
    Ok(records)
}

fn has_child(item: roxmltree::Node, name: &str) -> bool {
    item.children()
        .any(|node| node.is_element() && node.tag_name().name() == name)
}

/// Non-empty text content of the named child element, if any.
fn child_text(item: roxmltree::Node, name: &str) -> Option<String> {
    item.children()
        .find(|node| node.is_element() && node.tag_name().name() == name)
        .and_then(|node| node.text())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
