//! Shared test utilities for the gallerize test suite.
//!
//! Fixture writers over `tempfile::TempDir` plus small extractors for
//! asserting on record lists.

use std::fs;
use std::path::{Path, PathBuf};

use crate::feed::FeedRecord;

/// Write `content` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Build records from `(reference, image_url)` pairs.
pub fn sample_records(pairs: &[(&str, &str)]) -> Vec<FeedRecord> {
    pairs
        .iter()
        .map(|(reference, image_url)| FeedRecord {
            reference: reference.to_string(),
            image_url: image_url.to_string(),
        })
        .collect()
}

/// All references in record order.
pub fn references(records: &[FeedRecord]) -> Vec<&str> {
    records.iter().map(|r| r.reference.as_str()).collect()
}
