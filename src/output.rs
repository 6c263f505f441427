//! CLI output formatting.
//!
//! Information-first display: the primary line for every record is its
//! reference, with the image URL as indented secondary context. Summary lines
//! report counts and the generated file.
//!
//! ```text
//! Records
//! 001 r1
//!     Image: http://cdn.example/1.png
//! 002 r2
//!     Image: http://cdn.example/2.png
//!
//! 2 records
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure — no I/O, no side effects.

use crate::feed::FeedRecord;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the feed listing: one header line per record plus a count summary.
pub fn format_feed_output(records: &[FeedRecord]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Records".to_string());
    for (idx, record) in records.iter().enumerate() {
        lines.push(format!("{} {}", format_index(idx + 1), record.reference));
        lines.push(format!("    Image: {}", record.image_url));
    }
    lines.push(String::new());
    let noun = if records.len() == 1 { "record" } else { "records" };
    lines.push(format!("{} {}", records.len(), noun));
    lines
}

/// Format the generate summary: record count, page count, output path.
pub fn format_gallery_output(records: usize, pages: usize, output_path: &Path) -> Vec<String> {
    let record_noun = if records == 1 { "record" } else { "records" };
    let page_noun = if pages == 1 { "page" } else { "pages" };
    vec![format!(
        "Generated {} with {} {} across {} {}",
        output_path.display(),
        records,
        record_noun,
        pages,
        page_noun
    )]
}

pub fn print_feed_output(records: &[FeedRecord]) {
    for line in format_feed_output(records) {
        println!("{}", line);
    }
}

pub fn print_gallery_output(records: usize, pages: usize, output_path: &Path) {
    for line in format_gallery_output(records, pages, output_path) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_records;
    use std::path::PathBuf;

    #[test]
    fn feed_output_lists_records_with_context() {
        let records = sample_records(&[("r1", "http://a/1.png"), ("r2", "http://a/2.png")]);
        let lines = format_feed_output(&records);

        assert_eq!(lines[0], "Records");
        assert_eq!(lines[1], "001 r1");
        assert_eq!(lines[2], "    Image: http://a/1.png");
        assert_eq!(lines[3], "002 r2");
        assert_eq!(lines.last().unwrap(), "2 records");
    }

    #[test]
    fn feed_output_singular_count() {
        let records = sample_records(&[("r1", "http://a/1.png")]);
        let lines = format_feed_output(&records);
        assert_eq!(lines.last().unwrap(), "1 record");
    }

    #[test]
    fn feed_output_empty_feed() {
        let lines = format_feed_output(&[]);
        assert_eq!(lines, vec!["Records", "", "0 records"]);
    }

    #[test]
    fn gallery_output_names_the_file() {
        let lines = format_gallery_output(7, 2, &PathBuf::from("image_gallery.html"));
        assert_eq!(
            lines,
            vec!["Generated image_gallery.html with 7 records across 2 pages"]
        );
    }

    #[test]
    fn gallery_output_singular_page() {
        let lines = format_gallery_output(1, 1, &PathBuf::from("out.html"));
        assert_eq!(lines, vec!["Generated out.html with 1 record across 1 page"]);
    }
}
