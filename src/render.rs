//! Gallery page rendering.
//!
//! Stage 2 of the gallerize pipeline. Takes the feed records and produces a
//! single self-contained HTML document: inline CSS, the records embedded as a
//! JSON array, and a small vanilla-JS pager that renders one page of items at
//! a time on the client.
//!
//! ## Output Structure
//!
//! ```text
//! <head>  title + inline style
//! <body>
//!   #gallery      empty container, filled by the pager
//!   #pagination   numbered page buttons, one per ceil(N / page_size)
//!   <script>      const images = [...]; const itemsPerPage = N; + pager
//! ```
//!
//! ## Separation of Concerns
//!
//! Three pieces, each testable on its own:
//!
//! - **Data serialization** ([`entries_json`]): records → JSON array of
//!   `{reference, url, title}` objects, titles auto-numbered in record order.
//!   Escaping is `serde_json`'s job, not string templating.
//! - **Page math** ([`page_count`]): pure ceiling division, mirrored by the
//!   client-side pager.
//! - **Presentation**: the document shell is [maud](https://maud.lambda.xyz/)
//!   markup; pager behavior lives in `static/gallery.js`, embedded at compile
//!   time.
//!
//! All records ship in the one output file regardless of count — pagination
//! is purely client-side.

use crate::config::GalleryConfig;
use crate::feed::FeedRecord;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use serde::Serialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry of the embedded gallery data.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GalleryEntry {
    pub reference: String,
    pub url: String,
    pub title: String,
}

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/gallery.js");

/// Build gallery entries from records, titles numbered `Image 1..N` in
/// record order.
pub fn entries(records: &[FeedRecord]) -> Vec<GalleryEntry> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| GalleryEntry {
            reference: record.reference.clone(),
            url: record.image_url.clone(),
            title: format!("Image {}", idx + 1),
        })
        .collect()
}

/// Serialize records to the JSON array embedded in the page.
pub fn entries_json(records: &[FeedRecord]) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(&entries(records))?;
    // A literal "</script>" inside a value would terminate the inline script
    Ok(json.replace("</", "<\\/"))
}

/// Number of pages needed for `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size)
}

/// Render the complete gallery document.
pub fn render(records: &[FeedRecord], config: &GalleryConfig) -> Result<Markup, RenderError> {
    let data = entries_json(records)?;
    let bootstrap = format!(
        "const images = {data};\nconst itemsPerPage = {};\nlet currentPage = 1;\n",
        config.page_size
    );

    Ok(html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                div.gallery id="gallery" {}
                div.pagination id="pagination" {}
                script {
                    (PreEscaped(bootstrap))
                    (PreEscaped(JS))
                }
            }
        }
    })
}

/// Render and write the gallery document to `output_path`, overwriting any
/// existing file.
pub fn write(
    records: &[FeedRecord],
    config: &GalleryConfig,
    output_path: &Path,
) -> Result<(), RenderError> {
    let document = render(records, config)?;
    fs::write(output_path, document.into_string())?;
    Ok(())
}
