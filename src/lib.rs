//! # Gallerize
//!
//! A static gallery page generator for image feeds. Point it at a CSV or XML
//! feed of `(reference, image URL)` entries and it emits one self-contained
//! HTML page presenting the images as a client-side paginated gallery.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Read     feed.csv / feed.xml  →  Vec<FeedRecord>     (feed → structured data)
//! 2. Render   records              →  image_gallery.html  (data → static page)
//! ```
//!
//! The stages are independent functions so unit tests can exercise parsing
//! and rendering without touching each other, and the CLI `check` command can
//! run stage 1 alone.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`feed`] | Stage 1 — parses CSV/XML feeds into ordered records, validating required fields |
//! | [`render`] | Stage 2 — serializes records into the embedded data and renders the page with Maud |
//! | [`config`] | `gallerize.toml` loading: field-name mapping and gallery settings |
//! | [`output`] | CLI output formatting — information-first display of records and results |
//!
//! # Design Decisions
//!
//! ## Maud Over String Templating
//!
//! The document shell is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system: malformed HTML is a build error, template
//! variables are Rust expressions, and all interpolation is auto-escaped. The
//! embedded gallery data goes through `serde_json` rather than string
//! concatenation, so hostile references cannot break out of the page.
//!
//! ## Schema Errors vs Data Drops
//!
//! A feed whose schema is wrong (missing column, missing tag) fails loudly,
//! naming every missing field at once. A feed whose schema is right but whose
//! rows are incomplete degrades quietly: rows and items with an empty
//! reference or image are skipped, the rest still render. Both paths apply
//! the same rule, so a record in the output always has both fields.
//!
//! ## Client-Side Pagination
//!
//! Every record ships in the single output file; ~40 lines of vanilla
//! JavaScript slice the embedded array into pages. The generated page can be
//! dropped on any file server or opened from disk — no backend, no runtime
//! dependencies.

pub mod config;
pub mod feed;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
