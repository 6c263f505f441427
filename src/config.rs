//! Feed and gallery configuration.
//!
//! Handles loading and validating `gallerize.toml`. Configuration is sparse:
//! stock defaults cover the common feed layout, and a config file only needs
//! to name the values it overrides.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [csv]
//! image = "image_link"      # Column holding image URLs
//! reference = "id"          # Column holding references
//!
//! [xml]
//! item = "item"             # Repeated element directly under the root
//! image = "image"           # Child tag holding image URLs
//! reference = "reference"   # Child tag holding references
//!
//! [gallery]
//! title = "Image Gallery"   # Page title
//! page_size = 5             # Items per page
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want:
//!
//! ```toml
//! # Only rename the CSV reference column
//! [csv]
//! reference = "sku"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `gallerize.toml`.
///
/// All fields have defaults matching the conventional feed layout. User config
/// files need only specify the values they want to override. Unknown keys are
/// rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GallerizeConfig {
    /// Column names for CSV feeds.
    pub csv: CsvFields,
    /// Element and tag names for XML feeds.
    pub xml: XmlFields,
    /// Gallery presentation settings.
    pub gallery: GalleryConfig,
}

impl GallerizeConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.page_size == 0 {
            return Err(ConfigError::Validation(
                "gallery.page_size must be at least 1".into(),
            ));
        }
        for (key, value) in [
            ("csv.image", &self.csv.image),
            ("csv.reference", &self.csv.reference),
            ("xml.item", &self.xml.item),
            ("xml.image", &self.xml.image),
            ("xml.reference", &self.xml.reference),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

/// Column names identifying the two required CSV columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CsvFields {
    /// Column holding image URLs.
    pub image: String,
    /// Column holding references.
    pub reference: String,
}

impl Default for CsvFields {
    fn default() -> Self {
        Self {
            image: "image_link".to_string(),
            reference: "id".to_string(),
        }
    }
}

/// Element and tag names identifying feed items in an XML document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct XmlFields {
    /// Name of the repeated item element directly under the root.
    pub item: String,
    /// Child tag holding image URLs.
    pub image: String,
    /// Child tag holding references.
    pub reference: String,
}

impl Default for XmlFields {
    fn default() -> Self {
        Self {
            item: "item".to_string(),
            image: "image".to_string(),
            reference: "reference".to_string(),
        }
    }
}

/// Gallery presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Page title of the generated document.
    pub title: String,
    /// Items shown per page.
    pub page_size: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Image Gallery".to_string(),
            page_size: 5,
        }
    }
}

/// Load configuration from `path`, falling back to defaults if the file
/// doesn't exist.
pub fn load_config(path: &Path) -> Result<GallerizeConfig, ConfigError> {
    if !path.exists() {
        return Ok(GallerizeConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: GallerizeConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A stock `gallerize.toml` with every option documented at its default.
///
/// Printed by the `gen-config` command so users start from a commented file
/// instead of the reference docs.
pub fn stock_config_toml() -> &'static str {
    r#"# gallerize configuration
# All options are optional - the values below are the defaults.

[csv]
# Column holding image URLs
image = "image_link"
# Column holding references
reference = "id"

[xml]
# Repeated element directly under the root
item = "item"
# Child tag holding image URLs
image = "image"
# Child tag holding references
reference = "reference"

[gallery]
# Page title of the generated document
title = "Image Gallery"
# Items shown per page
page_size = 5
"#
}
