//! Plugin configuration.
//!
//! Handles loading, validating, and merging `auto-index.toml`. Stock
//! defaults match the conventional docs-site layout, so most sites only set
//! `skipped_directories`.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! skipped_directories = []        # Directory paths excluded with all descendants ("" is the root)
//! collection = "markdown-pages"   # Source collection to read documents from
//! index_basenames = ["index.mdx", "index.md"]
//! table_of_contents_excluded_prefixes = ["whats-new"]
//! table_of_contents_segment = "table-of-contents"
//!
//! [templates]
//! index_page = "src/templates/indexPage.js"
//! table_of_contents = "src/templates/tableOfContents.js"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! skipped_directories = ["release-notes", "internal/drafts"]
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name looked up in the site root.
pub const CONFIG_FILE: &str = "auto-index.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Plugin configuration loaded from `auto-index.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PluginConfig {
    /// Directory paths (relative, no leading or trailing slash) excluded from
    /// index page synthesis together with everything beneath them. The empty
    /// path is the content root.
    pub skipped_directories: Vec<String>,
    /// Source collection the documents are read from.
    pub collection: String,
    /// Basenames that make a document the real index of its directory.
    pub index_basenames: Vec<String>,
    /// Relative-path prefixes whose index documents get no table of contents.
    pub table_of_contents_excluded_prefixes: Vec<String>,
    /// Segment appended to an index document's slug for its table of contents.
    pub table_of_contents_segment: String,
    /// Page templates per synthesized page kind.
    pub templates: TemplatesConfig,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            skipped_directories: Vec::new(),
            collection: "markdown-pages".to_string(),
            index_basenames: vec!["index.mdx".to_string(), "index.md".to_string()],
            table_of_contents_excluded_prefixes: vec!["whats-new".to_string()],
            table_of_contents_segment: "table-of-contents".to_string(),
            templates: TemplatesConfig::default(),
        }
    }
}

impl PluginConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.collection.trim().is_empty() {
            return Err(ConfigError::Validation(
                "collection must not be empty".into(),
            ));
        }
        if self.index_basenames.is_empty() {
            return Err(ConfigError::Validation(
                "index_basenames must not be empty".into(),
            ));
        }
        if self.table_of_contents_segment.is_empty()
            || self.table_of_contents_segment.contains('/')
        {
            return Err(ConfigError::Validation(
                "table_of_contents_segment must be a single non-empty path segment".into(),
            ));
        }
        if let Some(dir) = self
            .skipped_directories
            .iter()
            .find(|d| d.starts_with('/') || d.ends_with('/'))
        {
            return Err(ConfigError::Validation(format!(
                "skipped_directories entry '{dir}' must not start or end with '/'"
            )));
        }
        Ok(())
    }

    /// Parse plugin options from TOML text and validate them.
    ///
    /// For hosts that keep plugin options inline in their own configuration
    /// rather than in an `auto-index.toml` next to the content.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PluginConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Whether a directory path is on the skip list (exact match).
    pub fn is_skipped(&self, path: &str) -> bool {
        self.skipped_directories.iter().any(|d| d == path)
    }
}

/// Page templates for synthesized pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Template for synthesized directory index pages.
    pub index_page: PathBuf,
    /// Template for table-of-contents pages.
    pub table_of_contents: PathBuf,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            index_page: PathBuf::from("src/templates/indexPage.js"),
            table_of_contents: PathBuf::from("src/templates/tableOfContents.js"),
        }
    }
}

// =============================================================================
// Config loading
// =============================================================================

/// Load config from `auto-index.toml` in the given directory.
///
/// A missing file yields the defaults. Keys left out of the file keep their
/// default values; unknown keys are rejected.
pub fn load_config(dir: &Path) -> Result<PluginConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(PluginConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    let config = PluginConfig::from_toml_str(&content)?;
    debug!(path = %config_path.display(), "loaded config");
    Ok(config)
}

/// Returns a fully-commented stock `auto-index.toml`.
pub fn stock_config_toml() -> &'static str {
    r##"# auto-index configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Directory paths, relative to the content root, that never get a
# synthesized index page. Everything beneath a listed directory is
# excluded too. No leading or trailing slash. "" is the content root
# itself, which otherwise gets a page at "/" unless a document is
# already served there.
skipped_directories = []

# Source collection the documents are read from.
collection = "markdown-pages"

# Basenames that make a document the real index of its directory.
# Directories containing one never get a synthesized index page.
index_basenames = ["index.mdx", "index.md"]

# Index documents under these relative-path prefixes get no
# table-of-contents page.
table_of_contents_excluded_prefixes = ["whats-new"]

# Segment appended to an index document's slug for its table of contents:
# /guides -> /guides/table-of-contents
table_of_contents_segment = "table-of-contents"

# ---------------------------------------------------------------------------
# Page templates
# ---------------------------------------------------------------------------
[templates]
index_page = "src/templates/indexPage.js"
table_of_contents = "src/templates/tableOfContents.js"
"##
}
