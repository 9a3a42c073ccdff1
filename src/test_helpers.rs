//! Shared test utilities for the auto-index test suite.
//!
//! Provides record builders, a scripted content provider, and extractors
//! for synthesized pages.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let snapshot = ContentSnapshot {
//!     table_of_contents: vec![toc_source("guides/index.md", "/guides")],
//!     files: records(&["guides/setup/install.md"]),
//! };
//! let synthesis = synthesize(&snapshot, &PluginConfig::default());
//! assert_eq!(index_slugs(&synthesis), vec!["/", "/guides/setup"]);
//! ```

use async_trait::async_trait;
use std::sync::Mutex;

use crate::provider::{ContentProvider, ContentQuery, ContentSnapshot, QueryError};
use crate::synthesize::Synthesis;
use crate::types::{FileRecord, Metadata, SynthesizedPage, TableOfContentsSource};

// =========================================================================
// Record builders
// =========================================================================

/// A file record at `path` with the given title and slug.
pub fn record(path: &str, title: Option<&str>, slug: Option<&str>) -> FileRecord {
    FileRecord {
        basename: path.rsplit('/').next().unwrap_or(path).to_string(),
        path: path.to_string(),
        contents: Some(Metadata::new(title, slug)),
    }
}

/// File records for `paths`, each with a slug derived from its path
/// (`guides/intro.md` → `/guides/intro`) and no title.
pub fn records(paths: &[&str]) -> Vec<FileRecord> {
    paths
        .iter()
        .map(|path| {
            let slug = format!("/{}", path.trim_end_matches(".mdx").trim_end_matches(".md"));
            record(path, None, Some(&slug))
        })
        .collect()
}

/// A real index document served at `slug`.
pub fn toc_source(relative_path: &str, slug: &str) -> TableOfContentsSource {
    TableOfContentsSource {
        relative_path: relative_path.to_string(),
        contents: Some(Metadata::new(None, Some(slug))),
    }
}

// =========================================================================
// Scripted provider
// =========================================================================

/// A content provider that returns a fixed result and remembers the query.
pub struct FakeProvider {
    result: Result<ContentSnapshot, Vec<QueryError>>,
    last_query: Mutex<Option<ContentQuery>>,
}

impl FakeProvider {
    pub fn succeeding(snapshot: ContentSnapshot) -> Self {
        Self {
            result: Ok(snapshot),
            last_query: Mutex::new(None),
        }
    }

    pub fn failing(errors: Vec<QueryError>) -> Self {
        Self {
            result: Err(errors),
            last_query: Mutex::new(None),
        }
    }

    pub fn last_query(&self) -> Option<ContentQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentProvider for FakeProvider {
    async fn query(&self, query: &ContentQuery) -> Result<ContentSnapshot, Vec<QueryError>> {
        *self.last_query.lock().unwrap() = Some(query.clone());
        self.result.clone()
    }
}

// =========================================================================
// Synthesis extractors
// =========================================================================

/// Slugs of synthesized index pages in order.
pub fn index_slugs(synthesis: &Synthesis) -> Vec<&str> {
    synthesis
        .index_pages
        .iter()
        .map(|p| p.slug.as_str())
        .collect()
}

/// Slugs of table-of-contents pages in order.
pub fn toc_slugs(synthesis: &Synthesis) -> Vec<&str> {
    synthesis
        .table_of_contents_pages
        .iter()
        .map(|p| p.slug.as_str())
        .collect()
}

/// The synthesized index page served at `slug`.
pub fn index_page<'a>(synthesis: &'a Synthesis, slug: &str) -> &'a SynthesizedPage {
    synthesis
        .index_pages
        .iter()
        .find(|p| p.slug == slug)
        .unwrap_or_else(|| panic!("no index page at '{slug}'"))
}
