//! A [`ContentProvider`] backed by a JSON document catalog.
//!
//! The catalog is what a host's content layer knows about each source file:
//! which collection it belongs to, its basename and relative path, and the
//! parsed MDX and/or markdown child with frontmatter title and resolved slug.
//!
//! ```json
//! [
//!   {
//!     "source_instance_name": "markdown-pages",
//!     "base": "install.md",
//!     "relative_path": "guides/setup/install.md",
//!     "markdown": { "title": "Install", "slug": "/guides/setup/install" }
//!   }
//! ]
//! ```
//!
//! Querying splits the collection in two:
//! - **Table of contents**: documents whose basename is an index basename,
//!   unless their relative path starts with an excluded prefix.
//! - **Files**: every other document that has an MDX or markdown child.
//!   Files without either child are assets, not pages, and are left out.
//!
//! When a document has both children, the MDX child wins.

use crate::provider::{ContentProvider, ContentQuery, ContentSnapshot, QueryError};
use crate::types::{FileRecord, Metadata, TableOfContentsSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One source file known to the content layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub source_instance_name: String,
    pub base: String,
    pub relative_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mdx: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown: Option<Metadata>,
}

impl CatalogDocument {
    /// Parsed contents, MDX first.
    pub fn contents(&self) -> Option<&Metadata> {
        self.mdx.as_ref().or(self.markdown.as_ref())
    }

    fn is_page(&self) -> bool {
        self.mdx.is_some() || self.markdown.is_some()
    }
}

/// An in-memory document catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    documents: Vec<CatalogDocument>,
}

impl Catalog {
    pub fn new(documents: Vec<CatalogDocument>) -> Self {
        Self { documents }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn documents(&self) -> &[CatalogDocument] {
        &self.documents
    }

    /// Apply a content query synchronously.
    pub fn select(&self, query: &ContentQuery) -> ContentSnapshot {
        let in_collection = self
            .documents
            .iter()
            .filter(|doc| doc.source_instance_name == query.collection);

        let mut snapshot = ContentSnapshot::default();
        for doc in in_collection {
            if query.is_index_basename(&doc.base) {
                if !query.is_table_of_contents_excluded(&doc.relative_path) {
                    snapshot.table_of_contents.push(TableOfContentsSource {
                        relative_path: doc.relative_path.clone(),
                        contents: doc.contents().cloned(),
                    });
                }
            } else if doc.is_page() {
                snapshot.files.push(FileRecord {
                    basename: doc.base.clone(),
                    path: doc.relative_path.clone(),
                    contents: doc.contents().cloned(),
                });
            }
        }
        snapshot
    }
}

#[async_trait]
impl ContentProvider for Catalog {
    async fn query(&self, query: &ContentQuery) -> Result<ContentSnapshot, Vec<QueryError>> {
        Ok(self.select(query))
    }
}
