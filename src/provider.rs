//! The content provider seam.
//!
//! The synthesizer never reads the source tree itself. It describes what it
//! needs as a [`ContentQuery`] and asks a [`ContentProvider`] for a
//! [`ContentSnapshot`]: the real index documents of the collection, and every
//! other markdown-backed document with its path, title and slug.

use crate::config::PluginConfig;
use crate::types::{FileRecord, TableOfContentsSource};
use async_trait::async_trait;
use thiserror::Error;

/// An error reported by the content provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct QueryError {
    pub message: String,
}

impl QueryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// What the synthesizer asks the provider for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    /// Source collection the documents must belong to
    pub collection: String,
    /// Basenames that mark a document as its directory's index
    pub index_basenames: Vec<String>,
    /// Relative-path prefixes whose index documents get no table of contents
    pub table_of_contents_excluded_prefixes: Vec<String>,
}

impl From<&PluginConfig> for ContentQuery {
    fn from(config: &PluginConfig) -> Self {
        Self {
            collection: config.collection.clone(),
            index_basenames: config.index_basenames.clone(),
            table_of_contents_excluded_prefixes: config.table_of_contents_excluded_prefixes.clone(),
        }
    }
}

impl ContentQuery {
    pub fn is_index_basename(&self, basename: &str) -> bool {
        self.index_basenames.iter().any(|b| b == basename)
    }

    pub fn is_table_of_contents_excluded(&self, relative_path: &str) -> bool {
        self.table_of_contents_excluded_prefixes
            .iter()
            .any(|prefix| relative_path.starts_with(prefix.as_str()))
    }
}

/// Query results. Empty lists mean "no documents", not failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSnapshot {
    /// Real index documents, each of which gets a table-of-contents page
    pub table_of_contents: Vec<TableOfContentsSource>,
    /// Every other document, in provider order
    pub files: Vec<FileRecord>,
}

/// Supplies document metadata for one build.
///
/// Failure is reported as the provider's list of errors; the synthesizer
/// aborts the build on the first one.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    async fn query(&self, query: &ContentQuery) -> Result<ContentSnapshot, Vec<QueryError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_from_default_config() {
        let query = ContentQuery::from(&PluginConfig::default());
        assert_eq!(query.collection, "markdown-pages");
        assert!(query.is_index_basename("index.md"));
        assert!(query.is_index_basename("index.mdx"));
        assert!(!query.is_index_basename("intro.md"));
    }

    #[test]
    fn excluded_prefix_matches_start_only() {
        let query = ContentQuery::from(&PluginConfig::default());
        assert!(query.is_table_of_contents_excluded("whats-new/index.md"));
        assert!(query.is_table_of_contents_excluded("whats-new-2024/index.md"));
        assert!(!query.is_table_of_contents_excluded("guides/whats-new/index.md"));
    }

    #[test]
    fn query_error_displays_message() {
        let err = QueryError::new("Cannot query field \"allFile\"");
        assert_eq!(err.to_string(), "Cannot query field \"allFile\"");
    }
}
