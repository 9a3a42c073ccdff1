//! Shared types passed between the provider, the synthesizer and the registry.
//!
//! Records coming in from the content provider and pages going out to the
//! page registry are plain serde structs so hosts can dump or replay them
//! as JSON.

use serde::{Deserialize, Serialize};

/// Frontmatter and resolved fields of a markdown or MDX document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Title from frontmatter, if the document declares one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Canonical served URL path, always starting with `/`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Metadata {
    pub fn new(title: Option<&str>, slug: Option<&str>) -> Self {
        Self {
            title: title.map(str::to_string),
            slug: slug.map(str::to_string),
        }
    }
}

/// A non-index source document, one per file.
///
/// `contents` is `None` when the provider could not resolve any metadata for
/// the file; the tree still holds a node for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub basename: String,
    /// Slash-separated path relative to the content root
    pub path: String,
    #[serde(default)]
    pub contents: Option<Metadata>,
}

/// A real index document (`index.md` / `index.mdx`) that already covers its
/// directory and gets a table-of-contents page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableOfContentsSource {
    pub relative_path: String,
    #[serde(default)]
    pub contents: Option<Metadata>,
}

impl TableOfContentsSource {
    pub fn slug(&self) -> Option<&str> {
        self.contents.as_ref().and_then(|c| c.slug.as_deref())
    }
}

/// Which page template a synthesized page is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    IndexPage,
    TableOfContents,
}

/// A page produced by one synthesis pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SynthesizedPage {
    pub slug: String,
    /// Display title; table-of-contents pages leave titling to their template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Listing fragment, index pages only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    pub kind: TemplateKind,
}

/// Context payload handed to the page template.
///
/// `file_relative_path` is always `null` for synthesized pages, which is how
/// templates tell them apart from pages backed by a real document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContext {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    pub file_relative_path: Option<String>,
}

impl From<&SynthesizedPage> for PageContext {
    fn from(page: &SynthesizedPage) -> Self {
        Self {
            slug: page.slug.clone(),
            title: page.title.clone(),
            html: page.html.clone(),
            file_relative_path: None,
        }
    }
}
