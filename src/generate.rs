//! Listing fragment generation for synthesized index pages.
//!
//! A synthesized index page gets a flat list of its directory's immediate
//! children, injected into the host's index page template as `html`:
//!
//! ```html
//! <ul class="auto-index">
//!   <li class="auto-index-directory"><a href="/guides/setup">Setup</a></li>
//!   <li class="auto-index-file"><a href="/guides/intro">Introduction</a></li>
//! </ul>
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) so every title and href is escaped.
//! Deep descendants are not listed; they get their own index page (or the
//! table-of-contents page of a real index document).

use crate::naming::{directory_slug, file_stem, sentence_case};
use crate::tree::{DirectoryNode, FileNode, TreeNode};
use maud::{Markup, html};

/// Link text and target for one listed child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub title: String,
    /// `None` for documents without a resolved slug; rendered as plain text
    pub href: Option<String>,
    pub is_directory: bool,
}

/// The entries of a directory listing, in tree order.
pub fn listing_entries(dir: &DirectoryNode) -> Vec<ListingEntry> {
    dir.children
        .iter()
        .map(|child| match child {
            TreeNode::Directory(sub) => ListingEntry {
                title: sentence_case(&sub.basename),
                href: Some(directory_slug(&sub.path)),
                is_directory: true,
            },
            TreeNode::File(file) => ListingEntry {
                title: file_title(file),
                href: file.metadata.as_ref().and_then(|m| m.slug.clone()),
                is_directory: false,
            },
        })
        .collect()
}

/// Frontmatter title, or the file stem in sentence case.
pub fn file_title(file: &FileNode) -> String {
    file.metadata
        .as_ref()
        .and_then(|m| m.title.as_deref())
        .filter(|t| !t.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| sentence_case(file_stem(&file.basename)))
}

/// Render the listing fragment for a directory.
pub fn render_listing(dir: &DirectoryNode) -> Markup {
    let entries = listing_entries(dir);
    html! {
        ul.auto-index {
            @for entry in &entries {
                @let class = if entry.is_directory { "auto-index-directory" } else { "auto-index-file" };
                li class=(class) {
                    @if let Some(href) = &entry.href {
                        a href=(href) { (entry.title) }
                    } @else {
                        (entry.title)
                    }
                }
            }
        }
    }
}
