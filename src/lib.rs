//! # Auto Index
//!
//! A build-time plugin for static documentation sites that fills holes in the
//! navigation. Every directory of markdown documents that has no index
//! document of its own gets a synthesized index page listing its immediate
//! children, and every real index document gets a companion
//! table-of-contents page.
//!
//! # Architecture: One Pass, Two Seams
//!
//! The plugin never touches the filesystem or the host site generator
//! directly. It talks to the host through two traits:
//!
//! ```text
//! ContentProvider ──query──▶ ContentSnapshot
//!                                 │
//!                    tree::build + visit::visit_directories
//!                                 │
//!                                 ▼
//!                             Synthesis ──create_page──▶ PageRegistry
//! ```
//!
//! - [`provider::ContentProvider`] answers one metadata query per build.
//! - [`registry::PageRegistry`] accepts page creation requests.
//!
//! Everything between them is pure: [`synthesize::synthesize`] maps a snapshot
//! and a config to the exact set of pages, so tests run without a host.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`synthesize`] | The build pass: query, decide per directory, register |
//! | [`tree`] | Builds the directory tree from flat document paths |
//! | [`visit`] | Pre-order traversal with subtree skipping |
//! | [`generate`] | Renders a directory's child listing as HTML using Maud |
//! | [`provider`] | The content query seam and its types |
//! | [`catalog`] | A JSON-backed content provider |
//! | [`registry`] | The page creation seam and a recording registry |
//! | [`config`] | `auto-index.toml` loading and validation |
//! | [`types`] | Document metadata, synthesized pages, and template context |
//! | [`naming`] | Sentence-casing of directory names and slug joining |
//! | [`output`] | Run report formatting |
//!
//! # Design Decisions
//!
//! ## Real Documents Win
//!
//! A directory whose slug is already served by a document (an `index.md`, or a
//! sibling file with the same slug) never gets a synthesized page. The
//! synthesizer only fills gaps; it never shadows authored content.
//!
//! ## Skips Are Subtree-Wide
//!
//! Skipping a directory prunes its whole subtree. Table-of-contents pages are
//! computed from the real index documents and ignore the skip list. The content
//! root is the directory `""`: it gets a page at `/` like any other gap, and
//! skip-listing `""` turns index synthesis off entirely.
//!
//! ## Maud For Listings
//!
//! Listing HTML is built with [Maud](https://maud.lambda.xyz/), so titles
//! coming from frontmatter are escaped on interpolation.

pub mod catalog;
pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod provider;
pub mod registry;
pub mod synthesize;
pub mod tree;
pub mod types;
pub mod visit;

#[cfg(test)]
pub(crate) mod test_helpers;
