//! Page synthesis: one full build pass.
//!
//! ```text
//! provider ──query──▶ ContentSnapshot ──sort + tree::build──▶ tree
//!     tree ──visit_directories + decide──▶ index pages
//!     table-of-contents sources ──▶ table-of-contents pages
//!     all pages ──▶ registry
//! ```
//!
//! ## Per-directory decision
//!
//! For a directory at path `P` (slug `/P`), first match wins:
//!
//! 1. `P` is on the skip list → skip it and its whole subtree.
//! 2. `/P` is already served by a document → no page, children still visited.
//! 3. Otherwise → synthesize an index page listing `P`'s immediate children.
//!
//! The root (`P == ""`) is a directory like any other: it gets a page at `/`
//! titled "Index" unless a document already serves `/` or `""` is on the skip
//! list. A snapshot without files builds an empty tree and yields no index
//! pages at all.
//!
//! Every real index document also gets a table-of-contents page at its slug
//! plus `/table-of-contents`. Those are never suppressed or skipped.
//!
//! Nothing is registered unless the query succeeds; the pass either
//! registers every page or none.

use crate::config::{ConfigError, PluginConfig};
use crate::generate::render_listing;
use crate::naming::{directory_slug, join_slug, sentence_case};
use crate::provider::{ContentProvider, ContentQuery, ContentSnapshot, QueryError};
use crate::registry::{PageRegistry, PageRequest};
use crate::tree::{self, DirectoryNode};
use crate::types::{FileRecord, PageContext, SynthesizedPage, TemplateKind};
use crate::visit::{Visit, visit_directories};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Title used for the root index page, whose basename is empty.
const ROOT_TITLE: &str = "Index";

#[derive(Error, Debug)]
pub enum SynthesisError {
    #[error("Content query failed: {0}")]
    Query(#[from] QueryError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Everything one pass produced, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Synthesis {
    pub index_pages: Vec<SynthesizedPage>,
    pub table_of_contents_pages: Vec<SynthesizedPage>,
    /// Skip-listed directory paths that were pruned
    pub skipped: Vec<String>,
    /// Directory paths already covered by a real document
    pub suppressed: Vec<String>,
}

impl Synthesis {
    /// All pages: index pages first, then table-of-contents pages.
    pub fn pages(&self) -> impl Iterator<Item = &SynthesizedPage> {
        self.index_pages
            .iter()
            .chain(self.table_of_contents_pages.iter())
    }
}

/// Run one build pass: query, synthesize, register.
///
/// A failed query aborts before anything is registered and surfaces the
/// first error the provider reported.
pub async fn create_pages<P, R>(
    provider: &P,
    registry: &mut R,
    config: &PluginConfig,
) -> Result<Synthesis, SynthesisError>
where
    P: ContentProvider + ?Sized,
    R: PageRegistry + ?Sized,
{
    config.validate()?;

    let query = ContentQuery::from(config);
    let snapshot = provider.query(&query).await.map_err(first_error)?;

    let synthesis = synthesize(&snapshot, config);
    register(&synthesis, registry, config);

    info!(
        index_pages = synthesis.index_pages.len(),
        table_of_contents_pages = synthesis.table_of_contents_pages.len(),
        skipped = synthesis.skipped.len(),
        suppressed = synthesis.suppressed.len(),
        "synthesized pages"
    );
    Ok(synthesis)
}

fn first_error(errors: Vec<QueryError>) -> QueryError {
    errors
        .into_iter()
        .next()
        .unwrap_or_else(|| QueryError::new("content query failed without reporting an error"))
}

/// Slugs already served by real documents.
pub fn existing_paths(snapshot: &ContentSnapshot) -> HashSet<String> {
    let toc_slugs = snapshot
        .table_of_contents
        .iter()
        .filter_map(|source| source.slug());
    let file_slugs = snapshot.files.iter().filter_map(slug_of);
    toc_slugs.chain(file_slugs).map(str::to_string).collect()
}

/// Compute every synthesized page for a snapshot. Pure: no I/O.
pub fn synthesize(snapshot: &ContentSnapshot, config: &PluginConfig) -> Synthesis {
    let existing = existing_paths(snapshot);

    for file in snapshot.files.iter().filter(|f| slug_of(f).is_none()) {
        warn!(path = %file.path, "document has no slug, listing it without a link");
    }

    let mut files = snapshot.files.clone();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    let root = tree::build(&files, |record| record.contents.clone());

    let mut synthesis = Synthesis::default();
    if !root.children.is_empty() {
        visit_directories(&root, |dir| decide(dir, config, &existing, &mut synthesis));
    }

    for source in &snapshot.table_of_contents {
        let Some(slug) = source.slug() else {
            warn!(
                path = %source.relative_path,
                "index document has no slug, skipping its table of contents"
            );
            continue;
        };
        synthesis.table_of_contents_pages.push(SynthesizedPage {
            slug: join_slug(slug, &config.table_of_contents_segment),
            title: None,
            html: None,
            kind: TemplateKind::TableOfContents,
        });
    }

    synthesis
}

fn slug_of(file: &FileRecord) -> Option<&str> {
    file.contents.as_ref().and_then(|c| c.slug.as_deref())
}

fn decide(
    dir: &DirectoryNode,
    config: &PluginConfig,
    existing: &HashSet<String>,
    synthesis: &mut Synthesis,
) -> Visit {
    if config.is_skipped(&dir.path) {
        debug!(path = %dir.path, "skipping directory and its subtree");
        synthesis.skipped.push(dir.path.clone());
        return Visit::SkipSubtree;
    }

    let slug = directory_slug(&dir.path);
    if existing.contains(&slug) {
        debug!(path = %dir.path, %slug, "directory already has an index document");
        synthesis.suppressed.push(dir.path.clone());
        return Visit::Continue;
    }

    let title = if dir.is_root() {
        ROOT_TITLE.to_string()
    } else {
        sentence_case(&dir.basename)
    };
    debug!(path = %dir.path, %slug, "synthesizing index page");
    synthesis.index_pages.push(SynthesizedPage {
        slug,
        title: Some(title),
        html: Some(render_listing(dir).into_string()),
        kind: TemplateKind::IndexPage,
    });
    Visit::Continue
}

/// Hand every synthesized page to the registry.
pub fn register<R>(synthesis: &Synthesis, registry: &mut R, config: &PluginConfig)
where
    R: PageRegistry + ?Sized,
{
    for page in synthesis.pages() {
        let component = match page.kind {
            TemplateKind::IndexPage => &config.templates.index_page,
            TemplateKind::TableOfContents => &config.templates.table_of_contents,
        };
        registry.create_page(PageRequest {
            path: page.slug.clone(),
            component: component.clone(),
            context: PageContext::from(page),
        });
    }
}
