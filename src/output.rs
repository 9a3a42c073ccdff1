//! Run report formatting.
//!
//! # Information-First Display
//!
//! Each synthesized page leads with its positional index and title, followed
//! by `→` and the served path. Directories that were skipped or already had an
//! index document are listed afterwards so authors can see why a directory
//! got no page.
//!
//! ```text
//! Index pages
//! 001 Setup → /guides/setup
//! 002 Auth → /api/auth
//!
//! Table of contents
//! 001 /guides → /guides/table-of-contents
//!
//! Skipped
//!     internal/
//!
//! Existing index
//!     guides/
//!
//! Synthesized 2 index pages, 1 table of contents page
//! ```
//!
//! `format_synthesis_output` is pure and returns lines; the host decides
//! where they go.

use crate::synthesize::Synthesis;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// `1 page`, `2 pages`.
fn plural(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {singular}s")
    }
}

/// Display form of a directory path; the root shows as `/`.
fn dir_label(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else {
        format!("{path}/")
    }
}

/// Format the outcome of one synthesis pass.
pub fn format_synthesis_output(synthesis: &Synthesis) -> Vec<String> {
    let mut lines = Vec::new();

    if !synthesis.index_pages.is_empty() {
        lines.push("Index pages".to_string());
        for (i, page) in synthesis.index_pages.iter().enumerate() {
            lines.push(format!(
                "{} {} \u{2192} {}",
                format_index(i + 1),
                page.title.as_deref().unwrap_or(&page.slug),
                page.slug
            ));
        }
    }

    if !synthesis.table_of_contents_pages.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push("Table of contents".to_string());
        for (i, page) in synthesis.table_of_contents_pages.iter().enumerate() {
            let source = page
                .slug
                .rsplit_once('/')
                .map(|(parent, _)| if parent.is_empty() { "/" } else { parent })
                .unwrap_or("/");
            lines.push(format!(
                "{} {} \u{2192} {}",
                format_index(i + 1),
                source,
                page.slug
            ));
        }
    }

    for (heading, paths) in [
        ("Skipped", &synthesis.skipped),
        ("Existing index", &synthesis.suppressed),
    ] {
        if paths.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(heading.to_string());
        for path in paths {
            lines.push(format!("    {}", dir_label(path)));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push(format!(
        "Synthesized {}, {}",
        plural(synthesis.index_pages.len(), "index page"),
        plural(
            synthesis.table_of_contents_pages.len(),
            "table of contents page"
        )
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SynthesizedPage, TemplateKind};

    fn index_page(slug: &str, title: &str) -> SynthesizedPage {
        SynthesizedPage {
            slug: slug.to_string(),
            title: Some(title.to_string()),
            html: Some(String::new()),
            kind: TemplateKind::IndexPage,
        }
    }

    fn toc_page(slug: &str) -> SynthesizedPage {
        SynthesizedPage {
            slug: slug.to_string(),
            title: None,
            html: None,
            kind: TemplateKind::TableOfContents,
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(0, "index page"), "0 index pages");
        assert_eq!(plural(1, "index page"), "1 index page");
        assert_eq!(plural(2, "index page"), "2 index pages");
    }

    #[test]
    fn dir_label_root() {
        assert_eq!(dir_label(""), "/");
        assert_eq!(dir_label("guides"), "guides/");
    }

    #[test]
    fn empty_synthesis_only_has_summary() {
        let lines = format_synthesis_output(&Synthesis::default());
        assert_eq!(
            lines,
            vec!["Synthesized 0 index pages, 0 table of contents pages"]
        );
    }

    #[test]
    fn full_report() {
        let synthesis = Synthesis {
            index_pages: vec![
                index_page("/guides/setup", "Setup"),
                index_page("/api/auth", "Auth"),
            ],
            table_of_contents_pages: vec![toc_page("/guides/table-of-contents")],
            skipped: vec!["internal".to_string()],
            suppressed: vec!["guides".to_string()],
        };
        let lines = format_synthesis_output(&synthesis);
        assert_eq!(
            lines,
            vec![
                "Index pages",
                "001 Setup \u{2192} /guides/setup",
                "002 Auth \u{2192} /api/auth",
                "",
                "Table of contents",
                "001 /guides \u{2192} /guides/table-of-contents",
                "",
                "Skipped",
                "    internal/",
                "",
                "Existing index",
                "    guides/",
                "",
                "Synthesized 2 index pages, 1 table of contents page",
            ]
        );
    }

    #[test]
    fn root_table_of_contents_source() {
        let synthesis = Synthesis {
            table_of_contents_pages: vec![toc_page("/table-of-contents")],
            ..Synthesis::default()
        };
        let lines = format_synthesis_output(&synthesis);
        assert_eq!(lines[1], "001 / \u{2192} /table-of-contents");
    }
}
