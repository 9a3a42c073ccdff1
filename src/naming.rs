//! Title and slug helpers shared by the synthesizer and the listing renderer.
//!
//! ## Display Titles
//!
//! Directory names become titles in "sentence case": word separators turn
//! into single spaces, everything is lowercased, and only the very first
//! character is capitalized. This applies to every synthesized title:
//! - `getting-started/` → "Getting started"
//! - `api_reference/` → "Api reference"
//! - `FAQ/` → "Faq" (the remainder is lowercased even when it was an acronym)

/// Convert a path segment to a sentence-case display title.
///
/// - `"getting-started"` → `"Getting started"`
/// - `"FAQ"` → `"Faq"`
/// - `"release__notes-"` → `"Release notes"`
/// - `""` → `""`
pub fn sentence_case(name: &str) -> String {
    let words: Vec<&str> = name
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect();
    let lowered = words.join(" ").to_lowercase();

    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Strip the final extension from a basename (`install.md` → `install`).
///
/// Dotfiles keep their name: `.hidden` → `.hidden`.
pub fn file_stem(basename: &str) -> &str {
    match basename.rfind('.') {
        Some(0) | None => basename,
        Some(pos) => &basename[..pos],
    }
}

/// Slug served for a directory path relative to the content root.
pub fn directory_slug(path: &str) -> String {
    format!("/{path}")
}

/// Append a path segment to a slug.
///
/// - `("/guides", "table-of-contents")` → `"/guides/table-of-contents"`
/// - `("/guides/", "table-of-contents")` → `"/guides/table-of-contents"`
/// - `("/", "table-of-contents")` → `"/table-of-contents"`
pub fn join_slug(base: &str, segment: &str) -> String {
    let base = base.trim_end_matches('/');
    let segment = segment.trim_matches('/');
    if base.starts_with('/') || base.is_empty() {
        format!("{base}/{segment}")
    } else {
        format!("/{base}/{segment}")
    }
}
