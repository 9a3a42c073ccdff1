//! Flat file list → directory tree.
//!
//! The content provider hands over documents as a flat, path-sorted list.
//! [`build`] turns that list into a rooted tree by partitioning on the first
//! path segment, recursively:
//!
//! ```text
//! guides/setup/config.md        (root)
//! guides/setup/install.md  →    ├── guides/
//! guides/intro.md               │   ├── setup/
//! changelog.md                  │   │   ├── config.md
//!                               │   │   └── install.md
//!                               │   └── intro.md
//!                               └── changelog.md
//! ```
//!
//! Order at every level is the order in which a segment first appears in the
//! input. The builder never sorts; callers sort the input beforehand.
//!
//! Paths are normalized on the way in: empty segments from leading, trailing
//! or doubled slashes are dropped. A record whose path has no segment at all
//! has no place in the tree and is left out with a warning.

use crate::types::{FileRecord, Metadata};
use std::collections::HashMap;
use tracing::warn;

/// A node in the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory(DirectoryNode),
    File(FileNode),
}

/// A directory reconstructed from the path prefixes of its files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    pub basename: String,
    /// Slash-joined path from the root; empty for the root itself
    pub path: String,
    pub children: Vec<TreeNode>,
}

/// A document leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub basename: String,
    pub path: String,
    pub metadata: Option<Metadata>,
}

impl TreeNode {
    pub fn path(&self) -> &str {
        match self {
            TreeNode::Directory(dir) => &dir.path,
            TreeNode::File(file) => &file.path,
        }
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            TreeNode::Directory(dir) => Some(dir),
            TreeNode::File(_) => None,
        }
    }
}

impl DirectoryNode {
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Every file below this directory, in pre-order.
    pub fn files(&self) -> Vec<&FileNode> {
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode> = self.children.iter().rev().collect();
        while let Some(node) = stack.pop() {
            match node {
                TreeNode::File(file) => out.push(file),
                TreeNode::Directory(dir) => stack.extend(dir.children.iter().rev()),
            }
        }
        out
    }
}

/// Build the document tree from a path-ordered list of records.
///
/// `metadata` picks the metadata to attach to each file node; returning
/// `None` is allowed and yields a file node without metadata.
pub fn build<F>(files: &[FileRecord], metadata: F) -> DirectoryNode
where
    F: Fn(&FileRecord) -> Option<Metadata>,
{
    let entries: Vec<(Vec<&str>, &FileRecord)> = files
        .iter()
        .filter_map(|record| {
            let segs = segments(&record.path);
            if segs.is_empty() {
                warn!(
                    basename = %record.basename,
                    path = %record.path,
                    "document has an empty path, leaving it out of the tree"
                );
                return None;
            }
            Some((segs, record))
        })
        .collect();

    DirectoryNode {
        basename: String::new(),
        path: String::new(),
        children: build_level(&entries, 0, "", &metadata),
    }
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// One group of records sharing a first segment at the current depth.
struct Group<'a, 'r> {
    segment: &'a str,
    leaves: Vec<&'r FileRecord>,
    nested: Vec<(Vec<&'a str>, &'r FileRecord)>,
}

fn build_level<F>(
    entries: &[(Vec<&str>, &FileRecord)],
    depth: usize,
    parent_path: &str,
    metadata: &F,
) -> Vec<TreeNode>
where
    F: Fn(&FileRecord) -> Option<Metadata>,
{
    // Stable partition by the segment at `depth`, in order of first appearance
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for (segs, record) in entries {
        let Some(&segment) = segs.get(depth) else {
            continue;
        };
        let slot = *index.entry(segment).or_insert_with(|| {
            groups.push(Group {
                segment,
                leaves: Vec::new(),
                nested: Vec::new(),
            });
            groups.len() - 1
        });
        if segs.len() == depth + 1 {
            groups[slot].leaves.push(*record);
        } else {
            groups[slot].nested.push((segs.clone(), *record));
        }
    }

    let mut children = Vec::new();
    for group in groups {
        let path = join_path(parent_path, group.segment);

        for record in group.leaves {
            children.push(TreeNode::File(FileNode {
                basename: record.basename.clone(),
                path: path.clone(),
                metadata: metadata(record),
            }));
        }

        if !group.nested.is_empty() {
            let nested = build_level(&group.nested, depth + 1, &path, metadata);
            children.push(TreeNode::Directory(DirectoryNode {
                basename: group.segment.to_string(),
                path,
                children: nested,
            }));
        }
    }
    children
}

fn join_path(parent: &str, segment: &str) -> String {
    if parent.is_empty() {
        segment.to_string()
    } else {
        format!("{parent}/{segment}")
    }
}
