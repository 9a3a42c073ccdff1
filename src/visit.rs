//! Depth-first traversal over the document tree.
//!
//! [`visit`] walks the tree pre-order: a node's callback runs before any of
//! its children are visited, and children are visited in tree order. The
//! callback answers with a [`Visit`] instruction; [`Visit::SkipSubtree`]
//! prunes everything below the current directory while traversal carries on
//! with its siblings.
//!
//! Traversal uses an explicit stack, so tree depth is not bounded by the
//! call stack.

use crate::tree::{DirectoryNode, TreeNode};

/// What the traversal should do after a callback returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Keep descending into this node's children.
    Continue,
    /// Do not visit any descendant of this node.
    SkipSubtree,
}

/// Restricts which nodes the callback is invoked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

impl NodeKind {
    fn matches(self, node: &TreeNode) -> bool {
        matches!(
            (self, node),
            (NodeKind::Directory, TreeNode::Directory(_)) | (NodeKind::File, TreeNode::File(_))
        )
    }
}

/// Visit every node of kind `filter` under (and including) `root`.
///
/// Nodes of the other kind are traversed but never passed to `callback`.
pub fn visit<F>(root: &TreeNode, filter: NodeKind, mut callback: F)
where
    F: FnMut(&TreeNode) -> Visit,
{
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let instruction = if filter.matches(node) {
            callback(node)
        } else {
            Visit::Continue
        };

        if let (Visit::Continue, TreeNode::Directory(dir)) = (instruction, node) {
            stack.extend(dir.children.iter().rev());
        }
    }
}

/// Visit every directory under (and including) `root`, typed.
pub fn visit_directories<F>(root: &DirectoryNode, mut callback: F)
where
    F: FnMut(&DirectoryNode) -> Visit,
{
    if callback(root) == Visit::SkipSubtree {
        return;
    }
    for child in &root.children {
        visit(child, NodeKind::Directory, |node| match node {
            TreeNode::Directory(dir) => callback(dir),
            TreeNode::File(_) => Visit::Continue,
        });
    }
}
