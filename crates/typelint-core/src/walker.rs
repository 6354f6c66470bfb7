//! Pre-order traversal over the syntax tree.
//!
//! The walker is pure plumbing: it visits every node exactly once, parent
//! before children, children in source order, and carries no rule logic.
//! Failure handling lives at the linter dispatch level; if a callback does
//! fail, the walker propagates the error instead of swallowing it.

use crate::syntax::SyntaxNode;

/// Walks `root` pre-order, depth-first, calling `visit` at every node.
///
/// `visit` runs on a node before any of its children; children are visited
/// left to right. A callback error abandons the rest of the traversal and
/// is returned to the caller.
///
/// # Errors
///
/// Returns the first error produced by `visit`.
pub fn try_walk<E, F>(root: &SyntaxNode, visit: &mut F) -> Result<(), E>
where
    F: FnMut(&SyntaxNode) -> Result<(), E>,
{
    visit(root)?;
    for child in &root.children {
        try_walk(child, visit)?;
    }
    Ok(())
}

/// Infallible variant of [`try_walk`] for visitors that cannot fail.
pub fn walk<F>(root: &SyntaxNode, visit: &mut F)
where
    F: FnMut(&SyntaxNode),
{
    visit(root);
    for child in &root.children {
        walk(child, visit);
    }
}
