//! Syntax tree model consumed by the linter.
//!
//! The tree is produced by an external parser front end; the core never
//! parses source text itself and treats every node as read-only. Nodes own
//! their children, so the parse-time invariants (acyclic, single parent)
//! hold by construction.

use std::path::PathBuf;

/// Syntactic category of a [`SyntaxNode`].
///
/// A closed enumeration: rule dispatch is keyed by this tag, so every kind
/// a front end can produce must be listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    /// Root of a parsed file. Every well-formed tree has exactly one,
    /// at the top.
    SourceFile,
    /// `class` declaration.
    ClassDeclaration,
    /// Property inside a class body.
    PropertyDeclaration,
    /// `enum` declaration.
    EnumDeclaration,
    /// Member of an `enum` body.
    EnumMember,
    /// `function` declaration.
    FunctionDeclaration,
    /// Parameter of a function or constructor.
    Parameter,
    /// Braced statement block.
    Block,
    /// Single variable declarator (`let`/`const`/`var` binding).
    VariableDeclaration,
    /// Expression used in statement position.
    ExpressionStatement,
    /// `return` statement.
    ReturnStatement,
    /// Bare identifier reference.
    Identifier,
}

/// A node of the parsed syntax tree.
///
/// Built by the front end, read-only to the core. `start` is the byte
/// offset of the node in the originating source text; the reporter turns it
/// into a 1-based line/column pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Syntactic category of this node.
    pub kind: SyntaxKind,
    /// Byte offset of the node start in the source text.
    pub start: usize,
    /// Identifier bound by this node (variable or function name), if any.
    pub name: Option<String>,
    /// Explicit type annotation written by the author. `None` means the
    /// type is inferred or undeclared.
    pub declared_type: Option<String>,
    /// Child nodes in source order. Empty for leaves.
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Creates a leaf node of the given kind at a byte offset.
    #[must_use]
    pub fn new(kind: SyntaxKind, start: usize) -> Self {
        Self {
            kind,
            start,
            name: None,
            declared_type: None,
            children: Vec::new(),
        }
    }

    /// Sets the identifier bound by this node.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the explicit type annotation of this node.
    #[must_use]
    pub fn with_declared_type(mut self, ty: impl Into<String>) -> Self {
        self.declared_type = Some(ty.into());
        self
    }

    /// Appends one child node.
    #[must_use]
    pub fn with_child(mut self, child: SyntaxNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child nodes in order.
    #[must_use]
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = SyntaxNode>,
    {
        self.children.extend(children);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(SyntaxNode::subtree_len).sum::<usize>()
    }
}

/// A parsed file handed to [`Linter::run`](crate::Linter::run): the source
/// text, its path, and the root of its syntax tree.
///
/// The root must be a [`SyntaxKind::SourceFile`] node; `run` rejects
/// anything else as a front-end contract violation.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Path of the originating file, as reported in diagnostics.
    pub path: PathBuf,
    /// Full source text the tree was parsed from.
    pub text: String,
    /// Root node of the tree.
    pub root: SyntaxNode,
}

impl SourceUnit {
    /// Creates a source unit.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>, root: SyntaxNode) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
            root,
        }
    }
}
