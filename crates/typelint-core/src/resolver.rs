//! Type-resolution oracle consumed by rules.
//!
//! The core does not implement type inference. A front end supplies an
//! implementation of [`TypeResolver`] alongside the parsed tree, and rules
//! query it for the semantic type of a node. The core only compares the
//! returned descriptors; it never constructs or narrows types itself.

use crate::syntax::{SyntaxKind, SyntaxNode};
use thiserror::Error;

/// Semantic type of an expression or declared variable, as printed by the
/// resolver (e.g. `"any"`, `"string"`, `"User"`).
///
/// The printable name is the oracle's real interface, but recognition of
/// the well-known names is centralized here: rules call [`is_any`] and
/// [`is_string`] instead of comparing literals, so a resolver that changes
/// its formatting only has to be accommodated in this one place.
///
/// [`is_any`]: TypeDescriptor::is_any
/// [`is_string`]: TypeDescriptor::is_string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor(String);

impl TypeDescriptor {
    /// Creates a descriptor from a printable type name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The printable type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this is the `any` type. The match is exact: the resolvers
    /// this core targets print `any` in lowercase only.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.0 == "any"
    }

    /// Whether this is the primitive string type. Case-insensitive, since
    /// resolvers disagree on `string` vs `String`.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.0.eq_ignore_ascii_case("string")
    }
}

impl std::fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failure to produce a [`TypeDescriptor`] for a node.
///
/// Resolution failures are recoverable: the linter skips the affected
/// rule/node pair and continues the run.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The resolver has no type information for this node.
    #[error("no type information for {kind:?} node at offset {offset}")]
    Unresolved {
        /// Kind of the node that could not be resolved.
        kind: SyntaxKind,
        /// Byte offset of the node in the source text.
        offset: usize,
    },

    /// The resolver failed internally.
    #[error("type resolution failed: {message}")]
    Internal {
        /// Resolver-provided failure description.
        message: String,
    },
}

/// External oracle mapping a syntax node to its semantic type.
///
/// Implementations must be read-only: `resolve` takes `&self` and may be
/// called from several concurrent runs if the implementation is shared.
pub trait TypeResolver {
    /// Resolves the semantic type of `node`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when no type can be produced; the linter
    /// treats this as a recoverable per-node failure.
    fn resolve(&self, node: &SyntaxNode) -> Result<TypeDescriptor, ResolveError>;
}

/// Reference resolver that trusts explicit annotations.
///
/// Resolves a node to its `declared_type` verbatim and reports
/// [`ResolveError::Unresolved`] for unannotated nodes. Real front ends
/// supply an inference-backed implementation; this one is enough for tests
/// and annotation-only embeddings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredTypeResolver;

impl DeclaredTypeResolver {
    /// Creates the resolver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TypeResolver for DeclaredTypeResolver {
    fn resolve(&self, node: &SyntaxNode) -> Result<TypeDescriptor, ResolveError> {
        node.declared_type
            .as_deref()
            .map(TypeDescriptor::new)
            .ok_or(ResolveError::Unresolved {
                kind: node.kind,
                offset: node.start,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_any_exactly() {
        assert!(TypeDescriptor::new("any").is_any());
        assert!(!TypeDescriptor::new("Any").is_any());
        assert!(!TypeDescriptor::new("anything").is_any());
    }

    #[test]
    fn recognizes_string_case_insensitively() {
        assert!(TypeDescriptor::new("string").is_string());
        assert!(TypeDescriptor::new("String").is_string());
        assert!(!TypeDescriptor::new("string[]").is_string());
    }

    #[test]
    fn declared_type_resolver_uses_annotation() {
        let node = SyntaxNode::new(SyntaxKind::VariableDeclaration, 0)
            .with_name("message")
            .with_declared_type("string");
        let resolved = DeclaredTypeResolver::new()
            .resolve(&node)
            .expect("annotated node should resolve");
        assert_eq!(resolved.name(), "string");
    }

    #[test]
    fn declared_type_resolver_errors_without_annotation() {
        let node = SyntaxNode::new(SyntaxKind::VariableDeclaration, 42).with_name("x");
        let err = DeclaredTypeResolver::new()
            .resolve(&node)
            .expect_err("unannotated node should not resolve");
        assert!(matches!(
            err,
            ResolveError::Unresolved {
                kind: SyntaxKind::VariableDeclaration,
                offset: 42
            }
        ));
    }
}
