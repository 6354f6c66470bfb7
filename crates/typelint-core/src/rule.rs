//! Rule trait for defining lint checks over syntax nodes.

use crate::resolver::{ResolveError, TypeResolver};
use crate::syntax::{SyntaxKind, SyntaxNode};
use crate::types::Severity;
use thiserror::Error;

/// A violation detected by a rule at one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Human-readable description of the violation.
    pub message: String,
    /// Optional suggestion for fixing it.
    pub suggestion: Option<String>,
}

impl Finding {
    /// Creates a finding with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a fix suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Failure of one rule evaluation at one node.
///
/// Both variants are recoverable: the linter logs the failure, counts it,
/// and continues with the next rule/node pair. One broken rule must never
/// abort analysis of the rest of the tree.
#[derive(Debug, Error)]
pub enum RuleError {
    /// The type resolver could not produce a descriptor.
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The node did not have the shape the rule expects (e.g. a
    /// declaration with no bound name).
    #[error("unexpected {kind:?} node shape: {message}")]
    NodeShape {
        /// Kind of the offending node.
        kind: SyntaxKind,
        /// What was missing or malformed.
        message: String,
    },
}

/// A lint rule: a pure predicate over a node plus the message it reports.
///
/// Rules are constructed once at linter configuration time and are
/// stateless thereafter; the same instance is invoked at every matching
/// node across the whole tree, so it must not retain per-node state.
/// `Send + Sync` so independent runs can share a rule set across threads.
///
/// # Example
///
/// ```ignore
/// use typelint_core::{Finding, Rule, RuleError, SyntaxKind, SyntaxNode, TypeResolver};
///
/// pub struct NoEmptyEnums;
///
/// impl Rule for NoEmptyEnums {
///     fn name(&self) -> &'static str { "no-empty-enums" }
///     fn code(&self) -> &'static str { "TL900" }
///     fn applies_to(&self) -> &'static [SyntaxKind] { &[SyntaxKind::EnumDeclaration] }
///
///     fn check(
///         &self,
///         node: &SyntaxNode,
///         _resolver: &dyn TypeResolver,
///     ) -> Result<Option<Finding>, RuleError> {
///         Ok(node
///             .children
///             .is_empty()
///             .then(|| Finding::new("Enums must declare at least one member")))
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "no-explicit-any").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "TL002").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for diagnostics from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Node kinds this rule inspects. The registry dispatches on these;
    /// `check` is only ever called with nodes of a listed kind.
    fn applies_to(&self) -> &'static [SyntaxKind];

    /// Checks a single node.
    ///
    /// Must be pure: no mutation of the node, no mutation through the
    /// resolver. Returns `Ok(None)` when the node is fine.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] when the evaluation cannot complete; the
    /// linter recovers by skipping this rule/node pair.
    fn check(
        &self,
        node: &SyntaxNode,
        resolver: &dyn TypeResolver,
    ) -> Result<Option<Finding>, RuleError>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
