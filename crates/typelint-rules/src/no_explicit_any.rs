//! Rule forbidding explicit `any` type annotations on variables.
//!
//! # Rationale
//!
//! An explicit `any` opts the variable out of type checking on purpose.
//! Only the *explicit* case is flagged: an unannotated variable whose type
//! merely infers to `any` is the inference's business, not the author's.

use typelint_core::{Finding, Rule, RuleError, Severity, SyntaxKind, SyntaxNode, TypeResolver};

/// Rule code for no-explicit-any.
pub const CODE: &str = "TL002";

/// Rule name for no-explicit-any.
pub const NAME: &str = "no-explicit-any";

/// Flags variable declarations annotated with the `any` type.
#[derive(Debug, Clone)]
pub struct NoExplicitAny {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NoExplicitAny {
    fn default() -> Self {
        Self::new()
    }
}

impl NoExplicitAny {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NoExplicitAny {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids explicit any type annotations on variables"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn applies_to(&self) -> &'static [SyntaxKind] {
        &[SyntaxKind::VariableDeclaration]
    }

    fn check(
        &self,
        node: &SyntaxNode,
        resolver: &dyn TypeResolver,
    ) -> Result<Option<Finding>, RuleError> {
        // No annotation, nothing explicit to flag; the resolver is not
        // consulted at all for these nodes.
        if node.declared_type.is_none() {
            return Ok(None);
        }

        let ty = resolver.resolve(node)?;
        if !ty.is_any() {
            return Ok(None);
        }
        Ok(Some(
            Finding::new("Variables with explicit any types are not allowed")
                .with_suggestion("Declare a concrete type or drop the annotation"),
        ))
    }
}
