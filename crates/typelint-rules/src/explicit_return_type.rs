//! Rule requiring functions to declare an explicit return type.
//!
//! # Rationale
//!
//! An inferred return type silently widens when a branch is added or an
//! expression changes; the annotation pins the contract at the signature.

use typelint_core::{Finding, Rule, RuleError, Severity, SyntaxKind, SyntaxNode, TypeResolver};

/// Rule code for explicit-return-type.
pub const CODE: &str = "TL001";

/// Rule name for explicit-return-type.
pub const NAME: &str = "explicit-return-type";

/// Flags function declarations without a return type annotation.
#[derive(Debug, Clone)]
pub struct ExplicitReturnType {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ExplicitReturnType {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplicitReturnType {
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

impl Rule for ExplicitReturnType {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires functions to declare an explicit return type"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn applies_to(&self) -> &'static [SyntaxKind] {
        &[SyntaxKind::FunctionDeclaration]
    }

    fn check(
        &self,
        node: &SyntaxNode,
        _resolver: &dyn TypeResolver,
    ) -> Result<Option<Finding>, RuleError> {
        if node.declared_type.is_some() {
            return Ok(None);
        }
        Ok(Some(
            Finding::new("A function must declare an explicit return type")
                .with_suggestion("Annotate the signature, e.g. `(): void`"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typelint_core::DeclaredTypeResolver;

    fn check(node: &SyntaxNode) -> Option<Finding> {
        ExplicitReturnType::new()
            .check(node, &DeclaredTypeResolver::new())
            .expect("check should not fail")
    }

    #[test]
    fn flags_missing_return_type() {
        let node = SyntaxNode::new(SyntaxKind::FunctionDeclaration, 0).with_name("test");
        let finding = check(&node).expect("should flag");
        assert_eq!(
            finding.message,
            "A function must declare an explicit return type"
        );
    }

    #[test]
    fn accepts_annotated_function() {
        let node = SyntaxNode::new(SyntaxKind::FunctionDeclaration, 0)
            .with_name("test2")
            .with_declared_type("number");
        assert!(check(&node).is_none());
    }

    #[test]
    fn void_annotation_counts_as_explicit() {
        let node = SyntaxNode::new(SyntaxKind::FunctionDeclaration, 0)
            .with_name("log")
            .with_declared_type("void");
        assert!(check(&node).is_none());
    }
}
