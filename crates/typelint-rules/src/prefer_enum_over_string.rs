//! Rule requiring enum types for variables that represent a "type".
//!
//! # Rationale
//!
//! A variable named `objectType`, `entityType` and so on encodes a closed
//! set of alternatives. Backing it with a free string admits every typo as
//! a value; an enumerated type makes the set explicit and checkable.
//!
//! # Configuration
//!
//! - `marker`: the case-insensitive substring of the name that marks a
//!   type-carrying variable (default: `"type"`)

use typelint_core::{Finding, Rule, RuleError, Severity, SyntaxKind, SyntaxNode, TypeResolver};

/// Rule code for prefer-enum-over-string.
pub const CODE: &str = "TL004";

/// Rule name for prefer-enum-over-string.
pub const NAME: &str = "prefer-enum-over-string";

/// Flags string-typed variables whose name marks them as type-carrying.
#[derive(Debug, Clone)]
pub struct PreferEnumOverString {
    /// Lowercased substring that marks a type-carrying variable name.
    marker: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PreferEnumOverString {
    fn default() -> Self {
        Self::new()
    }
}

impl PreferEnumOverString {
    /// Creates a new rule with the default `"type"` marker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            marker: "type".to_string(),
            severity: Severity::Warning,
        }
    }

    /// Sets the marker substring (matched case-insensitively).
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into().to_ascii_lowercase();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for PreferEnumOverString {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires enum types, not strings, for variables representing a type"
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
        let Some(name) = node.name.as_deref() else {
            return Err(RuleError::NodeShape {
                kind: node.kind,
                message: "variable declaration binds no name".to_string(),
            });
        };

        // Name check first; the oracle is only consulted for marked names.
        if !name.to_ascii_lowercase().contains(&self.marker) {
            return Ok(None);
        }

        let ty = resolver.resolve(node)?;
        if !ty.is_string() {
            return Ok(None);
        }
        Ok(Some(
            Finding::new("Use Enums to represent types, not strings")
                .with_suggestion("Model the closed set of values as an enum"),
        ))
    }
}
