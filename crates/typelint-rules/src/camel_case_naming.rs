//! Rule enforcing camelCase variable names.

use regex::Regex;
use std::sync::LazyLock;
use typelint_core::{Finding, Rule, RuleError, Severity, SyntaxKind, SyntaxNode, TypeResolver};

/// Rule code for camel-case-naming.
pub const CODE: &str = "TL003";

/// Rule name for camel-case-naming.
pub const NAME: &str = "camel-case-naming";

/// Lowercase first segment, then digit or capitalized segments, optional
/// trailing capital. Rejects underscores, spaces, and leading capitals.
const CAMEL_CASE_PATTERN: &str = r"^[a-z]+((\d)|([A-Z0-9][a-z0-9]+))*([A-Z])?$";

#[allow(clippy::expect_used)]
static CAMEL_CASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(CAMEL_CASE_PATTERN).expect("camel case pattern is a valid regex")
});

/// Flags variable declarations whose bound name is not camelCase.
#[derive(Debug, Clone)]
pub struct CamelCaseNaming {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for CamelCaseNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl CamelCaseNaming {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for CamelCaseNaming {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires variable names to follow camelCase"
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
        _resolver: &dyn TypeResolver,
    ) -> Result<Option<Finding>, RuleError> {
        let Some(name) = node.name.as_deref() else {
            return Err(RuleError::NodeShape {
                kind: node.kind,
                message: "variable declaration binds no name".to_string(),
            });
        };

        if CAMEL_CASE.is_match(name) {
            return Ok(None);
        }
        Ok(Some(Finding::new(format!(
            "Variables must be named in camelCase. {name} is invalid."
        ))))
    }
}
