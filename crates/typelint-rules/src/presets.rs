//! Rule presets for common configurations.

use crate::{CamelCaseNaming, ExplicitReturnType, NoExplicitAny, PreferEnumOverString};
use typelint_core::{RuleBox, Severity};

/// Preset configurations for typelint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// All rules at error severity.
    Strict,
    /// Minimal rules for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `explicit-return-type` (TL001) - Functions must annotate returns
/// - `no-explicit-any` (TL002) - No explicit `any` on variables
/// - `camel-case-naming` (TL003) - Variable names in camelCase
/// - `prefer-enum-over-string` (TL004) - Enums for type-carrying variables
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ExplicitReturnType::new()),
        Box::new(NoExplicitAny::new()),
        Box::new(CamelCaseNaming::new()),
        Box::new(PreferEnumOverString::new()),
    ]
}

/// Returns the strict set of rules: all four, with the style rules
/// promoted from warning to error.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ExplicitReturnType::new()),
        Box::new(NoExplicitAny::new()),
        Box::new(CamelCaseNaming::new().severity(Severity::Error)),
        Box::new(PreferEnumOverString::new().severity(Severity::Error)),
    ]
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only the type-safety rules:
/// - `explicit-return-type`
/// - `no-explicit-any`
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ExplicitReturnType::new()),
        Box::new(NoExplicitAny::new()),
    ]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    recommended_rules()
}
