//! Rule registry: maps node kinds to the rules that inspect them.

use crate::rule::{Rule, RuleBox};
use crate::syntax::SyntaxKind;
use std::collections::HashMap;

/// Ordered collection of rules, indexed by the node kinds they declared in
/// [`Rule::applies_to`].
///
/// Registration order is preserved as evaluation order for rules on the
/// same kind, so diagnostics for multiple violations at one node come out
/// in a deterministic, reproducible order across runs.
#[derive(Default)]
pub struct RuleRegistry {
    rules: Vec<RuleBox>,
    by_kind: HashMap<SyntaxKind, Vec<usize>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from an ordered rule set.
    #[must_use]
    pub fn from_rules<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        let mut registry = Self::new();
        for rule in rules {
            registry.register(rule);
        }
        registry
    }

    /// Registers a rule under every kind it applies to.
    pub fn register(&mut self, rule: RuleBox) {
        let index = self.rules.len();
        for &kind in rule.applies_to() {
            self.by_kind.entry(kind).or_default().push(index);
        }
        self.rules.push(rule);
    }

    /// Returns the rules registered for `kind`, in registration order.
    /// Empty if none are registered.
    pub fn rules_for(&self, kind: SyntaxKind) -> impl Iterator<Item = &dyn Rule> {
        self.by_kind
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&index| self.rules[index].as_ref())
    }

    /// Iterates over all registered rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
