//! Linter orchestrator: binds a rule set and a type resolver to a source
//! tree and produces the full diagnostic sequence.

use crate::config::Config;
use crate::registry::RuleRegistry;
use crate::reporter::Reporter;
use crate::resolver::TypeResolver;
use crate::rule::{Rule, RuleBox};
use crate::syntax::{SourceUnit, SyntaxKind};
use crate::types::LintResult;
use crate::walker::walk;

use thiserror::Error;
use tracing::{debug, info, warn};

/// Fatal errors aborting a lint run.
///
/// Per-rule failures are not here: those are recovered at dispatch and
/// surface only in [`LintResult::recovered_errors`]. A `LintError` means
/// the front end violated its contract.
#[derive(Debug, Error)]
pub enum LintError {
    /// The tree root is not a `SourceFile` node.
    #[error("malformed syntax tree: expected a SourceFile root, found {found:?}")]
    MalformedTree {
        /// Kind of the node handed in as root.
        found: SyntaxKind,
    },
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules in order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        Linter {
            registry: RuleRegistry::from_rules(self.rules),
            config: self.config.unwrap_or_default(),
        }
    }
}

/// The linter: owns a rule registry and drives the tree walker over one
/// source unit at a time.
///
/// `run` is blocking, synchronous, and free of shared mutable state; two
/// runs over different trees may execute on parallel threads as long as
/// each gets its own resolver (or one safe for concurrent reads).
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    registry: RuleRegistry,
    config: Config,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.registry.len()
    }

    /// Lints one source unit and returns the collected diagnostics.
    ///
    /// Diagnostics come out in pre-order traversal order and, within one
    /// node, in rule-registration order. A rule evaluation that fails
    /// (resolver failure, unexpected node shape) is logged, counted in
    /// [`LintResult::recovered_errors`], and skipped — the rest of the run
    /// is unaffected.
    ///
    /// The resolver is passed explicitly per run rather than stored on the
    /// linter, so one configured rule set can serve many files, each with
    /// its own semantic context.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::MalformedTree`] if the root node is not a
    /// `SourceFile`.
    pub fn run(
        &self,
        unit: &SourceUnit,
        resolver: &dyn TypeResolver,
    ) -> Result<LintResult, LintError> {
        if unit.root.kind != SyntaxKind::SourceFile {
            return Err(LintError::MalformedTree {
                found: unit.root.kind,
            });
        }

        info!("Linting {} with {} rules", unit.path.display(), self.registry.len());

        let reporter = Reporter::new(unit);
        let mut result = LintResult::new();

        walk(&unit.root, &mut |node| {
            result.nodes_visited += 1;

            for rule in self.registry.rules_for(node.kind) {
                if !self.config.is_rule_enabled(rule.name()) {
                    debug!("Skipping disabled rule: {}", rule.name());
                    continue;
                }

                match rule.check(node, resolver) {
                    Ok(Some(finding)) => {
                        let severity = self
                            .config
                            .rule_severity(rule.name())
                            .unwrap_or_else(|| rule.default_severity());
                        result
                            .diagnostics
                            .push(reporter.report(node, rule, severity, finding));
                    }
                    Ok(None) => {}
                    Err(e) => {
                        warn!(
                            rule = rule.name(),
                            offset = node.start,
                            "rule evaluation failed, skipping: {e}"
                        );
                        result.recovered_errors += 1;
                    }
                }
            }
        });

        info!(
            "Lint complete: {} diagnostics in {} nodes ({} recovered failures)",
            result.diagnostics.len(),
            result.nodes_visited,
            result.recovered_errors
        );

        Ok(result)
    }
}
