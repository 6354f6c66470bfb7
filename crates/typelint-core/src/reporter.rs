//! Diagnostic reporter: turns a node + finding into a positioned record.
//!
//! Positions come from a line-break table over the source text, built once
//! per run. The reporter is pure — it assembles [`Diagnostic`] values and
//! never writes to any sink; emission is the orchestrating caller's
//! concern.

use crate::rule::{Finding, Rule};
use crate::syntax::{SourceUnit, SyntaxNode};
use crate::types::{Diagnostic, Location, Severity};
use memchr::memchr_iter;
use std::path::Path;

/// Line-break table over a source text, for offset → position lookups.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first character of every line. Always starts
    /// with 0.
    line_starts: Vec<usize>,
    /// Total text length, used to clamp out-of-range offsets.
    len: usize,
}

impl LineIndex {
    /// Scans `text` for line breaks and builds the table.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(memchr_iter(b'\n', text.as_bytes()).map(|pos| pos + 1));
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// Converts a byte offset to a 1-based (line, column) pair.
    ///
    /// Columns count bytes from the line start. Offsets past the end of
    /// the text are clamped to it, so a diagnostic at EOF still lands on
    /// the last line.
    #[must_use]
    pub fn position(&self, offset: usize) -> (usize, usize) {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        (line, offset - line_start + 1)
    }
}

/// Converts `(node, finding)` pairs into [`Diagnostic`] records for one
/// source unit.
pub struct Reporter<'a> {
    path: &'a Path,
    index: LineIndex,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter for `unit`, building its line index.
    #[must_use]
    pub fn new(unit: &'a SourceUnit) -> Self {
        Self {
            path: &unit.path,
            index: LineIndex::new(&unit.text),
        }
    }

    /// Assembles the diagnostic for a finding of `rule` at `node`.
    #[must_use]
    pub fn report(
        &self,
        node: &SyntaxNode,
        rule: &dyn Rule,
        severity: Severity,
        finding: Finding,
    ) -> Diagnostic {
        let (line, column) = self.index.position(node.start);
        let length = node.name.as_deref().map_or(0, str::len);
        let location =
            Location::new(self.path.to_path_buf(), line, column).with_span(node.start, length);

        let mut diagnostic =
            Diagnostic::new(rule.code(), rule.name(), severity, location, finding.message);
        if let Some(suggestion) = finding.suggestion {
            diagnostic = diagnostic.with_suggestion(suggestion);
        }
        diagnostic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::TypeResolver;
    use crate::rule::RuleError;
    use crate::syntax::SyntaxKind;

    #[test]
    fn position_maps_offsets_to_lines_and_columns() {
        // Offsets:      0123 4567 8
        let index = LineIndex::new("abc\ndef\ng");
        assert_eq!(index.position(0), (1, 1));
        assert_eq!(index.position(2), (1, 3));
        assert_eq!(index.position(3), (1, 4)); // the newline itself
        assert_eq!(index.position(4), (2, 1));
        assert_eq!(index.position(8), (3, 1));
    }

    #[test]
    fn position_third_line_fifth_character() {
        let index = LineIndex::new("one\ntwo\nthree and more\n");
        // Line starts: 0, 4, 8. Offset 12 is the 5th byte of line 3.
        assert_eq!(index.position(12), (3, 5));
    }

    #[test]
    fn position_clamps_past_eof() {
        let index = LineIndex::new("abc\nde");
        assert_eq!(index.position(100), (2, 3));
    }

    #[test]
    fn position_on_empty_text() {
        let index = LineIndex::new("");
        assert_eq!(index.position(0), (1, 1));
        assert_eq!(index.position(5), (1, 1));
    }

    struct StubRule;

    impl Rule for StubRule {
        fn name(&self) -> &'static str {
            "stub"
        }
        fn code(&self) -> &'static str {
            "TEST000"
        }
        fn applies_to(&self) -> &'static [SyntaxKind] {
            &[SyntaxKind::VariableDeclaration]
        }
        fn check(
            &self,
            _node: &SyntaxNode,
            _resolver: &dyn TypeResolver,
        ) -> Result<Option<Finding>, RuleError> {
            Ok(None)
        }
    }

    #[test]
    fn report_assembles_positioned_diagnostic() {
        let unit = SourceUnit::new(
            "input.ts",
            "let a;\nlet TestVaRiaBlE: any;\n",
            SyntaxNode::new(SyntaxKind::SourceFile, 0),
        );
        let node = SyntaxNode::new(SyntaxKind::VariableDeclaration, 7).with_name("TestVaRiaBlE");

        let reporter = Reporter::new(&unit);
        let diagnostic = reporter.report(
            &node,
            &StubRule,
            Severity::Warning,
            Finding::new("flagged").with_suggestion("rename it"),
        );

        assert_eq!(diagnostic.code, "TEST000");
        assert_eq!(diagnostic.rule, "stub");
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(diagnostic.location.line, 2);
        assert_eq!(diagnostic.location.column, 1);
        assert_eq!(diagnostic.location.offset, 7);
        assert_eq!(diagnostic.location.length, "TestVaRiaBlE".len());
        assert_eq!(diagnostic.message, "flagged");
        assert_eq!(diagnostic.suggestion.as_deref(), Some("rename it"));
    }
}
