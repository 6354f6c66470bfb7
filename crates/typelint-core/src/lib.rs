//! # typelint-core
//!
//! Core framework for linting typed syntax trees.
//!
//! The crate is the linter core only: it walks a tree produced by an
//! external parser, consults an external type-resolution oracle, and
//! collects positioned diagnostics. It never reads files, parses source
//! text, or writes to any output sink. It includes:
//!
//! - [`SyntaxNode`] / [`SourceUnit`] — the tree model handed in by a front
//!   end
//! - [`TypeResolver`] — the semantic oracle trait rules query
//! - [`Rule`] trait for per-node lint checks, dispatched by [`SyntaxKind`]
//! - [`Linter`] for orchestrating a run over one tree
//! - [`Diagnostic`] / [`LintResult`] for representing what was found
//!
//! ## Example
//!
//! ```ignore
//! use typelint_core::{DeclaredTypeResolver, Linter, SourceUnit};
//!
//! let linter = Linter::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let unit = SourceUnit::new("input.ts", text, root);
//! let result = linter.run(&unit, &DeclaredTypeResolver::new())?;
//! print!("{}", result.format_report());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod linter;
mod registry;
mod reporter;
mod resolver;
mod rule;
mod syntax;
mod types;

/// Tree traversal primitives.
pub mod walker;

pub use config::{Config, ConfigError, RuleConfig};
pub use linter::{LintError, Linter, LinterBuilder};
pub use registry::RuleRegistry;
pub use reporter::{LineIndex, Reporter};
pub use resolver::{DeclaredTypeResolver, ResolveError, TypeDescriptor, TypeResolver};
pub use rule::{Finding, Rule, RuleBox, RuleError};
pub use syntax::{SourceUnit, SyntaxKind, SyntaxNode};
pub use types::{Diagnostic, DiagnosticReport, LintResult, Location, Severity};
