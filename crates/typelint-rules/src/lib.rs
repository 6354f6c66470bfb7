//! # typelint-rules
//!
//! Built-in lint rules for typelint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TL001 | `explicit-return-type` | Functions must declare an explicit return type |
//! | TL002 | `no-explicit-any` | Forbids explicit `any` annotations on variables |
//! | TL003 | `camel-case-naming` | Variable names must follow camelCase |
//! | TL004 | `prefer-enum-over-string` | Type-carrying variables must be enum-typed, not strings |
//!
//! ## Usage
//!
//! ```ignore
//! use typelint_core::Linter;
//! use typelint_rules::{ExplicitReturnType, NoExplicitAny};
//!
//! let linter = Linter::builder()
//!     .rule(ExplicitReturnType::new())
//!     .rule(NoExplicitAny::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod camel_case_naming;
mod explicit_return_type;
mod no_explicit_any;
mod prefer_enum_over_string;
mod presets;

pub use camel_case_naming::CamelCaseNaming;
pub use explicit_return_type::ExplicitReturnType;
pub use no_explicit_any::NoExplicitAny;
pub use prefer_enum_over_string::PreferEnumOverString;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};

/// Re-export core types for convenience.
pub use typelint_core::{Diagnostic, Finding, Rule, Severity};
