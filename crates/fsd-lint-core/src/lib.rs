//! # fsd-lint-core
//!
//! Core framework for linting imports against the Feature-Sliced Design
//! layer convention.
//!
//! This crate provides the pieces every rule shares:
//!
//! - [`Layer`] and its dependency table
//! - [`ProjectPath`] / [`ImportTarget`] path classification
//! - [`ImportRule`] trait and the [`Decision`] it returns
//! - [`Analyzer`] for running rules over [`ImportEdge`]s
//! - [`Violation`] / [`LintResult`] for reporting
//!
//! ## Example
//!
//! ```ignore
//! use fsd_lint_core::{Analyzer, Config, ImportEdge};
//!
//! let analyzer = Analyzer::builder()
//!     .config(Config::from_file("fsd-lint.toml".as_ref())?)
//!     .rule(MyRule::new())
//!     .build();
//!
//! let edge = ImportEdge::new("src/features/Auth/ui/Form.tsx", "@/widgets/Header");
//! for violation in analyzer.check_edge(&edge) {
//!     println!("{violation}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod layer;
mod rule;
mod types;

/// Path classification shared by all rules.
pub mod path;

pub use analyzer::{read_edges, Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{Config, ConfigError, PatternList, RuleConfig, RuleSettings};
pub use context::{ImportContext, ImportEdge};
pub use layer::{Layer, UnknownLayer};
pub use path::{ImportTarget, ProjectPath, ROOT_MARKER};
pub use rule::{Decision, Finding, ImportRule, RuleBox, ViolationKind};
pub use types::{LintResult, Location, Replacement, Severity, Suggestion, Violation};
