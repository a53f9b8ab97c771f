//! # fsd-lint-rules
//!
//! Built-in Feature-Sliced Design import rules for fsd-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | FSD001 | `layer-imports` | Forbids imports from higher layers into lower ones |
//! | FSD002 | `path-checker` | Requires relative imports within a single slice |
//! | FSD003 | `public-api-imports` | Allows absolute imports only from a slice's public API |
//!
//! ## Usage
//!
//! ```ignore
//! use fsd_lint_core::{Analyzer, ImportEdge};
//! use fsd_lint_rules::{LayerImports, PublicApiImports};
//!
//! let analyzer = Analyzer::builder()
//!     .rule(LayerImports::new())
//!     .rule(PublicApiImports::new())
//!     .build();
//!
//! let violations = analyzer.check_edge(&ImportEdge::new(path, "@/widgets/Header"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod layer_imports;
mod path_checker;
mod presets;
mod public_api_imports;

pub use layer_imports::LayerImports;
pub use path_checker::PathChecker;
pub use presets::{
    all_rules, minimal_rules, recommended_rules, rule_by_name, Preset, UnknownPreset,
};
pub use public_api_imports::PublicApiImports;

/// Re-export core types for convenience.
pub use fsd_lint_core::{Decision, ImportRule, Severity, Violation, ViolationKind};
