//! Rule to require relative imports inside a single slice.
//!
//! # Rationale
//!
//! Inside one slice (e.g. `entities/Article`), segments such as `model` and
//! `ui` should reach each other through relative paths. Going through the
//! public alias makes intra-slice coupling look like cross-slice coupling and
//! breaks when the slice is moved.
//!
//! # Scope
//!
//! All six layers are in scope, `app` included. The ESLint plugin this rule
//! comes from left `app` out of its layer list and so never flagged
//! same-slice imports under `app`.
//!
//! # Fix
//!
//! The violation carries the equivalent relative path, computed from the
//! importing file's directory:
//!
//! ```text
//! file:   src/entities/Article/ui/Article.tsx
//! import: @/entities/Article/model/slices/x
//! fix:    ../model/slices/x
//! ```

use fsd_lint_core::path::relative_path;
use fsd_lint_core::{Decision, ImportContext, ImportRule, RuleConfig, Severity, ViolationKind};

/// Rule code for path-checker.
pub const CODE: &str = "FSD002";

/// Rule name for path-checker.
pub const NAME: &str = "path-checker";

/// Requires relative imports between segments of the same slice.
#[derive(Debug, Clone)]
pub struct PathChecker {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PathChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl PathChecker {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl ImportRule for PathChecker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires relative imports within a single slice"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ImportContext<'_>, config: &RuleConfig) -> Decision {
        if ctx.is_relative() {
            return Decision::Allow;
        }

        let target = ctx.target(&config.alias);
        let (Some(to_layer), Some(to_slice)) = (target.layer(), non_empty(target.slice())) else {
            return Decision::Allow;
        };

        let Some(current) = ctx.current() else {
            return Decision::Allow;
        };
        let (Some(from_layer), Some(from_slice)) = (current.layer(), non_empty(current.slice()))
        else {
            return Decision::Allow;
        };

        if from_layer != to_layer || from_slice != to_slice {
            return Decision::Allow;
        }

        let fix = relative_path(current.parent_dir(), target.segments());
        Decision::violation_with_fix(ViolationKind::RelativePathRequired, fix)
    }
}

fn non_empty(segment: Option<&str>) -> Option<&str> {
    segment.filter(|s| !s.is_empty())
}
