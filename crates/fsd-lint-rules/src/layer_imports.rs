//! Rule to forbid imports from higher layers into lower ones.
//!
//! # Rationale
//!
//! Layers form a one-directional dependency graph: `app` may use anything
//! beneath it, `shared` may use only itself. Importing upwards couples
//! low-level code to the screens that consume it.
//!
//! # Scope
//!
//! - Relative imports are never checked.
//! - Imports whose first segment is not a layer (third-party packages) are
//!   never checked, nor are files outside a recognized layer.
//!
//! # Configuration
//!
//! - `alias`: prefix stripped from absolute imports (e.g. `"@"`)
//! - `ignore_import_patterns`: globs matched against the raw specifier;
//!   matching imports are exempt

use fsd_lint_core::{Decision, ImportContext, ImportRule, RuleConfig, Severity, ViolationKind};
use tracing::debug;

/// Rule code for layer-imports.
pub const CODE: &str = "FSD001";

/// Rule name for layer-imports.
pub const NAME: &str = "layer-imports";

/// Forbids imports that go against the layer dependency table.
#[derive(Debug, Clone)]
pub struct LayerImports {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for LayerImports {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerImports {
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

impl ImportRule for LayerImports {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids imports from higher layers into lower ones"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ImportContext<'_>, config: &RuleConfig) -> Decision {
        if ctx.is_relative() {
            return Decision::Allow;
        }

        let target = ctx.target(&config.alias);
        let (Some(from), Some(to)) = (ctx.current_layer(), target.layer()) else {
            return Decision::Allow;
        };

        if config.ignore_import_patterns.matches(ctx.specifier()) {
            debug!("{NAME}: ignoring '{}' by pattern", ctx.specifier());
            return Decision::Allow;
        }

        if from.may_import(to) {
            Decision::Allow
        } else {
            Decision::violation(ViolationKind::LayerBoundary)
        }
    }
}
