//! Rule to restrict absolute imports to a slice's public API.
//!
//! # Rationale
//!
//! Every slice in `entities`, `features`, `widgets` and `pages` exposes one
//! production surface (its root `index.ts`) and optionally one test-fixture
//! surface (`testing.ts`). Reaching into `model/`, `ui/` and so on from
//! outside couples consumers to the slice's internal layout.
//!
//! # Detected Patterns
//!
//! - `@/entities/Article/model/file.ts`: deep import, fixed to `@/entities/Article`
//! - `@/entities/Article/testing` from a non-test file
//!
//! Files outside the source root are not checked, nor are specifiers with an
//! empty slice segment.
//!
//! # Configuration
//!
//! - `alias`: prefix stripped from absolute imports (e.g. `"@"`)
//! - `test_files_patterns`: globs matched against the importing file's path;
//!   matching files may import the testing API

use fsd_lint_core::{Decision, ImportContext, ImportRule, RuleConfig, Severity, ViolationKind};

/// Rule code for public-api-imports.
pub const CODE: &str = "FSD003";

/// Rule name for public-api-imports.
pub const NAME: &str = "public-api-imports";

/// Segment name of the testing entry point.
pub const TESTING_SEGMENT: &str = "testing";

/// Depth of a public API specifier: `layer/slice`.
const PUBLIC_API_DEPTH: usize = 2;

/// Restricts absolute imports to `layer/slice` and `layer/slice/testing`.
#[derive(Debug, Clone)]
pub struct PublicApiImports {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for PublicApiImports {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicApiImports {
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

impl ImportRule for PublicApiImports {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Allows absolute imports only from a slice's public API"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &ImportContext<'_>, config: &RuleConfig) -> Decision {
        if ctx.is_relative() || ctx.current().is_none() {
            return Decision::Allow;
        }

        let target = ctx.target(&config.alias);
        let Some(layer) = target.layer().filter(|l| l.has_public_api()) else {
            return Decision::Allow;
        };

        if target.depth() <= PUBLIC_API_DEPTH {
            return Decision::Allow;
        }

        // `layer//x` names no slice, so there is no public API to point at.
        let Some(slice) = target.slice().filter(|s| !s.is_empty()) else {
            return Decision::Allow;
        };

        let is_testing_api = target.depth() == PUBLIC_API_DEPTH + 1
            && target.remainder().first().map(String::as_str) == Some(TESTING_SEGMENT);

        if is_testing_api {
            return if config.test_files_patterns.matches(ctx.normalized_file()) {
                Decision::Allow
            } else {
                Decision::violation(ViolationKind::TestingApiMisuse)
            };
        }

        Decision::violation_with_fix(
            ViolationKind::PublicApiOnly,
            public_api_path(&config.alias, layer.as_str(), slice),
        )
    }
}

/// Builds the canonical `<alias>/<layer>/<slice>` specifier.
fn public_api_path(alias: &str, layer: &str, slice: &str) -> String {
    if alias.is_empty() {
        format!("{layer}/{slice}")
    } else {
        format!("{alias}/{layer}/{slice}")
    }
}
