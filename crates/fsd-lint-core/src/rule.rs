//! Rule trait and the decision values rules produce.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::RuleConfig;
use crate::context::ImportContext;
use crate::types::Severity;

/// Category of an architectural violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// A layer imports from a layer it may not depend on.
    LayerBoundary,
    /// An absolute import stays inside the importing file's own slice.
    RelativePathRequired,
    /// An absolute import reaches beneath a slice's public API.
    PublicApiOnly,
    /// Production code imports a slice's testing API.
    TestingApiMisuse,
}

impl ViolationKind {
    /// The stable message reported for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LayerBoundary => {
                "A layer may only import from the layers beneath it (shared, entities, features, widgets, pages, app)"
            }
            Self::RelativePathRequired => "Imports within a single slice must be relative",
            Self::PublicApiOnly => {
                "Absolute imports are only allowed from the slice public API (index.ts)"
            }
            Self::TestingApiMisuse => {
                "Test data must be imported from the slice testing API (testing.ts), and only into test files"
            }
        }
    }

    /// Kebab-case tag, as serialized.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LayerBoundary => "layer-boundary",
            Self::RelativePathRequired => "relative-path-required",
            Self::PublicApiOnly => "public-api-only",
            Self::TestingApiMisuse => "testing-api-misuse",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A policy violation found by a rule, before it is placed in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// What went wrong.
    pub kind: ViolationKind,
    /// Human-readable message.
    pub message: String,
    /// Corrected import specifier, when one is mechanically derivable.
    pub fix: Option<String>,
}

impl Finding {
    /// Creates a finding with the kind's default message and no fix.
    #[must_use]
    pub fn new(kind: ViolationKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
            fix: None,
        }
    }

    /// Attaches a corrected specifier.
    #[must_use]
    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }
}

/// Outcome of checking one import edge with one rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The import is architecturally legal, or out of the rule's scope.
    Allow,
    /// The import breaks the rule.
    Violation(Finding),
}

impl Decision {
    /// Shorthand for a violation of `kind` without a fix.
    #[must_use]
    pub fn violation(kind: ViolationKind) -> Self {
        Self::Violation(Finding::new(kind))
    }

    /// Shorthand for a violation of `kind` carrying a corrected specifier.
    #[must_use]
    pub fn violation_with_fix(kind: ViolationKind, fix: impl Into<String>) -> Self {
        Self::Violation(Finding::new(kind).with_fix(fix))
    }

    /// Returns `true` for [`Decision::Allow`].
    #[must_use]
    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// The finding, if this is a violation.
    #[must_use]
    pub fn finding(&self) -> Option<&Finding> {
        match self {
            Self::Allow => None,
            Self::Violation(f) => Some(f),
        }
    }

    /// The violation kind, if this is a violation.
    #[must_use]
    pub fn kind(&self) -> Option<ViolationKind> {
        self.finding().map(|f| f.kind)
    }

    /// The suggested specifier, if any.
    #[must_use]
    pub fn fix(&self) -> Option<&str> {
        self.finding().and_then(|f| f.fix.as_deref())
    }
}

/// A per-import lint rule.
///
/// Rules are pure: `check` sees one import edge and the rule's configuration,
/// and must not keep state between calls. Anything a rule cannot place inside
/// the layer vocabulary resolves to [`Decision::Allow`].
///
/// # Example
///
/// ```ignore
/// use fsd_lint_core::{Decision, ImportContext, ImportRule, Layer, RuleConfig, ViolationKind};
///
/// pub struct NoSharedToApp;
///
/// impl ImportRule for NoSharedToApp {
///     fn name(&self) -> &'static str { "no-shared-to-app" }
///     fn code(&self) -> &'static str { "FSD100" }
///
///     fn check(&self, ctx: &ImportContext<'_>, config: &RuleConfig) -> Decision {
///         let target = ctx.target(&config.alias);
///         match (ctx.current_layer(), target.layer()) {
///             (Some(Layer::Shared), Some(Layer::App)) => {
///                 Decision::violation(ViolationKind::LayerBoundary)
///             }
///             _ => Decision::Allow,
///         }
///     }
/// }
/// ```
pub trait ImportRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "layer-imports").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "FSD001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Decides whether one import edge is legal under this rule.
    fn check(&self, ctx: &ImportContext<'_>, config: &RuleConfig) -> Decision;
}

/// Type alias for boxed [`ImportRule`] trait objects.
pub type RuleBox = Box<dyn ImportRule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysDeny;

    impl ImportRule for AlwaysDeny {
        fn name(&self) -> &'static str {
            "always-deny"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, _ctx: &ImportContext<'_>, _config: &RuleConfig) -> Decision {
            Decision::violation(ViolationKind::LayerBoundary)
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = AlwaysDeny;
        assert_eq!(rule.name(), "always-deny");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);

        let ctx = ImportContext::new("/p/src/shared/ui/Button.tsx", "@/app/providers");
        let decision = rule.check(&ctx, &RuleConfig::default());
        assert_eq!(decision.kind(), Some(ViolationKind::LayerBoundary));
        assert_eq!(decision.fix(), None);
    }

    #[test]
    fn finding_uses_kind_message() {
        let d = Decision::violation_with_fix(ViolationKind::PublicApiOnly, "@/entities/Article");
        let f = d.finding().expect("violation");
        assert_eq!(f.message, ViolationKind::PublicApiOnly.message());
        assert_eq!(d.fix(), Some("@/entities/Article"));
        assert!(!d.is_allow());
        assert!(Decision::Allow.is_allow());
        assert_eq!(Decision::Allow.finding(), None);
    }

    #[test]
    fn kind_tags_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ViolationKind::TestingApiMisuse).unwrap(),
            "\"testing-api-misuse\""
        );
        assert_eq!(ViolationKind::RelativePathRequired.to_string(), "relative-path-required");
    }
}
