//! Core types for lint violations and results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::rule::{Finding, ViolationKind};

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location of an import statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// File path as supplied by the host.
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

impl Location {
    /// Creates a new location.
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// A suggested fix for a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
    /// Optional automatic replacement.
    pub replacement: Option<Replacement>,
}

impl Suggestion {
    /// Creates a new suggestion with automatic fix.
    #[must_use]
    pub fn with_fix(message: impl Into<String>, replacement: Replacement) -> Self {
        Self {
            message: message.into(),
            replacement: Some(replacement),
        }
    }
}

/// Replacement of an import specifier literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Location of the specifier to replace.
    pub location: Location,
    /// The specifier as written.
    pub old_text: String,
    /// The corrected specifier.
    pub new_text: String,
}

impl Replacement {
    /// Creates a new replacement.
    #[must_use]
    pub fn new(
        location: Location,
        old_text: impl Into<String>,
        new_text: impl Into<String>,
    ) -> Self {
        Self {
            location,
            old_text: old_text.into(),
            new_text: new_text.into(),
        }
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "FSD001").
    pub code: String,
    /// Rule name (e.g., "layer-imports").
    pub rule: String,
    /// Violation category.
    pub kind: ViolationKind,
    /// Severity of this violation.
    pub severity: Severity,
    /// Location of the offending import.
    pub location: Location,
    /// The import specifier as written.
    pub specifier: String,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<Suggestion>,
}

impl Violation {
    /// Creates a violation from a rule finding.
    ///
    /// A finding with a fix becomes a [`Suggestion`] carrying a
    /// [`Replacement`] of the specifier.
    #[must_use]
    pub fn from_finding(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        specifier: impl Into<String>,
        finding: Finding,
    ) -> Self {
        let specifier = specifier.into();
        let suggestion = finding.fix.map(|fix| {
            Suggestion::with_fix(
                format!("import from '{fix}'"),
                Replacement::new(location.clone(), specifier.clone(), fix),
            )
        });

        Self {
            code: code.into(),
            rule: rule.into(),
            kind: finding.kind,
            severity,
            location,
            specifier,
            message: finding.message,
            suggestion,
        }
    }

    /// The corrected specifier, if this violation is auto-fixable.
    #[must_use]
    pub fn fix(&self) -> Option<&str> {
        self.suggestion
            .as_ref()
            .and_then(|s| s.replacement.as_ref())
            .map(|r| r.new_text.as_str())
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code, self.rule, self.location.file, self.location.line, self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        let _ = writeln!(output, "  = import: '{}'", self.specifier);
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file,
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )?;
        if let Some(fix) = self.fix() {
            write!(f, " (fix: '{fix}')")?;
        }
        Ok(())
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of distinct files checked.
    pub files_checked: usize,
    /// Number of import edges checked.
    pub imports_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |s: Severity| self.violations.iter().filter(|v| v.severity == s).count();
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// All mechanical replacements, in report order.
    #[must_use]
    pub fn fixes(&self) -> Vec<&Replacement> {
        self.violations
            .iter()
            .filter_map(|v| v.suggestion.as_ref()?.replacement.as_ref())
            .collect()
    }

    /// Sorts violations by file, line, column, then rule code.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .cmp(&b.location)
                .then_with(|| a.code.cmp(&b.code))
        });
    }

    /// Formats violations at or above `fail_on` as a multi-line report.
    #[must_use]
    pub fn format_report(&self, fail_on: Severity) -> String {
        use std::fmt::Write;

        let failing: Vec<&Violation> = self
            .violations
            .iter()
            .filter(|v| v.severity >= fail_on)
            .collect();

        let mut report = String::new();
        let _ = writeln!(
            report,
            "=== fsd-lint: {} violation(s) ===\n",
            failing.len()
        );

        for v in &failing {
            let _ = writeln!(report, "{}", v.format());
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Total: {} error(s), {} warning(s), {} info(s) in {} file(s)",
            errors, warnings, infos, self.files_checked
        );

        report
    }

    /// Distinct files that have at least one violation.
    #[must_use]
    pub fn files_with_violations(&self) -> BTreeSet<&str> {
        self.violations
            .iter()
            .map(|v| v.location.file.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::from_finding(
            "FSD001",
            "layer-imports",
            severity,
            Location::new("/p/src/features/Article/index.ts", 3, 21),
            "@/widgets/Article",
            Finding::new(ViolationKind::LayerBoundary),
        )
    }

    fn make_fixable() -> Violation {
        Violation::from_finding(
            "FSD003",
            "public-api-imports",
            Severity::Error,
            Location::new("/p/src/pages/Main/ui/Main.tsx", 1, 8),
            "@/entities/Article/model/file.ts",
            Finding::new(ViolationKind::PublicApiOnly).with_fix("@/entities/Article"),
        )
    }

    #[test]
    fn finding_without_fix_has_no_suggestion() {
        let v = make_violation(Severity::Error);
        assert!(v.suggestion.is_none());
        assert_eq!(v.fix(), None);
        assert_eq!(v.kind, ViolationKind::LayerBoundary);
    }

    #[test]
    fn finding_fix_becomes_replacement() {
        let v = make_fixable();
        assert_eq!(v.fix(), Some("@/entities/Article"));
        let r = v.suggestion.as_ref().and_then(|s| s.replacement.as_ref()).unwrap();
        assert_eq!(r.old_text, "@/entities/Article/model/file.ts");
        assert_eq!(r.location, v.location);
    }

    #[test]
    fn violation_display_includes_fix() {
        let display = format!("{}", make_fixable());
        assert!(display.starts_with("/p/src/pages/Main/ui/Main.tsx:1:8: error [FSD003]"));
        assert!(display.ends_with("(fix: '@/entities/Article')"));
    }

    #[test]
    fn violation_display_omits_fix_when_none() {
        let display = format!("{}", make_violation(Severity::Error));
        assert!(!display.contains("fix:"));
    }

    #[test]
    fn has_violations_at_error_only() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
        assert!(!result.has_errors());
    }

    #[test]
    fn counts_and_fixes() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_fixable());
        result.violations.push(make_violation(Severity::Info));
        assert_eq!(result.count_by_severity(), (1, 1, 1));
        assert_eq!(result.fixes().len(), 1);
        assert_eq!(result.files_with_violations().len(), 2);
    }

    #[test]
    fn sort_orders_by_location() {
        let mut result = LintResult::new();
        result.violations.push(make_fixable());
        result.violations.push(make_violation(Severity::Error));
        result.sort();
        assert_eq!(result.violations[0].code, "FSD001");
    }

    #[test]
    fn format_report_filters_by_severity() {
        let mut result = LintResult::new();
        result.files_checked = 2;
        result.violations.push(make_violation(Severity::Warning));
        result.violations.push(make_fixable());

        let report = result.format_report(Severity::Error);
        assert!(report.contains("1 violation(s)"));
        assert!(report.contains("1 error(s), 1 warning(s)"));
        assert!(!report.contains("FSD001"));
    }

    #[test]
    fn format_report_snapshot() {
        let mut result = LintResult::new();
        result.files_checked = 1;
        result.violations.push(make_fixable());

        insta::assert_snapshot!(result.format_report(Severity::Error));
    }
}
