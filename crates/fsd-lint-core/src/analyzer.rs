//! Core analyzer for running import rules over a stream of edges.

use crate::config::{Config, RuleConfig};
use crate::context::ImportEdge;
use crate::rule::{Decision, ImportRule, RuleBox};
use crate::types::{LintResult, Location, Violation};

use std::collections::HashSet;
use std::io::BufRead;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while feeding the analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading edge input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of edge input is not a valid edge record.
    #[error("Invalid import edge on line {line}: {message}")]
    Input {
        /// 1-indexed input line.
        line: usize,
        /// Decoder message.
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Reads JSON Lines import edges, skipping blank lines.
///
/// Each line is an object such as
/// `{"file": "src/pages/Main/ui/Main.tsx", "import": "@/widgets/Header", "line": 3}`.
///
/// # Errors
///
/// Returns an error on the first unreadable or malformed line.
pub fn read_edges<R: BufRead>(reader: R) -> Result<Vec<ImportEdge>, AnalyzerError> {
    let mut edges = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let edge = serde_json::from_str(&line).map_err(|e| AnalyzerError::Input {
            line: i + 1,
            message: e.to_string(),
        })?;
        edges.push(edge);
    }
    Ok(edges)
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: ImportRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules.
    #[must_use]
    pub fn rules<I: IntoIterator<Item = RuleBox>>(mut self, rules: I) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer, resolving each rule's configuration once.
    #[must_use]
    pub fn build(self) -> Analyzer {
        let config = self.config.unwrap_or_default();

        let rules = self
            .rules
            .into_iter()
            .filter(|rule| {
                let enabled = config.is_rule_enabled(rule.name());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .map(|rule| {
                let rule_config = config.rule_config(rule.name());
                let severity = config
                    .rule_severity(rule.name())
                    .unwrap_or_else(|| rule.default_severity());
                ConfiguredRule {
                    rule,
                    config: rule_config,
                    severity,
                }
            })
            .collect();

        Analyzer { rules, config }
    }
}

struct ConfiguredRule {
    rule: RuleBox,
    config: RuleConfig,
    severity: crate::types::Severity,
}

/// Runs every enabled rule against each import edge.
///
/// Rules are independent and stateless, so edges can be checked in any order.
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    rules: Vec<ConfiguredRule>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of enabled rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the configuration the analyzer was built with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs each rule on one edge and returns its raw decisions, keyed by rule name.
    #[must_use]
    pub fn decide(&self, edge: &ImportEdge) -> Vec<(&'static str, Decision)> {
        let ctx = edge.context();
        self.rules
            .iter()
            .map(|r| (r.rule.name(), r.rule.check(&ctx, &r.config)))
            .collect()
    }

    /// Checks one import edge against every enabled rule.
    #[must_use]
    pub fn check_edge(&self, edge: &ImportEdge) -> Vec<Violation> {
        let ctx = edge.context();
        let mut violations = Vec::new();

        for configured in &self.rules {
            let rule = &configured.rule;
            let Decision::Violation(finding) = rule.check(&ctx, &configured.config) else {
                continue;
            };

            debug!(
                "{} [{}] {} -> {}",
                rule.name(),
                finding.kind,
                edge.file,
                edge.specifier
            );

            violations.push(Violation::from_finding(
                rule.code(),
                rule.name(),
                configured.severity,
                Location::new(edge.file.clone(), edge.line, edge.column),
                edge.specifier.clone(),
                finding,
            ));
        }

        violations
    }

    /// Checks every edge and collects a sorted [`LintResult`].
    pub fn analyze<'e, I>(&self, edges: I) -> LintResult
    where
        I: IntoIterator<Item = &'e ImportEdge>,
    {
        let mut result = LintResult::new();
        let mut files: HashSet<&str> = HashSet::new();

        for edge in edges {
            files.insert(edge.file.as_str());
            result.imports_checked += 1;
            result.violations.extend(self.check_edge(edge));
        }

        result.files_checked = files.len();
        result.sort();

        info!(
            "Analysis complete: {} violations in {} imports across {} files",
            result.violations.len(),
            result.imports_checked,
            result.files_checked
        );

        result
    }
}
