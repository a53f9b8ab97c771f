//! Subcommand implementations.

pub mod check;
pub mod check_edges;
pub mod init;
pub mod list_rules;
pub mod output;

use anyhow::{Context, Result};
use fsd_lint_core::{Analyzer, Config, ImportEdge, RuleBox};
use fsd_lint_rules::{rule_by_name, Preset};

use crate::config_resolver::ConfigSource;
use crate::CheckOptions;

/// Builds an analyzer from the resolved config and command-line options.
fn build_analyzer(source: &ConfigSource, options: &CheckOptions) -> Result<Analyzer> {
    let config = source.load(options.alias.as_deref())?;

    let rules = if let Some(filter) = &options.rules {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names)
    } else {
        preset_rules(&config)?
    };

    let analyzer = Analyzer::builder().config(config).rules(rules).build();
    tracing::info!("Checking imports with {} rules", analyzer.rule_count());
    Ok(analyzer)
}

fn preset_rules(config: &Config) -> Result<Vec<RuleBox>> {
    let preset = Preset::resolve(config.preset.as_deref()).context("Invalid preset")?;
    Ok(preset.rules())
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut rules = Vec::new();
    for name in names.iter().filter(|n| !n.is_empty()) {
        match rule_by_name(name) {
            Some(rule) => rules.push(rule),
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }
    rules
}

/// Runs the analyzer over `edges`, prints the result and exits non-zero
/// when a violation reaches the configured `fail_on` severity.
fn run_edges(analyzer: &Analyzer, edges: &[ImportEdge], options: &CheckOptions) -> Result<()> {
    let result = analyzer.analyze(edges);
    output::print(&result, options.format)?;

    if result.has_violations_at(analyzer.config().fail_on()) {
        std::process::exit(1);
    }

    Ok(())
}
