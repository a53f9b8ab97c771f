//! Check command implementation.

use anyhow::Result;
use fsd_lint_core::ImportEdge;

use crate::config_resolver::ConfigSource;
use crate::CheckOptions;

/// Runs the check command over the imports of one file.
pub fn run(
    file: &str,
    imports: &[String],
    options: &CheckOptions,
    source: &ConfigSource,
) -> Result<()> {
    let analyzer = super::build_analyzer(source, options)?;
    let edges = edges_for(file, imports);
    super::run_edges(&analyzer, &edges, options)
}

/// One edge per specifier, numbered by argument position.
fn edges_for(file: &str, imports: &[String]) -> Vec<ImportEdge> {
    imports
        .iter()
        .enumerate()
        .map(|(i, spec)| ImportEdge::new(file, spec.as_str()).at(i + 1, 1))
        .collect()
}
