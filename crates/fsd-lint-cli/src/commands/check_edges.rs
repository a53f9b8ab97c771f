//! Check-edges command implementation.

use anyhow::{Context, Result};
use fsd_lint_core::read_edges;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::CheckOptions;

/// Runs the check-edges command over JSON Lines input.
pub fn run(input: &Path, options: &CheckOptions, source: &ConfigSource) -> Result<()> {
    let analyzer = super::build_analyzer(source, options)?;

    let edges = if input == Path::new("-") {
        read_edges(io::stdin().lock()).context("Failed to read edges from stdin")?
    } else {
        let file = File::open(input)
            .with_context(|| format!("Failed to open {}", input.display()))?;
        read_edges(BufReader::new(file))
            .with_context(|| format!("Failed to read edges from {}", input.display()))?
    };

    tracing::info!("Read {} import edges", edges.len());
    super::run_edges(&analyzer, &edges, options)
}
