//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

const CONFIG_NAME: &str = "fsd-lint.toml";

const DEFAULT_CONFIG: &str = r#"# fsd-lint configuration

# Rule preset: "recommended" (all rules) or "minimal" (layer-imports only)
preset = "recommended"

# Lowest severity that fails the run: "error", "warning" or "info"
fail_on = "error"

# Prefix of absolute imports, e.g. "@" for "@/entities/Article"
alias = "@"

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.layer-imports]
enabled = true
# severity = "warning"  # Override default severity
# Imports matching these globs skip the layer check
ignore_import_patterns = ["**/StoreProvider"]

[rules.path-checker]
enabled = true

[rules.public-api-imports]
enabled = true
# Files matching these globs may import from `<layer>/<slice>/testing`
test_files_patterns = ["**/*.test.ts", "**/*.test.tsx", "**/*.stories.tsx", "**/StoreDecorator.tsx"]
"#;

/// Runs the init command.
pub fn run(dir: &Path, force: bool) -> Result<()> {
    let config_path = write_config(dir, force)?;

    println!("Created {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_NAME} to configure rules");
    println!("  2. Run: fsd-lint check-edges imports.jsonl");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_NAME);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsd_lint_core::{Config, Severity};
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset.as_deref(), Some("recommended"));
        assert_eq!(config.fail_on(), Severity::Error);
        assert_eq!(config.rule_config("path-checker").alias, "@");
        assert_eq!(
            config.rule_config("public-api-imports").test_files_patterns.len(),
            4
        );
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_NAME), "alias = \"~\"\n").unwrap();

        assert!(write_config(tmp.path(), false).is_err());
        let kept = std::fs::read_to_string(tmp.path().join(CONFIG_NAME)).unwrap();
        assert_eq!(kept, "alias = \"~\"\n");

        let path = write_config(tmp.path(), true).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), DEFAULT_CONFIG);
    }
}
