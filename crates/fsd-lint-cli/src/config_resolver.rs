//! Locating and loading `fsd-lint.toml`.
//!
//! Lookup order: the `--config` flag, then `fsd-lint.toml` or
//! `.fsd-lint.toml` in the project directory, then `config.toml` in the
//! global directory (`$FSD_LINT_CONFIG_DIR`, else `~/.fsd-lint`). Without a
//! file the built-in defaults apply: recommended preset, no alias, fail on
//! errors.

use anyhow::{Context, Result};
use fsd_lint_core::Config;
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
pub const PROJECT_CONFIG_NAMES: &[&str] = &["fsd-lint.toml", ".fsd-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given with `--config`; must exist.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Found in the global config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Finds the configuration for `project_dir`.
    #[must_use]
    pub fn locate(project_dir: &Path, explicit: Option<&Path>) -> Self {
        Self::locate_in(project_dir, explicit, global_config_dir().as_deref())
    }

    fn locate_in(project_dir: &Path, explicit: Option<&Path>, global_dir: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::Explicit(path.to_path_buf());
        }

        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| project_dir.join(name))
            .find(|p| p.is_file())
            .map(Self::Project)
            .or_else(|| {
                global_dir
                    .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
                    .filter(|p| p.is_file())
                    .map(Self::Global)
            })
            .unwrap_or(Self::Default)
    }

    fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Loads the configuration, forcing `alias` on every rule when given.
    ///
    /// The forced alias beats both the top-level and per-rule `alias` keys.
    pub fn load(&self, alias: Option<&str>) -> Result<Config> {
        let config = match self.path() {
            Some(path) => {
                tracing::debug!("Loading config: {}", path.display());
                Config::from_file(path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?
            }
            None => {
                tracing::debug!("No fsd-lint config found, using defaults");
                Config::default()
            }
        };

        Ok(match alias {
            Some(alias) => config.with_alias_override(alias),
            None => config,
        })
    }
}

/// The global config directory: `$FSD_LINT_CONFIG_DIR`, else `~/.fsd-lint`.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("FSD_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".fsd-lint"))
}
