//! Configuration types for fsd-lint.

use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::types::Severity;

/// Top-level configuration, usually loaded from `fsd-lint.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use ("recommended" or "minimal").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity at or above which a run fails (default: error).
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Import alias shared by all rules, e.g. `"@"`.
    #[serde(default)]
    pub alias: String,

    /// Per-rule settings keyed by rule name.
    #[serde(default)]
    pub rules: HashMap<String, RuleSettings>,

    /// Alias that wins over every configured alias (set by the host, never read from TOML).
    #[serde(skip)]
    pub alias_override: Option<String>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// Glob patterns are compiled here, so an invalid pattern is a parse error.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |s| s.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|s| s.severity)
    }

    /// The failure threshold, defaulting to [`Severity::Error`].
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.fail_on.unwrap_or(Severity::Error)
    }

    /// Forces `alias` for every rule, per-rule aliases included.
    #[must_use]
    pub fn with_alias_override(mut self, alias: impl Into<String>) -> Self {
        self.alias_override = Some(alias.into());
        self
    }

    /// Resolves the effective [`RuleConfig`] for a rule.
    ///
    /// Alias precedence: override, then rule-level alias, then top-level alias.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> RuleConfig {
        let settings = self.rules.get(rule_name);
        let alias = self
            .alias_override
            .clone()
            .or_else(|| settings.and_then(|s| s.alias.clone()))
            .unwrap_or_else(|| self.alias.clone());

        RuleConfig {
            alias,
            ignore_import_patterns: settings
                .map(|s| s.ignore_import_patterns.clone())
                .unwrap_or_default(),
            test_files_patterns: settings
                .map(|s| s.test_files_patterns.clone())
                .unwrap_or_default(),
        }
    }
}

/// Settings for one rule as written in the config file.
///
/// Option keys also accept the camelCase spelling used by the ESLint plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSettings {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Alias override for this rule.
    #[serde(default)]
    pub alias: Option<String>,

    /// Import specifiers exempt from `layer-imports`.
    #[serde(default, alias = "ignoreImportPatterns")]
    pub ignore_import_patterns: PatternList,

    /// File paths treated as test context by `public-api-imports`.
    #[serde(default, alias = "testFilesPatterns")]
    pub test_files_patterns: PatternList,
}

/// Effective configuration for a single rule invocation.
///
/// Immutable for the duration of a check; rules only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleConfig {
    /// Literal prefix stripped from absolute import specifiers (`""` = none).
    pub alias: String,
    /// Specifiers matching any of these are exempt from `layer-imports`.
    pub ignore_import_patterns: PatternList,
    /// File paths matching any of these count as test context.
    pub test_files_patterns: PatternList,
}

impl RuleConfig {
    /// Creates a configuration with no alias and no patterns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    /// Sets the ignored import patterns.
    #[must_use]
    pub fn with_ignore_import_patterns(mut self, patterns: PatternList) -> Self {
        self.ignore_import_patterns = patterns;
        self
    }

    /// Sets the test file patterns.
    #[must_use]
    pub fn with_test_files_patterns(mut self, patterns: PatternList) -> Self {
        self.test_files_patterns = patterns;
        self
    }
}

/// An ordered list of compiled glob patterns.
///
/// `*` and `?` never match `/`; `**` spans directories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PatternList {
    patterns: Vec<Pattern>,
}

impl PatternList {
    /// Compiles a list of glob patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Pattern`] for the first invalid pattern.
    pub fn new<I, S>(patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|e| ConfigError::Pattern {
                    pattern: p.to_string(),
                    message: e.msg.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns `true` if no patterns are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if any pattern matches `candidate`.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let options = match_options();
        self.patterns
            .iter()
            .any(|p| p.matches_with(candidate, options))
    }

    /// The source text of each pattern.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }
}

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

impl TryFrom<Vec<String>> for PatternList {
    type Error = ConfigError;

    fn try_from(patterns: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(patterns)
    }
}

impl From<PatternList> for Vec<String> {
    fn from(list: PatternList) -> Self {
        list.iter().map(String::from).collect()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A glob pattern failed to compile.
    #[error("Invalid glob pattern '{pattern}': {message}")]
    Pattern {
        /// The offending pattern.
        pattern: String,
        /// Why it was rejected.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.rules.is_empty());
        assert_eq!(config.fail_on(), Severity::Error);
        assert!(config.is_rule_enabled("layer-imports"));
        assert_eq!(config.rule_config("layer-imports"), RuleConfig::default());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
preset = "recommended"
fail_on = "warning"
alias = "@"

[rules.layer-imports]
severity = "warning"
ignore_import_patterns = ["**/StoreProvider", "**/testing"]

[rules.path-checker]
enabled = false

[rules.public-api-imports]
alias = "~"
test_files_patterns = ["**/*.test.ts", "**/StoreDecorator.tsx"]
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.fail_on(), Severity::Warning);
        assert!(!config.is_rule_enabled("path-checker"));
        assert_eq!(config.rule_severity("layer-imports"), Some(Severity::Warning));

        let layer = config.rule_config("layer-imports");
        assert_eq!(layer.alias, "@");
        assert_eq!(layer.ignore_import_patterns.len(), 2);
        assert!(layer.test_files_patterns.is_empty());

        let public = config.rule_config("public-api-imports");
        assert_eq!(public.alias, "~");
        assert!(public.test_files_patterns.matches("/p/src/entities/a.test.ts"));
    }

    #[test]
    fn alias_override_beats_rule_alias() {
        let toml = r#"
alias = "~"

[rules.layer-imports]
alias = "~"
"#;
        let config = Config::parse(toml).unwrap().with_alias_override("@");
        assert_eq!(config.rule_config("layer-imports").alias, "@");
        assert_eq!(config.rule_config("path-checker").alias, "@");
    }

    #[test]
    fn alias_override_is_not_read_from_toml() {
        let config = Config::parse("alias_override = \"@\"").unwrap();
        assert_eq!(config.alias_override, None);
        assert_eq!(config.rule_config("layer-imports").alias, "");
    }

    #[test]
    fn accepts_camel_case_option_keys() {
        let toml = r#"
[rules.layer-imports]
ignoreImportPatterns = ["**/StoreProvider"]

[rules.public-api-imports]
testFilesPatterns = ["**/*.test.ts"]
"#;
        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(
            config.rule_config("layer-imports").ignore_import_patterns.len(),
            1
        );
        assert_eq!(
            config.rule_config("public-api-imports").test_files_patterns.len(),
            1
        );
    }

    #[test]
    fn rejects_invalid_pattern() {
        let toml = r#"
[rules.layer-imports]
ignore_import_patterns = ["[unclosed"]
"#;
        let err = Config::parse(toml).unwrap_err();
        assert!(err.to_string().contains("[unclosed"), "{err}");
    }

    #[test]
    fn rejects_unknown_rule_option() {
        let toml = r#"
[rules.layer-imports]
ignore_patterns = ["**/x"]
"#;
        assert!(Config::parse(toml).is_err());
    }

    #[test]
    fn rejects_unknown_severity() {
        assert!(Config::parse("fail_on = \"fatal\"").is_err());
    }

    #[test]
    fn star_does_not_cross_separators() {
        let list = PatternList::new(["*.test.ts"]).unwrap();
        assert!(list.matches("file.test.ts"));
        assert!(!list.matches("src/file.test.ts"));

        let list = PatternList::new(["**/*.test.ts"]).unwrap();
        assert!(list.matches("C:/Users/tim/project/src/entities/file.test.ts"));
        assert!(!list.matches("C:/Users/tim/project/src/entities/forbidden.ts"));
    }

    #[test]
    fn pattern_list_round_trips_source_text() {
        let list = PatternList::new(["**/StoreProvider", "@/shared/**"]).unwrap();
        let texts: Vec<String> = list.into();
        assert_eq!(texts, vec!["**/StoreProvider", "@/shared/**"]);
    }
}
