//! Rule presets for common configurations.

use std::str::FromStr;

use crate::{LayerImports, PathChecker, PublicApiImports};
use fsd_lint_core::RuleBox;

/// Preset configurations for fsd-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// All rules.
    #[default]
    Recommended,
    /// Layer boundaries only, for gradual adoption.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Minimal => minimal_rules(),
        }
    }

    /// Resolves an optional preset name, defaulting to `recommended`.
    ///
    /// # Errors
    ///
    /// Returns an error for names other than `recommended` and `minimal`.
    pub fn resolve(name: Option<&str>) -> Result<Self, UnknownPreset> {
        name.map_or(Ok(Self::default()), str::parse)
    }
}

/// Error returned for an unrecognized preset name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preset `{0}`. Valid presets: recommended, minimal")]
pub struct UnknownPreset(pub String);

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recommended" => Ok(Self::Recommended),
            "minimal" => Ok(Self::Minimal),
            other => Err(UnknownPreset(other.to_string())),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `layer-imports` (FSD001) - Forbids upward layer imports
/// - `path-checker` (FSD002) - Requires relative imports inside a slice
/// - `public-api-imports` (FSD003) - Restricts imports to slice public APIs
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes `layer-imports`.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(LayerImports::new())]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(LayerImports::new()),
        Box::new(PathChecker::new()),
        Box::new(PublicApiImports::new()),
    ]
}

/// Looks up a single rule by name or code.
#[must_use]
pub fn rule_by_name(name: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|r| r.name() == name || r.code() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_rules() {
        assert_eq!(Preset::Recommended.rules().len(), 3);
        assert_eq!(Preset::Minimal.rules().len(), 1);
    }

    #[test]
    fn resolves_preset_names() {
        assert_eq!(Preset::resolve(None), Ok(Preset::Recommended));
        assert_eq!(Preset::resolve(Some("minimal")), Ok(Preset::Minimal));
        assert!(Preset::resolve(Some("strict")).is_err());
    }

    #[test]
    fn finds_rules_by_name_or_code() {
        assert_eq!(rule_by_name("path-checker").map(|r| r.code()), Some("FSD002"));
        assert_eq!(rule_by_name("FSD003").map(|r| r.name()), Some("public-api-imports"));
        assert!(rule_by_name("no-unwrap-expect").is_none());
    }

    #[test]
    fn rule_identities_are_unique() {
        let rules = all_rules();
        for (i, a) in rules.iter().enumerate() {
            for b in &rules[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
